//! Identifier sanitization shared by generators.

/// Strip every character that is not alphanumeric or an underscore.
///
/// Used on table and column names before they appear as emitted member
/// names; invalid characters are silently removed, never an error.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Strip every character that is not alphanumeric and lowercase the rest.
///
/// This is the normal form used for annotation name matching: underscores
/// are removed too, so `Home_Phone` and `HomePhone` normalize identically.
pub fn normalize_for_match(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_underscores() {
        assert_eq!(sanitize_identifier("First_Name"), "First_Name");
    }

    #[test]
    fn test_sanitize_strips_invalid() {
        assert_eq!(sanitize_identifier("First Name!"), "FirstName");
        assert_eq!(sanitize_identifier("Order#"), "Order");
        assert_eq!(sanitize_identifier("a-b.c"), "abc");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_identifier(""), "");
        assert_eq!(sanitize_identifier("!!!"), "");
    }

    #[test]
    fn test_normalize_strips_underscores_and_folds_case() {
        assert_eq!(normalize_for_match("Home_Phone"), "homephone");
        assert_eq!(normalize_for_match("EMailAddress"), "emailaddress");
    }
}

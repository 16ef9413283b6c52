//! Data-annotation inference.

use std::fmt;

use tabula_codegen::normalize_for_match;
use tabula_ir::ColumnSpec;

use crate::SemanticKind;

/// How semantic-category names are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The normalized column name must equal one of a category's tokens.
    Exact,
    /// Exact tokens still match, and so does any name containing one of a
    /// category's keywords as a substring.
    Contains,
}

/// A `System.ComponentModel.DataAnnotations` attribute applied to a
/// generated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Required,
    ReadOnly,
    StringLength(u32),
    Email,
    Phone,
    Password,
    CreditCard,
    PostalCode,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("[Required]"),
            Self::ReadOnly => f.write_str("[ReadOnly]"),
            Self::StringLength(len) => write!(f, "[StringLength({len})]"),
            Self::Email => f.write_str("[DataType(DataType.EmailAddress)]"),
            Self::Phone => f.write_str("[DataType(DataType.PhoneNumber)]"),
            Self::Password => f.write_str("[DataType(DataType.Password)]"),
            Self::CreditCard => f.write_str("[DataType(DataType.CreditCard)]"),
            Self::PostalCode => f.write_str("[DataType(DataType.PostalCode)]"),
        }
    }
}

/// One name-driven category: exact tokens for [`MatchMode::Exact`], keywords
/// for the additional substring matching in [`MatchMode::Contains`].
struct Category {
    annotation: Annotation,
    exact: &'static [&'static str],
    keywords: &'static [&'static str],
}

/// Checked in order; the order is part of the output contract.
const CATEGORIES: &[Category] = &[
    Category {
        annotation: Annotation::Email,
        exact: &["email", "emailaddress"],
        keywords: &["email"],
    },
    Category {
        annotation: Annotation::Phone,
        exact: &["phone", "phonenumber", "homephone", "cellphone"],
        keywords: &["phone"],
    },
    Category {
        annotation: Annotation::Password,
        exact: &["password"],
        keywords: &["password"],
    },
    Category {
        annotation: Annotation::CreditCard,
        exact: &["creditcard", "creditcardnumber"],
        keywords: &["creditcard"],
    },
    Category {
        annotation: Annotation::PostalCode,
        exact: &["zip", "zipcode", "postal", "postalcode"],
        keywords: &["zip", "postal"],
    },
];

/// Decide which annotations apply to a column.
///
/// Structural annotations come first (required, read-only, string-length),
/// then the name-driven categories, each checked independently — a column
/// may receive several. Every category is gated on the `Text` semantic
/// kind; non-text columns never receive a category annotation regardless of
/// their name. The output order is fixed and reproduced exactly.
pub fn infer_annotations(
    column: &ColumnSpec,
    kind: SemanticKind,
    mode: MatchMode,
) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    if !column.is_nullable {
        annotations.push(Annotation::Required);
    }

    if column.is_computed {
        annotations.push(Annotation::ReadOnly);
    }

    if kind == SemanticKind::Text && column.length > 0 {
        annotations.push(Annotation::StringLength(column.length));
    }

    if kind == SemanticKind::Text {
        let name = normalize_for_match(&column.name);
        for category in CATEGORIES {
            let exact = category.exact.iter().any(|token| *token == name);
            let fuzzy = mode == MatchMode::Contains
                && category.keywords.iter().any(|kw| name.contains(kw));
            if exact || fuzzy {
                annotations.push(category.annotation);
            }
        }
    }

    annotations
}

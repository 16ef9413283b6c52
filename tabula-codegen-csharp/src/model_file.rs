//! The C# class file template.

use crate::ImportFlags;

const BASE_USINGS: [&str; 3] = [
    "using System;",
    "using System.Collections.Generic;",
    "using System.Text;",
];

/// A rendered C# model file.
///
/// Property blocks arrive pre-assembled (annotations included); this type
/// owns the fixed file layout: using block, blank line, namespace and class
/// declarations, one property block per column separated by exactly one
/// blank line. The layout is byte-exact and pinned by snapshot tests.
pub struct ModelFile {
    pub namespace: String,
    pub class_name: String,
    /// One pre-rendered block per column, in column order.
    pub properties: Vec<String>,
    /// Import requirements unioned across all columns.
    pub imports: ImportFlags,
    /// Whether the data-annotations namespace is imported.
    pub data_annotations: bool,
}

impl ModelFile {
    pub fn render(&self) -> String {
        let mut usings = BASE_USINGS.join("\n");
        if self.imports.linq_xml {
            usings.push_str("\nusing System.Linq.Xml;");
        }
        if self.imports.sql_server_types {
            usings.push_str("\nusing Microsoft.SqlServer.Types;");
        }
        if self.data_annotations {
            usings.push_str("\nusing System.ComponentModel.DataAnnotations;");
        }

        format!(
            "{}\n\nnamespace {}\n{{\n\tpublic class {}\n\t{{\n\t\t{}\n\t}}\n}}",
            usings,
            self.namespace,
            self.class_name,
            self.properties.join("\n\n\t\t")
        )
    }
}

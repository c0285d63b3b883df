//! `sift catalog` -- print the loaded catalog.

use sift_core::Catalog;

use super::field_type_label;
use crate::OutputFormat;

pub(crate) fn cmd_catalog(catalog: &Catalog, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!("fields:");
            for field in catalog.fields() {
                println!("  {} ({})", field.name, field_type_label(field.field_type));
            }
            println!("operators:");
            for op in catalog.operators() {
                println!("  {:4} {}", op.symbol, op.label);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog).expect("catalog serializes")
            );
        }
    }
}

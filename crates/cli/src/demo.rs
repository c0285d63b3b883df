//! Built-in demo catalog, used when no `--catalog` file is given.

use sift_core::{Catalog, Field, FieldType, Operator};

pub(crate) fn demo_catalog() -> Catalog {
    let fields = [
        ("title", FieldType::Other),
        ("brand", FieldType::Other),
        ("price", FieldType::Other),
        ("rating", FieldType::Other),
        ("active", FieldType::Boolean),
        ("in_stock", FieldType::Boolean),
    ]
    .into_iter()
    .map(|(name, field_type)| Field {
        name: name.to_string(),
        field_type,
    })
    .collect();

    let operators = [
        ("=", "equals"),
        ("!=", "does not equal"),
        (">", "greater than"),
        ("<", "less than"),
        (">=", "greater than or equal"),
        ("<=", "less than or equal"),
        ("~", "contains"),
    ]
    .into_iter()
    .map(|(symbol, label)| Operator {
        symbol: symbol.to_string(),
        label: label.to_string(),
    })
    .collect();

    Catalog::new(fields, operators).expect("demo catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_constructs() {
        let catalog = demo_catalog();
        assert_eq!(catalog.fields().len(), 6);
        assert_eq!(catalog.operators().len(), 7);
        assert_eq!(
            catalog.field("in_stock").unwrap().field_type,
            FieldType::Boolean
        );
    }
}

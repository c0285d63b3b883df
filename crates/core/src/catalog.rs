//! Static catalog of selectable fields, operators, and boolean literals.
//!
//! Catalog data is loaded once at startup, validated on construction,
//! and read-only afterwards. The JSON wire format matches the
//! configuration shape: fields as `{"name": ..., "type": "BOOLEAN"|"OTHER"}`,
//! operators as `{"symbol": ..., "label": ...}`.

use serde::{Deserialize, Serialize};

use crate::token::FieldType;

/// A selectable field and its declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// An operator. Operators are global -- legality is not field-specific.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub symbol: String,
    pub label: String,
}

/// The fixed boolean literal pair, in suggestion order.
pub const BOOLEAN_LITERALS: [bool; 2] = [true, false];

/// One candidate the resolver can offer as the next token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Field(Field),
    Operator(Operator),
    Boolean { value: bool },
}

impl CatalogEntry {
    /// The text a dropdown would display. This is also what the
    /// suggestion text filter matches against.
    pub fn display_text(&self) -> &str {
        match self {
            CatalogEntry::Field(f) => &f.name,
            CatalogEntry::Operator(op) => &op.label,
            CatalogEntry::Boolean { value: true } => "true",
            CatalogEntry::Boolean { value: false } => "false",
        }
    }
}

/// Errors raised while constructing or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("field {index}: name must not be empty")]
    EmptyFieldName { index: usize },

    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    #[error("operator {index}: symbol must not be empty")]
    EmptyOperatorSymbol { index: usize },

    #[error("duplicate operator symbol: {symbol}")]
    DuplicateOperator { symbol: String },

    #[error("catalog JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable registry of fields and operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    fields: Vec<Field>,
    operators: Vec<Operator>,
}

// Raw wire shape; validation happens in `Catalog::new`.
#[derive(Deserialize)]
struct CatalogDoc {
    fields: Vec<Field>,
    operators: Vec<Operator>,
}

impl Catalog {
    /// Build a catalog, rejecting empty names/symbols and duplicates.
    pub fn new(fields: Vec<Field>, operators: Vec<Operator>) -> Result<Self, CatalogError> {
        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(CatalogError::EmptyFieldName { index });
            }
            if fields[..index].iter().any(|f| f.name == field.name) {
                return Err(CatalogError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        for (index, op) in operators.iter().enumerate() {
            if op.symbol.is_empty() {
                return Err(CatalogError::EmptyOperatorSymbol { index });
            }
            if operators[..index].iter().any(|o| o.symbol == op.symbol) {
                return Err(CatalogError::DuplicateOperator {
                    symbol: op.symbol.clone(),
                });
            }
        }
        Ok(Self { fields, operators })
    }

    /// Parse and validate the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Self::new(doc.fields, doc.operators)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up an operator by symbol.
    pub fn operator(&self, symbol: &str) -> Option<&Operator> {
        self.operators.iter().find(|o| o.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                Field {
                    name: "status".to_string(),
                    field_type: FieldType::Other,
                },
                Field {
                    name: "active".to_string(),
                    field_type: FieldType::Boolean,
                },
            ],
            vec![Operator {
                symbol: "=".to_string(),
                label: "equals".to_string(),
            }],
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_name_and_symbol() {
        let catalog = sample();
        assert_eq!(catalog.field("active").unwrap().field_type, FieldType::Boolean);
        assert_eq!(catalog.operator("=").unwrap().label, "equals");
        assert!(catalog.field("missing").is_none());
        assert!(catalog.operator("!=").is_none());
    }

    #[test]
    fn duplicate_field_name_rejected() {
        let err = Catalog::new(
            vec![
                Field {
                    name: "status".to_string(),
                    field_type: FieldType::Other,
                },
                Field {
                    name: "status".to_string(),
                    field_type: FieldType::Boolean,
                },
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateField { name } if name == "status"));
    }

    #[test]
    fn empty_operator_symbol_rejected() {
        let err = Catalog::new(
            vec![],
            vec![Operator {
                symbol: String::new(),
                label: "equals".to_string(),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyOperatorSymbol { index: 0 }));
    }

    #[test]
    fn from_json_parses_wire_format() {
        let catalog = Catalog::from_json(
            r#"{
                "fields": [
                    {"name": "status", "type": "OTHER"},
                    {"name": "active", "type": "BOOLEAN"}
                ],
                "operators": [
                    {"symbol": "=", "label": "equals"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.fields().len(), 2);
        assert_eq!(catalog.field("active").unwrap().field_type, FieldType::Boolean);
    }

    #[test]
    fn from_json_rejects_unknown_field_type() {
        let err = Catalog::from_json(
            r#"{"fields": [{"name": "x", "type": "NUMBER"}], "operators": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn display_text_per_entry_kind() {
        let catalog = sample();
        assert_eq!(
            CatalogEntry::Field(catalog.fields()[0].clone()).display_text(),
            "status"
        );
        assert_eq!(
            CatalogEntry::Operator(catalog.operators()[0].clone()).display_text(),
            "equals"
        );
        assert_eq!(CatalogEntry::Boolean { value: false }.display_text(), "false");
    }
}

//! Token data model: the atomic units of a filter expression.

use serde::{Deserialize, Serialize};

/// Declared type of a catalog field. Only the BOOLEAN case changes
/// behavior (it swaps free-text value entry for the literal pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "OTHER")]
    Other,
}

/// How a value token was produced -- typed free text or a picked
/// boolean literal. Decides quoting on serialization and whether the
/// token is editable in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueComponent {
    Text,
    Boolean,
}

/// One atomic unit of the expression, discriminated by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    Field {
        name: String,
        field_type: FieldType,
    },
    Operator {
        symbol: String,
    },
    Value {
        raw: String,
        component: ValueComponent,
    },
}

/// Kind discriminant without payload, for position checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Field,
    Operator,
    Value,
}

impl TokenKind {
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Field => "field",
            TokenKind::Operator => "operator",
            TokenKind::Value => "value",
        }
    }

    /// The kind a well-formed sequence requires at position `index`.
    /// Group boundaries are multiples of 3, so the kind cycles
    /// field, operator, value.
    pub fn expected_at(index: usize) -> TokenKind {
        match index % 3 {
            0 => TokenKind::Field,
            1 => TokenKind::Operator,
            _ => TokenKind::Value,
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Field { .. } => TokenKind::Field,
            Token::Operator { .. } => TokenKind::Operator,
            Token::Value { .. } => TokenKind::Value,
        }
    }

    pub fn field(name: impl Into<String>, field_type: FieldType) -> Token {
        Token::Field {
            name: name.into(),
            field_type,
        }
    }

    pub fn operator(symbol: impl Into<String>) -> Token {
        Token::Operator {
            symbol: symbol.into(),
        }
    }

    pub fn text_value(raw: impl Into<String>) -> Token {
        Token::Value {
            raw: raw.into(),
            component: ValueComponent::Text,
        }
    }

    pub fn boolean_value(value: bool) -> Token {
        Token::Value {
            raw: value.to_string(),
            component: ValueComponent::Boolean,
        }
    }
}

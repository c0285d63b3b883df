//! Expression state machine: the token sequence and its operations.
//!
//! The sequence is always a run of complete `[field, operator, value]`
//! groups, optionally followed by an incomplete prefix of the next
//! group. Group boundaries sit at multiples of 3; the deletion
//! operations rely on that. There is no stored mode -- what the
//! expression accepts next is derived from the tail of the sequence by
//! [`Expression::state`] on every call.
//!
//! All mutation operations are total: a violated precondition is a
//! no-op (signalled by the `bool` return), never an error. The only
//! fallible entry point is [`Expression::from_tokens`], which guards
//! pre-seeded sequences arriving from outside.

use std::fmt;

use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::token::{FieldType, Token, TokenKind, ValueComponent};

/// What the expression is ready to accept next, derived purely from
/// the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Empty,
    AwaitingField,
    AwaitingOperator,
    AwaitingValue(FieldType),
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditState::Empty => write!(f, "empty"),
            EditState::AwaitingField => write!(f, "awaiting-field"),
            EditState::AwaitingOperator => write!(f, "awaiting-operator"),
            EditState::AwaitingValue(FieldType::Boolean) => write!(f, "awaiting-value(boolean)"),
            EditState::AwaitingValue(FieldType::Other) => write!(f, "awaiting-value(text)"),
        }
    }
}

/// A pre-seeded token sequence that breaks the grouping invariant.
#[derive(Debug, thiserror::Error)]
pub enum MalformedExpression {
    #[error("token {index}: expected {expected}, found {found}")]
    WrongKind {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// The filter expression: an ordered token sequence upholding the
/// field -> operator -> value grouping invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validating constructor for pre-seeded sequences: every token's
    /// kind must match its position in the field/operator/value cycle.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, MalformedExpression> {
        for (index, token) in tokens.iter().enumerate() {
            let expected = TokenKind::expected_at(index);
            if token.kind() != expected {
                return Err(MalformedExpression::WrongKind {
                    index,
                    expected: expected.label(),
                    found: token.kind().label(),
                });
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Derive what the sequence accepts next from its last token.
    ///
    /// For `AwaitingValue` the field type is read from the token two
    /// positions back from the end -- the field opening the current
    /// group. This is position arithmetic, sound only while groups are
    /// fixed at three tokens; a variable-length group design would need
    /// a boundary search here instead. A tail with no field there
    /// degrades to free-text entry.
    pub fn state(&self) -> EditState {
        match self.tokens.last() {
            None => EditState::Empty,
            Some(Token::Value { .. }) => EditState::AwaitingField,
            Some(Token::Field { .. }) => EditState::AwaitingOperator,
            Some(Token::Operator { .. }) => {
                let opening_field = self
                    .tokens
                    .len()
                    .checked_sub(2)
                    .and_then(|i| self.tokens.get(i));
                let field_type = match opening_field {
                    Some(Token::Field { field_type, .. }) => *field_type,
                    _ => FieldType::Other,
                };
                EditState::AwaitingValue(field_type)
            }
        }
    }

    /// Append the token a catalog entry stands for, if the entry's kind
    /// matches what the sequence accepts next. Picking a boolean
    /// literal is the only way past an operator on a BOOLEAN field.
    pub fn append_from_suggestion(&mut self, entry: &CatalogEntry) -> bool {
        match (self.state(), entry) {
            (EditState::Empty | EditState::AwaitingField, CatalogEntry::Field(field)) => {
                self.tokens
                    .push(Token::field(field.name.clone(), field.field_type));
                true
            }
            (EditState::AwaitingOperator, CatalogEntry::Operator(op)) => {
                self.tokens.push(Token::operator(op.symbol.clone()));
                true
            }
            (
                EditState::AwaitingValue(FieldType::Boolean),
                CatalogEntry::Boolean { value },
            ) => {
                self.tokens.push(Token::boolean_value(*value));
                true
            }
            _ => false,
        }
    }

    /// Append a typed value. Legal only when an operator is pending and
    /// the group's field is non-BOOLEAN.
    pub fn append_free_text_value(&mut self, raw: &str) -> bool {
        match self.state() {
            EditState::AwaitingValue(FieldType::Other) => {
                self.tokens.push(Token::text_value(raw));
                true
            }
            _ => false,
        }
    }

    /// In-place edit of a committed text value's payload.
    pub fn replace_value_at(&mut self, index: usize, new_raw: &str) -> bool {
        match self.tokens.get_mut(index) {
            Some(Token::Value {
                raw,
                component: ValueComponent::Text,
            }) => {
                *raw = new_raw.to_string();
                true
            }
            _ => false,
        }
    }

    /// Remove the most recently started group: pop the last token, then
    /// keep popping until the sequence ends at a field or is empty. The
    /// grouping invariant bounds this at three pops. Returns the
    /// removed tokens in sequence order so the caller can re-seed
    /// pending input from them.
    pub fn remove_last_group(&mut self) -> Vec<Token> {
        let mut removed = Vec::new();
        loop {
            match self.tokens.last() {
                None => break,
                Some(Token::Field { .. }) if !removed.is_empty() => break,
                Some(_) => {}
            }
            if let Some(token) = self.tokens.pop() {
                removed.push(token);
            }
        }
        removed.reverse();
        removed
    }

    /// Remove the complete group whose value token sits at `index`,
    /// i.e. the window `[index - 2, index - 1, index]`. No-op unless
    /// that window is a well-formed field/operator/value triplet.
    pub fn remove_group_containing(&mut self, index: usize) -> bool {
        if index < 2 || index >= self.tokens.len() {
            return false;
        }
        let well_formed = matches!(self.tokens[index], Token::Value { .. })
            && matches!(self.tokens[index - 1], Token::Operator { .. })
            && matches!(self.tokens[index - 2], Token::Field { .. });
        if !well_formed {
            return false;
        }
        self.tokens.drain(index - 2..=index);
        true
    }

    /// Deletion keystroke with an empty pending buffer. A trailing text
    /// value is left untouched -- its live edit buffer absorbs the
    /// keystroke instead. Any other tail loses exactly one token.
    pub fn backspace_at_empty_input(&mut self) -> bool {
        match self.tokens.last() {
            None => false,
            Some(Token::Value {
                component: ValueComponent::Text,
                ..
            }) => false,
            Some(_) => {
                self.tokens.pop();
                true
            }
        }
    }
}

//! Suggestion resolver: the ordered candidate list for the next token.

use crate::catalog::{Catalog, CatalogEntry, BOOLEAN_LITERALS};
use crate::expr::{EditState, Expression};
use crate::token::FieldType;

/// Compute the candidates for the next token, filtered by `filter`.
///
/// Dispatches on the derived edit state: fields when a group may start,
/// operators after a field, the boolean literal pair after an operator
/// on a BOOLEAN field, and nothing when the pending value is free text.
/// Candidates whose display text does not start with `filter`
/// (case-insensitive) are dropped; catalog order is preserved. Pure --
/// callers recompute on every keystroke and structural change.
pub fn suggestions(catalog: &Catalog, expr: &Expression, filter: &str) -> Vec<CatalogEntry> {
    let candidates: Vec<CatalogEntry> = match expr.state() {
        EditState::Empty | EditState::AwaitingField => catalog
            .fields()
            .iter()
            .cloned()
            .map(CatalogEntry::Field)
            .collect(),
        EditState::AwaitingOperator => catalog
            .operators()
            .iter()
            .cloned()
            .map(CatalogEntry::Operator)
            .collect(),
        EditState::AwaitingValue(FieldType::Boolean) => BOOLEAN_LITERALS
            .iter()
            .map(|&value| CatalogEntry::Boolean { value })
            .collect(),
        EditState::AwaitingValue(FieldType::Other) => Vec::new(),
    };

    if filter.is_empty() {
        return candidates;
    }
    let needle = filter.to_lowercase();
    candidates
        .into_iter()
        .filter(|entry| entry.display_text().to_lowercase().starts_with(&needle))
        .collect()
}

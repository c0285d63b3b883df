//! Linear query-string rendering of a token sequence.

use crate::token::{Token, ValueComponent};

/// Render tokens as a single-space-joined query string.
///
/// A field at any position past 0 is prefixed with the `AND` joiner.
/// The check is positional, not group-boundary based: under the
/// grouping invariant fields only occur at group starts, so the two are
/// equivalent, but the positional rule is what a malformed slice
/// observes. Text values are single-quoted; boolean values render bare.
pub fn serialize(tokens: &[Token]) -> String {
    let mut parts = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Field { name, .. } => {
                if i == 0 {
                    parts.push(name.clone());
                } else {
                    parts.push(format!("AND {name}"));
                }
            }
            Token::Operator { symbol } => parts.push(symbol.clone()),
            Token::Value { raw, component } => match component {
                ValueComponent::Text => parts.push(format!("'{raw}'")),
                ValueComponent::Boolean => parts.push(raw.clone()),
            },
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::FieldType;

    #[test]
    fn empty_sequence_renders_empty_string() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn single_group_with_quoted_text_value() {
        let tokens = vec![
            Token::field("status", FieldType::Other),
            Token::operator("="),
            Token::text_value("open"),
        ];
        assert_eq!(serialize(&tokens), "status = 'open'");
    }

    #[test]
    fn second_group_gets_and_joiner_and_booleans_render_bare() {
        let tokens = vec![
            Token::field("status", FieldType::Other),
            Token::operator("="),
            Token::text_value("open"),
            Token::field("active", FieldType::Boolean),
            Token::operator("="),
            Token::boolean_value(true),
        ];
        assert_eq!(serialize(&tokens), "status = 'open' AND active = true");
    }

    #[test]
    fn incomplete_group_renders_its_prefix() {
        let tokens = vec![
            Token::field("price", FieldType::Other),
            Token::operator(">"),
        ];
        assert_eq!(serialize(&tokens), "price >");
    }

    #[test]
    fn and_check_is_positional_even_on_malformed_slices() {
        // Two adjacent fields: the second still draws the joiner
        // because it is past position 0, invariant or not.
        let tokens = vec![
            Token::field("a", FieldType::Other),
            Token::field("b", FieldType::Other),
        ];
        assert_eq!(serialize(&tokens), "a AND b");
    }

    #[test]
    fn free_text_may_contain_join_characters() {
        let tokens = vec![
            Token::field("title", FieldType::Other),
            Token::operator("~"),
            Token::text_value("salt AND pepper"),
        ];
        assert_eq!(serialize(&tokens), "title ~ 'salt AND pepper'");
    }
}

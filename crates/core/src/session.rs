//! Session: the event surface a presentation layer drives.
//!
//! Translates raw input events (keystrokes, picks, clicks) into state
//! machine operations and exposes the outputs the widget renders: the
//! suggestion list, the expression snapshot, the serialized preview,
//! the pending text buffer, and a transient focus target that clears
//! itself shortly after a deletion.
//!
//! Single-threaded and cooperative: every event runs to completion, and
//! the only deferred work is the focus reset, driven by [`Session::tick`]
//! with a caller-supplied clock.

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, CatalogEntry};
use crate::expr::{EditState, Expression};
use crate::reset::DelayedReset;
use crate::serialize::serialize;
use crate::suggest::suggestions;
use crate::token::Token;

/// How long the post-deletion focus target stays set.
pub const FOCUS_RESET_DELAY: Duration = Duration::from_millis(500);

pub struct Session {
    catalog: Catalog,
    expr: Expression,
    /// Pending text buffer. Doubles as the suggestion filter.
    input: String,
    /// Token index to move focus to after a deletion, if any.
    focus: Option<usize>,
    focus_reset: DelayedReset,
}

impl Session {
    /// Start an editing session with an empty expression.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_expression(catalog, Expression::new())
    }

    /// Start from a pre-seeded expression.
    pub fn with_expression(catalog: Catalog, expr: Expression) -> Self {
        Self {
            catalog,
            expr,
            input: String::new(),
            focus: None,
            focus_reset: DelayedReset::new(),
        }
    }

    // ── Input events ─────────────────────────────────────────────────

    /// The text buffer changed.
    pub fn text_changed(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// A suggestion was picked. Appends the matching token and clears
    /// the buffer; a pick the state machine refuses leaves both alone.
    pub fn suggestion_chosen(&mut self, entry: &CatalogEntry) -> bool {
        let appended = self.expr.append_from_suggestion(entry);
        if appended {
            self.input.clear();
        }
        appended
    }

    /// The confirm key (Enter) was pressed with text in the buffer.
    /// Commits the buffer as a free-text value when a non-BOOLEAN
    /// value slot is pending; otherwise a no-op.
    pub fn confirm_key_pressed(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }
        let raw = self.input.clone();
        let appended = self.expr.append_free_text_value(&raw);
        if appended {
            self.input.clear();
        }
        appended
    }

    /// A delete keystroke landed while the buffer was empty. Collapses
    /// the tail per the backspace rule, points the focus target at the
    /// last pre-deletion token, and arms the focus reset.
    pub fn delete_key_pressed_at_empty_input(&mut self, now: Instant) -> bool {
        let pre_len = self.expr.len();
        let changed = self.expr.backspace_at_empty_input();
        self.focus = pre_len.checked_sub(1);
        self.focus_reset.schedule(now, FOCUS_RESET_DELAY);
        changed
    }

    /// The remove control of the group whose value sits at `index` was
    /// clicked.
    pub fn remove_group_clicked(&mut self, index: usize) -> bool {
        self.expr.remove_group_containing(index)
    }

    /// Live edit of a committed text value.
    pub fn value_text_changed(&mut self, index: usize, text: &str) -> bool {
        self.expr.replace_value_at(index, text)
    }

    /// A backspace landed in the trailing value's edit buffer while
    /// that buffer was empty: the deletion walks back into the
    /// operator. The last group is removed and the pending buffer is
    /// re-seeded with the removed operator's symbol minus its final
    /// character (the character this keystroke consumed), so held-down
    /// deletion steps back through the serialized form.
    pub fn value_backspace_at_empty(&mut self, now: Instant) -> Vec<Token> {
        let removed = self.expr.remove_last_group();
        let removed_symbol = removed.iter().find_map(|token| match token {
            Token::Operator { symbol } => Some(symbol.clone()),
            _ => None,
        });
        match removed_symbol {
            Some(mut symbol) => {
                symbol.pop();
                self.input = symbol;
            }
            None => self.input.clear(),
        }
        self.focus = self.expr.len().checked_sub(1);
        self.focus_reset.schedule(now, FOCUS_RESET_DELAY);
        removed
    }

    /// Drive deferred work. Clears the focus target once its reset
    /// deadline passes; a deletion arriving in between re-arms the
    /// deadline and the later one wins.
    pub fn tick(&mut self, now: Instant) {
        if self.focus_reset.poll(now) {
            self.focus = None;
        }
    }

    // ── Output surface ───────────────────────────────────────────────

    /// Candidates for the next token under the current buffer.
    pub fn suggestions(&self) -> Vec<CatalogEntry> {
        suggestions(&self.catalog, &self.expr, &self.input)
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    pub fn state(&self) -> EditState {
        self.expr.state()
    }

    /// The serialized preview string.
    pub fn serialized_text(&self) -> String {
        serialize(self.expr.tokens())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus_target(&self) -> Option<usize> {
        self.focus
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Field, Operator};
    use crate::token::{FieldType, ValueComponent};

    fn catalog() -> Catalog {
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
                symbol: ">=".to_string(),
                label: "greater than or equal".to_string(),
            }],
        )
        .unwrap()
    }

    fn pick(session: &mut Session, display: &str) {
        let entry = session
            .suggestions()
            .into_iter()
            .find(|e| e.display_text() == display)
            .expect("suggestion present");
        assert!(session.suggestion_chosen(&entry));
    }

    #[test]
    fn pick_clears_buffer_and_refused_pick_keeps_it() {
        let mut session = Session::new(catalog());
        session.text_changed("sta");
        pick(&mut session, "status");
        assert_eq!(session.input(), "");

        session.text_changed("x");
        let stale = CatalogEntry::Boolean { value: true };
        assert!(!session.suggestion_chosen(&stale));
        assert_eq!(session.input(), "x");
    }

    #[test]
    fn confirm_commits_free_text_only_when_slot_is_text() {
        let mut session = Session::new(catalog());
        session.text_changed("open");
        // no operator pending yet
        assert!(!session.confirm_key_pressed());
        assert_eq!(session.input(), "open");

        session.text_changed("");
        pick(&mut session, "status");
        pick(&mut session, "greater than or equal");
        session.text_changed("open");
        assert!(session.confirm_key_pressed());
        assert_eq!(session.input(), "");
        assert_eq!(session.serialized_text(), "status >= 'open'");
    }

    #[test]
    fn confirm_refused_while_boolean_slot_pending() {
        let mut session = Session::new(catalog());
        pick(&mut session, "active");
        pick(&mut session, "greater than or equal");
        session.text_changed("yes");
        assert!(!session.confirm_key_pressed());
        // the literal pair is still on offer once the filter matches
        session.text_changed("tr");
        assert_eq!(session.suggestions().len(), 1);
    }

    #[test]
    fn delete_key_sets_focus_and_reset_clears_it() {
        let start = Instant::now();
        let mut session = Session::new(catalog());
        pick(&mut session, "status");
        pick(&mut session, "greater than or equal");

        assert!(session.delete_key_pressed_at_empty_input(start));
        assert_eq!(session.expression().len(), 1);
        assert_eq!(session.focus_target(), Some(1));

        session.tick(start + Duration::from_millis(100));
        assert_eq!(session.focus_target(), Some(1));
        session.tick(start + FOCUS_RESET_DELAY);
        assert_eq!(session.focus_target(), None);
    }

    #[test]
    fn second_delete_rearms_the_reset() {
        let start = Instant::now();
        let mut session = Session::new(catalog());
        pick(&mut session, "status");
        pick(&mut session, "greater than or equal");

        session.delete_key_pressed_at_empty_input(start);
        let second = start + Duration::from_millis(400);
        session.delete_key_pressed_at_empty_input(second);

        // first deadline passes; the re-armed one has not
        session.tick(start + FOCUS_RESET_DELAY);
        assert_eq!(session.focus_target(), Some(0));
        session.tick(second + FOCUS_RESET_DELAY);
        assert_eq!(session.focus_target(), None);
    }

    #[test]
    fn value_backspace_reseeds_buffer_from_removed_operator() {
        let start = Instant::now();
        let mut session = Session::new(catalog());
        pick(&mut session, "status");
        pick(&mut session, "greater than or equal");
        session.text_changed("open");
        session.confirm_key_pressed();

        let removed = session.value_backspace_at_empty(start);
        assert_eq!(removed.len(), 2);
        assert!(matches!(
            removed[1],
            Token::Value {
                component: ValueComponent::Text,
                ..
            }
        ));
        // ">=" minus the consumed final character
        assert_eq!(session.input(), ">");
        assert_eq!(session.expression().len(), 1);
        assert_eq!(session.focus_target(), Some(0));
        assert!(session.focus_reset.is_pending());
    }

    #[test]
    fn value_backspace_on_empty_expression_clears_buffer() {
        let mut session = Session::new(catalog());
        session.text_changed("stray");
        let removed = session.value_backspace_at_empty(Instant::now());
        assert!(removed.is_empty());
        assert_eq!(session.input(), "");
        assert_eq!(session.focus_target(), None);
    }

    #[test]
    fn suggestions_follow_the_buffer_as_filter() {
        let mut session = Session::new(catalog());
        session.text_changed("ac");
        let got = session.suggestions();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].display_text(), "active");
    }
}

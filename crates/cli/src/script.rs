//! Event scripts: a line-based grammar for driving a [`Session`].
//!
//! One event per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! type <text...>        replace the pending buffer (verbatim after the space)
//! pick <display>        choose the suggestion with this display text
//! confirm               confirm keystroke (commit free text)
//! backspace             delete keystroke at empty buffer
//! remove <index>        click the remove control of the group whose value
//!                       token sits at <index>
//! edit <index> <text..> live-edit a committed text value
//! value-backspace       backspace in the trailing value's empty edit buffer
//! ```

use std::time::Instant;

use sift_core::Session;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Type(String),
    Pick(String),
    Confirm,
    Backspace,
    Remove(usize),
    Edit { index: usize, text: String },
    ValueBackspace,
}

/// An event tagged with the script line it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScriptEvent {
    pub line: usize,
    pub event: Event,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ScriptError {
    #[error("line {line}: unknown event '{input}'")]
    UnknownEvent { line: usize, input: String },

    #[error("line {line}: '{event}' requires an argument")]
    MissingArgument { line: usize, event: &'static str },

    #[error("line {line}: invalid index '{value}'")]
    InvalidIndex { line: usize, value: String },

    #[error("line {line}: no current suggestion displays '{display}'")]
    NoSuchSuggestion { line: usize, display: String },
}

/// Parse a whole script into events, skipping blanks and comments.
pub(crate) fn parse_script(src: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        events.push(ScriptEvent {
            line,
            event: parse_event(trimmed, line)?,
        });
    }
    Ok(events)
}

/// Parse a single event line. Text arguments are taken verbatim after
/// the first space.
pub(crate) fn parse_event(input: &str, line: usize) -> Result<Event, ScriptError> {
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("");

    match (command, rest.is_empty()) {
        ("type", _) => Ok(Event::Type(rest.to_string())),
        ("pick", false) => Ok(Event::Pick(rest.to_string())),
        ("pick", true) => Err(ScriptError::MissingArgument {
            line,
            event: "pick",
        }),
        ("confirm", true) => Ok(Event::Confirm),
        ("backspace", true) => Ok(Event::Backspace),
        ("value-backspace", true) => Ok(Event::ValueBackspace),
        ("remove", false) => {
            let index = rest.trim().parse().map_err(|_| ScriptError::InvalidIndex {
                line,
                value: rest.trim().to_string(),
            })?;
            Ok(Event::Remove(index))
        }
        ("remove", true) => Err(ScriptError::MissingArgument {
            line,
            event: "remove",
        }),
        ("edit", false) => {
            let (index_str, text) = rest.split_once(' ').ok_or(ScriptError::MissingArgument {
                line,
                event: "edit",
            })?;
            let index = index_str.parse().map_err(|_| ScriptError::InvalidIndex {
                line,
                value: index_str.to_string(),
            })?;
            Ok(Event::Edit {
                index,
                text: text.to_string(),
            })
        }
        ("edit", true) => Err(ScriptError::MissingArgument {
            line,
            event: "edit",
        }),
        _ => Err(ScriptError::UnknownEvent {
            line,
            input: input.to_string(),
        }),
    }
}

/// Feed one event into the session. A `pick` whose display text matches
/// no current suggestion is a script error; operations the state
/// machine refuses are logged and skipped, mirroring how the widget
/// silently absorbs them.
pub(crate) fn apply_event(
    session: &mut Session,
    ev: &ScriptEvent,
    now: Instant,
) -> Result<(), ScriptError> {
    log::debug!("event: {:?}", ev.event);
    match &ev.event {
        Event::Type(text) => session.text_changed(text),
        Event::Pick(display) => {
            let entry = session
                .suggestions()
                .into_iter()
                .find(|e| e.display_text().eq_ignore_ascii_case(display))
                .ok_or_else(|| ScriptError::NoSuchSuggestion {
                    line: ev.line,
                    display: display.clone(),
                })?;
            if !session.suggestion_chosen(&entry) {
                log::warn!("line {}: pick '{}' refused", ev.line, display);
            }
        }
        Event::Confirm => {
            if !session.confirm_key_pressed() {
                log::warn!("line {}: confirm ignored", ev.line);
            }
        }
        Event::Backspace => {
            session.delete_key_pressed_at_empty_input(now);
        }
        Event::Remove(index) => {
            if !session.remove_group_clicked(*index) {
                log::warn!("line {}: remove {} ignored", ev.line, index);
            }
        }
        Event::Edit { index, text } => {
            if !session.value_text_changed(*index, text) {
                log::warn!("line {}: edit {} ignored", ev.line, index);
            }
        }
        Event::ValueBackspace => {
            session.value_backspace_at_empty(now);
        }
    }
    Ok(())
}

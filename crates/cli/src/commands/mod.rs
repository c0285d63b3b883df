//! Subcommand implementations and their shared rendering helpers.

pub(crate) mod catalog;
pub(crate) mod repl;
pub(crate) mod run;
pub(crate) mod suggest;

use std::io::Read;
use std::path::Path;
use std::process;
use std::time::Instant;

use sift_core::{Catalog, CatalogEntry, FieldType, Session, Token, ValueComponent};

use crate::script::{self, ScriptEvent};
use crate::{report_error, OutputFormat};

/// Read a script from a file, or from stdin when the path is `-`.
pub(crate) fn read_script(path: &Path, output: OutputFormat) -> String {
    if path == Path::new("-") {
        let mut src = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut src) {
            report_error(&format!("error reading stdin: {}", e), output);
            process::exit(1);
        }
        return src;
    }
    match std::fs::read_to_string(path) {
        Ok(src) => src,
        Err(e) => {
            report_error(
                &format!("error reading script '{}': {}", path.display(), e),
                output,
            );
            process::exit(1);
        }
    }
}

/// Parse a script and run its events into a fresh session. Exits with
/// status 1 on the first script error.
pub(crate) fn run_script(
    catalog: Catalog,
    src: &str,
    output: OutputFormat,
    mut after_event: impl FnMut(&Session, &ScriptEvent),
) -> Session {
    let events = match script::parse_script(src) {
        Ok(events) => events,
        Err(e) => {
            report_error(&e.to_string(), output);
            process::exit(1);
        }
    };
    let mut session = Session::new(catalog);
    for ev in &events {
        if let Err(e) = script::apply_event(&mut session, ev, Instant::now()) {
            report_error(&e.to_string(), output);
            process::exit(1);
        }
        after_event(&session, ev);
    }
    session
}

pub(crate) fn field_type_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Boolean => "BOOLEAN",
        FieldType::Other => "OTHER",
    }
}

/// One-line token description for text output.
pub(crate) fn describe_token(token: &Token) -> String {
    match token {
        Token::Field { name, field_type } => {
            format!("field {} ({})", name, field_type_label(*field_type))
        }
        Token::Operator { symbol } => format!("operator {}", symbol),
        Token::Value {
            raw,
            component: ValueComponent::Text,
        } => format!("value '{}'", raw),
        Token::Value {
            raw,
            component: ValueComponent::Boolean,
        } => format!("value {}", raw),
    }
}

pub(crate) fn joined_suggestions(suggestions: &[CatalogEntry]) -> String {
    suggestions
        .iter()
        .map(|e| e.display_text())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the full session state in the selected format.
pub(crate) fn print_session(session: &Session, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            if session.expression().is_empty() {
                println!("tokens: (none)");
            } else {
                println!("tokens:");
                for (index, token) in session.expression().tokens().iter().enumerate() {
                    println!("  [{}] {}", index, describe_token(token));
                }
            }
            println!("serialized: {}", session.serialized_text());
            println!("state: {}", session.state());
            if !session.input().is_empty() {
                println!("input: {}", session.input());
            }
            let suggestions = session.suggestions();
            if suggestions.is_empty() {
                println!("suggestions: (none)");
            } else {
                println!("suggestions: {}", joined_suggestions(&suggestions));
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "expression": session.expression().tokens(),
                "serialized": session.serialized_text(),
                "state": session.state().to_string(),
                "input": session.input(),
                "suggestions": session.suggestions(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).expect("session state serializes")
            );
        }
    }
}

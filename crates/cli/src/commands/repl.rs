//! `sift repl` -- interactive session driven one event per line.
//!
//! Accepts the same event grammar as scripts, plus `show`, `help`, and
//! `quit`. EOF ends the session.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use sift_core::{Catalog, Session};

use crate::script::{self, ScriptEvent};
use crate::OutputFormat;

use super::{joined_suggestions, print_session};

pub(crate) fn cmd_repl(catalog: Catalog) {
    let mut session = Session::new(catalog);
    println!("sift interactive session");
    println!("  Commands: type, pick, confirm, backspace, value-backspace, remove, edit, show, help, quit");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line_no = 0usize;

    loop {
        session.tick(Instant::now());

        print!("sift> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        }
        line_no += 1;

        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print_session(&session, OutputFormat::Text),
            _ => match script::parse_event(input, line_no) {
                Ok(event) => {
                    let ev = ScriptEvent {
                        line: line_no,
                        event,
                    };
                    if let Err(e) = script::apply_event(&mut session, &ev, Instant::now()) {
                        eprintln!("error: {}", e);
                        continue;
                    }
                    println!("serialized: {}", session.serialized_text());
                    let suggestions = session.suggestions();
                    if !suggestions.is_empty() {
                        println!("suggestions: {}", joined_suggestions(&suggestions));
                    }
                }
                Err(e) => eprintln!("error: {}", e),
            },
        }
    }

    println!("bye");
}

fn print_help() {
    println!("Commands:");
    println!("  type <text>             Replace the pending text buffer");
    println!("  pick <display>          Choose the suggestion with this display text");
    println!("  confirm                 Commit the buffer as a free-text value");
    println!("  backspace               Delete keystroke at empty buffer");
    println!("  value-backspace         Backspace in the trailing value's empty buffer");
    println!("  remove <index>          Remove the group whose value sits at <index>");
    println!("  edit <index> <text>     Live-edit a committed text value");
    println!("  show                    Print the full session state");
    println!("  help                    Show this help");
    println!("  quit                    Exit the session");
}

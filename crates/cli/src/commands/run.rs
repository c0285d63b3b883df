//! `sift run` -- execute an event script and print the final state.

use std::path::Path;

use sift_core::Catalog;

use super::{joined_suggestions, print_session, read_script, run_script};
use crate::OutputFormat;

pub(crate) fn cmd_run(catalog: Catalog, script_path: &Path, trace: bool, output: OutputFormat) {
    let src = read_script(script_path, output);
    let session = run_script(catalog, &src, output, |session, ev| {
        if trace && output == OutputFormat::Text {
            println!("line {}: {}", ev.line, session.serialized_text());
            println!("  suggestions: {}", joined_suggestions(&session.suggestions()));
        }
    });
    print_session(&session, output);
}

//! `sift suggest` -- run a script, print only the resulting suggestions.

use std::path::Path;

use sift_core::Catalog;

use super::{read_script, run_script};
use crate::OutputFormat;

pub(crate) fn cmd_suggest(catalog: Catalog, script_path: &Path, output: OutputFormat) {
    let src = read_script(script_path, output);
    let session = run_script(catalog, &src, output, |_, _| {});
    let suggestions = session.suggestions();
    match output {
        OutputFormat::Text => {
            for entry in &suggestions {
                println!("{}", entry.display_text());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&suggestions).expect("suggestions serialize")
            );
        }
    }
}

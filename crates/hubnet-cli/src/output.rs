//! Output formatting for command results.
//!
//! Text and rich renderings come from the library; JSON output serialises the
//! library's result shapes verbatim.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use hubnet_lib::RenderMode;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain, line-oriented text.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Library render mode for the textual formats; `None` for JSON.
    pub fn render_mode(self) -> Option<RenderMode> {
        match self {
            OutputFormat::Text => Some(RenderMode::PlainText),
            OutputFormat::Rich => Some(RenderMode::RichText),
            OutputFormat::Json => None,
        }
    }
}

/// Write `value` to stdout as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Print a note about a name that is not part of the dataset.
///
/// Unknown names are not errors: the search still runs and reports an empty
/// result.
pub fn warn_unknown(kind: &str, name: &str, suggestions: &[String]) {
    eprintln!("Unknown {kind} '{name}'{}", format_suggestions(suggestions));
}

/// Print a note about a city that has hubs but is not served by any route.
pub fn warn_unrouted_city(city: &str) {
    eprintln!("City '{city}' has hubs but no routes");
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{only}'?"),
        many => format!(
            ". Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_formatted() {
        assert_eq!(format_suggestions(&[]), "");
        assert_eq!(
            format_suggestions(&["Lima".to_string()]),
            ". Did you mean 'Lima'?"
        );
        assert_eq!(
            format_suggestions(&["Lima".to_string(), "Puno".to_string()]),
            ". Did you mean one of: 'Lima', 'Puno'?"
        );
    }

    #[test]
    fn json_has_no_render_mode() {
        assert_eq!(OutputFormat::Json.render_mode(), None);
        assert_eq!(OutputFormat::Text.render_mode(), Some(RenderMode::PlainText));
    }
}

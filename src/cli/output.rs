//! Output formatting utilities
//!
//! Provides text, HTML, and JSON output for the render command.

use crate::alert::AlertDetails;
use crate::cli::args::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TextDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(handle, "{}", data.to_text())?;
        }
        OutputFormat::Html => {
            writeln!(handle, "{}", data.to_html())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as text or HTML
pub trait TextDisplay {
    /// Format as plain text
    fn to_text(&self) -> String;

    /// Format as HTML
    fn to_html(&self) -> String;
}

impl TextDisplay for AlertDetails {
    fn to_text(&self) -> String {
        let body = self
            .body
            .replace("<br>", "\n")
            .replace("<b>", "")
            .replace("</b>", "");

        format!(
            "Subject: {}\nObject: {}\nGroup: {}\n{}",
            self.subject, self.object, self.alert, body
        )
    }

    fn to_html(&self) -> String {
        self.body.clone()
    }
}

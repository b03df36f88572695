//! Writes responses to the terminal as text or JSON

use crate::app::Response;
use crate::view::Directory;
use clap::ValueEnum;
use std::io::{self, Write};

/// Output format of the rendered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// The response as one JSON document
    Json,
}

/// Render a response
pub fn render<W: Write>(out: &mut W, response: &Response, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, response)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            if let Some(directory) = &response.directory {
                render_directory(out, directory)?;
            }
            if response.refresh {
                writeln!(out, "(refresh)")?;
            }
            Ok(())
        }
    }
}

fn render_directory<W: Write>(out: &mut W, directory: &Directory) -> io::Result<()> {
    writeln!(out, "== {} ==", directory.category)?;
    if directory.items.is_empty() {
        writeln!(out, "(empty)")?;
    }

    for item in &directory.items {
        let marker = if item.is_folder { '+' } else { '-' };
        if item.label2.is_empty() {
            writeln!(out, "{} {}", marker, item.label)?;
        } else {
            writeln!(out, "{} {}  | {}", marker, item.label, item.label2)?;
        }
        if !item.url.is_empty() {
            writeln!(out, "    open: {}", item.url)?;
        }
        for entry in &item.context_menu {
            writeln!(out, "    {}: {}", entry.label, entry.url)?;
        }
    }
    Ok(())
}

//! Show command implementation
//!
//! Reports the latest revision entry and where the next one would go,
//! without touching the file.

use std::path::Path;

use autorev_content::{Document, RevisionGenerator, insertion_point, latest_revision};
use autorev_fs::io;
use colored::Colorize;
use serde_json::json;

use super::{language_id, resolve_style};
use crate::error::Result;

/// Run the show command
pub fn run_show(file: &Path, language: Option<&str>, json: bool) -> Result<()> {
    let language = language_id(file, language);
    let Some(style) = resolve_style(&language, json)? else {
        return Ok(());
    };

    let document = Document::new(io::read_text(file)?);
    let generator = RevisionGenerator::new(style);
    let latest = latest_revision(&document);
    let next = generator.next_number(&document)?;
    let point = insertion_point(&document, style.handler().as_ref());

    if json {
        let output = json!({
            "file": file.display().to_string(),
            "language": language,
            "latest": latest.as_ref().map(|entry| json!({
                "revision": entry.number.to_string(),
                "date": entry.date,
                "line": entry.line,
            })),
            "next_revision": next.to_string(),
            "insert_at": point,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Revision history".bold(),
        file.display().to_string().yellow(),
        language.cyan()
    );
    match &latest {
        Some(entry) => println!(
            "  {}: REV.{} {} (line {})",
            "Latest".dimmed(),
            entry.number,
            entry.date,
            entry.line + 1
        ),
        None => println!("  {}: {}", "Latest".dimmed(), "none".dimmed()),
    }
    println!(
        "  {}:   REV.{} at line {}",
        "Next".dimmed(),
        next.to_string().green(),
        point.line + 1
    );

    Ok(())
}

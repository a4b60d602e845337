//! Languages command implementation

use autorev_content::CommentStyle;
use colored::Colorize;

use crate::error::Result;

/// Run the languages command
pub fn run_languages() -> Result<()> {
    println!("{}", "Supported Languages".bold());
    println!();
    for style in CommentStyle::all() {
        let extensions = style
            .extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<12} {:<8} {}",
            style.language_id().cyan(),
            format!("{style:?}").to_lowercase(),
            extensions.dimmed()
        );
    }
    Ok(())
}

//! Stamp command implementation
//!
//! Reads a file, inserts the next revision entry and writes it back in a
//! single atomic replace.

use std::path::{Path, PathBuf};

use autorev_config::{ConfigResolver, RevisionSection};
use autorev_content::{Document, Edit, EditKind, RevisionGenerator, RevisionNumber, Stamp};
use autorev_fs::io;
use colored::Colorize;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use super::{language_id, resolve_style};
use crate::error::Result;

/// Options for the stamp command
#[derive(Debug, Clone, Default)]
pub struct StampOptions {
    pub language: Option<String>,
    pub signature: Option<String>,
    pub message: Option<String>,
    pub dry_run: bool,
    pub json: bool,
    /// Global config directory override (tests)
    pub global_config_dir: Option<PathBuf>,
}

/// Machine-readable stamp result
#[derive(Debug, Serialize)]
struct StampReport<'a> {
    status: &'static str,
    file: String,
    language: &'a str,
    revision: String,
    #[serde(flatten)]
    edit: &'a Edit,
    dry_run: bool,
}

/// Run the stamp command
pub fn run_stamp(file: &Path, options: &StampOptions) -> Result<()> {
    let language = language_id(file, options.language.as_deref());
    let Some(style) = resolve_style(&language, options.json)? else {
        return Ok(());
    };

    let source = io::read_text(file)?;

    let mut resolver = ConfigResolver::for_file(file);
    if let Some(dir) = &options.global_config_dir {
        resolver = resolver.with_global_config_dir(dir);
    }
    let overrides = RevisionSection {
        signature: options.signature.clone(),
        message: options.message.clone(),
    };
    let settings = resolver.resolve(&overrides)?;

    let mut document = Document::new(source.as_str());
    let generator = RevisionGenerator::new(style);
    let stamp = Stamp::today(settings.signature, settings.message);
    let edit = generator.stamp(&mut document, &stamp)?;
    let revision = match &edit.kind {
        EditKind::FirstRevision => RevisionNumber::FIRST.to_string(),
        EditKind::NextRevision { number } => number.clone(),
    };

    if !options.dry_run {
        io::write_text(file, document.text())?;
        tracing::debug!(file = %file.display(), %revision, "Stamped revision");
    }

    if options.json {
        let report = StampReport {
            status: if options.dry_run { "preview" } else { "stamped" },
            file: file.display().to_string(),
            language: &language,
            revision,
            edit: &edit,
            dry_run: options.dry_run,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if options.dry_run {
        print_diff(file, &source, document.text());
        println!();
        println!(
            "Run {} to apply this change.",
            format!("autorev stamp {}", file.display()).cyan()
        );
    } else {
        println!(
            "{} REV.{} into {} at line {}",
            "Stamped".green().bold(),
            revision,
            file.display().to_string().yellow(),
            edit.point.line + 1
        );
    }

    Ok(())
}

/// Print a unified diff between the old and new file contents
fn print_diff(file: &Path, old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    let name = file.display().to_string();

    println!("{}", format!("--- {name}").red());
    println!("{}", format!("+++ {name}").green());
    for hunk in diff.unified_diff().context_radius(2).iter_hunks() {
        println!("{}", hunk.header().to_string().cyan());
        for change in hunk.iter_changes() {
            let line = change.to_string_lossy();
            let line = line.trim_end_matches('\n');
            match change.tag() {
                ChangeTag::Insert => println!("{}", format!("+{line}").green()),
                ChangeTag::Delete => println!("{}", format!("-{line}").red()),
                ChangeTag::Equal => println!(" {line}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(temp: &TempDir) -> StampOptions {
        StampOptions {
            signature: Some("CD".to_string()),
            message: Some("fix bug".to_string()),
            global_config_dir: Some(temp.path().join("global")),
            ..Default::default()
        }
    }

    #[test]
    fn stamp_writes_next_entry() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("user.rb");
        fs::write(&file, "#   REV.03 2024/01/01  BY. AB\n#\n").unwrap();

        run_stamp(&file, &options(&temp)).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(
            content,
            format!(
                "#   REV.03 2024/01/01  BY. AB\n#   REV.04 {}  BY. CD\n#     fix bug\n#\n",
                autorev_content::today()
            )
        );
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("chart.js");
        fs::write(&file, "var x;\n").unwrap();

        let opts = StampOptions {
            dry_run: true,
            ..options(&temp)
        };
        run_stamp(&file, &opts).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "var x;\n");
    }

    #[test]
    fn unsupported_file_is_not_modified() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "REV.01 2024/01/01\n").unwrap();

        run_stamp(&file, &options(&temp)).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "REV.01 2024/01/01\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = run_stamp(&temp.path().join("missing.rb"), &options(&temp));
        assert!(result.is_err());
    }
}

//! Human-readable and JSON output for command results

use crate::commands::InitReport;
use crate::domain::DepItem;
use crate::manifest::Manifest;
use crate::vendor::{SyncAction, SyncReport};
use colored::Colorize;
use std::io::{self, Write};

/// Print the manifest entries as `path:` / `origin:` pairs
pub fn write_list(items: &[DepItem], writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "The packages are:")?;
    for item in items {
        writeln!(writer)?;
        writeln!(writer, "path:\t{}", item.path)?;
        writeln!(writer, "origin:\t{}", item.origin)?;
    }
    Ok(())
}

/// Print the manifest exactly as it is stored
pub fn write_json(manifest: &Manifest, writer: &mut dyn Write) -> io::Result<()> {
    let json = manifest
        .to_json()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    writeln!(writer, "{}", json)
}

/// Summarise an init run, listing unresolved packages in red
pub fn write_init_report(report: &InitReport, writer: &mut dyn Write) -> io::Result<()> {
    for package in &report.resolution.unresolved {
        writeln!(
            writer,
            "{}",
            format!("Failed to find git path for package: {}", package)
                .red()
                .bold()
        )?;
    }
    writeln!(
        writer,
        "{} {} new, {} total packages in {}",
        "Initialized".green().bold(),
        report.added,
        report.manifest.len(),
        report.manifest.path().display()
    )
}

/// Print one line per synced entry followed by a summary
pub fn write_sync_report(report: &SyncReport, writer: &mut dyn Write) -> io::Result<()> {
    for entry in &report.entries {
        let label = match entry.action {
            SyncAction::Clone => "cloned".green(),
            SyncAction::Pull => "pulled".cyan(),
        };
        writeln!(writer, "{:>8} {}", label, entry.path)?;
    }
    writeln!(
        writer,
        "Synced {} packages ({} cloned, {} pulled)",
        report.entries.len(),
        report.clones(),
        report.pulls()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::SyncedEntry;

    #[test]
    fn test_write_list() {
        let mut out = Vec::new();
        write_list(&[DepItem::new("foo", "bar")], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The packages are:\n\npath:\tfoo\norigin:\tbar\n"
        );
    }

    #[test]
    fn test_write_list_empty() {
        let mut out = Vec::new();
        write_list(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "The packages are:\n");
    }

    #[test]
    fn test_write_json() {
        let mut manifest = Manifest::new("godeps.json");
        manifest.add_item("foo", "bar").unwrap();
        let mut out = Vec::new();
        write_json(&manifest, &mut out).unwrap();
        let parsed: Vec<DepItem> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![DepItem::new("foo", "bar")]);
    }

    #[test]
    fn test_write_sync_report() {
        colored::control::set_override(false);
        let report = SyncReport {
            entries: vec![
                SyncedEntry {
                    path: "github.com/x/y".to_string(),
                    action: SyncAction::Clone,
                    command: String::new(),
                },
                SyncedEntry {
                    path: "github.com/a/b".to_string(),
                    action: SyncAction::Pull,
                    command: String::new(),
                },
            ],
        };
        let mut out = Vec::new();
        write_sync_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("cloned github.com/x/y"));
        assert!(text.contains("pulled github.com/a/b"));
        assert!(text.contains("Synced 2 packages (1 cloned, 1 pulled)"));
    }
}

//! The combine run: validate, confirm, copy, remove conflicts, copy again

use crate::executor::delete::locate;
use crate::executor::{delete_conflicts, TreeCopier};
use crate::layout::{ConflictSet, SourceFolder, CONFLICT_SETS, SOURCE_FOLDERS};
use crate::types::{CopyOutcome, DeleteReport, HdtpError};
use crate::ui::{separator, Prompt};
use crate::validate::{validate_paths, ValidatedPaths};
use crate::Config;
use console::style;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const EXIT_PROMPT: &str = "\nPress Enter to exit...";

/// Acknowledgements requested before anything is copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// User has seen the base and output paths
    Paths,
    /// User has extracted every pack into its folder
    Extracted,
}

/// One step of a run, after validation and before completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AwaitAck(Ack),
    CopyFolder(&'static SourceFolder),
    DeleteConflicts(&'static ConflictSet),
}

/// Fixed step order of every run
///
/// The first pack is copied once on its own before the conflict lists are
/// applied, then every pack (the first one included) is copied in order.
pub fn run_steps() -> Vec<Step> {
    let mut steps = vec![
        Step::AwaitAck(Ack::Paths),
        Step::AwaitAck(Ack::Extracted),
        Step::CopyFolder(&SOURCE_FOLDERS[0]),
    ];
    steps.extend(CONFLICT_SETS.iter().map(|set| Step::DeleteConflicts(*set)));
    steps.extend(SOURCE_FOLDERS.iter().map(Step::CopyFolder));
    steps
}

/// What a finished run did
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Copy outcomes in execution order, keyed by pack folder name
    pub copies: Vec<(&'static str, CopyOutcome)>,
    /// Conflict removal reports, keyed by pack label
    pub deletions: Vec<(&'static str, DeleteReport)>,
    pub dry_run: bool,
}

impl RunSummary {
    /// Folder copies that reported issues plus files that could not be deleted
    pub fn warning_count(&self) -> usize {
        let copy_warnings = self
            .copies
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .count();
        let delete_failures: usize = self
            .deletions
            .iter()
            .map(|(_, report)| report.failed.len())
            .sum();
        copy_warnings + delete_failures
    }
}

/// Run the combine
///
/// Validation errors and copies that cannot start abort the run. Copy issues
/// and failed deletions are printed as warnings and the run carries on.
pub fn run(
    config: &Config,
    copier: &dyn TreeCopier,
    prompt: &mut dyn Prompt,
) -> Result<RunSummary, HdtpError> {
    let paths = validate_paths(&config.base_path, &config.combined_dir, !config.dry_run)?;
    info!(copier = copier.name(), dry_run = config.dry_run, "paths validated");

    println!("Using base path: {}", paths.base_path.display());
    println!("Output directory: {}", paths.combined_dir.display());

    if config.dry_run {
        println!("{}", format_dry_run(&paths));
        println!("Dry-run mode: no changes were made.");
        return Ok(RunSummary {
            dry_run: true,
            ..RunSummary::default()
        });
    }

    let mut summary = RunSummary::default();
    for step in run_steps() {
        match step {
            Step::AwaitAck(ack) => {
                if let Some(message) = ack_message(ack) {
                    println!("{message}");
                }
                if !config.skip_confirm {
                    prompt.acknowledge(CONTINUE_PROMPT).map_err(prompt_error)?;
                }
            }
            Step::CopyFolder(folder) => {
                println!("\nProcessing {}...", folder.description);
                let source = paths.base_path.join(folder.name);
                let outcome = copy_folder(copier, &source, &paths.combined_dir)?;
                summary.copies.push((folder.name, outcome));
            }
            Step::DeleteConflicts(set) => {
                println!("\nDeleting conflicting {} files...", set.label);
                let report = delete_conflicts(&paths.base_path, &set.relative_paths());
                print_delete_report(&report);
                summary.deletions.push((set.label, report));
            }
        }
    }

    println!("{}", format_completion(&config.combined_dir, &summary));
    prompt.acknowledge(EXIT_PROMPT).map_err(prompt_error)?;

    Ok(summary)
}

fn ack_message(ack: Ack) -> Option<&'static str> {
    match ack {
        Ack::Paths => None,
        Ack::Extracted => Some(
            "\nExtract the mods to the numbered folders as per the instructions BEFORE running this tool.",
        ),
    }
}

/// Copy one pack folder, printing the outcome
///
/// Only a copy that cannot run at all is returned as an error.
fn copy_folder(
    copier: &dyn TreeCopier,
    source: &Path,
    dest: &Path,
) -> Result<CopyOutcome, HdtpError> {
    println!(
        "\nCopying files from {} to {}...",
        display_name(source),
        display_name(dest)
    );

    match copier.copy_tree(source, dest) {
        Ok(outcome) => {
            match outcome.details() {
                None => println!("Copy operation complete.\n"),
                Some(details) => println!(
                    "{} Copy reported issues:\n{}",
                    style("Warning:").yellow().bold(),
                    details
                ),
            }
            Ok(outcome)
        }
        Err(err) => {
            println!("Error during copy operation: {err}\n");
            Err(err)
        }
    }
}

fn print_delete_report(report: &DeleteReport) {
    for path in &report.deleted {
        println!("Deleted: {}", path.display());
    }
    for (path, err) in &report.failed {
        println!(
            "{} could not delete {}: {}",
            style("Warning:").yellow().bold(),
            path.display(),
            err
        );
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn prompt_error(error: std::io::Error) -> HdtpError {
    if error.kind() == ErrorKind::Interrupted {
        HdtpError::Interrupted
    } else {
        HdtpError::Io(error)
    }
}

fn format_completion(combined_dir: &Path, summary: &RunSummary) -> String {
    let mut lines = Vec::new();
    lines.push(separator());
    lines.push(format!(
        "4estGimp - HDTP has completed copying files to the {} folder.",
        combined_dir.display()
    ));
    lines.push("Ready to create archive files.".to_string());
    lines.push(separator());

    let warnings = summary.warning_count();
    if warnings > 0 {
        lines.push(format!(
            "{} {} warning(s) were reported above; check the affected files.",
            style("Note:").yellow().bold(),
            warnings
        ));
    }

    lines.push("\nAll files have been successfully combined.".to_string());
    lines.push("You can now proceed with creating the BA2 archives.".to_string());
    lines.push("\nThank You".to_string());
    lines.join("\n")
}

fn format_dry_run(paths: &ValidatedPaths) -> String {
    let mut lines = vec!["Dry-run plan:".to_string()];
    for step in run_steps() {
        match step {
            Step::AwaitAck(_) => {}
            Step::CopyFolder(folder) => lines.push(format!(
                "  COPY      {} -> {}",
                folder.name,
                paths.combined_dir.display()
            )),
            Step::DeleteConflicts(set) => {
                let mut absent = 0usize;
                for relative in set.relative_paths() {
                    match locate(&paths.base_path, &relative) {
                        Some(found) => lines.push(format!("  DELETE    {}", found.display())),
                        None => absent += 1,
                    }
                }
                if absent > 0 {
                    lines.push(format!(
                        "  ({absent} conflicting {} file(s) not present)",
                        set.label
                    ));
                }
            }
        }
    }
    lines.join("\n")
}

/// Text printed for a failed run, before the exit prompt
pub fn format_failure(error: &HdtpError) -> String {
    if error.is_validation_error() {
        return format!("Error: {error}");
    }
    if matches!(error, HdtpError::Interrupted) {
        return format!("\n{error}.");
    }

    let mut text = format!("\n{}: {}", error.category(), error);
    if let Some(hint) = error.hint() {
        text.push('\n');
        text.push_str(hint);
    }
    text
}

/// Print a failed run and hold the window open like a finished one
///
/// Validation failures return immediately; a bad path is obvious from the
/// message alone.
pub fn report_failure(error: &HdtpError, prompt: &mut dyn Prompt) {
    println!("{}", format_failure(error));
    if error.is_validation_error() || matches!(error, HdtpError::Interrupted) {
        return;
    }
    if let Err(e) = prompt.acknowledge(EXIT_PROMPT) {
        debug!(error = %e, "exit prompt failed after an aborted run");
    }
}

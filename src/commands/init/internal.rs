//! Internal implementation for init command

use chrono::Datelike;
use colored::Colorize;
use std::io::Write;

use crate::config::Config;
use crate::editor;
use crate::error::Result;
use crate::forge::{self, ForgeWriter, RemoteRepo};
use crate::pipeline::{self, PipelineReport};
use crate::project::ProjectSpec;
use crate::scaffold;

use super::{InitOptions, InitSummary};

/// Main execution logic for init command
pub fn execute_init(
    spec: &ProjectSpec,
    config: &Config,
    writer: &dyn ForgeWriter,
    options: &InitOptions,
    out: &mut dyn Write,
) -> Result<InitSummary> {
    let root = spec.root();
    let year = chrono::Local::now().year();

    // === STEP 0: PREFLIGHT (BEFORE ANY MUTATION, LOCAL OR REMOTE) ===
    scaffold::ensure_absent(&root)?;

    if options.dry_run {
        let placeholder = spec.mode().wants_remote().then(|| RemoteRepo {
            owner_login: "<owner>".to_string(),
            name: spec.name().to_string(),
            clone_url: RemoteRepo::github_clone_url("<owner>", spec.name()),
        });
        let _ = writeln!(out, "Plan for {} ({} mode):", root.display(), spec.mode());
        for step in pipeline::plan(spec, placeholder.as_ref(), year) {
            let _ = writeln!(out, "  {}", step);
        }
        return Ok(InitSummary {
            root,
            remote: None,
            report: PipelineReport::default(),
            dry_run: true,
        });
    }

    // === STEP 1: REMOTE (BEFORE ANY LOCAL COMMIT) ===
    let remote = if spec.mode().wants_remote() {
        let repo = forge::create_remote(writer, spec.name())?;
        let _ = writeln!(
            out,
            "{} Repository '{}/{}' created on GitHub.",
            "✓".green(),
            repo.owner_login,
            repo.name
        );
        Some(repo)
    } else {
        None
    };

    // === STEP 2: SEQUENCER ===
    let steps = pipeline::plan(spec, remote.as_ref(), year);
    tracing::info!(root = %root.display(), steps = steps.len(), "running sequencer");
    let report = pipeline::execute(&root, &steps, config.policy, out)?;

    if report.is_clean() {
        let _ = writeln!(
            out,
            "\n{} Project '{}' created successfully at {}",
            "✨".green(),
            spec.name(),
            root.display()
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} Project '{}' created at {} with failed steps:",
            "⚠".yellow(),
            spec.name(),
            root.display()
        );
        for (step, message) in report.failures() {
            let _ = writeln!(out, "  - {}: {}", step, message);
        }
    }

    // === STEP 3: EDITOR ===
    if !options.no_editor {
        if let Some(editor) = config.editor.as_deref() {
            match editor::open(&root, editor) {
                Ok(true) => {}
                Ok(false) => tracing::info!(editor, "editor not installed, skipping"),
                Err(e) => {
                    let _ = writeln!(out, "  {} {:#}", "⚠".yellow(), e);
                }
            }
        }
    }

    Ok(InitSummary {
        root,
        remote,
        report,
        dry_run: false,
    })
}

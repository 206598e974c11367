//! Command sequencer
//!
//! Turns a [`ProjectSpec`] (and optional [`RemoteRepo`]) into an ordered list of
//! typed [`Step`]s, then runs them one by one from the project root.
//!
//! Ordering is the only correctness mechanism: directories come before the
//! files inside them, and git steps follow
//! `init → add → commit → (branch -M main → remote add → push → checkout -b develop)`.
//! The parenthesized tail is only planned when a remote exists.
//!
//! # Failure policy
//!
//! Filesystem steps always abort the run. Git steps follow [`StepPolicy`]:
//! best-effort records the failure and continues, strict aborts.

mod step;

pub use step::Step;

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::config::StepPolicy;
use crate::error::{Result, SeedError};
use crate::forge::RemoteRepo;
use crate::git;
use crate::paths::DIRECTORY_MANIFEST;
use crate::project::ProjectSpec;
use crate::scaffold::{self, templates};

/// Result of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Failed(String),
}

/// What happened to every step of a run
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub outcomes: Vec<(Step, StepOutcome)>,
}

impl PipelineReport {
    pub fn failures(&self) -> impl Iterator<Item = (&Step, &str)> {
        self.outcomes.iter().filter_map(|(step, outcome)| match outcome {
            StepOutcome::Failed(msg) => Some((step, msg.as_str())),
            StepOutcome::Done => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Build the full step list for a project.
pub fn plan(spec: &ProjectSpec, remote: Option<&RemoteRepo>, year: i32) -> Vec<Step> {
    let mut steps: Vec<Step> = DIRECTORY_MANIFEST
        .iter()
        .map(|(_, path)| Step::CreateDir {
            path: path.to_string(),
        })
        .collect();

    steps.extend(
        templates::placeholder_set(spec.name(), year)
            .into_iter()
            .map(|(path, content)| Step::WriteFile { path, content }),
    );

    steps.extend(git_steps(remote));
    steps
}

/// Version-control part of the plan.
pub fn git_steps(remote: Option<&RemoteRepo>) -> Vec<Step> {
    let mut steps = vec![
        Step::GitInit,
        Step::GitAddAll,
        Step::GitCommit {
            message: git::INITIAL_COMMIT_MESSAGE.to_string(),
        },
    ];

    if let Some(remote) = remote {
        steps.extend([
            Step::GitBranchRename {
                branch: git::MAIN_BRANCH.to_string(),
            },
            Step::GitRemoteAdd {
                remote: git::REMOTE_NAME.to_string(),
                url: remote.clone_url.clone(),
            },
            Step::GitPush {
                remote: git::REMOTE_NAME.to_string(),
                branch: git::MAIN_BRANCH.to_string(),
            },
            Step::GitCheckoutNew {
                branch: git::DEVELOP_BRANCH.to_string(),
            },
        ]);
    }

    steps
}

/// Create `root`, then run every step from it, echoing each to `out` first.
pub fn execute(
    root: &Path,
    steps: &[Step],
    policy: StepPolicy,
    out: &mut dyn Write,
) -> Result<PipelineReport> {
    scaffold::create_root(root)?;

    let mut report = PipelineReport::default();
    for step in steps {
        // progress output never stops the run
        let _ = writeln!(out, "Executing command: {}", step);

        match step.run(root) {
            Ok(()) => report.outcomes.push((step.clone(), StepOutcome::Done)),
            Err(err) if step.is_filesystem() => return Err(err),
            Err(err) => {
                let message = match &err {
                    SeedError::StepFailed { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                tracing::debug!(step = %step, %message, "step failed");

                if policy == StepPolicy::Strict {
                    return Err(err);
                }
                let _ = writeln!(out, "  {} failed, continuing", "⚠".yellow());
                report
                    .outcomes
                    .push((step.clone(), StepOutcome::Failed(message)));
            }
        }
    }

    Ok(report)
}

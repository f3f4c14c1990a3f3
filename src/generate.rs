//! Batch driver: resolve every application and write its artifact.

use crate::registry::{artifact_file_name, render, write_artifact};
use crate::{resolve, AppDefinition, Error, GenerateOptions, ResolvedExecutable};
use std::path::PathBuf;

/// What happened to one application in a batch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AppOutcome {
    /// The artifact was written (or, in a dry run, would have been).
    Written {
        executable: ResolvedExecutable,
        /// Artifact path; `None` in a dry run.
        artifact: Option<PathBuf>,
    },

    /// No version directory was found. Not an error.
    NotDetected,

    /// Scanning failed. Other applications are still processed.
    Failed(Error),
}

impl AppOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Per-application outcomes, in the order the applications were given.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(AppDefinition, AppOutcome)>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, AppOutcome::Written { .. }))
    }

    pub fn not_detected(&self) -> usize {
        self.count(|o| matches!(o, AppOutcome::NotDetected))
    }

    pub fn failed(&self) -> usize {
        self.count(AppOutcome::is_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&AppOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Process every application in `options.apps`, one at a time.
///
/// Applications that are not installed, or whose scan fails, are recorded
/// in the report and the batch moves on; partial success is normal.
/// A failure while writing an artifact stops the whole batch and is
/// returned as `Err`, since later writes would fail the same way.
///
/// Artifacts are only touched for applications that resolve: an existing
/// artifact for an application that is no longer detected is left alone.
///
/// # Example
///
/// ```rust,no_run
/// use jetbrains_context_menu::{generate_all, AppOutcome, GenerateOptions};
///
/// let report = generate_all(&GenerateOptions::new("/apps")).unwrap();
/// for (app, outcome) in &report.outcomes {
///     if let AppOutcome::NotDetected = outcome {
///         println!("{} not detected.", app.display_name);
///     }
/// }
/// ```
pub fn generate_all(options: &GenerateOptions) -> Result<BatchReport, Error> {
    let mut report = BatchReport::default();

    for app in &options.apps {
        let outcome = match resolve(&options.installation_root, app) {
            Ok(Some(executable)) => generate_one(options, app, executable)?,
            Ok(None) => {
                tracing::info!(app = %app.display_name, "not detected");
                AppOutcome::NotDetected
            }
            Err(error) => {
                tracing::warn!(app = %app.display_name, %error, "scan failed");
                AppOutcome::Failed(error)
            }
        };
        report.outcomes.push((app.clone(), outcome));
    }

    tracing::debug!(
        written = report.written(),
        not_detected = report.not_detected(),
        failed = report.failed(),
        "batch finished"
    );
    Ok(report)
}

fn generate_one(
    options: &GenerateOptions,
    app: &AppDefinition,
    executable: ResolvedExecutable,
) -> Result<AppOutcome, Error> {
    if options.dry_run {
        return Ok(AppOutcome::Written {
            executable,
            artifact: None,
        });
    }

    let content = render(app, &executable.path);
    let path = write_artifact(
        &options.output_dir,
        &artifact_file_name(&app.executable_name),
        &content,
    )?;
    tracing::info!(
        app = %app.display_name,
        version = %executable.version,
        artifact = %path.display(),
        "wrote artifact"
    );

    Ok(AppOutcome::Written {
        executable,
        artifact: Some(path),
    })
}

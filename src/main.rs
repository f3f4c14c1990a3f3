//! CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jetbrains_context_menu::{
    default_installation_root, generate_all, load_definitions, AppKind, AppOutcome, BatchReport,
    GenerateOptions, DEFAULT_OUTPUT_DIR,
};

/// Generate "Open with" Explorer context-menu registry files for the newest
/// installed version of each JetBrains IDE.
#[derive(Parser, Debug)]
#[command(name = "jetbrains-context-menu", version)]
struct Cli {
    /// Toolbox apps directory [default: %USERPROFILE%\scoop\persist\jetbrains-toolbox\apps]
    #[arg(long, env = "JB_CONTEXT_ROOT")]
    root: Option<PathBuf>,

    /// Directory the .reg files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out: PathBuf,

    /// JSON file of application definitions replacing the built-in list
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only process these installation ids (repeatable)
    #[arg(long = "app", value_name = "INSTALLATION_ID")]
    apps: Vec<String>,

    /// Report what would be generated without writing anything
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(report) if batch_succeeded(&report) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            if let Some(hint) = e
                .downcast_ref::<jetbrains_context_menu::Error>()
                .map(|err| err.fix_suggestion())
            {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Not-detected applications are normal; any scan failure fails the run.
fn batch_succeeded(report: &BatchReport) -> bool {
    !report.has_failures()
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<BatchReport> {
    let root = match cli.root {
        Some(root) => std::path::absolute(&root)
            .with_context(|| format!("failed to resolve {}", root.display()))?,
        None => default_installation_root()?,
    };
    let apps = match &cli.config {
        Some(path) => load_definitions(path)?,
        None => AppKind::definitions(),
    };

    tracing::debug!(root = %root.display(), out = %cli.out.display(), "starting");
    let options = GenerateOptions::new(root)
        .output_dir(cli.out)
        .apps(apps)
        .only(&cli.apps)
        .dry_run(cli.list);

    if options.apps.is_empty() {
        anyhow::bail!("no application matches --app {}", cli.apps.join(", "));
    }

    let report = generate_all(&options)?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &BatchReport) {
    for (app, outcome) in &report.outcomes {
        match outcome {
            AppOutcome::Written {
                executable,
                artifact: Some(path),
            } => println!(
                "{} {}: wrote {}",
                app.display_name,
                executable.version,
                path.display()
            ),
            AppOutcome::Written { executable, .. } => println!(
                "{} {}: {}",
                app.display_name,
                executable.version,
                executable.path.display()
            ),
            AppOutcome::NotDetected => println!("{} not detected.", app.display_name),
            AppOutcome::Failed(error) => {
                eprintln!("{}: {error}", app.display_name);
                eprintln!("hint: {}", error.fix_suggestion());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["jetbrains-context-menu"]);
        assert_eq!(cli.out, PathBuf::from("out"));
        assert!(cli.apps.is_empty());
        assert!(!cli.list);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_scan_failure_fails_the_run() {
        use jetbrains_context_menu::Error;

        let mut report = BatchReport::default();
        report
            .outcomes
            .push((AppKind::PyCharm.definition(), AppOutcome::NotDetected));
        assert!(batch_succeeded(&report));

        report.outcomes.push((
            AppKind::CLion.definition(),
            AppOutcome::Failed(Error::Scan {
                path: PathBuf::from("/apps/CLion/ch-0"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
        ));
        assert!(!batch_succeeded(&report));
    }

    #[test]
    fn test_repeated_app_filter() {
        let cli = Cli::parse_from([
            "jetbrains-context-menu",
            "--root",
            "/apps",
            "--app",
            "CLion",
            "--app",
            "Rider",
            "--list",
            "-v",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("/apps")));
        assert_eq!(cli.apps, ["CLion", "Rider"]);
        assert!(cli.list);
        assert!(cli.verbose);
    }
}

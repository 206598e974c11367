use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use seedrepo::commands::init::{self, InitOptions};
use seedrepo::{forge, logging, Config, Mode, ProjectSpec, StepPolicy};

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Scaffold a new project, initialize git, optionally create it on GitHub",
    long_about = None
)]
struct Cli {
    /// Project folder name, created under the base path
    folder_name: Option<String>,

    /// g = GitHub + local, l = local only
    mode: Option<String>,

    /// Don't open the editor afterwards
    #[arg(long)]
    no_editor: bool,

    /// Abort at the first failing git step instead of continuing
    #[arg(long)]
    strict: bool,

    /// Print the planned steps without changing anything
    #[arg(long)]
    dry_run: bool,
}

fn print_usage() {
    println!("usage: seedrepo <folder_name> <g|l>");
    println!("  g  create the repository on GitHub and locally");
    println!("  l  create the repository locally only");
}

fn run(name: String, mode: Mode, cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if cli.strict {
        config.policy = StepPolicy::Strict;
    }

    let spec = ProjectSpec::new(name, config.base_path.clone(), mode)?;
    let writer = forge::writer_for(&config, mode.wants_remote())?;
    let options = InitOptions {
        no_editor: cli.no_editor,
        dry_run: cli.dry_run,
    };

    init::execute(&spec, &config, writer.as_ref(), &options, &mut std::io::stdout())?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!(error = %e, "unusable arguments");
            print_usage();
            return Ok(());
        }
    };

    let mode = cli.mode.as_deref().and_then(Mode::from_flag);
    let (Some(name), Some(mode)) = (cli.folder_name.clone(), mode) else {
        print_usage();
        return Ok(());
    };

    // Failures are reported, not signalled: the exit status stays 0.
    if let Err(err) = run(name, mode, &cli) {
        println!("Error: {:#}", err);
        println!("Failed to create project.");
    }

    Ok(())
}

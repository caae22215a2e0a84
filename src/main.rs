use std::path::PathBuf;

use argh::FromArgs;
use issue_triage::{load_issues, Report};

const DEFAULT_INPUT: &str = "issues.json";
const INPUT_ENV: &str = "ISSUES_FILE";

#[derive(FromArgs)]
/// Summarize issues from a local JSON export.
struct Args {
    /// path to the issues file (defaults to $ISSUES_FILE, then issues.json)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    List(ListArgs),
    Open(OpenArgs),
}

#[derive(FromArgs)]
/// List every issue with its state and labels.
#[argh(subcommand, name = "list")]
struct ListArgs {}

#[derive(FromArgs)]
/// List open issues with a priority, followed by a ranked summary.
#[argh(subcommand, name = "open")]
struct OpenArgs {}

fn input_path(args: &Args) -> PathBuf {
    args.input
        .clone()
        .or_else(|| std::env::var_os(INPUT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn run(args: Args) -> anyhow::Result<()> {
    let path = input_path(&args);
    let issues = load_issues(&path)?;

    let stdout = std::io::stdout();
    let mut report = Report::new(stdout.lock())?;
    match args.command {
        Command::List(_) => report.list_issues(&issues)?,
        Command::Open(_) => report.analyze_open_issues(&issues)?,
    }
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

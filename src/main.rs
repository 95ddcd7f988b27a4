use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use publishguard::{export_url, Analyzer, RuleOptions, SeverityPolicy};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a saved HTML export and print the analysis as JSON
    Analyze {
        /// HTML export of the document
        file: PathBuf,
        /// URL of the document the export came from
        #[arg(long)]
        source_url: String,
        /// JSON file with rule thresholds and severities
        #[arg(long)]
        config: Option<PathBuf>,
        /// Severity policy; overrides the one in the config file
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the HTML export URL for a Google Docs link
    ExportUrl { url: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Advisory,
    Strict,
}

impl From<PolicyArg> for SeverityPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Advisory => SeverityPolicy::Advisory,
            PolicyArg::Strict => SeverityPolicy::Strict,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file,
            source_url,
            config,
            policy,
            pretty,
        } => {
            let mut options = match config {
                Some(path) => RuleOptions::from_file(&path)
                    .with_context(|| format!("loading rule options from {}", path.display()))?,
                None => RuleOptions::default(),
            };
            if let Some(policy) = policy {
                options.severities.policy = policy.into();
            }
            debug!(?options, "rule options");

            let html = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let analysis = Analyzer::offline()
                .with_options(options)
                .analyze_bytes(&source_url, &html)
                .with_context(|| format!("analyzing {}", file.display()))?;

            let json = if pretty {
                serde_json::to_string_pretty(&analysis)?
            } else {
                serde_json::to_string(&analysis)?
            };
            println!("{}", json);
        }
        Command::ExportUrl { url } => {
            println!("{}", export_url(&url));
        }
    }

    Ok(())
}

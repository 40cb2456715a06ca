use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mock_pdfs::summary::{self, SummaryOutcome};
use mock_pdfs::{batch, output, FixtureGenerator, GenerationPlan};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mockpdfs",
    about = "Generate and summarize synthetic business PDFs for testing",
    version,
    author
)]
struct Cli {
    /// Fixture directory (defaults to testdata/mock_pdfs under the workspace root)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PlanArgs {
    /// Multiply the number of index-numbered fixtures per category
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,
}

impl PlanArgs {
    fn plan(&self) -> GenerationPlan {
        GenerationPlan::default().scaled(self.scale)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Invoices, contracts, quarterly reports, manuals and receipts
    Baseline {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Large and protected documents, forms, financial statements, presentations and NDAs
    Extended {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Monthly, weekly, quarterly and annual documents dated relative to today
    Dated,

    /// Summarize the PDFs currently in the fixture directory
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every generator, then print the summary
    All {
        #[command(flatten)]
        plan: PlanArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_pdfs=info,mockpdfs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn prepare(dir: PathBuf) -> Result<FixtureGenerator> {
    let dir = output::ensure_output_dir(dir).context("Failed to create output directory")?;
    Ok(FixtureGenerator::new(dir))
}

fn print_summary<W: Write>(dir: PathBuf, json: bool, out: &mut W) -> Result<()> {
    if !json {
        summary::summarize(&dir, out)?;
        return Ok(());
    }
    match summary::build(&dir)? {
        SummaryOutcome::MissingDirectory(_) => writeln!(out, "Mock PDFs directory not found!")?,
        SummaryOutcome::Report(report) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dir = cli.output_dir.unwrap_or_else(output::default_output_dir);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Baseline { plan } => {
            let mut generator = prepare(dir)?;
            batch::run_baseline(&mut generator, &plan.plan(), &mut out)?;
        }

        Commands::Extended { plan } => {
            let mut generator = prepare(dir)?;
            batch::run_extended(&mut generator, &plan.plan(), &mut out)?;
        }

        Commands::Dated => {
            let mut generator = prepare(dir)?;
            batch::run_dated(&mut generator, &GenerationPlan::default(), &mut out)?;
        }

        Commands::Summary { json } => {
            print_summary(dir, json, &mut out)?;
        }

        Commands::All { plan } => {
            let plan = plan.plan();
            let mut generator = prepare(dir.clone())?;
            let mut report = batch::run_baseline(&mut generator, &plan, &mut out)?;
            writeln!(out)?;
            report.merge(batch::run_extended(&mut generator, &plan, &mut out)?);
            writeln!(out)?;
            report.merge(batch::run_dated(&mut generator, &plan, &mut out)?);
            writeln!(out)?;

            if report.failed() > 0 {
                tracing::warn!(
                    failed = report.failed(),
                    attempted = report.attempted(),
                    "some fixtures were skipped"
                );
            }
            print_summary(dir, false, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

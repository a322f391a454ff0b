//! Foldrun CLI - submit protein-folding jobs
//!
//! # Commands
//!
//! ```bash
//! foldrun submit protein.fasta --experiment-id amylase-fold-12 \
//!     --protein-type monomer --small-bfd yes --relaxation yes --prediction-count 3
//! foldrun inspect protein.fasta     # Count sequences and residues locally
//! foldrun status                    # List pipeline runs on the backend
//! ```
//!
//! The backend and token come from `--backend`/`--token` or from
//! `FOLDRUN_BACKEND_HOST`/`FOLDRUN_ACCESS_TOKEN` (a `.env` file is honored).

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use foldrun::{
    load_fasta, submitter, ClientConfig, CliError, CliResult, ACCESS_TOKEN_VAR, BACKEND_HOST_VAR,
    DEFAULT_LOG_FILTER,
};
use foldrun_core::{inspect_bytes, FastaSummary, JobForm, Notification, ProteinType, Severity, Toggle};

#[derive(Parser)]
#[command(name = "foldrun")]
#[command(about = "Submit protein-folding jobs to a folding portal backend", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = BACKEND_HOST_VAR)]
    backend: Option<String>,

    /// Access token sent as `Authorization: Bearer`
    #[arg(long, global = true, env = ACCESS_TOKEN_VAR, hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a fold job
    Submit {
        /// FASTA file with the protein sequence(s)
        fasta: Option<PathBuf>,

        /// Experiment identifier, e.g. amylase-fold-12
        #[arg(short, long, default_value = "")]
        experiment_id: String,

        /// monomer or multimer
        #[arg(short, long)]
        protein_type: Option<ProteinType>,

        /// Use the small BFD database (yes/no)
        #[arg(long)]
        small_bfd: Option<Toggle>,

        /// Run relaxation after folding (yes/no)
        #[arg(long)]
        relaxation: Option<Toggle>,

        /// Multimer predictions per model, e.g. 3
        #[arg(short = 'n', long, default_value = "")]
        prediction_count: String,

        /// Refuse to submit a FASTA file that fails local inspection
        #[arg(long)]
        check: bool,
    },

    /// Inspect a FASTA file without submitting it
    Inspect {
        /// FASTA file
        fasta: PathBuf,
    },

    /// List pipeline runs known to the backend
    Status {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present) before clap reads env fallbacks
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let timeout = cli.timeout.map(Duration::from_secs);

    let result = match cli.command {
        Commands::Submit {
            fasta,
            experiment_id,
            protein_type,
            small_bfd,
            relaxation,
            prediction_count,
            check,
        } => {
            let mut form = JobForm::new();
            form.set_experiment_id(experiment_id);
            form.set_protein_type(protein_type);
            form.set_small_bfd(small_bfd);
            form.set_relaxation(relaxation);
            form.set_prediction_count(prediction_count);

            match ClientConfig::new(cli.backend, cli.token, timeout) {
                Ok(config) => cmd_submit(&config, form, fasta.as_deref(), check).await,
                Err(e) => Err(e),
            }
        }

        Commands::Inspect { fasta } => cmd_inspect(&fasta).await,

        Commands::Status { json } => match ClientConfig::new(cli.backend, cli.token, timeout) {
            Ok(config) => cmd_status(&config, json).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_submit(config: &ClientConfig, mut form: JobForm, fasta: Option<&Path>, check: bool) -> CliResult<()> {
    if let Some(path) = fasta {
        let file = load_fasta(path).await?;
        form.set_file(file);
        eprintln!("📄 {}", form.file_label());

        match form.fasta_summary() {
            Some(Ok(summary)) => {
                eprintln!("   {}", summary.describe());
                if let Some(chosen) = form.protein_type() {
                    if chosen != summary.suggested_protein_type() {
                        eprintln!(
                            "   ⚠️  Protein type is {} but the file looks like a {}",
                            chosen,
                            summary.suggested_protein_type()
                        );
                    }
                }
            }
            Some(Err(e)) if check => return Err(e.clone().into()),
            Some(Err(e)) => eprintln!("   ⚠️  {}", e),
            None => {}
        }
    }

    let submitter = submitter(config)?;
    let outcome = submitter.submit(form.submission()).await;
    let notification = Notification::from_outcome(&outcome);

    match outcome {
        Ok(_) => {
            eprintln!(
                "{} Submitted at {}",
                Severity::Success.emoji(),
                chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
            );
            println!("{}", notification.message);
            Ok(())
        }
        Err(e) => Err(CliError::Submit(e)),
    }
}

async fn cmd_inspect(path: &Path) -> CliResult<()> {
    eprintln!("📄 Inspecting: {}", path.display());

    let file = load_fasta(path).await?;
    let summary = inspect_bytes(&file.content)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &FastaSummary) {
    for (i, sequence) in summary.sequences.iter().enumerate() {
        println!("  {:>3}. {:<30} {:>6} residues", i + 1, sequence.id, sequence.length);
    }
    println!();
    println!("✅ {}", summary.describe());
}

async fn cmd_status(config: &ClientConfig, json: bool) -> CliResult<()> {
    let submitter = submitter(config)?;
    let runs = submitter.list_runs().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
        return Ok(());
    }

    if runs.is_empty() {
        eprintln!("📋 No pipeline runs yet.");
        return Ok(());
    }

    eprintln!("📋 Pipeline runs ({}):\n", runs.len());
    println!(
        "{:<28} {:<20} {:<12} {:<8} {}",
        "EXPERIMENT", "SEQUENCE", "STATUS", "TIME", "USER"
    );
    for run in &runs {
        println!(
            "{:<28} {:<20} {:<12} {:<8} {}",
            run.experiment_id,
            run.sequence,
            run.status,
            run.duration_label(),
            run.user
        );
    }

    Ok(())
}

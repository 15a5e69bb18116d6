//! Operator CLI for case intake: extract candidates from text or a
//! screenshot, review the staged drafts, commit them to the store, and
//! walk persisted cases through pending → complete.

mod display;
mod workfile;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use caseflow_core::{Category, DraftField, EditOutcome, Session};
use caseflow_http::{GatewayClient, StoreClient};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "caseflow", about = "Extract, review, and commit case records")]
struct Cli {
    /// Base URL of the case service.
    #[arg(long, env = "CASEFLOW_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Work file holding the staged draft set between invocations.
    #[arg(long, default_value = "caseflow-drafts.json")]
    draft_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract candidate cases from text and stage them as drafts.
    Extract {
        /// Text to extract from. Reads stdin when omitted and --file is
        /// unset (pipe a pasted message in).
        text: Option<String>,

        /// Read the text from a file instead.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Extract candidate cases from a screenshot or photo.
    ExtractImage {
        path: PathBuf,
    },
    /// Show the staged drafts.
    Drafts,
    /// Edit one field (case_no, source, or category) of a staged draft.
    Edit {
        case_no: String,
        field: DraftField,
        value: String,
    },
    /// Commit one staged draft to the store.
    Commit {
        case_no: String,
        #[arg(long, default_value = "free")]
        category: Category,
    },
    /// Commit every staged draft, in order. Best effort: the staging
    /// area is cleared even if some commits fail.
    CommitAll {
        #[arg(long, default_value = "free")]
        category: Category,
    },
    /// List persisted cases.
    List {
        /// Only show actionable (pending) cases.
        #[arg(long)]
        pending: bool,
    },
    /// Mark a persisted case complete.
    Complete {
        id: i64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let gateway = GatewayClient::new(cli.api_url.clone());
    let store = StoreClient::new(cli.api_url.clone());
    let parked = workfile::load(&cli.draft_file)?;
    let mut session = Session::with_drafts(gateway, store, parked);

    match cli.command {
        Command::Extract { text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading stdin")?;
                    buf
                }
            };
            let count = session.extract_text(&text).await?;
            workfile::save(&cli.draft_file, session.drafts())?;
            println!("Staged {count} draft(s).");
            display::draft_table(session.drafts().as_slice());
        }
        Command::ExtractImage { path } => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            let count = session.extract_image(bytes, &filename).await?;
            workfile::save(&cli.draft_file, session.drafts())?;
            println!("Staged {count} draft(s).");
            display::draft_table(session.drafts().as_slice());
        }
        Command::Drafts => {
            display::draft_table(session.drafts().as_slice());
        }
        Command::Edit { case_no, field, value } => {
            match session.edit_draft(&case_no, field, &value) {
                EditOutcome::Applied => {
                    workfile::save(&cli.draft_file, session.drafts())?;
                    display::draft_table(session.drafts().as_slice());
                }
                EditOutcome::NotFound => bail!("no staged draft with case_no {case_no:?}"),
                EditOutcome::InvalidValue(value) => {
                    bail!("invalid value {value:?} for field {field}")
                }
            }
        }
        Command::Commit { case_no, category } => {
            let persisted = session.commit_one(&case_no, category).await?;
            workfile::save(&cli.draft_file, session.drafts())?;
            println!("Committed {} as case {}.", persisted.case_no, persisted.id);
            let snapshot = session.refresh().await?.to_vec();
            display::case_table(&snapshot);
        }
        Command::CommitAll { category } => {
            let summary = session.commit_all(category).await;
            workfile::save(&cli.draft_file, session.drafts())?;
            println!(
                "Committed {} draft(s), {} failed.",
                summary.committed(),
                summary.failed()
            );
            for (case_no, outcome) in &summary.outcomes {
                if let Err(err) = outcome {
                    eprintln!("  {case_no}: {err}");
                }
            }
            let snapshot = session.refresh().await?.to_vec();
            display::case_table(&snapshot);
        }
        Command::List { pending } => {
            session.refresh().await?;
            if pending {
                display::case_ref_table(&session.pending());
            } else {
                display::case_table(session.snapshot());
            }
        }
        Command::Complete { id } => {
            let updated = session.mark_complete(id).await?;
            println!("Case {} marked {}.", updated.id, updated.status);
            session.refresh().await?;
            display::case_ref_table(&session.pending());
        }
    }

    Ok(())
}

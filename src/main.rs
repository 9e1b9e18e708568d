//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_history::{
    cli::{Commands, FflHistory, ImportCmd},
    commands::{
        import_adp::{handle_import_adp, SpanCheck},
        import_points::handle_import_points,
        merge::handle_merge,
    },
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = FflHistory::parse();

    match app.command {
        Commands::Import { cmd } => match cmd {
            ImportCmd::Points {
                start,
                end,
                snapshot_dir,
            } => handle_import_points(start, end, snapshot_dir)
                .await
                .context("performance import failed")?,

            ImportCmd::Adp {
                dir,
                start,
                end,
                span_threshold,
                allow_span_violations,
                snapshot_dir,
            } => handle_import_adp(
                dir,
                start,
                end,
                SpanCheck {
                    threshold: span_threshold,
                    allow_violations: allow_span_violations,
                },
                snapshot_dir,
            )
            .await
            .context("draft position import failed")?,
        },

        Commands::Merge {
            scheme,
            csv,
            json,
            snapshot_dir,
        } => handle_merge(scheme, csv, json, snapshot_dir).context("merge failed")?,
    }

    Ok(())
}

/// Log to stderr so stdout carries only results.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ffl_history=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

//! Interactive lookups from stdin.
//!
//! Each non-empty line replaces the session input and submits it. While a
//! lookup is in flight further submissions are ignored; invalid identifiers
//! are rejected locally. The loop ends once input is closed and no lookup is
//! pending.

use std::future::Future;
use std::sync::Arc;

use deuda_client::LookupError;
use deuda_core::session::{LookupOutcome, LookupSession, Submission};
use deuda_core::{DebtorHistory, Identifier, build_chart};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum WatchEvent {
    Ignored {
        input: String,
    },
    Rejected {
        input: String,
        error: String,
    },
    Completed {
        identifier: String,
        #[serde(flatten)]
        outcome: LookupOutcome,
    },
}

type FetchResult = Result<Result<DebtorHistory, LookupError>, JoinError>;

fn outcome_for(id: &Identifier, result: FetchResult) -> LookupOutcome {
    match result {
        Ok(Ok(history)) => LookupOutcome::Found {
            chart: build_chart(&history),
        },
        Ok(Err(error)) => {
            tracing::warn!(%error, identifier = %id, "lookup failed");
            LookupOutcome::Failed {
                message: error.user_message(),
            }
        }
        Err(error) => {
            tracing::error!(%error, identifier = %id, "lookup task did not finish");
            LookupOutcome::Failed {
                message: "The lookup failed.".to_string(),
            }
        }
    }
}

async fn watch_loop<R, F, Fut, E>(input: R, fetch: F, mut emit: E) -> anyhow::Result<LookupSession>
where
    R: AsyncBufRead + Unpin,
    F: Fn(Identifier) -> Fut,
    Fut: Future<Output = Result<DebtorHistory, LookupError>> + Send + 'static,
    E: FnMut(WatchEvent) -> anyhow::Result<()>,
{
    let mut session = LookupSession::new();
    let mut lines = input.lines();
    let (tx, mut rx) = mpsc::channel::<(Identifier, FetchResult)>(1);
    let mut input_open = true;

    while input_open || session.is_busy() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                session.edit(line);
                match session.submit() {
                    Submission::Started(id) => {
                        tracing::info!(identifier = %id, "lookup started");
                        let tx = tx.clone();
                        // A panicking fetch still reports back, so busy always clears.
                        let request = tokio::spawn(fetch(id.clone()));
                        tokio::spawn(async move {
                            let _ = tx.send((id, request.await)).await;
                        });
                    }
                    Submission::Ignored => emit(WatchEvent::Ignored {
                        input: session.input().to_string(),
                    })?,
                    Submission::Rejected(error) => emit(WatchEvent::Rejected {
                        input: session.input().to_string(),
                        error: error.to_string(),
                    })?,
                }
            }
            Some((id, result)) = rx.recv() => {
                let outcome = outcome_for(&id, result);
                emit(WatchEvent::Completed {
                    identifier: id.to_string(),
                    outcome: outcome.clone(),
                })?;
                session.complete(outcome);
            }
        }
    }

    Ok(session)
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = Arc::clone(&ctx.registry);
    let fetch = move |id: Identifier| {
        let registry = Arc::clone(&registry);
        async move { registry.fetch_history(&id).await }
    };
    let format = flags.format;

    let stdin = BufReader::new(tokio::io::stdin());
    watch_loop(stdin, fetch, |event| output(&event, format)).await?;
    Ok(())
}

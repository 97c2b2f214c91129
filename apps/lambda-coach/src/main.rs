//! lambda-coach — AWS Lambda entrypoint for agent coach lookups.
//!
//! Purpose
//! - Handle action-group function events from the conversational agent.
//! - Answer "who coached team T at position P in season Y" with one DynamoDB
//!   point-read and return the sentence in the agent response envelope.
//!
//! Notes
//! - The DynamoDB client is built once at cold start and shared by every
//!   invocation handled by this process.
//! - Logging goes through `tracing` to stdout for CloudWatch.

mod config;
mod handler;

use aws_dynamo::DynamoCoachRepo;
use config::{Config, LogFormat};
use domain::service::CoachService;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = Config::from_env().map_err(|e| {
        eprintln!("{e}");
        Error::from(e.to_string())
    })?;
    init_tracing(&cfg.log_format);

    let repo = DynamoCoachRepo::new(cfg.table_name.clone())
        .map_err(|e| format!("dynamo init error: {e}"))?;
    info!(table = %repo.table(), "coach lookup ready");
    let svc = Arc::new(CoachService::new(repo));

    let func = service_fn(move |event: LambdaEvent<Value>| {
        let svc = svc.clone();
        async move { Ok::<_, Error>(handler::handle_event(svc.as_ref(), &event.payload)) }
    });
    run(func).await
}

fn init_tracing(format: &LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_current_span(false)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        LogFormat::Text => {
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

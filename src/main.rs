use std::process::ExitCode;

use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trpc_smoke::endpoint::TASK_GET_ALL;
use trpc_smoke::{ApiBase, SmokeCheck};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "trpc_smoke=info".into()))
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            "trpc-smoke".into(),
            std::io::stdout,
        ))
        .init();

    let base = ApiBase::from_env();
    info!(
        base = base.as_str(),
        procedure = TASK_GET_ALL,
        "running smoke check"
    );

    match SmokeCheck::new(base).expect_ok(TASK_GET_ALL).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "smoke check failed");
            ExitCode::FAILURE
        }
    }
}

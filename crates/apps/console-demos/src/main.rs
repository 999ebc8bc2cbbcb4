use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use console_demos::{AppError, DemoConfig, Selection, run_selection};
use domain::Stdout;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so it never mixes with demo output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "console_demos=info,fetch_feature=warn,product_feature=warn".into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = ?err, "Demo run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = DemoConfig::from_env()?;
    let selection = Selection::from_args(env::args().skip(1))?;

    info!(?selection, ?config, "Starting");

    run_selection(selection, &config, Arc::new(Stdout)).await
}

use tracing_subscriber::EnvFilter;

use triagem::{api, config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Triagem starting v{}", config::APP_VERSION);

    if let Err(e) = api::server::serve(config::bind_addr()).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}

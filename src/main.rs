use alias_shortener::config::{self, Config};
use alias_shortener::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);

    tracing::info!(env = ?config.app_env, "starting alias-shortener");
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: text for local runs, JSON otherwise.
/// `RUST_LOG` takes precedence over the environment's default level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.app_env.default_log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.app_env.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

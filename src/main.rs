use anyhow::Result;
use clap::Parser;
use soulcode::config::AppConfig;
use soulcode::ui;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "soulcode",
    about = "SoulCode — terminal K-Saju reading client",
    version
)]
struct Args {
    /// Data directory for config.toml
    #[arg(long, env = "SOULCODE_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// PayPal REST client id
    #[arg(long, env = "PAYPAL_CLIENT_ID", hide_env_values = true)]
    paypal_client_id: Option<String>,

    /// PayPal REST secret
    #[arg(long, env = "PAYPAL_SECRET", hide_env_values = true)]
    paypal_secret: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SOULCODE_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::new(
        args.data_dir,
        args.api_key,
        args.paypal_client_id,
        args.paypal_secret,
        args.log,
    );

    // Logs go to stderr so they never interleave with the wizard screens.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .with_writer(std::io::stderr)
        .init();

    ui::run(&config).await
}

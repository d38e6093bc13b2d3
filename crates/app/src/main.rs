use clap::Parser;

mod settings;

#[derive(Parser, Debug)]
#[command(name = "walletd")]
#[command(about = "Shared wallets with multi-owner spending approval")]
struct Cli {
    /// Settings file, without extension (also read from `WALLETD_CONFIG`).
    #[arg(long, env = "WALLETD_CONFIG", default_value = "config/walletd")]
    config: String,
    /// Override the bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut settings = settings::Settings::new(&cli.config)?;
    if let Some(bind) = cli.bind {
        settings.server.bind = bind;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "walletd={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder().build();
    let listener = match tokio::net::TcpListener::bind(settings.address()).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    tracing::info!("server stopped");

    Ok(())
}

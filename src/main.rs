use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hashdrop::{api::create_router, ApplicationBuilder, Config};

#[tokio::main]
async fn main() {
    // Configuration is needed to pick the log format, so it is loaded first
    // and reported once logging is up.
    let config = Config::from_env();

    init_tracing(config.as_ref().map(|c| c.log_json).unwrap_or(false));

    let config = match config.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hashdrop=info,tower_http=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    info!(
        port = config.port,
        storage_dir = ?config.storage_dir,
        max_file_size_mb = config.max_file_size_mb,
        public_upload = config.public_upload,
        "Starting hashdrop"
    );

    let listen_addr = config.listen_addr();
    let state = ApplicationBuilder::new(config)
        .with_infrastructure()
        .await?
        .build()?;

    let app = create_router(state);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

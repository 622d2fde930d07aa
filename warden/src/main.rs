use args::Args;
use clap::Parser;
use server::ServeConfig;

mod args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    server::logger::init(&args.log_filter);

    let config = config::Config::load(&args.config)?;
    log::info!("Loaded configuration from {}", args.config.display());

    let listen_address = args
        .listen_address
        .or(config.server.listen_address)
        .unwrap_or_else(|| ([127, 0, 0, 1], 8000).into());

    server::serve(ServeConfig {
        listen_address,
        config,
    })
    .await?;

    Ok(())
}

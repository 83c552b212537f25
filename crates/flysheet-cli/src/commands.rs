use flysheet_server::{FlysheetServer, ServerConfig};

use crate::cli::{Cli, Command, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(url) = args.public_url {
        config.public_url = Some(url);
    }
    if let Some(root) = args.storage_root {
        config.storage_root = Some(root);
    }
    if let Some(secs) = args.ttl_secs {
        config.ttl_secs = secs;
    }
    if let Some(secs) = args.reclaim_interval_secs {
        config.reclaim_interval_secs = secs;
    }

    FlysheetServer::new(config).serve().await?;
    Ok(())
}

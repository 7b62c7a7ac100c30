use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use thumbs::{
    app::App,
    infrastructure::{
        cli::{Cli, Commands},
        config::Config,
        notifier::HttpNotifier,
        tui::Tui,
    },
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(endpoint) = args.endpoint {
        config.notifier.endpoint = endpoint;
    }

    log::info!("Welcome to {}!", env!("CARGO_PKG_NAME"));

    let notifier = HttpNotifier::new(&config.notifier.endpoint, config.notifier.timeout())?;
    log::info!("Notifying {}", notifier.like_url());

    match args.command {
        Some(Commands::Status) => {
            let current = notifier.current().await?;
            println!("{}", if current.liked { "liked" } else { "disliked" });
        }
        None => {
            let mut app = App::new(config, Arc::new(notifier));
            let mut tui = Tui::new()?.mouse(!args.no_mouse);
            app.run(&mut tui, args.frame_rate).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}

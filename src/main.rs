use clap::Parser;
use color_eyre::eyre::Result;

use lovai::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // --start-date wins over the config file
    let config = Config::new()?.with_start_date(args.start_date);
    trace_dbg!(level: tracing::Level::INFO, &config.couple);

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new_with_config(config, Box::new(tui));
    runner.run().await?;

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

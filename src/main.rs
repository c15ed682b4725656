use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use othellomind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = CliOptions::parse();

    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let result = Runner::new(options).and_then(|mut runner| runner.run());
    match &result
    {
        | Err(e) if e.fatal() => log::error!("fatal error: {}", e),
        | Err(e) => log::warn!("could not complete the request:\n{}", e),
        | Ok(_) => log::debug!("done"),
    }

    result
}

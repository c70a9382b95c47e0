use anyhow::Context;
use clap::Parser;
use hdtp::commands::run::{report_failure, run};
use hdtp::config::Cli;
use hdtp::executor::copier_for;
use hdtp::interrupt::{install_interrupt_handler, EXIT_FAILURE};
use hdtp::logging::init_logging;
use hdtp::ui::{progress_callback, ConsolePrompt};
use hdtp::{Config, HdtpError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut prompt = ConsolePrompt::new();

    match try_main(cli, &mut prompt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<HdtpError>() {
                Some(hdtp_err) => report_failure(hdtp_err, &mut prompt),
                None => println!("\nAn unexpected error occurred: {err:#}"),
            }
            ExitCode::from(EXIT_FAILURE as u8)
        }
    }
}

fn try_main(cli: Cli, prompt: &mut ConsolePrompt) -> anyhow::Result<()> {
    let config = Config::try_from(cli)?;
    init_logging(config.verbose);
    install_interrupt_handler().context("failed to install Ctrl-C handler")?;

    tracing::info!(version = hdtp::VERSION, "starting");
    let copier = copier_for(config.copier, Some(progress_callback()));
    run(&config, copier.as_ref(), prompt)?;
    Ok(())
}

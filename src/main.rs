use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use sxl_xlsx::{CliArgs, ConvertConfig, LoggingConfig, MissingTemplate, init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();

    let _guard = init_logging(LoggingConfig::from_env())?;

    let config = match ConvertConfig::from_args(cli) {
        Ok(config) => config,
        Err(err) if err.is::<MissingTemplate>() => CliArgs::command()
            .error(ErrorKind::MissingRequiredArgument, err)
            .exit(),
        Err(err) => return Err(err),
    };

    // Validate configuration before touching the template (fail-fast)
    config.validate()?;

    run(&config)
}

use clap::{CommandFactory, Parser};
use log::error;
use ssoconf::{
    cli::{Cli, Commands, generate_completions},
    commands::handle_session_commands,
    config::config_path,
    error::{ConfigFileError, ExitCode},
    logger,
};
use std::process::exit;

fn main() {
    let args = Cli::parse();
    if let Err(e) = logger::init(args.verbose) {
        eprintln!("Could not install logger: {e}");
    }

    if let Err(e) = run(&args) {
        error!("{e}");
        if let Some(file_err) = e.downcast_ref::<ConfigFileError>() {
            exit(file_err.exit_code());
        } else {
            exit(1);
        }
    }
    exit(0);
}

fn run(args: &Cli) -> anyhow::Result<()> {
    match &args.command {
        Commands::Session { command } => {
            let path = config_path(args.config_file.as_deref())?;
            handle_session_commands(command, &path)
        }
        Commands::Completions { shell } => Ok(generate_completions(*shell, &mut Cli::command())?),
    }
}

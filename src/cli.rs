use crate::commands::SessionCommands;
use clap::{Command, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::{io, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ssoconf", about = "Manage SSO sessions and their role profiles in AWS config files", long_about = None, version)]
pub struct Cli {
    #[arg(long = "config-file", global = true, help = "Config file to edit [default: $AWS_CONFIG_FILE or ~/.aws/config]")]
    pub config_file: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", global = true, help = "Print debug output")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add, list and remove sso-session sections")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn generate_completions(shell: Shell, cmd: &mut Command) -> io::Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DeleteSessionArgs;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::parse_from(["ssoconf", "session", "delete", "sso-session:foo", "-y", "--config-file", "/tmp/config"]);
        assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/config")));
        match cli.command {
            Commands::Session {
                command: SessionCommands::Delete(DeleteSessionArgs { name, yes }),
            } => {
                assert_eq!(name, "sso-session:foo");
                assert!(yes);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

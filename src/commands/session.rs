use crate::{
    print_diff,
    session::{
        DeleteOutcome, SsoSessionProfile, delete_sso_connection, is_sso_session_connection, list_sso_sessions, session_name_from_connection_id,
        update_sso_session,
    },
    store::{ConfigFiles, FileConfigFiles, LoggingWatcher},
};
use anyhow::bail;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use profile_file::{plan_sso_session_removal, to_content};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum SessionCommands {
    #[command(about = "Removes an sso-session and the first role profile created for it")]
    Delete(DeleteSessionArgs),
    #[command(about = "Adds or updates an sso-session")]
    Add(AddSessionArgs),
    #[command(about = "Lists all sso-sessions", visible_alias = "ls")]
    List(ListSessionArgs),
}

#[derive(Args, Debug, Default)]
pub struct DeleteSessionArgs {
    #[arg(help = "Name of the sso-session, a connection id like `sso-session:<name>` is accepted as well")]
    pub name: String,
    #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
    pub yes: bool,
}

#[derive(Args, Debug, Default)]
pub struct AddSessionArgs {
    #[arg(help = "Name of the sso-session")]
    pub name: String,
    #[arg(long = "start-url", help = "Start URL of the identity center portal")]
    pub start_url: String,
    #[arg(long = "region", help = "Region of the identity center instance")]
    pub region: String,
    #[arg(long = "scope", help = "Registration scope, can be given multiple times")]
    pub scopes: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListSessionArgs {
    #[arg(long = "json", help = "Print sessions as JSON")]
    pub json: bool,
}

pub fn handle_session_commands(command: &SessionCommands, config_file: &Path) -> anyhow::Result<()> {
    let files = FileConfigFiles::new(config_file);
    match command {
        SessionCommands::Delete(args) => delete_session(&files, args),
        SessionCommands::Add(args) => add_session(&files, args),
        SessionCommands::List(args) => list_sessions(&files, args),
    }
}

pub fn delete_session(files: &impl ConfigFiles, args: &DeleteSessionArgs) -> anyhow::Result<()> {
    //connection ids other than `sso-session:<name>` are not backed by the config file
    if args.name.contains(':') && !is_sso_session_connection(&args.name) {
        bail!("{} is not an sso-session connection", args.name);
    }
    let name = session_name_from_connection_id(&args.name);
    let before = files.read_lines()?;

    let removal = plan_sso_session_removal(&before, name);
    if removal.is_empty() {
        warn!("sso-session {name} does not exist in {}", files.path().display());
        return Ok(());
    }

    if !args.yes {
        let sections = [&removal.session, &removal.profile]
            .into_iter()
            .flatten()
            .map(|range| before[range.start].as_str())
            .collect::<Vec<_>>()
            .join(" and ");
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {sections} from {}?", files.path().display()))
            .default(false)
            .interact()?;
        if !confirmed {
            info!("Nothing was changed.");
            return Ok(());
        }
    }

    match delete_sso_connection(files, &LoggingWatcher, name)? {
        DeleteOutcome::Removed { session, profile, lines } => {
            print_diff(&to_content(&before), &to_content(&lines));
            match profile {
                Some(profile) => info!("✔️  Removed {} and {}", session.green().bold(), profile.green().bold()),
                None => info!("✔️  Removed {}", session.green().bold()),
            }
        }
        //file changed in between
        DeleteOutcome::NotFound => warn!("sso-session {name} does not exist in {}", files.path().display()),
    }
    Ok(())
}

pub fn add_session(files: &impl ConfigFiles, args: &AddSessionArgs) -> anyhow::Result<()> {
    let before = files.read_lines()?;
    let profile = SsoSessionProfile {
        name: args.name.clone(),
        start_url: args.start_url.clone(),
        region: args.region.clone(),
        scopes: args.scopes.clone(),
    };
    if let Some(after) = update_sso_session(files, &LoggingWatcher, &profile)? {
        print_diff(&to_content(&before), &to_content(&after));
    }
    info!("✔️  sso-session {} is configured", args.name.green().bold());
    Ok(())
}

pub fn list_sessions(files: &impl ConfigFiles, args: &ListSessionArgs) -> anyhow::Result<()> {
    let sessions = list_sso_sessions(files)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    if sessions.is_empty() {
        info!("No sso-sessions configured in {}", files.path().display());
        return Ok(());
    }

    info!("🔑 sso-sessions in: {}", files.path().display().to_string().blue().bold());
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Session").style_spec("bFg"),
        Cell::new("Start URL").style_spec("bFg"),
        Cell::new("Region").style_spec("bFg"),
        Cell::new("Profiles").style_spec("bFg"),
    ]));
    for session in &sessions {
        table.add_row(Row::new(vec![
            Cell::new(&session.name).style_spec("b"),
            Cell::new(session.start_url.as_deref().unwrap_or("-")),
            Cell::new(session.region.as_deref().unwrap_or("-")),
            Cell::new(&session.profiles.join("\n")),
        ]));
    }
    table.printstd();
    Ok(())
}

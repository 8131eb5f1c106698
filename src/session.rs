use crate::{
    error::ConfigFileError,
    store::{ConfigFiles, ConfigWatcher, notify_config_changed},
};
use log::{debug, info};
use profile_file::{SSO_SESSION_SECTION_NAME, Section, SectionHeader, plan_sso_session_removal, property, sections, to_content, upsert_section};
use serde::Serialize;

/// Prefix of connection and credential identifiers backed by an sso-session section.
pub const SSO_SESSION_ID_PREFIX: &str = "sso-session:";

/// Whether a connection id refers to an sso-session from the config file, as opposed to a
/// connection that only lives in the token cache.
pub fn is_sso_session_connection(id: &str) -> bool {
    id.starts_with(SSO_SESSION_SECTION_NAME)
}

/// Session name carried by a connection id like `sso-session:my-sso`.
/// Ids without the prefix are returned as they are.
pub fn session_name_from_connection_id(id: &str) -> &str {
    id.split_once(SSO_SESSION_ID_PREFIX).map_or(id, |(_, name)| name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Header lines of the removed sections and the lines written back.
    Removed {
        session: String,
        profile: Option<String>,
        lines: Vec<String>,
    },
    NotFound,
}

/// Removes `[sso-session <name>]` and the first `[profile <name>-...]` from the config file.
///
/// A missing session is not an error and leaves the file alone. A failed read aborts before
/// anything is written.
pub fn delete_sso_connection(files: &impl ConfigFiles, watcher: &impl ConfigWatcher, session_name: &str) -> Result<DeleteOutcome, ConfigFileError> {
    let lines = files.read_lines()?;
    let removal = plan_sso_session_removal(&lines, session_name);
    let Some(session) = removal.session.as_ref() else {
        debug!("No sso-session {session_name} in {}", files.path().display());
        return Ok(DeleteOutcome::NotFound);
    };
    let session_header = lines[session.start].clone();
    let profile_header = removal.profile.as_ref().map(|profile| lines[profile.start].clone());

    let remaining = removal.apply(&lines);
    files.write_text(&to_content(&remaining))?;
    info!("Removed {session_header} from {}", files.path().display());
    if let Some(profile) = &profile_header {
        info!("Removed {profile} from {}", files.path().display());
    }
    notify_config_changed(watcher, files.path());

    Ok(DeleteOutcome::Removed {
        session: session_header,
        profile: profile_header,
        lines: remaining,
    })
}

/// Settings of an sso-session section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoSessionProfile {
    pub name: String,
    pub start_url: String,
    pub region: String,
    pub scopes: Vec<String>,
}

impl SsoSessionProfile {
    fn properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = vec![("sso_start_url", self.start_url.clone()), ("sso_region", self.region.clone())];
        if !self.scopes.is_empty() {
            properties.push(("sso_registration_scopes", self.scopes.join(",")));
        }
        properties
    }
}

/// Creates or updates the sso-session section for `profile`, leaving the rest of the file as it is.
/// Returns the written lines, or `None` when the section was already up to date.
pub fn update_sso_session(
    files: &impl ConfigFiles,
    watcher: &impl ConfigWatcher,
    profile: &SsoSessionProfile,
) -> Result<Option<Vec<String>>, ConfigFileError> {
    let lines = files.read_lines()?;
    let properties = profile.properties();
    let properties: Vec<(&str, &str)> = properties.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let updated = upsert_section(&lines, &SectionHeader::sso_session(&profile.name), &properties);

    if updated == lines {
        debug!("sso-session {} is already up to date", profile.name);
        return Ok(None);
    }

    files.write_text(&to_content(&updated))?;
    info!("Updated [sso-session {}] in {}", profile.name, files.path().display());
    notify_config_changed(watcher, files.path());
    Ok(Some(updated))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsoSessionSummary {
    pub name: String,
    pub start_url: Option<String>,
    pub region: Option<String>,
    pub scopes: Vec<String>,
    /// Profiles using the session, either via `sso_session = <name>` or the `<name>-` prefix.
    pub profiles: Vec<String>,
}

/// All sso-sessions in the config file, sorted by name. Bracket lines that are not headers
/// are skipped like any other unknown content.
pub fn list_sso_sessions(files: &impl ConfigFiles) -> Result<Vec<SsoSessionSummary>, ConfigFileError> {
    let lines = files.read_lines()?;
    let sections = sections(&lines);

    let profiles: Vec<(&str, Option<&str>)> = sections
        .iter()
        .filter(|section| section.header.is_profile())
        .map(|section| (section.header.name.as_str(), section_value(section, &lines, "sso_session")))
        .collect();

    let mut sessions: Vec<SsoSessionSummary> = sections
        .iter()
        .filter(|section| section.header.is_sso_session())
        .map(|section| {
            let name = section.header.name.as_str();
            let dependent_prefix = format!("{name}-");
            SsoSessionSummary {
                name: name.to_string(),
                start_url: section_value(section, &lines, "sso_start_url").map(str::to_string),
                region: section_value(section, &lines, "sso_region").map(str::to_string),
                scopes: section_value(section, &lines, "sso_registration_scopes")
                    .map(|scopes| scopes.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect())
                    .unwrap_or_default(),
                profiles: profiles
                    .iter()
                    .filter(|(profile, session)| *session == Some(name) || profile.starts_with(&dependent_prefix))
                    .map(|(profile, _)| (*profile).to_string())
                    .collect(),
            }
        })
        .collect();

    sessions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sessions)
}

/// Value of the first `key = value` line in the body of `section`.
fn section_value<'a>(section: &Section, lines: &'a [String], key: &str) -> Option<&'a str> {
    section
        .body(lines)
        .iter()
        .filter_map(property)
        .find_map(|(k, value)| (k == key).then_some(value))
}

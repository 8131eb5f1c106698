use std::fmt;

pub const SSO_SESSION_SECTION_NAME: &str = "sso-session";
pub const PROFILE_SECTION_NAME: &str = "profile";

/// The tag in front of a section name, e.g. `profile` in `[profile dev]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    SsoSession,
    Profile,
    Other(String),
}

impl SectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::SsoSession => SSO_SESSION_SECTION_NAME,
            SectionKind::Profile => PROFILE_SECTION_NAME,
            SectionKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for SectionKind {
    fn from(value: &str) -> Self {
        match value {
            SSO_SESSION_SECTION_NAME => SectionKind::SsoSession,
            PROFILE_SECTION_NAME => SectionKind::Profile,
            other => SectionKind::Other(other.to_string()),
        }
    }
}

/// A bracketed section header line such as `[sso-session my-sso]`.
///
/// Headers without a kind (`[default]`) are kept with `kind: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub kind: Option<SectionKind>,
    pub name: String,
}

impl SectionHeader {
    pub fn sso_session(name: impl Into<String>) -> Self {
        Self {
            kind: Some(SectionKind::SsoSession),
            name: name.into(),
        }
    }

    pub fn profile(name: impl Into<String>) -> Self {
        Self {
            kind: Some(SectionKind::Profile),
            name: name.into(),
        }
    }

    /// Parses a header line. The line must start with `[` at column 0; anything after
    /// the closing bracket (a trailing comment for example) is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        if !is_header_line(line) {
            return None;
        }
        let inner = line[1..].split_once(']')?.0;
        let header = match inner.split_once(' ') {
            Some((kind, name)) => Self {
                kind: Some(SectionKind::from(kind)),
                name: name.to_string(),
            },
            None => Self {
                kind: None,
                name: inner.to_string(),
            },
        };
        Some(header)
    }

    pub fn is_sso_session(&self) -> bool {
        self.kind == Some(SectionKind::SsoSession)
    }

    pub fn is_profile(&self) -> bool {
        self.kind == Some(SectionKind::Profile)
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "[{} {}]", kind.as_str(), self.name),
            None => write!(f, "[{}]", self.name),
        }
    }
}

/// Every line starting with `[` opens a new section, whether it parses as a header or not.
pub fn is_header_line(line: &str) -> bool {
    line.starts_with('[')
}

/// Header prefix of the sso-session section called `session_name`.
pub fn sso_session_header_prefix(session_name: &str) -> String {
    SectionHeader::sso_session(session_name).to_string()
}

/// Header prefix shared by all role profiles generated for `session_name`.
pub fn dependent_profile_header_prefix(session_name: &str) -> String {
    format!("[{PROFILE_SECTION_NAME} {session_name}-")
}

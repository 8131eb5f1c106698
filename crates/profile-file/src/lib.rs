//! Line based editing of INI-style profile configuration files (`~/.aws/config` layout).
//!
//! Everything here works on an in-memory line sequence and never touches the filesystem.
//! Lines that are not understood are carried through untouched.

pub mod edit;
pub mod header;
pub mod section;

pub use edit::{Removal, delete_sso_session, lines_of, plan_sso_session_removal, to_content, upsert_section};
pub use header::{PROFILE_SECTION_NAME, SSO_SESSION_SECTION_NAME, SectionHeader, SectionKind};
pub use section::{Section, find_header, property, section_end, section_range, sections};

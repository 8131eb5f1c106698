use crate::{
    header::{SectionHeader, dependent_profile_header_prefix, sso_session_header_prefix},
    section::{property, section_range},
};
use std::ops::Range;

/// Line ranges to drop when disconnecting an sso-session, both relative to the original lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    pub session: Option<Range<usize>>,
    pub profile: Option<Range<usize>>,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.session.is_none()
    }

    fn contains(&self, idx: usize) -> bool {
        [&self.session, &self.profile]
            .into_iter()
            .flatten()
            .any(|range| range.contains(&idx))
    }

    /// Builds the remaining lines in one pass, keeping their order.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.contains(*idx))
            .map(|(_, line)| line.as_ref().to_string())
            .collect()
    }
}

/// Locates the `[sso-session <name>]` section and the first `[profile <name>-...]` section.
///
/// The profile is only looked up when the session exists. Its range can be computed on the
/// original lines directly: a profile header never lies inside the session range and the
/// session range always ends at another header or at the end of the file, so removing the
/// session first would not change where the profile section ends.
pub fn plan_sso_session_removal<S: AsRef<str>>(lines: &[S], session_name: &str) -> Removal {
    let Some(session) = section_range(lines, &sso_session_header_prefix(session_name)) else {
        return Removal::default();
    };
    let profile = section_range(lines, &dependent_profile_header_prefix(session_name));
    Removal {
        session: Some(session),
        profile,
    }
}

/// Removes the sso-session section called `session_name` and its first dependent profile.
/// Returns the lines unchanged when the session does not exist.
pub fn delete_sso_session<S: AsRef<str>>(lines: &[S], session_name: &str) -> Vec<String> {
    plan_sso_session_removal(lines, session_name).apply(lines)
}

/// Writes `properties` into the section identified by `header`.
///
/// Existing keys get their value replaced in place, missing keys are appended after the last
/// non-blank line of the section. A missing section is appended at the end of the file,
/// separated from previous content by a blank line.
pub fn upsert_section<S: AsRef<str>>(lines: &[S], header: &SectionHeader, properties: &[(&str, &str)]) -> Vec<String> {
    let mut result: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
    let header_line = header.to_string();

    let Some(range) = section_range(&result, &header_line) else {
        if result.last().is_some_and(|last| !last.trim().is_empty()) {
            result.push(String::new());
        }
        result.push(header_line);
        result.extend(properties.iter().map(|(key, value)| format_property(key, value)));
        return result;
    };

    let mut missing = Vec::new();
    for (key, value) in properties {
        let existing = (range.start + 1..range.end).find(|&idx| property(&result[idx]).is_some_and(|(k, _)| k == *key));
        match existing {
            Some(idx) => result[idx] = format_property(key, value),
            None => missing.push(format_property(key, value)),
        }
    }

    let insert_at = (range.start + 1..range.end)
        .rev()
        .find(|&idx| !result[idx].trim().is_empty())
        .map_or(range.start + 1, |idx| idx + 1);
    let tail = result.split_off(insert_at);
    result.extend(missing);
    result.extend(tail);
    result
}

fn format_property(key: &str, value: &str) -> String {
    format!("{key} = {value}")
}

/// Splits file content into lines. A trailing newline does not produce an extra empty line.
pub fn lines_of(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Joins lines with `\n`, without a trailing separator.
pub fn to_content<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n")
}

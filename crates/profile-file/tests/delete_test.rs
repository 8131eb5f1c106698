use profile_file::{delete_sso_session, lines_of, to_content};
use rstest::rstest;

const CONFIG: &str = r"[profile default]
region = us-east-1

[sso-session foo]
sso_start_url = https://x
sso_region = us-east-1

[profile foo-AdminAccess]
sso_session = foo";

const MIXED: &str = r"[profile y]
region = eu-central-1

[sso-session foo]
sso_start_url = https://foo
sso_region = us-east-1

[sso-session z]
sso_start_url = https://z
sso_region = us-west-2

[profile foo-ReadOnly]
sso_session = foo
sso_account_id = 111111111111

[profile z-Admin]
sso_session = z
";

#[test]
fn test_delete_session_and_dependent_profile() {
    let lines = lines_of(CONFIG);
    let result = delete_sso_session(&lines, "foo");
    assert_eq!(result, vec!["[profile default]", "region = us-east-1", ""]);
    assert_eq!(to_content(&result), "[profile default]\nregion = us-east-1\n");
}

#[rstest]
#[case("bar")]
#[case("fo")]
#[case("foo-AdminAccess")]
#[case("default")]
fn test_unknown_session_is_noop(#[case] name: &str) {
    let lines = lines_of(CONFIG);
    assert_eq!(delete_sso_session(&lines, name), lines);
}

#[test]
fn test_empty_input() {
    let lines: Vec<String> = Vec::new();
    assert!(delete_sso_session(&lines, "foo").is_empty());
}

#[test]
fn test_delete_lone_session_keeps_surroundings() {
    let lines = lines_of("[profile a]\nx = 1\n[sso-session s]\nsso_region = r\n[profile b]\ny = 2");
    let result = delete_sso_session(&lines, "s");
    assert_eq!(result, vec!["[profile a]", "x = 1", "[profile b]", "y = 2"]);
}

#[test]
fn test_unrelated_sections_untouched() {
    let lines = lines_of(MIXED);
    let result = delete_sso_session(&lines, "foo");
    let expected = lines_of(
        r"[profile y]
region = eu-central-1

[sso-session z]
sso_start_url = https://z
sso_region = us-west-2

[profile z-Admin]
sso_session = z",
    );
    assert_eq!(result, expected);
}

#[rstest]
#[case(CONFIG, "foo")]
#[case(MIXED, "foo")]
#[case(MIXED, "z")]
#[case(MIXED, "missing")]
fn test_delete_is_idempotent(#[case] content: &str, #[case] name: &str) {
    let lines = lines_of(content);
    let once = delete_sso_session(&lines, name);
    let twice = delete_sso_session(&once, name);
    assert_eq!(once, twice);
}

#[test]
fn test_session_at_end_of_file() {
    let lines = lines_of("[profile a]\nx = 1\n\n[sso-session last]\nsso_region = r\n\n");
    let result = delete_sso_session(&lines, "last");
    assert_eq!(result, vec!["[profile a]", "x = 1", ""]);
}

#[test]
fn test_only_section_leaves_empty_file() {
    let lines = lines_of("[sso-session only]\nsso_start_url = https://only\nsso_region = r");
    assert!(delete_sso_session(&lines, "only").is_empty());
}

#[test]
fn test_first_match_wins() {
    let lines = lines_of(
        "[sso-session foo]\na = 1\n[profile foo-A]\nb = 2\n[sso-session foo]\nc = 3\n[profile foo-B]\nd = 4",
    );
    let result = delete_sso_session(&lines, "foo");
    assert_eq!(result, vec!["[sso-session foo]", "c = 3", "[profile foo-B]", "d = 4"]);
}

#[test]
fn test_profile_before_session_is_removed() {
    let lines = lines_of("[profile foo-A]\nsso_session = foo\n[sso-session foo]\nsso_region = r\n[profile keep]\nregion = r");
    let result = delete_sso_session(&lines, "foo");
    assert_eq!(result, vec!["[profile keep]", "region = r"]);
}

#[test]
fn test_malformed_lines_pass_through() {
    let lines = lines_of("garbage line\n  [sso-session foo]\n[sso-session foo]\nx\n[not closed\nkeep = me");
    let result = delete_sso_session(&lines, "foo");
    assert_eq!(result, vec!["garbage line", "  [sso-session foo]", "[not closed", "keep = me"]);
}

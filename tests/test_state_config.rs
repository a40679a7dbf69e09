use multifilter::{
    GroupLogic, MultifilterConfig, ParseOn, compose, load_config, load_state_from_path,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp(
        r#"
logic_within_groups = "and"
logic_between_groups = "or"
min_search_length = 2
parse_on = "submit"
toggle_default = ".mix-target"
"#,
    );

    let config = load_config(Some(file.path())).expect("config loads");

    assert_eq!(config.logic_within_groups, GroupLogic::And);
    assert_eq!(config.logic_between_groups, GroupLogic::Or);
    assert_eq!(config.min_search_length, 2);
    assert_eq!(config.parse_on, ParseOn::Submit);
    assert_eq!(config.toggle_default, ".mix-target");
}

#[test]
fn test_load_config_defaults_without_file() {
    let config = load_config(None).expect("defaults load");

    assert_eq!(config.logic_within_groups, GroupLogic::Or);
    assert_eq!(config.logic_between_groups, GroupLogic::And);
    assert_eq!(config.toggle_default, "all");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = load_config(Some(std::path::Path::new("/nonexistent/multifilter.toml")));

    let err = result.expect_err("missing file should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let file = write_temp("logic_between_groups = \"maybe\"\n");

    let err = load_config(Some(file.path())).expect_err("invalid logic should fail");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_state_file_composes_end_to_end() {
    let state_file = write_temp(
        r#"{
    groups: [
        { name: "color", toggles: [".red", ".blue"] },
        { name: "size", logic: "and", toggles: [".small", ".wide"] },
    ],
}"#,
    );

    let config = MultifilterConfig::default();
    let state = load_state_from_path(state_file.path()).expect("state loads");
    let groups = state.build_groups(&config);

    assert_eq!(
        compose(&groups, state.between_logic(&config)),
        ".red.small.wide, .blue.small.wide"
    );
}

#[test]
fn test_state_file_between_logic_override() {
    let state_file = write_temp(
        r#"{
    logic_between_groups: "or",
    groups: [
        { name: "color", toggles: [".red"] },
        { name: "size", toggles: [".small"] },
    ],
}"#,
    );

    let config = MultifilterConfig::default();
    let state = load_state_from_path(state_file.path()).expect("state loads");
    let groups = state.build_groups(&config);

    assert_eq!(state.between_logic(&config), GroupLogic::Or);
    assert_eq!(compose(&groups, state.between_logic(&config)), ".red, .small");
}

#[test]
fn test_malformed_state_reports_parse_error() {
    let state_file = write_temp("{ groups: [ { name: ] }");

    let err = load_state_from_path(state_file.path()).expect_err("malformed state should fail");
    assert!(err.to_string().contains("Failed to parse state file"));
}

#[test]
fn test_empty_state_contributes_nothing() {
    let state_file = write_temp("{}");

    let config = MultifilterConfig::default();
    let state = load_state_from_path(state_file.path()).expect("state loads");
    let groups = state.build_groups(&config);

    assert!(groups.is_empty());
    assert_eq!(compose(&groups, state.between_logic(&config)), "");
}

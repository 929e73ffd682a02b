use pretty_assertions::assert_eq;
use snap_config::Config;

use crate::profile::{add_profile_from_default_in, init_user_config_in, load_user_profile_in};

#[test]
fn init_creates_main_profile_once() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = dir.path().join("profiles");

    let main = init_user_config_in(&profiles).unwrap();
    assert!(main.exists());
    assert_eq!(main, profiles.join("main.json"));

    std::fs::write(
        &main,
        r#"{"name":"main","value":{"ui":{"max_words":7}}}"#,
    )
    .unwrap();
    init_user_config_in(&profiles).unwrap();

    // an existing main profile is left alone
    let config = load_user_profile_in(&profiles, "main").unwrap();
    assert_eq!(config.ui.max_words, 7);
}

#[test]
fn missing_profile_falls_back_to_main() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.json"),
        r#"{"name":"main","value":{"generator":{"model":"gemini-1.5-flash"}}}"#,
    )
    .unwrap();

    let config = load_user_profile_in(dir.path(), "travel").unwrap();
    assert_eq!(config.generator.model, "gemini-1.5-flash");
}

#[test]
fn empty_directory_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_user_profile_in(dir.path(), "main").unwrap();
    assert_eq!(config.ui.max_words, Config::new().ui.max_words);
}

#[test]
fn added_profile_copies_main() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.json"),
        r#"{"name":"main","value":{"ui":{"max_words":12,"show_prompt":false}}}"#,
    )
    .unwrap();

    let path = add_profile_from_default_in(dir.path(), "study").unwrap();
    assert_eq!(path, dir.path().join("study.json"));

    let config = load_user_profile_in(dir.path(), "study").unwrap();
    assert_eq!(config.ui.max_words, 12);
    assert!(!config.ui.show_prompt);

    let err = add_profile_from_default_in(dir.path(), "study").unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn profile_names_are_validated() {
    let dir = tempfile::tempdir().unwrap();
    assert!(add_profile_from_default_in(dir.path(), "../escape").is_err());
    assert!(add_profile_from_default_in(dir.path(), "").is_err());
    assert!(!dir.path().join("escape.json").exists());
}

#[test]
fn corrupt_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

    let err = load_user_profile_in(dir.path(), "broken").unwrap_err();
    assert!(err.to_string().contains("Invalid profile"));
}

#[test]
fn loading_rejects_names_outside_the_profiles_dir() {
    let root = tempfile::tempdir().unwrap();
    let profiles = root.path().join("profiles");
    std::fs::create_dir_all(&profiles).unwrap();
    std::fs::write(
        root.path().join("outside.json"),
        r#"{"name":"outside","value":{"ui":{"max_words":3}}}"#,
    )
    .unwrap();

    let err = load_user_profile_in(&profiles, "../outside").unwrap_err();
    assert!(err.to_string().contains("Profile names may only use"));
}

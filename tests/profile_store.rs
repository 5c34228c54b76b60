use std::fs;

use deckurl::config::store::{export_profile, import_profile};
use deckurl::config::{AppPaths, Config, FileProfileStore, Profile, ProfileStore};

fn store_in(dir: &tempfile::TempDir) -> FileProfileStore {
    FileProfileStore::new(AppPaths::with_config_file(dir.path().join("config.json")))
}

#[test]
fn missing_file_loads_first_run_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);

    let config = store.load().expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn saved_profiles_keep_their_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);

    let mut config = Config::default();
    for name in ["zeta", "alpha", "mid"] {
        config.add_profile(Profile::new(name)).expect("add");
    }
    config.add_decks("alpha", &["Kanji".to_string()]).expect("decks");
    store.save(&config).expect("save");

    let loaded = store.load().expect("load");
    let names: Vec<&str> = loaded.profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["default", "zeta", "alpha", "mid"]);
    assert_eq!(loaded.profile("alpha").expect("alpha").decks, ["Kanji"]);
}

#[test]
fn reads_documents_written_by_hand() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("config.json"),
        r#"{
            "addon_enabled": false,
            "profiles": [
                {"name": "jp", "field_name": "Expression", "url_template": "https://jisho.org/search/{{field_content}}", "decks": ["Japanese"]}
            ]
        }"#,
    )
    .expect("write config");

    let config = store_in(&dir).load().expect("load");
    assert!(!config.addon_enabled);
    assert_eq!(config.default_profile, None);
    let jp = config.profile("jp").expect("jp");
    assert!(jp.enabled);
    assert_eq!(jp.application, "");
    assert_eq!(jp.field_name, "Expression");
}

#[test]
fn malformed_document_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("config.json"), "{not json").expect("write config");

    assert!(store_in(&dir).load().is_err());
}

#[test]
fn exported_profile_imports_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exports").join("jp.json");
    let profile = Profile {
        application: "firefox".to_string(),
        decks: vec!["Japanese".to_string()],
        enabled: false,
        ..Profile::new("kana")
    };

    export_profile(&path, &profile).expect("export");
    assert_eq!(import_profile(&path, None).expect("import"), profile);
}

const NAMELESS_PROFILE: &str = r#"{
    "field_name": "Expression",
    "url_template": "https://jisho.org/search/{{field_content}}",
    "application": "",
    "enabled": true,
    "decks": ["Japanese"]
}"#;

#[test]
fn nameless_profile_file_takes_its_stem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jisho.json");
    fs::write(&path, NAMELESS_PROFILE).expect("write profile");

    let profile = import_profile(&path, None).expect("import");
    assert_eq!(profile.name, "jisho");
    assert_eq!(profile.field_name, "Expression");
    assert_eq!(profile.decks, ["Japanese"]);
    assert!(profile.enabled);
}

#[test]
fn explicit_name_wins_over_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jisho.json");
    fs::write(&path, NAMELESS_PROFILE).expect("write profile");

    let profile = import_profile(&path, Some(" jp ")).expect("import");
    assert_eq!(profile.name, "jp");
}

#[test]
fn imported_names_are_trimmed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("other.json");
    fs::write(&path, r#"{"name":" jp ","decks":["Japanese"]}"#).expect("write profile");

    let profile = import_profile(&path, None).expect("import");
    assert_eq!(profile.name, "jp");

    let mut config = Config::default();
    config.add_profile(profile).expect("add");
    assert!(config.profile("jp").is_some());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.save(&Config::default()).expect("save");

    let mode = fs::metadata(dir.path().join("config.json"))
        .expect("metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn new_command_with_temp_home() -> (Command, tempfile::TempDir) {
    let temp_home = tempfile::tempdir().expect("temp home");
    (command_in_home(temp_home.path()), temp_home)
}

pub fn command_in_home(home: &Path) -> Command {
    let binary = assert_cmd::cargo::cargo_bin!("tripdeck");
    let mut command = Command::new(binary);
    command.env("HOME", home);
    command.env("XDG_CONFIG_HOME", home.join(".config"));
    command.env_remove("TRIPDECK_LOG");
    command.env_remove("RUST_LOG");
    command
}

pub fn write_valid_config(home: &Path) {
    let config_dir = home.join(".config").join("tripdeck");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(
        config_dir.join("config.toml"),
        r#"
version = 1

[selection]
keep_selection_on_failed_delete = false
"#,
    )
    .expect("write config");
}

pub fn assert_timestamp_log_names(entries: &[std::fs::DirEntry]) {
    assert!(!entries.is_empty(), "expected at least one diagnostics log");

    for entry in entries {
        let name = entry
            .file_name()
            .into_string()
            .expect("diagnostics filename utf8");
        assert!(
            name.ends_with(".log"),
            "diagnostics file should end with .log: {name}"
        );
        let stem = name
            .strip_suffix(".log")
            .expect("diagnostics filename .log suffix");
        assert!(
            !stem.is_empty() && stem.chars().all(|character| character.is_ascii_digit()),
            "diagnostics filename must be <timestamp>.log, got: {name}"
        );
    }
}

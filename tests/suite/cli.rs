//! Invocation surface: argument handling, messages, exit status.

use crate::common::{BACKUP, Project, SETTINGS, stderr, stdout};

#[test]
fn unknown_mode_is_rejected_without_touching_files() {
    let project = Project::with_settings(r#"{"git.autofetch": true}"#);

    let output = project.run(&["toggle"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("possible values: on, off"),
        "stderr: {}",
        stderr(&output)
    );
    assert_eq!(project.files(), vec![SETTINGS.to_string()]);
    assert_eq!(project.read(SETTINGS), r#"{"git.autofetch": true}"#);
}

#[test]
fn unknown_mode_in_empty_project_creates_nothing() {
    let project = Project::empty();

    let output = project.run(&["toggle"]);

    assert!(!output.status.success());
    assert!(project.files().is_empty());
    assert!(!project.exists(".vscode"));
}

#[test]
fn missing_mode_is_rejected() {
    let project = Project::empty();

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
    assert!(project.files().is_empty());
}

#[test]
fn on_reports_muted() {
    let project = Project::empty();

    let output = project.run(&["on"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Editor watchers & Git auto-refresh muted for install."
    );
}

#[test]
fn off_without_backup_reports_and_succeeds() {
    let project = Project::with_settings("{}");

    let output = project.run(&["off"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No backup found; left settings as-is.");
    assert_eq!(project.read(SETTINGS), "{}");
    assert!(!project.exists(BACKUP));
}

#[test]
fn fresh_mute_writes_exact_overrides() {
    let project = Project::empty();

    let output = project.run(&["on"]);

    assert!(output.status.success());
    assert!(!project.exists(BACKUP));
    insta::assert_snapshot!(project.read(SETTINGS), @r#"
    {
      "files.watcherExclude": {
        "**/node_modules/**": true,
        "**/.pnpm/**": true
      },
      "search.exclude": {
        "**/node_modules/**": true,
        "**/.pnpm/**": true
      },
      "git.autorefresh": false,
      "git.autofetch": false,
      "git.decorations.enabled": false,
      "git.countBadge": "off",
      "scm.diffDecorations": "none"
    }
    "#);
}

#[test]
fn extras_flag_adds_language_tooling_overrides() {
    let project = Project::empty();

    let output = project.run(&["on", "--extras"]);

    assert!(output.status.success());
    let settings = project.settings_json();
    assert_eq!(settings["typescript.tsserver.maxTsServerMemory"], 1024);
    assert_eq!(settings["eslint.lintTask.enable"], false);
}

#[test]
fn project_config_adds_globs_and_extras() {
    let project = Project::empty();
    project.write(
        ".watchmute.toml",
        "[mute]\nextras = true\nexclude = [\"**/target/**\"]\n",
    );

    let output = project.run(&["on"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let settings = project.settings_json();
    assert_eq!(settings["files.watcherExclude"]["**/target/**"], true);
    assert_eq!(settings["search.exclude"]["**/target/**"], true);
    assert_eq!(
        settings["typescript.tsserver.experimental.enableProjectDiagnostics"],
        false
    );
}

#[test]
fn broken_project_config_fails_before_writing() {
    let project = Project::with_settings("{}");
    project.write(".watchmute.toml", "[mute\n");

    let output = project.run(&["on"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains(".watchmute.toml"));
    assert_eq!(
        stderr(&output).matches("failed to parse config").count(),
        1,
        "stderr: {}",
        stderr(&output)
    );
    assert_eq!(project.read(SETTINGS), "{}");
    assert!(!project.exists(BACKUP));
}

#[test]
fn off_ignores_broken_project_config() {
    let project = Project::with_settings("{\"a\": 1}");

    assert!(project.run(&["on"]).status.success());
    project.write(".watchmute.toml", "[mute\n");

    let output = project.run(&["off"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Editor settings restored.");
    assert_eq!(project.read(SETTINGS), "{\"a\": 1}");
}

#[test]
fn root_flag_targets_another_directory() {
    let cwd = Project::empty();
    let target = Project::with_settings("{\"editor.tabSize\": 2}");
    let root = target.root().to_str().expect("utf-8 temp path");

    let output = cwd.run(&["on", "--root", root]);

    assert!(output.status.success());
    assert!(cwd.files().is_empty());
    assert!(target.exists(BACKUP));
    assert_eq!(target.settings_json()["editor.tabSize"], 2);
}

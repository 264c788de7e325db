// tests/config_behaviour.rs

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use dcclaunch::config::{default_config_path, load_and_validate};
use dcclaunch::types::PauseBehaviour;
use dcclaunch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn minimal_config_gets_documented_defaults() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[host.standalone]
interpreter = "python"

[tool.review]
script_dir = "tools/review/"
script = "main.py"
"#,
    );

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.config.default_host, "standalone");
    assert_eq!(cfg.config.default_tool, None);
    assert_eq!(cfg.config.pause, PauseBehaviour::Failure);

    let tool = &cfg.tool["review"];
    assert!(tool.extend_search_path);
    assert!(tool.hosts.is_empty());
    assert!(tool.allows_host("standalone"));
    assert!(tool.allows_host("anything-at-all"));

    let host = &cfg.host["standalone"];
    assert!(host.args.is_empty());
    assert!(host.env.is_empty());

    assert_eq!(cfg.context.project, None);
    assert_eq!(cfg.context.user, None);
    assert_eq!(cfg.context.task, None);

    Ok(())
}

#[test]
fn full_config_sections_round_trip() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[config]
default_host = "maya"
default_tool = "shotgun_library"
pause = "always"

[context]
project = "hal_demo"
user = "jdoe"
task = "lookdev"

[host.maya]
interpreter = "${MAYA_LOCATION}/bin/mayapy"
args = ["-u"]

[host.maya.env]
MAYA_NO_ANALYTICS = "1"

[tool.shotgun_library]
script_dir = "tools/shotgun_library/"
script = "ui.py"
hosts = ["maya"]
extend_search_path = false

[tool.shotgun_library.env]
SHOTGUN_SITE = "https://studio.example.com"

[tool.shotgun_library.prepend]
SHOTGUN_LIBRARY_PATH = ["{root}"]
"#,
    );

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.config.default_host, "maya");
    assert_eq!(cfg.config.default_tool.as_deref(), Some("shotgun_library"));
    assert_eq!(cfg.config.pause, PauseBehaviour::Always);

    assert_eq!(cfg.context.project.as_deref(), Some("hal_demo"));
    assert_eq!(cfg.context.user.as_deref(), Some("jdoe"));
    assert_eq!(cfg.context.task.as_deref(), Some("lookdev"));

    let host = &cfg.host["maya"];
    assert_eq!(host.interpreter, "${MAYA_LOCATION}/bin/mayapy");
    assert_eq!(host.args, vec!["-u".to_string()]);
    assert_eq!(host.env["MAYA_NO_ANALYTICS"], "1");

    let tool = &cfg.tool["shotgun_library"];
    assert!(!tool.extend_search_path);
    assert!(tool.allows_host("maya"));
    assert!(!tool.allows_host("standalone"));
    assert_eq!(tool.env["SHOTGUN_SITE"], "https://studio.example.com");
    assert_eq!(
        tool.prepend["SHOTGUN_LIBRARY_PATH"],
        vec!["{root}".to_string()]
    );

    Ok(())
}

#[test]
fn script_path_is_verbatim_concatenation() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[host.standalone]
interpreter = "python"

[tool.with_slash]
script_dir = "tools/review/"
script = "main.py"

[tool.without_slash]
script_dir = "tools/review"
script = "main.py"

[tool.windows_style]
script_dir = 'T:\pipeline\tools\'
script = "launch.py"
"#,
    );

    let cfg = load_and_validate(file.path())?;

    // No separator is inserted and nothing is normalized; what the config
    // author wrote is what gets launched.
    assert_eq!(cfg.tool["with_slash"].script_path(), "tools/review/main.py");
    assert_eq!(cfg.tool["without_slash"].script_path(), "tools/reviewmain.py");
    assert_eq!(
        cfg.tool["windows_style"].script_path(),
        r"T:\pipeline\tools\launch.py"
    );

    Ok(())
}

#[test]
fn pause_behaviour_parses_from_strings() {
    assert_eq!("failure".parse::<PauseBehaviour>(), Ok(PauseBehaviour::Failure));
    assert_eq!("Always".parse::<PauseBehaviour>(), Ok(PauseBehaviour::Always));
    assert_eq!(" never ".parse::<PauseBehaviour>(), Ok(PauseBehaviour::Never));
    assert!("sometimes".parse::<PauseBehaviour>().is_err());
}

#[test]
fn default_config_path_is_stable() {
    assert_eq!(default_config_path().to_str(), Some("Dcclaunch.toml"));
}

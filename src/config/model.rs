// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::PauseBehaviour;

/// Top-level configuration as read from a TOML file, before validation.
///
/// This is a direct mapping of the expected layout:
///
/// ```toml
/// [config]
/// default_host = "standalone"
/// pause = "failure"
///
/// [context]
/// project = "hal_demo"
/// task = "lookdev"
///
/// [host.standalone]
/// interpreter = "python"
///
/// [host.maya]
/// interpreter = "C:/Program Files/Autodesk/Maya2024/bin/mayapy.exe"
///
/// [tool.shotgun_library]
/// script_dir = "tools/shotgun_library/"
/// script = "ui.py"
/// hosts = ["standalone", "maya"]
///
/// [tool.shotgun_library.prepend]
/// SHOTGUN_LIBRARY_PATH = ["{root}"]
/// ```
///
/// All sections are optional at the serde level; semantic requirements
/// (at least one tool and host, valid references, ...) are enforced by
/// `validate.rs` when converting into [`ConfigFile`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Identity values from `[context]` exported to the launched tool.
    #[serde(default)]
    pub context: ContextSection,

    /// All host profiles from `[host.<name>]`.
    ///
    /// Keys are the *host names* (e.g. `"standalone"`, `"maya"`).
    #[serde(default)]
    pub host: BTreeMap<String, HostConfig>,

    /// All launchable tools from `[tool.<name>]`.
    #[serde(default)]
    pub tool: BTreeMap<String, ToolConfig>,
}

/// Validated configuration.
///
/// Same data as [`RawConfigFile`], but only constructible through
/// `ConfigFile::try_from(raw)`, which runs the semantic checks in
/// `validate.rs`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub context: ContextSection,
    pub host: BTreeMap<String, HostConfig>,
    pub tool: BTreeMap<String, ToolConfig>,
}

impl ConfigFile {
    /// Construct without validation. Only `validate.rs` should call this.
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        context: ContextSection,
        host: BTreeMap<String, HostConfig>,
        tool: BTreeMap<String, ToolConfig>,
    ) -> Self {
        Self {
            config,
            context,
            host,
            tool,
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Host profile used when `--host` is not given.
    #[serde(default = "default_host_name")]
    pub default_host: String,

    /// Tool launched when `--tool` is not given and the config contains
    /// more than one tool.
    #[serde(default)]
    pub default_tool: Option<String>,

    /// When to hold the terminal open after the tool exits.
    #[serde(default)]
    pub pause: PauseBehaviour,
}

fn default_host_name() -> String {
    "standalone".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            default_host: default_host_name(),
            default_tool: None,
            pause: PauseBehaviour::default(),
        }
    }
}

/// `[context]` section.
///
/// These become the `HAL_PROJECT` / `HAL_USER_LOGIN` / `HAL_TASK` variables
/// the launched script reads. All of them can be overridden from the CLI;
/// `user` additionally falls back to the `USERNAME` / `USER` environment
/// variables and finally to `"unknown"`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContextSection {
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub task: Option<String>,
}

/// `[host.<name>]` section.
///
/// A host profile describes which interpreter embeds (or stands in for) the
/// external application: `standalone` is a plain Python, `maya` would be
/// `mayapy`, `houdini` would be `hython`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Interpreter executable. `${VAR}` references are expanded from the
    /// launcher's own environment, e.g. `"${MAYA_LOCATION}/bin/mayapy"`.
    pub interpreter: String,

    /// Extra interpreter arguments inserted before the script path.
    #[serde(default)]
    pub args: Vec<String>,

    /// Host-specific environment variables.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// `[tool.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Directory holding the tool's entry script.
    ///
    /// The launched path is the **verbatim** concatenation
    /// `script_dir + script`; no separator is inserted and nothing is
    /// normalized, so a trailing `/` here is the config author's job.
    pub script_dir: String,

    /// Entry script filename, e.g. `"ui.py"`.
    pub script: String,

    /// Host profiles this tool may launch under. Empty means any
    /// configured host.
    #[serde(default)]
    pub hosts: Vec<String>,

    /// Prepend `script_dir` to `PYTHONPATH` so the script can import its
    /// sibling modules.
    #[serde(default = "default_true")]
    pub extend_search_path: bool,

    /// Tool-specific environment variables. Values support `{root}` (the
    /// tool's `script_dir`) and `${VAR}` (launcher environment) expansion.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Per-variable path prepends, applied in front of any inherited value:
    ///
    /// ```toml
    /// [tool.shotgun_library.prepend]
    /// SHOTGUN_LIBRARY_PATH = ["{root}"]
    /// PYTHONPATH = ["{root}/site-packages"]
    /// ```
    #[serde(default)]
    pub prepend: BTreeMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl ToolConfig {
    /// The launched script path: `script_dir + script`, concatenated
    /// verbatim.
    pub fn script_path(&self) -> String {
        format!("{}{}", self.script_dir, self.script)
    }

    /// Whether this tool may launch under the given host profile.
    pub fn allows_host(&self, host: &str) -> bool {
        self.hosts.is_empty() || self.hosts.iter().any(|h| h == host)
    }
}

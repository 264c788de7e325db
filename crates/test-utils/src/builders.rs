#![allow(dead_code)]

use std::collections::BTreeMap;

use dcclaunch::config::{
    ConfigFile, ConfigSection, ContextSection, HostConfig, RawConfigFile, ToolConfig,
};
use dcclaunch::types::PauseBehaviour;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                context: ContextSection::default(),
                host: BTreeMap::new(),
                tool: BTreeMap::new(),
            },
        }
    }

    pub fn with_host(mut self, name: &str, host: HostConfig) -> Self {
        self.config.host.insert(name.to_string(), host);
        self
    }

    pub fn with_tool(mut self, name: &str, tool: ToolConfig) -> Self {
        self.config.tool.insert(name.to_string(), tool);
        self
    }

    pub fn with_default_host(mut self, name: &str) -> Self {
        self.config.config.default_host = name.to_string();
        self
    }

    pub fn with_default_tool(mut self, name: &str) -> Self {
        self.config.config.default_tool = Some(name.to_string());
        self
    }

    pub fn with_pause(mut self, pause: PauseBehaviour) -> Self {
        self.config.config.pause = pause;
        self
    }

    pub fn with_project(mut self, project: &str) -> Self {
        self.config.context.project = Some(project.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.config.context.user = Some(user.to_string());
        self
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.config.context.task = Some(task.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    /// Keep the raw form, for tests that exercise validation failures.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ToolConfig`.
pub struct ToolConfigBuilder {
    tool: ToolConfig,
}

impl ToolConfigBuilder {
    pub fn new(script_dir: &str, script: &str) -> Self {
        Self {
            tool: ToolConfig {
                script_dir: script_dir.to_string(),
                script: script.to_string(),
                hosts: vec![],
                extend_search_path: true,
                env: BTreeMap::new(),
                prepend: BTreeMap::new(),
            },
        }
    }

    pub fn host(mut self, name: &str) -> Self {
        self.tool.hosts.push(name.to_string());
        self
    }

    pub fn extend_search_path(mut self, val: bool) -> Self {
        self.tool.extend_search_path = val;
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.tool.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn prepend(mut self, var: &str, entry: &str) -> Self {
        self.tool
            .prepend
            .entry(var.to_string())
            .or_default()
            .push(entry.to_string());
        self
    }

    pub fn build(self) -> ToolConfig {
        self.tool
    }
}

/// Builder for `HostConfig`.
pub struct HostConfigBuilder {
    host: HostConfig,
}

impl HostConfigBuilder {
    pub fn new(interpreter: &str) -> Self {
        Self {
            host: HostConfig {
                interpreter: interpreter.to_string(),
                args: vec![],
                env: BTreeMap::new(),
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.host.args.push(arg.to_string());
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.host.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> HostConfig {
        self.host
    }
}

//! Job configuration and SSH info types
//!
//! The job config endpoint returns the configuration the job was submitted
//! with. Only the `extras` section is modeled in depth; the client needs it
//! to locate runtime plugin descriptors (e.g. TensorBoard).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw job configuration as submitted by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    #[serde(default)]
    pub extras: Option<Extras>,
    /// Remainder of the submitted config, passed through untouched
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Free-form extension section of a job config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    #[serde(default)]
    pub runtime_plugins: Vec<RuntimePlugin>,
}

/// A runtime plugin descriptor inside the config extras
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimePlugin {
    pub plugin: String,
    #[serde(default)]
    pub parameters: Option<Value>,
}

impl JobConfig {
    /// Find a runtime plugin descriptor by plugin name
    pub fn runtime_plugin(&self, name: &str) -> Option<&RuntimePlugin> {
        self.extras
            .as_ref()?
            .runtime_plugins
            .iter()
            .find(|p| p.plugin == name)
    }
}

impl RuntimePlugin {
    /// Look up a plugin parameter by key
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.as_ref()?.get(key)
    }
}

/// SSH access info for a job's containers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshInfo {
    #[serde(default)]
    pub containers: Vec<SshContainer>,
    #[serde(default)]
    pub key_pair: Option<Value>,
}

/// SSH endpoint of a single container
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshContainer {
    pub id: String,
    pub ssh_ip: String,
    pub ssh_port: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runtime_plugin_lookup() {
        let raw = json!({
            "jobName": "demo",
            "extras": {
                "runtimePlugins": [
                    { "plugin": "ssh", "parameters": { "jobssh": true } },
                    { "plugin": "tensorboard", "parameters": { "port": 6006 } }
                ]
            }
        });

        let config: JobConfig = serde_json::from_value(raw).unwrap();
        let plugin = config.runtime_plugin("tensorboard").unwrap();
        assert_eq!(plugin.parameter("port"), Some(&json!(6006)));
        assert!(config.runtime_plugin("profiler").is_none());
    }

    #[test]
    fn test_config_without_extras() {
        let config: JobConfig = serde_json::from_value(json!({ "jobName": "demo" })).unwrap();
        assert!(config.runtime_plugin("tensorboard").is_none());
        assert_eq!(config.rest.get("jobName"), Some(&json!("demo")));
    }
}

// crates/infra/src/loader.rs
use std::path::Path;

use checkpoints_ports::scenario::{Scenario, ScenarioSource};
use checkpoints_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};
use log::debug;

use crate::persistence::FileReader;

/// Scenario file encodings, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Json,
    Yaml,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> InfraResult<Self> {
        let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(other) => Err(InfrastructureError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: format!("unknown extension '.{other}'"),
            }),
            None => Err(InfrastructureError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "missing file extension".to_string(),
            }),
        }
    }

    #[cfg_attr(feature = "yaml", allow(unused_variables))]
    pub fn parse(self, path: &Path, text: &str) -> InfraResult<Scenario> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
            #[cfg(not(feature = "yaml"))]
            Self::Yaml => Err(InfrastructureError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "YAML support is not enabled in this build".to_string(),
            }),
        }
    }
}

/// Loads scenarios from JSON (and, with the `yaml` feature, YAML) files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileScenarioSource;

impl FileScenarioSource {
    pub fn new() -> Self {
        Self
    }
}

impl ScenarioSource for FileScenarioSource {
    fn load(&self, path: &Path) -> Result<Scenario> {
        let format = ScenarioFormat::from_path(path)?;
        debug!("loading scenario from {} as {format:?}", path.display());
        let text = FileReader::read_to_string(path)?;
        format
            .parse(path, &text)
            .with_context(|| format!("invalid scenario file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use checkpoints_ports::scenario::{Step, Subject};
    use checkpoints_shared_kernel::CheckpointsError;

    use super::*;

    const ACCOUNT_JSON: &str = r#"{
        "name": "payday",
        "subject": { "kind": "account", "funds": 10 },
        "steps": [ { "action": "deposit", "amount": 90 }, { "action": "withdraw", "amount": 200 } ]
    }"#;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ScenarioFormat::from_path(Path::new("a.JSON")).unwrap(), ScenarioFormat::Json);
        assert_eq!(ScenarioFormat::from_path(Path::new("a.yml")).unwrap(), ScenarioFormat::Yaml);
        assert!(ScenarioFormat::from_path(Path::new("a.toml")).is_err());
        assert!(ScenarioFormat::from_path(&PathBuf::from("scenario")).is_err());
    }

    #[test]
    fn loads_json_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payday.json");
        fs::write(&path, ACCOUNT_JSON).unwrap();

        let scenario = FileScenarioSource::new().load(&path).unwrap();

        assert_eq!(scenario.name, "payday");
        assert_eq!(scenario.subject, Subject::Account { funds: 10 });
        assert_eq!(scenario.steps, vec![Step::Deposit { amount: 90 }, Step::Withdraw { amount: 200 }]);
    }

    #[test]
    fn malformed_json_carries_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"name\": ").unwrap();

        let err = FileScenarioSource::new().load(&path).unwrap_err();

        assert!(matches!(err, CheckpointsError::Context { .. }));
        assert!(err.to_string().contains("broken.json"));
        assert!(err.to_string().contains("JSON"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn loads_yaml_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gears.yaml");
        fs::write(
            &path,
            "name: gears\nsubject:\n  kind: counter\n  lower: 1\n  upper: 5\n  initial: 1\nsteps:\n  - action: adjust\n    delta: 4\n",
        )
        .unwrap();

        let scenario = FileScenarioSource::new().load(&path).unwrap();

        assert_eq!(scenario.subject, Subject::Counter { lower: 1, upper: 5, initial: 1 });
        assert_eq!(scenario.steps, vec![Step::Adjust { delta: 4 }]);
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn yaml_without_feature_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gears.yaml");
        fs::write(&path, "name: gears").unwrap();

        let err = FileScenarioSource::new().load(&path).unwrap_err();
        assert!(err.to_string().contains("YAML support is not enabled"));
    }
}

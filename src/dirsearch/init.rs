use crate::api::DirectoryApi;
use crate::config::DirConfig;
use crate::controller::Policy;
use crate::error::Result;
use crate::store::bundled::BundledSource;
use crate::store::fs::JsonFileSource;
use crate::store::RecordSource;
use std::path::{Path, PathBuf};

/// Settings given on the command line (or environment) that beat the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub policy: Option<Policy>,
}

pub struct DirContext {
    pub api: DirectoryApi,
    pub config: DirConfig,
    /// Where the records came from, for display.
    pub source: String,
}

/// Picks the record source: an explicit data file, else the bundled sample.
pub fn select_source(data_file: Option<&Path>) -> Box<dyn RecordSource> {
    match data_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

/// Loads config and records and starts a session.
///
/// A broken config file is reported and ignored; a broken data file is an error.
pub fn initialize(config_dir: &Path, overrides: Overrides) -> Result<DirContext> {
    let config = DirConfig::load_or_default(config_dir);

    let data_file = overrides.data_file.or_else(|| config.data_file.clone());
    let policy = overrides.policy.unwrap_or(config.policy);

    let source = select_source(data_file.as_deref());
    let store = source.load()?;
    log::debug!("using {} ({} records)", source.describe(), store.len());

    Ok(DirContext {
        api: DirectoryApi::new(store, policy),
        config,
        source: source.describe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_DATA_FILE, KEY_POLICY};
    use crate::error::DirError;
    use std::fs;

    fn write_people(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(
            &path,
            r#"[{"firstName":"Ana","lastName":"Lee","address":"1 Elm St","phone":"555-0100"}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn defaults_to_bundled_live() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = initialize(dir.path(), Overrides::default()).unwrap();
        assert_eq!(ctx.api.policy(), Policy::Live);
        assert_eq!(ctx.api.store().len(), 12);
        assert_eq!(ctx.source, BundledSource.describe());
    }

    #[test]
    fn config_file_supplies_policy_and_data() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_people(dir.path(), "people.json");
        let mut config = DirConfig::default();
        config.set(KEY_POLICY, "submit").unwrap();
        config.set(KEY_DATA_FILE, data.to_str().unwrap()).unwrap();
        config.save(dir.path()).unwrap();

        let ctx = initialize(dir.path(), Overrides::default()).unwrap();
        assert_eq!(ctx.api.policy(), Policy::Submit);
        assert_eq!(ctx.api.store().len(), 1);
    }

    #[test]
    fn overrides_beat_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DirConfig::default();
        config.set(KEY_POLICY, "submit").unwrap();
        config.save(dir.path()).unwrap();
        let data = write_people(dir.path(), "override.json");

        let ctx = initialize(
            dir.path(),
            Overrides {
                data_file: Some(data),
                policy: Some(Policy::Live),
            },
        )
        .unwrap();
        assert_eq!(ctx.api.policy(), Policy::Live);
        assert_eq!(ctx.api.store().records()[0].full_name(), "Ana Lee");
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{ not json").unwrap();
        let ctx = initialize(dir.path(), Overrides::default()).unwrap();
        assert_eq!(ctx.config, DirConfig::default());
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = initialize(
            dir.path(),
            Overrides {
                data_file: Some(dir.path().join("missing.json")),
                policy: None,
            },
        );
        assert!(matches!(result, Err(DirError::DataFile { .. })));
    }
}

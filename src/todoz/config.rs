use crate::error::{Result, TodoError};
use crate::repository::CorruptPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DATA_FILENAME: &str = "todos.json";

/// Environment variable overriding the store location.
pub const DATA_FILE_ENV: &str = "TODOZ_DATA_FILE";
/// Environment variable overriding the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "TODOZ_CONFIG_DIR";

/// Configuration for todoz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct TodoConfig {
    /// Where the todo store lives. Relative paths resolve against the config dir.
    pub data_file: Option<PathBuf>,

    /// What to do when the store cannot be parsed
    pub on_corrupt: CorruptPolicy,
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| TodoError::Config(format!("{}: {}", config_path.display(), e)))
    }
}

/// Resolved locations for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

/// Platform directories, before any override is applied.
#[derive(Debug, Clone)]
pub struct BaseDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl BaseDirs {
    pub fn from_platform() -> Result<Self> {
        let proj = ProjectDirs::from("dev", "todoz", "todoz")
            .ok_or_else(|| TodoError::Config("Cannot determine data directory".to_string()))?;
        Ok(Self {
            config_dir: proj.config_dir().to_path_buf(),
            data_dir: proj.data_dir().to_path_buf(),
        })
    }
}

/// Loads the config and resolves the store location.
///
/// Data file precedence: `flag` > `TODOZ_DATA_FILE` > config `data-file` >
/// `<data dir>/todos.json`.
pub fn resolve<F>(base: &BaseDirs, flag: Option<PathBuf>, env: F) -> Result<(TodoConfig, TodoPaths)>
where
    F: Fn(&str) -> Option<String>,
{
    let config_dir = env(CONFIG_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| base.config_dir.clone());
    let config = TodoConfig::load(&config_dir)?;

    let data_file = flag
        .or_else(|| {
            env(DATA_FILE_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| config.data_file.as_ref().map(|p| config_dir.join(p)))
        .unwrap_or_else(|| base.data_dir.join(DATA_FILENAME));

    Ok((
        config,
        TodoPaths {
            config_dir,
            data_file,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn base(temp: &TempDir) -> BaseDirs {
        BaseDirs {
            config_dir: temp.path().join("config"),
            data_dir: temp.path().join("data"),
        }
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(dir: &Path, json: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), json).unwrap();
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(config, TodoConfig::default());
        assert_eq!(config.on_corrupt, CorruptPolicy::Fail);
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"on-corrupt": "treat-as-empty"}"#);

        let config = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(config.on_corrupt, CorruptPolicy::TreatAsEmpty);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "{ nope");

        assert!(matches!(
            TodoConfig::load(temp.path()),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn test_default_data_file() {
        let temp = TempDir::new().unwrap();
        let base = base(&temp);

        let (_, paths) = resolve(&base, None, env_of(&[])).unwrap();

        assert_eq!(paths.data_file, base.data_dir.join("todos.json"));
        assert_eq!(paths.config_dir, base.config_dir);
    }

    #[test]
    fn test_config_data_file_is_relative_to_config_dir() {
        let temp = TempDir::new().unwrap();
        let base = base(&temp);
        write_config(&base.config_dir, r#"{"data-file": "lists/work.json"}"#);

        let (_, paths) = resolve(&base, None, env_of(&[])).unwrap();

        assert_eq!(paths.data_file, base.config_dir.join("lists/work.json"));
    }

    #[test]
    fn test_env_beats_config_and_flag_beats_env() {
        let temp = TempDir::new().unwrap();
        let base = base(&temp);
        write_config(&base.config_dir, r#"{"data-file": "from-config.json"}"#);
        let env = env_of(&[(DATA_FILE_ENV, "/tmp/from-env.json")]);

        let (_, paths) = resolve(&base, None, &env).unwrap();
        assert_eq!(paths.data_file, PathBuf::from("/tmp/from-env.json"));

        let (_, paths) = resolve(&base, Some("/tmp/flag.json".into()), &env).unwrap();
        assert_eq!(paths.data_file, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_config_dir_override() {
        let temp = TempDir::new().unwrap();
        let base = base(&temp);
        let custom = temp.path().join("custom");
        write_config(&custom, r#"{"on-corrupt": "treat-as-empty"}"#);
        let env = env_of(&[(CONFIG_DIR_ENV, custom.to_str().unwrap())]);

        let (config, paths) = resolve(&base, None, env).unwrap();

        assert_eq!(paths.config_dir, custom);
        assert_eq!(config.on_corrupt, CorruptPolicy::TreatAsEmpty);
    }
}

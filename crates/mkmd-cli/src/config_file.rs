use std::env;
use std::path::{Path, PathBuf};

use mkmd_core::{Config, MkmdError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MKMD_CONFIG";

/// Config file names looked up next to the executable, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "trmrk-config.json",
    "trmrk-config.yaml",
    "trmrk-config.yml",
];

/// Load the config from `MKMD_CONFIG`, or from the executable's directory.
/// Falls back to the defaults when no file is found.
pub fn load_config() -> Result<Config> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        return load_config_file(Path::new(&path));
    }

    let exe_dir = env::current_exe()?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    match find_config_file(&exe_dir) {
        Some(path) => load_config_file(&path),
        None => {
            log::debug!("no config file in {}, using defaults", exe_dir.display());
            Ok(Config::default())
        }
    }
}

pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Parse a config file. YAML is chosen by a `.yaml`/`.yml` extension, JSON otherwise.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    log::debug!("loading config from {}", path.display());

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let config = if is_yaml {
        Config::from_yaml(&content)
    } else {
        Config::from_json(&content)
    };

    config.map_err(|err| match err {
        MkmdError::Config(msg) => MkmdError::Config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_prefers_json() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(find_config_file(temp_dir.path()), None);

        fs::write(temp_dir.path().join("trmrk-config.yml"), "").unwrap();
        assert_eq!(
            find_config_file(temp_dir.path()),
            Some(temp_dir.path().join("trmrk-config.yml"))
        );

        fs::write(temp_dir.path().join("trmrk-config.json"), "{}").unwrap();
        assert_eq!(
            find_config_file(temp_dir.path()),
            Some(temp_dir.path().join("trmrk-config.json"))
        );
    }

    #[test]
    fn test_load_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("trmrk-config.json");
        fs::write(&json_path, r#"{ "FullFileNameJoinStr": "_" }"#).unwrap();
        assert_eq!(load_config_file(&json_path).unwrap().join_str, "_");

        let yaml_path = temp_dir.path().join("trmrk-config.yaml");
        fs::write(&yaml_path, "MaxDirNameLength: 40\n").unwrap();
        assert_eq!(load_config_file(&yaml_path).unwrap().max_name_part_length, 40);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trmrk-config.json");
        fs::write(&path, "{ nope").unwrap();

        match load_config_file(&path).unwrap_err() {
            MkmdError::Config(msg) => assert!(msg.contains("trmrk-config.json")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config_file(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MkmdError::Io(_)));
    }
}

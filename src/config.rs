use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::HeaderSettings;
use crate::components::header_cell::{DEFAULT_ASC_ICON, DEFAULT_DESC_ICON};
use crate::models::{Column, SelectionType, SortCycle, SortMode};

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub sort_type: SortMode,
    pub sort_cycle: SortCycle,
    pub sort_ascending_icon: String,
    pub sort_descending_icon: String,
    pub selection_type: Option<SelectionType>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub columns: Vec<Column>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_type: SortMode::default(),
            sort_cycle: SortCycle::default(),
            sort_ascending_icon: DEFAULT_ASC_ICON.to_owned(),
            sort_descending_icon: DEFAULT_DESC_ICON.to_owned(),
            selection_type: None,
            log_file: None,
            log_level: Some("info".to_owned()),
            columns: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `path`, or the default location when `None`. The default file is created on
    /// first use; an explicit path must exist.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load(&path),
            None => {
                let path = get_config_path()?;
                if !path.is_file() {
                    fs::write(&path, DEFAULT_CONFIG)
                        .with_context(|| format!("Fail to write file `{}`", path.display()))?;
                    debug!("default config written to `{}`", path.display());
                }
                Self::load(&path)
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("Fail to open file `{}`", path.display()))?;
        let cfg: Config = serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", path.display()))?;
        Ok(cfg)
    }

    pub fn column(&self, prop: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.prop == prop)
    }

    pub fn header_settings(&self) -> HeaderSettings {
        HeaderSettings {
            sort_type: self.sort_type,
            sort_cycle: self.sort_cycle,
            sort_ascending_icon: self.sort_ascending_icon.clone(),
            sort_descending_icon: self.sort_descending_icon.clone(),
            selection_type: self.selection_type,
            all_rows_selected: false,
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_project_dir()?.config_dir().to_owned();
    if !dir.is_dir() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }

    Ok(dir.join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or(anyhow!("Fail to get project directory"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let embedded: Config = serde_yaml_ng::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(embedded, Config::default());
    }

    #[test]
    fn test_config_existing_file() {
        let file = write_config(
            r#"
sort-type: single
sort-cycle: toggle
sort-ascending-icon: icon-asc
selection-type: checkbox
log-file: /tmp/log.log
columns:
  - prop: name
    name: Name
  - prop: age
    sortable: false
"#,
        );

        let config = Config::new(Some(file.path().to_owned())).unwrap();
        assert_eq!(config.sort_type, SortMode::Single);
        assert_eq!(config.sort_cycle, SortCycle::Toggle);
        assert_eq!(config.sort_ascending_icon, "icon-asc");
        // unset keys keep their defaults
        assert_eq!(config.sort_descending_icon, DEFAULT_DESC_ICON);
        assert_eq!(config.log_level, Some("info".to_owned()));
        assert_eq!(config.log_file, Some("/tmp/log.log".to_owned()));
        assert_eq!(config.columns.len(), 2);
        assert!(!config.column("age").unwrap().sortable);
        assert!(config.column("city").is_none());

        let settings = config.header_settings();
        assert_eq!(settings.selection_type, Some(SelectionType::Checkbox));
        assert_eq!(settings.sort_type, SortMode::Single);
    }

    #[test]
    fn test_config_ser_error() {
        let file = write_config(
            r#"
sort-type: sideways
log-file: ["/tmp/log.log"]
"#,
        );

        let result = Config::new(Some(file.path().to_owned()));
        assert!(result.is_err(), "expected error, got {:?}", result);

        let err_msg = result.unwrap_err().to_string();
        assert!(
            err_msg.contains("Fail to deserialize file"),
            "expected contains `Fail to deserialize file`, but got {}",
            err_msg
        );
    }

    #[test]
    fn test_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::new(Some(dir.path().join("absent.yaml")));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Fail to open file"), "got {}", err_msg);
    }
}

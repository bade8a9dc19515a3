use crate::error::{QuizError, Result};
use crate::types::config::QuizConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "pressure-quiz.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pressure-quiz/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pressure-quiz/config.toml";

pub fn load_config(root: &Path) -> Result<QuizConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Global, repo and local files are merged in that order; later tables win key by key.
/// With none present the defaults apply.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<QuizConfig> {
    let mut merged = Value::Table(Map::new());
    let mut loaded = 0;
    if let Some(path) = global_path {
        loaded += merge_file_if_exists(&mut merged, path)?;
    }
    loaded += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    loaded += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if loaded == 0 {
        tracing::info!(root = %root.display(), "no config files found; using defaults");
    }

    let cfg: QuizConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| QuizError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

use crate::error::{Result, SangbadError};
use crate::types::config::{unknown_weight_keys, ScorerConfig};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "sangbad.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sangbad/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sangbad/config.toml";

/// Load the layered configuration rooted at `root`, or only `explicit`
/// when given. Missing layers fall back to the built-in defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ScorerConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SangbadError::PathNotFound(path.display().to_string()));
        }
        return finish(read_toml_value(path)?);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScorerConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    finish(merged)
}

fn finish(merged: Value) -> Result<ScorerConfig> {
    let unknown = unknown_weight_keys(&merged);
    if !unknown.is_empty() {
        return Err(SangbadError::ConfigParse(format!(
            "weights contains unknown key(s): {}",
            unknown.join(", ")
        )));
    }

    let cfg: ScorerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SangbadError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SangbadError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value, arrays included, is replaced.
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

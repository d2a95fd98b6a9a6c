use std::path::{Path, PathBuf};

use attend_instruments::catalog::{Catalog, CatalogOverrides};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub catalog: CatalogOverrides,
    #[serde(default)]
    pub output: OutputFormat,
    /// Tera template used for `--format report`. The built-in Markdown
    /// report is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}

impl AttendConfig {
    /// The standard catalog with this config's overrides applied.
    pub fn catalog(&self) -> eyre::Result<Catalog> {
        let catalog = Catalog::default().with_overrides(&self.catalog);
        catalog.validate()?;
        Ok(catalog)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The structured assessment as JSON.
    #[default]
    Json,
    /// Plain prose, one section per questionnaire.
    Text,
    /// A full report rendered from a template.
    Report,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("attend").join("config.json"))
}

/// Load the config at `path`, or the defaults when no file exists there.
pub fn load_config(path: &Path) -> eyre::Result<AttendConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AttendConfig {
            config_version: CURRENT_VERSION,
            ..AttendConfig::default()
        });
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).map_err(|_| newer_version_error(v))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: AttendConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(newer_version_error(u64::from(from_version)));
    }

    // v0 → v1: threshold overrides move from the top level into `catalog`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let mut catalog = serde_json::Map::new();
        if let Some(thresholds) = obj.remove("shading_thresholds") {
            catalog.insert("shading_thresholds".to_string(), thresholds);
        }
        if let Some(default) = obj.remove("default_threshold") {
            catalog.insert("default_shading_threshold".to_string(), default);
        }
        if !catalog.is_empty() {
            obj.insert("catalog".to_string(), serde_json::Value::Object(catalog));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested catalog overrides)");
    }

    Ok(json)
}

fn newer_version_error(version: u64) -> eyre::Report {
    eyre::eyre!(
        "config_version {version} is newer than this build supports ({CURRENT_VERSION}). \
         Please update attend."
    )
}

pub fn save_config(path: &Path, config: &AttendConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

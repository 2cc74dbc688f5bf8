mod questions;
mod validation;

pub use questions::{Catalog, Category, QuestionDef, QuestionKey, ScoreOption};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/wcc-assess/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("wcc-assess")
}

/// Get the default catalog override path (~/.config/wcc-assess/catalog.yaml)
pub fn get_catalog_path() -> PathBuf {
    get_config_dir().join("catalog.yaml")
}

/// Get the default assessment data path (~/.config/wcc-assess/assessments.json)
pub fn get_data_path() -> PathBuf {
    get_config_dir().join("assessments.json")
}

/// Load the question catalog.
///
/// # Arguments
///
/// * `path` - Optional path to a catalog YAML file. If None, uses the default
///   path and falls back to the built-in catalog when no file exists there.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given catalog file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let catalog_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Catalog file not found at {}", p.display());
            }
            p
        }
        None => {
            let default = get_catalog_path();
            if !default.exists() {
                return Ok(Catalog::default());
            }
            default
        }
    };

    let contents = fs::read_to_string(&catalog_path)
        .with_context(|| format!("Failed to read catalog file at {}", catalog_path.display()))?;

    let catalog: Catalog = serde_saphyr::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse catalog: invalid YAML in {}",
            catalog_path.display()
        )
    })?;

    Ok(catalog)
}

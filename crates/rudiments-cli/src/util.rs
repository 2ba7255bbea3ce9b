use std::path::{Path, PathBuf};

use anyhow::Result;

use rudiments_classifiers::config::{load_config, ModelConfig};

/// Split a comma-separated list, dropping blanks.
pub fn parse_feature_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }
    Ok(())
}

/// The JSON config at `path`, or the defaults when no path was given.
pub fn load_model_config(path: Option<&PathBuf>) -> Result<ModelConfig> {
    match path {
        Some(path) => {
            log::info!("[Rudiments] Using config: {:?}", path);
            load_config(path)
        }
        None => {
            let config = ModelConfig::default();
            log::debug!(
                "[Rudiments] No config provided; using defaults:\n{}",
                serde_json::to_string_pretty(&config).unwrap_or_default()
            );
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_list_is_trimmed() {
        assert_eq!(parse_feature_names(" age, prescript,,tearRate "), vec!["age", "prescript", "tearRate"]);
        assert!(parse_feature_names("").is_empty());
    }

    #[test]
    fn missing_paths_are_rejected() {
        let missing = Path::new("/definitely/not/here");
        assert!(validate_file(missing).is_err());
        assert!(validate_dir(missing).is_err());
    }
}

mod schema;
pub mod template;

pub use schema::{
    BasicInfo, Gender, Locomo25Answers, Snapshot, StandUpLevel, StandUpTest, TwoStepTest,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an assessment snapshot from a YAML or JSON file.
///
/// The format is picked by extension: `.json` is parsed as JSON,
/// everything else as YAML.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or does
/// not parse as a complete snapshot.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        anyhow::bail!(
            "Snapshot file not found at {}. Run `locomo-check template` to get a starting point",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file at {}", path.display()))?;

    let snapshot = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: invalid YAML in {}", path.display()))?
    };

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_file_fails() {
        let path = env::temp_dir().join("locomo_check_test_missing.yaml");
        let _ = fs::remove_file(&path);

        let result = load_snapshot(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_yaml_snapshot() {
        let path = env::temp_dir().join("locomo_check_test_load.yaml");
        fs::write(&path, template::template_str()).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.basic_info.height_cm, 165.0);
        assert_eq!(snapshot.stand_up_test.both_min, StandUpLevel::Cm20);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_json_snapshot() {
        let path = env::temp_dir().join("locomo_check_test_load.json");
        let yaml_snapshot: Snapshot = serde_saphyr::from_str(template::template_str()).unwrap();
        fs::write(&path, serde_json::to_string(&yaml_snapshot).unwrap()).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot, yaml_snapshot);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let path = env::temp_dir().join("locomo_check_test_bad.yaml");
        fs::write(&path, "basic_info: [not, a, mapping]").unwrap();

        let result = load_snapshot(&path);
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }
}

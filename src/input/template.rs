use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Sample snapshot file, parseable as-is. Stand-up values record the
/// lowest platform cleared; `null` questionnaire entries are unanswered.
const SAMPLE_SNAPSHOT: &str = r#"# locomo-check assessment snapshot
basic_info:
  company_name: "Example Co."
  user_name: "Taro Yamada"
  age: 58
  gender: male          # male | female
  height_cm: 165.0

stand_up_test:
  # Lowest platform cleared: 10cm | 20cm | 30cm | 40cm | impossible | untested
  both_min: "20cm"
  single_right_min: "40cm"
  single_left_min: "untested"

two_step_test:
  step1_cm: 170.0
  step2_cm: 182.5

# 25 answers in question order, each 0-4; null marks an unanswered item.
locomo25_answers:
  [0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 2, 0, 1, 0, null, 0, 0, 1, 2, 0, null, 1, 1]
"#;

pub fn template_str() -> &'static str {
    SAMPLE_SNAPSHOT
}

/// Write the sample snapshot to `path`, refusing to clobber an existing
/// file.
pub fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file at {}", path.display());
    }
    fs::write(path, SAMPLE_SNAPSHOT)
        .with_context(|| format!("Failed to write template to {}", path.display()))?;
    Ok(())
}

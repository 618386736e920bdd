use crate::input::Snapshot;

/// Sanity-check a snapshot before scoring.
/// Returns all problems at once (not just the first).
///
/// The engine itself never needs this to have run: degraded input is
/// absorbed as fail-severe sentinels. This pass exists so the CLI can
/// surface input mistakes instead of silently reporting maximum risk.
pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let height = snapshot.basic_info.height_cm;
    if !is_positive_measurement(height) {
        errors.push(format!(
            "basic_info.height_cm: must be a positive measurement, got {}",
            height
        ));
    }

    let two_step = &snapshot.two_step_test;
    if !is_positive_measurement(two_step.step1_cm) {
        errors.push(format!(
            "two_step_test.step1_cm: must be a positive measurement, got {}",
            two_step.step1_cm
        ));
    }
    if !is_positive_measurement(two_step.step2_cm) {
        errors.push(format!(
            "two_step_test.step2_cm: must be a positive measurement, got {}",
            two_step.step2_cm
        ));
    }

    for (i, answer) in snapshot.locomo25_answers.iter().enumerate() {
        if let Some(value) = answer {
            if *value > 4 {
                errors.push(format!(
                    "locomo25_answers: question {} scored {}, must be 0-4",
                    i + 1,
                    value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_positive_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

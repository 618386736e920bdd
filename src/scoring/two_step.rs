use super::degree::Degree;
use crate::input::TwoStepTest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStepAssessment {
    /// Best stride divided by height, rounded to 2 decimals. This rounded
    /// value is both displayed and compared against the bands.
    pub value: f64,
    pub degree: Degree,
}

/// Classify the two-step test: best-of-two stride length normalized by
/// height.
///
/// A non-positive height cannot be normalized against; the result is the
/// fail-severe sentinel `(0.0, degree 3)` rather than an error.
pub fn evaluate(test: &TwoStepTest, height_cm: f64) -> TwoStepAssessment {
    if height_cm <= 0.0 {
        return TwoStepAssessment {
            value: 0.0,
            degree: Degree::Three,
        };
    }

    // The better of the two trials is scored, never the average.
    let best_step_cm = test.step1_cm.max(test.step2_cm);
    let raw_value = best_step_cm / height_cm;

    // Two decimals, ties away from zero (f64::round). A ratio of exactly
    // X.XX5 therefore rounds up: 1.125 -> 1.13.
    let value = (raw_value * 100.0).round() / 100.0;

    let degree = if value < 0.90 {
        Degree::Three
    } else if value < 1.10 {
        Degree::Two
    } else if value < 1.30 {
        Degree::One
    } else {
        Degree::Zero
    };

    TwoStepAssessment { value, degree }
}

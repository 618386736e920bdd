use super::degree::Degree;
use crate::input::{StandUpLevel, StandUpTest};

#[derive(Debug, Clone, PartialEq)]
pub struct StandUpAssessment {
    pub degree: Degree,
    /// Which sub-measurements drove the decision, for the report.
    pub reason: String,
}

/// Classify the stand-up test.
///
/// Both single legs clearing any platform is the "no impairment" bar
/// (degree 0). Failing that, only the both-legs result decides: the higher
/// the lowest platform the subject still needs, the worse the function.
pub fn evaluate(test: &StandUpTest) -> StandUpAssessment {
    let right_ok = test.single_right_min.is_cleared();
    let left_ok = test.single_left_min.is_cleared();

    if right_ok && left_ok {
        return StandUpAssessment {
            degree: Degree::Zero,
            reason: format!(
                "single-leg 40cm cleared (right: {}, left: {})",
                test.single_right_min, test.single_left_min
            ),
        };
    }

    let single_detail = format!(
        "(single-leg right: {}, left: {})",
        test.single_right_min, test.single_left_min
    );

    let (degree, summary) = match test.both_min {
        StandUpLevel::Impossible => (Degree::Three, "both-legs 40cm impossible".to_string()),
        StandUpLevel::Cm40 => (Degree::Three, "stalled at both-legs 40cm".to_string()),
        StandUpLevel::Cm30 => (Degree::Two, "stalled at both-legs 30cm".to_string()),
        StandUpLevel::Cm20 | StandUpLevel::Cm10 => {
            (Degree::One, format!("both-legs {} cleared", test.both_min))
        }
        // Fail-severe fallback: an unusable both-legs record still yields a
        // valid result instead of an error.
        StandUpLevel::Untested => (
            Degree::Three,
            "not classifiable, insufficient input".to_string(),
        ),
    };

    StandUpAssessment {
        degree,
        reason: format!("{} {}", summary, single_detail),
    }
}

use serde::Serialize;

use super::degree::Degree;
use super::{locomo25, stand_up, two_step};
use crate::input::Snapshot;

/// Complete classification output: per-test degrees with their auxiliary
/// values, plus the combined final degree.
///
/// Field names and value ranges are a stable contract for the report and
/// submission sides, which match on the 0-3 degree values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub stand_up_degree: Degree,
    pub stand_up_reason: String,
    pub two_step_value: f64,
    pub two_step_degree: Degree,
    pub locomo25_score: u32,
    pub locomo25_degree: Degree,
    pub final_degree: Degree,
}

/// Run the three leaf evaluators and combine them.
///
/// The leaves are independent; the final degree is the worst of the three
/// sub-degrees. Any single severe deficiency determines overall risk, with
/// no weighting or precedence among sub-tests.
pub fn calculate_result(snapshot: &Snapshot) -> CalculationResult {
    let stand_up = stand_up::evaluate(&snapshot.stand_up_test);
    let two_step = two_step::evaluate(&snapshot.two_step_test, snapshot.basic_info.height_cm);
    let locomo25 = locomo25::evaluate(&snapshot.locomo25_answers);

    let final_degree = stand_up.degree.max(two_step.degree).max(locomo25.degree);

    CalculationResult {
        stand_up_degree: stand_up.degree,
        stand_up_reason: stand_up.reason,
        two_step_value: two_step.value,
        two_step_degree: two_step.degree,
        locomo25_score: locomo25.score,
        locomo25_degree: locomo25.degree,
        final_degree,
    }
}

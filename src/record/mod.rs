use serde::Serialize;

use crate::input::{Gender, Snapshot, StandUpLevel};
use crate::scoring::{CalculationResult, Degree};

/// Flat record handed to the submission side, one row per assessment.
///
/// Field names mirror the intake sheet columns, so they stay camelCase on
/// the wire and must not be renamed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub date: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,

    pub stand_up_both: StandUpLevel,
    pub stand_up_single_right: StandUpLevel,
    pub stand_up_single_left: StandUpLevel,
    pub stand_up_score: Degree,
    pub stand_up_reason: String,

    pub two_step1_cm: f64,
    pub two_step2_cm: f64,
    pub two_step_score: f64,
    pub two_step_degree: Degree,

    pub locomo25_answers: Vec<Option<u8>>,
    pub locomo25_score: u32,

    pub locomo_level: Degree,
}

impl SubmissionRecord {
    pub fn build(snapshot: &Snapshot, result: &CalculationResult, date: String) -> Self {
        SubmissionRecord {
            date,
            name: snapshot.basic_info.user_name.clone(),
            age: snapshot.basic_info.age,
            gender: snapshot.basic_info.gender,
            height: snapshot.basic_info.height_cm,
            stand_up_both: snapshot.stand_up_test.both_min,
            stand_up_single_right: snapshot.stand_up_test.single_right_min,
            stand_up_single_left: snapshot.stand_up_test.single_left_min,
            stand_up_score: result.stand_up_degree,
            stand_up_reason: result.stand_up_reason.clone(),
            two_step1_cm: snapshot.two_step_test.step1_cm,
            two_step2_cm: snapshot.two_step_test.step2_cm,
            two_step_score: result.two_step_value,
            two_step_degree: result.two_step_degree,
            locomo25_answers: snapshot.locomo25_answers.0.to_vec(),
            locomo25_score: result.locomo25_score,
            locomo_level: result.final_degree,
        }
    }
}

/// Current local time in the `YYYY/MM/DD HH:MM:SS` format the intake
/// sheet expects.
pub fn current_date_time() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

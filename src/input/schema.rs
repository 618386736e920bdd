use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject identification and body data collected before the sub-tests.
/// `height_cm` feeds the two-step normalization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BasicInfo {
    #[serde(default)]
    pub company_name: String,
    pub user_name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Outcome of one stand-up attempt series: the lowest platform cleared,
/// or why no platform was cleared at all.
///
/// A recorded height means "cleared at this height; lower platforms were
/// either not attempted or also cleared" - it is the hardest success, not
/// a log of every height tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum StandUpLevel {
    #[serde(rename = "10cm")]
    Cm10,
    #[serde(rename = "20cm")]
    Cm20,
    #[serde(rename = "30cm")]
    Cm30,
    #[serde(rename = "40cm")]
    Cm40,
    #[serde(rename = "impossible")]
    Impossible,
    #[serde(rename = "untested")]
    Untested,
}

impl StandUpLevel {
    /// Any finite cleared height counts as a pass; 40cm is the highest
    /// platform offered, so clearing it already meets the single-leg bar.
    pub fn is_cleared(self) -> bool {
        matches!(
            self,
            StandUpLevel::Cm10 | StandUpLevel::Cm20 | StandUpLevel::Cm30 | StandUpLevel::Cm40
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StandUpLevel::Cm10 => "10cm",
            StandUpLevel::Cm20 => "20cm",
            StandUpLevel::Cm30 => "30cm",
            StandUpLevel::Cm40 => "40cm",
            StandUpLevel::Impossible => "impossible",
            StandUpLevel::Untested => "untested",
        }
    }
}

impl fmt::Display for StandUpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stand-up test: lowest platform cleared with both legs and with each
/// single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StandUpTest {
    pub both_min: StandUpLevel,
    pub single_right_min: StandUpLevel,
    pub single_left_min: StandUpLevel,
}

/// Two-step test: stride length in centimeters over two trial attempts.
/// No ordering is implied between the trials; the better one is scored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TwoStepTest {
    pub step1_cm: f64,
    pub step2_cm: f64,
}

/// The 25 questionnaire answers in question order (1..=25). Each answer
/// is a 0-4 severity score; `null` marks an unanswered item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Locomo25Answers(pub [Option<u8>; 25]);

impl Locomo25Answers {
    pub const LEN: usize = 25;

    pub fn iter(&self) -> impl Iterator<Item = &Option<u8>> {
        self.0.iter()
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|a| a.is_some()).count()
    }
}

/// One complete assessment snapshot. The engine is a pure function of
/// this value; callers re-invoke it whenever any field changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub basic_info: BasicInfo,
    pub stand_up_test: StandUpTest,
    pub two_step_test: TwoStepTest,
    pub locomo25_answers: Locomo25Answers,
}

pub mod degree;
pub mod engine;
pub mod locomo25;
pub mod stand_up;
pub mod two_step;
pub mod validation;

pub use degree::Degree;
pub use engine::{calculate_result, CalculationResult};
pub use locomo25::Locomo25Assessment;
pub use stand_up::StandUpAssessment;
pub use two_step::TwoStepAssessment;
pub use validation::validate_snapshot;

use super::degree::Degree;
use crate::input::Locomo25Answers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locomo25Assessment {
    /// Sum of all 25 item scores, 0-100.
    pub score: u32,
    pub degree: Degree,
}

/// Classify the Locomo25 questionnaire.
///
/// Unanswered items score 0 (best case); they are neither excluded from
/// the sum nor treated as an error.
pub fn evaluate(answers: &Locomo25Answers) -> Locomo25Assessment {
    let score: u32 = answers.iter().map(|a| u32::from(a.unwrap_or(0))).sum();

    let degree = if score >= 24 {
        Degree::Three
    } else if score >= 16 {
        Degree::Two
    } else if score >= 7 {
        Degree::One
    } else {
        Degree::Zero
    };

    Locomo25Assessment { score, degree }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(value: Option<u8>) -> Locomo25Answers {
        Locomo25Answers([value; 25])
    }

    #[test]
    fn test_all_unanswered_is_degree_zero() {
        let result = evaluate(&all(None));
        assert_eq!(result.score, 0);
        assert_eq!(result.degree, Degree::Zero);
    }

    #[test]
    fn test_all_max_is_degree_three() {
        let result = evaluate(&all(Some(4)));
        assert_eq!(result.score, 100);
        assert_eq!(result.degree, Degree::Three);
    }

    #[test]
    fn test_unanswered_items_count_as_zero() {
        let mut answers = all(None);
        for slot in answers.0.iter_mut().take(7) {
            *slot = Some(1);
        }
        let result = evaluate(&answers);
        assert_eq!(result.score, 7);
        assert_eq!(result.degree, Degree::One);
    }

    #[test]
    fn test_band_boundaries() {
        // (score, expected degree) at every band edge.
        let cases = [
            (0, Degree::Zero),
            (6, Degree::Zero),
            (7, Degree::One),
            (15, Degree::One),
            (16, Degree::Two),
            (23, Degree::Two),
            (24, Degree::Three),
            (100, Degree::Three),
        ];
        for (score, expected) in cases {
            let mut answers = all(None);
            let mut remaining = score;
            for slot in answers.0.iter_mut() {
                let v = remaining.min(4);
                *slot = Some(v as u8);
                remaining -= v;
            }
            assert_eq!(remaining, 0, "score {} must be producible", score);
            let result = evaluate(&answers);
            assert_eq!(result.score, score);
            assert_eq!(result.degree, expected, "score {} band", score);
        }
    }
}

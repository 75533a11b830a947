// Pure decision function for result submission.
//
// Purpose
// - Validate a submitted score against the referenced test and produce nothing else.
//
// Responsibilities
// - Enforce the rule: a score must not exceed the test's maximum score.
// - Never perform input or output. Reference checks happen in the handler.

use crate::core::model::Test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("score {score} exceeds max score {max_score}")]
    ScoreExceedsMax { score: i64, max_score: i64 },
}

pub fn decide_submit(test: &Test, score: i64) -> Result<(), DecideError> {
    if score > test.max_score {
        return Err(DecideError::ScoreExceedsMax {
            score,
            max_score: test.max_score,
        });
    }
    Ok(())
}

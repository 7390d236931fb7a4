pub mod advisor;
pub mod input;
pub mod questionnaire;

use std::io;

/// Validation errors over user-supplied text. All are terminal for the
/// invocation and reported verbatim to the caller; the surrounding loop
/// continues prompting afterwards.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Invalid input. Please provide five values (age, weight, height, gender, and activity level)."
    )]
    InvalidInputShape,
    #[error("No valid numbers found or insufficient input.")]
    InvalidNumericInput,
    #[error("{0} must be in {1}.")]
    InvalidUnit(&'static str, &'static str),
    #[error(
        "Invalid activity level. Please choose from: sedentary, lightly active, moderately active, very active, or super active."
    )]
    InvalidActivityLevel,
    #[error("Gender must be either 'male' or 'female'.")]
    InvalidGender,
    #[error("Follow-up prompt failed: {0}")]
    PromptFailed(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

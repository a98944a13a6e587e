use thiserror::Error;

/// Result type for guide engine operations
pub type Result<T> = std::result::Result<T, GuideError>;

/// Errors surfaced by the guide engine.
///
/// Everything else in the engine degrades to "fewer/no suggestions" or a
/// not-found message instead of erroring.
#[derive(Error, Debug)]
pub enum GuideError {
    /// The question was empty after trimming
    #[error("Question is empty")]
    EmptyQuestion,
}

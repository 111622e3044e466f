use thiserror::Error;

/// Errors raised while walking a procedure.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The user asked to quit. Unwinds every nested `play` up to the driver.
    #[error("quit requested by user")]
    Quit,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl WalkError {
    pub fn is_quit(&self) -> bool {
        matches!(self, WalkError::Quit)
    }
}

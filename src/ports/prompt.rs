//! Confirmation prompt port.

/// Asks the user a yes/no question.
///
/// Destructive operations (delete) must pass through this boundary before
/// any request is dispatched; tests substitute a scripted answer.
pub trait Prompter: Send + Sync {
    /// Returns `true` when the user confirms the given question.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

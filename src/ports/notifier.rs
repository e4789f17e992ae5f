//! Notifier port for showing a message to the user.

use super::PortError;

/// Shows a message to the user and blocks until it has been displayed
/// (and acknowledged, if the implementation asks for that).
pub trait Notifier: Send + Sync {
    /// Displays `message` verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be written or acknowledged.
    fn notify(&self, message: &str) -> Result<(), PortError>;
}

//! Live adapters for real external interactions.

pub mod http;
pub mod notifier;

pub use http::LiveHttpClient;
pub use notifier::TerminalNotifier;

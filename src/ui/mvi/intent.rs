//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced by input handling and consumed by reducers.
pub trait Intent: Send + 'static {}

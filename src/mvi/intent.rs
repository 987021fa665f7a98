/// Marker trait for intents.
///
/// Intents are either user actions (open a dialog, type into a field) or
/// outcomes of a resource call (users loaded, request rejected).
pub trait Intent: Send + 'static {}

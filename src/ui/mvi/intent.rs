/// Marker for messages produced by views (key presses, edits, button
/// activations) or by the owner's collaborators (submission results).
pub trait Intent: Send + 'static {}

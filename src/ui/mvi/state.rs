/// Marker for immutable view snapshots.
///
/// A state holds everything a view needs to render. New states are built
/// by reducers; views never mutate them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

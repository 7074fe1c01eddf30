/// Marker trait for view state.
///
/// `Default` lets callers take the state out with `std::mem::take`
/// before handing it to a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

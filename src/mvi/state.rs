/// Marker trait for reducer-owned state.
///
/// `Default` is the state a reducer starts from and what
/// `std::mem::take` leaves behind while a transition is computed.
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}

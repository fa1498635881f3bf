//! Framework-agnostic aggregation machinery shared by every repository.

/// Background submission and callback delivery
pub mod dispatch;
/// Concurrent N-ary join of independent queries
pub mod join;

pub use dispatch::{DeliveryContext, DeliveryQueue, Dispatcher, delivery_channel};
pub use join::{QuerySet, join_into, join_with};

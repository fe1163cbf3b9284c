//! Orders module - customer purchases and their payment lifecycle.

mod order;
mod status;

pub use order::{Order, OrderItem};
pub use status::OrderStatus;

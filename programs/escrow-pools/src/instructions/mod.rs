pub mod admin;
pub mod pool;
pub mod participant;
pub mod payout;

pub use admin::*;
pub use pool::*;
pub use participant::*;
pub use payout::*;

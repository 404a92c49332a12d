//! Stores, identity, and time sources that sit between the domain and storage.

pub mod clock;
pub mod collections;
pub mod services;
pub mod session;
pub mod tracker;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collections::{Collections, CURRENT_SCHEMA_VERSION};
pub use session::Session;
pub use tracker::Tracker;

//! Typed models for the JSON resources exchanged with the Cumulocity IoT
//! REST API.
//!
//! Every optional resource attribute is a [`Maybe`]: a field missing from
//! a response stays [`Maybe::Absent`] and is skipped on encode, while an
//! explicit JSON `null` is kept as [`Maybe::Null`]. Wire enums keep
//! unrecognized constants in an `Unknown` variant instead of failing the
//! whole decode.

pub mod auth;
pub mod device_control;
pub mod error;
pub mod feature;
pub mod inventory;
pub mod maybe;
pub mod paging;
pub mod realtime;
pub mod tenant;

pub use error::C8yError;
pub use maybe::Maybe;
pub use paging::CollectionPage;
pub use paging::PageStatistics;

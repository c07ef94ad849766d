//! Domain logic for the Qonty crowdfunding platform.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! build on these types and helpers.

pub mod campaign;
pub mod donation;
pub mod error;
pub mod numeric;
pub mod search;
pub mod timeseries;
pub mod types;

//! In-memory data layer.
//!
//! [`Store`] owns the four collections plus the preference map; the
//! repository types in [`repositories`] are the only read/write surface
//! over it. The store stands in for a future persistent backend, so every
//! repository method is `async` and takes the store by reference.

pub mod repositories;
pub mod seed;
pub mod store;

pub use store::{Seed, Store};

//! Domain core for the solar field-service backend.
//!
//! Holds the record types, the error taxonomy, the role/permission table and
//! every pure computation over the collections (filtering, dashboard
//! aggregation, activity derivation, write-boundary validation). This crate
//! performs no I/O; the caller fetches data from the store and passes it in.

pub mod activity;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod query;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;

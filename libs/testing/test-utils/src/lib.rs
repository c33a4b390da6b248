//! Shared helpers for integration tests.

mod postgres;

pub use postgres::TestDatabase;

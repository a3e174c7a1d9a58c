//! Input validation for the search primitives and the harness

pub mod order;

pub use order::{ensure_ascending, ensure_bounds};

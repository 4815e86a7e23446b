//! In-memory library catalog with issue/return tracking and a one-step undo.
//!
//! The [`catalog`] keeps book records in insertion order, the [`transactions`] log stacks every
//! successful issue or return, and the [`lending`] service ties the two together. The [`console`]
//! module is the interactive front end used by the `library` binary.

pub mod books;
pub mod catalog;
pub mod console;
pub mod core;
pub mod lending;
pub mod transactions;
pub mod utils;

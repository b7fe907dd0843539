//! Immutable record model.
//!
//! # Responsibility
//! - Define field values and the record instance built from them.
//!
//! # Invariants
//! - A record is either fully valid for its concrete type or never exists.
//! - No API hands out mutable access to stored values.

pub mod record;
pub mod value;

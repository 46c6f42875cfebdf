//! Enumerated-constant sets.
//!
//! Each set is a closed Rust enum: every supported constant is a variant,
//! so values outside the set cannot be constructed and membership checks
//! reduce to discriminant equality. Each set carries a stable code used
//! for case-insensitive reverse lookup, a human-readable label, and
//! classification queries.

pub mod parameter;
pub mod permission;
pub mod response;

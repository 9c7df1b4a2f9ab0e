//! Predicate prelude for convenient imports
//!
//! Re-exports the predicate traits, their extension traits, the relation
//! traits, and the built-in checks.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::prelude::*;
//!
//! let in_range = valid_int().and_relation(gte_int(), 0).and_relation(lte_int(), 150);
//! assert!(in_range.check_int(25));
//! assert!(!in_range.check_int(151));
//! ```

// Core traits
pub use super::combinators::{Predicate, PredicateExt};
pub use super::int::{IntPredicate, IntPredicateExt};
pub use crate::relation::{
    IntObjRelation, IntRelation, IntRelationExt, ObjIntRelation, Relation, RelationExt,
};

// Seeds
pub use super::combinators::{invalid, valid};
pub use super::int::{invalid_int, valid_int};

// Built-in checks
pub use crate::checks::*;

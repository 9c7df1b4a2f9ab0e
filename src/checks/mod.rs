//! Built-in named checks
//!
//! Every check here carries a public name (such as `"gt()"`) and a prefab
//! message from [`message::prefab`](crate::message::prefab), so a failure
//! produces a readable sentence without a custom template. Composing a check
//! with anything else yields an anonymous test.
//!
//! - object predicates: [`none`], [`some`], [`empty`], [`not_empty`],
//!   [`blank`]
//! - integer predicates: [`even`], [`odd`], [`positive`], [`negative`],
//!   [`zero`]
//! - object relations: [`eq`], [`ne`], [`gt`], [`gte`], [`lt`], [`lte`],
//!   [`contains`], [`contained_in`], [`starts_with`], [`ends_with`],
//!   [`has_substr`], [`substr_of`], [`equals_ignore_case`]
//! - integer relations: [`eq_int`], [`ne_int`], [`gt_int`], [`gte_int`],
//!   [`lt_int`], [`lte_int`], [`multiple_of`]
//! - integer-object relations: [`index_of`], [`to_index_of`]
//! - object-integer relations: [`len_eq`], [`len_gt`], [`len_gte`],
//!   [`len_lt`], [`len_lte`]
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::prelude::*;
//!
//! assert!(even().check_int(4));
//! assert!(gt().relates(&5, &3));
//! assert!(len_lte().relates_obj_int("abc", 3));
//! assert_eq!(Predicate::<str>::identity(&blank()).name(), "blank()");
//! ```

mod int;
mod object;
mod support;

pub use int::*;
pub use object::*;
pub use support::{Container, Extent, Indexable};

use crate::message::{Identity, Prefab};
use crate::predicate::{IntPredicate, Predicate};
use crate::relation::{IntObjRelation, IntRelation, ObjIntRelation, Relation};

/// A test with a registered name and prefab message.
///
/// `Check` forwards evaluation to the wrapped test and reports
/// [`Identity::named`] as its identity. It implements whichever predicate or
/// relation traits the wrapped test implements.
#[derive(Clone, Copy, Debug)]
pub struct Check<P> {
    name: &'static str,
    prefab: Prefab,
    test: P,
}

impl<P> Check<P> {
    /// Give `test` a public name and a message generator.
    pub const fn new(name: &'static str, prefab: Prefab, test: P) -> Self {
        Check { name, prefab, test }
    }

    /// The public name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn named(&self) -> Identity {
        Identity::named(self.name, self.prefab)
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Check<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.test.check(value)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

impl<P: IntPredicate> IntPredicate for Check<P> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.test.check_int(value)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

impl<S: ?Sized, O: ?Sized, P: Relation<S, O>> Relation<S, O> for Check<P> {
    #[inline]
    fn relates(&self, subject: &S, object: &O) -> bool {
        self.test.relates(subject, object)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

impl<P: IntRelation> IntRelation for Check<P> {
    #[inline]
    fn relates_int(&self, subject: i32, object: i32) -> bool {
        self.test.relates_int(subject, object)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

impl<O: ?Sized, P: IntObjRelation<O>> IntObjRelation<O> for Check<P> {
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool {
        self.test.relates_int_obj(subject, object)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

impl<S: ?Sized, P: ObjIntRelation<S>> ObjIntRelation<S> for Check<P> {
    #[inline]
    fn relates_obj_int(&self, subject: &S, object: i32) -> bool {
        self.test.relates_obj_int(subject, object)
    }

    fn identity(&self) -> Identity {
        self.named()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::prefab;
    use crate::predicate::{IntPredicateExt, PredicateExt};

    #[test]
    fn test_every_builtin_name_has_a_prefab() {
        let names = [
            Predicate::<Option<i32>>::identity(&none()).into_name(),
            Predicate::<Option<i32>>::identity(&some()).into_name(),
            Predicate::<str>::identity(&empty()).into_name(),
            Predicate::<str>::identity(&not_empty()).into_name(),
            Predicate::<str>::identity(&blank()).into_name(),
            IntPredicate::identity(&even()).into_name(),
            IntPredicate::identity(&odd()).into_name(),
            IntPredicate::identity(&positive()).into_name(),
            IntPredicate::identity(&negative()).into_name(),
            IntPredicate::identity(&zero()).into_name(),
            Relation::<i32, i32>::identity(&eq()).into_name(),
            Relation::<i32, i32>::identity(&ne()).into_name(),
            Relation::<i32, i32>::identity(&gt()).into_name(),
            Relation::<i32, i32>::identity(&gte()).into_name(),
            Relation::<i32, i32>::identity(&lt()).into_name(),
            Relation::<i32, i32>::identity(&lte()).into_name(),
            Relation::<Vec<i32>, i32>::identity(&contains()).into_name(),
            Relation::<i32, Vec<i32>>::identity(&contained_in()).into_name(),
            Relation::<str, str>::identity(&starts_with()).into_name(),
            Relation::<str, str>::identity(&ends_with()).into_name(),
            Relation::<str, str>::identity(&has_substr()).into_name(),
            Relation::<str, str>::identity(&substr_of()).into_name(),
            Relation::<str, str>::identity(&equals_ignore_case()).into_name(),
            IntRelation::identity(&eq_int()).into_name(),
            IntRelation::identity(&ne_int()).into_name(),
            IntRelation::identity(&gt_int()).into_name(),
            IntRelation::identity(&gte_int()).into_name(),
            IntRelation::identity(&lt_int()).into_name(),
            IntRelation::identity(&lte_int()).into_name(),
            IntRelation::identity(&multiple_of()).into_name(),
            IntObjRelation::<str>::identity(&index_of()).into_name(),
            IntObjRelation::<str>::identity(&to_index_of()).into_name(),
            ObjIntRelation::<str>::identity(&len_eq()).into_name(),
            ObjIntRelation::<str>::identity(&len_gt()).into_name(),
            ObjIntRelation::<str>::identity(&len_gte()).into_name(),
            ObjIntRelation::<str>::identity(&len_lt()).into_name(),
            ObjIntRelation::<str>::identity(&len_lte()).into_name(),
        ];
        assert_eq!(names.len(), prefab::CATALOG.len());
        for name in names {
            assert!(prefab::lookup(&name).is_some(), "{name} missing from catalog");
        }
    }

    #[test]
    fn test_composition_drops_the_name() {
        let p = even().or(odd());
        assert!(!IntPredicate::identity(&p).is_named());
        let q = not_empty().and(|s: &str| s.len() < 4);
        assert!(!Predicate::<str>::identity(&q).is_named());
    }

    #[test]
    fn test_custom_check() {
        fn short(
            ctx: &crate::message::MessageContext<'_>,
        ) -> Result<String, crate::error::CorruptError> {
            Ok(format!("{} is too long", ctx.tag()))
        }
        let p = Check::new("short()", short, |s: &str| s.len() < 3);
        assert!(p.check("ab"));
        assert_eq!(p.name(), "short()");
        assert!(Predicate::<str>::identity(&p).is_named());
    }
}

//! Type-erased operands for permissive composition
//!
//! [`Erased`] lets a predicate written against one type sit in a chain over
//! another. The value under test is downcast when the operand is reached; a
//! mismatch is a misuse of the chain, not a validation failure.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;
use crate::error::CastError;

/// A predicate over `U`, applicable to any `'static` value.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use plumbline::predicate::*;
///
/// let erased = Erased::new(|n: &i32| *n > 0);
/// let value: &dyn Any = &5i32;
/// assert_eq!(erased.try_check(value), Ok(true));
/// assert!(erased.try_check(&"five").is_err());
/// ```
pub struct Erased<P, U> {
    inner: P,
    _marker: PhantomData<fn(&U) -> bool>,
}

impl<P, U: Any> Erased<P, U> {
    /// Wrap a predicate over `U`.
    pub fn new(inner: P) -> Self {
        Erased {
            inner,
            _marker: PhantomData,
        }
    }

    /// Check `value`, reporting a type mismatch instead of panicking.
    pub fn try_check(&self, value: &dyn Any) -> Result<bool, CastError>
    where
        P: Predicate<U>,
    {
        match value.downcast_ref::<U>() {
            Some(value) => Ok(self.inner.check(value)),
            None => Err(CastError {
                from: "<erased>",
                to: type_name::<U>(),
            }),
        }
    }
}

impl<P: Clone, U> Clone for Erased<P, U> {
    fn clone(&self) -> Self {
        Erased {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P, U> fmt::Debug for Erased<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Erased<{}>", type_name::<U>())
    }
}

impl<T: Any, U: Any, P: Predicate<U>> Predicate<T> for Erased<P, U> {
    /// # Panics
    ///
    /// Panics with a [`CastError`] message when `T` is not `U`.
    fn check(&self, value: &T) -> bool {
        let any: &dyn Any = value;
        match any.downcast_ref::<U>() {
            Some(value) => self.inner.check(value),
            None => {
                let err = CastError {
                    from: type_name::<T>(),
                    to: type_name::<U>(),
                };
                #[cfg(feature = "tracing")]
                tracing::error!(from = err.from, to = err.to, "erased operand misapplied");
                panic!("{err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_matching_type_delegates() {
        let p = Erased::new(|s: &String| s.is_empty());
        assert!(Predicate::<String>::check(&p, &String::new()));
        assert!(!Predicate::<String>::check(&p, &"x".to_string()));
    }

    #[test]
    fn test_try_check_reports_mismatch() {
        let p = Erased::new(|n: &u8| *n > 1);
        let err = p.try_check(&1i64).unwrap_err();
        assert_eq!(err.to, "u8");
        assert!(err.to_string().starts_with("cannot cast"));
    }

    #[test]
    fn test_composition_with_mismatch_does_not_fail() {
        let p = (|n: &i32| *n > 0).or_dyn(|s: &String| s.is_empty());
        // left operand decides, erased operand never reached
        assert!(p.check(&1));
    }

    #[test]
    #[should_panic(expected = "cannot cast i32 to alloc::string::String")]
    fn test_mismatch_panics_when_reached() {
        let p = (|n: &i32| *n > 0).or_dyn(|s: &String| s.is_empty());
        p.check(&-1);
    }
}

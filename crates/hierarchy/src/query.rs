//! Null-tolerant existence checks over possibly absent sequences
//!
//! An absent sequence is modelled as `None`. The `has_*` family treats it
//! exactly like an empty sequence, while the strict helpers ([`none`],
//! [`none_by`], [`for_each`]) reject it with [`Error::InvalidInput`].

use std::convert::Infallible;
use std::iter::Flatten;
use std::option;

use crate::error::{require, Argument, Error};

/// Iterator returned by [`sequence_or_empty`]
pub type OrEmpty<I> = Flatten<option::IntoIter<I>>;

/// Replace an absent sequence with an empty one
pub fn sequence_or_empty<I: IntoIterator>(source: Option<I>) -> OrEmpty<I> {
    source.into_iter().flatten()
}

/// Check if the sequence yields at least one element; absent counts as empty
pub fn has_any<I: IntoIterator>(source: Option<I>) -> bool {
    sequence_or_empty(source).next().is_some()
}

/// Check if any element satisfies `predicate`; absent counts as empty
pub fn has_any_by<I, P>(source: Option<I>, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence_or_empty(source).any(|item| predicate(&item))
}

/// Negation of [`has_any`]
pub fn has_none<I: IntoIterator>(source: Option<I>) -> bool {
    !has_any(source)
}

/// Negation of [`has_any_by`]
pub fn has_none_by<I, P>(source: Option<I>, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    !has_any_by(source, predicate)
}

/// Check if the sequence is absent or yields no elements
///
/// Same truth table as [`has_none`], but answered directly from the
/// `Option` instead of going through [`sequence_or_empty`].
pub fn is_null_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    match source {
        None => true,
        Some(source) => source.into_iter().next().is_none(),
    }
}

/// Strict emptiness check
///
/// # Errors
///
/// [`Error::InvalidInput`] if `source` is absent.
pub fn none<I: IntoIterator>(source: Option<I>) -> Result<bool, Error<Infallible>> {
    let source = require(source, Argument::Source)?;
    Ok(source.into_iter().next().is_none())
}

/// Strict check that no element satisfies `predicate`
///
/// Stops at the first element the predicate accepts.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `source` is absent, or [`Error::Callback`]
/// carrying the predicate's own error.
pub fn none_by<I, P, E>(source: Option<I>, mut predicate: P) -> Result<bool, Error<E>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let source = require(source, Argument::Source)?;
    for item in source {
        if predicate(&item).map_err(Error::Callback)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Run `action` on every element, in order
///
/// # Errors
///
/// [`Error::InvalidInput`] if `source` or `action` is absent (checked in
/// that order, before any element is touched). A failing action aborts the
/// iteration and its error is returned as [`Error::Callback`].
pub fn for_each<I, A, E>(source: Option<I>, action: Option<A>) -> Result<(), Error<E>>
where
    I: IntoIterator,
    A: FnMut(I::Item) -> Result<(), E>,
{
    let source = require(source, Argument::Source)?;
    let mut action = require(action, Argument::Action)?;

    for item in source {
        action(item).map_err(Error::Callback)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_sequence_or_empty() {
        assert_eq!(sequence_or_empty(None::<Vec<i32>>).count(), 0);
        assert_eq!(
            sequence_or_empty(Some(vec![1, 2, 3])).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_has_any_short_circuits() {
        let mut calls = 0;
        let found = has_any_by(Some(vec![1, 2, 3, 4]), |x| {
            calls += 1;
            is_even(x)
        });
        assert!(found);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_is_null_or_empty_matches_has_none() {
        for source in [None, Some(vec![]), Some(vec![1])] {
            assert_eq!(is_null_or_empty(source.clone()), has_none(source));
        }
    }

    #[test]
    fn test_none_by_propagates_predicate_error() {
        let result = none_by(Some(vec![1, 2, 3]), |x| if *x == 2 { Err("bad") } else { Ok(false) });
        assert_eq!(result.unwrap_err().into_callback(), Some("bad"));
    }

    #[test]
    fn test_for_each_checks_source_before_action() {
        let result = for_each(None::<Vec<i32>>, None::<fn(i32) -> Result<(), ()>>);
        assert_eq!(result.unwrap_err().invalid_argument(), Some(Argument::Source));
    }
}

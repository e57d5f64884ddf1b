//! Method-call syntax for the free functions
//!
//! Both traits are implemented for every `Option<I>` where `I` is a
//! sequence, so an absent sequence can be queried or walked directly.

use std::convert::Infallible;

use crate::error::Error;
use crate::query::{self, OrEmpty};
use crate::traverse;

/// Extension trait providing the sequence helpers as methods
pub trait SequenceExt: Sized {
    /// The element type of the underlying sequence
    type Item;

    /// The underlying sequence type
    type Seq: IntoIterator<Item = Self::Item>;

    /// See [`query::sequence_or_empty`]
    fn or_empty(self) -> OrEmpty<Self::Seq>;

    /// See [`query::has_any`]
    fn safe_any(self) -> bool;

    /// See [`query::has_any_by`]
    fn safe_any_by<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool;

    /// See [`query::has_none`]
    fn safe_none(self) -> bool;

    /// See [`query::has_none_by`]
    fn safe_none_by<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool;

    /// See [`query::is_null_or_empty`]
    fn is_null_or_empty(self) -> bool;

    /// See [`query::none`]
    fn strict_none(self) -> Result<bool, Error<Infallible>>;

    /// See [`query::none_by`]
    fn strict_none_by<P, E>(self, predicate: P) -> Result<bool, Error<E>>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>;

    /// See [`query::for_each`]
    fn for_each_checked<A, E>(self, action: Option<A>) -> Result<(), Error<E>>
    where
        A: FnMut(Self::Item) -> Result<(), E>;
}

impl<I: IntoIterator> SequenceExt for Option<I> {
    type Item = I::Item;
    type Seq = I;

    fn or_empty(self) -> OrEmpty<I> {
        query::sequence_or_empty(self)
    }

    fn safe_any(self) -> bool {
        query::has_any(self)
    }

    fn safe_any_by<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        query::has_any_by(self, predicate)
    }

    fn safe_none(self) -> bool {
        query::has_none(self)
    }

    fn safe_none_by<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        query::has_none_by(self, predicate)
    }

    fn is_null_or_empty(self) -> bool {
        query::is_null_or_empty(self)
    }

    fn strict_none(self) -> Result<bool, Error<Infallible>> {
        query::none(self)
    }

    fn strict_none_by<P, E>(self, predicate: P) -> Result<bool, Error<E>>
    where
        P: FnMut(&I::Item) -> Result<bool, E>,
    {
        query::none_by(self, predicate)
    }

    fn for_each_checked<A, E>(self, action: Option<A>) -> Result<(), Error<E>>
    where
        A: FnMut(I::Item) -> Result<(), E>,
    {
        query::for_each(self, action)
    }
}

/// Extension trait for walking a root sequence
pub trait HierarchyExt: SequenceExt {
    /// See [`traverse::traverse`]
    fn traverse_hierarchy<J, C, S, A, E>(
        self,
        children_of: C,
        should_stop: Option<S>,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        J: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item) -> Result<Option<J>, E>,
        S: FnMut(&Self::Item) -> Result<bool, E>,
        A: FnMut(&Self::Item) -> Result<(), E>;

    /// See [`traverse::traverse_all`]
    fn traverse_hierarchy_all<J, C, A, E>(
        self,
        children_of: C,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        J: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item) -> Result<Option<J>, E>,
        A: FnMut(&Self::Item) -> Result<(), E>;
}

impl<I: IntoIterator> HierarchyExt for Option<I> {
    fn traverse_hierarchy<J, C, S, A, E>(
        self,
        children_of: C,
        should_stop: Option<S>,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        J: IntoIterator<Item = I::Item>,
        C: FnMut(&I::Item) -> Result<Option<J>, E>,
        S: FnMut(&I::Item) -> Result<bool, E>,
        A: FnMut(&I::Item) -> Result<(), E>,
    {
        traverse::traverse(self, children_of, should_stop, action)
    }

    fn traverse_hierarchy_all<J, C, A, E>(
        self,
        children_of: C,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        J: IntoIterator<Item = I::Item>,
        C: FnMut(&I::Item) -> Result<Option<J>, E>,
        A: FnMut(&I::Item) -> Result<(), E>,
    {
        traverse::traverse_all(self, children_of, action)
    }
}

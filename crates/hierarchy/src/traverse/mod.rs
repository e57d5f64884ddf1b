//! Depth-first traversal of caller-defined forests
//!
//! The traverser imposes no structure on the node type. Callers describe
//! the forest with a root sequence and a child accessor, and observe it
//! through callbacks. Nothing is accumulated by the traverser itself.
//!
//! Two variants exist:
//!
//! - [`traverse`] evaluates a stop condition at every node. Nodes where it
//!   holds are handed to the action and their subtree is pruned; all other
//!   nodes are descended into without being actioned.
//! - [`traverse_all`] actions every reachable node, parent before children.
//!
//! Neither variant detects cycles. A node reachable from itself (without a
//! stop in between) makes the walk run forever, and very deep trees can
//! exhaust the call stack under [`Strategy::Recursive`]. Bounding the input
//! is up to the caller.

mod strategy;
mod walk;

pub use strategy::Strategy;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{require, Argument, Error};

/// Traversal configuration
///
/// # Example
///
/// ```
/// use hierarchy::{Strategy, Traversal};
///
/// let mut visited = Vec::new();
/// let result: hierarchy::Result<()> = Traversal::with_strategy(Strategy::WorkStack)
///     .traverse_all(
///         Some(vec![1u32]),
///         |n: &u32| Ok((*n < 4).then(|| vec![n * 2, n * 2 + 1])),
///         Some(|n: &u32| {
///             visited.push(*n);
///             Ok(())
///         }),
///     );
///
/// result.unwrap();
/// assert_eq!(visited, vec![1, 2, 4, 5, 3, 6, 7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Traversal {
    strategy: Strategy,
}

impl Traversal {
    /// Create a traversal using the default (recursive) strategy
    pub const fn new() -> Self {
        Self {
            strategy: Strategy::Recursive,
        }
    }

    /// Create a traversal using the given strategy
    pub const fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Walk the forest, actioning the fringe of nodes where `should_stop` holds
    ///
    /// For every node in pre-order, left to right: if `should_stop(node)` is
    /// true, `action(node)` runs and `children_of` is *not* called for it.
    /// Otherwise `action` is skipped and the walk continues into
    /// `children_of(node)`, where `None` means no children.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `roots`, `should_stop` or `action` is
    /// absent, checked in that order before any callback runs. The first
    /// failing callback aborts the walk and its error is returned unchanged
    /// inside [`Error::Callback`].
    pub fn traverse<T, I, J, C, S, A, E>(
        &self,
        roots: Option<I>,
        mut children_of: C,
        should_stop: Option<S>,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = T>,
        C: FnMut(&T) -> Result<Option<J>, E>,
        S: FnMut(&T) -> Result<bool, E>,
        A: FnMut(&T) -> Result<(), E>,
    {
        let roots = require(roots, Argument::Roots)?;
        let mut should_stop = require(should_stop, Argument::ShouldStop)?;
        let mut action = require(action, Argument::Action)?;

        trace!("Starting conditional traversal ({})", self.strategy);
        self.run(roots, |node: &T| {
            if should_stop(node)? {
                action(node)?;
                Ok(None)
            } else {
                children_of(node)
            }
        })
    }

    /// Walk the forest, actioning every reachable node in pre-order
    ///
    /// `action(node)` runs first, then the walk continues into
    /// `children_of(node)`, where `None` means no children.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `roots` or `action` is absent. The first
    /// failing callback aborts the walk and its error is returned unchanged
    /// inside [`Error::Callback`].
    pub fn traverse_all<T, I, J, C, A, E>(
        &self,
        roots: Option<I>,
        mut children_of: C,
        action: Option<A>,
    ) -> Result<(), Error<E>>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = T>,
        C: FnMut(&T) -> Result<Option<J>, E>,
        A: FnMut(&T) -> Result<(), E>,
    {
        let roots = require(roots, Argument::Roots)?;
        let mut action = require(action, Argument::Action)?;

        trace!("Starting full traversal ({})", self.strategy);
        self.run(roots, |node: &T| {
            action(node)?;
            children_of(node)
        })
    }

    fn run<T, I, J, X, E>(&self, roots: I, mut expand: X) -> Result<(), Error<E>>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = T>,
        X: FnMut(&T) -> Result<Option<J>, E>,
    {
        match self.strategy {
            Strategy::Recursive => walk::recursive(roots, &mut expand),
            Strategy::WorkStack => walk::work_stack(roots, &mut expand),
        }
        .map_err(Error::Callback)
    }
}

/// Conditional traversal with the default configuration
///
/// See [`Traversal::traverse`].
pub fn traverse<T, I, J, C, S, A, E>(
    roots: Option<I>,
    children_of: C,
    should_stop: Option<S>,
    action: Option<A>,
) -> Result<(), Error<E>>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    C: FnMut(&T) -> Result<Option<J>, E>,
    S: FnMut(&T) -> Result<bool, E>,
    A: FnMut(&T) -> Result<(), E>,
{
    Traversal::default().traverse(roots, children_of, should_stop, action)
}

/// Unconditional traversal with the default configuration
///
/// See [`Traversal::traverse_all`].
pub fn traverse_all<T, I, J, C, A, E>(
    roots: Option<I>,
    children_of: C,
    action: Option<A>,
) -> Result<(), Error<E>>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    C: FnMut(&T) -> Result<Option<J>, E>,
    A: FnMut(&T) -> Result<(), E>,
{
    Traversal::default().traverse_all(roots, children_of, action)
}

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a traversal descends into child sequences
///
/// Both strategies invoke the callbacks on the same nodes in the same
/// order, and both pull child sequences lazily. They only differ in where
/// the pending child iterators live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Plain recursion; the call stack grows with the height of the tree
    #[default]
    #[display(fmt = "recursive")]
    Recursive,

    /// An explicit stack of child iterators on the heap
    #[display(fmt = "work-stack")]
    WorkStack,
}

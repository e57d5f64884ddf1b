//! Hierarchy Library
//!
//! Null-safe helpers for possibly absent sequences, plus a generic
//! depth-first traverser for caller-defined forests.
//!
//! # Core Concepts
//!
//! - **Absent sequence**: `None`, as opposed to `Some` of an empty sequence
//! - **Safe helpers**: [`has_any`], [`has_none`] and friends treat absent as empty
//! - **Strict helpers**: [`none`], [`for_each`] reject an absent source
//! - **Traversal**: [`traverse`] prunes at a stop condition, [`traverse_all`]
//!   visits everything
//!
//! # Example
//!
//! ```
//! use hierarchy::prelude::*;
//!
//! struct Dir {
//!     name: &'static str,
//!     entries: Vec<Dir>,
//! }
//!
//! fn entries<'a>(dir: &&'a Dir) -> Result<Option<&'a [Dir]>, ()> {
//!     Ok(Some(&dir.entries[..]))
//! }
//!
//! let root = Dir {
//!     name: "src",
//!     entries: vec![
//!         Dir { name: "lib.rs", entries: vec![] },
//!         Dir { name: "tree", entries: vec![Dir { name: "mod.rs", entries: vec![] }] },
//!     ],
//! };
//!
//! // Only the leaves are actioned
//! let mut files = Vec::new();
//! traverse(
//!     Some(vec![&root]),
//!     entries,
//!     Some(|dir: &&Dir| Ok(dir.entries.is_empty())),
//!     Some(|dir: &&Dir| {
//!         files.push(dir.name);
//!         Ok(())
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(files, vec!["lib.rs", "mod.rs"]);
//! assert!(Some(files).safe_any_by(|name| name.ends_with(".rs")));
//! ```

mod error;
pub mod ext;
pub mod query;
pub mod traverse;

pub use error::{Argument, Error, Result};
pub use ext::{HierarchyExt, SequenceExt};
pub use query::{
    for_each, has_any, has_any_by, has_none, has_none_by, is_null_or_empty, none, none_by,
    sequence_or_empty, OrEmpty,
};
pub use traverse::{traverse, traverse_all, Strategy, Traversal};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Argument, Error};
    pub use crate::ext::{HierarchyExt, SequenceExt};
    pub use crate::query::{
        for_each, has_any, has_any_by, has_none, has_none_by, is_null_or_empty, none, none_by,
        sequence_or_empty,
    };
    pub use crate::traverse::{traverse, traverse_all, Strategy, Traversal};
}

//! Depth-first, pre-order drivers
//!
//! A driver knows nothing about stop conditions or actions. It hands every
//! node to `expand`, which runs whatever callbacks apply and returns the
//! children to descend into (`None` when there is nothing to descend into).

use smallvec::SmallVec;

use crate::query::sequence_or_empty;

/// Pending child iterators kept inline before spilling to the heap
const INLINE_DEPTH: usize = 16;

/// Walk `nodes` with genuine recursion
pub(crate) fn recursive<T, N, J, X, E>(nodes: N, expand: &mut X) -> Result<(), E>
where
    N: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    X: FnMut(&T) -> Result<Option<J>, E>,
{
    for node in nodes {
        let children = expand(&node)?;
        recursive(sequence_or_empty(children), expand)?;
    }
    Ok(())
}

/// Walk `nodes` keeping one partially consumed iterator per open level
pub(crate) fn work_stack<T, N, J, X, E>(nodes: N, expand: &mut X) -> Result<(), E>
where
    N: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    X: FnMut(&T) -> Result<Option<J>, E>,
{
    let mut pending: SmallVec<[J::IntoIter; INLINE_DEPTH]> = SmallVec::new();

    for root in nodes {
        if let Some(children) = expand(&root)? {
            pending.push(children.into_iter());
        }

        while let Some(level) = pending.last_mut() {
            match level.next() {
                Some(node) => {
                    if let Some(children) = expand(&node)? {
                        pending.push(children.into_iter());
                    }
                }
                None => {
                    pending.pop();
                }
            }
        }
    }
    Ok(())
}

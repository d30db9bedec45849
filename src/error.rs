use std::{error, fmt};

use crate::bst::NodeId;

/// BstError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum BstError<K>
where
    K: Clone + Ord,
{
    /// Returned by min() and max() APIs when the index is empty.
    EmptyTree,
    /// Returned by delete() API when key is not present.
    KeyNotFound,
    /// Handle does not refer to a live node in this index, either it
    /// was removed or it belongs to another index.
    InvalidNode(NodeId),
    /// Returned by insert() API when key is already present.
    OverwriteKey,
    /// Fatal case, index entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, a child does not point back to its parent. The String
    /// component of this variant can be used for debugging.
    ParentMismatch(String),
    /// Fatal case, number of reachable nodes, as first component, does
    /// not match the number of entries, as second component.
    CountMismatch(usize, usize),
}

impl<K> fmt::Display for BstError<K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BstError::EmptyTree => write!(f, "index is empty"),
            BstError::KeyNotFound => write!(f, "key not found"),
            BstError::InvalidNode(id) => write!(f, "invalid node handle {:?}", id),
            BstError::OverwriteKey => write!(f, "key already present"),
            BstError::SortError(a, b) => {
                write!(f, "keys out of order: {:?} before {:?}", a, b)
            }
            BstError::ParentMismatch(msg) => write!(f, "parent mismatch: {}", msg),
            BstError::CountMismatch(found, entries) => write!(
                f,
                "reachable nodes {} does not match entries {}",
                found, entries
            ),
        }
    }
}

impl<K> error::Error for BstError<K> where K: Clone + Ord + fmt::Debug {}

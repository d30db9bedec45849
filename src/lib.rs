//! In-memory ordered index, implemented as an unbalanced binary search
//! tree whose nodes carry a back-reference to their parent.
//!
//! Nodes are kept in an arena and linked by [`NodeId`] handles, which
//! allows structural navigation, like [`Bst::successor`] and
//! [`Bst::predecessor`], without reference counting.
//!
//! ```
//! use bst_index::Bst;
//!
//! let items = vec![(15, "A"), (6, "B"), (18, "C"), (3, "D"), (7, "E")];
//! let mut bst = Bst::load_from("example", items).unwrap();
//! assert_eq!(bst.delete(&7), Ok("E"));
//!
//! let keys: Vec<i32> = bst.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![3, 6, 15, 18]);
//! ```

mod bst;
mod depth;
mod error;

pub use crate::bst::{Bst, Iter, Node, NodeId, Range, Stats};
pub use crate::depth::Depth;
pub use crate::error::BstError;

use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    fmt, mem,
    ops::{Bound, RangeBounds},
};

use rand::Rng;
use slab::Slab;

use crate::depth::Depth;
use crate::error::BstError;

/// Handle to a node in a [`Bst`] instance.
///
/// Handles are indices into the tree's arena, tagged with the generation
/// of the node they were issued for. They do not keep the node alive.
/// Once a node is deleted its slot may be reused by a later insert, the
/// new node gets a fresh generation, so a stale handle is rejected with
/// [`BstError::InvalidNode`] instead of reaching the new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize, u32);

/// Bst manage a single instance of in-memory index using an unbalanced
/// [binary search tree][bst], where every node carries a back-reference
/// to its parent.
///
/// Shape of the tree is a direct function of the insertion order, no
/// rebalancing is done. Height can be as bad as number of entries, so
/// every operation here, except [`Bst::walk`] and
/// [`Bst::search_recursive`], is iterative.
///
/// [bst]: https://en.wikipedia.org/wiki/Binary_search_tree
#[derive(Clone)]
pub struct Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    name: String,
    root: Option<NodeId>,
    nodes: Slab<Node<K, V>>,
    n_count: usize, // number of entries in the tree.
    gen: u32,       // generation of the latest node.
}

/// Different ways to construct a new Bst instance.
impl<K, V> Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create an empty instance of Bst, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Bst<K, V>
    where
        S: AsRef<str>,
    {
        Bst {
            name: name.as_ref().to_string(),
            root: Default::default(),
            nodes: Slab::new(),
            n_count: Default::default(),
            gen: Default::default(),
        }
    }

    /// Create a new instance of Bst tree and load it with entries
    /// from `iter`. First entry becomes the root and rest of the entries
    /// are inserted in iteration order. Note that iterator should return
    /// (key, value) tuples, where key must be ``unique``.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Bst<K, V>, BstError<K>>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut bst = Bst::new(name);
        for (key, value) in iter {
            bst.insert(key, value)?;
        }
        Ok(bst)
    }
}

/// Maintenance API.
impl<K, V> Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Bst instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return the root node, None if index is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Return the node referred by `id`, None if `id` is stale.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id.0).filter(|node| node.gen == id.1)
    }

    /// Return quickly with basic statisics, only entries() and
    /// node_size() are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }

    /// Return height of the tree, counted as number of links on the
    /// longest path from root to a leaf. None if index is empty.
    pub fn height(&self) -> Option<usize> {
        let mut stack = vec![(self.root?, 0)];
        let mut height = 0;
        while let Some((id, depth)) = stack.pop() {
            let node = self.node_ref(id);
            height = std::cmp::max(height, depth);
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        Some(height)
    }

    /// Remove all entries from this instance.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.n_count = 0;
    }

    /// Validate Bst tree with following rules:
    ///
    /// * Make sure keys are in sorted order.
    /// * Every child points back to its parent, and root has no parent.
    /// * Every entry is reachable from root, exactly once.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, BstError<K>> {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        let mut depths = Depth::new();

        if let Some(root) = self.root {
            let parent = self.check(root)?.parent;
            if parent.is_some() {
                let err = format!("root {:?} has parent {:?}", root, parent);
                return Err(BstError::ParentMismatch(err));
            }
        }

        let (mut visited, limit) = (0_usize, self.nodes.len());
        let mut prev: Option<&K> = None;
        let mut stack: Vec<(NodeId, usize)> = vec![];
        let mut at = self.root.map(|id| (id, 0));
        loop {
            while let Some((id, depth)) = at {
                visited += 1;
                if visited > limit {
                    return Err(BstError::CountMismatch(visited, limit));
                }
                stack.push((id, depth));
                at = self.check(id)?.left.map(|l| (l, depth + 1));
            }
            let (id, depth) = match stack.pop() {
                Some(item) => item,
                None => break,
            };
            let node = self.node_ref(id);
            for child in node.left.iter().chain(node.right.iter()) {
                let parent = self.check(*child)?.parent;
                if parent != Some(id) {
                    let err = format!("child {:?} of {:?} points to {:?}", child, id, parent);
                    return Err(BstError::ParentMismatch(err));
                }
            }
            if let Some(prev) = prev {
                if prev.ge(&node.key) {
                    return Err(BstError::SortError(prev.clone(), node.key.clone()));
                }
            }
            if node.is_leaf() {
                depths.sample(depth);
            }
            prev = Some(&node.key);
            at = node.right.map(|r| (r, depth + 1));
        }

        if visited != self.n_count || limit != self.n_count {
            return Err(BstError::CountMismatch(visited, self.n_count));
        }
        stats.set_depths(depths);
        Ok(stats)
    }
}

/// Write operations on Bst instance.
impl<K, V> Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create a new {key, value} entry in the index and return its handle.
    /// If key is already present return error, index is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeId, BstError<K>> {
        let (mut at, mut parent) = (self.root, None);
        while let Some(id) = at {
            let node = self.node_ref(id);
            at = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Err(BstError::OverwriteKey),
            };
            parent = Some(id);
        }
        Ok(self.attach(parent, key, value))
    }

    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let (mut at, mut parent) = (self.root, None);
        while let Some(id) = at {
            let node = self.node_ref(id);
            at = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    let node = self.node_mut(id);
                    return Some(mem::replace(&mut node.value, value));
                }
            };
            parent = Some(id);
        }
        self.attach(parent, key, value);
        None
    }

    /// Delete key from this instance and return its value. If key is
    /// not present return error.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, BstError<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Some(id) => Ok(self.unlink(id).value),
            None => Err(BstError::KeyNotFound),
        }
    }

    /// Delete the node referred by `id` and return its entry.
    pub fn remove(&mut self, id: NodeId) -> Result<(K, V), BstError<K>> {
        self.check(id)?;
        let node = self.unlink(id);
        Ok((node.key, node.value))
    }
}

/// Read operations on Bst instance.
impl<K, V> Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| self.node_ref(id).value.clone())
    }

    /// Get a mutable reference to the value for key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.search(key)?;
        Some(&mut self.node_mut(id).value)
    }

    /// Check whether key is present in this index.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Search for key starting from root, return its node.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.descend(self.root, key)
    }

    /// Search for key within the subtree rooted at `subtree`.
    pub fn search_in<Q>(&self, subtree: NodeId, key: &Q) -> Result<Option<NodeId>, BstError<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.check(subtree)?;
        Ok(self.descend(Some(subtree), key))
    }

    /// Same as [`Bst::search`], but recurse down the tree instead of
    /// looping. Recursion depth is bounded by height of the tree, which
    /// for unbalanced trees can be as large as number of entries.
    pub fn search_recursive<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.descend_recursive(self.root, key)
    }

    /// Return the node with smallest key in this index.
    pub fn min(&self) -> Result<NodeId, BstError<K>> {
        self.root
            .map(|root| self.minimum(root))
            .ok_or(BstError::EmptyTree)
    }

    /// Return the node with largest key in this index.
    pub fn max(&self) -> Result<NodeId, BstError<K>> {
        self.root
            .map(|root| self.maximum(root))
            .ok_or(BstError::EmptyTree)
    }

    /// Return the node with smallest key in subtree rooted at `subtree`.
    pub fn min_of(&self, subtree: NodeId) -> Result<NodeId, BstError<K>> {
        self.check(subtree)?;
        Ok(self.minimum(subtree))
    }

    /// Return the node with largest key in subtree rooted at `subtree`.
    pub fn max_of(&self, subtree: NodeId) -> Result<NodeId, BstError<K>> {
        self.check(subtree)?;
        Ok(self.maximum(subtree))
    }

    /// Return the node with smallest key greater than key at `id`. None
    /// if `id` holds the largest key.
    pub fn successor(&self, id: NodeId) -> Result<Option<NodeId>, BstError<K>> {
        self.check(id)?;
        Ok(self.next_of(id))
    }

    /// Return the node with largest key smaller than key at `id`. None
    /// if `id` holds the smallest key.
    pub fn predecessor(&self, id: NodeId) -> Result<Option<NodeId>, BstError<K>> {
        self.check(id)?;
        Ok(self.prev_of(id))
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(K, V)> {
        let mut nref = self.node_ref(self.root?);

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => nref.left,
                _ => nref.right,
            };
            match next {
                Some(id) if at_depth > 0 => {
                    at_depth -= 1;
                    nref = self.node_ref(id);
                }
                _ => break Some((nref.key.clone(), nref.value.clone())),
            }
        }
    }

    /// Return an iterator over all entries in this instance, in
    /// ascending order of keys.
    pub fn iter(&self) -> Iter<K, V> {
        let mut iter = Iter {
            tree: self,
            stack: vec![],
            remaining: self.n_count,
        };
        iter.push_left(self.root);
        iter
    }

    /// Walk all entries in ascending order of keys, calling `callb` on
    /// each of them. Walk is recursive, refer to [`Bst::iter`] for
    /// unbounded height.
    pub fn walk<F>(&self, mut callb: F)
    where
        F: FnMut(&K, &V),
    {
        self.walk_tree(self.root, &mut callb)
    }

    /// Range over all entries from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<K, V>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ?Sized,
    {
        let front = self.lower_bound(range.start_bound());
        let back = self.upper_bound(range.end_bound());
        let (front, back) = match (front, back) {
            (Some(f), Some(b)) if self.node_ref(f).key <= self.node_ref(b).key => {
                (Some(f), Some(b))
            }
            _ => (None, None),
        };
        Range {
            tree: self,
            front,
            back,
        }
    }
}

impl<K, V> Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    #[inline]
    fn check(&self, id: NodeId) -> Result<&Node<K, V>, BstError<K>> {
        self.node(id).ok_or(BstError::InvalidNode(id))
    }

    // `id` shall be a live handle held inside the tree.
    #[inline]
    fn node_ref(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    fn descend<Q>(&self, mut at: Option<NodeId>, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        while let Some(id) = at {
            let node = self.node_ref(id);
            at = match node.key.borrow().cmp(key) {
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    fn descend_recursive<Q>(&self, at: Option<NodeId>, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = at?;
        let node = self.node_ref(id);
        match node.key.borrow().cmp(key) {
            Ordering::Less => self.descend_recursive(node.right, key),
            Ordering::Greater => self.descend_recursive(node.left, key),
            Ordering::Equal => Some(id),
        }
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node_ref(id).left {
            id = left
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node_ref(id).right {
            id = right
        }
        id
    }

    // No key comparison here, successor is found purely from the shape.
    fn next_of(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node_ref(id);
        if let Some(right) = node.right {
            return Some(self.minimum(right));
        }
        let (mut x, mut y) = (id, node.parent);
        while let Some(p) = y {
            let parent = self.node_ref(p);
            if parent.right != Some(x) {
                break;
            }
            x = p;
            y = parent.parent;
        }
        y
    }

    fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node_ref(id);
        if let Some(left) = node.left {
            return Some(self.maximum(left));
        }
        let (mut x, mut y) = (id, node.parent);
        while let Some(p) = y {
            let parent = self.node_ref(p);
            if parent.left != Some(x) {
                break;
            }
            x = p;
            y = parent.parent;
        }
        y
    }

    // first node whose key satisfies the lower bound.
    fn lower_bound<Q>(&self, low: Bound<&Q>) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut at, mut found) = (self.root, None);
        while let Some(id) = at {
            let node = self.node_ref(id);
            let within = match low {
                Bound::Included(qow) => node.key.borrow().ge(qow),
                Bound::Excluded(qow) => node.key.borrow().gt(qow),
                Bound::Unbounded => true,
            };
            at = if within {
                found = Some(id);
                node.left
            } else {
                node.right
            };
        }
        found
    }

    // last node whose key satisfies the upper bound.
    fn upper_bound<Q>(&self, high: Bound<&Q>) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut at, mut found) = (self.root, None);
        while let Some(id) = at {
            let node = self.node_ref(id);
            let within = match high {
                Bound::Included(qigh) => node.key.borrow().le(qigh),
                Bound::Excluded(qigh) => node.key.borrow().lt(qigh),
                Bound::Unbounded => true,
            };
            at = if within {
                found = Some(id);
                node.right
            } else {
                node.left
            };
        }
        found
    }

    fn walk_tree<F>(&self, at: Option<NodeId>, callb: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(id) = at {
            let node = self.node_ref(id);
            self.walk_tree(node.left, callb);
            callb(&node.key, &node.value);
            self.walk_tree(node.right, callb);
        }
    }

    // attach a new leaf under `parent`, or as root if parent is None.
    fn attach(&mut self, parent: Option<NodeId>, key: K, value: V) -> NodeId {
        let is_left = match parent {
            Some(p) => key.lt(&self.node_ref(p).key),
            None => false,
        };
        self.gen = self.gen.wrapping_add(1);
        let entry = self.nodes.vacant_entry();
        let id = NodeId(entry.key(), self.gen);
        entry.insert(Node::new(key, value, parent, self.gen));
        match parent {
            None => self.root = Some(id),
            Some(p) if is_left => self.node_mut(p).left = Some(id),
            Some(p) => self.node_mut(p).right = Some(id),
        }
        self.n_count += 1;
        id
    }

    //              p                         p
    //              |                         |
    //              u          ==>            v
    //             / \                       / \
    //
    // Replace subtree rooted at `u` with subtree rooted at `v`, children
    // of `u` are left as they are.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.node_ref(u).parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                let pnode = self.node_mut(p);
                if pnode.left == Some(u) {
                    pnode.left = v
                } else {
                    pnode.right = v
                }
            }
        }
        if let Some(v) = v {
            self.node_mut(v).parent = parent;
        }
    }

    //              z                         y
    //             / \                       / \
    //            l   r          ==>        l   r
    //               / \                       / \
    //              y                         yr
    //               \
    //                yr
    //
    fn unlink(&mut self, z: NodeId) -> Node<K, V> {
        let (left, right) = {
            let node = self.node_ref(z);
            (node.left, node.right)
        };
        match (left, right) {
            (None, right) => self.transplant(z, right),
            (left @ Some(_), None) => self.transplant(z, left),
            (Some(left), Some(right)) => {
                // y has no left child, being the minimum of z.right.
                let y = self.minimum(right);
                if y != right {
                    let yr = self.node_ref(y).right;
                    self.transplant(y, yr);
                    self.node_mut(y).right = Some(right);
                    self.node_mut(right).parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(left);
                self.node_mut(left).parent = Some(y);
            }
        }
        self.n_count -= 1;
        self.nodes.remove(z.0)
    }
}

impl<K, V> fmt::Debug for Bst<K, V>
where
    K: Clone + Ord + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a Bst<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// In-order iterator over [`Bst`], using an explicit stack of pending
/// ancestors instead of recursion.
pub struct Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    tree: &'a Bst<K, V>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn push_left(&mut self, mut at: Option<NodeId>) {
        while let Some(id) = at {
            self.stack.push(id);
            at = self.tree.node_ref(id).left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node_ref(self.stack.pop()?);
        self.push_left(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
}

/// Iterator over a range of entries in [`Bst`], walking from node to
/// node via successor and predecessor links. Use `rev()` to iterate in
/// descending order.
pub struct Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    tree: &'a Bst<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V> Iterator for Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (tree, id) = (self.tree, self.front?);
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = tree.next_of(id);
        }
        let node = tree.node_ref(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (tree, id) = (self.tree, self.back?);
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = tree.prev_of(id);
        }
        let node = tree.node_ref(id);
        Some((&node.key, &node.value))
    }
}

/// Node corresponds to a single entry in Bst instance.
#[derive(Clone, Debug)]
pub struct Node<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    key: K,
    value: V,
    gen: u32,               // matched against NodeId's generation
    parent: Option<NodeId>, // back-reference, None for root
    left: Option<NodeId>,   // store: left child
    right: Option<NodeId>,  // store: right child
}

impl<K, V> Node<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn new(key: K, value: V, parent: Option<NodeId>, gen: u32) -> Node<K, V> {
        Node {
            gen,
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Return parent of this node, None for root node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Statistics on [`Bst`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Bst::stats`] method.
/// * To get full statisics via [`Bst::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Bst`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Bst<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types. EG:
    ///
    /// ```
    /// use bst_index::Bst;
    /// let bst: Bst<u64,u64> = Bst::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // size of value: 8 bytes
    /// // overhead is 80 bytes, for generation, parent, left and right links
    /// assert_eq!(bst.stats().node_size(), 96);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return [`Depth`] statistics, available only from
    /// [`Bst::validate`] on a non-empty tree.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Bst, BstError};

    fn tree() -> Bst<i64, i64> {
        let items = vec![(4, 40), (2, 20), (6, 60), (1, 10), (3, 30)];
        Bst::load_from("test-bst", items).unwrap()
    }

    #[test]
    fn test_validate_parent() {
        let mut bst = tree();
        let (two, six) = (bst.search(&2).unwrap(), bst.search(&6).unwrap());
        let three = bst.search(&3).unwrap();
        bst.node_mut(three).parent = Some(six);
        match bst.validate() {
            Err(BstError::ParentMismatch(_)) => (),
            _ => panic!("expected parent mismatch"),
        }
        bst.node_mut(three).parent = Some(two);
        assert!(bst.validate().is_ok());

        let root = bst.root().unwrap();
        bst.node_mut(root).parent = Some(two);
        match bst.validate() {
            Err(BstError::ParentMismatch(_)) => (),
            _ => panic!("expected parent mismatch"),
        }
    }

    #[test]
    fn test_validate_sort() {
        let mut bst = tree();
        let one = bst.search(&1).unwrap();
        bst.node_mut(one).key = 5;
        assert_eq!(bst.validate().err(), Some(BstError::SortError(5, 2)));
    }

    #[test]
    fn test_validate_count() {
        let mut bst = tree();
        bst.n_count += 1;
        assert_eq!(bst.validate().err(), Some(BstError::CountMismatch(5, 6)));
    }

    #[test]
    fn test_validate_cycle() {
        let mut bst = tree();
        let (one, root) = (bst.search(&1).unwrap(), bst.root().unwrap());
        bst.node_mut(one).left = Some(root);
        match bst.validate() {
            Err(BstError::CountMismatch(_, _)) | Err(BstError::ParentMismatch(_)) => (),
            _ => panic!("expected cycle to be detected"),
        }
    }
}

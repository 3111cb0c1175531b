//! An unbalanced BST whose nodes keep a pointer back to their parent. Removal splices nodes
//! around instead of swapping values, so a node's value never moves once it has been inserted.
//!
//! # Examples
//!
//! ```
//! use splice::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal value is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Erasing a value hands it back.
//! assert_eq!(tree.erase(&1), Some(1));
//! assert!(tree.is_empty());
//!
//! // Erasing it again does nothing.
//! assert_eq!(tree.erase(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A Binary Search Tree without any balancing. Inserting sorted data degrades it into a list,
/// which is why every walk in here is a loop rather than a recursion.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<NonNull<Node<T>>> = self.root.take().0.into_iter().collect();
        while let Some(node) = stack.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Node::new_link` and is owned
            // by exactly one parent link (or the root). We pushed each pointer once, when we
            // released its owner, so no node is freed twice and none is read after this.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            stack.extend(node.left.0);
            stack.extend(node.right.0);
        }
        self.len = 0;
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::NONE,
            len: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a lone root a height
    /// of 1. Because nothing rebalances the tree, inserting `n` sorted values gives a height
    /// of `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::tree::Tree;
    ///
    /// let ascending: Tree<_> = (0..5).collect();
    /// assert_eq!(ascending.height(), 5);
    ///
    /// let bushy: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(bushy.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Iterates over the values of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert!(tree.iter().copied().eq([1, 3, 4, 5, 8]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
            _tree: PhantomData,
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find_node(value).0.is_some()
    }

    /// Inserts `value` unless an equal value is already stored. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(mut parent) = self.root.0 else {
            self.root = Node::new_link(value, Link::NONE);
            self.len += 1;
            return true;
        };

        loop {
            // SAFETY: `parent` is a live node of this tree. We hold `&mut self` so nothing else
            // references it while we follow a single path downwards.
            let node = unsafe { parent.as_mut() };
            let slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };

            match slot.0 {
                Some(child) => parent = child,
                None => {
                    *slot = Node::new_link(value, Link(Some(parent)));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Removes the value equal to `value` from the tree and returns it. If the tree has no such
    /// value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// // The root has two children, so its successor takes its place.
    /// assert_eq!(tree.erase(&2), Some(2));
    /// assert_eq!(tree.erase(&2), None);
    /// assert!(tree.iter().copied().eq([1, 3]));
    /// ```
    pub fn erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let target = self.find_node(value).0?;

        self.extract_node(target);
        self.len -= 1;

        // SAFETY: `extract_node` unlinked `target` from its parent and its children, so this
        // tree no longer references it. It was allocated in `Node::new_link`.
        let node = unsafe { Box::from_raw(target.as_ptr()) };

        // In tests, after every removal, walk the whole tree to check the splice kept it intact.
        if cfg!(test) {
            self.assert_links();
        }
        Some(node.value)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// Returns the link to the node equal to `value`. Links are copied as we descend so the
    /// pointer handed back is the one `Node::new_link` allocated, which `erase` may write
    /// through and free.
    fn find_node(&self, value: &T) -> Link<T>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(node) = current.node() {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => break,
            };
        }
        current
    }

    /// Unlinks `node` from the tree without freeing it. Afterwards nothing in the tree points at
    /// `node` and `node` points at nothing in the tree.
    fn extract_node(&mut self, node: NonNull<Node<T>>) {
        // SAFETY: `node` is a live node of this tree and we hold `&mut self`.
        match unsafe { Removal::of(node.as_ref()) } {
            Removal::Leaf => self.replace_in_parent(node, Link::NONE),
            Removal::SingleChild(child) => self.replace_in_parent(node, child),
            Removal::TwoChildren => {
                // SAFETY: As above. The right child is live because of the `TwoChildren` case.
                let right = unsafe { node.as_ref() }.right;
                let successor = self.extract_leftmost(right);

                // Extracting the successor may have replaced `node.right` (when the successor
                // was the right child itself) so the children are read after it.
                // SAFETY: `node` is still a live, unfreed node.
                let (left, right) = unsafe {
                    let node = node.as_ref();
                    (node.left, node.right)
                };

                let successor_link = Link(Some(successor));
                self.replace_in_parent(node, successor_link);

                // SAFETY: `successor` was just extracted and is distinct from both children,
                // which are live nodes of this tree (or empty).
                unsafe {
                    Node::attach_left(successor, left);
                    Node::attach_right(successor, right);
                }
            }
        }

        // SAFETY: `node` is no longer reachable from the tree so this is the only reference.
        let node = unsafe { &mut *node.as_ptr() };
        node.left = Link::NONE;
        node.right = Link::NONE;
        node.parent = Link::NONE;
    }

    /// Extracts the smallest node of the subtree rooted at `subtree` and returns it. The
    /// extracted node has no left child so this is always a leaf or single child removal.
    fn extract_leftmost(&mut self, subtree: Link<T>) -> NonNull<Node<T>> {
        let mut leftmost = subtree.0.expect("Two children => right subtree");
        // SAFETY: Every node we walk through is a live node of this tree.
        while let Some(left) = unsafe { leftmost.as_ref() }.left.0 {
            leftmost = left;
        }

        // SAFETY: As above.
        let right = unsafe { leftmost.as_ref() }.right;
        self.replace_in_parent(leftmost, right);
        leftmost
    }

    /// Puts `replacement` where `node` hangs off its parent, or makes it the root when `node`
    /// has no parent.
    fn replace_in_parent(&mut self, node: NonNull<Node<T>>, replacement: Link<T>) {
        // SAFETY: `node` is a live node of this tree. Its parent (if any) is a different live
        // node so the two references below don't alias.
        let parent = unsafe { node.as_ref() }.parent;
        match parent.0 {
            Some(mut parent) => unsafe { parent.as_mut() }.replace_child(node, replacement),
            None => self.root = replacement,
        }

        if let Some(mut replacement) = replacement.0 {
            // SAFETY: The replacement is a live node distinct from `node` and its parent.
            unsafe { replacement.as_mut() }.parent = parent;
        }
    }

    /// Walks the whole tree checking that child and parent links agree and that the values are
    /// strictly increasing in order.
    fn assert_links(&self)
    where
        T: Ord,
    {
        if let Some(root) = self.root() {
            assert!(root.parent.0.is_none(), "The root must not have a parent");
        }

        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert_eq!(child.parent.0, Some(NonNull::from(node)));
                stack.push(child);
            }
        }
        assert_eq!(count, self.len);

        let mut values = self.iter();
        if let Some(mut previous) = values.next() {
            for value in values {
                assert!(previous < value);
                previous = value;
            }
        }
    }
}

/// The structural change needed to take a node out of the tree.
enum Removal<T> {
    /// No children: the parent forgets the node.
    Leaf,
    /// Exactly one child, which moves up into the node's place.
    SingleChild(Link<T>),
    /// Both children: the in-order successor moves into the node's place.
    TwoChildren,
}

impl<T> Removal<T> {
    fn of(node: &Node<T>) -> Self {
        match (node.left.0, node.right.0) {
            (None, None) => Removal::Leaf,
            (Some(_), Some(_)) => Removal::TwoChildren,
            (Some(child), None) | (None, Some(child)) => Removal::SingleChild(Link(Some(child))),
        }
    }
}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    const NONE: Self = Link(None);

    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty link always points at a live node, and the node outlives the
        // link borrowed here. Links living inside the tree are only reached through a borrow
        // of the owning `Tree`, which nothing can mutate while the reference is alive.
        self.0.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

struct Node<T> {
    value: T,
    parent: Link<T>,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_link(value: T, parent: Link<T>) -> Link<T> {
        let node = Box::new(Node {
            value,
            parent,
            left: Link::NONE,
            right: Link::NONE,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Hangs `child` off the left of `parent`.
    ///
    /// # Safety
    ///
    /// `parent` must be the pointer from `Node::new_link`, not one derived from a reference,
    /// since it becomes the child's parent link. Both nodes must be live and distinct.
    unsafe fn attach_left(mut parent: NonNull<Self>, child: Link<T>) {
        parent.as_mut().left = child;
        Self::adopt(parent, child);
    }

    /// Hangs `child` off the right of `parent`.
    ///
    /// # Safety
    ///
    /// Same as [`Node::attach_left`].
    unsafe fn attach_right(mut parent: NonNull<Self>, child: Link<T>) {
        parent.as_mut().right = child;
        Self::adopt(parent, child);
    }

    unsafe fn adopt(parent: NonNull<Self>, child: Link<T>) {
        if let Some(mut child) = child.0 {
            child.as_mut().parent = Link(Some(parent));
        }
    }

    /// Swaps `old_child` for `new_child` without touching either child's parent link.
    fn replace_child(&mut self, old_child: NonNull<Self>, new_child: Link<T>) {
        if self.left.0 == Some(old_child) {
            self.left = new_child;
        } else if self.right.0 == Some(old_child) {
            self.right = new_child;
        } else {
            unreachable!("A node's parent must link back to it");
        }
    }
}

/// An in-order iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
    _tree: PhantomData<&'a Tree<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

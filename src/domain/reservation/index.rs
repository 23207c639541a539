use std::cmp::Ordering;

use crate::domain::reservation::record::ReservationRecord;

/// A node of the AVL tree. Heights: empty subtree = 0, leaf = 1.
#[derive(Debug)]
struct AvlNode {
    record: ReservationRecord,
    height: u32,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
}

impl AvlNode {
    fn new(record: ReservationRecord) -> Self {
        Self { record, height: 1, left: None, right: None }
    }

    fn update_height(&mut self) {
        self.height = 1 + ReservationIndex::height(&self.left).max(ReservationIndex::height(&self.right));
    }
}

/// The per-flight reservation index: a height-balanced binary search tree
/// keyed by reservation code (lexicographic order).
///
/// Class invariant: at every node, height(left) - height(right) is in
/// {-1, 0, 1}, and an in-order walk yields strictly increasing codes.
#[derive(Debug, Default)]
pub struct ReservationIndex {
    root: Option<Box<AvlNode>>,
    len: usize,
}

impl ReservationIndex {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a record by its code. A record with an equal code is already
    /// present: the existing one is kept and the call is a no-op.
    pub fn insert(&mut self, record: ReservationRecord) {
        let root = self.root.take();
        let mut inserted = false;
        self.root = Some(Self::insert_node(root, record, &mut inserted));
        if inserted {
            self.len += 1;
        }
    }

    fn insert_node(node: Option<Box<AvlNode>>, record: ReservationRecord, inserted: &mut bool) -> Box<AvlNode> {
        let Some(mut node) = node else {
            *inserted = true;
            return Box::new(AvlNode::new(record));
        };

        match record.code().cmp(node.record.code()) {
            Ordering::Less => node.left = Some(Self::insert_node(node.left.take(), record, inserted)),
            Ordering::Greater => node.right = Some(Self::insert_node(node.right.take(), record, inserted)),
            Ordering::Equal => return node,
        }

        node.update_height();
        Self::rebalance(node)
    }

    pub fn find(&self, code: &str) -> Option<&ReservationRecord> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match code.cmp(node.record.code()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Removes the record with the given code, rebalancing along the
    /// affected path. Returns the removed record, or `None` when the code
    /// is not present.
    pub fn remove(&mut self, code: &str) -> Option<ReservationRecord> {
        let root = self.root.take();
        let mut removed = None;
        self.root = Self::remove_node(root, code, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(node: Option<Box<AvlNode>>, code: &str, removed: &mut Option<ReservationRecord>) -> Option<Box<AvlNode>> {
        let mut node = node?;

        match code.cmp(node.record.code()) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), code, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), code, removed),
            Ordering::Equal => {
                if node.left.is_none() || node.right.is_none() {
                    // Leaf or single child: splice the node out directly.
                    let AvlNode { record, left, right, .. } = *node;
                    *removed = Some(record);
                    return left.or(right);
                }
                // Two children: take the in-order successor (minimum of the
                // right subtree) and delete it from its original position.
                let successor_code = Self::min_code(node.right.as_deref().expect("two-child node has a right subtree")).to_string();
                let mut successor = None;
                node.right = Self::remove_node(node.right.take(), &successor_code, &mut successor);
                let successor = successor.expect("successor exists in the right subtree");
                *removed = Some(std::mem::replace(&mut node.record, successor));
            }
        }

        node.update_height();
        Some(Self::rebalance(node))
    }

    fn min_code(node: &AvlNode) -> &str {
        let mut cursor = node;
        while let Some(left) = cursor.left.as_deref() {
            cursor = left;
        }
        cursor.record.code()
    }

    /// All stored records in ascending code order, recomputed fresh on each
    /// call.
    pub fn in_order(&self) -> Vec<&ReservationRecord> {
        let mut result = Vec::with_capacity(self.len);
        Self::collect_in_order(self.root.as_deref(), &mut result);
        result
    }

    fn collect_in_order<'a>(node: Option<&'a AvlNode>, result: &mut Vec<&'a ReservationRecord>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), result);
            result.push(&node.record);
            Self::collect_in_order(node.right.as_deref(), result);
        }
    }

    fn height(node: &Option<Box<AvlNode>>) -> u32 {
        node.as_ref().map_or(0, |n| n.height)
    }

    fn balance(node: &AvlNode) -> i32 {
        Self::height(&node.left) as i32 - Self::height(&node.right) as i32
    }

    /// Applies the corrective rotation for the four imbalance cases
    /// (LL, LR, RR, RL) and returns the new subtree root.
    fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
        let balance = Self::balance(&node);
        if balance > 1 {
            let left = node.left.take().expect("left-heavy node has a left child");
            node.left = if Self::balance(&left) < 0 {
                // Left-right case.
                Some(Self::rotate_left(left))
            } else {
                Some(left)
            };
            return Self::rotate_right(node);
        }
        if balance < -1 {
            let right = node.right.take().expect("right-heavy node has a right child");
            node.right = if Self::balance(&right) > 0 {
                // Right-left case.
                Some(Self::rotate_right(right))
            } else {
                Some(right)
            };
            return Self::rotate_left(node);
        }
        node
    }

    fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
        let mut x = y.left.take().expect("right rotation requires a left child");
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
        let mut y = x.right.take().expect("left rotation requires a right child");
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }

    #[cfg(test)]
    fn is_balanced(&self) -> bool {
        Self::checked_height(self.root.as_deref()).is_some()
    }

    /// Recomputes heights bottom-up, returning `None` on the first node that
    /// violates the AVL invariant or carries a stale height.
    #[cfg(test)]
    fn checked_height(node: Option<&AvlNode>) -> Option<u32> {
        let Some(node) = node else { return Some(0) };
        let left = Self::checked_height(node.left.as_deref())?;
        let right = Self::checked_height(node.right.as_deref())?;
        if left.abs_diff(right) > 1 {
            return None;
        }
        let height = 1 + left.max(right);
        (height == node.height).then_some(height)
    }
}

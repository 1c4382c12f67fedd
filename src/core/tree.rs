//! Unbalanced binary search tree over [`Record`]s keyed by their string key.

use std::cmp::Ordering;
use std::mem;

use crate::{
    record::Record,
    types::{EventCode, RecordKind},
};

type Link = Option<Box<Node>>;

/// Optional predicate applied during [`RecordTree::enumerate`].
pub type RecordFilter<'a> = Box<dyn Fn(&Record) -> bool + 'a>;

#[derive(Debug)]
struct Node {
    record: Record,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(record: Record) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// Ordered, key-unique index holding events and tickets in one keyspace.
///
/// Keys compare lexicographically, so `E_10` sorts before `E_2`. The tree
/// never rebalances; sorted insertion degrades it to a list.
#[derive(Debug, Default)]
pub struct RecordTree {
    root: Link,
    len: usize,
}

impl RecordTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Record stored at the root, if any.
    pub fn root(&self) -> Option<&Record> {
        self.root.as_deref().map(|node| &node.record)
    }

    /// Inserts `record` as a new leaf.
    ///
    /// Returns `false` and leaves the tree untouched when the key is already
    /// present; the first record stored under a key wins.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match record.key().cmp(node.record.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::leaf(record));
        self.len += 1;
        true
    }

    /// Looks up the record stored under `key`.
    pub fn search(&self, key: &str) -> Option<&Record> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.record.key()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.record),
            };
        }
        None
    }

    /// True when a record is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Record with the smallest key.
    pub fn min(&self) -> Option<&Record> {
        self.root.as_deref().map(|node| &find_min(node).record)
    }

    /// Removes the record stored under `key` and returns it.
    ///
    /// A node with two children takes over its in-order successor's record,
    /// and the successor is then unlinked from the right subtree.
    pub fn delete(&mut self, key: &str) -> Option<Record> {
        let removed = delete_at(&mut self.root, key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// In-order iterator over every record.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// In-order iterator over the records of `kind` accepted by `filter`.
    pub fn enumerate<'a>(
        &'a self,
        kind: RecordKind,
        filter: Option<RecordFilter<'a>>,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.iter().filter(move |rec| {
            rec.kind() == kind && filter.as_ref().is_none_or(|accept| accept(*rec))
        })
    }

    /// Keys of every ticket booked for `event_code`, in key order.
    pub fn collect_ticket_keys(&self, event_code: EventCode) -> Vec<String> {
        self.iter()
            .filter(|rec| rec.as_ticket().is_some_and(|t| t.event_code == event_code))
            .map(|rec| rec.key().to_string())
            .collect()
    }

    /// Frees every node and returns how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        mem::take(&mut self.len)
    }
}

impl Drop for RecordTree {
    fn drop(&mut self) {
        // Boxed children would otherwise drop recursively, one frame per level.
        self.clear();
    }
}

impl<'a> IntoIterator for &'a RecordTree {
    type Item = &'a Record;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending-key traversal of a [`RecordTree`].
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.record)
    }
}

fn find_min(mut node: &Node) -> &Node {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

fn delete_at(mut link: &mut Link, key: &str) -> Option<Record> {
    loop {
        let ord = key.cmp(link.as_deref()?.record.key());
        if ord == Ordering::Equal {
            return unlink(link);
        }
        let Some(node) = link else {
            return None;
        };
        link = if ord == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

fn unlink(link: &mut Link) -> Option<Record> {
    let node = link.as_deref_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor_key = node
            .right
            .as_deref()
            .map(|right| find_min(right).record.key().to_string())?;
        let successor = delete_at(&mut node.right, &successor_key)?;
        return Some(mem::replace(&mut node.record, successor));
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some(node.record)
}

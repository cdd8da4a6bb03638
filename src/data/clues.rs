//! The case file: an ordered, duplicate-free set of collected clues
//!
//! Backed by a binary search tree keyed on the clue text. Clues arrive one at
//! a time while the player explores; re-discovering a clue is a no-op. The
//! comparison is plain byte-wise `str` ordering.

/// Ordered set of clue texts
#[derive(Debug, Default, Clone)]
pub struct ClueSet {
    root: Option<Box<ClueNode>>,
}

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueSet {
    /// An empty case file
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue. Does nothing if an equal clue was already recorded.
    pub fn insert(&mut self, text: &str) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match text.cmp(node.text.as_str()) {
                std::cmp::Ordering::Less => link = &mut node.left,
                std::cmp::Ordering::Greater => link = &mut node.right,
                std::cmp::Ordering::Equal => return,
            }
        }
        *link = Some(Box::new(ClueNode {
            text: text.to_string(),
            left: None,
            right: None,
        }));
    }

    /// Visit the clues in ascending order
    pub fn iter(&self) -> ClueIter<'_> {
        let mut iter = ClueIter { stack: Vec::new() };
        iter.descend_left(self.root.as_deref());
        iter
    }

    /// Number of collected clues, counted by full traversal
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// In-order traversal over a [`ClueSet`], using an explicit descent stack
pub struct ClueIter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> ClueIter<'a> {
    fn descend_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for ClueIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.text)
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = ClueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

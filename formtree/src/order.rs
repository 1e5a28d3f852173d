//! Sibling ordering.
//!
//! A [`SortChain`] is an ordered list of criteria. Criteria later in the
//! chain take precedence; earlier ones only break ties. The explicit `sort`
//! key of an item is applied after every criterion, so two siblings that
//! both declare one are always ordered by it.

use std::cmp::Ordering;

use crate::node::{Children, Node};

/// Compare display texts: case-insensitive first, exact text on ties.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn rank(node: &Node) -> u8 {
    match (node.is_important, node.is_background) {
        (true, false) => 0,
        (false, true) => 2,
        _ => 1,
    }
}

/// A single ordering criterion between siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Alphabetical by value.
    Value,
    /// Important entries first, background entries last.
    Background,
    /// Selected entries first.
    Selected,
    /// Visible entries first.
    Visible,
}

impl Criterion {
    /// Compare two siblings under this criterion.
    pub fn compare(self, a: &Node, b: &Node) -> Ordering {
        match self {
            Self::Value => compare_text(&a.value, &b.value),
            Self::Background => rank(a).cmp(&rank(b)),
            Self::Selected => b.is_selected.cmp(&a.is_selected),
            Self::Visible => b.is_visible.cmp(&a.is_visible),
        }
    }
}

/// Ordered composition of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortChain {
    criteria: Vec<Criterion>,
    explicit: bool,
}

impl SortChain {
    /// Create an empty chain that keeps the current order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Order used when a tree is built: value, background, explicit key.
    pub fn build() -> Self {
        Self::new()
            .then(Criterion::Value)
            .then(Criterion::Background)
            .with_explicit()
    }

    /// Order used when the list is opened: selected entries float up.
    pub fn open() -> Self {
        Self::new()
            .then(Criterion::Value)
            .then(Criterion::Background)
            .then(Criterion::Selected)
            .with_explicit()
    }

    /// Order used while filtering. Selection is ignored so typed results
    /// are not reshuffled by earlier picks.
    pub fn filter() -> Self {
        Self::new()
            .then(Criterion::Value)
            .then(Criterion::Visible)
            .with_explicit()
    }

    /// Append a criterion that takes precedence over the ones before it.
    pub fn then(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Apply explicit `sort` keys after every criterion.
    pub fn with_explicit(mut self) -> Self {
        self.explicit = true;
        self
    }

    /// The criteria, lowest precedence first.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Compare two siblings under the composed criteria.
    ///
    /// Explicit sort keys are not part of this comparison; see
    /// [`SortChain::sort_level`].
    pub fn compare(&self, a: &Node, b: &Node) -> Ordering {
        self.criteria
            .iter()
            .rev()
            .fold(Ordering::Equal, |ordering, criterion| {
                ordering.then_with(|| criterion.compare(a, b))
            })
    }

    /// Order one sibling list.
    ///
    /// Siblings are stably sorted by the composed criteria. Then, if the
    /// chain applies explicit keys, the siblings that declare a `sort` key
    /// are reordered among the positions they occupy while the others stay
    /// in place.
    pub fn sort_level(&self, mut nodes: Vec<Node>) -> Vec<Node> {
        if !self.criteria.is_empty() {
            nodes.sort_by(|a, b| self.compare(a, b));
        }
        if self.explicit {
            nodes = place_explicit(nodes);
        }
        nodes
    }

    /// Order every sibling list of a tree, children first.
    pub fn sort_tree(&self, nodes: Vec<Node>) -> Vec<Node> {
        let nodes = nodes
            .into_iter()
            .map(|mut node| {
                if let Children::Branch(children) = node.children {
                    node.children = Children::Branch(self.sort_tree(children));
                }
                node
            })
            .collect();
        self.sort_level(nodes)
    }
}

fn place_explicit(nodes: Vec<Node>) -> Vec<Node> {
    let mut slots: Vec<Option<Node>> = Vec::with_capacity(nodes.len());
    let mut keyed = Vec::new();
    for node in nodes {
        if node.sort.is_some() {
            slots.push(None);
            keyed.push(node);
        } else {
            slots.push(Some(node));
        }
    }
    // Every keyed node has a sort key, so this is a total order.
    keyed.sort_by(|a, b| match (&a.sort, &b.sort) {
        (Some(a), Some(b)) => a.compare(b),
        _ => Ordering::Equal,
    });

    let mut keyed = keyed.into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| keyed.next()))
        .collect()
}

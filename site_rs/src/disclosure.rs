//! Disclosure (accordion) groups.
//!
//! A group owns an ordered list of items and tracks which of them are
//! expanded. The two modes use different representations:
//!
//! - [`ExpandMode::Single`] stores "no item or exactly one item", so two
//!   expanded items cannot be represented at all.
//! - [`ExpandMode::Multiple`] stores a set of expanded items, each toggled
//!   independently.
//!
//! Items are fixed once the group is built; only the expansion state moves.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationIssue, DisclosureError};

/// How many items of a group may be expanded at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandMode {
    /// At most one expanded item; expanding one collapses the other.
    #[default]
    Single,
    /// Any subset of items may be expanded.
    Multiple,
}

/// A `{title, content}` record as it appears in site content.
///
/// Groups built from entries assign ids `item-0`, `item-1`, ... in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureEntry {
    pub title: String,
    pub content: String,
}

impl DisclosureEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A single labeled content block owned by a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureItem {
    /// Unique within the owning group
    pub id: String,
    pub title: String,
    pub content: String,
}

impl DisclosureItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// What the presentation layer needs to draw one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub expanded: bool,
}

/// The outcome of a successful [`DisclosureGroup::toggle`].
///
/// Names the items whose `expanded` value changed, which are the only items
/// that need to be redrawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Item that went from collapsed to expanded
    pub expanded: Option<String>,
    /// Item that went from expanded to collapsed
    pub collapsed: Option<String>,
}

impl Transition {
    /// Ids of every item whose state changed, collapsed first.
    pub fn affected(&self) -> impl Iterator<Item = &str> {
        self.collapsed
            .iter()
            .chain(self.expanded.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expansion {
    /// Index of the expanded item, if any
    Single(Option<usize>),
    /// Indices of all expanded items
    Multiple(BTreeSet<usize>),
}

impl Expansion {
    fn contains(&self, idx: usize) -> bool {
        match self {
            Expansion::Single(open) => *open == Some(idx),
            Expansion::Multiple(open) => open.contains(&idx),
        }
    }
}

/// An accordion: ordered items plus their expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureGroup {
    items: Vec<DisclosureItem>,
    expansion: Expansion,
}

impl DisclosureGroup {
    /// Build a group, validating ids and the initial expansion.
    ///
    /// `expanded` lists the ids that start open. Single mode accepts at most
    /// one distinct id. Every id must name one of `items`, and item ids must
    /// be unique.
    pub fn initialize<S: AsRef<str>>(
        items: Vec<DisclosureItem>,
        mode: ExpandMode,
        expanded: &[S],
    ) -> Result<Self, DisclosureError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigurationIssue::DuplicateId(item.id.clone()).into());
            }
        }

        let mut open = BTreeSet::new();
        for id in expanded {
            let id = id.as_ref();
            let idx = position(&items, id)
                .ok_or_else(|| ConfigurationIssue::UnknownDefault(id.to_string()))?;
            open.insert(idx);
        }

        let expansion = match mode {
            ExpandMode::Single => {
                if open.len() > 1 {
                    return Err(ConfigurationIssue::TooManyDefaults(open.len()).into());
                }
                Expansion::Single(open.into_iter().next())
            }
            ExpandMode::Multiple => Expansion::Multiple(open),
        };

        Ok(Self { items, expansion })
    }

    /// Single-mode group with an optional item open at start.
    pub fn single(
        items: Vec<DisclosureItem>,
        default_expanded: Option<&str>,
    ) -> Result<Self, DisclosureError> {
        Self::initialize(items, ExpandMode::Single, default_expanded.as_slice())
    }

    /// Multiple-mode group with any set of items open at start.
    pub fn multiple<S: AsRef<str>>(
        items: Vec<DisclosureItem>,
        expanded: &[S],
    ) -> Result<Self, DisclosureError> {
        Self::initialize(items, ExpandMode::Multiple, expanded)
    }

    /// Every entry collapsed. Generated ids are unique, so this cannot fail.
    pub fn collapsed(entries: Vec<DisclosureEntry>, mode: ExpandMode) -> Self {
        let expansion = match mode {
            ExpandMode::Single => Expansion::Single(None),
            ExpandMode::Multiple => Expansion::Multiple(BTreeSet::new()),
        };
        Self {
            items: items_from_entries(entries),
            expansion,
        }
    }

    /// Build a group from content records, assigning `item-N` ids.
    pub fn from_entries(
        entries: Vec<DisclosureEntry>,
        mode: ExpandMode,
        default_expanded: Option<&str>,
    ) -> Result<Self, DisclosureError> {
        Self::initialize(
            items_from_entries(entries),
            mode,
            default_expanded.as_slice(),
        )
    }

    pub fn mode(&self) -> ExpandMode {
        match self.expansion {
            Expansion::Single(_) => ExpandMode::Single,
            Expansion::Multiple(_) => ExpandMode::Multiple,
        }
    }

    pub fn items(&self) -> &[DisclosureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `id` is currently expanded. Unknown ids are never expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        position(&self.items, id).is_some_and(|idx| self.expansion.contains(idx))
    }

    /// Ids of the expanded items, in display order.
    pub fn expanded_ids(&self) -> Vec<&str> {
        self.views()
            .filter(|view| view.expanded)
            .map(|view| view.id)
            .collect()
    }

    /// Every item with its current `expanded` flag, in display order.
    pub fn views(&self) -> impl Iterator<Item = ItemView<'_>> {
        self.items.iter().enumerate().map(|(idx, item)| ItemView {
            id: &item.id,
            title: &item.title,
            content: &item.content,
            expanded: self.expansion.contains(idx),
        })
    }

    /// Flip `id` between expanded and collapsed.
    ///
    /// In single mode, expanding an item collapses the previously expanded
    /// one within the same update. An unknown id leaves the group untouched
    /// and returns [`DisclosureError::InvalidReference`].
    pub fn toggle(&mut self, id: &str) -> Result<Transition, DisclosureError> {
        let idx = position(&self.items, id)
            .ok_or_else(|| DisclosureError::InvalidReference(id.to_string()))?;
        let items = &self.items;

        let transition = match &mut self.expansion {
            Expansion::Single(open) => match *open {
                Some(current) if current == idx => {
                    *open = None;
                    Transition {
                        expanded: None,
                        collapsed: Some(id.to_string()),
                    }
                }
                previous => {
                    *open = Some(idx);
                    Transition {
                        expanded: Some(id.to_string()),
                        collapsed: previous.map(|prev| items[prev].id.clone()),
                    }
                }
            },
            Expansion::Multiple(open) => {
                if open.remove(&idx) {
                    Transition {
                        expanded: None,
                        collapsed: Some(id.to_string()),
                    }
                } else {
                    open.insert(idx);
                    Transition {
                        expanded: Some(id.to_string()),
                        collapsed: None,
                    }
                }
            }
        };

        tracing::trace!(
            expanded = ?transition.expanded,
            collapsed = ?transition.collapsed,
            "disclosure toggled"
        );
        Ok(transition)
    }
}

/// Id assigned to the `idx`-th entry of a group built from records.
pub fn entry_id(idx: usize) -> String {
    format!("item-{idx}")
}

fn items_from_entries(entries: Vec<DisclosureEntry>) -> Vec<DisclosureItem> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| DisclosureItem {
            id: entry_id(idx),
            title: entry.title,
            content: entry.content,
        })
        .collect()
}

fn position(items: &[DisclosureItem], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

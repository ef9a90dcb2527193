// SPDX-License-Identifier: MPL-2.0
//! In-memory catalogue shown by the demo window.
//!
//! Each entry owns one row menu with "Edit" and "Delete" items. The catalogue
//! only lives for the session.

use crate::ui::menu::{Controller, MenuId, MenuItem};

/// Actions offered by a row menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// One catalogue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub author: String,
    pub menu: MenuId,
}

const SAMPLE_ENTRIES: [(&str, &str); 4] = [
    ("Pride and Prejudice", "Jane Austen"),
    ("Moby-Dick", "Herman Melville"),
    ("The Time Machine", "H. G. Wells"),
    ("Dracula", "Bram Stoker"),
];

#[derive(Debug, Default)]
pub struct Catalogue {
    entries: Vec<Entry>,
}

impl Catalogue {
    /// Builds the sample catalogue, registering one menu per row.
    pub fn sample(menus: &mut Controller<RowAction>) -> Self {
        let mut catalogue = Self::default();
        for (title, author) in SAMPLE_ENTRIES {
            catalogue.insert(menus, title, author);
        }
        catalogue
    }

    pub fn insert(
        &mut self,
        menus: &mut Controller<RowAction>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> MenuId {
        let title = title.into();
        let items = RowAction::ALL
            .iter()
            .map(|action| MenuItem::new(action.label(), *action))
            .collect();
        let menu = menus.register(title.clone(), items);
        self.entries.push(Entry {
            title,
            author: author.into(),
            menu,
        });
        menu
    }

    /// Removes the row owning `menu` and forgets its menu.
    pub fn remove(&mut self, menus: &mut Controller<RowAction>, menu: MenuId) -> Option<Entry> {
        let pos = self.entries.iter().position(|entry| entry.menu == menu)?;
        menus.unregister(menu);
        Some(self.entries.remove(pos))
    }

    #[must_use]
    pub fn find(&self, menu: MenuId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.menu == menu)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

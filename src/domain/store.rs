//! Ordered, identifier-keyed collections with snapshot semantics.
//!
//! Every mutating operation takes `&self` and returns a new collection value;
//! the input is never modified. The backing store is a persistent vector, so
//! producing a snapshot is cheap and untouched entries keep sharing structure
//! with the snapshots they came from.

use im::Vector;
use serde::{Deserialize, Serialize};

/// An entry that can live in a [`Collection`].
///
/// Identifiers are immutable after creation and unique within a collection.
/// Uniqueness is a caller obligation; the store never validates it.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Collapses a duplicate insert into the existing entry.
    ///
    /// The default keeps the existing entry, so repeated adds of the same
    /// identifier stay idempotent. Quantified entries override this to sum
    /// their quantities instead.
    fn absorb(&self, _incoming: &Self) -> Self {
        self.clone()
    }

    /// Whether the entry should stay in the collection after an update.
    ///
    /// A cart line whose quantity reaches zero answers `false` here, which
    /// turns the update into a removal.
    fn is_retained(&self) -> bool {
        true
    }
}

/// An entry that owns a nested collection of its own.
///
/// Replacing the nested collection replaces the container's reference to it;
/// the old snapshot is discarded, never mutated in place.
pub trait Container: Record {
    type Item: Record;

    fn items(&self) -> &Collection<Self::Item>;
    fn with_items(&self, items: Collection<Self::Item>) -> Self;
}

/// An ordered sequence of records keyed by identifier.
///
/// Insertion order is preserved and is the only ordering guarantee.
///
/// # Examples
///
/// ```
/// use kiosk::domain::{CartLine, Collection};
///
/// let line = CartLine {
///     product_id: "p1".to_string(),
///     name: "Coffee".to_string(),
///     price: 15.50,
///     quantity: 1,
/// };
///
/// let cart = Collection::new().add(line.clone()).add(line);
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.find("p1").unwrap().quantity, 2);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Clone + Serialize",
    deserialize = "T: Clone + Deserialize<'de>"
))]
pub struct Collection<T> {
    entries: Vector<T>,
}

impl<T: Record + std::fmt::Debug> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
        }
    }

    /// Adds an entry, merging with an existing entry of the same identifier
    /// via [`Record::absorb`] instead of duplicating it.
    pub fn add(&self, item: T) -> Self {
        match self.position(item.id()) {
            Some(index) => {
                let merged = self.entries[index].absorb(&item);
                Self {
                    entries: self.entries.update(index, merged),
                }
            }
            None => {
                let mut entries = self.entries.clone();
                entries.push_back(item);
                Self { entries }
            }
        }
    }

    /// Applies `patch` to the matching entry only.
    ///
    /// If the patched entry fails [`Record::is_retained`] it is removed
    /// instead of replaced. A missing identifier is a no-op that returns an
    /// equal snapshot of this collection.
    pub fn update<F>(&self, id: &str, patch: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let Some(index) = self.position(id) else {
            return self.clone();
        };

        let patched = patch(&self.entries[index]);
        if patched.is_retained() {
            Self {
                entries: self.entries.update(index, patched),
            }
        } else {
            let mut entries = self.entries.clone();
            entries.remove(index);
            Self { entries }
        }
    }

    /// Removes at most one entry; an absent identifier is a no-op.
    pub fn remove(&self, id: &str) -> Self {
        match self.position(id) {
            Some(index) => {
                let mut entries = self.entries.clone();
                entries.remove(index);
                Self { entries }
            }
            None => self.clone(),
        }
    }

    /// Empties the collection unconditionally.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn find_all<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.entries.iter().filter(|entry| predicate(entry)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

impl<C: Container> Collection<C> {
    /// Applies an item-level update inside one container, leaving every other
    /// container untouched.
    ///
    /// A missing container identifier is a no-op; a missing item identifier
    /// inside the located container falls through to [`Collection::update`]'s
    /// no-op semantics.
    pub fn update_item<F>(&self, container_id: &str, item_id: &str, patch: F) -> Self
    where
        F: FnOnce(&C::Item) -> C::Item,
    {
        self.update(container_id, |container| {
            container.with_items(container.items().update(item_id, patch))
        })
    }

    /// Appends an item to one container's nested collection.
    pub fn add_item(&self, container_id: &str, item: C::Item) -> Self {
        self.update(container_id, |container| {
            container.with_items(container.items().add(item))
        })
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |collection, item| collection.add(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CartLine, Project, Task};

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product_id: id.to_string(),
            name: format!("item {}", id),
            price,
            quantity,
        }
    }

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            assignee: "Unassigned".to_string(),
            due_date: "No due date".to_string(),
            completed,
        }
    }

    fn project(id: &str, title: &str, tasks: Vec<Task>) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            tasks: tasks.into_iter().collect(),
        }
    }

    #[test]
    fn test_add_then_remove_restores_content() {
        let base: Collection<CartLine> = Collection::new().add(line("p1", 10.0, 1));
        let round_trip = base.add(line("p2", 5.0, 2)).remove("p2");

        assert_eq!(round_trip, base);
    }

    #[test]
    fn test_add_merges_duplicate_identifier_by_quantity() {
        let cart = Collection::new()
            .add(line("p1", 10.0, 1))
            .add(line("p1", 10.0, 1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.find("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let cart = Collection::new()
            .add(line("p3", 1.0, 1))
            .add(line("p1", 1.0, 1))
            .add(line("p2", 1.0, 1));

        let ids: Vec<&str> = cart.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_add_duplicate_container_keeps_existing_entry() {
        let projects = Collection::new()
            .add(project("a", "first", vec![]))
            .add(project("a", "second", vec![]));

        assert_eq!(projects.len(), 1);
        assert_eq!(projects.find("a").unwrap().title, "first");
    }

    #[test]
    fn test_update_patches_only_matching_entry() {
        let cart = Collection::new()
            .add(line("p1", 10.0, 1))
            .add(line("p2", 5.0, 3));

        let updated = cart.update("p1", |entry| CartLine {
            quantity: 7,
            ..entry.clone()
        });

        assert_eq!(updated.find("p1").unwrap().quantity, 7);
        assert_eq!(updated.find("p2"), cart.find("p2"));
    }

    #[test]
    fn test_update_missing_identifier_is_noop() {
        let cart = Collection::new().add(line("p1", 10.0, 1));
        let updated = cart.update("absent", |entry| entry.clone());

        assert_eq!(updated, cart);
    }

    #[test]
    fn test_update_dropping_quantity_to_zero_removes_entry() {
        let cart = Collection::new()
            .add(line("p1", 10.0, 3))
            .add(line("p2", 5.0, 1));

        let updated = cart.update("p1", |entry| CartLine {
            quantity: 0,
            ..entry.clone()
        });

        assert!(updated.find("p1").is_none());
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_remove_absent_identifier_is_noop() {
        let cart = Collection::new().add(line("p1", 10.0, 1));
        let removed = cart.remove("absent");

        assert_eq!(removed, cart);
    }

    #[test]
    fn test_clear_empties_collection() {
        let cart = Collection::new()
            .add(line("p1", 10.0, 1))
            .add(line("p2", 5.0, 2));

        assert!(cart.clear().is_empty());
    }

    #[test]
    fn test_find_all_filters_without_mutation() {
        let cart = Collection::new()
            .add(line("p1", 10.0, 1))
            .add(line("p2", 5.0, 4))
            .add(line("p3", 2.0, 4));

        let bulk = cart.find_all(|entry| entry.quantity == 4);
        assert_eq!(bulk.len(), 2);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_update_item_targets_single_container() {
        let projects: Collection<Project> = Collection::new()
            .add(project("web", "Website Redesign", vec![task("t1", "wireframes", false)]))
            .add(project("api", "API Cleanup", vec![task("t2", "audit routes", false)]));

        let toggled = projects.update_item("web", "t1", |entry| Task {
            completed: !entry.completed,
            ..entry.clone()
        });

        assert!(toggled.find("web").unwrap().tasks.find("t1").unwrap().completed);

        // The sibling container is the same logical value as before.
        let sibling_before = projects.find("api").unwrap();
        let sibling_after = toggled.find("api").unwrap();
        assert_eq!(sibling_after, sibling_before);
    }

    #[test]
    fn test_update_item_missing_container_is_noop() {
        let projects: Collection<Project> =
            Collection::new().add(project("web", "Website Redesign", vec![]));

        let unchanged = projects.update_item("absent", "t1", |entry| entry.clone());

        assert_eq!(unchanged, projects);
    }

    #[test]
    fn test_update_item_missing_item_keeps_container_content() {
        let projects: Collection<Project> = Collection::new().add(project(
            "web",
            "Website Redesign",
            vec![task("t1", "wireframes", false)],
        ));

        let unchanged = projects.update_item("web", "absent", |entry| entry.clone());

        assert_eq!(unchanged, projects);
    }

    #[test]
    fn test_add_item_appends_to_container() {
        let projects: Collection<Project> =
            Collection::new().add(project("web", "Website Redesign", vec![]));

        let grown = projects.add_item("web", task("t1", "wireframes", false));

        assert_eq!(grown.find("web").unwrap().tasks.len(), 1);
    }
}

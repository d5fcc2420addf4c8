//! # Core Store Framework
//!
//! This module defines the generic building blocks for the in-memory stores.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that every stored resource must implement.
//! - [`ResourceStore`]: The generic, ordered, observable collection of entities.

use std::fmt::{Debug, Display};
use std::rc::Rc;
use tracing::{debug, info, warn};

use super::signal::{Signal, Subscription};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource must implement to be held by a [`ResourceStore`].
///
/// # Architecture Note
/// The store logic (append, replace-by-id, remove-by-id, lookup) is written *once*
/// against this contract and reused for every resource type. The associated `Id`
/// type keeps lookups type safe: an `OrderId` can't be used to find an ingredient.
pub trait Entity: Clone + Debug + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Display + Debug;

    /// Borrow the entity's identifier.
    fn id(&self) -> &Self::Id;
}

/// Short type name used as the `entity_type` field in log lines
/// (e.g. "Order" instead of "potion_shop::model::order::Order").
pub fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// An ordered, in-memory collection of entities.
///
/// # Concurrency Model
/// The store is single-threaded. Every write builds a new collection and swaps it
/// into the underlying [`Signal`], so observers and snapshot holders only ever see
/// whole collections. Cloning the store hands out another handle to the same data.
pub struct ResourceStore<T: Entity> {
    items: Signal<Vec<T>>,
}

impl<T: Entity> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Debug for ResourceStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("entity_type", &entity_type::<T>())
            .field("size", &self.len())
            .finish()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
        }
    }

    /// Appends `item` to the end of the collection.
    pub fn add(&self, item: T) {
        let entity_type = entity_type::<T>();
        let id = item.id().clone();
        debug!(entity_type, ?item, "Add");
        self.items
            .update(|items| items.iter().cloned().chain(std::iter::once(item)).collect());
        info!(entity_type, %id, size = self.len(), "Added");
    }

    /// Replaces the element whose id matches. Returns `false` (and changes nothing)
    /// when no element matches.
    pub fn update(&self, id: &T::Id, item: T) -> bool {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?item, "Update");
        if !self.contains(id) {
            warn!(entity_type, %id, "Not found");
            return false;
        }
        self.items.update(|items| {
            items
                .iter()
                .map(|existing| {
                    if existing.id() == id {
                        item.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect()
        });
        info!(entity_type, %id, "Updated");
        true
    }

    /// Removes the element whose id matches. Returns `false` when nothing matched.
    pub fn delete(&self, id: &T::Id) -> bool {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");
        if !self.contains(id) {
            warn!(entity_type, %id, "Not found");
            return false;
        }
        self.items
            .update(|items| items.iter().filter(|i| i.id() != id).cloned().collect());
        info!(entity_type, %id, size = self.len(), "Deleted");
        true
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.items.with(|items| items.iter().find(|i| i.id() == id).cloned());
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.with(|items| items.iter().any(|i| i.id() == id))
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only snapshot of the whole collection in insertion order.
    pub fn snapshot(&self) -> Rc<Vec<T>> {
        self.items.get()
    }

    /// Registers an observer that runs after every write.
    pub fn subscribe(&self, observer: impl Fn(&Rc<Vec<T>>) + 'static) -> Subscription {
        self.items.subscribe(observer)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.items.unsubscribe(subscription)
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================

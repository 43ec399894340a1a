use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;

/// A typed scratch space for bookkeeping that must outlive a single node
/// visit but not a single walk.
///
/// Entries are keyed by their Rust type, so each rule step declares a
/// private type for its own bookkeeping and never collides with another
/// step's entries.
#[derive(Debug, Default)]
pub struct ContextMetadata {
    entries: HashMap<TypeId, Box<dyn Any + Send>>,
}
impl ContextMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains<T: Any + Send>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn get<T: Any + Send>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<T>())
    }

    pub fn get_mut<T: Any + Send>(&mut self) -> Option<&mut T> {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_mut::<T>())
    }

    /// The entry of type `T`, inserting `T::default()` first if there is
    /// none yet.
    pub fn get_or_default<T: Any + Default + Send>(&mut self) -> &mut T {
        let entry =
            self.entries
                .entry(TypeId::of::<T>())
                .or_insert_with(|| Box::new(T::default()));
        match entry.downcast_mut::<T>() {
            Some(value) => value,
            None => unreachable!("metadata entries are keyed by their own TypeId"),
        }
    }

    /// Store `value`, returning the previous entry of the same type.
    pub fn insert<T: Any + Send>(&mut self, value: T) -> Option<T> {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|prev| prev.downcast::<T>().ok())
            .map(|prev| *prev)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remove<T: Any + Send>(&mut self) -> Option<T> {
        self.entries
            .remove(&TypeId::of::<T>())
            .and_then(|prev| prev.downcast::<T>().ok())
            .map(|prev| *prev)
    }
}

// Keyed query cache.
// Holds fetch state per cache key with staleness tracking, manual
// invalidation, and in-flight de-duplication.

use std::collections::HashMap;

use crate::api::Pet;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Cache key for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full pet collection.
    AllPets,
    /// A single pet record.
    Pet(u64),
}

/// A single cache entry: fetch state plus a stale marker.
///
/// Invalidation marks a settled entry stale; the entry reports
/// `needs_fetch` until a new fetch starts. An entry that is already
/// loading never needs another fetch, which de-duplicates concurrent
/// requests for the same key.
#[derive(Debug, Clone)]
pub struct QueryEntry<T> {
    pub state: LoadingState<T>,
    stale: bool,
}

impl<T> Default for QueryEntry<T> {
    fn default() -> Self {
        Self {
            state: LoadingState::Idle,
            stale: false,
        }
    }
}

impl<T> QueryEntry<T> {
    /// Whether a fetch should be issued for this entry.
    pub fn needs_fetch(&self) -> bool {
        match self.state {
            LoadingState::Idle => true,
            LoadingState::Loading => false,
            LoadingState::Loaded(_) | LoadingState::Error(_) => self.stale,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Mark the entry as having a fetch in flight.
    pub fn set_loading(&mut self) {
        self.state = LoadingState::Loading;
        self.stale = false;
    }

    /// Settle the entry with a fetch result.
    ///
    /// A stale marker set while the fetch was in flight survives, so the
    /// entry refetches again once this result lands.
    pub fn resolve(&mut self, result: Result<T, String>) {
        self.state = match result {
            Ok(data) => LoadingState::Loaded(data),
            Err(err) => LoadingState::Error(err),
        };
    }

    /// Mark the entry stale, forcing the next read to refetch.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }
}

/// Keyed store of query entries for the pet data.
#[derive(Debug, Default)]
pub struct QueryCache {
    all_pets: QueryEntry<Vec<Pet>>,
    pets: HashMap<u64, QueryEntry<Option<Pet>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for the full pet collection.
    pub fn all_pets(&self) -> &QueryEntry<Vec<Pet>> {
        &self.all_pets
    }

    pub fn all_pets_mut(&mut self) -> &mut QueryEntry<Vec<Pet>> {
        &mut self.all_pets
    }

    /// Entry for a single pet, if one has been requested.
    pub fn pet(&self, id: u64) -> Option<&QueryEntry<Option<Pet>>> {
        self.pets.get(&id)
    }

    /// Entry for a single pet, created on first access.
    pub fn pet_mut(&mut self, id: u64) -> &mut QueryEntry<Option<Pet>> {
        self.pets.entry(id).or_default()
    }

    /// Mark a cache key stale.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::AllPets => self.all_pets.invalidate(),
            QueryKey::Pet(id) => {
                if let Some(entry) = self.pets.get_mut(&id) {
                    entry.invalidate();
                }
            }
        }
    }
}

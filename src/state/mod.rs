// State management module.
// Handles navigation, the query cache, and UI state for the screens.

#![allow(dead_code)]

pub mod navigation;
pub mod pets;
pub mod query;

pub use navigation::{NavigationStack, ViewLevel};
pub use pets::{AddPetForm, FormField, PetFilter, PetListState};
pub use query::{LoadingState, QueryCache, QueryEntry, QueryKey};

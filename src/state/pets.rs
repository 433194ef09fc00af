// Pet list and add-form state.
// Handles list selection, adoption filtering, and the add-pet form.

use ratatui::widgets::ListState;

use crate::api::{AdoptionStatus, NewPet, Pet};

/// Adoption filter for the pet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    #[default]
    All,
    Available,
    Adopted,
}

impl PetFilter {
    /// Cycle to the next filter.
    pub fn next(self) -> Self {
        match self {
            PetFilter::All => PetFilter::Available,
            PetFilter::Available => PetFilter::Adopted,
            PetFilter::Adopted => PetFilter::All,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PetFilter::All => "All",
            PetFilter::Available => "Available",
            PetFilter::Adopted => "Adopted",
        }
    }

    /// Whether a pet passes this filter.
    pub fn matches(self, pet: &Pet) -> bool {
        match self {
            PetFilter::All => true,
            PetFilter::Available => !pet.adopted.is_adopted(),
            PetFilter::Adopted => pet.adopted.is_adopted(),
        }
    }
}

/// Selection and filter state for the pet list.
#[derive(Debug, Default)]
pub struct PetListState {
    pub list_state: ListState,
    pub filter: PetFilter,
}

impl PetListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item in a list of `len` items.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    i // Stay at end
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Cycle the adoption filter and reset the selection.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.list_state.select(None);
    }

    /// Keep the selection inside a list of `len` items, selecting the
    /// first item when nothing is selected yet.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
            None => self.list_state.select(Some(0)),
        }
    }
}

/// Input focus within the add-pet form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Species,
    Image,
    Adopted,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Species,
            FormField::Species => FormField::Image,
            FormField::Image => FormField::Adopted,
            FormField::Adopted => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Adopted,
            FormField::Species => FormField::Name,
            FormField::Image => FormField::Species,
            FormField::Adopted => FormField::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Species => "Type",
            FormField::Image => "Image",
            FormField::Adopted => "Adopted",
        }
    }
}

/// State for the add-pet modal form.
#[derive(Debug, Default)]
pub struct AddPetForm {
    pub name: String,
    pub species: String,
    pub image: String,
    pub adopted: bool,
    pub focus: FormField,
    /// Set while a create request is in flight to block double submits.
    pub submitting: bool,
}

impl AddPetForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character to the focused text field.
    pub fn input(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Species => self.species.push(c),
            FormField::Image => self.image.push(c),
            FormField::Adopted => {}
        }
    }

    /// Remove the last character from the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Species => {
                self.species.pop();
            }
            FormField::Image => {
                self.image.pop();
            }
            FormField::Adopted => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Toggle the adopted marker when it has focus.
    pub fn toggle_adopted(&mut self) {
        if self.focus == FormField::Adopted {
            self.adopted = !self.adopted;
        }
    }

    /// Name and type are the only required fields.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.species.trim().is_empty()
    }

    /// Build the creation payload.
    pub fn to_new_pet(&self) -> NewPet {
        NewPet {
            name: self.name.trim().to_string(),
            species: self.species.trim().to_string(),
            image: self.image.trim().to_string(),
            adopted: if self.adopted {
                AdoptionStatus::Yes
            } else {
                AdoptionStatus::No
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: u64, adopted: AdoptionStatus) -> Pet {
        Pet {
            id,
            name: format!("pet-{}", id),
            species: "Dog".to_string(),
            image: String::new(),
            adopted,
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut list = PetListState::new();

        list.select_next(3);
        assert_eq!(list.selected(), Some(0));
        list.select_next(3);
        list.select_next(3);
        list.select_next(3);
        assert_eq!(list.selected(), Some(2)); // Stays at end

        list.select_prev(3);
        list.select_prev(3);
        list.select_prev(3);
        assert_eq!(list.selected(), Some(0)); // Stays at start
    }

    #[test]
    fn selection_ignores_empty_list() {
        let mut list = PetListState::new();
        list.select_next(0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn clamp_selection_after_shrink() {
        let mut list = PetListState::new();
        list.list_state.select(Some(4));

        list.clamp_selection(2);
        assert_eq!(list.selected(), Some(1));

        list.clamp_selection(0);
        assert_eq!(list.selected(), None);

        list.clamp_selection(3);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn filter_cycles_and_matches() {
        assert_eq!(PetFilter::All.next(), PetFilter::Available);
        assert_eq!(PetFilter::Available.next(), PetFilter::Adopted);
        assert_eq!(PetFilter::Adopted.next(), PetFilter::All);

        let adopted = pet(1, AdoptionStatus::Yes);
        let available = pet(2, AdoptionStatus::No);

        assert!(PetFilter::All.matches(&adopted));
        assert!(PetFilter::All.matches(&available));
        assert!(PetFilter::Adopted.matches(&adopted));
        assert!(!PetFilter::Adopted.matches(&available));
        assert!(PetFilter::Available.matches(&available));
        assert!(!PetFilter::Available.matches(&adopted));
    }

    #[test]
    fn form_focus_cycles_through_all_fields() {
        let mut form = AddPetForm::new();
        assert_eq!(form.focus, FormField::Name);
        form.focus_next();
        assert_eq!(form.focus, FormField::Species);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, FormField::Adopted);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Adopted);
    }

    #[test]
    fn form_validation_requires_name_and_type() {
        let mut form = AddPetForm::new();
        assert!(!form.is_valid());

        form.name = "Rex".to_string();
        assert!(!form.is_valid());

        form.species = "  ".to_string();
        assert!(!form.is_valid());

        form.species = "Dog".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn form_builds_trimmed_payload() {
        let mut form = AddPetForm::new();
        form.name = " Rex ".to_string();
        form.species = "Dog".to_string();
        form.focus = FormField::Adopted;
        form.toggle_adopted();

        let new_pet = form.to_new_pet();
        assert_eq!(new_pet.name, "Rex");
        assert_eq!(new_pet.adopted, AdoptionStatus::Yes);
    }

    #[test]
    fn text_input_only_touches_focused_field() {
        let mut form = AddPetForm::new();
        form.input('R');
        form.input('e');
        form.input('x');
        form.focus_next();
        form.input('D');
        form.backspace();

        assert_eq!(form.name, "Rex");
        assert_eq!(form.species, "");

        // The adopted toggle ignores text input.
        form.focus = FormField::Adopted;
        form.input('x');
        form.backspace();
        assert!(!form.adopted);
    }
}

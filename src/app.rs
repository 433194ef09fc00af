// App state and main event loop.
// Manages navigation, the query cache, keyboard input, and the async
// fetch/mutation tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{NewPet, Pet, PetApiClient};
use crate::cache::{self, paths};
use crate::error::Result;
use crate::state::{
    AddPetForm, FormField, LoadingState, NavigationStack, PetListState, QueryCache, QueryKey,
    ViewLevel,
};
use crate::ui;

/// Completion events sent back from spawned fetch and mutation tasks.
#[derive(Debug)]
pub enum AppEvent {
    PetsLoaded(std::result::Result<Vec<Pet>, String>),
    PetLoaded(u64, std::result::Result<Option<Pet>, String>),
    PetCreated(std::result::Result<Pet, String>),
    PetDeleted(u64, std::result::Result<(), String>),
}

/// Severity of a status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient status-bar message reporting a mutation outcome.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

/// Main application state.
pub struct App {
    /// Shared pet API client.
    pub client: Arc<PetApiClient>,
    /// Keyed query cache for fetched data.
    pub queries: QueryCache,
    /// Navigation stack (list root, detail on top).
    pub nav: NavigationStack,
    /// Selection and filter state for the list screen.
    pub list: PetListState,
    /// Add-pet modal state, when open.
    pub add_form: Option<AddPetForm>,
    /// Latest status-bar notice.
    pub notice: Option<Notice>,
    /// Base directory for disk cache snapshots, if available.
    pub cache_root: Option<PathBuf>,
    /// Whether the app should exit.
    pub should_quit: bool,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(client: PetApiClient, cache_root: Option<PathBuf>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            queries: QueryCache::new(),
            nav: NavigationStack::default(),
            list: PetListState::new(),
            add_form: None,
            notice: None,
            cache_root,
            should_quit: false,
            events_tx,
            events_rx,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            self.ensure_data();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_input()?;
            self.drain_events();
        }
        Ok(())
    }

    /// Issue fetches for the active view's cache key when needed.
    ///
    /// A key that is already loading is never fetched again, which
    /// de-duplicates concurrent requests. A fresh (never-fetched) key is
    /// seeded from the disk cache when a valid snapshot exists.
    fn ensure_data(&mut self) {
        match self.nav.current().clone() {
            ViewLevel::Pets => {
                let entry = self.queries.all_pets();
                if entry.needs_fetch() {
                    let fresh =
                        matches!(entry.state, LoadingState::Idle) && !entry.is_stale();
                    if !(fresh && self.try_seed_pets_from_disk()) {
                        self.spawn_fetch_pets();
                    }
                }
            }
            ViewLevel::PetDetail { id, .. } => {
                let entry = self.queries.pet_mut(id);
                if entry.needs_fetch() {
                    let fresh =
                        matches!(entry.state, LoadingState::Idle) && !entry.is_stale();
                    if !(fresh && self.try_seed_pet_from_disk(id)) {
                        self.spawn_fetch_pet(id);
                    }
                }
            }
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_input(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply completion events from finished tasks.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if self.add_form.is_some() {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.nav.pop();
            }
            KeyCode::Char('r') => self.refresh_current(),
            KeyCode::Up | KeyCode::Char('k') => {
                if matches!(self.nav.current(), ViewLevel::Pets) {
                    let len = self.visible_pets().len();
                    self.list.select_prev(len);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if matches!(self.nav.current(), ViewLevel::Pets) {
                    let len = self.visible_pets().len();
                    self.list.select_next(len);
                }
            }
            KeyCode::Enter => {
                if matches!(self.nav.current(), ViewLevel::Pets) {
                    self.open_selected();
                }
            }
            KeyCode::Char('a') => {
                if matches!(self.nav.current(), ViewLevel::Pets) {
                    self.add_form = Some(AddPetForm::new());
                }
            }
            KeyCode::Char('f') => {
                if matches!(self.nav.current(), ViewLevel::Pets) {
                    self.list.cycle_filter();
                    self.sync_list_selection();
                }
            }
            KeyCode::Char('d') => self.delete_current(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.add_form = None;
                return;
            }
            KeyCode::Enter => {
                self.submit_form();
                return;
            }
            _ => {}
        }

        if let Some(form) = &mut self.add_form {
            if form.submitting {
                return;
            }
            match key.code {
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(' ') if form.focus == FormField::Adopted => form.toggle_adopted(),
                KeyCode::Char(c) => form.input(c),
                _ => {}
            }
        }
    }

    /// Pets visible under the current adoption filter, in fetch order.
    pub fn visible_pets(&self) -> Vec<&Pet> {
        self.queries
            .all_pets()
            .data()
            .map(|pets| {
                pets.iter()
                    .filter(|pet| self.list.filter.matches(pet))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The pet under the list cursor.
    pub fn selected_pet(&self) -> Option<&Pet> {
        let index = self.list.selected()?;
        self.visible_pets().get(index).copied()
    }

    /// Open the detail view for the selected pet.
    fn open_selected(&mut self) {
        let Some((id, name)) = self.selected_pet().map(|pet| (pet.id, pet.name.clone()))
        else {
            return;
        };
        self.nav.push(ViewLevel::PetDetail { id, name });
    }

    /// Delete the pet the current view points at, through the single
    /// unified delete path.
    fn delete_current(&mut self) {
        match self.nav.current().clone() {
            ViewLevel::Pets => {
                if let Some(id) = self.selected_pet().map(|pet| pet.id) {
                    self.request_delete(id);
                }
            }
            ViewLevel::PetDetail { id, .. } => {
                // Only delete once the record is actually loaded.
                let loaded = self
                    .queries
                    .pet(id)
                    .and_then(|entry| entry.data())
                    .is_some_and(|pet| pet.is_some());
                if loaded {
                    self.request_delete(id);
                }
            }
        }
    }

    /// Invalidate the cache key backing the current view, forcing a
    /// refetch. Doubles as the manual retry action.
    fn refresh_current(&mut self) {
        let key = match self.nav.current() {
            ViewLevel::Pets => QueryKey::AllPets,
            ViewLevel::PetDetail { id, .. } => QueryKey::Pet(*id),
        };
        self.invalidate(key);
    }

    /// Mark a key stale in the query cache and drop its disk snapshot.
    fn invalidate(&mut self, key: QueryKey) {
        self.queries.invalidate(key);
        if let Some(root) = &self.cache_root {
            let path = match key {
                QueryKey::AllPets => paths::pets_path(root),
                QueryKey::Pet(id) => paths::pet_path(root, id),
            };
            if let Err(err) = cache::delete(&path) {
                tracing::warn!(error = %err, "failed to drop cache entry");
            }
        }
    }

    fn set_notice(&mut self, level: NoticeLevel, text: String) {
        self.notice = Some(Notice { text, level });
    }

    fn try_seed_pets_from_disk(&mut self) -> bool {
        let Some(root) = &self.cache_root else {
            return false;
        };
        match cache::read_if_valid::<Vec<Pet>>(&paths::pets_path(root), cache::DEFAULT_TTL) {
            Ok(Some(pets)) => {
                tracing::debug!(count = pets.len(), "seeded pet list from disk cache");
                self.queries.all_pets_mut().resolve(Ok(pets));
                self.sync_list_selection();
                true
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read pets cache");
                false
            }
        }
    }

    fn try_seed_pet_from_disk(&mut self, id: u64) -> bool {
        let Some(root) = &self.cache_root else {
            return false;
        };
        match cache::read_if_valid::<Pet>(&paths::pet_path(root, id), cache::DEFAULT_TTL) {
            Ok(Some(pet)) => {
                tracing::debug!(id, "seeded pet from disk cache");
                self.queries.pet_mut(id).resolve(Ok(Some(pet)));
                true
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to read pet cache");
                false
            }
        }
    }

    fn spawn_fetch_pets(&mut self) {
        self.queries.all_pets_mut().set_loading();
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let cache_root = self.cache_root.clone();
        tokio::spawn(async move {
            let result = client.get_all_pets().await;
            if let (Ok(pets), Some(root)) = (&result, &cache_root) {
                if let Err(err) = cache::write_cached(&paths::pets_path(root), pets) {
                    tracing::warn!(error = %err, "failed to write pets cache");
                }
            }
            let _ = tx.send(AppEvent::PetsLoaded(result.map_err(|e| e.to_string())));
        });
    }

    fn spawn_fetch_pet(&mut self, id: u64) {
        self.queries.pet_mut(id).set_loading();
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let cache_root = self.cache_root.clone();
        tokio::spawn(async move {
            let result = client.get_pet(id).await;
            if let Some(root) = &cache_root {
                let path = paths::pet_path(root, id);
                let io_result = match &result {
                    Ok(Some(pet)) => cache::write_cached(&path, pet),
                    // A confirmed-absent record must not linger on disk.
                    Ok(None) => cache::delete(&path),
                    Err(_) => Ok(()),
                };
                if let Err(err) = io_result {
                    tracing::warn!(id, error = %err, "failed to update pet cache");
                }
            }
            let _ = tx.send(AppEvent::PetLoaded(id, result.map_err(|e| e.to_string())));
        });
    }

    /// Single code path for deletion, used by both the list screen and
    /// the detail screen. Success always invalidates both affected keys.
    fn request_delete(&mut self, id: u64) {
        tracing::info!(id, "deleting pet");
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.delete_pet(id).await;
            let _ = tx.send(AppEvent::PetDeleted(id, result.map_err(|e| e.to_string())));
        });
    }

    fn submit_form(&mut self) {
        let Some(form) = &mut self.add_form else {
            return;
        };
        if form.submitting {
            return;
        }
        if form.is_valid() {
            form.submitting = true;
            let new_pet = form.to_new_pet();
            self.spawn_create(new_pet);
        } else {
            self.set_notice(NoticeLevel::Error, "Name and type are required".to_string());
        }
    }

    fn spawn_create(&mut self, new_pet: NewPet) {
        tracing::info!(name = %new_pet.name, "adding pet");
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.create_pet(&new_pet).await;
            let _ = tx.send(AppEvent::PetCreated(result.map_err(|e| e.to_string())));
        });
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PetsLoaded(result) => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "pet list fetch failed");
                }
                self.queries.all_pets_mut().resolve(result);
                self.sync_list_selection();
            }
            AppEvent::PetLoaded(id, result) => {
                if let Err(err) = &result {
                    tracing::warn!(id, error = %err, "pet fetch failed");
                }
                self.queries.pet_mut(id).resolve(result);
            }
            AppEvent::PetCreated(Ok(pet)) => {
                tracing::info!(id = pet.id, "pet added");
                self.add_form = None;
                self.invalidate(QueryKey::AllPets);
                self.set_notice(NoticeLevel::Info, format!("Added {}", pet.name));
            }
            AppEvent::PetCreated(Err(err)) => {
                tracing::warn!(error = %err, "add pet failed");
                if let Some(form) = &mut self.add_form {
                    form.submitting = false;
                }
                self.set_notice(NoticeLevel::Error, format!("Add failed: {}", err));
            }
            AppEvent::PetDeleted(id, Ok(())) => {
                tracing::info!(id, "pet deleted");
                self.invalidate(QueryKey::Pet(id));
                self.invalidate(QueryKey::AllPets);
                let on_deleted_detail = matches!(
                    self.nav.current(),
                    ViewLevel::PetDetail { id: current, .. } if *current == id
                );
                if on_deleted_detail {
                    self.nav.pop();
                }
                self.set_notice(NoticeLevel::Info, format!("Deleted pet #{}", id));
            }
            AppEvent::PetDeleted(id, Err(err)) => {
                tracing::warn!(id, error = %err, "delete failed");
                self.set_notice(NoticeLevel::Error, format!("Delete failed: {}", err));
            }
        }
    }

    /// Keep the list cursor valid after data changes.
    fn sync_list_selection(&mut self) {
        let len = self.visible_pets().len();
        self.list.clamp_selection(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AdoptionStatus;
    use crate::state::PetFilter;

    fn test_app() -> App {
        let client = PetApiClient::new("http://localhost:3000").unwrap();
        App::new(client, None)
    }

    fn pet(id: u64, name: &str, adopted: AdoptionStatus) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            species: "Dog".to_string(),
            image: String::new(),
            adopted,
        }
    }

    fn load_pets(app: &mut App, pets: Vec<Pet>) {
        app.queries.all_pets_mut().set_loading();
        app.apply_event(AppEvent::PetsLoaded(Ok(pets)));
    }

    #[test]
    fn list_holds_one_entry_per_pet_in_order() {
        let mut app = test_app();
        load_pets(
            &mut app,
            vec![
                pet(5, "Rex", AdoptionStatus::No),
                pet(1, "Luna", AdoptionStatus::Yes),
                pet(9, "Milo", AdoptionStatus::No),
            ],
        );

        let visible = app.visible_pets();
        let ids: Vec<u64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 1, 9]);

        // First item is selected once data lands.
        assert_eq!(app.list.selected(), Some(0));
    }

    #[test]
    fn empty_collection_renders_no_cards() {
        let mut app = test_app();
        load_pets(&mut app, Vec::new());

        assert!(app.visible_pets().is_empty());
        assert_eq!(app.list.selected(), None);
    }

    #[test]
    fn filter_narrows_visible_pets() {
        let mut app = test_app();
        load_pets(
            &mut app,
            vec![
                pet(1, "Luna", AdoptionStatus::Yes),
                pet(2, "Rex", AdoptionStatus::No),
            ],
        );

        app.list.filter = PetFilter::Adopted;
        let visible = app.visible_pets();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);

        // Selection resolves against the filtered view.
        app.list.clamp_selection(visible.len());
        assert_eq!(app.selected_pet().unwrap().id, 1);
    }

    #[test]
    fn delete_from_detail_invalidates_both_keys_and_navigates_back() {
        let mut app = test_app();
        load_pets(&mut app, vec![pet(3, "Luna", AdoptionStatus::No)]);

        app.nav.push(ViewLevel::PetDetail {
            id: 3,
            name: "Luna".to_string(),
        });
        app.queries.pet_mut(3).set_loading();
        app.apply_event(AppEvent::PetLoaded(
            3,
            Ok(Some(pet(3, "Luna", AdoptionStatus::No))),
        ));

        app.apply_event(AppEvent::PetDeleted(3, Ok(())));

        assert!(app.queries.all_pets().is_stale());
        assert!(app.queries.pet(3).unwrap().is_stale());
        assert_eq!(app.nav.current(), &ViewLevel::Pets);
        assert!(matches!(
            app.notice.as_ref().map(|n| n.level),
            Some(NoticeLevel::Info)
        ));
    }

    #[test]
    fn delete_from_list_runs_the_same_invalidation_path() {
        let mut app = test_app();
        load_pets(&mut app, vec![pet(7, "Milo", AdoptionStatus::No)]);

        // Card-level delete: the view stays on the list, and the list
        // key still goes stale, so no stale-list bug is possible.
        app.apply_event(AppEvent::PetDeleted(7, Ok(())));

        assert!(app.queries.all_pets().is_stale());
        assert_eq!(app.nav.current(), &ViewLevel::Pets);
    }

    #[test]
    fn delete_failure_surfaces_a_notice_without_invalidating() {
        let mut app = test_app();
        load_pets(&mut app, vec![pet(7, "Milo", AdoptionStatus::No)]);

        app.apply_event(AppEvent::PetDeleted(7, Err("boom".to_string())));

        assert!(!app.queries.all_pets().is_stale());
        let notice = app.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("boom"));
    }

    #[test]
    fn missing_pet_resolves_to_not_found_and_retry_refetches() {
        let mut app = test_app();
        app.nav.push(ViewLevel::PetDetail {
            id: 9,
            name: String::new(),
        });

        app.queries.pet_mut(9).set_loading();
        app.apply_event(AppEvent::PetLoaded(9, Ok(None)));

        let entry = app.queries.pet(9).unwrap();
        assert!(matches!(entry.state, LoadingState::Loaded(None)));
        assert!(!entry.needs_fetch());

        // Manual retry re-issues the fetch.
        app.refresh_current();
        assert!(app.queries.pet(9).unwrap().needs_fetch());
    }

    #[test]
    fn successful_add_closes_modal_and_invalidates_list() {
        let mut app = test_app();
        load_pets(&mut app, vec![pet(1, "Luna", AdoptionStatus::Yes)]);

        let mut form = AddPetForm::new();
        form.name = "Rex".to_string();
        form.species = "Dog".to_string();
        form.submitting = true;
        app.add_form = Some(form);

        app.apply_event(AppEvent::PetCreated(Ok(pet(2, "Rex", AdoptionStatus::No))));

        assert!(app.add_form.is_none());
        assert!(app.queries.all_pets().is_stale());
    }

    #[test]
    fn failed_add_keeps_modal_open_for_another_attempt() {
        let mut app = test_app();

        let mut form = AddPetForm::new();
        form.name = "Rex".to_string();
        form.species = "Dog".to_string();
        form.submitting = true;
        app.add_form = Some(form);

        app.apply_event(AppEvent::PetCreated(Err("boom".to_string())));

        let form = app.add_form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn selection_clamps_when_the_list_shrinks() {
        let mut app = test_app();
        load_pets(
            &mut app,
            vec![
                pet(1, "Luna", AdoptionStatus::No),
                pet(2, "Rex", AdoptionStatus::No),
                pet(3, "Milo", AdoptionStatus::No),
            ],
        );
        app.list.list_state.select(Some(2));

        // Refetch after a delete returns fewer pets.
        app.queries.all_pets_mut().invalidate();
        app.queries.all_pets_mut().set_loading();
        app.apply_event(AppEvent::PetsLoaded(Ok(vec![pet(
            1,
            "Luna",
            AdoptionStatus::No,
        )])));

        assert_eq!(app.list.selected(), Some(0));
    }
}

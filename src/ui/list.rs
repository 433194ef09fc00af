// List screen rendering.
// Shows the pet collection as cards with loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::api::Pet;
use crate::state::{LoadingState, PetListState, QueryEntry};

use super::card;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}  (r to retry)", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Render the pet list screen.
pub fn render_pet_list(
    frame: &mut Frame,
    entry: &QueryEntry<Vec<Pet>>,
    list: &mut PetListState,
    area: Rect,
) {
    match &entry.state {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, area, "Loading pets");
        }
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(pets) => {
            if pets.is_empty() {
                render_empty(frame, area, "No pets yet!", "Start by adding a new pet");
                return;
            }

            let visible: Vec<&Pet> = pets.iter().filter(|p| list.filter.matches(p)).collect();
            if visible.is_empty() {
                render_empty(
                    frame,
                    area,
                    "No pets match this filter",
                    "Press f to change the filter",
                );
                return;
            }

            let items: Vec<ListItem> = visible.iter().map(|pet| card::list_item(pet)).collect();

            let title = format!(" Pets ({}) ", list.filter.title());
            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut list.list_state);
        }
    }
}

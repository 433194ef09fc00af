// Detail screen rendering.
// Shows one pet's fields with not-found and error states and a retry hint.

use ratatui::{prelude::*, widgets::*};

use crate::api::Pet;
use crate::state::{LoadingState, QueryEntry};

use super::card;
use super::list::{render_error, render_loading};

/// Render the pet detail screen.
pub fn render_pet_detail(
    frame: &mut Frame,
    entry: Option<&QueryEntry<Option<Pet>>>,
    area: Rect,
) {
    let Some(entry) = entry else {
        render_loading(frame, area, "Loading pet");
        return;
    };

    match &entry.state {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, area, "Loading pet");
        }
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(None) => render_not_found(frame, area),
        LoadingState::Loaded(Some(pet)) => render_pet(frame, pet, area),
    }
}

/// Render the not-found state with the manual retry hint.
fn render_not_found(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Pet not found!",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Render the pet's fields in a card-styled pane.
fn render_pet(frame: &mut Frame, pet: &Pet, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header: name + status badge
            Constraint::Min(1),    // Details section
        ])
        .split(area);

    let header_lines = vec![
        Line::from(Span::styled(
            &pet.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(card::status_span(pet.adopted)),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let mut rows = vec![
        detail_row("ID", format!("#{}", pet.id)),
        detail_row("Type", pet.species.clone()),
        detail_row(
            "Status",
            if pet.adopted.is_adopted() {
                "Adopted".to_string()
            } else {
                "Available for adoption".to_string()
            },
        ),
    ];

    if !pet.image.is_empty() {
        rows.push(detail_row("Image", pet.image.clone()));
    }

    let details = Paragraph::new(rows)
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    frame.render_widget(details, chunks[1]);
}

fn detail_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<8}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

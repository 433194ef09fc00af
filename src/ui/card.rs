// Pet card rendering.
// Pure formatting of one pet summary: id badge, name, type, and the
// adopted marker.

use ratatui::{prelude::*, widgets::*};

use crate::api::{AdoptionStatus, Pet};

/// Build the one-line card for a pet in the list.
pub fn pet_line(pet: &Pet) -> Line<'_> {
    let mut spans = vec![
        Span::styled(format!("#{}", pet.id), Style::default().fg(Color::Magenta)),
        Span::raw(" "),
        Span::styled(
            &pet.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", pet.species),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if pet.adopted.is_adopted() {
        spans.push(Span::styled("  ✓", Style::default().fg(Color::Green)));
    }

    Line::from(spans)
}

/// Build a list item card for a pet.
pub fn list_item(pet: &Pet) -> ListItem<'_> {
    ListItem::new(pet_line(pet))
}

/// Build the status badge span for an adoption marker.
pub fn status_span(adopted: AdoptionStatus) -> Span<'static> {
    if adopted.is_adopted() {
        Span::styled(
            format!(" ✓ {} ", adopted.label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} ", adopted.label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }
}

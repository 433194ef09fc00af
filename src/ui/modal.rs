// Modal UI components.
// The add-pet dialog rendered on top of the list screen.

use ratatui::{prelude::*, widgets::*};

use crate::state::{AddPetForm, FormField};

/// Draw the add-pet modal on top of the current view.
pub fn draw_add_pet_modal(frame: &mut Frame, form: &AddPetForm) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 50;
    let modal_height = 13;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Add Pet ");
    frame.render_widget(block, modal_area);

    let inner = modal_area.inner(Margin::new(2, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(2), // Type
            Constraint::Length(2), // Image
            Constraint::Length(2), // Adopted
            Constraint::Min(1),    // Instructions
        ])
        .split(inner);

    draw_text_field(frame, form, FormField::Name, &form.name, chunks[0]);
    draw_text_field(frame, form, FormField::Species, &form.species, chunks[1]);
    draw_text_field(frame, form, FormField::Image, &form.image, chunks[2]);
    draw_adopted_field(frame, form, chunks[3]);

    let instructions = if form.submitting {
        Line::from(Span::styled(
            "Adding pet...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Add  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" = Next field  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = Cancel", Style::default().fg(Color::DarkGray)),
        ])
    };

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[4]);
}

/// Draw one text input row with a focus cursor.
fn draw_text_field(
    frame: &mut Frame,
    form: &AddPetForm,
    field: FormField,
    value: &str,
    area: Rect,
) {
    let focused = form.focus == field;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(format!("{:<8}", field.label()), label_style),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the adopted toggle row.
fn draw_adopted_field(frame: &mut Frame, form: &AddPetForm, area: Rect) {
    let focused = form.focus == FormField::Adopted;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let marker = if form.adopted { "[x] Yes" } else { "[ ] No" };
    let mut spans = vec![
        Span::styled(format!("{:<8}", FormField::Adopted.label()), label_style),
        Span::raw(marker),
    ];
    if focused {
        spans.push(Span::styled(
            "  (space to toggle)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// UI module for rendering the TUI.
// Contains widgets for the title bar, breadcrumb, screens, and modal.

mod breadcrumb;
mod card;
mod detail;
mod list;
mod modal;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, NoticeLevel};
use crate::state::ViewLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0]);

    let breadcrumbs = app.nav.breadcrumbs();
    breadcrumb::draw_breadcrumb(frame, &breadcrumbs, chunks[1]);

    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Modal (rendered last, on top of everything)
    if let Some(form) = &app.add_form {
        modal::draw_add_pet_modal(frame, form);
    }
}

/// Draw the title bar.
fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" petshelf ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Draw the main content area based on the current view.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.nav.current().clone() {
        ViewLevel::Pets => {
            list::render_pet_list(frame, app.queries.all_pets(), &mut app.list, area);
        }
        ViewLevel::PetDetail { id, .. } => {
            detail::render_pet_detail(frame, app.queries.pet(id), area);
        }
    }
}

/// Draw the status bar with keybinding hints and the latest notice.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = match app.nav.current() {
        ViewLevel::Pets => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Open", Style::default().fg(Color::DarkGray)),
            Span::raw("  a "),
            Span::styled("Add", Style::default().fg(Color::DarkGray)),
            Span::raw("  d "),
            Span::styled("Delete", Style::default().fg(Color::DarkGray)),
            Span::raw("  f "),
            Span::styled("Filter", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        ViewLevel::PetDetail { .. } => vec![
            Span::raw(" d "),
            Span::styled("Delete", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
    };

    if let Some(notice) = &app.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        hints.push(Span::styled(
            format!("  {}", notice.text),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

//! Rendering for the create/edit dialog.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::DraftField;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::FormDialogState;

const DIALOG_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 24;

pub fn render_form_dialog(frame: &mut Frame, state: &FormDialogState) {
    let FormDialogState::Visible {
        kind,
        draft,
        focused,
        errors,
    } = state
    else {
        return;
    };

    let mut lines = vec![Line::from("")];
    for (idx, field) in DraftField::ALL.iter().enumerate() {
        let is_focused = idx == *focused;
        let marker = if is_focused { "›" } else { " " };
        let value = draft.field(*field);
        let cursor = if is_focused { "▏" } else { "" };

        let mut line = Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(ACCENT)),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled(cursor, Style::default().fg(ACCENT)),
        ]);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);

        if let Some(message) = errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("   {:<width$}{message}", "", width = LABEL_WIDTH),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" Enter: {} ", kind.submit_label()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Tab/↑↓: Move  Esc: Cancel", Style::default().fg(MUTED_TEXT)),
    ]));

    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

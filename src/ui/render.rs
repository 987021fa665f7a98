use crate::model::User;
use crate::routing::{lookup, DetailView, Route};
use crate::store::StoreState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::{spinner_frame, Header};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.store_state();

    frame.render_widget(Header::new().widget(&state, app.animation_tick()), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::List => draw_list(frame, body, app, &state),
        Route::Detail(raw_id) => draw_detail(frame, body, app, &state, raw_id),
    }

    frame.render_widget(
        Footer::new().widget(footer, app.route(), app.form_is_open()),
        footer,
    );

    render_form_dialog(frame, app.form());
}

fn body_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, tick: u8) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner_frame(tick)), Style::default().fg(ACCENT)),
            Span::styled("Loading users...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(body_block("Users")), area);
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, app: &App, state: &StoreState) {
    if state.is_loading {
        draw_loading(frame, area, app.animation_tick());
        return;
    }

    let mut block = body_block("Users");
    if let Some(message) = error_line(state, app) {
        block = block.title_bottom(message);
    }

    if state.users.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No users found",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let header = Row::new(["Name", "Username", "Email", "Phone", "City", "Website"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let rows = state.users.iter().map(user_row);
    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(13),
        Constraint::Percentage(22),
        Constraint::Percentage(17),
        Constraint::Percentage(13),
        Constraint::Percentage(15),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");

    let mut table_state = TableState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn user_row(user: &User) -> Row<'static> {
    Row::new(vec![
        Cell::from(user.name.clone()),
        Cell::from(user.username.clone()),
        Cell::from(user.email.clone()),
        Cell::from(user.phone.clone()),
        Cell::from(user.address.city.clone()),
        Cell::from(user.website.clone()),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, app: &App, state: &StoreState, raw_id: &str) {
    match lookup(&state.users, raw_id, state.is_loading) {
        DetailView::Loading => draw_loading(frame, area, app.animation_tick()),
        DetailView::NotFound => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  User not found",
                    Style::default().fg(STATUS_ERROR),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).block(body_block("User")), area);
        }
        DetailView::Found(user) => {
            let title = format!("{}'s Details", user.name);
            frame.render_widget(
                Paragraph::new(detail_lines(user)).block(body_block(&title)),
                area,
            );
        }
    }
}

/// One labelled line per field; empty values read "N/A".
pub fn detail_lines(user: &User) -> Vec<Line<'static>> {
    let fields = [
        ("Username", &user.username),
        ("Email", &user.email),
        ("Phone", &user.phone),
        ("City", &user.address.city),
        ("Street", &user.address.street),
        ("Suite", &user.address.suite),
        ("Zip Code", &user.address.zipcode),
        ("Website", &user.website),
        ("Company", &user.company.name),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(fields.into_iter().map(|(label, value)| {
        let value = if value.is_empty() {
            "N/A".to_string()
        } else {
            value.clone()
        };
        Line::from(vec![
            Span::styled(
                format!("  {:<10}", format!("{label}:")),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ])
    }));
    lines
}

fn error_line(state: &StoreState, app: &App) -> Option<Line<'static>> {
    let message = if state.has_error() {
        state.error.clone()
    } else {
        app.last_command_error()?.to_string()
    };
    Some(Line::from(Span::styled(
        format!(" {message} "),
        Style::default().fg(STATUS_ERROR),
    )))
}

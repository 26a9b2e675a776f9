// File: src/tui/view.rs
use crate::color_utils::Rgb;
use crate::form::FormField;
use crate::grid::{self, WEEKDAY_LABELS};
use crate::tui::state::AppState;
use chrono::{Datelike, NaiveDate};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" h/l:Day  j/k:Week  [/]:Month  {/}:Year  t:Today"),
        ]),
        Line::from(vec![
            Span::styled(
                " SELECTION ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Enter:Select Day  Esc/x:Close Day  a:Add Event"),
        ]),
        Line::from(vec![
            Span::styled(
                " FORM ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab/S-Tab:Field  Enter:Save  Ctrl-L:Clear  Esc:Close"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), footer_height])
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(v_chunks[1]);

    draw_header(f, state, v_chunks[0]);
    draw_grid(f, state, h_chunks[0]);
    draw_side_panel(f, state, h_chunks[1]);
    draw_footer(f, state, v_chunks[2], full_help_text);

    if let Some(alert) = &state.alert {
        let area = centered_rect(60, 25, f.area());
        let popup = Paragraph::new(vec![
            Line::from(Span::styled(
                alert.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let nav = Line::from(vec![
        Span::styled("«  ‹   ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.app.month_title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ›  »", Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(nav).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Calendar ")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(header, area);
}

fn draw_grid(f: &mut Frame, state: &AppState, area: Rect) {
    let cells = state.app.grid();
    let rows = grid::weeks(&cells);

    let mut row_constraints = vec![Constraint::Length(1)];
    row_constraints.extend(rows.iter().map(|_| Constraint::Ratio(1, rows.len() as u32)));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let col_constraints = [Constraint::Ratio(1, 7); 7];

    let label_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(col_constraints)
        .split(row_areas[0]);
    for (label, col) in WEEKDAY_LABELS.iter().zip(label_cols.iter()) {
        let p = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(p, *col);
    }

    for (row, row_area) in rows.iter().zip(row_areas.iter().skip(1)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for (cell, col) in row.iter().zip(cols.iter()) {
            if let Some(date) = cell {
                draw_day(f, state, *date, *col);
            }
        }
    }
}

fn draw_day(f: &mut Frame, state: &AppState, date: NaiveDate, area: Rect) {
    let is_today = date == state.app.today();
    let is_selected = Some(date) == state.app.selected();
    let is_cursor = date == state.app.current();

    let border_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if is_today {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut number_style = Style::default();
    if is_today {
        number_style = number_style.fg(Color::White).bg(Color::Blue);
    } else if is_selected {
        number_style = number_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        number_style = number_style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("{:>2}", date.day()),
        number_style,
    ))];

    let (shown, hidden) = state.app.cell_preview(date);
    for ev in shown {
        let style = match state.app.color_of(ev) {
            Some(c) => Style::default().fg(to_color(c)),
            None => Style::default(),
        };
        lines.push(Line::from(vec![
            Span::styled("▎", style),
            Span::styled(ev.title.clone(), style),
        ]));
    }
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("+{} more", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(p, area);
}

fn draw_side_panel(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Events ");

    let Some(selected) = state.app.selected() else {
        let hint = Paragraph::new("Select a day (Enter) to see its events.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            selected.format("%A, %B %-d").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            selected.format("%Y").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let mut cursor: Option<(u16, u16)> = None;

    if state.app.form_visible() {
        let form = &state.app.form;
        lines.push(Line::from(Span::styled(
            " New Event ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        for field in FormField::ALL {
            let label = format!("{:<13}", format!("{}:", field.label()));
            let focused = form.focus == field;
            let value_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            if focused {
                cursor = Some((
                    (label.chars().count() + form.field(field).chars().count()) as u16,
                    lines.len() as u16,
                ));
            }
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(Color::Gray)),
                Span::styled(form.field(field).to_string(), value_style),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "Enter:Save  Ctrl-L:Clear  Esc:Close",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(Span::styled(
            "[a] Add Event",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    let events = state.app.events_on(Some(selected));
    if events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events scheduled",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for ev in events {
        let accent = match state.app.color_of(ev) {
            Some(c) => Style::default().fg(to_color(c)),
            None => Style::default(),
        };
        lines.push(Line::from(vec![
            Span::styled("┃ ", accent),
            Span::styled(ev.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("┃ ", accent),
            Span::styled(ev.time_range_display(), Style::default().fg(Color::Gray)),
        ]));
        if let Some(desc) = &ev.description {
            lines.push(Line::from(vec![
                Span::styled("┃ ", accent),
                Span::styled(desc.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);

    if state.alert.is_none()
        && let Some((x, y)) = cursor
    {
        let screen_x = area.x + 1 + x;
        let screen_y = area.y + 1 + y;
        if screen_x < area.x + area.width.saturating_sub(1)
            && screen_y < area.y + area.height.saturating_sub(1)
        {
            f.set_cursor_position((screen_x, screen_y));
        }
    }
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect, full_help_text: Vec<Line<'_>>) {
    f.render_widget(Clear, area);

    if state.show_full_help {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard Shortcuts (Press ? to minimize) ")
            .border_style(Style::default().fg(Color::Cyan));
        let p = Paragraph::new(full_help_text)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(p, chunks[0]);
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title(" Status "));
        f.render_widget(status, chunks[1]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_str = if state.editing() {
        "Tab:Next Field Enter:Save Ctrl-L:Clear Esc:Close"
    } else if state.app.selected().is_some() {
        "a:Add Event Esc:Close Day [/]:Month {/}:Year ?:Help"
    } else {
        "hjkl:Move Enter:Select [/]:Month {/}:Year t:Today ?:Help"
    };
    let help = Paragraph::new(help_str)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

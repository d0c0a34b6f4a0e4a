//! Demo screen: header, activity log, key help, and the dialog on top

use crate::app::App;
use modalis::config::colors;
use modalis::ui::{helpers::truncate, render_dialog};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: [(&str, &str); 9] = [
    ("a", "alert"),
    ("c", "confirm"),
    ("d", "destructive confirm"),
    ("b", "custom buttons"),
    ("g", "icon/size gallery"),
    ("o", "overwrite pending dialog"),
    ("x", "auto-hide after 3s"),
    ("f", "failing hook"),
    ("q", "quit"),
];

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_header(f, header, app);

    if app.show_help {
        let [log, help] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(34)]).areas(body);
        render_log(f, log, app);
        render_help(f, help);
    } else {
        render_log(f, body, app);
    }

    render_footer(f, footer);

    let state = app.dialog_state();
    render_dialog(f, f.area(), &state, &app.view, &app.config.dialog);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = app.dialog_state();
    let status = if state.is_open {
        Span::styled(
            format!(
                "dialog open: {}",
                state.current.title.as_deref().unwrap_or("(untitled)")
            ),
            Style::default().fg(colors::WARNING),
        )
    } else {
        Span::styled("no dialog", Style::default().fg(colors::MUTED))
    };
    let line = Line::from(vec![
        Span::styled(
            " modalis ",
            Style::default()
                .fg(colors::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("up {}s  ", app.started.elapsed().as_secs()),
            Style::default().fg(colors::MUTED),
        ),
        status,
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    f.render_widget(widget, area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let width = usize::from(area.width.saturating_sub(12));
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = app
        .log
        .iter()
        .rev()
        .take(visible)
        .map(|line| {
            let color = if line.is_error {
                colors::ERROR
            } else {
                colors::FG
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>5}s ", line.at.elapsed().as_secs()),
                    Style::default().fg(colors::MUTED),
                ),
                Span::styled(truncate(&line.message, width), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Activity (newest first) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .style(Style::default().bg(colors::BG)),
    );
    f.render_widget(list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = SHORTCUTS
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key} "),
                    Style::default()
                        .fg(colors::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*label, Style::default().fg(colors::FG)),
            ])
        })
        .collect();
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Try it ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .style(Style::default().bg(colors::BG_LIGHT)),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let widget = Paragraph::new(" [?] help  [C] clear log  [q] quit ")
        .style(Style::default().fg(colors::MUTED))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}

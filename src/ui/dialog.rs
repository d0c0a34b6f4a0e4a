//! Dialog frame: layout, footer model, and painting

use super::helpers::{centered_rect, truncate, wrapped_rows};
use crate::config::{colors, DialogConfig};
use crate::dialog::{ButtonVariant, ControllerState, DialogIcon, DialogKind, DialogRequest};
use crate::presentation::{icon_presentation, resolve_frame};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const BUTTON_GAP: u16 = 2;
const MIN_HEIGHT: u16 = 6;
const KEY_HINTS: &str = "[Tab] Next  [Enter] Select  [Esc] Close";

/// What activating a footer affordance does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceAction {
    Cancel,
    Confirm,
    /// Custom button at this index of the request's button set
    Button(usize),
}

/// One footer button as the user sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub variant: ButtonVariant,
    pub action: AffordanceAction,
}

/// Ordered footer model: optional Cancel, then custom buttons or Confirm
pub fn footer_affordances(request: &DialogRequest) -> Vec<Affordance> {
    let mut affordances = Vec::new();

    if request.kind == DialogKind::Confirm {
        affordances.push(Affordance {
            label: request.cancel_text.clone().unwrap_or_else(|| "Cancel".to_string()),
            variant: ButtonVariant::Outline,
            action: AffordanceAction::Cancel,
        });
    }

    if let Some(buttons) = request.custom_buttons() {
        affordances.extend(buttons.iter().enumerate().map(|(index, button)| Affordance {
            label: button.label.clone(),
            variant: button.variant,
            action: AffordanceAction::Button(index),
        }));
    } else {
        let variant = match request.confirm_variant {
            Some(ButtonVariant::Destructive) => ButtonVariant::Destructive,
            _ => ButtonVariant::Default,
        };
        affordances.push(Affordance {
            label: request.confirm_text.clone().unwrap_or_else(|| "OK".to_string()),
            variant,
            action: AffordanceAction::Confirm,
        });
    }

    affordances
}

/// Screen geometry of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub frame: Rect,
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub hints: Rect,
    /// One rect per affordance, in footer order
    pub buttons: Vec<Rect>,
}

fn button_text(label: &str, max_width: u16) -> String {
    // "[ " + label + " ]"
    let room = usize::from(max_width.saturating_sub(4)).max(1);
    format!("[ {} ]", truncate(label, room))
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}

/// Description followed by the optional custom body
fn body_text(request: &DialogRequest) -> Text<'static> {
    let mut text = Text::default();
    if let Some(description) = &request.description {
        let muted = Style::default().fg(colors::MUTED);
        text.extend(
            description
                .to_text()
                .lines
                .into_iter()
                .map(|line| line.patch_style(muted)),
        );
    }
    if let Some(content) = &request.content {
        if !text.lines.is_empty() {
            text.push_line(Line::default());
        }
        text.extend(content.to_text());
    }
    text
}

/// Group footer labels into rows that fit `width`, keeping their order
///
/// Each label is already truncated to `width`, so a row always takes at
/// least one label.
fn footer_rows(labels: &[String], width: u16) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0u16;
    for (index, label) in labels.iter().enumerate() {
        let w = text_width(label);
        match rows.last_mut() {
            Some(row) if used.saturating_add(BUTTON_GAP).saturating_add(w) <= width => {
                row.push(index);
                used = used.saturating_add(BUTTON_GAP).saturating_add(w);
            }
            _ => {
                rows.push(vec![index]);
                used = w;
            }
        }
    }
    rows
}

/// Compute where the dialog and its affordances land inside `area`
pub fn dialog_layout(area: Rect, request: &DialogRequest, config: &DialogConfig) -> DialogLayout {
    let frame_style = resolve_frame(request.size, request.style);
    let width = frame_style.width_in(area.width, config.default_width);
    // Borders plus one column of padding on each side
    let inner_width = width.saturating_sub(4);

    let labels: Vec<String> = footer_affordances(request)
        .iter()
        .map(|a| button_text(&a.label, inner_width))
        .collect();
    let rows = footer_rows(&labels, inner_width);
    let footer_height = u16::try_from(rows.len()).unwrap_or(u16::MAX).max(1);

    let body_rows: u16 = body_text(request)
        .lines
        .iter()
        .map(|line| wrapped_rows(line.width(), inner_width))
        .fold(0u16, u16::saturating_add);
    let hint_rows = u16::from(config.show_key_hints);
    // border + header + gap + body + gap + footer + hints + border
    let wanted = body_rows
        .saturating_add(5)
        .saturating_add(footer_height)
        .saturating_add(hint_rows);
    let max_height = u16::try_from(
        u32::from(area.height) * u32::from(config.max_height_percent) / 100,
    )
    .unwrap_or(u16::MAX);
    let min_height = MIN_HEIGHT.saturating_add(footer_height - 1);
    let height = wanted.min(max_height.max(min_height)).min(area.height);

    let frame = centered_rect(width, height, area);
    let inner = frame_block(request).inner(frame);
    let [header, _, body, footer, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(footer_height),
        Constraint::Length(hint_rows),
    ])
    .areas(inner);

    // Rows are right-aligned; rows past the footer's height get no space
    let mut buttons = vec![Rect::new(footer.right(), footer.y, 0, 0); labels.len()];
    for (row_index, row) in rows.iter().enumerate() {
        let y = footer.y.saturating_add(u16::try_from(row_index).unwrap_or(u16::MAX));
        if y >= footer.bottom() {
            break;
        }
        let total = row
            .iter()
            .map(|&i| text_width(&labels[i]))
            .fold(0u16, u16::saturating_add)
            .saturating_add(BUTTON_GAP.saturating_mul(row.len().saturating_sub(1) as u16));
        let mut x = footer.right().saturating_sub(total).max(footer.x);
        for &i in row {
            let w = text_width(&labels[i]).min(footer.right().saturating_sub(x));
            buttons[i] = Rect::new(x, y, w, 1);
            x = x.saturating_add(w).saturating_add(BUTTON_GAP);
        }
    }

    DialogLayout {
        frame,
        header,
        body,
        footer,
        hints,
        buttons,
    }
}

fn frame_block(request: &DialogRequest) -> Block<'static> {
    let frame_style = resolve_frame(request.size, request.style);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::HIGHLIGHT))
        .padding(Padding::horizontal(1))
        .style(frame_style.style)
}

fn header_line(request: &DialogRequest) -> Line<'static> {
    let mut spans = Vec::new();
    match &request.icon {
        Some(DialogIcon::Kind(kind)) => {
            let icon = icon_presentation(*kind);
            let color = request.icon_color.unwrap_or(icon.color);
            spans.push(Span::styled(icon.glyph, Style::default().fg(color)));
            spans.push(Span::raw(" "));
        }
        Some(DialogIcon::Custom(line)) => {
            spans.extend(line.spans.iter().cloned());
            spans.push(Span::raw(" "));
        }
        None => {}
    }
    if let Some(title) = &request.title {
        spans.push(Span::styled(
            title.clone(),
            Style::default()
                .fg(colors::FG)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn variant_style(variant: ButtonVariant) -> Style {
    match variant {
        ButtonVariant::Default => Style::default().fg(colors::BG).bg(colors::INFO),
        ButtonVariant::Destructive => Style::default().fg(colors::BG).bg(colors::ERROR),
        ButtonVariant::Outline | ButtonVariant::Secondary => {
            Style::default().fg(colors::FG).bg(colors::BG_LIGHT)
        }
        ButtonVariant::Ghost => Style::default().fg(colors::MUTED),
        ButtonVariant::Link => Style::default()
            .fg(colors::INFO)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Focus position among the footer affordances
///
/// Purely visual; outcomes are decided by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogView {
    focus: usize,
}

impl DialogView {
    /// Focus the last affordance, the primary action
    pub fn for_affordances(count: usize) -> Self {
        Self {
            focus: count.saturating_sub(1),
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    pub fn focused<'a>(&self, affordances: &'a [Affordance]) -> Option<&'a Affordance> {
        affordances.get(self.focus)
    }
}

/// Paint the current dialog over `area`; nothing when closed
pub fn render_dialog(
    f: &mut Frame,
    area: Rect,
    state: &ControllerState,
    view: &DialogView,
    config: &DialogConfig,
) {
    if !state.is_open {
        return;
    }
    let request = &state.current;
    let layout = dialog_layout(area, request, config);
    let affordances = footer_affordances(request);

    f.render_widget(Clear, layout.frame);
    f.render_widget(frame_block(request), layout.frame);
    f.render_widget(Paragraph::new(header_line(request)), layout.header);
    f.render_widget(
        Paragraph::new(body_text(request)).wrap(Wrap { trim: false }),
        layout.body,
    );

    let inner_width = layout.footer.width;
    for (index, (affordance, rect)) in affordances.iter().zip(&layout.buttons).enumerate() {
        let mut style = variant_style(affordance.variant);
        if index == view.focus() {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        f.render_widget(
            Paragraph::new(Span::styled(button_text(&affordance.label, inner_width), style)),
            *rect,
        );
    }

    if layout.hints.height > 0 {
        f.render_widget(
            Paragraph::new(KEY_HINTS)
                .style(Style::default().fg(colors::MUTED))
                .alignment(Alignment::Center),
            layout.hints,
        );
    }
}

//! Presentation lookups for dialog icons and frame sizes
//!
//! Both tables are total over their enumerated domain and carry an explicit
//! default arm: unknown icon names fall back to the info presentation and
//! unknown sizes leave the frame at its configured default width.

use crate::config::colors;
use ratatui::style::{Color, Style};
use std::str::FromStr;

/// Semantic icon kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Question,
}

impl IconKind {
    /// Parse an icon name, falling back to `Info` for anything unrecognized
    ///
    /// Names match exactly; `"Warning"` is not `"warning"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "question" => Self::Question,
            "info" => Self::Info,
            other => {
                tracing::debug!(icon = other, "Unknown icon kind, using info");
                Self::Info
            }
        }
    }
}

/// Glyph and color for a named icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPresentation {
    pub glyph: &'static str,
    pub color: Color,
}

/// Resolve the glyph and default color for an icon kind
pub fn icon_presentation(kind: IconKind) -> IconPresentation {
    let (glyph, color) = match kind {
        IconKind::Success => ("✔", colors::SUCCESS),
        IconKind::Error => ("✖", colors::ERROR),
        IconKind::Warning => ("⚠", colors::WARNING),
        IconKind::Question => ("?", colors::INFO),
        IconKind::Info => ("ℹ", colors::INFO),
    };
    IconPresentation { glyph, color }
}

/// Semantic dialog size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl4,
    Full,
}

impl FromStr for SizeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "2xl" => Ok(Self::Xl2),
            "4xl" => Ok(Self::Xl4),
            "full" => Ok(Self::Full),
            _ => Err(()),
        }
    }
}

/// Horizontal constraint applied to the dialog frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthConstraint {
    /// At most this many columns (clamped to the available area)
    Columns(u16),
    /// Use the whole available width
    Full,
}

/// Resolve the width override for a size kind
///
/// `None` means "no override": the frame keeps its configured default.
pub fn size_width(size: Option<SizeKind>) -> Option<WidthConstraint> {
    match size {
        Some(SizeKind::Sm) => Some(WidthConstraint::Columns(40)),
        Some(SizeKind::Md) => Some(WidthConstraint::Columns(50)),
        Some(SizeKind::Lg) => Some(WidthConstraint::Columns(60)),
        Some(SizeKind::Xl) => Some(WidthConstraint::Columns(70)),
        Some(SizeKind::Xl2) => Some(WidthConstraint::Columns(84)),
        Some(SizeKind::Xl4) => Some(WidthConstraint::Columns(112)),
        Some(SizeKind::Full) => Some(WidthConstraint::Full),
        None => None,
    }
}

/// Combined frame presentation: size override plus caller style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStyle {
    pub width: Option<WidthConstraint>,
    pub style: Style,
}

impl FrameStyle {
    /// Effective frame width inside an area of `available` columns
    pub fn width_in(&self, available: u16, default_width: u16) -> u16 {
        match self.width {
            Some(WidthConstraint::Columns(cols)) => cols.min(available),
            Some(WidthConstraint::Full) => available,
            None => default_width.min(available),
        }
    }
}

/// Resolve the frame for a request's size and extra style
pub fn resolve_frame(size: Option<SizeKind>, extra: Option<Style>) -> FrameStyle {
    let base = Style::default().fg(colors::FG).bg(colors::BG);
    FrameStyle {
        width: size_width(size),
        style: extra.map_or(base, |extra| base.patch(extra)),
    }
}

//! Dialog request configuration
//!
//! A [`DialogRequest`] describes one presentation cycle. It is captured by
//! the controller on `show` and never mutated afterwards.

use crate::errors::HookError;
use crate::presentation::{IconKind, SizeKind};
use futures_util::future::BoxFuture;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Async callback run before a dialog settles
pub type Hook = Arc<dyn Fn() -> BoxFuture<'static, Result<(), HookError>> + Send + Sync>;

/// Wrap an async closure as a [`Hook`]
pub fn hook<F, Fut>(f: F) -> Hook
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookError>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()))
}

/// Dialog flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    /// Single confirm affordance
    Alert,
    /// Confirm and cancel affordances
    #[default]
    Confirm,
    /// Caller-driven; usually paired with a button set
    Custom,
}

/// Visual variant of a footer button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

/// Plain or rich text shown in a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Plain(String),
    Rich(Text<'static>),
}

impl Content {
    /// Render as ratatui text
    pub fn to_text(&self) -> Text<'static> {
        match self {
            Self::Plain(s) => Text::raw(s.clone()),
            Self::Rich(text) => text.clone(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

impl From<Text<'static>> for Content {
    fn from(text: Text<'static>) -> Self {
        Self::Rich(text)
    }
}

impl From<Line<'static>> for Content {
    fn from(line: Line<'static>) -> Self {
        Self::Rich(Text::from(line))
    }
}

/// Header icon: a named kind or arbitrary caller content
#[derive(Debug, Clone, PartialEq)]
pub enum DialogIcon {
    Kind(IconKind),
    Custom(Line<'static>),
}

impl From<IconKind> for DialogIcon {
    fn from(kind: IconKind) -> Self {
        Self::Kind(kind)
    }
}

/// Names go through the icon table; unknown names render as info
impl From<&str> for DialogIcon {
    fn from(name: &str) -> Self {
        Self::Kind(IconKind::from_name(name))
    }
}

impl From<Line<'static>> for DialogIcon {
    fn from(line: Line<'static>) -> Self {
        Self::Custom(line)
    }
}

/// Custom footer button
#[derive(Clone)]
pub struct DialogButton {
    pub label: String,
    pub variant: ButtonVariant,
    pub on_click: Option<Hook>,
}

impl DialogButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Default,
            on_click: None,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn on_click(mut self, action: Hook) -> Self {
        self.on_click = Some(action);
        self
    }
}

impl fmt::Debug for DialogButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogButton")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Configuration for one dialog presentation
#[derive(Clone, Default)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub title: Option<String>,
    pub description: Option<Content>,
    /// Extra body rendered under the description
    pub content: Option<Content>,
    /// Replaces the default confirm affordance when non-empty
    pub buttons: Option<Vec<DialogButton>>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub confirm_variant: Option<ButtonVariant>,
    pub icon: Option<DialogIcon>,
    /// Overrides the table color of a named icon
    pub icon_color: Option<Color>,
    pub size: Option<SizeKind>,
    /// Patched over the frame's base style
    pub style: Option<Style>,
    pub on_confirm: Option<Hook>,
    pub on_cancel: Option<Hook>,
}

impl DialogRequest {
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<Content>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn button(mut self, button: DialogButton) -> Self {
        self.buttons.get_or_insert_with(Vec::new).push(button);
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn confirm_variant(mut self, variant: ButtonVariant) -> Self {
        self.confirm_variant = Some(variant);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<DialogIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    #[must_use]
    pub fn size(mut self, size: SizeKind) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the size by name; unknown names leave the default width
    #[must_use]
    pub fn size_name(mut self, name: &str) -> Self {
        self.size = name.parse().ok();
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, action: Hook) -> Self {
        self.on_confirm = Some(action);
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, action: Hook) -> Self {
        self.on_cancel = Some(action);
        self
    }

    /// Custom buttons, if any were supplied
    pub fn custom_buttons(&self) -> Option<&[DialogButton]> {
        self.buttons.as_deref().filter(|buttons| !buttons.is_empty())
    }

    /// Apply caller overrides; fields the caller set win
    pub(crate) fn merge(mut self, overrides: DialogOverrides) -> Self {
        let DialogOverrides {
            kind,
            title,
            description,
            content,
            buttons,
            confirm_text,
            cancel_text,
            confirm_variant,
            icon,
            icon_color,
            size,
            style,
            on_confirm,
            on_cancel,
        } = overrides;

        if let Some(kind) = kind {
            self.kind = kind;
        }
        self.title = title.or(self.title);
        self.description = description.or(self.description);
        self.content = content.or(self.content);
        self.buttons = buttons.or(self.buttons);
        self.confirm_text = confirm_text.or(self.confirm_text);
        self.cancel_text = cancel_text.or(self.cancel_text);
        self.confirm_variant = confirm_variant.or(self.confirm_variant);
        self.icon = icon.or(self.icon);
        self.icon_color = icon_color.or(self.icon_color);
        self.size = size.or(self.size);
        self.style = style.or(self.style);
        self.on_confirm = on_confirm.or(self.on_confirm);
        self.on_cancel = on_cancel.or(self.on_cancel);
        self
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("buttons", &self.buttons)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("icon", &self.icon)
            .field("size", &self.size)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish_non_exhaustive()
    }
}

/// Partial request merged over the `alert`/`confirm` defaults
///
/// ```ignore
/// let overrides = DialogOverrides {
///     confirm_text: Some("Delete".into()),
///     confirm_variant: Some(ButtonVariant::Destructive),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default)]
pub struct DialogOverrides {
    pub kind: Option<DialogKind>,
    pub title: Option<String>,
    pub description: Option<Content>,
    pub content: Option<Content>,
    pub buttons: Option<Vec<DialogButton>>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub confirm_variant: Option<ButtonVariant>,
    pub icon: Option<DialogIcon>,
    pub icon_color: Option<Color>,
    pub size: Option<SizeKind>,
    pub style: Option<Style>,
    pub on_confirm: Option<Hook>,
    pub on_cancel: Option<Hook>,
}

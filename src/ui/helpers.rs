//! UI helper functions

use ratatui::layout::Rect;

/// Truncate a string to max_len characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}

/// Create a centered rect with fixed dimensions, clamped to `r`
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Rows needed to show `width` columns of text wrapped at `available`
pub fn wrapped_rows(width: usize, available: u16) -> u16 {
    if available == 0 || width == 0 {
        return 1;
    }
    let rows = width.div_ceil(usize::from(available));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

use ratatui::layout::Rect;

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontally centered column of at most `max_width`, inset by `padding`
/// on both sides.
pub fn centered_column(area: Rect, max_width: u16, padding: u16) -> Rect {
    let available = area.width.saturating_sub(padding.saturating_mul(2));
    let width = available.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Takes the next `height` rows of `column` starting at `*cursor`,
/// clipped to the column, and advances the cursor.
pub fn take_rows(column: Rect, cursor: &mut u16, height: u16) -> Rect {
    let bottom = column.y + column.height;
    let y = (*cursor).min(bottom);
    let height = height.min(bottom - y);
    *cursor = y + height;
    Rect {
        x: column.x,
        y,
        width: column.width,
        height,
    }
}

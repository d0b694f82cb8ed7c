use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, inset by `x_margin` on both sides.
///
/// The result never extends past the bottom of `bounds`.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16, x_margin: u16) -> Rect {
    let popup_x = anchor.x.saturating_add(x_margin);
    let popup_y = anchor.bottom().min(bounds.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: anchor.width.saturating_sub(x_margin.saturating_mul(2)),
        height: height.min(bounds.bottom().saturating_sub(popup_y)),
    }
}

/// Shift `area` by signed offsets, keeping it inside `bounds`.
///
/// The popup keeps its size when it fits; it is cropped only when `bounds`
/// is smaller than the popup itself.
pub fn offset_rect(area: Rect, bounds: Rect, vertical: i16, horizontal: i16) -> Rect {
    let width = area.width.min(bounds.width);
    let height = area.height.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);

    let x = shift(area.x, horizontal).clamp(bounds.x, max_x);
    let y = shift(area.y, vertical).clamp(bounds.y, max_y);

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn shift(position: u16, delta: i16) -> u16 {
    position.saturating_add_signed(delta)
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal_margin),
        y: area.y.saturating_add(vertical_margin),
        width: area.width.saturating_sub(horizontal_margin.saturating_mul(2)),
        height: area.height.saturating_sub(vertical_margin.saturating_mul(2)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

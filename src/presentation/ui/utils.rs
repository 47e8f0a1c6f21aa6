use ratatui::layout::{Constraint, Layout, Rect};

/// Returns a box of at most `width` x `height` centered in `area`.
#[must_use]
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, content, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(center);

    content
}

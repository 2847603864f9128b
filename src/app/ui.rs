use crate::app::state::AppState;
use crate::components::helpers::dim_area;
use crate::components::menu_bar::{MenuBar, ICON_WIDTH};
use crate::components::palette::PaletteView;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const POPOVER_WIDTH: u16 = 52;

// Borders (2) + input + status + separator
const POPOVER_CHROME_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteLayout {
    pub popover: Rect,
    pub input: Rect,
    pub status: Rect,
    pub separator: Rect,
    pub history: Rect,
}

pub fn menu_bar_area(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width, area.height.min(1))
}

pub fn menu_icon_area(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width.min(ICON_WIDTH), area.height.min(1))
}

/// Rows reserved for the history list: one per entry the store can hold.
pub fn history_rows(state: &AppState) -> u16 {
    u16::try_from(state.session.history().capacity()).unwrap_or(u16::MAX)
}

/// Popover geometry, anchored under the menu-bar icon.
pub fn palette_layout(area: Rect, history_rows: u16) -> PaletteLayout {
    if area.height < 2 || area.width < 4 {
        return PaletteLayout::default();
    }

    let height = history_rows
        .saturating_add(POPOVER_CHROME_ROWS)
        .min(area.height - 1);
    let popover = Rect::new(area.x, area.y + 1, POPOVER_WIDTH.min(area.width), height);
    let inner = Block::default().borders(Borders::ALL).inner(popover);

    let rows = Layout::vertical([
        Constraint::Length(1), // Input
        Constraint::Length(1), // Status
        Constraint::Length(1), // Separator
        Constraint::Min(0),    // History
    ])
    .split(inner);

    PaletteLayout {
        popover,
        input: rows[0],
        status: rows[1],
        separator: rows[2],
        history: rows[3],
    }
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    f.render_widget(
        MenuBar {
            state,
            theme: &state.theme,
        },
        menu_bar_area(area),
    );

    let body = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    if body.height > 0 {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw("Press "),
            Span::styled(state.hotkey_label.as_str(), state.theme.prompt),
            Span::raw(" or click the icon to open the palette"),
        ]))
        .style(state.theme.menu_hint)
        .alignment(Alignment::Center);
        let middle = Rect::new(body.x, body.y + body.height / 2, body.width, 1);
        f.render_widget(hint, middle);
    }

    if state.palette_visible {
        dim_area(f.buffer_mut(), body);
        let layout = palette_layout(area, history_rows(state));
        f.render_widget(
            PaletteView {
                session: &state.session,
                layout,
                theme: &state.theme,
                history_cursor: state
                    .is_history_focused()
                    .then_some(state.history_cursor),
                frame_count: state.frame_count,
            },
            area,
        );
    }
}

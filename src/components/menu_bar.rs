use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Cells taken by the clickable icon segment.
pub const ICON_WIDTH: u16 = 8;

pub struct MenuBar<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icon_style = if self.state.palette_visible {
            self.theme.menu_icon_active
        } else {
            self.theme.menu_icon
        };

        let history = self.state.session.history();
        let mut spans = vec![
            Span::styled(format!(" {} luna ", glyphs::ICON), icon_style),
            Span::styled(
                format!(" {}: palette ", self.state.hotkey_label),
                self.theme.menu_hint,
            ),
            Span::styled(
                format!(" {} {}/{} ", glyphs::HISTORY, history.len(), history.capacity()),
                self.theme.menu_hint,
            ),
        ];
        if let Some(status) = self.state.session.status() {
            let style = if status.is_error {
                self.theme.status_error
            } else {
                self.theme.timestamp
            };
            spans.push(Span::styled(
                format!(" {} ", status.shown_at.format("%H:%M:%S")),
                style,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.menu_bar)
            .render(area, buf);
    }
}

use crate::app::session::CommandSession;
use crate::app::ui::PaletteLayout;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::draw_drop_shadow;

pub struct PaletteView<'a> {
    pub session: &'a CommandSession,
    pub layout: PaletteLayout,
    pub theme: &'a Theme,
    // Highlighted history row; `None` while the input has focus
    pub history_cursor: Option<usize>,
    pub frame_count: u64,
}

impl Widget for PaletteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popover = self.layout.popover;
        if popover.width == 0 || popover.height == 0 {
            return;
        }

        draw_drop_shadow(buf, popover, area);
        Clear.render(popover, buf);

        let focused = self.session.is_input_focused();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} LUNA", glyphs::ICON), self.theme.prompt),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        block.render(popover, buf);

        self.render_input(buf, focused);
        self.render_status(buf);

        let separator = self.layout.separator;
        if separator.height > 0 {
            let line = "─".repeat(separator.width as usize);
            buf.set_string(separator.x, separator.y, line, self.theme.border);
        }

        self.render_history(buf);
    }
}

impl PaletteView<'_> {
    fn render_input(&self, buf: &mut Buffer, focused: bool) {
        let input = self.layout.input;
        if input.height == 0 {
            return;
        }

        let prompt = Span::styled(format!("{} ", glyphs::PROMPT), self.theme.prompt);
        // Prompt and cursor stay put; the buffer scrolls to keep its tail.
        let room = (input.width as usize).saturating_sub(prompt.width() + 1);
        let mut spans = vec![prompt];
        let text = self.session.input();
        if text.is_empty() && !focused {
            spans.push(Span::styled("Type a command…", self.theme.placeholder));
        } else {
            spans.push(Span::styled(visible_tail(text, room), self.theme.input));
        }
        // Blinks at half the tick rate
        if focused && (self.frame_count / 2) % 2 == 0 {
            spans.push(Span::styled(glyphs::CURSOR, self.theme.border_focus));
        }

        buf.set_line(input.x, input.y, &Line::from(spans), input.width);
    }

    fn render_status(&self, buf: &mut Buffer) {
        let status_area = self.layout.status;
        if status_area.height == 0 {
            return;
        }
        let Some(status) = self.session.status() else {
            return;
        };

        let style = if status.is_error {
            self.theme.status_error
        } else {
            self.theme.status_info
        };
        let line = Line::from(vec![
            Span::styled(
                format!("[{}] ", status.shown_at.format("%H:%M:%S")),
                self.theme.timestamp,
            ),
            Span::styled(status.text.as_str(), style),
        ]);
        buf.set_line(status_area.x, status_area.y, &line, status_area.width);
    }

    fn render_history(&self, buf: &mut Buffer) {
        let history_area = self.layout.history;
        if history_area.height == 0 {
            return;
        }

        let entries = self.session.history().entries();
        if entries.is_empty() {
            let empty = Line::from(Span::styled(
                "  No recent commands",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(history_area.x, history_area.y, &empty, history_area.width);
            return;
        }

        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let selected = self.history_cursor == Some(i);
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{} ", glyphs::HISTORY), style),
                    Span::styled(entry.as_str(), style),
                ]))
            })
            .collect();

        List::new(items).render(history_area, buf);
    }
}

/// Longest suffix of `text` that fits in `max_width` cells.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let width = Span::raw(&text[i..i + c.len_utf8()]).width();
        if used + width > max_width {
            break;
        }
        used += width;
        start = i;
    }
    &text[start..]
}

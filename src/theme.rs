use ratatui::style::{Color, Modifier, Style};

pub mod glyphs {
    pub const ICON: &str = "☾";
    pub const PROMPT: &str = "❯";
    pub const CURSOR: &str = "▏";
    pub const HISTORY: &str = "↺";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub menu_bar: Style,
    pub menu_icon: Style,
    pub menu_icon_active: Style,
    pub menu_hint: Style,

    pub prompt: Style,
    pub input: Style,
    pub placeholder: Style,

    pub status_info: Style,
    pub status_error: Style,
    pub timestamp: Style,

    pub list_item: Style,
    pub list_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            menu_bar: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            menu_icon: Style::default()
                .bg(Color::Rgb(40, 40, 40))
                .fg(Color::Rgb(200, 200, 220)),
            menu_icon_active: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            menu_hint: Style::default()
                .bg(Color::Rgb(40, 40, 40))
                .fg(Color::Rgb(130, 130, 130)),

            prompt: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::White),
            placeholder: Style::default()
                .fg(Color::Rgb(100, 100, 100))
                .add_modifier(Modifier::ITALIC),

            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(Color::Rgb(130, 130, 130)),

            list_item: Style::default().fg(Color::Rgb(180, 180, 180)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

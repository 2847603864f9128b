use super::config::PaletteConfig;
use super::keymap::KeyMap;
use super::session::CommandSession;
use crate::domain::focus_bus::FocusBus;
use crate::theme::Theme;

#[derive(Debug)]
pub struct AppState {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub palette_visible: bool,

    // --- Core ---
    pub focus_bus: FocusBus,
    pub session: CommandSession,

    // --- History List ---
    // Highlighted row while the list has focus
    pub history_cursor: usize,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: KeyMap,
    pub theme: Theme,
    pub hotkey_label: String,
}

impl AppState {
    #[must_use]
    pub fn new(config: &PaletteConfig) -> Self {
        let focus_bus = FocusBus::new();
        let mut session = CommandSession::new(config);
        session.attach(&focus_bus);

        Self {
            should_quit: false,
            palette_visible: false,
            focus_bus,
            session,
            history_cursor: 0,
            frame_count: 0,
            keymap: KeyMap::from_hotkey(&config.hotkey),
            theme: Theme::default(),
            hotkey_label: config.hotkey.clone(),
        }
    }

    pub fn is_history_focused(&self) -> bool {
        self.palette_visible && !self.session.is_input_focused()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&PaletteConfig::default())
    }
}

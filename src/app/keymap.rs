use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: KeyEvent,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL),
        }
    }
}

impl KeyMap {
    /// Builds the keymap from a chord such as `"ctrl+space"`, keeping the
    /// default toggle when the chord does not parse.
    pub fn from_hotkey(hotkey: &str) -> Self {
        match parse_key_chord(hotkey) {
            Some(toggle) => Self { toggle },
            None => Self::default(),
        }
    }

    pub fn is_toggle(&self, event: &KeyEvent) -> bool {
        // Terminals disagree on whether shifted chars carry SHIFT.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
        event.code == self.toggle.code
            && (event.modifiers & relevant) == (self.toggle.modifiers & relevant)
    }
}

pub fn parse_key_chord(chord: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;

    for part in chord.split('+').map(str::trim) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "option" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            "super" | "cmd" | "command" => modifiers.insert(KeyModifiers::SUPER),
            key => {
                if code.is_some() {
                    return None;
                }
                code = Some(parse_key_code(key)?);
            }
        }
    }

    code.map(|code| KeyEvent::new(code, modifiers))
}

fn parse_key_code(key: &str) -> Option<KeyCode> {
    let code = match key {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

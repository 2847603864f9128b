use crate::app::{action::Action, state::AppState, ui};
use crate::components::helpers::contains;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                map_click(mouse.column, mouse.row, app_state, area)
            }
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if app_state.keymap.is_toggle(&key) {
        return Some(Action::TogglePalette);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if !app_state.palette_visible {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
    }

    if key.code == KeyCode::Esc {
        return Some(Action::HidePalette);
    }

    if app_state.session.is_input_focused() {
        match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Down => Some(Action::HistoryNext),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearInput)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::InsertChar(c))
            }
            _ => None,
        }
    } else {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::HistoryNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::HistoryPrev),
            KeyCode::Enter => Some(Action::SelectHighlightedEntry),
            KeyCode::Tab | KeyCode::Char('i') => Some(Action::FocusInput),
            _ => None,
        }
    }
}

fn map_click(column: u16, row: u16, app_state: &AppState, area: Rect) -> Option<Action> {
    if contains(ui::menu_icon_area(area), column, row) {
        return Some(Action::TogglePalette);
    }
    if !app_state.palette_visible {
        return None;
    }

    let layout = ui::palette_layout(area, ui::history_rows(app_state));
    if contains(layout.input, column, row) {
        return Some(Action::FocusInput);
    }
    if contains(layout.history, column, row) {
        let index = (row - layout.history.y) as usize;
        if index < app_state.session.history().len() {
            return Some(Action::SelectHistoryEntry(index));
        }
        return None;
    }
    if !contains(layout.popover, column, row) {
        // Clicking outside dismisses the popover.
        return Some(Action::HidePalette);
    }
    None
}

use super::state::AppState;
use tracing::debug;

/// The single entry point the platform layer calls on hotkey-up or
/// menu-bar icon click.
pub fn toggle(state: &mut AppState) {
    if state.palette_visible {
        hide(state);
    } else {
        state.palette_visible = true;
        state.history_cursor = 0;
        state.session.show();
        state.focus_bus.signal();
        debug!("Palette revealed");
    }
}

pub fn hide(state: &mut AppState) {
    if state.palette_visible {
        state.palette_visible = false;
        state.session.dismiss();
        debug!("Palette hidden");
    }
}

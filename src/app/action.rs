use crate::app::status::StatusToken;
use crate::domain::executor::ExecutionError;
use crate::domain::models::ExecutionOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Reveal Trigger ---
    TogglePalette, // Hotkey chord or menu-bar icon click
    HidePalette,   // ESC while the palette is shown

    // --- Input ---
    FocusInput,      // Click on the input line
    InsertChar(char),
    DeleteChar,
    ClearInput,
    Submit,

    // --- History List ---
    HistoryNext,
    HistoryPrev,
    SelectHistoryEntry(usize), // Click on a history row
    SelectHighlightedEntry,    // Enter while the history list has focus

    // --- Async Results ---
    /// Executor verdict. A failure only reaches the status line while its
    /// submission is still the latest one; older failures are just logged.
    ExecutionFinished {
        submission: StatusToken,
        result: Result<ExecutionOutcome, ExecutionError>,
    },
    StatusExpired(StatusToken),
}

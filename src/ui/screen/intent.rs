//! Intents for the screen.

use crate::ui::dialog::DialogAction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent {
    /// Replace the message text.
    UpdateMessage { text: String },
    /// Append a typed character (newlines included).
    InsertChar(char),
    /// Remove the last character.
    DeleteChar,
    ClearMessage,
    /// Append pasted text. Carriage returns are normalized to newlines.
    Paste { text: String },

    /// Select a model by id. Ids outside the configured set are ignored.
    SelectModel { id: String },
    /// Step through the model set like a dropdown, wrapping at both ends.
    CycleModel { step: i32 },

    FocusNext,
    FocusPrev,

    /// Run the verdict rule and open the verdict dialog.
    Submit,
    /// Move the highlighted dialog button.
    MoveAction { step: i32 },
    /// Verdict dialog closed: the feedback dialog opens in the same transition.
    DismissVerdict,
    /// Feedback dialog closed with either of its buttons.
    DismissFeedback { action: DialogAction },
}

impl Intent for ScreenIntent {}

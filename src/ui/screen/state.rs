use crate::config::{Config, ModelOption};
use crate::ui::mvi::UiState;
use crate::verdict::DialogPayload;

/// Which part of the screen receives key presses while no dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    Model,
    #[default]
    Message,
    Submit,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Model => Field::Message,
            Field::Message => Field::Submit,
            Field::Submit => Field::Model,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Model => Field::Submit,
            Field::Message => Field::Model,
            Field::Submit => Field::Message,
        }
    }
}

/// Dialog visibility. A single enum, so the verdict and feedback
/// dialogs can never be visible together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Verdict,
    Feedback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// The enumerated model set offered by the selector.
    pub models: Vec<ModelOption>,
    pub selected_model: Option<String>,
    pub message: String,
    pub focus: Field,
    pub modal: Modal,
    /// Last verdict. Kept after the dialog closes.
    pub payload: DialogPayload,
    /// Content of the feedback dialog.
    pub feedback: DialogPayload,
    /// Highlighted button of the open dialog.
    pub action_cursor: usize,
}

impl UiState for ScreenState {}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(Config::default().models, None)
    }
}

impl ScreenState {
    /// Initial state on mount. A preselected id outside `models` is dropped.
    pub fn new(models: Vec<ModelOption>, selected_model: Option<String>) -> Self {
        let selected_model = selected_model.filter(|id| models.iter().any(|m| &m.id == id));
        Self {
            models,
            selected_model,
            message: String::new(),
            focus: Field::default(),
            modal: Modal::Closed,
            payload: DialogPayload::default(),
            feedback: DialogPayload::feedback(),
            action_cursor: 0,
        }
    }

    pub fn dialog_visible(&self) -> bool {
        self.modal == Modal::Verdict
    }

    pub fn feedback_visible(&self) -> bool {
        self.modal == Modal::Feedback
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != Modal::Closed
    }

    pub fn selected_model_label(&self) -> Option<&str> {
        let id = self.selected_model.as_deref()?;
        self.models
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.label.as_str())
    }

    /// Index of the selected model within `models`.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_model.as_deref()?;
        self.models.iter().position(|m| m.id == id)
    }

    /// Number of buttons of the open dialog.
    pub fn action_count(&self) -> usize {
        match self.modal {
            Modal::Closed => 0,
            Modal::Verdict => 1,
            Modal::Feedback => 2,
        }
    }
}

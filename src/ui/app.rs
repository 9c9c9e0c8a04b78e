use crate::clipboard::ClipboardHandler;
use crate::config::{Config, ConfigError};
use crate::navigation::{Navigator, Route};
use crate::ui::dialog::{Dialog, DialogAction, DialogProps};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{Modal, ScreenIntent, ScreenReducer, ScreenState};
use crate::ui::theme::Palette;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    navigator: Navigator,
    /// Screen state (MVI pattern).
    screen: ScreenState,
    palette: Palette,
    /// Opened on first paste request.
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        let screen = ScreenState::new(config.models.clone(), config.ui.default_model.clone());
        Ok(Self::with_state(screen, palette))
    }

    fn with_state(screen: ScreenState, palette: Palette) -> Self {
        let navigator = Navigator::new(Route::Home);
        tracing::info!(route = navigator.current().name(), "Screen mounted");
        Self {
            should_quit: false,
            navigator,
            screen,
            palette,
            clipboard: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Dispatch an intent to the screen reducer.
    pub fn dispatch(&mut self, intent: ScreenIntent) {
        tracing::trace!(?intent, "screen intent");
        let before = self.screen.modal;
        dispatch_mvi!(self, screen, ScreenReducer, intent);
        if before != self.screen.modal {
            tracing::debug!(from = ?before, to = ?self.screen.modal, "modal changed");
        }
    }

    // ========================================================================
    // Screen operations
    // ========================================================================

    pub fn update_message(&mut self, text: impl Into<String>) {
        self.dispatch(ScreenIntent::UpdateMessage { text: text.into() });
    }

    pub fn select_model(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.screen.models.iter().any(|m| m.id == id) {
            tracing::warn!(model = %id, "Ignoring unknown model id");
        }
        self.dispatch(ScreenIntent::SelectModel { id });
    }

    pub fn submit(&mut self) {
        self.dispatch(ScreenIntent::Submit);
        if self.screen.dialog_visible() {
            tracing::info!(
                verdict = ?self.screen.payload.kind,
                model = self.screen.selected_model.as_deref().unwrap_or("none"),
                "Message checked"
            );
        }
    }

    pub fn dismiss_verdict(&mut self) {
        self.dispatch(ScreenIntent::DismissVerdict);
    }

    /// Both feedback buttons close the dialog; the choice is only logged.
    pub fn dismiss_feedback(&mut self, action: DialogAction) {
        tracing::info!(choice = action.label(), "Feedback dialog closed");
        self.dispatch(ScreenIntent::DismissFeedback { action });
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    pub fn verdict_dialog(&self) -> Dialog<'_> {
        let payload = &self.screen.payload;
        Dialog::new(
            DialogProps {
                kind: payload.kind,
                visible: self.screen.dialog_visible(),
                title: &payload.title,
                description: &payload.description,
            },
            &self.palette,
        )
    }

    pub fn feedback_dialog(&self) -> Dialog<'_> {
        let payload = &self.screen.feedback;
        Dialog::new(
            DialogProps {
                kind: payload.kind,
                visible: self.screen.feedback_visible(),
                title: &payload.title,
                description: &payload.description,
            },
            &self.palette,
        )
    }

    fn active_dialog(&self) -> Option<Dialog<'_>> {
        match self.screen.modal {
            Modal::Closed => None,
            Modal::Verdict => Some(self.verdict_dialog()),
            Modal::Feedback => Some(self.feedback_dialog()),
        }
    }

    /// Activate the highlighted button of the open dialog.
    pub fn activate_dialog_button(&mut self) {
        let mut closed = None;
        if let Some(dialog) = self.active_dialog() {
            dialog.press(self.screen.action_cursor, |action| closed = Some(action));
        }
        if let Some(action) = closed {
            self.on_dialog_close(action);
        }
    }

    /// Close request (Escape) for the open dialog.
    pub fn close_dialog(&mut self) {
        let mut closed = None;
        if let Some(dialog) = self.active_dialog() {
            dialog.request_close(|action| closed = Some(action));
        }
        if let Some(action) = closed {
            self.on_dialog_close(action);
        }
    }

    fn on_dialog_close(&mut self, action: DialogAction) {
        match self.screen.modal {
            Modal::Verdict => self.dismiss_verdict(),
            Modal::Feedback => self.dismiss_feedback(action),
            Modal::Closed => {}
        }
    }

    // ========================================================================
    // Paste
    // ========================================================================

    pub fn on_paste(&mut self, text: &str) {
        if self.screen.is_modal_open() {
            return;
        }
        self.dispatch(ScreenIntent::Paste {
            text: text.to_string(),
        });
    }

    pub fn paste_from_clipboard(&mut self) {
        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!("Clipboard unavailable: {}", err);
                    return;
                }
            }
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.get_text() {
            Ok(text) => self.on_paste(&text),
            Err(err) => tracing::warn!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::VerdictKind;

    fn make_app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[test]
    fn starts_on_home() {
        let app = make_app();
        assert_eq!(app.route(), Route::Home);
        assert!(!app.should_quit());
    }

    #[test]
    fn default_model_is_preselected() {
        let mut config = Config::default();
        config.ui.default_model = Some("model2".into());
        let app = App::new(&config).unwrap();
        assert_eq!(app.screen().selected_model.as_deref(), Some("model2"));
    }

    #[test]
    fn invalid_theme_color_fails() {
        let mut config = Config::default();
        config.theme.safe = "green".into();
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn okay_button_chains_to_feedback() {
        let mut app = make_app();
        app.update_message("okay");
        app.submit();
        assert!(app.verdict_dialog().is_visible());
        assert_eq!(app.screen().payload.kind, VerdictKind::Safe);

        app.activate_dialog_button();
        assert!(!app.verdict_dialog().is_visible());
        assert!(app.feedback_dialog().is_visible());
    }

    #[test]
    fn escape_closes_like_okay() {
        let mut app = make_app();
        app.submit();
        app.close_dialog();
        assert!(app.screen().feedback_visible());
        app.close_dialog();
        assert!(!app.screen().is_modal_open());
    }

    #[test]
    fn paste_ignored_while_dialog_open() {
        let mut app = make_app();
        app.submit();
        app.on_paste("hello");
        assert!(app.screen().message.is_empty());
    }

    #[test]
    fn dialog_actions_without_dialog_are_noops() {
        let mut app = make_app();
        app.activate_dialog_button();
        app.close_dialog();
        assert!(!app.screen().is_modal_open());
    }

    #[test]
    fn unknown_model_is_ignored() {
        let mut app = make_app();
        app.select_model("model1");
        app.select_model("model42");
        assert_eq!(app.screen().selected_model.as_deref(), Some("model1"));
    }
}

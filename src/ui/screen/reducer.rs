use crate::ui::mvi::Reducer;
use crate::verdict::evaluate;

use super::intent::ScreenIntent;
use super::state::{Modal, ScreenState};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::UpdateMessage { text } => {
                state.message = text;
            }
            ScreenIntent::InsertChar(ch) => {
                state.message.push(ch);
            }
            ScreenIntent::DeleteChar => {
                state.message.pop();
            }
            ScreenIntent::ClearMessage => {
                state.message.clear();
            }
            ScreenIntent::Paste { text } => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                state.message.push_str(&normalized);
            }

            ScreenIntent::SelectModel { id } => {
                if state.models.iter().any(|m| m.id == id) {
                    state.selected_model = Some(id);
                }
            }
            ScreenIntent::CycleModel { step } => {
                let len = state.models.len();
                if len > 0 && step != 0 {
                    let next = match state.selected_index() {
                        None if step > 0 => 0,
                        None => len - 1,
                        Some(current) => {
                            (current as i64 + step as i64).rem_euclid(len as i64) as usize
                        }
                    };
                    state.selected_model = Some(state.models[next].id.clone());
                }
            }

            ScreenIntent::FocusNext => {
                state.focus = state.focus.next();
            }
            ScreenIntent::FocusPrev => {
                state.focus = state.focus.prev();
            }

            ScreenIntent::Submit => {
                if state.modal == Modal::Closed {
                    state.payload = evaluate(&state.message);
                    state.modal = Modal::Verdict;
                    state.action_cursor = 0;
                }
            }
            ScreenIntent::MoveAction { step } => {
                let count = state.action_count();
                if count > 0 {
                    state.action_cursor =
                        (state.action_cursor as i64 + step as i64).rem_euclid(count as i64) as usize;
                }
            }
            ScreenIntent::DismissVerdict => {
                if state.modal == Modal::Verdict {
                    state.modal = Modal::Feedback;
                    state.action_cursor = 0;
                }
            }
            ScreenIntent::DismissFeedback { .. } => {
                if state.modal == Modal::Feedback {
                    state.modal = Modal::Closed;
                    state.action_cursor = 0;
                }
            }
        }
        state
    }
}

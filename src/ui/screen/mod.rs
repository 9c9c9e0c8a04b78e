//! The FraudShield screen.
//!
//! - `state.rs` - screen state and modal visibility
//! - `intent.rs` - user actions
//! - `reducer.rs` - state transitions, including the verdict rule
//! - `view.rs` - rendering of everything except the dialogs

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{Field, Modal, ScreenState};
pub use view::render_screen;

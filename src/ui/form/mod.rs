//! Create/edit user dialog.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state enum
//! - `intent.rs` - Key-driven edits and validation results
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormDialogState, FormKind};

//! Model-View-Intent primitives shared by the user store and the dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Network calls never happen inside a reducer. The store performs the
//! request and feeds the outcome back as an intent, so every transition
//! stays a pure `(State, Intent) -> State` step that tests can drive.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{reduce_in_place, Reducer};
pub use state::ModelState;

use crate::model::{User, UserId};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// A resource call was issued.
    Loading,
    /// Collection fetched; replaces the list wholesale.
    Loaded { users: Vec<User> },
    /// Server representation of a newly created user.
    Created { user: User },
    /// Server representation of a replaced user.
    Updated { user: User },
    /// Delete acknowledged for `id`.
    Deleted { id: UserId },
    /// A call failed; `message` is shown as-is.
    Rejected { message: String },
    ToggleCreateModal,
    /// Open editing for `user`, or close the edit dialog when it is open.
    ToggleEditModal { user: Option<User> },
}

impl Intent for StoreIntent {}

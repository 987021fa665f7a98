use crate::model::{next_user_id, User, UserId};
use crate::mvi::ModelState;

/// Which dialog is layered over the user list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Closed,
    Creating,
    Editing(User),
}

/// Everything the views need to render the user list and its dialogs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    /// Users in resource order. Ids are unique.
    pub users: Vec<User>,
    /// True while a resource call is in flight.
    pub is_loading: bool,
    pub dialog: DialogMode,
    /// Message of the last failed call; empty when there is none.
    pub error: String,
}

impl ModelState for StoreState {}

impl StoreState {
    pub fn is_modal_open(&self) -> bool {
        self.dialog == DialogMode::Creating
    }

    pub fn is_edit_modal_open(&self) -> bool {
        matches!(self.dialog, DialogMode::Editing(_))
    }

    pub fn user_to_edit(&self) -> Option<&User> {
        match &self.dialog {
            DialogMode::Editing(user) => Some(user),
            _ => None,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn next_user_id(&self) -> UserId {
        next_user_id(&self.users)
    }
}

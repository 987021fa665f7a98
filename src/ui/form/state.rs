use crate::model::{DraftField, UserDraft, UserId};
use crate::mvi::ModelState;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit(UserId),
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Create => "Add New User",
            FormKind::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Create => "Create User",
            FormKind::Edit(_) => "Save Changes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormDialogState {
    #[default]
    Hidden,
    Visible {
        kind: FormKind,
        draft: UserDraft,
        /// Index into `DraftField::ALL`.
        focused: usize,
        /// Messages from the last blocked submission.
        errors: FieldErrors,
    },
}

impl ModelState for FormDialogState {}

impl FormDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn kind(&self) -> Option<FormKind> {
        match self {
            Self::Visible { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    pub fn focused_field(&self) -> Option<DraftField> {
        match self {
            Self::Visible { focused, .. } => DraftField::ALL.get(*focused).copied(),
            Self::Hidden => None,
        }
    }
}

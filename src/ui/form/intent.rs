use crate::model::UserDraft;
use crate::mvi::Intent;
use crate::validation::FieldErrors;

use super::state::FormKind;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Open { kind: FormKind, draft: UserDraft },
    Close,
    FocusNext,
    FocusPrev,
    /// Append a character to the focused field.
    Input(char),
    /// Remove the last character of the focused field.
    Backspace,
    /// Submission was blocked; show these messages.
    ShowErrors { errors: FieldErrors },
}

impl Intent for FormIntent {}

use crate::model::DraftField;
use crate::mvi::Reducer;
use crate::validation::FieldErrors;

use super::intent::FormIntent;
use super::state::FormDialogState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormDialogState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { kind, draft } => FormDialogState::Visible {
                kind,
                draft,
                focused: 0,
                errors: FieldErrors::new(),
            },
            FormIntent::Close => FormDialogState::Hidden,
            FormIntent::FocusNext => match state {
                FormDialogState::Visible {
                    kind,
                    draft,
                    focused,
                    errors,
                } => FormDialogState::Visible {
                    kind,
                    draft,
                    focused: (focused + 1) % DraftField::ALL.len(),
                    errors,
                },
                other => other,
            },
            FormIntent::FocusPrev => match state {
                FormDialogState::Visible {
                    kind,
                    draft,
                    focused,
                    errors,
                } => {
                    let focused = if focused == 0 {
                        DraftField::ALL.len() - 1
                    } else {
                        focused - 1
                    };
                    FormDialogState::Visible {
                        kind,
                        draft,
                        focused,
                        errors,
                    }
                }
                other => other,
            },
            FormIntent::Input(ch) => match state {
                FormDialogState::Visible {
                    kind,
                    mut draft,
                    focused,
                    errors,
                } => {
                    if let Some(field) = DraftField::ALL.get(focused) {
                        draft.field_mut(*field).push(ch);
                    }
                    FormDialogState::Visible {
                        kind,
                        draft,
                        focused,
                        errors,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                FormDialogState::Visible {
                    kind,
                    mut draft,
                    focused,
                    errors,
                } => {
                    if let Some(field) = DraftField::ALL.get(focused) {
                        draft.field_mut(*field).pop();
                    }
                    FormDialogState::Visible {
                        kind,
                        draft,
                        focused,
                        errors,
                    }
                }
                other => other,
            },
            FormIntent::ShowErrors { errors } => match state {
                FormDialogState::Visible {
                    kind,
                    draft,
                    focused,
                    ..
                } => {
                    // Jump to the first offending field.
                    let focused = errors
                        .keys()
                        .next()
                        .and_then(|field| DraftField::ALL.iter().position(|f| f == field))
                        .unwrap_or(focused);
                    FormDialogState::Visible {
                        kind,
                        draft,
                        focused,
                        errors,
                    }
                }
                other => other,
            },
        }
    }
}

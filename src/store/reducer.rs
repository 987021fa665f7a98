use std::collections::HashSet;

use crate::model::{next_user_id, User};
use crate::mvi::Reducer;
use crate::store::intent::StoreIntent;
use crate::store::state::{DialogMode, StoreState};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::Loading => StoreState {
                is_loading: true,
                error: String::new(),
                ..state
            },
            StoreIntent::Loaded { users } => StoreState {
                users: dedup_by_id(users),
                is_loading: false,
                ..state
            },
            StoreIntent::Created { mut user } => {
                let mut users = state.users;
                // Echo APIs hand out the same id for every create.
                if users.iter().any(|existing| existing.id == user.id) {
                    user.id = next_user_id(&users);
                }
                users.push(user);
                StoreState {
                    users,
                    is_loading: false,
                    ..state
                }
            }
            StoreIntent::Updated { user } => {
                let users = state
                    .users
                    .into_iter()
                    .map(|existing| {
                        if existing.id == user.id {
                            user.clone()
                        } else {
                            existing
                        }
                    })
                    .collect();
                StoreState {
                    users,
                    is_loading: false,
                    ..state
                }
            }
            StoreIntent::Deleted { id } => {
                let mut users = state.users;
                users.retain(|user| user.id != id);
                StoreState {
                    users,
                    is_loading: false,
                    ..state
                }
            }
            StoreIntent::Rejected { message } => StoreState {
                is_loading: false,
                error: message,
                ..state
            },
            StoreIntent::ToggleCreateModal => {
                let dialog = match state.dialog {
                    DialogMode::Creating => DialogMode::Closed,
                    _ => DialogMode::Creating,
                };
                StoreState { dialog, ..state }
            }
            StoreIntent::ToggleEditModal { user } => {
                let dialog = match (state.dialog, user) {
                    (DialogMode::Editing(_), _) => DialogMode::Closed,
                    (_, Some(user)) => DialogMode::Editing(user),
                    (other, None) => other,
                };
                StoreState { dialog, ..state }
            }
        }
    }
}

/// Keep the first occurrence of every id.
fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::with_capacity(users.len());
    let total = users.len();
    let unique: Vec<User> = users.into_iter().filter(|user| seen.insert(user.id)).collect();
    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Resource returned duplicate user ids"
        );
    }
    unique
}

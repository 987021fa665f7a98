//! Client-side user store.
//!
//! [`UserStore`] is the single source of truth for user data and dialog
//! visibility. Each CRUD operation marks the store loading, performs one
//! resource call and reduces the outcome into [`StoreState`]. Failures are
//! caught at the operation boundary and surface only as `state.error`.
//!
//! There is no busy lock: issuing a second operation while one is in flight
//! is allowed, and a late response is applied whenever it arrives.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::Instrument;
use uuid::Uuid;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{DialogMode, StoreState};

use crate::api::{ApiError, UserResource};
use crate::model::{User, UserId};
use crate::mvi::reduce_in_place;

/// Shared handle to the store. Clones observe the same state.
#[derive(Clone)]
pub struct UserStore {
    resource: Arc<dyn UserResource>,
    state: Arc<RwLock<StoreState>>,
}

impl UserStore {
    pub fn new(resource: Arc<dyn UserResource>) -> Self {
        Self {
            resource,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> String {
        self.state.read().error.clone()
    }

    /// Id a client-side create should use: `max(ids) + 1`, or 1.
    pub fn next_user_id(&self) -> UserId {
        self.state.read().next_user_id()
    }

    pub fn dispatch(&self, intent: StoreIntent) {
        let mut guard = self.state.write();
        reduce_in_place::<StoreReducer>(&mut guard, intent);
    }

    /// Fetch the collection and replace the list with it.
    pub async fn load_users(&self) {
        let span = tracing::info_span!("load_users", op = %Uuid::new_v4());
        async {
            self.dispatch(StoreIntent::Loading);
            match self.resource.list_users().await {
                Ok(users) => {
                    tracing::info!(count = users.len(), "Users loaded");
                    self.dispatch(StoreIntent::Loaded { users });
                }
                Err(err) => self.reject(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Submit `candidate` and append the server's representation.
    ///
    /// Closing the create dialog is left to the caller.
    pub async fn create_user(&self, candidate: User) {
        let span = tracing::info_span!("create_user", op = %Uuid::new_v4(), id = candidate.id);
        async {
            self.dispatch(StoreIntent::Loading);
            match self.resource.create_user(&candidate).await {
                Ok(user) => {
                    tracing::info!(server_id = user.id, "User created");
                    self.dispatch(StoreIntent::Created { user });
                }
                Err(err) => self.reject(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Replace the user `id` with `updated`; a non-success status is a failure.
    pub async fn edit_user(&self, id: UserId, updated: User) {
        let span = tracing::info_span!("edit_user", op = %Uuid::new_v4(), id);
        async {
            self.dispatch(StoreIntent::Loading);
            match self.resource.update_user(id, &updated).await {
                Ok(user) => {
                    tracing::info!("User updated");
                    self.dispatch(StoreIntent::Updated { user });
                }
                Err(err) => self.reject(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Delete the user `id`. Any response removes it locally.
    pub async fn delete_user(&self, id: UserId) {
        let span = tracing::info_span!("delete_user", op = %Uuid::new_v4(), id);
        async {
            self.dispatch(StoreIntent::Loading);
            match self.resource.delete_user(id).await {
                Ok(()) => {
                    tracing::info!("User deleted");
                    self.dispatch(StoreIntent::Deleted { id });
                }
                Err(err) => self.reject(err),
            }
        }
        .instrument(span)
        .await
    }

    pub fn toggle_create_modal(&self) {
        self.dispatch(StoreIntent::ToggleCreateModal);
    }

    pub fn toggle_edit_modal(&self, user: Option<User>) {
        self.dispatch(StoreIntent::ToggleEditModal { user });
    }

    fn reject(&self, err: ApiError) {
        tracing::warn!(kind = err.kind(), error = %err, "Request failed");
        self.dispatch(StoreIntent::Rejected {
            message: err.to_string(),
        });
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

//! Access to the remote user resource.

mod client;
mod error;

use async_trait::async_trait;

pub use client::HttpUserResource;
pub use error::ApiError;

use crate::model::{User, UserId};

/// Operations of the remote user collection.
///
/// Injected into [`crate::store::UserStore`]; tests substitute an in-memory
/// or mock-server backed implementation.
#[async_trait]
pub trait UserResource: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `POST /users` with the candidate as body; returns the created record.
    async fn create_user(&self, candidate: &User) -> Result<User, ApiError>;

    /// `PUT /users/{id}` with the full replacement; non-2xx is an error.
    async fn update_user(&self, id: UserId, user: &User) -> Result<User, ApiError>;

    /// `DELETE /users/{id}`; any response counts as success.
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;
}

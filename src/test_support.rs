//! Fixtures shared by unit tests.

use async_trait::async_trait;

use crate::api::{ApiError, UserResource};
use crate::model::{Address, Company, User, UserId};

/// Resource that answers every call from its arguments without I/O.
pub(crate) struct EchoResource;

#[async_trait]
impl UserResource for EchoResource {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_user(&self, candidate: &User) -> Result<User, ApiError> {
        Ok(candidate.clone())
    }

    async fn update_user(&self, _id: UserId, user: &User) -> Result<User, ApiError> {
        Ok(user.clone())
    }

    async fn delete_user(&self, _id: UserId) -> Result<(), ApiError> {
        Ok(())
    }
}

/// A user that passes form validation.
pub(crate) fn sample_user(id: UserId) -> User {
    User {
        id,
        name: format!("User {id}"),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        phone: "1234567890".to_string(),
        website: String::new(),
        address: Address {
            street: "Main".to_string(),
            city: "Town".to_string(),
            ..Address::default()
        },
        company: Company::default(),
    }
}

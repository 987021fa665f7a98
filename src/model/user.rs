use serde::{Deserialize, Serialize};

use super::company::Company;

/// Identifier assigned by the remote resource.
pub type UserId = u64;

/// One managed person record as exchanged with the user resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

/// Postal address. Missing sub-fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

/// Next client-side id: one past the largest id in `users`, or 1 when empty.
pub fn next_user_id(users: &[User]) -> UserId {
    users
        .iter()
        .map(|user| user.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

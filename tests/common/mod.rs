//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_resource;

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use user_console::api::HttpUserResource;
use user_console::model::{Address, Company, User, UserId};
use user_console::store::UserStore;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A user record that passes form validation.
pub fn sample_user(id: UserId) -> User {
    User {
        id,
        name: format!("User {id}"),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        phone: "1234567890".to_string(),
        website: format!("user{id}.example.com"),
        address: Address {
            street: "Main Street".to_string(),
            suite: "Apt. 1".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        },
        company: Company {
            name: "Acme".to_string(),
        },
    }
}

pub fn sample_users(ids: &[UserId]) -> Vec<User> {
    ids.iter().copied().map(sample_user).collect()
}

/// JSON array body for a list response.
pub fn users_json(users: &[User]) -> String {
    serde_json::to_string(users).expect("Failed to serialize users")
}

/// Store backed by the real HTTP resource pointed at `base_url`.
pub fn http_store(base_url: &str) -> UserStore {
    let resource = HttpUserResource::with_client(reqwest::Client::new(), base_url);
    UserStore::new(Arc::new(resource))
}

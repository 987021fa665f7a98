//! User record types shared by the resource client, store and views.

mod company;
mod draft;
mod user;

pub use company::Company;
pub use draft::{DraftField, UserDraft};
pub use user::{next_user_id, Address, User, UserId};

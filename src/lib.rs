//! Terminal console for browsing and editing users of a remote REST
//! collection.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod routing;
pub mod store;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod test_support;

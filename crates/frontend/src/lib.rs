//! Hearth web UI: client-side routes behind a role gate

pub mod app;
pub mod auth;
pub mod auth_guard;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod router;

pub use app::App;
pub use auth::{AuthAction, AuthProvider};
pub use auth_guard::RoleGate;
pub use router::Route;

//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Product name shown in the header
    pub const APP_NAME: &'static str = "Hearth";

    /// Session storage key for the resolved auth signal
    pub const AUTH_SIGNAL_KEY: &'static str = "hearth.auth_signal";

    /// Placeholder text while the auth signal or a view is loading
    pub const LOADING_TEXT: &'static str = "Checking authentication...";
}

//! Authentication module

pub mod context;

// Re-export commonly used items
pub use context::{
    use_auth, use_auth_signal, AuthAction, AuthContext, AuthContextData, AuthProvider,
};

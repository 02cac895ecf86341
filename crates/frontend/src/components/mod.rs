//! Reusable UI components

mod spinner;

pub use spinner::LoadingSpinner as Spinner;

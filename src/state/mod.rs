// Application state module
pub mod app_state;

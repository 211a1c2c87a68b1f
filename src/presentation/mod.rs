// Presentation layer - Entry points called by the hosting visualization runtime
pub mod app_state;
pub mod handlers;

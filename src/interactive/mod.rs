pub mod app;
pub mod event;
pub mod handlers;
pub mod toast;
pub mod ui;

pub use handlers::run_interactive_mode;

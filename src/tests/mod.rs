mod auth_tests;
mod cli_context_tests;
mod cli_tests;
mod client_tests;
mod config_tests;
mod error_tests;
mod theme_tests;

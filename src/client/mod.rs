pub mod paths;
pub mod rest;
pub mod taskboard_client;

pub use paths::ProjectScope;
pub use rest::{decode_body, normalize_error, RestClient};
pub use taskboard_client::TaskboardClient;

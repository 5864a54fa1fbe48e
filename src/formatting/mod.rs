pub mod dashboard;
pub mod gantt;
pub mod tables;
pub mod theme;
pub mod tree;
pub mod utils;

pub use dashboard::print_dashboard;
pub use gantt::{print_gantt, render_gantt};
pub use tables::{print_failure, print_json, print_success, OutputFormat};
pub use tree::print_tree;
pub use utils::{clean_description, extract_first_name, format_due, format_priority, format_relative_time, format_status, truncate};

pub mod config;
pub mod logging;
pub mod output;

pub use config::load_config;
pub use logging::{fallback_level, init_logging};
pub use output::write_output;

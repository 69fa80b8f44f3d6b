mod args;
mod config;
mod logging;

pub use args::expand_single_dash_flags;
pub use config::load_config;
pub use logging::init_logging;

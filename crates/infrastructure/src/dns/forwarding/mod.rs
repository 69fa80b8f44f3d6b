mod registry;
mod resolver;

pub use registry::ForwarderRegistry;
pub use resolver::{resolve_endpoint, RESOLVE_TIMEOUT};

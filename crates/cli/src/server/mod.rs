pub mod dns;

pub use dns::bind_proxy_sockets;

pub mod cache;
pub mod error;
pub mod network;
pub mod spec;

pub use cache::ForwardCache;
pub use error::ConfigError;
pub use network::Network;
pub use spec::NetworkSpec;

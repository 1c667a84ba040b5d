/// Network adapters for external API calls
mod nvd_client;

pub use nvd_client::NvdClient;

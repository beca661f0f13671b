pub mod blob;
pub mod data_url;
pub mod http;
pub mod loader;
pub mod sink;

pub mod backend_client;
pub mod config;
pub mod identity_store;

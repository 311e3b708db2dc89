pub mod translation_client;
pub mod translation_store;

pub use translation_client::*;
pub use translation_store::*;

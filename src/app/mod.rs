pub mod handlers;
pub mod server;

pub use server::{create_router, start_server};

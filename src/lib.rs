pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{build_identity_source, LocalStorage};
pub use crate::app::{create_router, start_server};
pub use crate::config::GateConfig;
pub use crate::core::gate::{GatePage, IdentityGate};
pub use crate::domain::model::{Decision, IdentityStrategy};
pub use crate::domain::services::{extract_domain, is_valid};
pub use crate::utils::error::{GateError, Result};

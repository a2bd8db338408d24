pub mod gate;

pub use crate::domain::model::Decision;
pub use crate::domain::ports::{ConfigProvider, IdentitySource, Storage};
pub use crate::utils::error::Result;

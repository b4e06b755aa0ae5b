pub mod domain;
pub mod dto;

pub use domain::*;
pub use dto::*;

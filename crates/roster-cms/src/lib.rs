pub mod client;
pub mod error;
pub mod profiles;
pub mod query;

pub use client::{endpoint_url, GraphqlClient};
pub use error::{CmsError, Result};
pub use profiles::{map_user_profiles, ProfilesApi};

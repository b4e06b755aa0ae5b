use crate::domain::{EntryId, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileListItemDto {
    pub id: EntryId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Profile> for ProfileListItemDto {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.display_name(),
            email: profile.email.clone(),
            role: profile.role.clone(),
        }
    }
}

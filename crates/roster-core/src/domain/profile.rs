use crate::domain::ids::EntryId;
use crate::domain::rich_text::RichTextNode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIRST_NAME: &str = "Unnamed";
pub const DEFAULT_LAST_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: EntryId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub summary: Vec<RichTextNode>,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

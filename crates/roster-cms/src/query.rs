use roster_core::RichTextNode;
use serde::Deserialize;

/// The one declared query document. One org entry, up to ten profiles.
pub const USER_PROFILES_QUERY: &str = r#"query GetUserProfiles {
  usersCollection(limit: 1) {
    items {
      sys { id }
      profilesCollection(limit: 10) {
        items {
          sys { id }
          firstName
          lastName
          email
          role
          summary {
            json
          }
        }
      }
    }
  }
}"#;

// Response models mirror the schema's nullability: every level can be
// absent, so every field defaults.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilesData {
    #[serde(default)]
    pub users_collection: Option<UsersCollection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersCollection {
    #[serde(default)]
    pub items: Option<Vec<Option<User>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub profiles_collection: Option<ProfilesCollection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesCollection {
    #[serde(default)]
    pub items: Option<Vec<Option<ProfileEntry>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub json: Option<RichTextDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextDocument {
    #[serde(default)]
    pub content: Vec<RichTextNode>,
}

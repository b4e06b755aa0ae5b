use roster_core::{EntryId, Profile, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
use tracing::warn;

use crate::client::GraphqlClient;
use crate::error::Result;
use crate::query::{ProfileEntry, UserProfilesData, USER_PROFILES_QUERY};

/// Typed operations bound to one client, one method per query document.
#[derive(Debug, Clone)]
pub struct ProfilesApi {
    client: GraphqlClient,
}

impl ProfilesApi {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    pub fn user_profiles(&self) -> Result<UserProfilesData> {
        self.client.execute(USER_PROFILES_QUERY)
    }
}

/// Flattens the nullable users/profiles nesting into plain records, users
/// outer and profiles inner, source order preserved. Never fails: null
/// entries are dropped and absent fields fall back to defaults.
pub fn map_user_profiles(data: &UserProfilesData) -> Vec<Profile> {
    let users = match data
        .users_collection
        .as_ref()
        .and_then(|collection| collection.items.as_ref())
    {
        Some(items) if !items.is_empty() => items,
        _ => {
            warn!("no users in query response");
            return Vec::new();
        }
    };

    let mut profiles = Vec::new();
    for user in users.iter().flatten() {
        let Some(items) = user
            .profiles_collection
            .as_ref()
            .and_then(|collection| collection.items.as_ref())
        else {
            continue;
        };
        for entry in items.iter().flatten() {
            profiles.push(map_profile_entry(entry));
        }
    }
    profiles
}

fn map_profile_entry(entry: &ProfileEntry) -> Profile {
    Profile {
        id: EntryId::new(
            entry
                .sys
                .as_ref()
                .and_then(|sys| sys.id.clone())
                .unwrap_or_default(),
        ),
        first_name: entry
            .first_name
            .clone()
            .unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string()),
        last_name: entry
            .last_name
            .clone()
            .unwrap_or_else(|| DEFAULT_LAST_NAME.to_string()),
        email: entry.email.clone().unwrap_or_default(),
        role: entry.role.clone().unwrap_or_default(),
        summary: entry
            .summary
            .as_ref()
            .and_then(|summary| summary.json.as_ref())
            .map(|document| document.content.clone())
            .unwrap_or_default(),
    }
}

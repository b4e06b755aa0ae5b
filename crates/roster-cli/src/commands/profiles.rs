use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use roster_cms::map_user_profiles;
use roster_core::dto::ProfileListItemDto;
use roster_core::{plain_text, Profile};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

pub fn list_profiles(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let mut profiles = fetch_profiles(ctx)?;
    if let Some(role) = args.role {
        profiles.retain(|profile| profile.role.eq_ignore_ascii_case(&role));
    }

    if ctx.json {
        let items: Vec<ProfileListItemDto> =
            profiles.iter().map(ProfileListItemDto::from).collect();
        return print_json(&items);
    }

    if profiles.is_empty() {
        println!("no profiles found");
        return Ok(());
    }
    for profile in &profiles {
        println!(
            "{}  {}  {}  {}",
            profile.id,
            profile.display_name(),
            profile.role,
            profile.email
        );
    }
    Ok(())
}

pub fn show_profile(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    if args.id.trim().is_empty() {
        return Err(invalid_input("profile id cannot be empty"));
    }

    let profiles = fetch_profiles(ctx)?;
    let profile = profiles
        .into_iter()
        .find(|profile| profile.id.as_str() == args.id)
        .ok_or_else(|| not_found(format!("profile {}", args.id)))?;

    if ctx.json {
        return print_json(&profile);
    }

    println!("id:    {}", profile.id);
    println!("name:  {}", profile.display_name());
    println!("email: {}", profile.email);
    println!("role:  {}", profile.role);
    let summary = plain_text(&profile.summary);
    if !summary.is_empty() {
        println!("summary:");
        for line in summary.lines() {
            println!("  {line}");
        }
    }
    Ok(())
}

fn fetch_profiles(ctx: &Context<'_>) -> Result<Vec<Profile>> {
    let data = ctx
        .api
        .user_profiles()
        .with_context(|| "query user profiles")?;
    Ok(map_user_profiles(&data))
}

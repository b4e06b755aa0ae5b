use anyhow::Result;
use roster_cms::ProfilesApi;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod profiles;

pub struct Context<'a> {
    pub api: &'a ProfilesApi,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

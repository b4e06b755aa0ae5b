pub mod ids;
pub mod profile;
pub mod rich_text;

pub use ids::EntryId;
pub use profile::{Profile, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
pub use rich_text::{plain_text, RichTextNode};

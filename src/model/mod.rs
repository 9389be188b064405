pub mod content;
pub mod entry;
pub mod question;

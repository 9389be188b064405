pub mod content;
pub mod preference;
pub mod quiz;
pub mod search;
pub mod slug;

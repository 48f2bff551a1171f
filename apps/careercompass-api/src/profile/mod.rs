pub mod draft;
pub mod handlers;
pub mod suggestions;

// Dashboard intelligence: archetype classification and canned content selection.
// Everything below handlers is pure; handlers only add request validation.

pub mod archetype;
pub mod content;
pub mod dashboard;
pub mod handlers;
pub mod matrix;

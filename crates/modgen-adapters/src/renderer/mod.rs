//! Template composition engines.

mod jinja;

pub use jinja::JinjaRenderer;

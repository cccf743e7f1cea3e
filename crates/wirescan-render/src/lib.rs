#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod render_json;
pub mod render_text;
pub mod renderer;

mod payload;

pub use config::{MAX_NESTED_DEPTH, OutputMode, RenderConfig};
pub use error::RenderError;
pub use renderer::{DefaultRenderer, FieldRenderer};

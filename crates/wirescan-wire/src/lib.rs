#![warn(clippy::pedantic)]

pub mod error;
pub mod fixed;
pub mod length_delimited;
pub mod value;
pub mod varint;
pub mod wire_type;

pub use error::WireError;
pub use fixed::FixedWidth;
pub use value::Value;
pub use wire_type::{Codec, WireType};

#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod field;

pub use config::DecoderConfig;
pub use decoder::{DecodeResult, FieldDecoder, decode, decode_with_config};
pub use error::{DecodeError, ErrorKind};
pub use field::Field;

//! # app-utils
//!
//! Small helpers shared across the app: human-readable byte sizes and
//! random unique identifiers.
//!
//! ## Usage
//!
//! ```
//! use app_utils::{format_size, generate_uuid, is_uuid_format};
//!
//! assert_eq!(format_size(2048u64), "2.00 KB");
//! assert!(is_uuid_format(&generate_uuid()));
//! ```
//!
//! ## Modules
//!
//! - `format` - Byte counts to strings using binary (1024) multiples
//! - `id` - Version-4 UUID generation from the OS random source
//! - `logging` - Tracing subscriber setup for binaries and tests
//! - `error` - Crate error type
pub mod error;
pub mod format;
pub mod id;
pub mod logging;


pub use error::{Error, Result};
pub use format::{format_size, ByteCount, ByteSize, ByteUnit, ScaledSize};
pub use id::{generate_uuid, is_uuid_format, try_generate_uuid, Identifier};

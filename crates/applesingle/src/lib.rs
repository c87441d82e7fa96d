//! AppleSingle archive codec
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Intentional for binary operations
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
#![allow(clippy::doc_markdown)] // ProDOS and HFS terms don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::return_self_not_must_use)] // Builder patterns
#![allow(clippy::use_self)] // Type clarity
#![warn(missing_docs)]
//! This crate reads and writes AppleSingle files, the container that packs a
//! file's data fork, resource fork and metadata (real name, dates, ProDOS
//! attributes) into a single byte stream.
//!
//! # Layout
//!
//! All integers are big-endian.
//!
//! - 26 byte header: magic `0x00051600`, version, 16 filler bytes, entry count
//! - 12 byte descriptor per entry: type id, absolute offset, length
//! - Entry payloads
//!
//! Versions 1 and 2 are accepted when reading. Writing always produces
//! version 2 with payloads packed directly after the descriptor table.
//!
//! # Example
//!
//! ```
//! use applesingle::AppleSingle;
//!
//! let mut builder = AppleSingle::builder();
//! builder
//!     .real_name("hello.txt")?
//!     .file_type(0x04)
//!     .data_fork(b"Hello, World!\r".to_vec());
//! let bytes = builder.build().write()?;
//!
//! let archive = AppleSingle::read(&bytes)?;
//! assert_eq!(archive.real_name(), Some("HELLO.TXT"));
//! assert_eq!(archive.data_fork(), Some(&b"Hello, World!\r"[..]));
//! # Ok::<(), applesingle::AppleSingleError>(())
//! ```

pub mod archive;
pub mod builder;
pub mod cursor;
pub mod dates;
pub mod entry;
pub mod error;
pub mod header;
pub mod name;
pub mod payload;
pub mod prodos;
pub mod reader;
pub mod writer;

pub use archive::AppleSingle;
pub use builder::AppleSingleBuilder;
pub use dates::{FileDatesInfo, UNKNOWN_DATE};
pub use entry::{Entry, EntryDescriptor, EntryType};
pub use error::{AppleSingleError, Result};
pub use payload::Payload;
pub use prodos::ProdosFileInfo;
pub use reader::{ArchiveReader, ByteRead};
pub use writer::write_entries;

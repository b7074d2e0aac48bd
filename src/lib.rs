//! Repair FASTQ read headers mangled by demultiplexing.
//!
//! - Reads one gzip FASTQ file as strict four-line records (streaming).
//! - Removes every space from `@` header lines; sequence, separator and
//!   quality lines pass through byte-identical.
//! - Writes `<name>_fixed.<ext>` (gzip) and never overwrites an existing one.
//! - Trailing partial records: warn and drop (default) or return an error.

pub mod error;
pub mod fixer;
pub mod naming;
pub mod policy;
pub mod reader;
pub mod record;
pub mod writer;
mod util;

pub use crate::error::{FixError, FormatError, IoContext};
pub use crate::fixer::{FixConfig, FixReport, Outcome, fix};
pub use crate::naming::{NameParts, SUPPORTED_EXTENSIONS};
pub use crate::policy::{ErrorPolicy, FixOptions};
pub use crate::reader::FastqReader;
pub use crate::record::FastqRecord;
pub use crate::writer::FastqWriter;

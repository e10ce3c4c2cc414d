//! # adr-store
//!
//! File system operations for a directory of Architecture Decision Records.
//!
//! The record files are the only source of truth. Everything else (the
//! summaries, the index document) is derived from them on demand and can be
//! regenerated at any time.

pub mod index;
pub mod numbering;
pub mod reader;
pub mod scan;
pub mod writer;

pub use index::{render_index, write_index, IndexOptions};
pub use numbering::next_number;
pub use reader::parse_record_file;
pub use scan::scan_dir;
pub use writer::{ensure_dir, NewRecordOptions, RecordStore};

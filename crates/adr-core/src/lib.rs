//! # adr-core
//!
//! Core types and rules for Architecture Decision Records.
//!
//! This crate holds everything that does not touch the filesystem:
//! - [`RecordMeta`] and [`RecordSummary`]: what is known about a record
//! - File naming rules ([`naming`]), numeric prefixes, slugs, `NNNN-slug.md`
//! - Structured header block parsing ([`frontmatter`])
//! - Layered metadata extraction from record text ([`extract`])
//! - Project configuration ([`AdrConfig`])
//! - Error hierarchy ([`AdrError`], [`TemplateError`])

pub mod config;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod naming;
pub mod record;

pub use config::AdrConfig;
pub use error::{AdrError, Result, TemplateError};
pub use extract::{extract_meta, StatusScan};
pub use record::{RecordMeta, RecordSummary};

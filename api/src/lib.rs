//! Client side of the equipment analysis backend.
//!
//! The backend owns CSV parsing, statistics, history retention and PDF reports. This crate only
//! knows how to talk to it:
//! - `POST {base}/upload/` (multipart, single `file` field) -> [`UploadSummary`]
//! - `GET {base}/history/` -> most-recent-first list of [`UploadSummary`]
//! - `GET {base}/report/{id}/` -> downloadable report artifact
//!
//! [`Backend`] is the seam the UI state machine is written against; [`HttpBackend`] is the
//! `reqwest` implementation used by the web and desktop shells.

mod client;
mod config;
mod error;
mod types;

pub use client::{Backend, HttpBackend};
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::{ApiError, UPLOAD_FAILED_FALLBACK, UPLOAD_UNREACHABLE_MESSAGE};
pub use types::{RawFile, SummaryId, TypeDistribution, UploadSummary};

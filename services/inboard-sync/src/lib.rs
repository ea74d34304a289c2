//! Inboard sync - file-to-database synchronization
//!
//! Walks a local directory of dashboard HTML files, computes a content hash
//! per file, and upserts changed files into the hosted `dashboards` table.
//! Files whose stored hash already matches are skipped; a failure on one
//! file never aborts the rest of the run.

pub mod config;
pub mod error;
pub mod io;
pub mod supabase;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use io::{HttpClient, ReqwestHttpClient};
pub use supabase::SupabaseClient;
pub use sync::{sync_directory, SyncReport};

//! Directory scan and hash-diff upsert loop

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Utc;
use inboard_core::DashboardRow;
use md5::{Digest, Md5};
use regex::Regex;

use crate::supabase::SupabaseClient;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").expect("title pattern is valid"));

/// Counts for one sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Outcome for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Synced,
    Skipped,
}

/// MD5 content hash as lowercase hex
pub fn content_hash(content: &str) -> String {
    let digest = Md5::digest(content.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

/// Naive title extraction: first `<title>` tag, falling back to the filename
pub fn extract_title(content: &str, fallback: &str) -> String {
    TITLE_RE
        .captures(content)
        .map(|captures| captures[1].trim().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Enumerate `*.html` files in a directory, sorted by name
pub fn scan_dashboards(dir: &Path) -> crate::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        crate::SyncError::Config(format!("Cannot read dashboard directory {:?}: {}", dir, e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_html = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if path.is_file() && is_html {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Sync every HTML file in the directory, one upsert at a time
///
/// A failure on one file is logged and counted; the loop always reaches the
/// remaining files. Only a failure to scan the directory itself aborts.
pub async fn sync_directory(
    client: &SupabaseClient,
    dir: &Path,
    dry_run: bool,
) -> crate::Result<SyncReport> {
    let files = scan_dashboards(dir)?;
    tracing::info!("Found {} HTML files in {:?}", files.len(), dir);

    let mut report = SyncReport::default();
    for path in &files {
        let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping {:?}: non-UTF-8 filename", path);
            report.failed += 1;
            continue;
        };

        match sync_file(client, path, id, dry_run).await {
            Ok(FileOutcome::Skipped) => {
                tracing::debug!("Skipped {} (no changes)", id);
                report.skipped += 1;
            }
            Ok(FileOutcome::Synced) => {
                tracing::info!("Synced {}", id);
                report.synced += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to sync {}: {}", id, e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

async fn sync_file(
    client: &SupabaseClient,
    path: &Path,
    id: &str,
    dry_run: bool,
) -> crate::Result<FileOutcome> {
    let content = std::fs::read_to_string(path)?;
    let hash = content_hash(&content);

    // A failed lookup is treated as "no stored row": the upsert settles it.
    let existing = match client.fetch_hash(id).await {
        Ok(existing) => existing,
        Err(e) => {
            tracing::debug!("Hash lookup for {} failed ({}), treating as new", id, e);
            None
        }
    };

    if existing.as_deref() == Some(hash.as_str()) {
        return Ok(FileOutcome::Skipped);
    }

    if dry_run {
        tracing::info!("[dry-run] would sync {}", id);
        return Ok(FileOutcome::Synced);
    }

    let row = DashboardRow {
        id: id.to_string(),
        title: extract_title(&content, id),
        content,
        hash,
        updated_at: Utc::now().to_rfc3339(),
    };
    client.upsert_dashboard(&row).await?;
    Ok(FileOutcome::Synced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::SyncConfig;
    use crate::io::{HttpResponse, MockHttpClient};

    fn test_client(mock: MockHttpClient) -> SupabaseClient {
        let config = SyncConfig {
            supabase_url: "https://proj.supabase.co".to_string(),
            service_key: "service-key".to_string(),
        };
        SupabaseClient::new(&config, Arc::new(mock))
    }

    fn hash_response(hash: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: format!(r#"[{{"hash": "{hash}"}}]"#),
        }
    }

    fn no_row_response() -> HttpResponse {
        HttpResponse {
            status: 200,
            body: "[]".to_string(),
        }
    }

    fn created_response() -> HttpResponse {
        HttpResponse {
            status: 201,
            body: String::new(),
        }
    }

    #[test]
    fn content_hash_matches_known_md5() {
        // md5("hello") is a fixed reference value
        assert_eq!(content_hash("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn extract_title_finds_first_tag() {
        let html = "<html><head><title> Revenue </title><title>Other</title></head></html>";
        assert_eq!(extract_title(html, "f.html"), "Revenue");
    }

    #[test]
    fn extract_title_falls_back_to_filename() {
        assert_eq!(extract_title("<html></html>", "f.html"), "f.html");
    }

    #[test]
    fn extract_title_does_not_span_lines() {
        // The naive pattern stays on one line, like the title it replaces
        let html = "<title>Line\nBreak</title>";
        assert_eq!(extract_title(html, "f.html"), "f.html");
    }

    #[test]
    fn scan_finds_only_html_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "x").unwrap();
        std::fs::write(dir.path().join("a.HTML"), "x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("sub.html")).unwrap();

        let files = scan_dashboards(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.HTML", "b.html"]);
    }

    #[test]
    fn scan_missing_directory_is_an_error() {
        let err = scan_dashboards(Path::new("/nonexistent/dashboards")).unwrap_err();
        assert!(err.to_string().contains("dashboard directory"));
    }

    #[tokio::test]
    async fn unchanged_file_is_skipped() {
        let content = "<html><title>A</title></html>";
        let stored = content_hash(content);

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), content).unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(move |_, _| {
                let stored = stored.clone();
                Box::pin(async move { Ok(hash_response(&stored)) })
            });
        // No expect_post_json: an upsert would panic the mock.

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(
            report,
            SyncReport {
                synced: 0,
                skipped: 1,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn changed_file_is_upserted_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "<title>A</title>new content").unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Box::pin(async { Ok(hash_response("stale-hash")) }));
        mock.expect_post_json()
            .times(1)
            .withf(|_, _, body| body.contains(r#""id":"a.html""#) && body.contains(r#""title":"A""#))
            .returning(|_, _, _| Box::pin(async { Ok(created_response()) }));

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(report.synced, 1);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn new_file_is_upserted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "fresh").unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Box::pin(async { Ok(no_row_response()) }));
        mock.expect_post_json()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(created_response()) }));

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(report.synced, 1);
    }

    #[tokio::test]
    async fn upsert_failure_does_not_abort_remaining_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "first").unwrap();
        std::fs::write(dir.path().join("b.html"), "second").unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Box::pin(async { Ok(no_row_response()) }));
        mock.expect_post_json()
            .withf(|_, _, body| body.contains("a.html"))
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 500,
                        body: "boom".to_string(),
                    })
                })
            });
        mock.expect_post_json()
            .withf(|_, _, body| body.contains("b.html"))
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(created_response()) }));

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(report.synced, 1);
        assert_eq!(report.failed, 1);
    }

    #[tokio::test]
    async fn failed_hash_lookup_falls_through_to_upsert() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "content").unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async { Err(crate::SyncError::Http("connection refused".to_string())) })
        });
        mock.expect_post_json()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(created_response()) }));

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(report.synced, 1);
    }

    #[tokio::test]
    async fn dry_run_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "content").unwrap();

        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Box::pin(async { Ok(no_row_response()) }));
        // No expect_post_json: a write would panic the mock.

        let report = sync_directory(&test_client(mock), dir.path(), true)
            .await
            .unwrap();
        assert_eq!(report.synced, 1);
    }

    #[tokio::test]
    async fn empty_directory_reports_zero_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockHttpClient::new();

        let report = sync_directory(&test_client(mock), dir.path(), false)
            .await
            .unwrap();
        assert_eq!(report, SyncReport::default());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hash_is_deterministic(content in ".*") {
                prop_assert_eq!(content_hash(&content), content_hash(&content));
            }

            #[test]
            fn single_byte_change_changes_hash(content in ".*", extra in "[a-z]") {
                let changed = format!("{content}{extra}");
                prop_assert_ne!(content_hash(&content), content_hash(&changed));
            }

            #[test]
            fn hash_is_32_hex_chars(content in ".*") {
                let hash = content_hash(&content);
                prop_assert_eq!(hash.len(), 32);
                prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }
}

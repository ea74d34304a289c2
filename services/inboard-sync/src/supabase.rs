//! REST client for the `dashboards` table

use std::sync::Arc;

use inboard_core::DashboardRow;
use serde::Deserialize;

use crate::config::SyncConfig;
use crate::io::HttpClient;

/// Row projection for the hash lookup
#[derive(Debug, Deserialize)]
struct HashRow {
    hash: Option<String>,
}

/// Client for the hosted dashboards table, authenticated with the
/// service-role key
pub struct SupabaseClient {
    base_url: String,
    service_key: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(config: &SyncConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            service_key: config.service_key.clone(),
            http,
        }
    }

    /// Fetch the stored content hash for a dashboard id, None if absent
    pub async fn fetch_hash(&self, id: &str) -> crate::Result<Option<String>> {
        let url = format!(
            "{}/rest/v1/dashboards?select=hash&id=eq.{}",
            self.base_url, id
        );
        let bearer = format!("Bearer {}", self.service_key);
        let headers = [
            ("apikey", self.service_key.as_str()),
            ("Authorization", bearer.as_str()),
        ];

        let response = self.http.get(&url, &headers).await?;
        if response.status != 200 {
            return Err(crate::SyncError::Http(format!(
                "Hash lookup for {} returned status {}: {}",
                id, response.status, response.body
            )));
        }

        let rows: Vec<HashRow> = serde_json::from_str(&response.body)?;
        Ok(rows.into_iter().next().and_then(|r| r.hash))
    }

    /// Insert or update a dashboard row, keyed by id
    pub async fn upsert_dashboard(&self, row: &DashboardRow) -> crate::Result<()> {
        let url = format!("{}/rest/v1/dashboards", self.base_url);
        let body = serde_json::to_string(row)?;
        let bearer = format!("Bearer {}", self.service_key);
        let headers = [
            ("apikey", self.service_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Prefer", "resolution=merge-duplicates"),
        ];

        let response = self.http.post_json(&url, &headers, &body).await?;
        if !(200..300).contains(&response.status) {
            return Err(crate::SyncError::Http(format!(
                "Upsert of {} returned status {}: {}",
                row.id, response.status, response.body
            )));
        }

        Ok(())
    }
}

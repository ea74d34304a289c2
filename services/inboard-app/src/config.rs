//! Compiled-in backend project settings
//!
//! The project URL and publishable key ship with the client; they are not
//! secrets. The service-role key never appears here.

pub const SUPABASE_URL: &str = "https://ysfejltspyzpahqeorgt.supabase.co";
pub const SUPABASE_ANON_KEY: &str = "sb_publishable_topKCVKmrlcOXV28eij8eA_h4b67cF4";

/// False when the client was built without usable backend settings; the UI
/// then degrades to a static offline indicator.
pub fn is_configured() -> bool {
    SUPABASE_URL.starts_with("http") && !SUPABASE_ANON_KEY.is_empty()
}

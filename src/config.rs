use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_STATS_PAGE: &str = "/admin/statistics";

pub fn resolve_base_url() -> String {
    env::var("ADMIN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

pub fn resolve_stats_page_url(base_url: &str) -> Result<Url, url::ParseError> {
    let page = env::var("ADMIN_STATS_PAGE").unwrap_or_else(|_| DEFAULT_STATS_PAGE.to_string());
    Url::parse(base_url)?.join(&page)
}

pub fn resolve_download_path() -> PathBuf {
    env::var("ADMIN_DOWNLOAD_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("statistics-export.json"))
}

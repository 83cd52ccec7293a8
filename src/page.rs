use crate::endpoints;
use crate::errors::ClientError;
use reqwest::Client;
use url::Url;

/// The server-rendered statistics view the admin is looking at. The URL is
/// the only piece of view state the client keeps; everything else comes back
/// from the server on each fetch.
pub struct StatsPage {
    client: Client,
    current: Url,
}

impl StatsPage {
    pub fn new(current: Url) -> Self {
        Self {
            client: Client::new(),
            current,
        }
    }

    pub fn current_url(&self) -> &Url {
        &self.current
    }

    /// Sets or clears the `student_id` query parameter on the current URL.
    /// Other query parameters are left alone.
    pub fn set_student_filter(&mut self, student_id: Option<&str>) -> &Url {
        self.current = with_student_filter(&self.current, student_id);
        &self.current
    }

    /// Re-fetches the current URL, discarding the body.
    pub async fn reload(&self) -> Result<(), ClientError> {
        let response = self.client.get(self.current.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::status(response.status()));
        }
        Ok(())
    }

    pub fn download_url(&self) -> Url {
        let mut url = self.current.clone();
        url.set_path(endpoints::DOWNLOAD_STATISTICS);
        url.set_query(None);
        url
    }

    pub async fn download(&self) -> Result<Vec<u8>, ClientError> {
        let response = self.client.get(self.download_url()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::status(response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

pub fn with_student_filter(url: &Url, student_id: Option<&str>) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .filter(|(name, _)| name != "student_id")
        .collect();
    if let Some(id) = student_id {
        pairs.push(("student_id".to_string(), id.to_string()));
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(name, value)| (name, value)));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_appends_after_existing_query() {
        let url = Url::parse("https://x/y?foo=bar").unwrap();
        let next = with_student_filter(&url, Some("42"));
        assert_eq!(next.as_str(), "https://x/y?foo=bar&student_id=42");
    }

    #[test]
    fn clearing_filter_drops_the_query_entirely() {
        let url = Url::parse("https://x/y?student_id=42").unwrap();
        let next = with_student_filter(&url, None);
        assert_eq!(next.as_str(), "https://x/y");
    }

    #[test]
    fn clearing_filter_keeps_other_parameters() {
        let url = Url::parse("https://x/y?foo=bar&student_id=42").unwrap();
        let next = with_student_filter(&url, None);
        assert_eq!(next.as_str(), "https://x/y?foo=bar");
    }

    #[test]
    fn setting_filter_replaces_previous_value() {
        let url = Url::parse("https://x/y?student_id=1").unwrap();
        let next = with_student_filter(&url, Some("2"));
        assert_eq!(next.as_str(), "https://x/y?student_id=2");
    }

    #[test]
    fn download_url_ignores_current_view_state() {
        let page = StatsPage::new(Url::parse("http://host/admin/statistics?student_id=7").unwrap());
        assert_eq!(
            page.download_url().as_str(),
            "http://host/api/admin/statistics/download"
        );
    }
}

use reqwest::StatusCode;

#[derive(Debug)]
pub struct ClientError {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            message: format!("server responded with {status}"),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

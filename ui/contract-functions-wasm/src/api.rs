//! HTTP fragment client.
//!
//! Both the functions panel and read results come back as server-rendered
//! HTML fragments fetched with `GET`.

use gloo_net::http::Request;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("fetch error: {0}")]
    Transport(String),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("body error: {0}")]
    Body(String),
}

impl FetchError {
    /// Text shown in place of the panel when loading fails.
    pub fn status_text(&self) -> String {
        match self {
            Self::Status { status_text, .. } if !status_text.is_empty() => status_text.clone(),
            Self::Status { status, .. } => status.to_string(),
            Self::Transport(_) | Self::Body(_) => "error".to_owned(),
        }
    }
}

/// GET `url` with the given query pairs and return the body as text.
pub async fn get_html(url: &str, params: &[(&'static str, String)]) -> Result<String, FetchError> {
    let response = Request::get(url)
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_prefers_server_reason() {
        let err = FetchError::Status {
            status: 404,
            status_text: "Not Found".to_owned(),
        };
        assert_eq!(err.status_text(), "Not Found");

        let bare = FetchError::Status {
            status: 502,
            status_text: String::new(),
        };
        assert_eq!(bare.status_text(), "502");
        assert_eq!(FetchError::Transport("offline".to_owned()).status_text(), "error");
    }
}

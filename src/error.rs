use crate::structs::Resource;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(StatusCode),
}

/// Terminal failure of one fetch attempt. Never returned to the caller that
/// triggered the fetch; see [`crate::ResourceClient::errors`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{resource} fetch from {url} failed: {source}")]
    Transport {
        resource: Resource,
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("{resource} from {url} could not be decoded: {source}")]
    Decode {
        resource: Resource,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Transport { resource, .. } | FetchError::Decode { resource, .. } => {
                *resource
            }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Decode { url, .. } => url,
        }
    }
}

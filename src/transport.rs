use crate::error::TransportError;
use reqwest::{Client, Method};
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            form: Vec::new(),
        }
    }

    pub fn post_form<K, V>(url: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            method: Method::POST,
            url: url.into(),
            form: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Something that can carry a [`Request`] and hand back the response body.
///
/// Shared by every fetch of a client, so it must accept concurrent calls.
pub trait HttpTransport: Send + Sync + 'static {
    fn execute(&self, request: Request)
        -> impl Future<Output = Result<String, TransportError>> + Send;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().gzip(true).cookie_store(true).build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<String, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        Ok(response.text().await?)
    }
}

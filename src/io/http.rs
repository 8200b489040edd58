use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::source::{SchemaRetrievalError, SchemaSource};

const USER_AGENT: &str = concat!("schemacard/", env!("CARGO_PKG_VERSION"));

/// Schema text published as CSV at an HTTP(S) URL.
#[derive(Debug, Clone)]
pub struct HttpSchemaSource {
    url: Url,
    http: Client,
}

impl HttpSchemaSource {
    pub fn new(url: Url) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { url, http })
    }

    pub fn parse(url: &str) -> anyhow::Result<Self> {
        Self::new(Url::parse(url)?)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl SchemaSource for HttpSchemaSource {
    fn origin(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_schema_text(&self) -> Result<String, SchemaRetrievalError> {
        debug!(url = %self.url, "fetching schema");
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| SchemaRetrievalError::transport(self.origin(), err))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "schema request was not successful");
            return Err(SchemaRetrievalError::status(self.origin(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| SchemaRetrievalError::transport(self.origin(), err))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    fn local_source(url: &str) -> HttpSchemaSource {
        HttpSchemaSource {
            url: Url::parse(url).unwrap(),
            http: Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Answers a single request with `response` and returns the URL to fetch.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/schema.csv")
    }

    #[tokio::test]
    async fn success_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 11\r\nconnection: close\r\n\r\nh\nName,text",
        );
        let text = local_source(&url).fetch_schema_text().await.unwrap();
        assert_eq!(text, "h\nName,text");
    }

    #[tokio::test]
    async fn not_found_is_a_status_failure() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        let err = local_source(&url).fetch_schema_text().await.unwrap_err();
        match err {
            SchemaRetrievalError::Status { origin, status } => {
                assert_eq!(status, 404);
                assert_eq!(origin, url);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_failure() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = local_source(&format!("http://127.0.0.1:{port}/schema.csv"))
            .fetch_schema_text()
            .await
            .unwrap_err();
        assert!(matches!(err, SchemaRetrievalError::Transport { .. }));
    }
}

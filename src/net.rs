use crate::core::{Transport, ViewerError};
use gloo_net::http::{Request, Response};

/// Browser `fetch` via gloo-net.
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

async fn read_ok(url: &str, resp: Response) -> Result<String, ViewerError> {
    if !resp.ok() {
        return Err(ViewerError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    resp.text().await.map_err(|e| ViewerError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })
}

impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ViewerError> {
        let transport_err = |e: gloo_net::Error| ViewerError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };
        let resp = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        read_ok(url, resp).await
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<String, ViewerError> {
        let resp = Request::get(url)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ViewerError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        read_ok(url, resp).await
    }
}

use std::time::{Duration, Instant};

use log::info;
use poll_promise::Promise;
use reqwest::blocking::Client;
use url::Url;

use crate::data::response::{AnalysisResponse, ResponseHeader};

/// Form field holding the resource to analyze.
pub const URI_FIELD: &str = "uri";
/// Form field holding one serialized `"<name>:<value>"` request
/// header; repeated once per editor row.
pub const HEADER_FIELD: &str = "req_hdr";

#[derive(Clone)]
pub struct Runner {
    client: Client,
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new()
    }
}

impl Runner {
    pub fn new() -> Self {
        Runner {
            client: Client::builder()
                .tcp_nodelay(true)
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
        }
    }

    /// The submitted form pairs: the resource URI first, then one
    /// header field per serialized entry, in row order.
    pub fn build_form(uri: &str, header_lines: &[String]) -> Vec<(String, String)> {
        let mut form = vec![(URI_FIELD.to_string(), uri.to_string())];
        for line in header_lines {
            form.push((HEADER_FIELD.to_string(), line.clone()));
        }
        form
    }

    /// Submits one analysis request to the service endpoint. The
    /// promise resolves off the UI thread; callers poll it each frame.
    pub fn analyze(
        &self,
        endpoint: String,
        uri: String,
        header_lines: Vec<String>,
    ) -> Promise<anyhow::Result<AnalysisResponse>> {
        let client = self.client.clone();
        Promise::spawn_thread("analyze", move || {
            let endpoint = Url::parse(endpoint.as_str())?;
            let form = Self::build_form(uri.as_str(), &header_lines);
            info!("submitting analysis of {} to {}", uri, endpoint);
            let start_time = Instant::now();
            let response = client.post(endpoint).form(&form).send()?;
            let status = response.status();
            let headers = ResponseHeader::new_from_map(response.headers());
            let body = response.text()?;
            Ok(AnalysisResponse {
                status: status.as_u16(),
                status_text: status.to_string(),
                headers,
                body,
                elapsed_ms: start_time.elapsed().as_millis(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_starts_with_uri_then_one_field_per_header() {
        let form = Runner::build_form(
            "https://example.net/",
            &["Accept-Language:en".to_string(), "X-Custom:42".to_string()],
        );
        assert_eq!(
            form,
            vec![
                ("uri".to_string(), "https://example.net/".to_string()),
                ("req_hdr".to_string(), "Accept-Language:en".to_string()),
                ("req_hdr".to_string(), "X-Custom:42".to_string()),
            ]
        );
    }
}

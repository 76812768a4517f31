use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseHeader {
    pub name: String,
    pub value: String,
}

impl ResponseHeader {
    pub fn new_from_map(headers: &HeaderMap) -> Vec<ResponseHeader> {
        headers
            .iter()
            .map(|(name, value)| ResponseHeader {
                name: name.to_string(),
                value: value.to_str().unwrap_or_default().to_string(),
            })
            .collect()
    }

    /// The header as one raw `Name: value` line.
    pub fn raw_line(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// What the analysis service sent back for one submission.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<ResponseHeader>,
    pub body: String,
    pub elapsed_ms: u128,
}

impl AnalysisResponse {
    /// Raw `Set-Cookie` lines, in response order. Non-empty exactly
    /// when the cookie-copy action should be offered.
    pub fn set_cookie_lines(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|header| header.name.eq_ignore_ascii_case("set-cookie"))
            .map(ResponseHeader::raw_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cookie_lines_filters_case_insensitively() {
        let response = AnalysisResponse {
            headers: vec![
                ResponseHeader {
                    name: "content-type".to_string(),
                    value: "text/html".to_string(),
                },
                ResponseHeader {
                    name: "set-cookie".to_string(),
                    value: "session=xyz; Path=/".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            response.set_cookie_lines(),
            vec!["set-cookie: session=xyz; Path=/".to_string()]
        );
    }
}

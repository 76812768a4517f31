use std::fs::File;
use std::io::Read;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

/// User-facing labels and advisory texts. Kept in the config file so a
/// deployment can localize them; `{}` in the warning is replaced with
/// the header name.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiStrings {
    pub uri_label: String,
    pub analyze: String,
    pub add_header: String,
    pub copy_cookies: String,
    pub protected_warning: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        UiStrings {
            uri_label: "URI:".to_string(),
            analyze: "Analyze".to_string(),
            add_header: "add a request header".to_string(),
            copy_cookies: "copy cookies from response".to_string(),
            protected_warning:
                "Setting the {} request header can lead to unpredictable results.".to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    endpoint: String,
    prepopulated_headers: Vec<(String, String)>,
    strings: UiStrings,
}

impl Default for ConfigData {
    fn default() -> Self {
        ConfigData {
            endpoint: "https://redbot.org/".to_string(),
            prepopulated_headers: vec![],
            strings: UiStrings::default(),
        }
    }
}

impl ConfigData {
    pub fn load() -> Self {
        if let Some(home_dir) = dirs::home_dir() {
            let config_path = home_dir.join(APP_NAME).join("config.json");
            match File::open(config_path) {
                Ok(mut file) => {
                    let mut content = String::new();
                    match file.read_to_string(&mut content) {
                        Ok(_) => {
                            let result: serde_json::Result<Self> =
                                serde_json::from_str(content.as_str());
                            result.unwrap_or_else(|e| {
                                warn!("config.json is not usable: {}", e);
                                Self::default()
                            })
                        }
                        Err(_) => Self::default(),
                    }
                }
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn prepopulated_headers(&self) -> &[(String, String)] {
        &self.prepopulated_headers
    }

    pub fn strings(&self) -> &UiStrings {
        &self.strings
    }

    pub fn protected_warning(&self, header_name: &str) -> String {
        self.strings.protected_warning.replace("{}", header_name)
    }
}

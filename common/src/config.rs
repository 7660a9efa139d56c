use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::tag::DEFAULT_PAGE_SIZE;

// console configuration
//
// the webapp is a static bundle, so this is compiled in from carnus.toml
// rather than read at startup
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConsoleConfig {
    // root of the gallery api, e.g. https://abc.execute-api.../prod
    pub api_root: String,

    // images requested per gallery page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    pub auth: AuthConfig,
}

// hosted sign-in page (implicit grant)
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuthConfig {
    pub domain: String,
    pub client_id: String,

    // where the provider sends the browser back to, i.e. the /signin route
    pub redirect_uri: String,

    // where the provider sends the browser after signing out
    pub logout_uri: String,

    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_scope() -> String {
    String::from("openid email")
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            api_root: String::from("http://localhost:3000"),
            page_size: DEFAULT_PAGE_SIZE,
            auth: AuthConfig {
                domain: String::from("http://localhost:3000/auth"),
                client_id: String::new(),
                redirect_uri: String::from("http://localhost:8080/signin"),
                logout_uri: String::from("http://localhost:8080/"),
                scope: default_scope(),
            },
        }
    }
}

// same layout as the server-side configs, with everything under [config]
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: ConsoleConfig,
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn parse_config(doc: &str) -> Result<ConsoleConfig> {
    debug!("parsing console config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse console config")?;
    let config = data.config;

    if config.api_root.trim().is_empty() {
        bail!("api_root must not be empty");
    }

    if config.page_size == 0 {
        bail!("page_size must be at least 1");
    }

    debug!(api_root = %config.api_root, page_size = config.page_size, "parsed console config");
    Ok(config)
}

use gloo_net::http::{Request, RequestBuilder};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub mod image;
pub mod profile;
pub mod stats;
pub mod tag;

use image::ImageDetail;
use profile::{Profile, UpdateProfileReq, UpdateProfileResp};
use stats::Stats;
use tag::{SearchTagReq, SearchTagResp, Tag, TagWire};

// everything that can go wrong talking to the carnus api
//
// payloads are flattened to strings so that errors stay Clone + PartialEq and
// can sit in signals
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("session expired or not authorized")]
    Unauthorized,

    // the profile endpoint answers 418 when the avatar was changed too recently
    #[error("avatar cooldown still active")]
    CooldownActive,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

pub const STATUS_COOLDOWN: u16 = 418;

// map an http status onto the error taxonomy
//
// 404 is left as a generic Status so that individual endpoints can decide
// whether it means "nothing there yet" or a real failure
pub fn classify(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized),
        STATUS_COOLDOWN => Err(ApiError::CooldownActive),
        _ => Err(ApiError::Status {
            status,
            body: body.to_owned(),
        }),
    }
}

// percent-encode a single path segment or query value
//
// tag keys carry the '#' namespace marker and free-form label text, so neither
// can be dropped into the path as-is
pub fn encode_component(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }

    out
}

// serde helper for fields the backend sends as null instead of omitting
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// image ids are strings in practice, but older records stored them as numbers
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(val) => Ok(val),
        serde_json::Value::Number(val) => Ok(val.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

// ApiClient
//
// a thin handle around the api root and the bearer token handed out by the
// identity provider.  it is cheap to clone, so event handlers can move a copy
// into each spawned future
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    root: String,
    token: String,
}

impl ApiClient {
    pub fn new(root: impl Into<String>, token: impl Into<String>) -> Self {
        let root: String = root.into();

        ApiClient {
            root: root.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).header("Authorization", &format!("Bearer {}", self.token))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).header("Authorization", &format!("Bearer {}", self.token))
    }

    // send the request and return the status and raw body
    //
    // the body is always read as text first so that a bad payload is reported as
    // Malformed rather than being lumped in with transport failures
    async fn send(request: Request) -> Result<(u16, String), ApiError> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        debug!(status, len = body.len(), "received response");
        Ok((status, body))
    }

    async fn fetch<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let (status, body) = Self::send(request).await?;

        classify(status, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    // GET /tags
    #[instrument(skip(self))]
    pub async fn get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let wire: Vec<TagWire> = Self::fetch(self.get("tags").build()?).await?;

        Ok(wire.into_iter().map(Tag::from).collect())
    }

    // GET /tags/{key}?limit=N&next_token=T
    #[instrument(skip(self))]
    pub async fn search_tag(&self, req: &SearchTagReq) -> Result<SearchTagResp, ApiError> {
        let path = format!("tags/{}", encode_component(&req.tag_key));
        let limit = req.limit.to_string();

        let mut params = vec![("limit", limit.as_str())];
        if let Some(token) = &req.next_token {
            params.push(("next_token", token.as_str()));
        }

        Self::fetch(self.get(&path).query(params).build()?).await
    }

    // GET /image/{id}
    #[instrument(skip(self))]
    pub async fn get_image(&self, image_id: &str) -> Result<ImageDetail, ApiError> {
        let path = format!("image/{}", encode_component(image_id));

        Self::fetch(self.get(&path).build()?).await
    }

    // GET /profile
    //
    // a user who never saved anything has no record, which the backend reports as
    // a 404; that is not an error from our point of view
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        let (status, body) = Self::send(self.get("profile").build()?).await?;

        if status == 404 {
            debug!("no profile record yet");
            return Ok(None);
        }

        classify(status, &body)?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    // POST /profile
    #[instrument(skip_all)]
    pub async fn update_profile(
        &self,
        req: &UpdateProfileReq,
    ) -> Result<UpdateProfileResp, ApiError> {
        let result = Self::fetch(self.post("profile").json(req)?).await;

        if let Err(ApiError::CooldownActive) = result {
            warn!("profile update rejected by avatar cooldown");
        }

        result
    }

    // GET /stats
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        Self::fetch(self.get("stats").build()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_statuses() {
        assert_eq!(classify(200, ""), Ok(()));
        assert_eq!(classify(204, ""), Ok(()));
        assert_eq!(classify(401, ""), Err(ApiError::Unauthorized));
        assert_eq!(classify(403, ""), Err(ApiError::Unauthorized));
        assert_eq!(classify(418, "teapot"), Err(ApiError::CooldownActive));
        assert_eq!(
            classify(500, "boom"),
            Err(ApiError::Status {
                status: 500,
                body: String::from("boom")
            })
        );
    }

    #[test]
    fn components_are_encoded() {
        assert_eq!(encode_component("TAG#Dog"), "TAG%23Dog");
        assert_eq!(encode_component("Age 20-30"), "Age%2020-30");
        assert_eq!(encode_component("abc-123_x.y~"), "abc-123_x.y~");
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn client_joins_urls() {
        let client = ApiClient::new("https://example.com/Prod/", "token");

        assert_eq!(client.url("tags"), "https://example.com/Prod/tags");
        assert_eq!(client.url("/image/1"), "https://example.com/Prod/image/1");
    }

    #[test]
    fn malformed_bodies_are_distinct() {
        let err: ApiError = serde_json::from_str::<Vec<TagWire>>("{\"oops\": 1}")
            .unwrap_err()
            .into();

        assert!(matches!(err, ApiError::Malformed(_)));
    }
}

//! API client with lazy password-grant authentication

use crate::error::{ApiError, Result};
use crate::session::Session;
use crate::types::{AddPersonRequest, ImageQuery, PersonInfo};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration for the API client
///
/// Immutable after construction. `host` is the authority only
/// (e.g. `"faceid.example.com:8000"`); the API is served over plain HTTP.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Failures on the internal authenticated-POST path, wrapped per operation
/// into the public error kinds.
#[derive(Error, Debug)]
enum PostError {
    #[error("{0}")]
    Login(ApiError),

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("login did not yield an access token")]
    MissingToken,
}

/// Client for the FaceId face-recognition API
///
/// Owns the connection configuration and a transient bearer token. Every
/// remote operation funnels through one authenticated POST primitive that
/// logs in first if no token is held.
pub struct ApiClient {
    config: ClientConfig,
    session: Session,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.config.host, path)
    }

    /// Obtain a bearer token via the OAuth2 password grant
    ///
    /// A transport failure is `NoConnection`. An HTTP response without an
    /// `access_token` field (or with an undecodable body) is not an error,
    /// it just leaves the session unauthenticated.
    pub async fn login(&self) -> Result<()> {
        let url = self.url("o/token/");
        debug!(url = %url, username = %self.config.username, "requesting access token");

        let params = [
            ("grant_type", "password"),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self.http.post(&url).form(&params).send().await.map_err(|e| {
            warn!(error = %e, "login request failed");
            ApiError::NoConnection
        })?;

        if let Some(body) = decode_body(response).await {
            if let Some(token) = body.get("access_token").and_then(Value::as_str) {
                self.session.set_token(token.to_string());
                info!("access token acquired");
            }
        }

        Ok(())
    }

    /// Issue the authorized POST once a token is held
    async fn do_post<T>(
        &self,
        url: &str,
        body: Option<&T>,
        token: &str,
    ) -> std::result::Result<Option<PersonInfo>, PostError>
    where
        T: Serialize + ?Sized,
    {
        debug!(url = %url, "sending authenticated request");

        let mut request = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("bearer {token}"))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(PostError::Transport)?;
        Ok(decode_body(response).await)
    }

    /// Authenticated POST primitive: logs in first when no token is held,
    /// propagating the login error. An undecodable response body comes back
    /// as `None` ("no data"), never as an error.
    async fn post_json<T>(
        &self,
        path: &str,
        body: Option<&T>,
    ) -> std::result::Result<Option<PersonInfo>, PostError>
    where
        T: Serialize + ?Sized,
    {
        if !self.session.is_authenticated() {
            self.login().await.map_err(PostError::Login)?;
        }
        let token = self.session.token().ok_or(PostError::MissingToken)?;
        self.do_post(&self.url(path), body, &token).await
    }

    /// Fetch the attribute map stored for a person
    pub async fn get_person_info(&self, id: i64) -> Result<Option<PersonInfo>> {
        self.post_json::<()>(&format!("api/getPersonInfo/{id}"), None)
            .await
            .map_err(|e| ApiError::Api(e.to_string()))
    }

    /// Look up a person by face image (base64-encoded JPEG)
    ///
    /// `Ok(None)` means no match: the server reported a negative id or no id
    /// at all. Both collapse to the same no-match outcome without an error.
    pub async fn get_person_id(&self, image: &str) -> Result<Option<i64>> {
        let body = ImageQuery {
            image: image.to_string(),
        };
        let data = self
            .post_json("api/getPersonId", Some(&body))
            .await
            .map_err(|e| ApiError::Api(e.to_string()))?;

        let Some(data) = data else {
            return Ok(None);
        };
        if let Some(err) = data.get("err") {
            warn!(error = %err, "person lookup rejected");
            return Err(ApiError::Api(err_text(err)));
        }
        match data.get("id").and_then(Value::as_i64) {
            Some(id) if id >= 0 => Ok(Some(id)),
            _ => Ok(None),
        }
    }

    /// Replace a person's attribute map
    ///
    /// The server echoes the stored info back; the echo is passed through
    /// uninspected.
    pub async fn set_person_info(&self, id: i64, info: &PersonInfo) -> Result<Option<PersonInfo>> {
        self.post_json(&format!("api/setPersonInfo/{id}"), Some(info))
            .await
            .map_err(|e| ApiError::SetPersonInfo(e.to_string()))
    }

    /// Register a new person from face images and store their name
    ///
    /// Two-step chain: `addPerson` assigns the id from the images, then a
    /// follow-up `setPersonInfo` stores the name. A failure at either step,
    /// an `err` field in either response, or a missing id surfaces as
    /// `AddPerson`; the id is returned only when both steps complete clean.
    pub async fn add_person(&self, name: &str, images: Vec<String>) -> Result<i64> {
        let body = AddPersonRequest { images };
        let data = self
            .post_json("api/addPerson", Some(&body))
            .await
            .map_err(|e| ApiError::AddPerson(e.to_string()))?
            .ok_or_else(|| ApiError::AddPerson("unknown error".to_string()))?;

        if let Some(err) = data.get("err") {
            return Err(ApiError::AddPerson(err_text(err)));
        }
        let id = data
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ApiError::AddPerson("unknown error".to_string()))?;

        let mut info = PersonInfo::new();
        info.insert("name".to_string(), Value::String(name.to_string()));

        let echoed = self
            .set_person_info(id, &info)
            .await
            .map_err(|e| ApiError::AddPerson(e.to_string()))?
            .ok_or_else(|| ApiError::AddPerson("unknown error".to_string()))?;

        if let Some(err) = echoed.get("err") {
            return Err(ApiError::AddPerson(err_text(err)));
        }

        info!(id, name, "person registered");
        Ok(id)
    }

    /// Get the session handle (for inspection)
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Decode a response body leniently as a JSON object
///
/// Anything that is not a JSON object (transport truncation aside, decode
/// errors included) is "no data".
async fn decode_body(response: reqwest::Response) -> Option<PersonInfo> {
    let bytes = response.bytes().await.ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn err_text(err: &Value) -> String {
    match err.as_str() {
        Some(s) => s.to_string(),
        None => err.to_string(),
    }
}

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    catalog::{CategoryDto, DomainDto, ExamDto, SkillDto, SubjectDto, UniversityDto},
    request::{NewRequestDto, ResourceRequestDto},
    resource::{NewResourceDto, ResourceDto, ResourceFilter},
    user::{AuthTokenDto, GoogleLoginDto, UserDto},
};

static AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The API answered with a non-success status
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    /// The request could not be sent or the response body could not be decoded
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// HTTP client for the DigiBridge API.
///
/// Clones share the session token, so signing in through one clone authenticates every
/// other clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client for the API served at `base_url`, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub async fn universities(&self) -> Result<Vec<UniversityDto>, ClientError> {
        self.get("/api/universities").await
    }

    pub async fn domains(&self, university_id: i32) -> Result<Vec<DomainDto>, ClientError> {
        self.get(&format!("/api/universities/{}/domains", university_id))
            .await
    }

    pub async fn subjects(&self, domain_id: i32) -> Result<Vec<SubjectDto>, ClientError> {
        self.get(&format!("/api/domains/{}/subjects", domain_id)).await
    }

    pub async fn skill_categories(&self) -> Result<Vec<CategoryDto>, ClientError> {
        self.get("/api/skill-categories").await
    }

    pub async fn skills(&self, category_id: i32) -> Result<Vec<SkillDto>, ClientError> {
        self.get(&format!("/api/skill-categories/{}/skills", category_id))
            .await
    }

    pub async fn exam_categories(&self) -> Result<Vec<CategoryDto>, ClientError> {
        self.get("/api/exam-categories").await
    }

    pub async fn exams(&self, category_id: i32) -> Result<Vec<ExamDto>, ClientError> {
        self.get(&format!("/api/exam-categories/{}/exams", category_id))
            .await
    }

    /// Approved resources matching `filter`
    pub async fn resources(&self, filter: &ResourceFilter) -> Result<Vec<ResourceDto>, ClientError> {
        let request = self.request(Method::GET, "/api/resources").query(filter);

        Self::send(request).await
    }

    pub async fn submit_resource(&self, draft: &NewResourceDto) -> Result<ResourceDto, ClientError> {
        self.post("/api/resources", draft).await
    }

    pub async fn create_request(
        &self,
        draft: &NewRequestDto,
    ) -> Result<ResourceRequestDto, ClientError> {
        self.post("/api/requests", draft).await
    }

    pub async fn my_requests(&self) -> Result<Vec<ResourceRequestDto>, ClientError> {
        self.get("/api/requests/mine").await
    }

    /// Exchanges a Google ID token for a session, the returned token is not stored
    pub async fn google_login(&self, credential: &str) -> Result<AuthTokenDto, ClientError> {
        let payload = GoogleLoginDto {
            credential: credential.to_string(),
        };

        self.post("/api/auth/google", &payload).await
    }

    pub async fn current_user(&self) -> Result<UserDto, ClientError> {
        self.get("/api/auth/user").await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match self.token() {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Self::send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorDto>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| default_message(status));

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

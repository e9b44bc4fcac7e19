//! REST collaborator
//!
//! The wizards only talk to the [`Api`] trait; [`ApiClient`] is the
//! reqwest backed implementation used by the application.

pub mod models;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::catalog::Nationality;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use models::{
    ApplicantSummary, EmployerSignupPayload, EmployerSignupResponse, ErrorBody,
    JobSeekerProfilePayload, JobSeekerProfileResponse, JobSummary, SignupPayload, SignupResponse,
    SignupUserResponse,
};

const GENERIC_FAILURE: &str = "요청에 실패했습니다.";

#[async_trait]
pub trait Api: Send + Sync {
    async fn fetch_nationalities(&self) -> Result<Vec<Nationality>>;

    async fn signup(&self, payload: &SignupPayload) -> Result<SignupResponse>;

    async fn signup_employer(&self, payload: &EmployerSignupPayload)
        -> Result<EmployerSignupResponse>;

    async fn create_job_seeker_profile(
        &self,
        payload: &JobSeekerProfilePayload,
    ) -> Result<JobSeekerProfileResponse>;

    /// Postings shown to job seekers, filtered client-side.
    async fn list_jobs(&self) -> Result<Vec<JobSummary>>;

    /// Applicant cards shown to employers, filtered client-side.
    async fn list_applicants(&self) -> Result<Vec<ApplicantSummary>>;

    /// Basic information recorded at signup, shown on the resume page.
    async fn fetch_signup_user(&self, user_id: &str) -> Result<SignupUserResponse>;
}

/// Resolves a non-2xx body into [`Error::Api`].
///
/// The server `detail` wins when present, otherwise `fallback` is used.
pub fn error_from_body(status: u16, body: &str, fallback: &str) -> Error {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .map(|detail| detail.into_message())
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Error::Api { status, detail }
}

/// A client for the job-matching REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let builder = ReqwestClient::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());
        let client = builder.build()?;
        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::decode(response, fallback).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response, fallback).await
    }

    async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let err = error_from_body(status.as_u16(), &body, fallback);
        error!(status = status.as_u16(), "API request failed: {}", err);
        Err(err)
    }
}

#[async_trait]
impl Api for ApiClient {
    async fn fetch_nationalities(&self) -> Result<Vec<Nationality>> {
        let nationalities: Vec<Nationality> = self
            .get_json("/meta/nationalities", GENERIC_FAILURE)
            .await?;
        info!("Loaded {} nationalities", nationalities.len());
        Ok(nationalities)
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<SignupResponse> {
        self.post_json("/auth/signup", payload, crate::error::SIGNUP_FAILED)
            .await
    }

    async fn signup_employer(
        &self,
        payload: &EmployerSignupPayload,
    ) -> Result<EmployerSignupResponse> {
        self.post_json("/auth/signup/employer", payload, crate::error::SIGNUP_FAILED)
            .await
    }

    async fn create_job_seeker_profile(
        &self,
        payload: &JobSeekerProfilePayload,
    ) -> Result<JobSeekerProfileResponse> {
        self.post_json(
            "/job-seeker/profile",
            payload,
            crate::error::PROFILE_SAVE_FAILED,
        )
        .await
    }

    async fn list_jobs(&self) -> Result<Vec<JobSummary>> {
        self.get_json("/jobs", GENERIC_FAILURE).await
    }

    async fn list_applicants(&self) -> Result<Vec<ApplicantSummary>> {
        self.get_json("/job-seeker/profiles", GENERIC_FAILURE).await
    }

    async fn fetch_signup_user(&self, user_id: &str) -> Result<SignupUserResponse> {
        self.get_json(
            &format!("/auth/signup-user/{user_id}"),
            crate::error::RESUME_LOAD_FAILED,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_error_from_body_prefers_detail() {
        let err = error_from_body(400, r#"{"detail":"이미 가입된 이메일입니다."}"#, "Signup failed");
        assert_matches!(err, Error::Api { status: 400, ref detail } if detail == "이미 가입된 이메일입니다.");
    }

    #[test]
    fn test_error_from_body_falls_back() {
        let err = error_from_body(502, "<html>Bad Gateway</html>", "Signup failed");
        assert_matches!(err, Error::Api { status: 502, ref detail } if detail == "Signup failed");

        let err = error_from_body(400, r#"{"detail":""}"#, "Signup failed");
        assert_matches!(err, Error::Api { ref detail, .. } if detail == "Signup failed");
    }

    #[test]
    fn test_client_joins_paths() {
        let client = ApiClient::new(&AppConfig::default()).unwrap();
        assert_eq!(client.url("/auth/signup"), "http://localhost:8000/auth/signup");
    }
}

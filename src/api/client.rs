// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the studio REST API.

use super::{
    ApiError, ApiResult, Coach, CoachId, CompleteSession, Member, MemberId, NewCoach, NewGoal,
    NewMember, NewPlan, NewSession, Plan, PlanId, PlanProgress, SessionId, Specialization,
    StudioApi,
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP implementation of [`StudioApi`].
#[derive(Debug, Clone)]
pub struct HttpStudioApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStudioApi {
    /// Builds a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("IronStudio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one round trip and returns the JSON body, if any.
    ///
    /// `204 No Content` and empty bodies yield `None`. Non-success statuses
    /// become [`ApiError::Status`]; a body that is not JSON is kept as a JSON
    /// string so its text still reaches the user.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Option<Value>>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %path, "api request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;
        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ApiError::status(status.as_u16(), body));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(self.send::<()>(Method::GET, path, None).await?)
    }

    async fn post<B, T>(&self, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.send(Method::POST, path, body).await?)
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, path, None).await.map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> ApiResult<T> {
    let value = value.unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}

/// Collection endpoints keep their trailing slash to avoid redirects.
fn coaches_path(specialization: Option<Specialization>) -> String {
    match specialization {
        Some(spec) => format!("/coaches/?specialization={}", spec.as_str()),
        None => "/coaches/".to_string(),
    }
}

#[async_trait]
impl StudioApi for HttpStudioApi {
    async fn list_members(&self) -> ApiResult<Vec<Member>> {
        self.get("/members/").await
    }

    async fn get_member(&self, id: MemberId) -> ApiResult<Member> {
        self.get(&format!("/members/{id}")).await
    }

    async fn create_member(&self, body: NewMember) -> ApiResult<Member> {
        self.post("/members/", Some(&body)).await
    }

    async fn delete_member(&self, id: MemberId) -> ApiResult<()> {
        self.delete(&format!("/members/{id}")).await
    }

    async fn add_goal(&self, member_id: MemberId, body: NewGoal) -> ApiResult<Member> {
        self.post(&format!("/members/{member_id}/goals"), Some(&body))
            .await
    }

    async fn list_coaches(&self, specialization: Option<Specialization>) -> ApiResult<Vec<Coach>> {
        self.get(&coaches_path(specialization)).await
    }

    async fn get_coach(&self, id: CoachId) -> ApiResult<Coach> {
        self.get(&format!("/coaches/{id}")).await
    }

    async fn create_coach(&self, body: NewCoach) -> ApiResult<Coach> {
        self.post("/coaches/", Some(&body)).await
    }

    async fn delete_coach(&self, id: CoachId) -> ApiResult<()> {
        self.delete(&format!("/coaches/{id}")).await
    }

    async fn match_coach(&self, member_id: MemberId) -> ApiResult<Option<Coach>> {
        self.get(&format!("/coaches/match?member_id={member_id}"))
            .await
    }

    async fn create_plan(&self, body: NewPlan) -> ApiResult<Plan> {
        self.post("/plans/", Some(&body)).await
    }

    async fn get_plan(&self, id: PlanId) -> ApiResult<Plan> {
        self.get(&format!("/plans/{id}")).await
    }

    async fn activate_plan(&self, id: PlanId) -> ApiResult<Plan> {
        self.post::<(), _>(&format!("/plans/{id}/activate"), None)
            .await
    }

    async fn plan_progress(&self, id: PlanId) -> ApiResult<PlanProgress> {
        self.get(&format!("/plans/{id}/progress")).await
    }

    async fn add_session(&self, plan_id: PlanId, body: NewSession) -> ApiResult<Plan> {
        self.post(&format!("/plans/{plan_id}/sessions"), Some(&body))
            .await
    }

    async fn complete_session(
        &self,
        plan_id: PlanId,
        session_id: SessionId,
        body: CompleteSession,
    ) -> ApiResult<Plan> {
        self.post(
            &format!("/plans/{plan_id}/sessions/{session_id}/complete"),
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpStudioApi::new("http://localhost:8000/", Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn coaches_path_includes_filter() {
        assert_eq!(coaches_path(None), "/coaches/");
        assert_eq!(
            coaches_path(Some(Specialization::Yoga)),
            "/coaches/?specialization=YOGA"
        );
    }

    #[test]
    fn decode_null_as_missing_match() {
        let coach: Option<Coach> = decode(Some(Value::Null)).expect("null decodes");
        assert!(coach.is_none());
        let empty: Option<Coach> = decode(None).expect("empty decodes");
        assert!(empty.is_none());
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let result: ApiResult<Vec<Member>> = decode(Some(serde_json::json!({ "oops": 1 })));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}

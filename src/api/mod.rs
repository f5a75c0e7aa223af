// SPDX-License-Identifier: MPL-2.0
//! Boundary to the remote studio API.
//!
//! The views only talk to the [`StudioApi`] port. [`HttpStudioApi`] is the
//! production adapter over `reqwest`; tests plug in the in-memory
//! implementation from the `test_utils` module (`test-utils` feature).
//!
//! # Design Notes
//!
//! - The trait is object safe and `Send + Sync` so views can share an
//!   `Arc<dyn StudioApi>` and move clones into `Task` futures.
//! - Every method is a single network round trip with exactly one outcome.

mod client;
mod error;
pub mod types;

pub use client::HttpStudioApi;
pub use error::{ApiError, UNKNOWN_ERROR};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Shared handle used by the feature views.
pub type SharedApi = Arc<dyn StudioApi>;

/// Operations offered by the studio backend.
#[async_trait]
pub trait StudioApi: Send + Sync {
    // Members
    async fn list_members(&self) -> ApiResult<Vec<Member>>;
    async fn get_member(&self, id: MemberId) -> ApiResult<Member>;
    async fn create_member(&self, body: NewMember) -> ApiResult<Member>;
    async fn delete_member(&self, id: MemberId) -> ApiResult<()>;
    async fn add_goal(&self, member_id: MemberId, body: NewGoal) -> ApiResult<Member>;

    // Coaches
    async fn list_coaches(&self, specialization: Option<Specialization>) -> ApiResult<Vec<Coach>>;
    async fn get_coach(&self, id: CoachId) -> ApiResult<Coach>;
    async fn create_coach(&self, body: NewCoach) -> ApiResult<Coach>;
    async fn delete_coach(&self, id: CoachId) -> ApiResult<()>;
    /// Best coach for a member; `Ok(None)` is the "no match" business outcome.
    async fn match_coach(&self, member_id: MemberId) -> ApiResult<Option<Coach>>;

    // Plans
    async fn create_plan(&self, body: NewPlan) -> ApiResult<Plan>;
    async fn get_plan(&self, id: PlanId) -> ApiResult<Plan>;
    async fn activate_plan(&self, id: PlanId) -> ApiResult<Plan>;
    async fn plan_progress(&self, id: PlanId) -> ApiResult<PlanProgress>;
    async fn add_session(&self, plan_id: PlanId, body: NewSession) -> ApiResult<Plan>;
    async fn complete_session(
        &self,
        plan_id: PlanId,
        session_id: SessionId,
        body: CompleteSession,
    ) -> ApiResult<Plan>;
}

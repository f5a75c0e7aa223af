// SPDX-License-Identifier: MPL-2.0
//! Test utilities: an in-memory studio backend and sample records.
//!
//! [`InMemoryStudio`] implements [`StudioApi`] with the business rules the
//! real server applies (duplicate emails, coach matching, plan lifecycle), so
//! screens and end-to-end flows can be exercised without a network.

use crate::api::{
    ApiError, ApiResult, Coach, CoachId, CoachTier, CompleteSession, GoalType, Member, MemberId,
    MembershipTier, NewCoach, NewGoal, NewMember, NewPlan, NewSession, Plan, PlanId, PlanProgress,
    PlanStatus, PlannedExercise, SessionId, SessionStatus, Specialization, StudioApi,
    WorkoutSession,
};
use crate::api::{FitnessLevel, Goal};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Member with placeholder contact data; `id` 0 lets the store assign one.
pub fn sample_member(id: MemberId, first: &str, last: &str) -> Member {
    Member {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: String::new(),
        fitness_level: FitnessLevel::Beginner,
        membership_tier: MembershipTier::Free,
        membership_valid_until: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
        active_plan_id: None,
        goals: Vec::new(),
    }
}

/// Goal of the given type due on the first day of 2030.
pub fn sample_goal(goal_type: GoalType) -> Goal {
    Goal {
        id: None,
        goal_type,
        description: String::new(),
        target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
        achieved: false,
    }
}

/// Standard-tier coach with room for ten clients.
pub fn sample_coach(id: CoachId, first: &str, last: &str, specializations: &[Specialization]) -> Coach {
    Coach {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("coach.{}@example.com", last.to_lowercase()),
        bio: String::new(),
        tier: CoachTier::Standard,
        specializations: specializations.to_vec(),
        max_clients: 10,
        current_client_count: 0,
    }
}

/// Specializations serving a goal type.
fn specializations_for(goal: GoalType) -> &'static [Specialization] {
    match goal {
        GoalType::LoseWeight => &[Specialization::Cardio, Specialization::Nutrition],
        GoalType::BuildMuscle => &[Specialization::Strength, Specialization::Crossfit],
        GoalType::Endurance => &[Specialization::Cardio, Specialization::Crossfit],
        GoalType::Flexibility => &[Specialization::Yoga],
    }
}

fn can_accept(coach: &Coach, tier: MembershipTier) -> bool {
    coach.is_available() && !(coach.tier == CoachTier::Vip && tier != MembershipTier::Vip)
}

/// Best coach for `member`: most overlapping specializations, then fewest clients.
fn best_coach<'a>(member: &Member, coaches: impl Iterator<Item = &'a Coach>) -> Option<&'a Coach> {
    let mut wanted: Vec<Specialization> = member
        .goals
        .iter()
        .flat_map(|goal| specializations_for(goal.goal_type).iter().copied())
        .collect();
    wanted.sort_by_key(|s| s.as_str());
    wanted.dedup();

    coaches
        .filter(|coach| can_accept(coach, member.membership_tier))
        .map(|coach| {
            let overlap = coach
                .specializations
                .iter()
                .filter(|s| wanted.contains(s))
                .count();
            (coach, overlap)
        })
        .filter(|(_, overlap)| *overlap > 0)
        .min_by_key(|(coach, overlap)| (std::cmp::Reverse(*overlap), coach.current_client_count))
        .map(|(coach, _)| coach)
}

fn unprocessable(detail: String) -> ApiError {
    ApiError::status(422, json!({ "detail": detail }))
}

fn not_found(detail: String) -> ApiError {
    ApiError::status(404, json!({ "detail": detail }))
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    members: BTreeMap<MemberId, Member>,
    coaches: BTreeMap<CoachId, Coach>,
    plans: BTreeMap<PlanId, Plan>,
    offline: bool,
    requests: usize,
}

impl Store {
    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn plan_mut(&mut self, id: PlanId) -> ApiResult<&mut Plan> {
        self.plans
            .get_mut(&id)
            .ok_or_else(|| unprocessable(format!("Plan {id} not found")))
    }
}

/// In-memory [`StudioApi`].
#[derive(Debug, Default)]
pub struct InMemoryStudio {
    store: Mutex<Store>,
}

impl InMemoryStudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a member, assigning an id when `member.id` is 0.
    pub fn insert_member(&self, mut member: Member) -> MemberId {
        let mut store = self.store();
        if member.id == 0 {
            member.id = store.allocate();
        }
        let id = member.id;
        store.members.insert(id, member);
        id
    }

    /// Stores a coach, assigning an id when `coach.id` is 0.
    pub fn insert_coach(&self, mut coach: Coach) -> CoachId {
        let mut store = self.store();
        if coach.id == 0 {
            coach.id = store.allocate();
        }
        let id = coach.id;
        store.coaches.insert(id, coach);
        id
    }

    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.store().offline = offline;
    }

    /// Number of calls received so far, failed ones included.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.store().requests
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the store for one call, failing first when offline.
    fn call(&self) -> ApiResult<MutexGuard<'_, Store>> {
        let mut store = self.store();
        store.requests += 1;
        if store.offline {
            return Err(ApiError::transport("connection refused"));
        }
        Ok(store)
    }
}

#[async_trait]
impl StudioApi for InMemoryStudio {
    async fn list_members(&self) -> ApiResult<Vec<Member>> {
        Ok(self.call()?.members.values().cloned().collect())
    }

    async fn get_member(&self, id: MemberId) -> ApiResult<Member> {
        self.call()?
            .members
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(format!("Member {id} not found")))
    }

    async fn create_member(&self, body: NewMember) -> ApiResult<Member> {
        let mut store = self.call()?;
        if store.members.values().any(|m| m.email == body.email) {
            return Err(unprocessable(format!("Email '{}' already registered", body.email)));
        }
        let valid_until = body.membership_valid_until.unwrap_or_else(|| {
            let today = Utc::now().date_naive();
            today.checked_add_days(Days::new(30)).unwrap_or(today)
        });
        let member = Member {
            id: store.allocate(),
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            fitness_level: body.fitness_level,
            membership_tier: body.membership_tier,
            membership_valid_until: valid_until,
            active_plan_id: None,
            goals: Vec::new(),
        };
        store.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn delete_member(&self, id: MemberId) -> ApiResult<()> {
        self.call()?.members.remove(&id);
        Ok(())
    }

    async fn add_goal(&self, member_id: MemberId, body: NewGoal) -> ApiResult<Member> {
        let mut store = self.call()?;
        let next = store.allocate();
        let member = store
            .members
            .get_mut(&member_id)
            .ok_or_else(|| unprocessable(format!("Member {member_id} not found")))?;
        member.goals.push(Goal {
            id: Some(next),
            goal_type: body.goal_type,
            description: body.description,
            target_date: body.target_date,
            achieved: false,
        });
        Ok(member.clone())
    }

    async fn list_coaches(&self, specialization: Option<Specialization>) -> ApiResult<Vec<Coach>> {
        Ok(self
            .call()?
            .coaches
            .values()
            .filter(|c| specialization.is_none_or(|s| c.specializations.contains(&s)))
            .cloned()
            .collect())
    }

    async fn get_coach(&self, id: CoachId) -> ApiResult<Coach> {
        self.call()?
            .coaches
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(format!("Coach {id} not found")))
    }

    async fn create_coach(&self, body: NewCoach) -> ApiResult<Coach> {
        let mut store = self.call()?;
        if store.coaches.values().any(|c| c.email == body.email) {
            return Err(unprocessable(format!("Email '{}' already registered", body.email)));
        }
        let coach = Coach {
            id: store.allocate(),
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            bio: body.bio,
            tier: body.tier,
            specializations: body.specializations,
            max_clients: body.max_clients,
            current_client_count: 0,
        };
        store.coaches.insert(coach.id, coach.clone());
        Ok(coach)
    }

    async fn delete_coach(&self, id: CoachId) -> ApiResult<()> {
        self.call()?.coaches.remove(&id);
        Ok(())
    }

    async fn match_coach(&self, member_id: MemberId) -> ApiResult<Option<Coach>> {
        let store = self.call()?;
        let member = store
            .members
            .get(&member_id)
            .ok_or_else(|| unprocessable(format!("Member {member_id} not found")))?;
        Ok(best_coach(member, store.coaches.values()).cloned())
    }

    async fn create_plan(&self, body: NewPlan) -> ApiResult<Plan> {
        let mut store = self.call()?;
        let member = store
            .members
            .get(&body.member_id)
            .ok_or_else(|| unprocessable(format!("Member {} not found", body.member_id)))?;
        if let Some(active) = member.active_plan_id {
            return Err(unprocessable(format!(
                "Member {} already has an active plan ({active})",
                body.member_id
            )));
        }
        let plan = Plan {
            id: store.allocate(),
            member_id: body.member_id,
            coach_id: body.coach_id,
            name: body.name,
            status: PlanStatus::Draft,
            starts_at: body.starts_at,
            ends_at: body.ends_at,
            sessions: Vec::new(),
        };
        store.plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn get_plan(&self, id: PlanId) -> ApiResult<Plan> {
        self.call()?
            .plans
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(format!("Plan {id} not found")))
    }

    async fn activate_plan(&self, id: PlanId) -> ApiResult<Plan> {
        let mut store = self.call()?;
        let plan = store.plan_mut(id)?;
        if plan.status != PlanStatus::Draft {
            return Err(unprocessable(format!(
                "Only DRAFT plans can be activated; current status: {}",
                plan.status
            )));
        }
        plan.status = PlanStatus::Active;
        let plan = plan.clone();
        if let Some(member) = store.members.get_mut(&plan.member_id) {
            member.active_plan_id = Some(id);
        }
        Ok(plan)
    }

    async fn plan_progress(&self, id: PlanId) -> ApiResult<PlanProgress> {
        let store = self.call()?;
        let plan = store
            .plans
            .get(&id)
            .ok_or_else(|| not_found(format!("Plan {id} not found")))?;
        Ok(PlanProgress {
            plan_id: id,
            completion_pct: completion_pct(plan),
        })
    }

    async fn add_session(&self, plan_id: PlanId, body: NewSession) -> ApiResult<Plan> {
        let mut store = self.call()?;
        let session_id: SessionId = store.allocate();
        let plan = store.plan_mut(plan_id)?;
        if plan.status != PlanStatus::Draft {
            return Err(unprocessable(
                "Sessions can only be added to DRAFT plans".to_string(),
            ));
        }
        plan.sessions.push(WorkoutSession {
            id: session_id,
            name: body.name,
            scheduled_date: body.scheduled_date,
            status: SessionStatus::Pending,
            completed_at: None,
            notes: None,
            exercises: body
                .exercises
                .into_iter()
                .map(|ex| PlannedExercise {
                    exercise_id: ex.exercise_id,
                    name: ex.name,
                    sets: ex.sets,
                    reps: ex.reps,
                    rest_seconds: ex.rest_seconds,
                })
                .collect(),
        });
        Ok(plan.clone())
    }

    async fn complete_session(
        &self,
        plan_id: PlanId,
        session_id: SessionId,
        body: CompleteSession,
    ) -> ApiResult<Plan> {
        let mut store = self.call()?;
        let plan = store.plan_mut(plan_id)?;
        if plan.status != PlanStatus::Active {
            return Err(unprocessable(format!(
                "Cannot complete sessions on a {} plan",
                plan.status
            )));
        }
        let session = plan
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| unprocessable(format!("Session {session_id} not found")))?;
        if session.status != SessionStatus::Pending {
            return Err(unprocessable(format!(
                "Cannot complete session with status {}",
                session.status
            )));
        }
        session.status = SessionStatus::Completed;
        session.completed_at = Some(Utc::now());
        if body.notes.is_some() {
            session.notes = body.notes;
        }

        let all_done = plan
            .sessions
            .iter()
            .all(|s| matches!(s.status, SessionStatus::Completed | SessionStatus::Skipped));
        if all_done {
            plan.status = PlanStatus::Completed;
        }
        Ok(plan.clone())
    }
}

/// Share of completed or skipped sessions, in percent with two decimals.
fn completion_pct(plan: &Plan) -> f64 {
    if plan.sessions.is_empty() {
        return 0.0;
    }
    let done = plan.count_sessions(SessionStatus::Completed) + plan.count_sessions(SessionStatus::Skipped);
    let pct = done as f64 / plan.sessions.len() as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_with_goals(goals: &[GoalType]) -> Member {
        let mut member = sample_member(1, "Ada", "Lovelace");
        member.goals = goals.iter().copied().map(sample_goal).collect();
        member
    }

    #[test]
    fn best_coach_prefers_overlap_then_fewer_clients() {
        let member = member_with_goals(&[GoalType::LoseWeight]);
        let mut busy = sample_coach(1, "A", "Busy", &[Specialization::Cardio, Specialization::Nutrition]);
        busy.current_client_count = 5;
        let quiet = sample_coach(2, "B", "Quiet", &[Specialization::Cardio]);
        let mut calm = sample_coach(3, "C", "Calm", &[Specialization::Cardio, Specialization::Nutrition]);
        calm.current_client_count = 1;

        let coaches = [busy, quiet, calm];
        assert_eq!(best_coach(&member, coaches.iter()).map(|c| c.id), Some(3));
    }

    #[test]
    fn vip_coach_only_takes_vip_members() {
        let mut member = member_with_goals(&[GoalType::Flexibility]);
        let mut vip = sample_coach(1, "V", "Vip", &[Specialization::Yoga]);
        vip.tier = CoachTier::Vip;
        let coaches = [vip];

        assert!(best_coach(&member, coaches.iter()).is_none());
        member.membership_tier = MembershipTier::Vip;
        assert!(best_coach(&member, coaches.iter()).is_some());
    }

    #[test]
    fn full_coach_and_goal_less_member_never_match() {
        let mut full = sample_coach(1, "F", "Full", &[Specialization::Strength]);
        full.current_client_count = full.max_clients;
        let coaches = [full, sample_coach(2, "O", "Open", &[Specialization::Strength])];

        assert_eq!(
            best_coach(&member_with_goals(&[GoalType::BuildMuscle]), coaches.iter()).map(|c| c.id),
            Some(2)
        );
        assert!(best_coach(&member_with_goals(&[]), coaches.iter()).is_none());
    }

    #[test]
    fn completion_rounds_to_two_decimals() {
        let mut plan = Plan {
            id: 1,
            member_id: 1,
            coach_id: 1,
            name: "P".into(),
            status: PlanStatus::Active,
            starts_at: NaiveDate::default(),
            ends_at: NaiveDate::default(),
            sessions: Vec::new(),
        };
        assert_eq!(completion_pct(&plan), 0.0);

        let session = |id, status| WorkoutSession {
            id,
            name: "S".into(),
            scheduled_date: NaiveDate::default(),
            status,
            completed_at: None,
            notes: None,
            exercises: Vec::new(),
        };
        plan.sessions = vec![
            session(1, SessionStatus::Completed),
            session(2, SessionStatus::Pending),
            session(3, SessionStatus::Skipped),
        ];
        assert_eq!(completion_pct(&plan), 66.67);
    }

    #[tokio::test]
    async fn offline_store_fails_with_transport_error() {
        let studio = InMemoryStudio::new();
        studio.set_offline(true);
        let err = studio.list_members().await.expect_err("offline");
        assert_eq!(err.message(), "connection refused");
        assert_eq!(studio.request_count(), 1);
    }

    #[tokio::test]
    async fn unknown_member_match_is_unprocessable() {
        let studio = InMemoryStudio::new();
        let err = studio.match_coach(42).await.expect_err("no member");
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.message(), "Member 42 not found");
    }
}

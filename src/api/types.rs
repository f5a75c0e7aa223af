// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the studio API.
//!
//! Field names follow the JSON contract of the server; enums serialize as the
//! upper-case tokens the server uses (`"PREMIUM"`, `"CROSSFIT"`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type MemberId = i64;
pub type CoachId = i64;
pub type PlanId = i64;
pub type SessionId = i64;

/// Implements `Display` with the wire token and an `ALL` list for pickers.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the token used on the wire.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

wire_enum!(FitnessLevel {
    Beginner => "BEGINNER",
    Intermediate => "INTERMEDIATE",
    Advanced => "ADVANCED",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    #[default]
    Free,
    Premium,
    Vip,
}

wire_enum!(MembershipTier {
    Free => "FREE",
    Premium => "PREMIUM",
    Vip => "VIP",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    #[default]
    LoseWeight,
    BuildMuscle,
    Endurance,
    Flexibility,
}

wire_enum!(GoalType {
    LoseWeight => "LOSE_WEIGHT",
    BuildMuscle => "BUILD_MUSCLE",
    Endurance => "ENDURANCE",
    Flexibility => "FLEXIBILITY",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoachTier {
    #[default]
    Standard,
    Vip,
}

wire_enum!(CoachTier {
    Standard => "STANDARD",
    Vip => "VIP",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialization {
    Strength,
    Cardio,
    Yoga,
    Crossfit,
    Nutrition,
}

wire_enum!(Specialization {
    Strength => "STRENGTH",
    Cardio => "CARDIO",
    Yoga => "YOGA",
    Crossfit => "CROSSFIT",
    Nutrition => "NUTRITION",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

wire_enum!(PlanStatus {
    Draft => "DRAFT",
    Active => "ACTIVE",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Pending,
    Completed,
    Skipped,
}

wire_enum!(SessionStatus {
    Pending => "PENDING",
    Completed => "COMPLETED",
    Skipped => "SKIPPED",
});

// =============================================================================
// Members
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub description: String,
    pub target_date: NaiveDate,
    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub fitness_level: FitnessLevel,
    pub membership_tier: MembershipTier,
    pub membership_valid_until: NaiveDate,
    pub active_plan_id: Option<PlanId>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Member {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub fitness_level: FitnessLevel,
    pub membership_tier: MembershipTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_valid_until: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub description: String,
    pub target_date: NaiveDate,
}

// =============================================================================
// Coaches
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    pub tier: CoachTier,
    #[serde(default)]
    pub specializations: Vec<Specialization>,
    pub max_clients: u32,
    pub current_client_count: u32,
}

impl Coach {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Remaining client slots.
    #[must_use]
    pub fn open_slots(&self) -> u32 {
        self.max_clients.saturating_sub(self.current_client_count)
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.current_client_count < self.max_clients
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoach {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub tier: CoachTier,
    pub specializations: Vec<Specialization>,
    pub max_clients: u32,
}

// =============================================================================
// Plans
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: SessionId,
    pub name: String,
    pub scheduled_date: NaiveDate,
    pub status: SessionStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub member_id: MemberId,
    pub coach_id: CoachId,
    pub name: String,
    pub status: PlanStatus,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,
}

impl Plan {
    /// Number of sessions with the given status.
    #[must_use]
    pub fn count_sessions(&self, status: SessionStatus) -> usize {
        self.sessions.iter().filter(|s| s.status == status).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlan {
    pub member_id: MemberId,
    pub coach_id: CoachId,
    pub name: String,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub exercise_id: String,
}

impl Default for ExerciseInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: 3,
            reps: 10,
            rest_seconds: 60,
            exercise_id: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub name: String,
    pub scheduled_date: NaiveDate,
    pub exercises: Vec<ExerciseInput>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompleteSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanProgress {
    pub plan_id: PlanId,
    pub completion_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_parses_server_payload() {
        let payload = json!({
            "id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone": "+44 20 0000",
            "fitness_level": "INTERMEDIATE",
            "membership_tier": "VIP",
            "membership_valid_until": "2026-12-31",
            "active_plan_id": null,
            "goals": [{
                "id": 1,
                "type": "BUILD_MUSCLE",
                "description": "Gain 3kg",
                "target_date": "2026-06-01",
                "achieved": false
            }]
        });

        let member: Member = serde_json::from_value(payload).expect("valid member");
        assert_eq!(member.full_name(), "Ada Lovelace");
        assert_eq!(member.membership_tier, MembershipTier::Vip);
        assert_eq!(member.goals[0].goal_type, GoalType::BuildMuscle);
    }

    #[test]
    fn new_member_omits_missing_valid_until() {
        let body = NewMember {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.c".into(),
            phone: "1".into(),
            fitness_level: FitnessLevel::Beginner,
            membership_tier: MembershipTier::Free,
            membership_valid_until: None,
        };

        let value = serde_json::to_value(&body).expect("serializable");
        assert!(value.get("membership_valid_until").is_none());
        assert_eq!(value["fitness_level"], "BEGINNER");
    }

    #[test]
    fn coach_slot_helpers() {
        let coach = Coach {
            id: 1,
            first_name: "Sam".into(),
            last_name: "Stone".into(),
            email: "sam@example.com".into(),
            bio: String::new(),
            tier: CoachTier::Standard,
            specializations: vec![Specialization::Yoga],
            max_clients: 3,
            current_client_count: 3,
        };

        assert!(!coach.is_available());
        assert_eq!(coach.open_slots(), 0);
    }

    #[test]
    fn wire_tokens_match_display() {
        assert_eq!(GoalType::LoseWeight.to_string(), "LOSE_WEIGHT");
        assert_eq!(Specialization::ALL.len(), 5);
        assert_eq!(
            serde_json::to_value(Specialization::Crossfit).expect("serializable"),
            json!("CROSSFIT")
        );
    }
}

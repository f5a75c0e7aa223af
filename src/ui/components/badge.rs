// SPDX-License-Identifier: MPL-2.0
//! Small tinted pill for tiers, statuses and counts.

use crate::api::{CoachTier, MembershipTier, PlanStatus, SessionStatus};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Text};
use iced::{Color, Element, Padding};

pub fn badge<'a, Message: 'a>(label: impl Into<String>, color: Color) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding(Padding::from([2.0, spacing::XS]))
        .style(container_styles::badge(color))
        .into()
}

#[must_use]
pub fn membership_color(tier: MembershipTier) -> Color {
    match tier {
        MembershipTier::Free => palette::TIER_FREE,
        MembershipTier::Premium => palette::TIER_PREMIUM,
        MembershipTier::Vip => palette::TIER_VIP,
    }
}

#[must_use]
pub fn coach_tier_color(tier: CoachTier) -> Color {
    match tier {
        CoachTier::Standard => palette::TIER_FREE,
        CoachTier::Vip => palette::TIER_VIP,
    }
}

#[must_use]
pub fn plan_status_color(status: PlanStatus) -> Color {
    match status {
        PlanStatus::Draft => palette::GRAY_400,
        PlanStatus::Active => palette::SUCCESS_500,
        PlanStatus::Completed => palette::INFO_500,
        PlanStatus::Cancelled => palette::ERROR_500,
    }
}

#[must_use]
pub fn session_status_color(status: SessionStatus) -> Color {
    match status {
        SessionStatus::Pending => palette::WARNING_500,
        SessionStatus::Completed => palette::SUCCESS_500,
        SessionStatus::Skipped => palette::GRAY_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vip_tiers_share_color() {
        assert_eq!(membership_color(MembershipTier::Vip), coach_tier_color(CoachTier::Vip));
    }

    #[test]
    fn active_plan_is_success_colored() {
        assert_eq!(plan_status_color(PlanStatus::Active), palette::SUCCESS_500);
    }
}

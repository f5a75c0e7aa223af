// SPDX-License-Identifier: MPL-2.0
//! Members screen.
//!
//! Lists members with a text search and tier/level filters, creates and
//! deletes members, and shows a detail panel where goals are added. Every
//! request goes through the screen's single [`AsyncRunner`]; the member count
//! is reported to the application through a [`CallbackRelay`] so the sidebar
//! badge stays current without the callback ever driving a refetch.

use crate::api::{
    FitnessLevel, GoalType, Member, MemberId, MembershipTier, NewGoal, NewMember, SharedApi,
};
use crate::coordination::{AsyncRunner, CallbackRelay, RefetchTrigger};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, membership_color};
use crate::ui::components::form::{self, FilterOption};
use crate::ui::components::page;
use crate::ui::components::stat_card::{stat_card, stat_row};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::NotificationCenter;
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::{perform, Effect, Outcome};
use iced::widget::{scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::sync::Arc;

/// Text of the member creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub fitness_level: FitnessLevel,
    pub membership_tier: MembershipTier,
    /// Optional `YYYY-MM-DD` date.
    pub valid_until: String,
}

impl MemberForm {
    /// Builds the request body, or returns the i18n key of the problem.
    pub fn to_request(&self) -> Result<NewMember, &'static str> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            form::non_blank(&self.first_name),
            form::non_blank(&self.last_name),
            form::non_blank(&self.email),
        ) else {
            return Err("notification-form-incomplete");
        };

        let membership_valid_until = match form::non_blank(&self.valid_until) {
            None => None,
            Some(raw) => Some(form::parse_date(&raw).ok_or("notification-invalid-date")?),
        };

        Ok(NewMember {
            first_name,
            last_name,
            email,
            phone: self.phone.trim().to_string(),
            fitness_level: self.fitness_level,
            membership_tier: self.membership_tier,
            membership_valid_until,
        })
    }
}

/// Text of the add-goal form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub goal_type: GoalType,
    pub description: String,
    pub target_date: String,
}

impl GoalForm {
    pub fn to_request(&self) -> Result<NewGoal, &'static str> {
        if self.target_date.trim().is_empty() {
            return Err("notification-form-incomplete");
        }
        let target_date = form::parse_date(&self.target_date).ok_or("notification-invalid-date")?;
        Ok(NewGoal {
            goal_type: self.goal_type,
            description: self.description.trim().to_string(),
            target_date,
        })
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    FitnessLevel(FitnessLevel),
    MembershipTier(MembershipTier),
    ValidUntil(String),
}

#[derive(Debug, Clone)]
pub enum GoalField {
    GoalType(GoalType),
    Description(String),
    TargetDate(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Outcome<Vec<Member>>),
    SearchChanged(String),
    TierFilterSelected(FilterOption<MembershipTier>),
    LevelFilterSelected(FilterOption<FitnessLevel>),
    OpenForm,
    CloseForm,
    FormChanged(FormField),
    SubmitForm,
    Created(Outcome<Member>),
    Delete(MemberId),
    Deleted(MemberId, Outcome<()>),
    Select(MemberId),
    CloseDetail,
    OpenGoalForm,
    CloseGoalForm,
    GoalChanged(GoalField),
    SubmitGoal,
    GoalAdded(Outcome<Member>),
    ClearError,
}

/// Figures of the summary row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberStats {
    pub total: usize,
    pub free: usize,
    pub premium: usize,
    pub vip: usize,
    pub with_plan: usize,
}

impl MemberStats {
    pub fn of(members: &[Member]) -> Self {
        let by_tier = |tier| members.iter().filter(|m| m.membership_tier == tier).count();
        Self {
            total: members.len(),
            free: by_tier(MembershipTier::Free),
            premium: by_tier(MembershipTier::Premium),
            vip: by_tier(MembershipTier::Vip),
            with_plan: members.iter().filter(|m| m.active_plan_id.is_some()).count(),
        }
    }
}

pub struct State {
    api: SharedApi,
    notifications: NotificationCenter,
    runner: AsyncRunner,
    count_relay: CallbackRelay<usize>,
    load_trigger: RefetchTrigger<()>,
    members: Vec<Member>,
    search: String,
    tier_filter: Option<MembershipTier>,
    level_filter: Option<FitnessLevel>,
    form: Option<MemberForm>,
    selected: Option<MemberId>,
    goal_form: Option<GoalForm>,
}

impl State {
    pub fn new(api: SharedApi, notifications: NotificationCenter) -> Self {
        Self {
            api,
            notifications,
            runner: AsyncRunner::new(),
            count_relay: CallbackRelay::new(),
            load_trigger: RefetchTrigger::new(),
            members: Vec::new(),
            search: String::new(),
            tier_filter: None,
            level_filter: None,
            form: None,
            selected: None,
            goal_form: None,
        }
    }

    /// Installs the latest count callback. Never triggers a fetch.
    pub fn report_count_to<F>(&self, callback: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.count_relay.update(callback);
    }

    /// Loads the list the first time the screen is shown.
    pub fn activate(&mut self) -> Effect<Message> {
        if self.load_trigger.should_fetch(&()) {
            self.load()
        } else {
            None
        }
    }

    #[must_use]
    pub fn runner(&self) -> &AsyncRunner {
        &self.runner
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn form(&self) -> Option<&MemberForm> {
        self.form.as_ref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Member> {
        let id = self.selected?;
        self.members.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> MemberStats {
        MemberStats::of(&self.members)
    }

    /// Members matching the search text and both filters.
    #[must_use]
    pub fn visible_members(&self) -> Vec<&Member> {
        let query = self.search.to_lowercase();
        self.members
            .iter()
            .filter(|m| {
                format!("{} {} {}", m.first_name, m.last_name, m.email)
                    .to_lowercase()
                    .contains(&query)
            })
            .filter(|m| self.tier_filter.is_none_or(|tier| m.membership_tier == tier))
            .filter(|m| self.level_filter.is_none_or(|level| m.fitness_level == level))
            .collect()
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Effect<Message> {
        match message {
            Message::Refresh => self.load(),
            Message::Loaded(Ok(members)) => {
                self.members = members;
                if self.selected().is_none() {
                    self.selected = None;
                    self.goal_form = None;
                }
                None
            }
            Message::Loaded(Err(_)) => None,
            Message::SearchChanged(search) => {
                self.search = search;
                None
            }
            Message::TierFilterSelected(option) => {
                self.tier_filter = option.value;
                None
            }
            Message::LevelFilterSelected(option) => {
                self.level_filter = option.value;
                None
            }
            Message::OpenForm => {
                self.form.get_or_insert_with(MemberForm::default);
                None
            }
            Message::CloseForm => {
                self.form = None;
                None
            }
            Message::FormChanged(field) => {
                if let Some(form) = self.form.as_mut() {
                    match field {
                        FormField::FirstName(v) => form.first_name = v,
                        FormField::LastName(v) => form.last_name = v,
                        FormField::Email(v) => form.email = v,
                        FormField::Phone(v) => form.phone = v,
                        FormField::FitnessLevel(v) => form.fitness_level = v,
                        FormField::MembershipTier(v) => form.membership_tier = v,
                        FormField::ValidUntil(v) => form.valid_until = v,
                    }
                }
                None
            }
            Message::SubmitForm => {
                let body = match self.form.as_ref().map(MemberForm::to_request) {
                    Some(Ok(body)) => body,
                    Some(Err(key)) => {
                        self.notifications.warning(i18n.tr(key));
                        return None;
                    }
                    None => return None,
                };
                let api = Arc::clone(&self.api);
                let created = self
                    .runner
                    .execute_isolated(move || async move { api.create_member(body).await });
                perform(async move { Message::Created(created.await) })
            }
            Message::Created(Ok(member)) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-member-added",
                    &[("first", &member.first_name), ("last", &member.last_name)],
                ));
                self.form = None;
                self.load()
            }
            Message::Created(Err(message)) => {
                self.notifications.error(message);
                None
            }
            Message::Delete(id) => {
                let api = Arc::clone(&self.api);
                let deleted = self
                    .runner
                    .execute_isolated(move || async move { api.delete_member(id).await });
                perform(async move { Message::Deleted(id, deleted.await) })
            }
            Message::Deleted(id, Ok(())) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-member-deleted",
                    &[("id", &id.to_string())],
                ));
                if self.selected == Some(id) {
                    self.selected = None;
                    self.goal_form = None;
                }
                self.load()
            }
            // The error block already shows why.
            Message::Deleted(_, Err(_)) => None,
            Message::Select(id) => {
                if self.selected != Some(id) {
                    self.goal_form = None;
                }
                self.selected = Some(id);
                None
            }
            Message::CloseDetail => {
                self.selected = None;
                self.goal_form = None;
                None
            }
            Message::OpenGoalForm => {
                self.goal_form.get_or_insert_with(GoalForm::default);
                None
            }
            Message::CloseGoalForm => {
                self.goal_form = None;
                None
            }
            Message::GoalChanged(field) => {
                if let Some(goal) = self.goal_form.as_mut() {
                    match field {
                        GoalField::GoalType(v) => goal.goal_type = v,
                        GoalField::Description(v) => goal.description = v,
                        GoalField::TargetDate(v) => goal.target_date = v,
                    }
                }
                None
            }
            Message::SubmitGoal => {
                let Some(member_id) = self.selected else {
                    return None;
                };
                let body = match self.goal_form.as_ref().map(GoalForm::to_request) {
                    Some(Ok(body)) => body,
                    Some(Err(key)) => {
                        self.notifications.warning(i18n.tr(key));
                        return None;
                    }
                    None => return None,
                };
                let api = Arc::clone(&self.api);
                let updated = self
                    .runner
                    .execute_isolated(move || async move { api.add_goal(member_id, body).await });
                perform(async move { Message::GoalAdded(updated.await) })
            }
            Message::GoalAdded(Ok(member)) => {
                self.notifications.success(i18n.tr("notification-goal-added"));
                self.goal_form = None;
                self.selected = Some(member.id);
                if let Some(slot) = self.members.iter_mut().find(|m| m.id == member.id) {
                    *slot = member;
                }
                None
            }
            Message::GoalAdded(Err(message)) => {
                self.notifications.error(message);
                None
            }
            Message::ClearError => {
                self.runner.clear_error();
                None
            }
        }
    }

    fn load(&mut self) -> Effect<Message> {
        let api = Arc::clone(&self.api);
        let relay = self.count_relay.clone();
        let members = self
            .runner
            .execute_isolated(move || async move { api.list_members().await });
        perform(async move {
            let members = members.await;
            if let Ok(list) = &members {
                relay.invoke(list.len());
            }
            Message::Loaded(members)
        })
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let pending = self.runner.is_pending();
        let idle = |message: Message| (!pending).then_some(message);
        let stats = self.stats();

        let mut actions: Vec<Element<'a, Message>> = Vec::new();
        if pending {
            actions.push(page::muted(i18n.tr("loading")).into());
        }
        actions.push(
            page::action(i18n.tr("action-refresh"), idle(Message::Refresh), button_styles::secondary)
                .into(),
        );
        actions.push(
            page::action(i18n.tr("members-add"), Some(Message::OpenForm), button_styles::primary)
                .into(),
        );

        let header = page::header(
            i18n.tr("members-title"),
            Some(i18n.tr_with_args(
                "members-subtitle",
                &[
                    ("total", &stats.total.to_string()),
                    ("with_plan", &stats.with_plan.to_string()),
                ],
            )),
            actions,
        );

        let stats_row = stat_row(vec![
            stat_card(i18n.tr("stat-total"), stats.total, Some(palette::BRAND_500)),
            stat_card(i18n.tr("stat-free"), stats.free, Some(palette::TIER_FREE)),
            stat_card(i18n.tr("stat-premium"), stats.premium, Some(palette::TIER_PREMIUM)),
            stat_card(i18n.tr("stat-vip"), stats.vip, Some(palette::TIER_VIP)),
            stat_card(i18n.tr("stat-with-plan"), stats.with_plan, Some(palette::SUCCESS_500)),
        ]);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header);
        if let Some(block) = page::error(self.runner.error(), i18n, Message::ClearError) {
            content = content.push(block);
        }
        content = content.push(stats_row).push(self.view_toolbar(i18n));
        if let Some(form) = &self.form {
            content = content.push(view_form(form, i18n, pending));
        }

        let mut body = Row::new()
            .spacing(spacing::MD)
            .push(self.view_list(i18n, pending));
        if let Some(member) = self.selected() {
            body = body.push(self.view_detail(member, i18n, pending));
        }
        content = content.push(body);

        scrollable(content).into()
    }

    fn view_toolbar<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let tiers = FilterOption::list(i18n.tr("filter-all-tiers"), MembershipTier::ALL);
        let tier_selected = FilterOption::find(&tiers, self.tier_filter.as_ref());
        let levels = FilterOption::list(i18n.tr("filter-all-levels"), FitnessLevel::ALL);
        let level_selected = FilterOption::find(&levels, self.level_filter.as_ref());

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Bottom)
            .push(
                text_input(&i18n.tr("members-search-placeholder"), &self.search)
                    .on_input(Message::SearchChanged)
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(iced::widget::pick_list(tiers, tier_selected, Message::TierFilterSelected))
            .push(iced::widget::pick_list(levels, level_selected, Message::LevelFilterSelected))
            .into()
    }

    fn view_list<'a>(&'a self, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
        let visible = self.visible_members();
        if visible.is_empty() && !pending {
            return if self.members.is_empty() {
                page::empty_state(i18n.tr("members-empty"), Some(i18n.tr("members-empty-hint")))
            } else {
                page::empty_state(i18n.tr("members-no-match"), None)
            };
        }

        let cards = visible
            .into_iter()
            .map(|member| view_card(member, i18n, pending))
            .collect::<Vec<_>>();
        Column::with_children(cards)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into()
    }

    fn view_detail<'a>(
        &'a self,
        member: &'a Member,
        i18n: &'a I18n,
        pending: bool,
    ) -> Element<'a, Message> {
        let idle = |message: Message| (!pending).then_some(message);

        let mut tags = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(badge(member.membership_tier.as_str(), membership_color(member.membership_tier)))
            .push(badge(member.fitness_level.as_str(), palette::INFO_500));
        if let Some(plan_id) = member.active_plan_id {
            tags = tags.push(page::muted(
                i18n.tr_with_args("member-active-plan", &[("id", &plan_id.to_string())]),
            ));
        }

        let phone = if member.phone.is_empty() {
            "—".to_string()
        } else {
            member.phone.clone()
        };

        let mut panel = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(member.full_name().to_uppercase()).size(typography::TITLE_MD))
            .push(page::section_title(i18n.tr("member-profile")))
            .push(page::muted(member.email.clone()))
            .push(page::muted(phone))
            .push(tags)
            .push(page::section_title(i18n.tr_with_args(
                "member-goals",
                &[("count", &member.goals.len().to_string())],
            )));

        if member.goals.is_empty() && self.goal_form.is_none() {
            panel = panel.push(page::muted(i18n.tr("member-no-goals")));
        }
        for goal in &member.goals {
            let mut entry = Column::new()
                .spacing(spacing::XXS)
                .push(badge(goal.goal_type.as_str(), palette::BRAND_500));
            if !goal.description.is_empty() {
                entry = entry.push(Text::new(goal.description.clone()).size(typography::BODY_SM));
            }
            entry = entry.push(page::muted(i18n.tr_with_args(
                "member-goal-target",
                &[("date", &goal.target_date.format(form::DATE_FORMAT).to_string())],
            )));
            panel = panel.push(entry);
        }

        match &self.goal_form {
            Some(goal) => panel = panel.push(view_goal_form(goal, i18n, pending)),
            None => {
                panel = panel.push(page::action(
                    i18n.tr("member-add-goal"),
                    Some(Message::OpenGoalForm),
                    button_styles::secondary,
                ));
            }
        }

        panel = panel.push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("member-delete"),
                    idle(Message::Delete(member.id)),
                    button_styles::danger,
                ))
                .push(Space::new().width(Length::Fill))
                .push(page::action(
                    i18n.tr("action-close"),
                    Some(Message::CloseDetail),
                    button_styles::secondary,
                )),
        );

        Container::new(panel)
            .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
            .padding(spacing::MD)
            .style(container_styles::panel)
            .into()
    }
}

fn view_card<'a>(member: &'a Member, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(member.full_name()).size(typography::BODY_LG))
        .push(page::muted(member.email.clone()));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(identity)
        .push(badge(member.membership_tier.as_str(), membership_color(member.membership_tier)))
        .push(badge(member.fitness_level.as_str(), palette::INFO_500))
        .push(page::action(
            i18n.tr("member-open"),
            Some(Message::Select(member.id)),
            button_styles::secondary,
        ))
        .push(page::action(
            i18n.tr("action-delete"),
            (!pending).then_some(Message::Delete(member.id)),
            button_styles::danger,
        ));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::card)
        .into()
}

fn view_form<'a>(form: &'a MemberForm, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let date_hint = i18n.tr("field-date-placeholder");
    let fields = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::field(&i18n.tr("field-first-name"), "", &form.first_name, |v| {
                    Message::FormChanged(FormField::FirstName(v))
                }))
                .push(form::field(&i18n.tr("field-last-name"), "", &form.last_name, |v| {
                    Message::FormChanged(FormField::LastName(v))
                })),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::field(&i18n.tr("field-email"), "", &form.email, |v| {
                    Message::FormChanged(FormField::Email(v))
                }))
                .push(form::field(&i18n.tr("field-phone"), "", &form.phone, |v| {
                    Message::FormChanged(FormField::Phone(v))
                })),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::picker(
                    &i18n.tr("field-fitness-level"),
                    FitnessLevel::ALL,
                    Some(form.fitness_level),
                    |v| Message::FormChanged(FormField::FitnessLevel(v)),
                ))
                .push(form::picker(
                    &i18n.tr("field-membership-tier"),
                    MembershipTier::ALL,
                    Some(form.membership_tier),
                    |v| Message::FormChanged(FormField::MembershipTier(v)),
                ))
                .push(form::field(
                    &i18n.tr("field-valid-until"),
                    &date_hint,
                    &form.valid_until,
                    |v| Message::FormChanged(FormField::ValidUntil(v)),
                )),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("action-cancel"),
                    Some(Message::CloseForm),
                    button_styles::secondary,
                ))
                .push(page::action(
                    i18n.tr("action-submit"),
                    (!pending).then_some(Message::SubmitForm),
                    button_styles::primary,
                )),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(page::section_title(i18n.tr("member-form-title")))
            .push(fields),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::panel)
    .into()
}

fn view_goal_form<'a>(goal: &'a GoalForm, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(form::picker(
            &i18n.tr("field-goal-type"),
            GoalType::ALL,
            Some(goal.goal_type),
            |v| Message::GoalChanged(GoalField::GoalType(v)),
        ))
        .push(form::field(
            &i18n.tr("field-target-date"),
            &i18n.tr("field-date-placeholder"),
            &goal.target_date,
            |v| Message::GoalChanged(GoalField::TargetDate(v)),
        ))
        .push(form::field(
            &i18n.tr("field-description"),
            "",
            &goal.description,
            |v| Message::GoalChanged(GoalField::Description(v)),
        ))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("action-cancel"),
                    Some(Message::CloseGoalForm),
                    button_styles::secondary,
                ))
                .push(page::action(
                    i18n.tr("member-add-goal"),
                    (!pending).then_some(Message::SubmitGoal),
                    button_styles::primary,
                )),
        )
        .into()
}

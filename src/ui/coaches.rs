// SPDX-License-Identifier: MPL-2.0
//! Coaches screen.
//!
//! The list is keyed on the specialization filter: changing the filter
//! refetches, re-supplying the count callback never does. The match panel
//! asks the server for the best coach of a member and tells "no match" apart
//! from a failed request through the runner's last error.

use crate::api::{Coach, CoachId, CoachTier, MemberId, NewCoach, SharedApi, Specialization};
use crate::coordination::{AsyncRunner, CallbackRelay, RefetchTrigger};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, coach_tier_color};
use crate::ui::components::form;
use crate::ui::components::page;
use crate::ui::components::stat_card::{stat_card, stat_row};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::NotificationCenter;
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::{perform, Effect, Outcome};
use iced::widget::{checkbox, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::sync::Arc;

const DEFAULT_MAX_CLIENTS: &str = "10";

/// Text of the coach creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub tier: CoachTier,
    pub specializations: Vec<Specialization>,
    pub max_clients: String,
}

impl Default for CoachForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            bio: String::new(),
            tier: CoachTier::default(),
            specializations: Vec::new(),
            max_clients: DEFAULT_MAX_CLIENTS.to_string(),
        }
    }
}

impl CoachForm {
    /// Builds the request body, or returns the i18n key of the problem.
    pub fn to_request(&self) -> Result<NewCoach, &'static str> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            form::non_blank(&self.first_name),
            form::non_blank(&self.last_name),
            form::non_blank(&self.email),
        ) else {
            return Err("notification-form-incomplete");
        };
        let max_clients = form::parse_number::<u32>(&self.max_clients)
            .filter(|n| *n > 0)
            .ok_or("notification-invalid-number")?;

        // Keep the picker order regardless of click order.
        let specializations = Specialization::ALL
            .iter()
            .copied()
            .filter(|s| self.specializations.contains(s))
            .collect();

        Ok(NewCoach {
            first_name,
            last_name,
            email,
            bio: self.bio.trim().to_string(),
            tier: self.tier,
            specializations,
            max_clients,
        })
    }

    fn toggle(&mut self, specialization: Specialization) {
        if let Some(pos) = self.specializations.iter().position(|s| *s == specialization) {
            self.specializations.remove(pos);
        } else {
            self.specializations.push(specialization);
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    FirstName(String),
    LastName(String),
    Email(String),
    Bio(String),
    Tier(CoachTier),
    MaxClients(String),
    ToggleSpecialization(Specialization),
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Outcome<Vec<Coach>>),
    FilterSelected(Option<Specialization>),
    OpenForm,
    CloseForm,
    FormChanged(FormField),
    SubmitForm,
    Created(Outcome<Coach>),
    Delete(CoachId),
    Deleted(CoachId, Outcome<()>),
    Select(CoachId),
    CloseDetail,
    MatchInputChanged(String),
    FindMatch,
    /// `None` covers both "no match" and a failed request.
    MatchResolved(Outcome<Option<Coach>>),
    ClearError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoachStats {
    pub total: usize,
    pub available: usize,
    pub vip: usize,
    pub open_slots: u32,
}

impl CoachStats {
    pub fn of(coaches: &[Coach]) -> Self {
        Self {
            total: coaches.len(),
            available: coaches.iter().filter(|c| c.is_available()).count(),
            vip: coaches.iter().filter(|c| c.tier == CoachTier::Vip).count(),
            open_slots: coaches.iter().map(Coach::open_slots).sum(),
        }
    }
}

pub struct State {
    api: SharedApi,
    notifications: NotificationCenter,
    runner: AsyncRunner,
    count_relay: CallbackRelay<usize>,
    load_trigger: RefetchTrigger<Option<Specialization>>,
    coaches: Vec<Coach>,
    filter: Option<Specialization>,
    form: Option<CoachForm>,
    selected: Option<CoachId>,
    match_input: String,
    match_result: Option<Coach>,
}

impl State {
    pub fn new(api: SharedApi, notifications: NotificationCenter) -> Self {
        Self {
            api,
            notifications,
            runner: AsyncRunner::new(),
            count_relay: CallbackRelay::new(),
            load_trigger: RefetchTrigger::new(),
            coaches: Vec::new(),
            filter: None,
            form: None,
            selected: None,
            match_input: String::new(),
            match_result: None,
        }
    }

    /// Installs the latest count callback. Never triggers a fetch.
    pub fn report_count_to<F>(&self, callback: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.count_relay.update(callback);
    }

    /// Fetches when the screen is first shown or the filter changed since the
    /// last fetch.
    pub fn activate(&mut self) -> Effect<Message> {
        if self.load_trigger.should_fetch(&self.filter) {
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
    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    #[must_use]
    pub fn filter(&self) -> Option<Specialization> {
        self.filter
    }

    #[must_use]
    pub fn match_result(&self) -> Option<&Coach> {
        self.match_result.as_ref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Coach> {
        let id = self.selected?;
        self.coaches.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> CoachStats {
        CoachStats::of(&self.coaches)
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Effect<Message> {
        match message {
            Message::Refresh => {
                self.load_trigger.invalidate();
                self.activate()
            }
            Message::Loaded(Ok(coaches)) => {
                self.coaches = coaches;
                if self.selected().is_none() {
                    self.selected = None;
                }
                None
            }
            Message::Loaded(Err(_)) => None,
            Message::FilterSelected(filter) => {
                self.filter = filter;
                self.activate()
            }
            Message::OpenForm => {
                self.form.get_or_insert_with(CoachForm::default);
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
                        FormField::Bio(v) => form.bio = v,
                        FormField::Tier(v) => form.tier = v,
                        FormField::MaxClients(v) => form.max_clients = v,
                        FormField::ToggleSpecialization(s) => form.toggle(s),
                    }
                }
                None
            }
            Message::SubmitForm => {
                let body = match self.form.as_ref().map(CoachForm::to_request) {
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
                    .execute_isolated(move || async move { api.create_coach(body).await });
                perform(async move { Message::Created(created.await) })
            }
            Message::Created(Ok(coach)) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-coach-created",
                    &[("first", &coach.first_name), ("last", &coach.last_name)],
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
                    .execute_isolated(move || async move { api.delete_coach(id).await });
                perform(async move { Message::Deleted(id, deleted.await) })
            }
            Message::Deleted(id, Ok(())) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-coach-deleted",
                    &[("id", &id.to_string())],
                ));
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.load()
            }
            Message::Deleted(_, Err(_)) => None,
            Message::Select(id) => {
                self.selected = Some(id);
                None
            }
            Message::CloseDetail => {
                self.selected = None;
                None
            }
            Message::MatchInputChanged(input) => {
                self.match_input = input;
                None
            }
            Message::FindMatch => {
                if self.match_input.trim().is_empty() {
                    return None;
                }
                let Some(member_id) =
                    form::parse_number::<MemberId>(&self.match_input).filter(|id| *id > 0)
                else {
                    self.notifications.warning(i18n.tr("notification-invalid-number"));
                    return None;
                };
                self.match_result = None;
                let api = Arc::clone(&self.api);
                let found = self
                    .runner
                    .execute_isolated(move || async move { api.match_coach(member_id).await });
                perform(async move { Message::MatchResolved(found.await) })
            }
            Message::MatchResolved(Ok(Some(coach))) => {
                self.notifications.info(i18n.tr_with_args(
                    "notification-best-coach",
                    &[("first", &coach.first_name), ("last", &coach.last_name)],
                ));
                self.match_result = Some(coach);
                None
            }
            Message::MatchResolved(Ok(None)) => {
                self.match_result = None;
                self.notifications.warning(i18n.tr("notification-no-match"));
                None
            }
            Message::MatchResolved(Err(message)) => {
                self.match_result = None;
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
        let filter = self.filter;
        let coaches = self
            .runner
            .execute_isolated(move || async move { api.list_coaches(filter).await });
        perform(async move {
            let coaches = coaches.await;
            if let Ok(list) = &coaches {
                relay.invoke(list.len());
            }
            Message::Loaded(coaches)
        })
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let pending = self.runner.is_pending();
        let stats = self.stats();

        let mut actions: Vec<Element<'a, Message>> = Vec::new();
        if pending {
            actions.push(page::muted(i18n.tr("loading")).into());
        }
        actions.push(
            page::action(
                i18n.tr("action-refresh"),
                (!pending).then_some(Message::Refresh),
                button_styles::secondary,
            )
            .into(),
        );
        actions.push(
            page::action(i18n.tr("coaches-add"), Some(Message::OpenForm), button_styles::primary)
                .into(),
        );

        let header = page::header(
            i18n.tr("coaches-title"),
            Some(i18n.tr_with_args(
                "coaches-subtitle",
                &[
                    ("total", &stats.total.to_string()),
                    ("available", &stats.available.to_string()),
                    ("slots", &stats.open_slots.to_string()),
                ],
            )),
            actions,
        );

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header);
        if let Some(block) = page::error(self.runner.error(), i18n, Message::ClearError) {
            content = content.push(block);
        }
        content = content
            .push(stat_row(vec![
                stat_card(i18n.tr("stat-total"), stats.total, Some(palette::BRAND_500)),
                stat_card(i18n.tr("stat-available"), stats.available, Some(palette::SUCCESS_500)),
                stat_card(i18n.tr("stat-vip"), stats.vip, Some(palette::TIER_VIP)),
                stat_card(i18n.tr("stat-open-slots"), stats.open_slots, Some(palette::INFO_500)),
            ]))
            .push(self.view_match_panel(i18n, pending))
            .push(self.view_filter_chips(i18n));
        if let Some(form) = &self.form {
            content = content.push(view_form(form, i18n, pending));
        }

        let mut body = Row::new().spacing(spacing::MD).push(self.view_list(i18n, pending));
        if let Some(coach) = self.selected() {
            body = body.push(view_detail(coach, i18n, pending));
        }

        scrollable(content.push(body)).into()
    }

    fn view_match_panel<'a>(&'a self, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
        let can_search = !pending && !self.match_input.trim().is_empty();
        let search = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                text_input(&i18n.tr("match-placeholder"), &self.match_input)
                    .on_input(Message::MatchInputChanged)
                    .on_submit(Message::FindMatch)
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH * 1.5)),
            )
            .push(page::action(
                i18n.tr("match-action"),
                can_search.then_some(Message::FindMatch),
                button_styles::primary,
            ));

        let mut panel = Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(page::muted(i18n.tr("match-title")))
                    .push(search),
            );

        if let Some(coach) = &self.match_result {
            panel = panel.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(page::muted(i18n.tr("match-result")))
                    .push(Text::new(coach.full_name()).size(typography::BODY_LG))
                    .push(page::muted(format!(
                        "{} · {} · {}",
                        join_specializations(&coach.specializations),
                        coach.tier,
                        clients_label(coach, i18n),
                    ))),
            );
        }

        Container::new(panel)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(container_styles::card)
            .into()
    }

    fn view_filter_chips<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let chip = |label: String, value: Option<Specialization>| {
            page::action(
                label,
                Some(Message::FilterSelected(value)),
                button_styles::nav(self.filter == value),
            )
        };

        let mut chips = Row::new()
            .spacing(spacing::XS)
            .push(chip(i18n.tr("filter-all"), None));
        for specialization in Specialization::ALL {
            chips = chips.push(chip(specialization.to_string(), Some(*specialization)));
        }
        chips.into()
    }

    fn view_list<'a>(&'a self, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
        if self.coaches.is_empty() && !pending {
            return page::empty_state(i18n.tr("coaches-empty"), Some(i18n.tr("coaches-empty-hint")));
        }

        let cards = self
            .coaches
            .iter()
            .map(|coach| view_card(coach, i18n, pending))
            .collect::<Vec<_>>();
        Column::with_children(cards)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into()
    }
}

fn join_specializations(specializations: &[Specialization]) -> String {
    specializations
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn clients_label(coach: &Coach, i18n: &I18n) -> String {
    i18n.tr_with_args(
        "coach-clients",
        &[
            ("current", &coach.current_client_count.to_string()),
            ("max", &coach.max_clients.to_string()),
        ],
    )
}

fn view_card<'a>(coach: &'a Coach, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(coach.full_name()).size(typography::BODY_LG))
        .push(page::muted(join_specializations(&coach.specializations)));

    let slots_color = if coach.is_available() {
        palette::SUCCESS_500
    } else {
        palette::ERROR_500
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(identity)
        .push(badge(clients_label(coach, i18n), slots_color))
        .push(badge(coach.tier.as_str(), coach_tier_color(coach.tier)))
        .push(page::action(
            i18n.tr("member-open"),
            Some(Message::Select(coach.id)),
            button_styles::secondary,
        ))
        .push(page::action(
            i18n.tr("action-delete"),
            (!pending).then_some(Message::Delete(coach.id)),
            button_styles::danger,
        ));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::card)
        .into()
}

fn view_detail<'a>(coach: &'a Coach, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let mut panel = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(coach.full_name()).size(typography::TITLE_MD))
        .push(page::muted(coach.email.clone()))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(badge(coach.tier.as_str(), coach_tier_color(coach.tier)))
                .push(page::muted(format!("#{}", coach.id))),
        );

    if !coach.bio.is_empty() {
        panel = panel.push(Text::new(coach.bio.clone()).size(typography::BODY_SM));
    }
    if !coach.specializations.is_empty() {
        let tags = coach
            .specializations
            .iter()
            .map(|s| badge(s.as_str(), palette::BRAND_500))
            .collect::<Vec<_>>();
        panel = panel.push(Row::with_children(tags).spacing(spacing::XXS));
    }

    panel = panel.push(
        Row::new()
            .spacing(spacing::XS)
            .push(page::action(
                i18n.tr("coach-delete"),
                (!pending).then_some(Message::Delete(coach.id)),
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

fn view_form<'a>(form: &'a CoachForm, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let specializations = Specialization::ALL.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, specialization| {
            let specialization = *specialization;
            row.push(
                checkbox(form.specializations.contains(&specialization))
                    .label(specialization.to_string())
                    .on_toggle(move |_| {
                        Message::FormChanged(FormField::ToggleSpecialization(specialization))
                    })
                    .size(typography::BODY)
                    .text_size(typography::BODY_SM),
            )
        },
    );

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
                }))
                .push(form::field(&i18n.tr("field-email"), "", &form.email, |v| {
                    Message::FormChanged(FormField::Email(v))
                })),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::picker(
                    &i18n.tr("field-tier"),
                    CoachTier::ALL,
                    Some(form.tier),
                    |v| Message::FormChanged(FormField::Tier(v)),
                ))
                .push(form::number_field(&i18n.tr("field-max-clients"), &form.max_clients, |v| {
                    Message::FormChanged(FormField::MaxClients(v))
                }))
                .push(form::field(&i18n.tr("field-bio"), "", &form.bio, |v| {
                    Message::FormChanged(FormField::Bio(v))
                })),
        )
        .push(page::muted(i18n.tr("field-specializations")))
        .push(specializations)
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
            .push(page::section_title(i18n.tr("coach-form-title")))
            .push(fields),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GoalType;
    use crate::test_utils::{sample_coach, sample_goal, sample_member, InMemoryStudio};
    use crate::ui::notifications::Kind;

    fn screen() -> (State, NotificationCenter, Arc<InMemoryStudio>) {
        let studio = Arc::new(InMemoryStudio::new());
        let center = NotificationCenter::new();
        let state = State::new(studio.clone(), center.clone());
        (state, center, studio)
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Default::default())
    }

    async fn drive(state: &mut State, message: Message, i18n: &I18n) {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            if let Some(effect) = state.update(message, i18n) {
                next = Some(effect.await);
            }
        }
    }

    #[test]
    fn form_validates_max_clients_and_orders_specializations() {
        let mut form = CoachForm {
            first_name: "Jo".into(),
            last_name: "Fit".into(),
            email: "jo@example.com".into(),
            ..CoachForm::default()
        };
        form.toggle(Specialization::Yoga);
        form.toggle(Specialization::Strength);
        form.toggle(Specialization::Cardio);
        form.toggle(Specialization::Cardio);

        let body = form.to_request().expect("valid form");
        assert_eq!(body.max_clients, 10);
        assert_eq!(body.specializations, [Specialization::Strength, Specialization::Yoga]);

        form.max_clients = "0".into();
        assert_eq!(form.to_request(), Err("notification-invalid-number"));
    }

    #[test]
    fn stats_sum_open_slots() {
        let mut full = sample_coach(1, "A", "Full", &[]);
        full.current_client_count = full.max_clients;
        let mut vip = sample_coach(2, "B", "Vip", &[]);
        vip.tier = CoachTier::Vip;
        vip.current_client_count = 4;

        assert_eq!(
            CoachStats::of(&[full, vip]),
            CoachStats {
                total: 2,
                available: 1,
                vip: 1,
                open_slots: 6
            }
        );
    }

    #[test]
    fn form_view_builds_with_checked_specializations() {
        let (mut state, _, _) = screen();
        let i18n = english();
        state.update(Message::OpenForm, &i18n);
        state.update(
            Message::FormChanged(FormField::ToggleSpecialization(Specialization::Yoga)),
            &i18n,
        );

        let _element: Element<'_, Message> = state.view(&i18n);
    }

    #[tokio::test]
    async fn filter_change_refetches_but_same_filter_does_not() {
        let (mut state, _, studio) = screen();
        let i18n = english();
        studio.insert_coach(sample_coach(0, "A", "Strong", &[Specialization::Strength]));
        studio.insert_coach(sample_coach(0, "B", "Calm", &[Specialization::Yoga]));

        drive(&mut state, Message::Refresh, &i18n).await;
        assert_eq!(state.coaches().len(), 2);

        drive(&mut state, Message::FilterSelected(Some(Specialization::Yoga)), &i18n).await;
        assert_eq!(state.coaches().len(), 1);
        let requests = studio.request_count();

        assert!(state
            .update(Message::FilterSelected(Some(Specialization::Yoga)), &i18n)
            .is_none());
        state.report_count_to(|_| {});
        assert!(state.activate().is_none());
        assert_eq!(studio.request_count(), requests);
    }

    #[tokio::test]
    async fn match_found_shows_info() {
        let (mut state, center, studio) = screen();
        let i18n = english();
        let mut member = sample_member(0, "Ada", "Lovelace");
        member.goals.push(sample_goal(GoalType::Flexibility));
        let member_id = studio.insert_member(member);
        studio.insert_coach(sample_coach(0, "Yan", "Lotus", &[Specialization::Yoga]));

        state.update(Message::MatchInputChanged(member_id.to_string()), &i18n);
        drive(&mut state, Message::FindMatch, &i18n).await;

        assert_eq!(state.match_result().map(Coach::full_name).as_deref(), Some("Yan Lotus"));
        let toast = center.snapshot().pop().expect("notification");
        assert_eq!(toast.kind(), Kind::Info);
        assert_eq!(toast.message(), "Best coach: Yan Lotus");
    }

    #[tokio::test]
    async fn unknown_member_is_an_error_not_a_miss() {
        let (mut state, center, _) = screen();
        let i18n = english();

        state.update(Message::MatchInputChanged("99".into()), &i18n);
        drive(&mut state, Message::FindMatch, &i18n).await;

        let toast = center.snapshot().pop().expect("notification");
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.message(), "Member 99 not found");
    }

    #[tokio::test]
    async fn match_failure_is_not_mistaken_for_a_miss_after_refresh() {
        let (mut state, center, _) = screen();
        let i18n = english();

        state.update(Message::MatchInputChanged("99".into()), &i18n);
        let resolved = state
            .update(Message::FindMatch, &i18n)
            .expect("match request")
            .await;
        let reload = state.update(Message::Refresh, &i18n).expect("refresh loads");
        assert!(state.runner().last_error().is_none());

        state.update(resolved, &i18n);
        let toast = center.snapshot().pop().expect("notification");
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.message(), "Member 99 not found");

        let loaded = reload.await;
        state.update(loaded, &i18n);
    }

    #[tokio::test]
    async fn blank_match_input_sends_nothing() {
        let (mut state, center, studio) = screen();
        state.update(Message::MatchInputChanged("  ".into()), &english());
        assert!(state.update(Message::FindMatch, &english()).is_none());
        assert_eq!(studio.request_count(), 0);
        assert!(center.is_empty());
    }
}

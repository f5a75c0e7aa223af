// SPDX-License-Identifier: MPL-2.0
//! Plans screen.
//!
//! Plans are looked up by id rather than listed. The loaded plan is replaced
//! wholesale by every mutation response (activate, add session, complete
//! session) and the cached progress is dropped whenever a different plan
//! arrives. Completing a session chains a progress fetch.

use crate::api::{
    CompleteSession, ExerciseInput, NewPlan, NewSession, Plan, PlanId, PlanProgress, PlanStatus,
    SessionId, SessionStatus, SharedApi, WorkoutSession,
};
use crate::coordination::AsyncRunner;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, plan_status_color, session_status_color};
use crate::ui::components::form;
use crate::ui::components::page;
use crate::ui::components::stat_card::{stat_card, stat_row};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::NotificationCenter;
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::{perform, Effect, Outcome};
use iced::widget::{scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::sync::Arc;

/// Text of the plan creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanForm {
    pub member_id: String,
    pub coach_id: String,
    pub name: String,
    pub starts_at: String,
    pub ends_at: String,
}

impl PlanForm {
    /// Builds the request body, or returns the i18n key of the problem.
    pub fn to_request(&self) -> Result<NewPlan, &'static str> {
        let (Some(member_id), Some(coach_id), Some(name), Some(starts_at), Some(ends_at)) = (
            form::non_blank(&self.member_id),
            form::non_blank(&self.coach_id),
            form::non_blank(&self.name),
            form::non_blank(&self.starts_at),
            form::non_blank(&self.ends_at),
        ) else {
            return Err("notification-form-incomplete");
        };

        let member_id = form::parse_number(&member_id).ok_or("notification-invalid-number")?;
        let coach_id = form::parse_number(&coach_id).ok_or("notification-invalid-number")?;
        let starts_at = form::parse_date(&starts_at).ok_or("notification-invalid-date")?;
        let ends_at = form::parse_date(&ends_at).ok_or("notification-invalid-date")?;
        if ends_at < starts_at {
            return Err("notification-invalid-date");
        }

        Ok(NewPlan {
            member_id,
            coach_id,
            name,
            starts_at,
            ends_at,
        })
    }
}

/// One exercise row of the session form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRow {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest_seconds: String,
}

impl Default for ExerciseRow {
    fn default() -> Self {
        let defaults = ExerciseInput::default();
        Self {
            name: String::new(),
            sets: defaults.sets.to_string(),
            reps: defaults.reps.to_string(),
            rest_seconds: defaults.rest_seconds.to_string(),
        }
    }
}

/// Text of the add-session form. Always holds at least one exercise row.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionForm {
    pub name: String,
    pub scheduled_date: String,
    pub exercises: Vec<ExerciseRow>,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            scheduled_date: String::new(),
            exercises: vec![ExerciseRow::default()],
        }
    }
}

impl SessionForm {
    /// Builds the request body, or returns the i18n key of the problem.
    ///
    /// Rows without an exercise name are skipped.
    pub fn to_request(&self) -> Result<NewSession, &'static str> {
        let (Some(name), Some(date)) = (
            form::non_blank(&self.name),
            form::non_blank(&self.scheduled_date),
        ) else {
            return Err("notification-form-incomplete");
        };
        let scheduled_date = form::parse_date(&date).ok_or("notification-invalid-date")?;

        let mut exercises = Vec::new();
        for (index, row) in self.exercises.iter().enumerate() {
            let Some(exercise_name) = form::non_blank(&row.name) else {
                continue;
            };
            let number =
                |raw: &str| form::parse_number::<u32>(raw).ok_or("notification-invalid-number");
            exercises.push(ExerciseInput {
                name: exercise_name,
                sets: number(&row.sets)?,
                reps: number(&row.reps)?,
                rest_seconds: number(&row.rest_seconds)?,
                exercise_id: (index + 1).to_string(),
            });
        }

        Ok(NewSession {
            name,
            scheduled_date,
            exercises,
        })
    }

    fn remove_exercise(&mut self, index: usize) {
        if self.exercises.len() > 1 && index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CompletionForm {
    session_id: SessionId,
    notes: String,
}

#[derive(Debug, Clone)]
pub enum PlanField {
    MemberId(String),
    CoachId(String),
    Name(String),
    StartsAt(String),
    EndsAt(String),
}

#[derive(Debug, Clone)]
pub enum SessionField {
    Name(String),
    ScheduledDate(String),
}

#[derive(Debug, Clone)]
pub enum ExerciseField {
    Name(String),
    Sets(String),
    Reps(String),
    Rest(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    LookupChanged(String),
    LoadPlan,
    PlanLoaded(Outcome<Plan>),
    OpenPlanForm,
    ClosePlanForm,
    PlanFormChanged(PlanField),
    SubmitPlan,
    PlanCreated(Outcome<Plan>),
    Activate,
    Activated(Outcome<Plan>),
    FetchProgress,
    ProgressLoaded(Outcome<PlanProgress>),
    OpenSessionForm,
    CloseSessionForm,
    SessionChanged(SessionField),
    AddExercise,
    RemoveExercise(usize),
    ExerciseChanged(usize, ExerciseField),
    SubmitSession,
    SessionAdded(Outcome<Plan>),
    OpenCompletion(SessionId),
    CloseCompletion,
    NotesChanged(String),
    SubmitCompletion,
    SessionCompleted(Outcome<Plan>),
    ClearError,
}

/// Session counts of the loaded plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl SessionStats {
    pub fn of(plan: &Plan) -> Self {
        Self {
            total: plan.sessions.len(),
            pending: plan.count_sessions(SessionStatus::Pending),
            completed: plan.count_sessions(SessionStatus::Completed),
        }
    }
}

pub struct State {
    api: SharedApi,
    notifications: NotificationCenter,
    runner: AsyncRunner,
    lookup: String,
    plan: Option<Plan>,
    progress: Option<f64>,
    plan_form: Option<PlanForm>,
    session_form: Option<SessionForm>,
    completion: Option<CompletionForm>,
}

impl State {
    pub fn new(api: SharedApi, notifications: NotificationCenter) -> Self {
        Self {
            api,
            notifications,
            runner: AsyncRunner::new(),
            lookup: String::new(),
            plan: None,
            progress: None,
            plan_form: None,
            session_form: None,
            completion: None,
        }
    }

    #[must_use]
    pub fn runner(&self) -> &AsyncRunner {
        &self.runner
    }

    #[must_use]
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Completion percentage of the loaded plan, once fetched.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    #[must_use]
    pub fn lookup(&self) -> &str {
        &self.lookup
    }

    #[must_use]
    pub fn session_form(&self) -> Option<&SessionForm> {
        self.session_form.as_ref()
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Effect<Message> {
        match message {
            Message::LookupChanged(input) => {
                self.lookup = input;
                None
            }
            Message::LoadPlan => {
                if self.lookup.trim().is_empty() {
                    return None;
                }
                let Some(id) = form::parse_number::<PlanId>(&self.lookup) else {
                    self.notifications.warning(i18n.tr("notification-invalid-number"));
                    return None;
                };
                let api = Arc::clone(&self.api);
                let plan = self
                    .runner
                    .execute_isolated(move || async move { api.get_plan(id).await });
                perform(async move { Message::PlanLoaded(plan.await) })
            }
            Message::PlanLoaded(Ok(plan)) => {
                self.progress = None;
                self.show_plan(plan);
                None
            }
            Message::OpenPlanForm => {
                self.plan_form.get_or_insert_with(PlanForm::default);
                None
            }
            Message::ClosePlanForm => {
                self.plan_form = None;
                None
            }
            Message::PlanFormChanged(field) => {
                if let Some(form) = self.plan_form.as_mut() {
                    match field {
                        PlanField::MemberId(v) => form.member_id = v,
                        PlanField::CoachId(v) => form.coach_id = v,
                        PlanField::Name(v) => form.name = v,
                        PlanField::StartsAt(v) => form.starts_at = v,
                        PlanField::EndsAt(v) => form.ends_at = v,
                    }
                }
                None
            }
            Message::SubmitPlan => {
                let body = match self.plan_form.as_ref().map(PlanForm::to_request) {
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
                    .execute_isolated(move || async move { api.create_plan(body).await });
                perform(async move { Message::PlanCreated(created.await) })
            }
            Message::PlanCreated(Ok(plan)) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-plan-created",
                    &[("name", &plan.name), ("id", &plan.id.to_string())],
                ));
                self.plan_form = None;
                self.lookup = plan.id.to_string();
                self.progress = None;
                self.show_plan(plan);
                None
            }
            Message::Activate => {
                let id = self.plan.as_ref()?.id;
                let api = Arc::clone(&self.api);
                let activated = self
                    .runner
                    .execute_isolated(move || async move { api.activate_plan(id).await });
                perform(async move { Message::Activated(activated.await) })
            }
            Message::Activated(Ok(plan)) => {
                self.notifications.success(i18n.tr_with_args(
                    "notification-plan-activated",
                    &[("name", &plan.name)],
                ));
                self.show_plan(plan);
                None
            }
            Message::FetchProgress => {
                let id = self.plan.as_ref()?.id;
                self.fetch_progress(id)
            }
            Message::ProgressLoaded(Ok(progress)) => {
                if self.plan.as_ref().map(|p| p.id) == Some(progress.plan_id) {
                    self.progress = Some(progress.completion_pct);
                }
                None
            }
            Message::OpenSessionForm => {
                self.session_form.get_or_insert_with(SessionForm::default);
                None
            }
            Message::CloseSessionForm => {
                self.session_form = None;
                None
            }
            Message::SessionChanged(field) => {
                if let Some(form) = self.session_form.as_mut() {
                    match field {
                        SessionField::Name(v) => form.name = v,
                        SessionField::ScheduledDate(v) => form.scheduled_date = v,
                    }
                }
                None
            }
            Message::AddExercise => {
                if let Some(form) = self.session_form.as_mut() {
                    form.exercises.push(ExerciseRow::default());
                }
                None
            }
            Message::RemoveExercise(index) => {
                if let Some(form) = self.session_form.as_mut() {
                    form.remove_exercise(index);
                }
                None
            }
            Message::ExerciseChanged(index, field) => {
                if let Some(row) = self
                    .session_form
                    .as_mut()
                    .and_then(|form| form.exercises.get_mut(index))
                {
                    match field {
                        ExerciseField::Name(v) => row.name = v,
                        ExerciseField::Sets(v) => row.sets = v,
                        ExerciseField::Reps(v) => row.reps = v,
                        ExerciseField::Rest(v) => row.rest_seconds = v,
                    }
                }
                None
            }
            Message::SubmitSession => {
                let plan_id = self.plan.as_ref()?.id;
                let body = match self.session_form.as_ref().map(SessionForm::to_request) {
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
                    .execute_isolated(move || async move { api.add_session(plan_id, body).await });
                perform(async move { Message::SessionAdded(updated.await) })
            }
            Message::SessionAdded(Ok(plan)) => {
                self.notifications.success(i18n.tr("notification-session-added"));
                self.session_form = None;
                self.show_plan(plan);
                None
            }
            Message::OpenCompletion(session_id) => {
                self.completion = Some(CompletionForm {
                    session_id,
                    notes: String::new(),
                });
                None
            }
            Message::CloseCompletion => {
                self.completion = None;
                None
            }
            Message::NotesChanged(notes) => {
                if let Some(completion) = self.completion.as_mut() {
                    completion.notes = notes;
                }
                None
            }
            Message::SubmitCompletion => {
                let plan_id = self.plan.as_ref()?.id;
                let completion = self.completion.as_ref()?;
                let session_id = completion.session_id;
                let body = CompleteSession {
                    notes: form::non_blank(&completion.notes),
                };
                let api = Arc::clone(&self.api);
                let updated = self.runner.execute_isolated(move || async move {
                    api.complete_session(plan_id, session_id, body).await
                });
                perform(async move { Message::SessionCompleted(updated.await) })
            }
            Message::SessionCompleted(Ok(plan)) => {
                self.notifications.success(i18n.tr("notification-session-completed"));
                self.completion = None;
                let id = plan.id;
                self.plan = Some(plan);
                self.fetch_progress(id)
            }
            Message::PlanLoaded(Err(message))
            | Message::PlanCreated(Err(message))
            | Message::Activated(Err(message))
            | Message::SessionAdded(Err(message))
            | Message::SessionCompleted(Err(message))
            | Message::ProgressLoaded(Err(message)) => {
                self.notifications.error(message);
                None
            }
            Message::ClearError => {
                self.runner.clear_error();
                None
            }
        }
    }

    /// Replaces the loaded plan. Forms and progress only survive an update
    /// of the same plan.
    fn show_plan(&mut self, plan: Plan) {
        if self.plan.as_ref().map(|p| p.id) != Some(plan.id) {
            self.session_form = None;
            self.completion = None;
            self.progress = None;
        }
        self.plan = Some(plan);
    }

    fn fetch_progress(&mut self, id: PlanId) -> Effect<Message> {
        let api = Arc::clone(&self.api);
        let progress = self
            .runner
            .execute_isolated(move || async move { api.plan_progress(id).await });
        perform(async move { Message::ProgressLoaded(progress.await) })
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let pending = self.runner.is_pending();

        let mut actions: Vec<Element<'a, Message>> = Vec::new();
        if pending {
            actions.push(page::muted(i18n.tr("loading")).into());
        }
        actions.push(
            page::action(
                i18n.tr("plans-create"),
                Some(Message::OpenPlanForm),
                button_styles::primary,
            )
            .into(),
        );

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(page::header(i18n.tr("plans-title"), None, actions))
            .push(self.view_lookup(i18n, pending));
        if let Some(block) = page::error(self.runner.error(), i18n, Message::ClearError) {
            content = content.push(block);
        }
        if let Some(form) = &self.plan_form {
            content = content.push(view_plan_form(form, i18n, pending));
        }

        match &self.plan {
            Some(plan) => {
                content = content.push(self.view_plan(plan, i18n, pending));
            }
            None => {
                content = content.push(page::empty_state(i18n.tr("plans-empty"), None));
            }
        }

        scrollable(content).into()
    }

    fn view_lookup<'a>(&'a self, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
        let can_load = !pending && !self.lookup.trim().is_empty();
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(page::muted(i18n.tr("plans-lookup")))
            .push(
                text_input(&i18n.tr("plans-lookup-placeholder"), &self.lookup)
                    .on_input(Message::LookupChanged)
                    .on_submit(Message::LoadPlan)
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH)),
            )
            .push(page::action(
                i18n.tr("plans-load"),
                can_load.then_some(Message::LoadPlan),
                button_styles::secondary,
            ))
            .into()
    }

    fn view_plan<'a>(&'a self, plan: &'a Plan, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
        let stats = SessionStats::of(plan);
        let is_draft = plan.status == PlanStatus::Draft;

        let mut actions = Row::new().spacing(spacing::XS);
        if is_draft {
            actions = actions
                .push(page::action(
                    i18n.tr("plan-activate"),
                    (!pending).then_some(Message::Activate),
                    button_styles::primary,
                ))
                .push(page::action(
                    i18n.tr("plan-add-session"),
                    Some(Message::OpenSessionForm),
                    button_styles::secondary,
                ));
        }
        actions = actions.push(page::action(
            i18n.tr("plan-progress"),
            (!pending).then_some(Message::FetchProgress),
            button_styles::secondary,
        ));

        let summary = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(Text::new(plan.name.clone()).size(typography::TITLE_MD))
                    .push(page::muted(i18n.tr_with_args(
                        "plan-summary",
                        &[
                            ("name", &plan.name),
                            ("status", plan.status.as_str()),
                            ("member", &plan.member_id.to_string()),
                            ("coach", &plan.coach_id.to_string()),
                        ],
                    )))
                    .push(page::muted(i18n.tr_with_args(
                        "plan-period",
                        &[
                            ("start", &plan.starts_at.to_string()),
                            ("end", &plan.ends_at.to_string()),
                        ],
                    ))),
            )
            .push(badge(plan.status.as_str(), plan_status_color(plan.status)))
            .push(actions);

        let progress = self
            .progress
            .map(|pct| i18n.tr_with_args("plan-progress-value", &[("pct", &pct.to_string())]))
            .unwrap_or_else(|| "-".to_string());

        let mut column = Column::new()
            .spacing(spacing::MD)
            .push(
                Container::new(summary)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(container_styles::panel),
            )
            .push(stat_row(vec![
                stat_card(i18n.tr("stat-sessions"), stats.total, Some(palette::BRAND_500)),
                stat_card(i18n.tr("stat-pending"), stats.pending, Some(palette::WARNING_500)),
                stat_card(i18n.tr("stat-completed"), stats.completed, Some(palette::SUCCESS_500)),
                stat_card(i18n.tr("stat-progress"), progress, Some(palette::INFO_500)),
            ]));

        if let Some(form) = &self.session_form {
            column = column.push(view_session_form(form, i18n, pending));
        }

        if plan.sessions.is_empty() {
            column = column.push(page::empty_state(i18n.tr("plan-no-sessions"), None));
        } else {
            let can_complete = plan.status == PlanStatus::Active;
            for session in &plan.sessions {
                column = column.push(self.view_session(session, can_complete, i18n, pending));
            }
        }

        column.into()
    }

    fn view_session<'a>(
        &'a self,
        session: &'a WorkoutSession,
        can_complete: bool,
        i18n: &'a I18n,
        pending: bool,
    ) -> Element<'a, Message> {
        let mut header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(Text::new(session.name.clone()).size(typography::BODY_LG))
                    .push(page::muted(session.scheduled_date.to_string())),
            )
            .push(badge(session.status.as_str(), session_status_color(session.status)));
        if can_complete && session.status == SessionStatus::Pending {
            header = header.push(page::action(
                i18n.tr("session-complete"),
                Some(Message::OpenCompletion(session.id)),
                button_styles::primary,
            ));
        }

        let mut card = Column::new().spacing(spacing::XS).push(header);
        if !session.exercises.is_empty() {
            card = card.push(page::muted(i18n.tr_with_args(
                "session-exercises",
                &[("count", &session.exercises.len().to_string())],
            )));
            for exercise in &session.exercises {
                card = card.push(
                    Text::new(format!(
                        "{}  {}×{}  {}s",
                        exercise.name, exercise.sets, exercise.reps, exercise.rest_seconds
                    ))
                    .size(typography::BODY_SM),
                );
            }
        }
        if let Some(notes) = &session.notes {
            card = card.push(page::muted(notes.clone()));
        }
        if let Some(completion) = self
            .completion
            .as_ref()
            .filter(|c| c.session_id == session.id)
        {
            card = card.push(view_completion(completion, i18n, pending));
        }

        Container::new(card)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(container_styles::card)
            .into()
    }
}

fn view_completion<'a>(
    completion: &'a CompletionForm,
    i18n: &'a I18n,
    pending: bool,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(page::section_title(i18n.tr("session-complete-title")))
        .push(form::field(&i18n.tr("field-notes"), "", &completion.notes, Message::NotesChanged))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("action-cancel"),
                    Some(Message::CloseCompletion),
                    button_styles::secondary,
                ))
                .push(page::action(
                    i18n.tr("session-complete"),
                    (!pending).then_some(Message::SubmitCompletion),
                    button_styles::primary,
                )),
        )
        .into()
}

fn view_plan_form<'a>(form: &'a PlanForm, i18n: &'a I18n, pending: bool) -> Element<'a, Message> {
    let date_hint = i18n.tr("field-date-placeholder");
    let fields = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::number_field(&i18n.tr("field-member-id"), &form.member_id, |v| {
                    Message::PlanFormChanged(PlanField::MemberId(v))
                }))
                .push(form::number_field(&i18n.tr("field-coach-id"), &form.coach_id, |v| {
                    Message::PlanFormChanged(PlanField::CoachId(v))
                }))
                .push(form::field(&i18n.tr("field-plan-name"), "", &form.name, |v| {
                    Message::PlanFormChanged(PlanField::Name(v))
                })),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::field(&i18n.tr("field-starts-at"), &date_hint, &form.starts_at, |v| {
                    Message::PlanFormChanged(PlanField::StartsAt(v))
                }))
                .push(form::field(&i18n.tr("field-ends-at"), &date_hint, &form.ends_at, |v| {
                    Message::PlanFormChanged(PlanField::EndsAt(v))
                })),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("action-cancel"),
                    Some(Message::ClosePlanForm),
                    button_styles::secondary,
                ))
                .push(page::action(
                    i18n.tr("action-submit"),
                    (!pending).then_some(Message::SubmitPlan),
                    button_styles::primary,
                )),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(page::section_title(i18n.tr("plan-form-title")))
            .push(fields),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::panel)
    .into()
}

fn view_session_form<'a>(
    form: &'a SessionForm,
    i18n: &'a I18n,
    pending: bool,
) -> Element<'a, Message> {
    let can_remove = form.exercises.len() > 1;
    let rows = form.exercises.iter().enumerate().map(|(index, row)| {
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Bottom)
            .push(form::field(&i18n.tr("field-exercise-name"), "", &row.name, move |v| {
                Message::ExerciseChanged(index, ExerciseField::Name(v))
            }))
            .push(form::number_field(&i18n.tr("field-sets"), &row.sets, move |v| {
                Message::ExerciseChanged(index, ExerciseField::Sets(v))
            }))
            .push(form::number_field(&i18n.tr("field-reps"), &row.reps, move |v| {
                Message::ExerciseChanged(index, ExerciseField::Reps(v))
            }))
            .push(form::number_field(&i18n.tr("field-rest"), &row.rest_seconds, move |v| {
                Message::ExerciseChanged(index, ExerciseField::Rest(v))
            }))
            .push(page::action(
                i18n.tr("session-remove-exercise"),
                can_remove.then_some(Message::RemoveExercise(index)),
                button_styles::danger,
            ))
            .into()
    });

    let fields = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::field(&i18n.tr("field-session-name"), "", &form.name, |v| {
                    Message::SessionChanged(SessionField::Name(v))
                }))
                .push(form::field(
                    &i18n.tr("field-scheduled-date"),
                    &i18n.tr("field-date-placeholder"),
                    &form.scheduled_date,
                    |v| Message::SessionChanged(SessionField::ScheduledDate(v)),
                )),
        )
        .push(page::muted(i18n.tr_with_args(
            "session-exercises",
            &[("count", &form.exercises.len().to_string())],
        )))
        .push(Column::with_children(rows.collect::<Vec<Element<'a, Message>>>()).spacing(spacing::XS))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(page::action(
                    i18n.tr("session-add-exercise"),
                    Some(Message::AddExercise),
                    button_styles::secondary,
                ))
                .push(Space::new().width(Length::Fill))
                .push(page::action(
                    i18n.tr("action-cancel"),
                    Some(Message::CloseSessionForm),
                    button_styles::secondary,
                ))
                .push(page::action(
                    i18n.tr("action-submit"),
                    (!pending).then_some(Message::SubmitSession),
                    button_styles::primary,
                )),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(page::section_title(i18n.tr("session-form-title")))
            .push(fields),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::panel)
    .into()
}

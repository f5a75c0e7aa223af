// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A fixed sidebar on the left, the active screen on the right and the toast
//! overlay stacked above both.

use super::{Message, Tab, TabCounts};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::badge;
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{NotificationCenter, Toast};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::{coaches, members, plans};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: Tab,
    pub members: &'a members::State,
    pub coaches: &'a coaches::State,
    pub plans: &'a plans::State,
    pub counts: &'a TabCounts,
    pub notifications: &'a NotificationCenter,
    pub api_host: &'a str,
}

/// Renders the sidebar, the active screen and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.tab {
        Tab::Members => ctx.members.view(ctx.i18n).map(Message::Members),
        Tab::Coaches => ctx.coaches.view(ctx.i18n).map(Message::Coaches),
        Tab::Plans => ctx.plans.view(ctx.i18n).map(Message::Plans),
    };

    let layout = Row::new()
        .push(view_sidebar(&ctx))
        .push(
            Container::new(screen)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(layout)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn view_sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut nav = Column::new().spacing(spacing::XXS);
    for tab in Tab::ALL {
        let mut label = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr(tab.label_key())).size(typography::BODY))
            .push(Space::new().width(Length::Fill));
        if let Some(count) = ctx.counts.get(tab) {
            label = label.push(badge(count.to_string(), palette::BRAND_500));
        }
        nav = nav.push(
            button(label)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(button_styles::nav(ctx.tab == tab))
                .on_press(Message::SelectTab(tab)),
        );
    }

    let brand = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("app-brand")).size(typography::TITLE_SM))
        .push(page::muted(i18n.tr("app-tagline")));

    let footer = Column::new()
        .spacing(spacing::XXS)
        .push(page::muted(
            i18n.tr_with_args("sidebar-api", &[("host", ctx.api_host)]),
        ))
        .push(page::muted(i18n.tr("sidebar-shortcuts")));

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .height(Length::Fill)
            .push(brand)
            .push(nav)
            .push(Space::new().height(Length::Fill))
            .push(footer),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::sidebar)
    .into()
}

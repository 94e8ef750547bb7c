// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the site list with the toast overlay
//! stacked on top.

use super::Message;
use crate::sites::{Site, SiteRegistry, SiteStatus};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::{
    button, container, rule, scrollable, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub sites: &'a SiteRegistry,
    pub notifications: &'a Manager<Message>,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Sites").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(
                Text::new(format!("Theme: {}", ctx.theme_mode.label()))
                    .size(typography::BODY_SM),
            )
            .on_press(Message::ToggleTheme)
            .style(button::secondary),
        );

    let body: Element<'_, Message> = if ctx.sites.is_empty() {
        Container::new(Text::new("No sites yet").size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        let rows = Column::with_children(ctx.sites.iter().map(site_row)).spacing(spacing::XS);
        scrollable(rows).height(Length::Fill).into()
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(rule::horizontal(1))
        .push(body);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(content).width(Length::Fill).height(Length::Fill))
        .push(Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification))
        .into()
}

fn site_row(site: &Site) -> Element<'_, Message> {
    let mut details = site.city.clone();
    if let Some(date) = site.start_date {
        if !details.is_empty() {
            details.push_str(" · ");
        }
        details.push_str(&format!("since {}", date.format("%Y-%m-%d")));
    }

    let identity = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(site.name.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(details)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let status_color = status_color(site.status);
    let badge = Container::new(
        Text::new(site.status.label())
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(status_color),
            }),
    )
    .width(Length::Fixed(sizing::STATUS_BADGE_WIDTH))
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::XXS)
    .style(move |_theme: &Theme| container::Style {
        border: iced::Border {
            color: status_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    });

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(identity)
        .push(badge)
        .push(
            button(Text::new("Next status").size(typography::BODY_SM))
                .on_press(Message::AdvanceStatus(site.id))
                .style(button::secondary),
        )
        .push(
            button(Text::new("Delete").size(typography::BODY_SM))
                .on_press(Message::DeleteSite(site.id))
                .style(button::danger),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn status_color(status: SiteStatus) -> Color {
    match status {
        SiteStatus::Planned => palette::INFO_500,
        SiteStatus::Active => palette::SUCCESS_500,
        SiteStatus::Suspended => palette::WARNING_500,
        SiteStatus::Completed => palette::GRAY_400,
    }
}

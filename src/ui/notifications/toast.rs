// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an undo button for deferred
//! actions and a dismiss button. The countdown bar is cosmetic: the manager's
//! timer decides when a deferred action actually fires.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `remaining` is the share of the undo window still left; it is only
    /// drawn for deferred notifications.
    pub fn view(notification: &Notification, remaining: Option<f32>) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let notification_id = notification.id();

        let icon_widget = Text::new(severity.glyph())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        // Layout: [icon] [message] [undo] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = notification.deferred_action() {
            let undo_button = button(Text::new(action.label()).size(typography::BODY_SM))
                .on_press(Message::Undo(notification_id))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| {
                    undo_button_style(theme, status, accent_color)
                });
            content = content.push(undo_button);
        }

        let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);

        let mut body = Column::new().spacing(spacing::XXS).push(content);
        if notification.is_deferred() {
            if let Some(fraction) = remaining {
                body = body.push(progress_bar(0.0..=1.0, fraction));
            }
        }

        // Toast container with accent border
        Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with every notification the manager holds.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically in
    /// insertion order.
    pub fn view_overlay<M>(manager: &Manager<M>, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .notifications()
            .map(|notification| {
                let remaining = manager.remaining_fraction(notification.id(), now);
                Self::view(notification, remaining)
            })
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Position in bottom-right with padding
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the undo button: accent-colored label, tinted on hover.
fn undo_button_style(
    theme: &Theme,
    status: button::Status,
    accent_color: Color,
) -> button::Style {
    let base = theme.extended_palette().background.base;
    let tint = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..accent_color
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            base.text
        } else {
            accent_color
        },
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button: flat, gray wash on interaction.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let wash = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (wash(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (wash(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

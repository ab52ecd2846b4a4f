// SPDX-License-Identifier: MPL-2.0
//! Card widget rendering a single notification.
//!
//! The card shows the icon, the optional title and the message, with a
//! severity-colored accent border. It holds no timers; an interactive card
//! only reports taps, and the owner decides what a tap does.

use super::notification::{Notification, NotificationId};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, mouse, Color, Element, Length, Theme};

/// Messages emitted by a notification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    /// The card for this notification was tapped.
    Tapped(NotificationId),
}

/// Visual parameters that vary between the HUD and the toast layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub width: f32,
    /// Multiplier applied to the icon size (the toast pulse).
    pub icon_scale: f32,
    pub interactive: bool,
}

impl CardStyle {
    #[must_use]
    pub fn hud() -> Self {
        Self {
            width: sizing::HUD_WIDTH,
            icon_scale: 1.0,
            interactive: true,
        }
    }

    #[must_use]
    pub fn toast() -> Self {
        Self {
            width: sizing::TOAST_WIDTH,
            icon_scale: 1.0,
            interactive: true,
        }
    }
}

/// Renders `notification` as a card.
pub fn card<'a>(notification: &Notification, style: CardStyle) -> Element<'a, OverlayMessage> {
    let accent_color = notification.severity().color();

    let glyph = icons::glyph(notification.system_image(), notification.severity());
    let icon = Text::new(glyph)
        .size(sizing::ICON_MD * style.icon_scale)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    // Fixed slot so a pulsing icon doesn't shift the text.
    let icon_slot = Container::new(icon)
        .width(Length::Fixed(sizing::ICON_LG * 1.25))
        .height(Length::Fixed(sizing::ICON_LG * 1.25))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut lines = Column::new().spacing(spacing::XXS);
    if let Some(title) = notification.title() {
        lines = lines.push(
            Text::new(title.to_owned())
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
    }
    lines = lines.push(
        Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon_slot)
        .push(Container::new(lines).width(Length::Fill));

    let container = Container::new(content)
        .width(Length::Fixed(style.width))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_container_style(theme, accent_color));

    if style.interactive {
        mouse_area(container)
            .on_press(OverlayMessage::Tapped(notification.id()))
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        container.into()
    }
}

/// Style function for the card container.
fn card_container_style(theme: &Theme, accent_color: Color) -> iced::widget::container::Style {
    let bg_color = Color {
        a: opacity::SURFACE,
        ..theme.extended_palette().background.base.color
    };

    iced::widget::container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! Layers, bottom to top: primary content, the optional modal sheet with
//! its scrim, the HUD surface and the toast layer.

use super::{App, Message};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::notifications::DisplayEdge;
use iced::widget::{button, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, mouse, Color, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(primary(app.presses));

    if app.sheet_open {
        layers = layers.push(sheet());
    }

    layers
        .push(app.surface.view().map(Message::HudOverlay))
        .push(app.toasts.view().map(Message::Toast))
        .into()
}

fn primary<'a>(presses: u32) -> Element<'a, Message> {
    let edges = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Top")).on_press(Message::ShowBanner(DisplayEdge::Top)))
        .push(button(Text::new("Bottom")).on_press(Message::ShowBanner(DisplayEdge::Bottom)))
        .push(button(Text::new("Leading")).on_press(Message::ShowBanner(DisplayEdge::Leading)))
        .push(button(Text::new("Trailing")).on_press(Message::ShowBanner(DisplayEdge::Trailing)));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Queue three")).on_press(Message::ShowBurst))
        .push(button(Text::new("Toast")).on_press(Message::BroadcastToast))
        .push(button(Text::new("Open sheet")).on_press(Message::ToggleSheet));

    // Full-width target so presses next to a banner visibly land here.
    let counter = button(
        Container::new(Text::new(format!("Content pressed {presses} times")).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .style(button::secondary)
    .on_press(Message::PrimaryPressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Banners").size(typography::TITLE_MD))
        .push(edges)
        .push(actions)
        .push(counter);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn sheet<'a>() -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Modal sheet").size(typography::TITLE_MD))
        .push(
            Text::new("Banners and toasts stay above this sheet.")
                .size(typography::BODY),
        )
        .push(button(Text::new("Close")).on_press(Message::ToggleSheet));

    let panel = Container::new(body)
        .width(Length::Fixed(sizing::SHEET_WIDTH))
        .padding(spacing::LG)
        .style(sheet_style);

    let scrim = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    // A non-None interaction hides the cursor from the content below.
    mouse_area(scrim)
        .interaction(mouse::Interaction::Idle)
        .into()
}

fn sheet_style(theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

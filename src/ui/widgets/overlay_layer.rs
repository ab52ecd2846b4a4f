// SPDX-License-Identifier: MPL-2.0
//! A full-window layer that positions one overlay and lets every other
//! pointer interaction fall through to the layers beneath it.
//!
//! Put it on top of an Iced `Stack`. The layer itself is never a hit target:
//! it reports `mouse::Interaction::None` outside the overlay bounds, which
//! makes the stack hand the cursor to the lower layers, and it drops pointer
//! presses that land outside the overlay.

use crate::ui::notifications::placement::{self, HitTarget, Placement};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Rectangle, Size};

/// Positions `content` against an edge of the window.
pub struct OverlayLayer<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    placement: Placement,
    visibility: f32,
    interactive: bool,
}

impl<'a, Message, Theme, Renderer> OverlayLayer<'a, Message, Theme, Renderer> {
    /// Creates a fully visible, interactive layer.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, placement: Placement) -> Self {
        Self {
            content: content.into(),
            placement,
            visibility: 1.0,
            interactive: true,
        }
    }

    /// Sets how far the content has slid in (0.0 hidden, 1.0 resting).
    #[must_use]
    pub fn visibility(mut self, visibility: f32) -> Self {
        self.visibility = visibility.clamp(0.0, 1.0);
        self
    }

    /// Whether presses on the overlay reach its content. A non-interactive
    /// overlay still shields the layers beneath it.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

fn overlay_bounds(layout: Layout<'_>) -> Option<Rectangle> {
    layout.children().next().map(|child| child.bounds())
}

fn target(layout: Layout<'_>, cursor: mouse::Cursor) -> HitTarget {
    match cursor.position() {
        Some(point) => placement::hit_test(point, overlay_bounds(layout)),
        None => HitTarget::PassThrough,
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for OverlayLayer<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let window = limits.max();
        let content_limits = layout::Limits::new(Size::ZERO, window);
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits);

        let bounds = placement::place(window, content.size(), &self.placement, self.visibility);

        layout::Node::with_children(window, vec![content.move_to(bounds.position())])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if is_pointer_press(event)
            && (!self.interactive || target(layout, cursor) == HitTarget::PassThrough)
        {
            return;
        }

        let Some(content_layout) = layout.children().next() else {
            return;
        };
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if target(layout, cursor) == HitTarget::PassThrough {
            return mouse::Interaction::None;
        }
        if !self.interactive {
            return mouse::Interaction::Idle;
        }

        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::None;
        };
        match self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            cursor,
            viewport,
            renderer,
        ) {
            // Still over the overlay: keep the layers beneath from reacting.
            mouse::Interaction::None => mouse::Interaction::Idle,
            interaction => interaction,
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content
                .as_widget_mut()
                .operate(&mut tree.children[0], content_layout, renderer, operation);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<OverlayLayer<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(layer: OverlayLayer<'a, Message, Theme, Renderer>) -> Self {
        Self::new(layer)
    }
}

fn is_pointer_press(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse::Event::ButtonPressed(_) | mouse::Event::ButtonReleased(_))
            | Event::Touch(touch::Event::FingerPressed { .. } | touch::Event::FingerLifted { .. })
    )
}

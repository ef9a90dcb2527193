// SPDX-License-Identifier: MPL-2.0
//! Rendering of a menu container: the trigger button and, when open, the
//! dropdown with its items.

use super::controller::{Controller, Menu, MenuId, Message};
use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::icons;
use iced::widget::{button, container, mouse_area, svg, Column, Container, Text};
use iced::{alignment::Horizontal, Border, Element, Length, Theme};

/// Renders the container of menu `id`, or nothing visible if it is unknown.
pub fn view<A>(controller: &Controller<A>, id: MenuId) -> Element<'_, Message<A>>
where
    A: Clone + 'static,
{
    match controller.get(id) {
        Some(menu) => view_menu(menu, controller.is_open(id)),
        None => Text::new("").into(),
    }
}

/// Renders one menu in the given state.
///
/// The whole container reports pointer enter/exit so the window-level press
/// listener can tell inside presses from outside ones.
pub fn view_menu<A>(menu: &Menu<A>, open: bool) -> Element<'_, Message<A>>
where
    A: Clone + 'static,
{
    let id = menu.id();

    let trigger = button(
        icons::sized(icons::ellipsis_vertical(), sizing::ICON_SM).style(
            |theme: &Theme, _status| svg::Style {
                color: Some(theme.palette().text),
            },
        ),
    )
    .on_press(Message::Toggle(id))
    .padding(spacing::XXS)
    .style(trigger_style(open));

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Right)
        .push(trigger);

    if open {
        column = column.push(build_dropdown(menu));
    }

    mouse_area(column)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .into()
}

fn build_dropdown<A>(menu: &Menu<A>) -> Element<'_, Message<A>>
where
    A: Clone + 'static,
{
    let items: Vec<Element<'_, Message<A>>> = menu
        .items()
        .iter()
        .map(|item| {
            button(Text::new(item.label.as_str()))
                .on_press(Message::Select(menu.id(), item.action.clone()))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(menu_item_style)
                .into()
        })
        .collect();

    Container::new(Column::with_children(items).spacing(spacing::XXS))
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn trigger_style(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let highlighted = open || matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: highlighted.then(|| palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

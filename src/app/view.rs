// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::catalogue::{Catalogue, Entry, RowAction};
use super::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::menu::{self, Controller};
use crate::ui::notifications::{Manager, Severity, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalogue: &'a Catalogue,
    pub menus: &'a Controller<RowAction>,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
}

/// Renders the catalogue page with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .push(toolbar(ctx.theme_mode))
        .push(
            Scrollable::new(catalogue_list(ctx.catalogue, ctx.menus))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(theme_mode: ThemeMode) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("Library").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    for severity in Severity::ALL {
        row = row.push(
            button(Text::new(severity_label(severity)))
                .on_press(Message::Show(severity))
                .style(styles::button::tinted(severity.color())),
        );
    }

    row = row.push(
        button(Text::new(format!("Theme: {}", theme_mode.label())))
            .on_press(Message::CycleTheme)
            .style(styles::button::tinted(palette::GRAY_400)),
    );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn catalogue_list<'a>(
    catalogue: &'a Catalogue,
    menus: &'a Controller<RowAction>,
) -> Element<'a, Message> {
    if catalogue.is_empty() {
        return Container::new(Text::new("The library is empty."))
            .padding(spacing::LG)
            .into();
    }

    let rows: Vec<Element<'a, Message>> = catalogue
        .entries()
        .map(|entry| catalogue_row(entry, menus))
        .collect();

    Column::with_children(rows)
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .into()
}

fn catalogue_row<'a>(entry: &'a Entry, menus: &'a Controller<RowAction>) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.title.as_str()))
        .push(Text::new(entry.author.as_str()).size(typography::CAPTION));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Top)
        .push(Container::new(details).width(Length::Fill))
        .push(menu::view(menus, entry.menu).map(Message::Menu));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::row)
        .into()
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Info",
        Severity::Success => "Success",
        Severity::Error => "Error",
    }
}

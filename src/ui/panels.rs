//! One view function per tab panel.
//!
//! `Portfolio::view` builds exactly one of these per frame, selected by the
//! active tab; the other five are not constructed at all.

use crate::app::Message;
use crate::contact::ContactForm;
use crate::content::{self, Tab};
use crate::ui::styles;
use crate::ui::theme::Palette;
use iced::widget::{button, column, container, image, row, text, text_input};
use iced::Element;

pub fn home(palette: Palette) -> Element<'static, Message> {
    let explore = button(text("Explore My Work").size(18))
        .on_press(Message::TabSelected(Tab::Work))
        .padding(10)
        .style(styles::primary_button_style(palette));

    column![
        text(content::HERO_HEADING).size(32),
        text(content::HERO_INTRO).size(18),
        explore,
    ]
    .spacing(16)
    .padding(16)
    .into()
}

pub fn about(
    palette: Palette,
    profile: Option<image::Handle>,
    load_failed: bool,
) -> Element<'static, Message> {
    // Broken or still-loading image falls back to a neutral box of the same
    // size, like a browser's broken-image placeholder.
    let picture: Element<'static, Message> = match profile {
        Some(handle) => image(handle).width(200).height(200).into(),
        None => {
            let placeholder = if load_failed {
                "Profile picture unavailable"
            } else {
                "Loading profile picture..."
            };
            container(text(placeholder).size(14).color(palette.muted))
                .center(200)
                .style(styles::card_style(palette))
                .into()
        }
    };

    column![
        text("About Me").size(24),
        text(content::ABOUT_BLURB).size(18),
        picture,
    ]
    .spacing(16)
    .padding(16)
    .into()
}

pub fn work(palette: Palette) -> Element<'static, Message> {
    let cards = row(content::PROJECTS.iter().map(|project| {
        container(
            column![text(project.name).size(18), text(project.desc).size(16)].spacing(8),
        )
        .padding(12)
        .width(200)
        .height(200)
        .style(styles::card_style(palette))
        .into()
    }))
    .spacing(16);

    column![text("My Work").size(24), cards]
        .spacing(16)
        .padding(16)
        .into()
}

pub fn skills(_palette: Palette) -> Element<'static, Message> {
    let entries = row(content::SKILLS.iter().map(|skill| {
        column![text(skill.name).size(18), text(skill.desc).size(16)]
            .spacing(8)
            .width(280)
            .into()
    }))
    .spacing(24);

    column![text("My Skills").size(24), entries]
        .spacing(16)
        .padding(16)
        .into()
}

pub fn blog(_palette: Palette) -> Element<'static, Message> {
    let entries = row(content::POSTS.iter().map(|post| {
        column![text(post.title).size(18), text(post.desc).size(16)]
            .spacing(8)
            .width(280)
            .into()
    }))
    .spacing(24);

    column![text("My Blog").size(24), entries]
        .spacing(16)
        .padding(16)
        .into()
}

pub fn contact(palette: Palette, form: &ContactForm) -> Element<'_, Message> {
    let name_input = text_input("Name", &form.name)
        .on_input(Message::NameChanged)
        .padding(10)
        .style(styles::text_input_style(palette));

    let email_input = text_input("Email", &form.email)
        .on_input(Message::EmailChanged)
        .padding(10)
        .style(styles::text_input_style(palette));

    let message_input = text_input("Message", &form.message)
        .on_input(Message::MessageChanged)
        .padding(10)
        .style(styles::text_input_style(palette));

    // Stand-in for the browser's native constraint message.
    let hint: Option<Element<'_, Message>> =
        if !form.message.is_empty() && !form.message_valid() {
            Some(
                text(format!(
                    "Message must be at least {} characters.",
                    ContactForm::MIN_MESSAGE_LEN
                ))
                .size(14)
                .color(palette.muted)
                .into(),
            )
        } else {
            None
        };

    // Submission stays disabled until every field passes validation; a valid
    // submit goes nowhere (there is no backend).
    let submit = button(text("Send Message").size(18))
        .padding(10)
        .style(styles::primary_button_style(palette))
        .on_press_maybe(form.is_valid().then_some(Message::SubmitContact));

    column![
        text("Get in Touch").size(24),
        text(content::CONTACT_BLURB).size(18),
        name_input,
        email_input,
        message_input,
    ]
    .push_maybe(hint)
    .push(submit)
    .spacing(16)
    .padding(16)
    .max_width(640)
    .into()
}

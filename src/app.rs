use crate::assets;
use crate::contact::ContactForm;
use crate::content::{self, Tab};
use crate::ui::panels;
use crate::ui::styles;
use crate::ui::theme::{self, Palette};
use iced::widget::{button, column, container, horizontal_space, image, row, scrollable, text};
use iced::{Element, Length, Task, Theme};

// Iced Application State
pub struct Portfolio {
    pub active_tab: Tab,
    pub dark_mode: bool,
    pub form: ContactForm,
    profile_image: Option<image::Handle>,
    profile_image_failed: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ToggleDarkMode,
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    SubmitContact,
    ProfileImageLoaded(Result<Vec<u8>, String>),
}

impl Portfolio {
    pub fn new() -> (Self, Task<Message>) {
        (
            Portfolio {
                active_tab: Tab::default(),
                dark_mode: false,
                form: ContactForm::default(),
                profile_image: None,
                profile_image_failed: false,
            },
            Task::perform(
                assets::fetch_profile_image(content::PROFILE_IMAGE_URL),
                |result| Message::ProfileImageLoaded(result.map_err(|e| e.to_string())),
            ),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::NameChanged(name) => {
                self.form.name = name;
            }
            Message::EmailChanged(email) => {
                self.form.email = email;
            }
            Message::MessageChanged(message) => {
                self.form.message = message;
            }
            Message::SubmitContact => {
                // There is no backend: a valid submission is acknowledged in
                // the log and nothing else happens. An invalid one is blocked
                // with no state change (the button is also disabled then).
                if self.form.is_valid() {
                    log::info!("contact form submitted by {}", self.form.name.trim());
                } else {
                    log::debug!("contact submission blocked by field validation");
                }
            }
            Message::ProfileImageLoaded(Ok(bytes)) => {
                self.profile_image = Some(image::Handle::from_bytes(bytes));
            }
            Message::ProfileImageLoaded(Err(e)) => {
                log::warn!("failed to load profile image: {}", e);
                self.profile_image_failed = true;
            }
        }
        Task::none()
    }

    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.dark_mode)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::for_mode(self.dark_mode);
        let navbar = self.navbar(palette);

        // Exactly one panel is built per frame; the other five don't exist.
        let panel = match self.active_tab {
            Tab::Home => panels::home(palette),
            Tab::About => panels::about(
                palette,
                self.profile_image.clone(),
                self.profile_image_failed,
            ),
            Tab::Work => panels::work(palette),
            Tab::Skills => panels::skills(palette),
            Tab::Blog => panels::blog(palette),
            Tab::Contact => panels::contact(palette, &self.form),
        };

        let content = column![navbar, scrollable(panel).height(Length::Fill)];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn navbar(&self, palette: Palette) -> Element<'_, Message> {
        let title = text(content::SITE_TITLE).size(24);

        let tabs = row(Tab::ALL.iter().map(|&tab| {
            button(text(tab.label()).size(16))
                .on_press(Message::TabSelected(tab))
                .padding(8)
                .style(styles::nav_button_style(tab == self.active_tab, palette))
                .into()
        }))
        .spacing(8);

        let toggle_label = if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        };
        let toggle = button(text(toggle_label).size(16))
            .on_press(Message::ToggleDarkMode)
            .padding(8)
            .style(styles::toggle_button_style(palette));

        let bar = row![title, horizontal_space(), tabs, toggle]
            .spacing(16)
            .align_y(iced::Alignment::Center);

        container(bar)
            .padding(16)
            .width(Length::Fill)
            .style(styles::navbar_style(palette))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> Portfolio {
        Portfolio::new().0
    }

    #[test]
    fn initial_state_is_home_and_light() {
        let app = new_app();
        assert_eq!(app.active_tab, Tab::Home);
        assert!(!app.dark_mode);
        assert_eq!(app.form, ContactForm::default());
        assert!(app.profile_image.is_none());
        assert!(!app.profile_image_failed);
    }

    #[test]
    fn every_tab_is_selectable_from_every_tab() {
        let mut app = new_app();
        for from in Tab::ALL {
            let _ = app.update(Message::TabSelected(from));
            for to in Tab::ALL {
                let _ = app.update(Message::TabSelected(to));
                assert_eq!(app.active_tab, to);
                let _ = app.update(Message::TabSelected(from));
            }
        }
    }

    #[test]
    fn tab_selection_changes_nothing_else() {
        let mut app = new_app();
        let _ = app.update(Message::TabSelected(Tab::About));
        assert_eq!(app.active_tab, Tab::About);
        assert!(!app.dark_mode);
        assert_eq!(app.form, ContactForm::default());
    }

    #[test]
    fn dark_mode_toggle_round_trips() {
        let mut app = new_app();
        let _ = app.update(Message::ToggleDarkMode);
        assert!(app.dark_mode);
        assert!(matches!(app.theme(), Theme::Dark));

        let _ = app.update(Message::ToggleDarkMode);
        assert!(!app.dark_mode);
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn dark_mode_leaves_the_active_tab_alone() {
        let mut app = new_app();
        let _ = app.update(Message::TabSelected(Tab::Skills));
        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.active_tab, Tab::Skills);
    }

    // The "Explore My Work" shortcut on the home panel emits the same
    // message as the Work nav button.
    #[test]
    fn explore_shortcut_lands_on_work() {
        let mut app = new_app();
        assert_eq!(app.active_tab, Tab::Home);
        let _ = app.update(Message::TabSelected(Tab::Work));
        assert_eq!(app.active_tab, Tab::Work);
    }

    #[test]
    fn form_edits_are_controlled_per_field() {
        let mut app = new_app();
        let _ = app.update(Message::NameChanged("Sai".into()));
        let _ = app.update(Message::EmailChanged("sai@example.com".into()));
        let _ = app.update(Message::MessageChanged("Hello there, WebXR!".into()));
        assert_eq!(app.form.name, "Sai");
        assert_eq!(app.form.email, "sai@example.com");
        assert_eq!(app.form.message, "Hello there, WebXR!");
    }

    #[test]
    fn submit_with_short_message_changes_no_state() {
        let mut app = new_app();
        let _ = app.update(Message::NameChanged("Sai".into()));
        let _ = app.update(Message::EmailChanged("sai@example.com".into()));
        let _ = app.update(Message::MessageChanged("too short".into()));
        assert!(!app.form.is_valid());

        let form_before = app.form.clone();
        let tab_before = app.active_tab;
        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.form, form_before);
        assert_eq!(app.active_tab, tab_before);
    }

    #[test]
    fn valid_submit_also_changes_no_state() {
        let mut app = new_app();
        let _ = app.update(Message::NameChanged("Sai".into()));
        let _ = app.update(Message::EmailChanged("sai@example.com".into()));
        let _ = app.update(Message::MessageChanged("A long enough message.".into()));
        assert!(app.form.is_valid());

        let form_before = app.form.clone();
        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.form, form_before);
    }

    #[test]
    fn profile_image_bytes_become_a_handle() {
        let mut app = new_app();
        let _ = app.update(Message::ProfileImageLoaded(Ok(vec![0u8; 16])));
        assert!(app.profile_image.is_some());
        assert!(!app.profile_image_failed);
    }

    #[test]
    fn profile_image_failure_flags_the_fallback() {
        let mut app = new_app();
        let _ = app.update(Message::ProfileImageLoaded(Err("HTTP 404".into())));
        assert!(app.profile_image.is_none());
        assert!(app.profile_image_failed);
    }
}

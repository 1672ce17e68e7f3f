use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Background, Color, Element, Font, Length};

use crate::core::models::{ExtractorState, ThemeMode};
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractorViewMessage {
    ChooseImage,
    DownloadText,
    ToggleTheme,
}

pub struct ExtractorView<'a> {
    state: &'a ExtractorState,
    theme_mode: &'a ThemeMode,
}

impl<'a> ExtractorView<'a> {
    pub fn new(state: &'a ExtractorState, theme_mode: &'a ThemeMode) -> Self {
        Self { state, theme_mode }
    }

    pub fn render_ui(&self) -> Element<'a, ExtractorViewMessage> {
        let theme = app_theme::get_theme(self.theme_mode);

        let mut content = column![self.render_header(), self.render_drop_zone()]
            .spacing(24)
            .max_width(760.0)
            .align_x(Alignment::Center);

        if let Some(image_reference) = self.state.image() {
            let preview = image::viewer(image_reference.image_handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(320.0));

            content = content.push(
                container(preview)
                    .padding(16)
                    .width(Length::Fill)
                    .style(|theme| app_theme::panel_style(theme)),
            );
        }

        if self.state.has_text() {
            content = content.push(self.render_text_section());
        }

        let page = scrollable(
            container(content)
                .padding(32)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .height(Length::Fill);

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_header(&self) -> Element<'a, ExtractorViewMessage> {
        let title = text(global_constants::APPLICATION_TITLE).size(36);
        let subtitle = text(global_constants::APPLICATION_SUBTITLE)
            .size(16)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.45, 0.47, 0.52, 1.0)),
            });

        let theme_label = match self.theme_mode {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };
        let theme_toggle = button(text(theme_label).size(13))
            .padding([6, 16])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(ExtractorViewMessage::ToggleTheme);

        column![
            row![Space::new().width(Length::Fill), theme_toggle],
            title,
            subtitle
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
    }

    fn render_drop_zone(&self) -> Element<'a, ExtractorViewMessage> {
        let is_loading = self.state.is_loading();

        let label = if is_loading {
            global_constants::STATUS_PROCESSING
        } else {
            "Choose Image"
        };

        let choose_btn = button(text(label).size(16))
            .padding([12, 28])
            .style(|theme, status| app_theme::choose_button_style(theme, status))
            .on_press_maybe(
                self.state
                    .can_accept_image()
                    .then_some(ExtractorViewMessage::ChooseImage),
            );

        let hint = text("or drag and drop your image here")
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
            });

        let status = text(self.state.status().to_string()).size(12);

        let drag_active = self.state.is_drag_active();
        container(
            column![choose_btn, hint, status]
                .spacing(10)
                .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fixed(200.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(200.0))
        .style(move |_theme| app_theme::drop_zone_style(drag_active))
        .into()
    }

    fn render_text_section(&self) -> Element<'a, ExtractorViewMessage> {
        let extracted = self.state.text().unwrap_or_default();

        let heading = text("Extracted Text").size(24);

        let body = scrollable(
            container(text(extracted).font(Font::MONOSPACE).size(14))
                .padding(16)
                .width(Length::Fill),
        )
        .height(Length::Shrink);

        let text_panel = container(column![heading, container(body).max_height(400.0)].spacing(16))
            .padding(24)
            .width(Length::Fill)
            .style(|theme| app_theme::panel_style(theme));

        let download_btn = button(text("Download Text").size(16))
            .padding([12, 28])
            .style(|theme, status| app_theme::download_button_style(theme, status))
            .on_press(ExtractorViewMessage::DownloadText);

        column![text_panel, download_btn]
            .spacing(16)
            .align_x(Alignment::Center)
            .into()
    }
}

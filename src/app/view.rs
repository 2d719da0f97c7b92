use super::messages::Message;
use super::state::App;
use flipbook_core::{PageIndex, ViewMode};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Row, button, column, container, image, row, text, tooltip};
use iced::{ContentFit, Element, Length};

const PAGE_SPACING: f32 = 4.0;
const CONTROL_SPACING: f32 = 10.0;
const SINGLE_PAGE_MAX_WIDTH: f32 = 560.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let view = &self.book.view;

        let prev_button = button("Précédent")
            .on_press_maybe(view.prev_enabled.then_some(Message::PreviousPage));
        let next_button =
            button("Suivant").on_press_maybe(view.next_enabled.then_some(Message::NextPage));

        let mute = self.audio.mute_button();
        let mute_button = tooltip(
            button(text(mute.icon)).on_press(Message::ToggleMute),
            text(mute.label),
            tooltip::Position::Bottom,
        );

        let controls = row![
            prev_button,
            text(view.label)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            next_button,
            mute_button,
        ]
        .spacing(CONTROL_SPACING)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        column![controls, self.page_area()]
            .spacing(CONTROL_SPACING)
            .padding(16)
            .into()
    }

    fn page_area(&self) -> Element<'_, Message> {
        let visible = self.book.layout.visible_pages(self.book.current_page);
        let pages = visible
            .into_iter()
            .fold(Row::new().spacing(PAGE_SPACING), |row, index| {
                row.push(self.page_image(index))
            });

        // A single page sits in the middle; an open spread fills the width.
        let max_width = match self.book.mode.active() {
            Some(ViewMode::Spread) => f32::INFINITY,
            Some(ViewMode::Cover | ViewMode::Back) | None => SINGLE_PAGE_MAX_WIDTH,
        };

        container(pages.width(Length::Fill).height(Length::Fill))
            .max_width(max_width)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn page_image(&self, index: PageIndex) -> Element<'_, Message> {
        match self.book.page_path(index) {
            Some(path) if path.exists() => image(image::Handle::from_path(path))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            _ => container(text(format!("Page {}", index.get() + 1)))
                .center(Length::Fill)
                .into(),
        }
    }
}

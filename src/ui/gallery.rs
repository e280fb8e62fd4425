//! Result grid: one card per image, download action revealed on hover

use iced::widget::{button, column, container, image, mouse_area, scrollable, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use super::theme;
use crate::app::{ImageCard, Message};

const CARD_WIDTH: u16 = 340;
const CARD_HEIGHT: u16 = 288;

/// Loading presentation shown while a search request is in flight
pub fn loading<'a>() -> Element<'a, Message> {
    container(
        column![
            text("◌").size(30).color(theme::PRIMARY),
            text("Searching for amazing images...")
                .size(15)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(Padding::new(48.0))
    .into()
}

/// The result grid; an empty result set renders as an empty region
pub fn view(cards: &[ImageCard], hovered: Option<usize>) -> Element<'_, Message> {
    if cards.is_empty() {
        return Space::with_height(0).into();
    }

    let items: Vec<Element<'_, Message>> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| card_view(index, card, hovered == Some(index)))
        .collect();

    scrollable(Wrap::with_elements(items).spacing(24.0).line_spacing(24.0))
        .height(Length::Fill)
        .into()
}

fn card_view(index: usize, card: &ImageCard, hovered: bool) -> Element<'_, Message> {
    let visual: Element<'_, Message> = match &card.handle {
        Some(handle) => image(handle.clone())
            .width(CARD_WIDTH)
            .height(CARD_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("◌").size(24).color(theme::TEXT_MUTED))
            .center_x(CARD_WIDTH)
            .center_y(CARD_HEIGHT)
            .style(theme::placeholder)
            .into(),
    };

    let body: Element<'_, Message> = if hovered {
        let download = button(
            container(text("Download Image").size(14))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .on_press(Message::DownloadPressed(index))
        .padding(Padding::from([10.0, 16.0]))
        .width(Length::Fill)
        .style(theme::download_button);

        let overlay = container(download)
            .padding(Padding::new(12.0))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(iced::alignment::Vertical::Bottom);

        stack![visual, overlay].into()
    } else {
        visual
    };

    mouse_area(container(body).style(theme::card))
        .on_enter(Message::CardHovered(index))
        .on_exit(Message::CardLeft(index))
        .into()
}

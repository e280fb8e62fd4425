//! Search bar widget

use iced::widget::{container, text_input};
use iced::{Element, Length, Padding};

use super::theme;

/// Prompt input with submit-on-enter
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    container(
        text_input("Enter your image prompt...", value)
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(Padding::new(14.0))
            .size(18)
            .style(theme::search_input),
    )
    .padding(Padding::from([4.0, 12.0]))
    .width(Length::Fill)
    .style(theme::search_panel)
    .into()
}

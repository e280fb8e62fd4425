//! Core application state and Iced application implementation
//!
//! Elm-style: all state lives here and every mutation goes through `update`.
//! The loading flag and the result set are only ever written together, in
//! the `SearchFinished` arm.

use std::path::PathBuf;

use iced::widget::{column, container, image, text, Space};
use iced::{Alignment, Element, Length, Padding, Task, Theme};

use crate::backend::api::{ApiError, BackendClient};
use crate::backend::types::ImageRecord;
use crate::config::Config;
use crate::native;
use crate::ui::{gallery, search_bar, theme};

/// One rendered result: the record plus its lazily fetched pixels
#[derive(Debug, Clone)]
pub struct ImageCard {
    pub record: ImageRecord,
    pub handle: Option<image::Handle>,
}

impl ImageCard {
    fn new(record: ImageRecord) -> Self {
        Self {
            record,
            handle: None,
        }
    }
}

pub struct ImageFinder {
    prompt: String,
    results: Vec<ImageCard>,
    loading: bool,
    hovered: Option<usize>,
    /// Bumped each time the result set is replaced. Image fetches carry the
    /// value they were spawned under, so a fetch that settles after its grid
    /// is gone gets discarded instead of landing in the wrong card.
    generation: u64,
    status: Option<String>,
    backend: BackendClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    PromptSubmitted,
    SearchFinished(Result<Vec<ImageRecord>, ApiError>),
    ImageFetched {
        generation: u64,
        index: usize,
        result: Result<image::Handle, ApiError>,
    },
    CardHovered(usize),
    CardLeft(usize),
    DownloadPressed(usize),
    DownloadFinished(Result<PathBuf, String>),
}

impl Default for ImageFinder {
    fn default() -> Self {
        let config = Config::get();
        Self {
            prompt: String::new(),
            results: Vec::new(),
            loading: false,
            hovered: None,
            generation: 0,
            status: None,
            backend: BackendClient::new(&config.search_url, &config.image_url),
        }
    }
}

/// Trimmed prompt, or `None` when submission should be a no-op
fn submitted_term(prompt: &str) -> Option<String> {
    let term = prompt.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_string())
    }
}

impl ImageFinder {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Task::none()
            }

            Message::PromptSubmitted => match submitted_term(&self.prompt) {
                Some(term) => self.run_search(term),
                None => Task::none(),
            },

            Message::SearchFinished(result) => {
                let records = match result {
                    Ok(records) => records,
                    Err(err) => {
                        tracing::error!("Search request failed: {}", err);
                        Vec::new()
                    }
                };

                self.generation += 1;
                self.hovered = None;
                self.results = records.into_iter().map(ImageCard::new).collect();
                self.loading = false;

                self.fetch_card_images()
            }

            Message::ImageFetched {
                generation,
                index,
                result,
            } => {
                if generation == self.generation {
                    match result {
                        Ok(handle) => {
                            if let Some(card) = self.results.get_mut(index) {
                                card.handle = Some(handle);
                            }
                        }
                        Err(err) => tracing::warn!("Image fetch failed: {}", err),
                    }
                }
                Task::none()
            }

            Message::CardHovered(index) => {
                self.hovered = Some(index);
                Task::none()
            }

            Message::CardLeft(index) => {
                // Exit of the previous card can arrive after entering the next
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }

            Message::DownloadPressed(index) => self.download(index),

            Message::DownloadFinished(result) => {
                match result {
                    Ok(path) => self.status = Some(format!("Saved to {}", path.display())),
                    Err(err) => {
                        tracing::error!("Download failed: {}", err);
                        self.status = Some("Download failed".to_string());
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            container(text("◈").size(30).color(theme::PRIMARY))
                .padding(Padding::new(12.0))
                .style(theme::placeholder),
            text("ImageFinder").size(36).color(theme::TEXT),
            text("AI-powered image search").size(16).color(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let search = container(search_bar::view(
            &self.prompt,
            Message::PromptChanged,
            Message::PromptSubmitted,
        ))
        .max_width(760);

        let results: Element<'_, Message> = if self.loading {
            gallery::loading()
        } else {
            gallery::view(&self.results, self.hovered)
        };

        let content = column![header, Space::with_height(24), search]
            .push_maybe(self.status.as_ref().map(|status| {
                container(text(status).size(13).color(theme::TEXT_MUTED))
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(Padding::from([8.0, 0.0]))
            }))
            .push(Space::with_height(24))
            .push(results)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::new(32.0))
            .style(theme::root)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Business Logic
    // ========================================================================

    fn run_search(&mut self, term: String) -> Task<Message> {
        tracing::info!("Searching for: {}", term);
        self.loading = true;
        self.status = None;

        let backend = self.backend.clone();
        Task::perform(
            async move { backend.search(&term).await },
            Message::SearchFinished,
        )
    }

    /// One byte fetch per freshly mapped record, tagged with the generation
    /// the record belongs to.
    fn fetch_card_images(&self) -> Task<Message> {
        let generation = self.generation;
        let fetches = self.results.iter().enumerate().map(|(index, card)| {
            let backend = self.backend.clone();
            let url = card.record.url.clone();
            Task::perform(
                async move { backend.fetch_image(&url).await },
                move |result| Message::ImageFetched {
                    generation,
                    index,
                    result: result.map(|bytes| image::Handle::from_bytes(bytes)),
                },
            )
        });
        Task::batch(fetches)
    }

    /// Re-fetch the image and write it into the Downloads directory, the way
    /// the original page's download link re-requested the URL.
    fn download(&self, index: usize) -> Task<Message> {
        let Some(card) = self.results.get(index) else {
            return Task::none();
        };

        let backend = self.backend.clone();
        let url = card.record.url.clone();
        Task::perform(
            async move {
                let bytes = backend.fetch_image(&url).await.map_err(|e| e.to_string())?;
                native::download::save_to_downloads(&url, bytes).await
            },
            Message::DownloadFinished,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, caption: &str) -> ImageRecord {
        ImageRecord {
            url: format!("http://localhost:8000/images/{}", path),
            caption: caption.to_string(),
        }
    }

    #[test]
    fn test_whitespace_only_submission_is_a_no_op() {
        let mut app = ImageFinder::default();
        for prompt in ["", "   ", " \t\n "] {
            app.prompt = prompt.to_string();
            let _ = app.update(Message::PromptSubmitted);
            assert!(!app.loading, "no request expected for {:?}", prompt);
            assert!(app.results.is_empty());
        }
    }

    #[test]
    fn test_submitted_term_is_trimmed() {
        assert_eq!(
            submitted_term("  sunset over mountains  ").as_deref(),
            Some("sunset over mountains")
        );
        assert_eq!(submitted_term(" \t "), None);
    }

    #[test]
    fn test_loading_brackets_successful_search() {
        let mut app = ImageFinder::default();
        app.prompt = "sunset".to_string();
        let _ = app.update(Message::PromptSubmitted);
        assert!(app.loading);

        let _ = app.update(Message::SearchFinished(Ok(vec![
            record("a.png", "first"),
            record("b.png", "second"),
        ])));
        assert!(!app.loading);

        let urls: Vec<&str> = app.results.iter().map(|c| c.record.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "http://localhost:8000/images/a.png",
                "http://localhost:8000/images/b.png",
            ]
        );
    }

    #[test]
    fn test_failure_degrades_to_empty_results() {
        let mut app = ImageFinder::default();
        app.results = vec![ImageCard::new(record("old.png", "stale"))];
        app.prompt = "anything".to_string();
        let _ = app.update(Message::PromptSubmitted);
        assert!(app.loading);

        let _ = app.update(Message::SearchFinished(Err(ApiError::Transport(
            "connection refused".to_string(),
        ))));
        assert!(!app.loading);
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_result_set_is_replaced_wholesale() {
        let mut app = ImageFinder::default();
        let _ = app.update(Message::SearchFinished(Ok(vec![
            record("a.png", ""),
            record("b.png", ""),
        ])));
        assert_eq!(app.results.len(), 2);

        let _ = app.update(Message::SearchFinished(Ok(vec![record("c.png", "")])));
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].record.url, "http://localhost:8000/images/c.png");
    }

    #[test]
    fn test_stale_image_fetch_is_discarded() {
        let mut app = ImageFinder::default();
        let _ = app.update(Message::SearchFinished(Ok(vec![record("a.png", "")])));
        let stale = app.generation;
        let _ = app.update(Message::SearchFinished(Ok(vec![record("b.png", "")])));

        let _ = app.update(Message::ImageFetched {
            generation: stale,
            index: 0,
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });
        assert!(app.results[0].handle.is_none());
    }

    #[test]
    fn test_current_image_fetch_fills_its_card() {
        let mut app = ImageFinder::default();
        let _ = app.update(Message::SearchFinished(Ok(vec![record("a.png", "")])));

        let _ = app.update(Message::ImageFetched {
            generation: app.generation,
            index: 0,
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });
        assert!(app.results[0].handle.is_some());
    }

    #[test]
    fn test_hover_tracks_latest_card() {
        let mut app = ImageFinder::default();
        let _ = app.update(Message::CardHovered(0));
        let _ = app.update(Message::CardHovered(1));
        let _ = app.update(Message::CardLeft(0));
        assert_eq!(app.hovered, Some(1));

        let _ = app.update(Message::CardLeft(1));
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn test_download_feedback_lands_in_status_line() {
        let mut app = ImageFinder::default();
        let _ = app.update(Message::DownloadFinished(Ok(PathBuf::from(
            "/home/user/Downloads/cat.png",
        ))));
        assert_eq!(
            app.status.as_deref(),
            Some("Saved to /home/user/Downloads/cat.png")
        );

        let _ = app.update(Message::DownloadFinished(Err("disk full".to_string())));
        assert_eq!(app.status.as_deref(), Some("Download failed"));
    }
}

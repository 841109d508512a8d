use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::store::DisplayStateStore;
use crate::caption::{presets, CaptionRotator, Chunk};
use crate::engine::config::Config;
use crate::engine::CaptionError;
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;

/// Application core: the display state store plus the caption rotator that
/// follows it.
pub struct App {
    store: DisplayStateStore,
    rotator: CaptionRotator,
    quit: bool,
    status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::with_store(DisplayStateStore::with_defaults())
    }

    pub fn from_config(config: &Config) -> Result<Self, CaptionError> {
        Ok(Self::with_store(DisplayStateStore::new(config)?))
    }

    pub fn with_store(store: DisplayStateStore) -> Self {
        Self {
            store,
            rotator: CaptionRotator::new(),
            quit: false,
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.quit {
            AppMode::Quit
        } else {
            AppMode::from_state(self.store.state())
        }
    }

    pub fn store(&self) -> &DisplayStateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DisplayStateStore {
        &mut self.store
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn visible_chunk(&self) -> Option<&Chunk> {
        self.rotator.current()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotator.is_running()
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        if !matches!(event, AppEvent::None) {
            self.status = None;
        }

        match event {
            AppEvent::InsertChar(c) => {
                let mut text = self.store.state().text().to_string();
                text.push(c);
                self.store.set_text(text);
            }
            AppEvent::DeleteBackward => {
                let text = self.store.state().text();
                if let Some((offset, _)) = text.grapheme_indices(true).next_back() {
                    let trimmed = text[..offset].to_string();
                    self.store.set_text(trimmed);
                }
            }
            AppEvent::SetText(text) => self.store.set_text(text),
            AppEvent::SelectPreset(index) => self.select_preset(index),
            AppEvent::NextPreset => {
                let index = self.store.state().color_preset_index() + 1;
                self.select_preset(index);
            }
            AppEvent::PreviousPreset => {
                match self.store.state().color_preset_index().checked_sub(1) {
                    Some(index) => self.select_preset(index),
                    None => self.status = Some("Already at the first preset".to_string()),
                }
            }
            AppEvent::FontSizeUp => {
                let size = self.store.state().font_size_pt() + self.store.limits().font_size_step;
                self.store.set_font_size(size);
            }
            AppEvent::FontSizeDown => {
                let size = self.store.state().font_size_pt() - self.store.limits().font_size_step;
                self.store.set_font_size(size);
            }
            AppEvent::StartFullscreen => {
                self.store.start_fullscreen();
                if !self.store.state().is_fullscreen_active() {
                    self.status = Some("Enter a caption first".to_string());
                }
            }
            AppEvent::EndFullscreen => self.store.end_fullscreen(),
            AppEvent::Tap => self.store.show_overlay_pulse(now),
            AppEvent::StartPreview => self.store.start_preview(),
            AppEvent::EndPreview => self.store.end_preview(),
            AppEvent::Warning(message) => self.status = Some(message),
            AppEvent::Quit => self.quit = true,
            // Clipboard reads happen in the terminal front end.
            AppEvent::PasteClipboard | AppEvent::None => {}
        }

        self.refresh(now);
    }

    /// Advances timers to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.store.tick(now);
        self.refresh(now);
    }

    /// Earliest instant at which `tick` would change anything.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.store.next_deadline(), self.rotator.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let limits = self.store.limits();
        RenderState::from_display_state(
            self.mode(),
            self.store.state(),
            self.rotator.current().map(Chunk::to_string_lossy),
            (limits.font_size_min, limits.font_size_max),
            self.status.clone(),
        )
    }

    fn select_preset(&mut self, index: usize) {
        if let Err(err) = self.store.select_preset(index) {
            log::warn!("preset selection rejected: {err}");
            self.status = Some(if index == presets().len() {
                "Already at the last preset".to_string()
            } else {
                err.to_string()
            });
        }
    }

    /// Keeps the rotator in step with the store: rotating while a caption
    /// screen is up, stopped otherwise.
    fn refresh(&mut self, now: Instant) {
        if self.mode().shows_caption() {
            self.rotator.sync(self.store.state().config(), now);
            self.rotator.poll(now);
        } else if self.rotator.is_running() || self.rotator.current().is_some() {
            log::trace!("caption screen closed, stopping rotation");
            self.rotator.stop();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

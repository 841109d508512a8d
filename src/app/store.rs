//! Display state store
//!
//! Single source of truth for the UI. Every state change goes through a
//! named operation and is followed by a synchronous notification to all
//! subscribed observers. Time is passed in explicitly so the overlay timer
//! runs on the caller's timeline.

use super::state::{DisplayState, Orientation};
use crate::caption::{preset, CaptionConfig};
use crate::engine::config::{Config, Limits};
use crate::engine::{CaptionError, OneShotTimer};
use std::time::{Duration, Instant};

pub type Observer = Box<dyn FnMut(&DisplayState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct DisplayStateStore {
    state: DisplayState,
    limits: Limits,
    overlay_timer: OneShotTimer,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl DisplayStateStore {
    pub fn new(config: &Config) -> Result<Self, CaptionError> {
        let limits = config.limits.clone();
        let selected = preset(config.caption.preset)?;
        let caption = CaptionConfig::from(&config.caption).with_preset(selected);

        let mut state = DisplayState {
            config: caption,
            color_preset_index: config.caption.preset,
            ..DisplayState::default()
        };
        let font_size = clamp_font_size(&limits, config.caption.font_size_pt)
            .unwrap_or(state.font_size_pt);
        state.font_size_pt = font_size;
        state.config.style.font_size_pt = font_size;

        Ok(Self {
            state,
            limits,
            overlay_timer: OneShotTimer::new(),
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            state: DisplayState::default(),
            limits: Limits::default(),
            overlay_timer: OneShotTimer::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&DisplayState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.config.text = text.into();
        self.notify("set_text");
    }

    /// Selects a color preset by position. An invalid index leaves the state
    /// untouched.
    pub fn select_preset(&mut self, index: usize) -> Result<(), CaptionError> {
        let selected = preset(index)?;
        self.state.color_preset_index = index;
        self.state.config.style.color = selected.foreground;
        self.state.config.background_color = selected.background;
        self.notify("select_preset");
        Ok(())
    }

    /// Clamps `pt` into the configured font range. NaN is ignored.
    pub fn set_font_size(&mut self, pt: f32) {
        let Some(size) = clamp_font_size(&self.limits, pt) else {
            log::warn!("ignoring non-numeric font size");
            return;
        };
        self.state.font_size_pt = size;
        self.state.config.style.font_size_pt = size;
        self.notify("set_font_size");
    }

    /// No-op while the caption text is empty.
    pub fn start_fullscreen(&mut self) {
        if self.state.config.text.is_empty() {
            log::debug!("start_fullscreen ignored: caption text is empty");
            return;
        }
        self.state.is_fullscreen_active = true;
        self.state.orientation = Orientation::Landscape;
        self.notify("start_fullscreen");
    }

    pub fn end_fullscreen(&mut self) {
        self.state.is_fullscreen_active = false;
        self.state.orientation = Orientation::Portrait;
        self.notify("end_fullscreen");
    }

    /// Shows the overlay and (re)arms its hide deadline.
    pub fn show_overlay_pulse(&mut self, now: Instant) {
        self.overlay_timer
            .arm(now, Duration::from_millis(self.limits.overlay_ms));
        self.state.is_overlay_visible = true;
        self.notify("show_overlay_pulse");
    }

    pub fn start_preview(&mut self) {
        self.state.is_preview_active = true;
        self.state.orientation = Orientation::Landscape;
        self.notify("start_preview");
    }

    /// Orientation is left as is.
    pub fn end_preview(&mut self) {
        self.state.is_preview_active = false;
        self.notify("end_preview");
    }

    /// Expires the overlay once its deadline passes. Returns true if the
    /// state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.overlay_timer.fire_if_due(now) {
            self.state.is_overlay_visible = false;
            self.notify("overlay_expired");
            return true;
        }
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.overlay_timer.deadline()
    }

    fn notify(&mut self, operation: &str) {
        log::debug!("{operation}: {:?}", self.state);
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
    }
}

fn clamp_font_size(limits: &Limits, pt: f32) -> Option<f32> {
    if pt.is_nan() {
        return None;
    }
    Some(pt.clamp(limits.font_size_min, limits.font_size_max))
}

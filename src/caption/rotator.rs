use crate::caption::chunk::{chunk_text, Chunk};
use crate::caption::model::CaptionConfig;
use crate::engine::timer::PeriodicTimer;
use std::time::{Duration, Instant};

/// Cycles a caption's chunks on a fixed interval.
///
/// The rotator is keyed by the whole `CaptionConfig`: `sync` with a config
/// that differs in any field cancels the running timer and starts over at
/// chunk 0. Only one timer ever exists, so two rotations cannot interleave.
pub struct CaptionRotator {
    key: Option<CaptionConfig>,
    chunks: Vec<Chunk>,
    /// Next chunk to emit
    cursor: usize,
    visible: Option<usize>,
    timer: PeriodicTimer,
}

impl CaptionRotator {
    pub fn new() -> Self {
        Self {
            key: None,
            chunks: Vec::new(),
            cursor: 0,
            visible: None,
            timer: PeriodicTimer::new(Duration::ZERO),
        }
    }

    /// Restarts the rotation if `config` differs from the running one.
    /// Returns true when a restart happened.
    pub fn sync(&mut self, config: &CaptionConfig, now: Instant) -> bool {
        if self.key.as_ref() == Some(config) {
            return false;
        }
        self.restart(config, now);
        true
    }

    /// Cancel-and-respawn against `config`. The first chunk is visible
    /// immediately; the next one is due `interval_ms` later.
    pub fn restart(&mut self, config: &CaptionConfig, now: Instant) {
        self.timer.cancel();
        self.chunks = chunk_text(&config.text);
        self.cursor = 0;
        self.visible = None;
        self.key = Some(config.clone());
        self.timer = PeriodicTimer::new(Duration::from_millis(config.interval_ms));

        log::trace!(
            "rotation restart: {} chunks every {} ms",
            self.chunks.len(),
            config.interval_ms
        );

        if self.chunks.is_empty() {
            return;
        }
        self.emit();
        self.timer.start(now);
    }

    /// Applies every tick due by `now` and returns the visible chunk.
    pub fn poll(&mut self, now: Instant) -> Option<&Chunk> {
        let ticks = self.timer.due_ticks(now);
        if ticks > 0 && !self.chunks.is_empty() {
            // Emitting a full cycle lands on the same chunk, so only the
            // remainder matters.
            let len = self.chunks.len() as u64;
            let steps = (ticks - 1) % len + 1;
            for _ in 0..steps {
                self.emit();
            }
        }
        self.current()
    }

    /// Cancels the timer and clears the visible chunk.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.key = None;
        self.chunks.clear();
        self.cursor = 0;
        self.visible = None;
    }

    pub fn current(&self) -> Option<&Chunk> {
        self.visible.and_then(|index| self.chunks.get(index))
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    fn emit(&mut self) {
        if self.cursor >= self.chunks.len() {
            self.cursor = 0;
        }
        self.visible = Some(self.cursor);
        self.cursor += 1;
    }
}

impl Default for CaptionRotator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn config(text: &str, interval_ms: u64) -> CaptionConfig {
        CaptionConfig {
            text: text.to_string(),
            interval_ms,
            ..CaptionConfig::default()
        }
    }

    fn visible(rotator: &mut CaptionRotator, now: Instant) -> Option<String> {
        rotator.poll(now).map(Chunk::to_string_lossy)
    }

    #[test]
    fn test_first_chunk_is_immediate() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);
        assert_eq!(visible(&mut rotator, t0).as_deref(), Some("关闭"));
    }

    #[test]
    fn test_tick_sequence_wraps() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);

        let seen: Vec<String> = [0, 1000, 2000, 3000, 4000]
            .iter()
            .filter_map(|&t| visible(&mut rotator, t0 + ms(t)))
            .collect();
        assert_eq!(seen, vec!["关闭", "远光", "灯", "关闭", "远光"]);
    }

    #[test]
    fn test_between_ticks_holds_chunk() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);
        assert_eq!(visible(&mut rotator, t0 + ms(999)).as_deref(), Some("关闭"));
    }

    #[test]
    fn test_late_poll_catches_up() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);
        // Ticks at 1000, 2000, 3000, 4000, 5000 -> 远光 灯 关闭 远光 灯
        assert_eq!(visible(&mut rotator, t0 + ms(5200)).as_deref(), Some("灯"));
    }

    #[test]
    fn test_empty_text_never_emits() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("", 1000), t0);
        assert!(!rotator.is_running());
        assert_eq!(visible(&mut rotator, t0), None);
        assert_eq!(visible(&mut rotator, t0 + ms(10_000)), None);
    }

    #[test]
    fn test_single_chunk_keeps_timer_running() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("停车", 500), t0);
        assert_eq!(visible(&mut rotator, t0 + ms(1500)).as_deref(), Some("停车"));
        assert!(rotator.is_running());
        assert_eq!(rotator.next_deadline(), Some(t0 + ms(2000)));
    }

    #[test]
    fn test_zero_interval_holds_first_chunk() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 0), t0);
        assert!(!rotator.is_running());
        assert_eq!(visible(&mut rotator, t0 + ms(5000)).as_deref(), Some("关闭"));
    }

    #[test]
    fn test_text_change_restarts_at_zero() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);
        visible(&mut rotator, t0 + ms(1000));

        let restarted = rotator.sync(&config("减速慢行", 1000), t0 + ms(1500));
        assert!(restarted);
        assert_eq!(visible(&mut rotator, t0 + ms(1500)).as_deref(), Some("减速"));
        // Old schedule (2000) is gone; next tick is 1000 ms after the restart.
        assert_eq!(visible(&mut rotator, t0 + ms(2000)).as_deref(), Some("减速"));
        assert_eq!(visible(&mut rotator, t0 + ms(2500)).as_deref(), Some("慢行"));
    }

    #[test]
    fn test_style_change_also_restarts() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        let base = config("关闭远光灯", 1000);
        rotator.sync(&base, t0);
        visible(&mut rotator, t0 + ms(1000));

        let mut bigger = base.clone();
        bigger.style.font_size_pt = 300.0;
        assert!(rotator.sync(&bigger, t0 + ms(1200)));
        assert_eq!(visible(&mut rotator, t0 + ms(1200)).as_deref(), Some("关闭"));
    }

    #[test]
    fn test_same_config_does_not_restart() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        let base = config("关闭远光灯", 1000);
        rotator.sync(&base, t0);
        visible(&mut rotator, t0 + ms(1000));

        assert!(!rotator.sync(&base.clone(), t0 + ms(1100)));
        assert_eq!(visible(&mut rotator, t0 + ms(1100)).as_deref(), Some("远光"));
    }

    #[test]
    fn test_stop_cancels_timer() {
        let t0 = Instant::now();
        let mut rotator = CaptionRotator::new();
        rotator.sync(&config("关闭远光灯", 1000), t0);
        rotator.stop();
        assert!(!rotator.is_running());
        assert_eq!(rotator.next_deadline(), None);
        assert_eq!(visible(&mut rotator, t0 + ms(3000)), None);
    }
}

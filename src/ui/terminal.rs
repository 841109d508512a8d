use crate::app::{App, AppEvent, AppMode};
use crate::input::clipboard;
use crate::ui::glyph::{FontGlyphs, GlyphSource};
use crate::ui::keymap::{map_key, map_mouse};
use crate::ui::orientation::watch_orientation;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    glyphs: Option<FontGlyphs>,
    _guard: TerminalGuard,
}

impl TuiManager {
    /// Without a usable font the caption is drawn as plain terminal text.
    pub fn new(font_path: Option<&Path>) -> Result<Self, io::Error> {
        let glyphs = FontGlyphs::discover(font_path);
        if glyphs.is_none() {
            log::warn!("no caption font found, captions will not scale with font size");
        }

        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            glyphs,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let subscription = watch_orientation(app.store_mut(), |orientation| {
            log::info!("orientation request: {orientation:?}");
        });

        let result = self.drive(app);
        app.store_mut().unsubscribe(subscription);
        result
    }

    fn drive(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            // Sleep until the next timer deadline or input, whichever is first.
            let now = Instant::now();
            let timeout = app
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(IDLE_POLL)
                .min(IDLE_POLL);

            if event::poll(timeout)? {
                let mode = app.mode();
                let event = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        map_key(mode, app.store().state().is_overlay_visible(), key)
                    }
                    Event::Mouse(mouse) => map_mouse(mode, mouse),
                    _ => AppEvent::None,
                };
                app.handle_event(resolve_clipboard(event), Instant::now());
            }

            app.tick(Instant::now());
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let glyphs = self.glyphs.as_ref().map(|g| g as &dyn GlyphSource);
        self.terminal
            .draw(|frame| view::render(frame, &render_state, glyphs))?;
        Ok(())
    }
}

/// Replaces a paste request with the clipboard text, or a warning when the
/// clipboard can't be read.
fn resolve_clipboard(event: AppEvent) -> AppEvent {
    if event != AppEvent::PasteClipboard {
        return event;
    }
    match clipboard::read_text() {
        Ok(text) => AppEvent::SetText(text),
        Err(err) => {
            log::warn!("paste failed: {err}");
            AppEvent::Warning(err.to_string())
        }
    }
}

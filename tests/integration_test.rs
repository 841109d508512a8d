use caption_screen::app::{App, AppEvent, AppMode, DisplayStateStore, Orientation};
use caption_screen::caption::{chunk_text, join_chunks, CaptionRotator};
use caption_screen::engine::config::Config;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn end_to_end_warning_caption() {
    let t0 = Instant::now();
    let mut app = App::from_config(&Config::default()).expect("default config is valid");

    app.handle_event(AppEvent::SelectPreset(2), t0);
    app.handle_event(AppEvent::StartFullscreen, t0);
    assert_eq!(app.mode(), AppMode::Fullscreen);
    assert_eq!(app.store().state().orientation(), Orientation::Landscape);

    let mut seen = Vec::new();
    for t in [0, 1000, 2000, 3000] {
        app.tick(t0 + ms(t));
        seen.push(app.get_render_state().visible_chunk.unwrap());
    }
    assert_eq!(seen, vec!["关闭", "远光", "灯", "关闭"]);

    app.handle_event(AppEvent::Tap, t0 + ms(3100));
    app.handle_event(AppEvent::EndFullscreen, t0 + ms(3200));
    assert_eq!(app.mode(), AppMode::Editing);
    assert!(!app.is_rotating());
}

#[test]
fn text_change_during_rotation_never_shows_stale_chunk() {
    let t0 = Instant::now();
    let mut app = App::new();
    app.handle_event(AppEvent::StartPreview, t0);
    app.tick(t0 + ms(1000));

    app.handle_event(AppEvent::SetText("前方施工".to_string()), t0 + ms(1500));
    let old_chunks: Vec<String> = chunk_text("关闭远光灯")
        .iter()
        .map(|c| c.to_string_lossy())
        .collect();

    for t in (1500..6000).step_by(250) {
        app.tick(t0 + ms(t));
        let visible = app.get_render_state().visible_chunk.unwrap();
        assert!(!old_chunks.contains(&visible), "stale chunk {visible} at {t}");
    }
}

#[test]
fn chunking_reconstructs_any_text() {
    for text in ["", "a", "关闭远光灯", "Exit ➜ 逃生通道", "🚨🚨 fire"] {
        let chunks = chunk_text(text);
        assert_eq!(chunks.len(), text.encode_utf16().count().div_ceil(2));
        assert_eq!(join_chunks(&chunks), text);
    }
}

#[test]
fn rotator_driven_directly_by_store_observer() {
    let t0 = Instant::now();
    let latest = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&latest);

    let mut store = DisplayStateStore::with_defaults();
    store.subscribe(move |state| *sink.borrow_mut() = Some(state.config().clone()));

    let mut rotator = CaptionRotator::new();
    store.set_text("减速慢行");
    let config = latest.borrow().clone().unwrap();
    assert!(rotator.sync(&config, t0));
    assert_eq!(rotator.poll(t0).unwrap().to_string(), "减速");
    assert_eq!(rotator.poll(t0 + ms(1000)).unwrap().to_string(), "慢行");

    store.select_preset(3).unwrap();
    let config = latest.borrow().clone().unwrap();
    assert!(rotator.sync(&config, t0 + ms(1200)));
    assert_eq!(rotator.poll(t0 + ms(1200)).unwrap().to_string(), "减速");
}

#[test]
fn overlay_pulse_restart_window() {
    let t0 = Instant::now();
    let mut store = DisplayStateStore::with_defaults();
    store.start_fullscreen();
    store.show_overlay_pulse(t0);
    store.show_overlay_pulse(t0 + ms(1000));

    store.tick(t0 + ms(3500));
    assert!(store.state().is_overlay_visible());
    store.tick(t0 + ms(4000));
    assert!(!store.state().is_overlay_visible());
}

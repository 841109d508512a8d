use crate::app::{DisplayStateStore, Orientation, SubscriptionId};

/// Calls `on_request` whenever the store's orientation changes. This is the
/// hook where a platform screen-lock request would be issued.
pub fn watch_orientation(
    store: &mut DisplayStateStore,
    mut on_request: impl FnMut(Orientation) + 'static,
) -> SubscriptionId {
    let mut last = store.state().orientation();
    store.subscribe(move |state| {
        let orientation = state.orientation();
        if orientation != last {
            last = orientation;
            on_request(orientation);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_reports_only_changes() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);

        let mut store = DisplayStateStore::with_defaults();
        watch_orientation(&mut store, move |o| sink.borrow_mut().push(o));

        store.set_text("减速慢行");
        store.start_fullscreen();
        store.show_overlay_pulse(std::time::Instant::now());
        store.end_fullscreen();
        store.start_preview();
        store.end_preview();

        assert_eq!(
            *requests.borrow(),
            vec![
                Orientation::Landscape,
                Orientation::Portrait,
                Orientation::Landscape
            ]
        );
    }
}

use std::rc::Rc;

use log::{debug, info, warn};

use super::anchors::{handle_anchor_click, AnchorOutcome};
use super::host::{RevealAnimator, ViewportHost};
use super::state::{ScrollStore, ScrollUpdate};
use crate::config::RevealConfig;
use crate::error::ViewError;

struct Mounted<L> {
    _scroll: L,
    anchors: Vec<L>,
}

/// Owns the page's scroll state and every listener that feeds it.
///
/// Listeners live exactly as long as the mount: `unmount`, a second `mount`
/// and dropping the controller all release them.
pub struct ViewController<H: ViewportHost + 'static, R: RevealAnimator> {
    host: Rc<H>,
    reveal: R,
    store: Rc<ScrollStore>,
    reveal_ready: bool,
    mounted: Option<Mounted<H::Listener>>,
}

impl<H: ViewportHost + 'static, R: RevealAnimator> ViewController<H, R> {
    pub fn new(host: Rc<H>, reveal: R) -> Self {
        Self {
            host,
            reveal,
            store: Rc::new(ScrollStore::new()),
            reveal_ready: false,
            mounted: None,
        }
    }

    pub fn store(&self) -> &ScrollStore {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn mount(&mut self) -> Result<(), ViewError> {
        if self.mounted.is_some() {
            debug!("View controller already mounted, replacing its listeners");
            self.unmount();
        }

        if !self.reveal_ready {
            match self.reveal.init(&RevealConfig::default()) {
                Ok(()) => self.reveal_ready = true,
                Err(err) => warn!("Reveal animations disabled: {}", err),
            }
        }

        let scroll = {
            let host = self.host.clone();
            let store = self.store.clone();
            self.host.listen_scroll(Box::new(move || {
                store.record(host.scroll_offset());
            }))?
        };

        // On failure `scroll` goes out of scope here and detaches itself.
        let anchors = {
            let host = self.host.clone();
            self.host
                .listen_anchor_clicks(Rc::new(move |click: &H::Click| {
                    handle_anchor_click(&*host, click);
                }))?
        };

        info!(
            "View controller mounted ({} in-page anchors)",
            anchors.len()
        );
        self.mounted = Some(Mounted {
            _scroll: scroll,
            anchors,
        });

        // The page may be restored mid-scroll.
        self.on_scroll_event();
        Ok(())
    }

    /// Returns false when nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.mounted.take() {
            Some(mounted) => {
                debug!(
                    "Releasing scroll listener and {} anchor listeners",
                    mounted.anchors.len()
                );
                true
            }
            None => false,
        }
    }

    pub fn on_scroll_event(&self) -> ScrollUpdate {
        self.store.record(self.host.scroll_offset())
    }

    pub fn on_anchor_click(&self, click: &H::Click) -> AnchorOutcome {
        handle_anchor_click(&*self.host, click)
    }

    pub fn scroll_to_top(&self) {
        self.host.scroll_to_origin();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::controller::fake::{FakeClick, FakeHost, FakeReveal, ScrollRequest};

    fn page_host() -> Rc<FakeHost> {
        Rc::new(
            FakeHost::new()
                .with_element("products")
                .with_element("about")
                .with_anchor("#products")
                .with_anchor("#about")
                .with_anchor("#nonexistent")
                .with_anchor("#")
                .with_anchor("https://example.com/"),
        )
    }

    fn count_updates(controller: &ViewController<FakeHost, FakeReveal>) -> Rc<Cell<usize>> {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        controller
            .store()
            .subscribe(Rc::new(move |_: &ScrollUpdate| counter.set(counter.get() + 1)));
        calls
    }

    #[test]
    fn mount_initializes_reveal_with_fixed_config() {
        let reveal = FakeReveal::default();
        let mut controller = ViewController::new(page_host(), reveal.clone());

        controller.mount().unwrap();

        assert_eq!(*reveal.calls.borrow(), vec![RevealConfig::default()]);
        assert_eq!(reveal.calls.borrow()[0].duration, 1000);
        assert_eq!(reveal.calls.borrow()[0].easing, "ease-out-cubic");
        assert!(reveal.calls.borrow()[0].once);
    }

    #[test]
    fn mount_listens_to_scroll_and_hash_anchors_only() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());

        controller.mount().unwrap();

        // one scroll listener plus the four `#` anchors
        assert_eq!(host.live_listeners(), 5);
        assert!(controller.is_mounted());
    }

    #[test]
    fn mount_syncs_with_current_offset() {
        let host = page_host();
        host.dispatch_scroll(700);
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());

        controller.mount().unwrap();

        let flags = controller.store().state().flags();
        assert!(flags.compact_nav);
        assert!(flags.show_back_to_top);
    }

    #[test]
    fn scroll_events_toggle_navbar_without_history() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            controller.store().subscribe(Rc::new(move |update: &ScrollUpdate| {
                seen.borrow_mut().push(update.state.flags().compact_nav);
            }));
        }

        host.dispatch_scroll(0);
        host.dispatch_scroll(150);
        host.dispatch_scroll(50);

        assert_eq!(*seen.borrow(), vec![false, true, false]);
        assert_eq!(controller.store().state().offset(), 50);
    }

    #[test]
    fn every_scroll_event_is_processed() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();
        let calls = count_updates(&controller);

        for offset in [10, 20, 20, 30, 600] {
            host.dispatch_scroll(offset);
        }

        assert_eq!(calls.get(), 5);
        assert!(controller.store().state().is_past_back_to_top_threshold());
    }

    #[test]
    fn unmount_releases_every_listener() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();
        host.dispatch_scroll(200);
        let calls = count_updates(&controller);

        assert!(controller.unmount());
        assert!(!controller.unmount());
        host.dispatch_scroll(900);
        let click = host.click_anchor("#products");

        assert_eq!(host.live_listeners(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(controller.store().state().offset(), 200);
        assert!(!click.default_prevented());
        assert!(host.scroll_requests().is_empty());
    }

    #[test]
    fn remount_replaces_instead_of_duplicating() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();
        controller.mount().unwrap();
        let calls = count_updates(&controller);

        host.dispatch_scroll(300);
        host.click_anchor("#products");

        assert_eq!(host.live_listeners(), 5);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            host.scroll_requests(),
            vec![ScrollRequest::Element("products".to_string())]
        );
    }

    #[test]
    fn reveal_is_initialized_once_across_remounts() {
        let reveal = FakeReveal::default();
        let mut controller = ViewController::new(page_host(), reveal.clone());

        controller.mount().unwrap();
        controller.unmount();
        controller.mount().unwrap();

        assert_eq!(reveal.calls.borrow().len(), 1);
    }

    #[test]
    fn reveal_failure_does_not_block_mount() {
        let host = page_host();
        let reveal = FakeReveal {
            fail: true,
            ..FakeReveal::default()
        };
        let mut controller = ViewController::new(host.clone(), reveal);

        controller.mount().unwrap();
        host.dispatch_scroll(150);

        assert!(controller.store().state().is_past_threshold());
    }

    #[test]
    fn failed_anchor_setup_releases_scroll_listener() {
        let host = page_host();
        host.fail_anchor_listen();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());

        let err = controller.mount().unwrap_err();

        assert!(matches!(err, ViewError::AnchorQuery(_)));
        assert_eq!(host.live_listeners(), 0);
        assert!(!controller.is_mounted());
    }

    #[test]
    fn anchor_clicks_smooth_scroll_to_known_sections() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();

        let found = host.click_anchor("#products");
        let missing = host.click_anchor("#nonexistent");
        let bare = host.click_anchor("#");

        assert!(found.default_prevented());
        assert!(missing.default_prevented());
        assert!(!bare.default_prevented());
        assert_eq!(
            host.scroll_requests(),
            vec![ScrollRequest::Element("products".to_string())]
        );
    }

    #[test]
    fn direct_anchor_click_reports_outcome() {
        let controller = ViewController::new(page_host(), FakeReveal::default());

        assert_eq!(
            controller.on_anchor_click(&FakeClick::new("#about")),
            AnchorOutcome::Scrolled("about".to_string())
        );
    }

    #[test]
    fn back_to_top_requests_origin() {
        let host = page_host();
        let controller = ViewController::new(host.clone(), FakeReveal::default());

        controller.scroll_to_top();

        assert_eq!(host.scroll_requests(), vec![ScrollRequest::Origin]);
    }

    #[test]
    fn dropping_controller_releases_listeners() {
        let host = page_host();
        let mut controller = ViewController::new(host.clone(), FakeReveal::default());
        controller.mount().unwrap();

        drop(controller);

        assert_eq!(host.live_listeners(), 0);
    }
}

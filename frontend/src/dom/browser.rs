use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use crate::controller::host::{AnchorClick, ViewportHost};
use crate::controller::state::viewport_offset;
use crate::error::{js_reason, ViewError};

const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, ViewError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| ViewError::Listener {
                event,
                reason: js_reason(&err),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {}", self.event, js_reason(&err));
        }
    }
}

/// The real browser window.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, ViewError> {
        let window = web_sys::window().ok_or(ViewError::NoWindow)?;
        let document = window.document().ok_or(ViewError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl ViewportHost for BrowserViewport {
    type Listener = EventListener;
    type Click = Event;

    fn scroll_offset(&self) -> u32 {
        self.window.scroll_y().map(viewport_offset).unwrap_or(0)
    }

    fn scroll_to_fragment(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }

    fn scroll_to_origin(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn listen_scroll(&self, mut handler: Box<dyn FnMut()>) -> Result<EventListener, ViewError> {
        let callback = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        EventListener::attach(&self.window, "scroll", callback)
    }

    fn listen_anchor_clicks(
        &self,
        handler: Rc<dyn Fn(&Event)>,
    ) -> Result<Vec<EventListener>, ViewError> {
        let anchors = self
            .document
            .query_selector_all(IN_PAGE_ANCHORS)
            .map_err(|err| ViewError::AnchorQuery(js_reason(&err)))?;

        let mut listeners = Vec::with_capacity(anchors.length() as usize);
        for index in 0..anchors.length() {
            let Some(anchor) = anchors.item(index) else {
                continue;
            };
            let handler = handler.clone();
            let callback =
                Closure::wrap(Box::new(move |event: Event| handler(&event)) as Box<dyn FnMut(Event)>);
            // An error here drops the listeners attached so far.
            listeners.push(EventListener::attach(&anchor, "click", callback)?);
        }
        Ok(listeners)
    }
}

impl AnchorClick for Event {
    fn hash(&self) -> String {
        // The listener sits on the anchor; the target may be a child span.
        self.current_target()
            .and_then(|target| target.dyn_into::<HtmlAnchorElement>().ok())
            .map(|anchor| anchor.hash())
            .unwrap_or_default()
    }

    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn add_anchor(document: &Document, href: &str) -> HtmlElement {
        let anchor = document.create_element("a").unwrap();
        anchor.set_attribute("href", href).unwrap();
        document.body().unwrap().append_child(&anchor).unwrap();
        anchor.dyn_into::<HtmlElement>().unwrap()
    }

    #[wasm_bindgen_test]
    fn resolves_fragments_by_id() {
        let viewport = BrowserViewport::new().unwrap();
        let section = viewport.document.create_element("section").unwrap();
        section.set_id("browser-test-products");
        viewport.document.body().unwrap().append_child(&section).unwrap();

        assert!(viewport.scroll_to_fragment("browser-test-products"));
        assert!(!viewport.scroll_to_fragment("browser-test-missing"));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn anchor_listeners_detach_on_drop() {
        let viewport = BrowserViewport::new().unwrap();
        let anchor = add_anchor(&viewport.document, "#browser-test-nowhere");
        let clicks = Rc::new(Cell::new(0));
        let hashes = Rc::new(std::cell::RefCell::new(Vec::new()));

        let listeners = {
            let clicks = clicks.clone();
            let hashes = hashes.clone();
            viewport
                .listen_anchor_clicks(Rc::new(move |event: &Event| {
                    clicks.set(clicks.get() + 1);
                    hashes.borrow_mut().push(AnchorClick::hash(event));
                    AnchorClick::prevent_default(event);
                }))
                .unwrap()
        };
        assert!(!listeners.is_empty());

        anchor.click();
        drop(listeners);
        anchor.click();

        assert_eq!(clicks.get(), 1);
        assert_eq!(*hashes.borrow(), vec!["#browser-test-nowhere".to_string()]);
        anchor.remove();
    }
}

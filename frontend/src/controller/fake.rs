//! In-memory viewport used by the controller tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::host::{AnchorClick, RevealAnimator, ViewportHost};
use crate::config::RevealConfig;
use crate::error::ViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    Element(String),
    Origin,
}

type ScrollHandler = Rc<RefCell<Box<dyn FnMut()>>>;
type ClickHandler = Rc<dyn Fn(&FakeClick)>;

#[derive(Default)]
struct Inner {
    offset: Cell<u32>,
    elements: RefCell<Vec<String>>,
    anchors: RefCell<Vec<String>>,
    requests: RefCell<Vec<ScrollRequest>>,
    scroll_handlers: RefCell<Vec<(usize, ScrollHandler)>>,
    click_handlers: RefCell<Vec<(usize, String, ClickHandler)>>,
    next_id: Cell<usize>,
    fail_anchor_listen: Cell<bool>,
}

impl Inner {
    fn next_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[derive(Default)]
pub struct FakeHost {
    inner: Rc<Inner>,
}

pub struct FakeListener {
    id: usize,
    host: Weak<Inner>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(inner) = self.host.upgrade() {
            inner.scroll_handlers.borrow_mut().retain(|(id, _)| *id != self.id);
            inner.click_handlers.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.inner.elements.borrow_mut().push(id.to_string());
        self
    }

    pub fn with_anchor(self, href: &str) -> Self {
        self.inner.anchors.borrow_mut().push(href.to_string());
        self
    }

    pub fn fail_anchor_listen(&self) {
        self.inner.fail_anchor_listen.set(true);
    }

    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.inner.requests.borrow().clone()
    }

    pub fn live_listeners(&self) -> usize {
        self.inner.scroll_handlers.borrow().len() + self.inner.click_handlers.borrow().len()
    }

    /// Moves the viewport and fires `scroll` at every listener.
    pub fn dispatch_scroll(&self, offset: u32) {
        self.inner.offset.set(offset);
        let handlers: Vec<ScrollHandler> = self
            .inner
            .scroll_handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (*handler)();
        }
    }

    /// Clicks every anchor in the document with this href.
    pub fn click_anchor(&self, href: &str) -> FakeClick {
        // `a.hash` is empty for a bare "#" link.
        let hash = if href == "#" { "" } else { href };
        let click = FakeClick::new(hash);
        let handlers: Vec<ClickHandler> = self
            .inner
            .click_handlers
            .borrow()
            .iter()
            .filter(|(_, anchor, _)| anchor == href)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(&click);
        }
        click
    }
}

impl ViewportHost for FakeHost {
    type Listener = FakeListener;
    type Click = FakeClick;

    fn scroll_offset(&self) -> u32 {
        self.inner.offset.get()
    }

    fn scroll_to_fragment(&self, id: &str) -> bool {
        let found = self.inner.elements.borrow().iter().any(|element| element == id);
        if found {
            self.inner
                .requests
                .borrow_mut()
                .push(ScrollRequest::Element(id.to_string()));
        }
        found
    }

    fn scroll_to_origin(&self) {
        self.inner.requests.borrow_mut().push(ScrollRequest::Origin);
    }

    fn listen_scroll(&self, handler: Box<dyn FnMut()>) -> Result<FakeListener, ViewError> {
        let id = self.inner.next_id();
        self.inner
            .scroll_handlers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        Ok(FakeListener {
            id,
            host: Rc::downgrade(&self.inner),
        })
    }

    fn listen_anchor_clicks(
        &self,
        handler: Rc<dyn Fn(&FakeClick)>,
    ) -> Result<Vec<FakeListener>, ViewError> {
        if self.inner.fail_anchor_listen.get() {
            return Err(ViewError::AnchorQuery("query failed".to_string()));
        }
        let anchors = self.inner.anchors.borrow().clone();
        let mut listeners = Vec::new();
        for href in anchors.into_iter().filter(|href| href.starts_with('#')) {
            let id = self.inner.next_id();
            self.inner
                .click_handlers
                .borrow_mut()
                .push((id, href, handler.clone()));
            listeners.push(FakeListener {
                id,
                host: Rc::downgrade(&self.inner),
            });
        }
        Ok(listeners)
    }
}

pub struct FakeClick {
    hash: String,
    prevented: Cell<bool>,
}

impl FakeClick {
    pub fn new(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            prevented: Cell::new(false),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl AnchorClick for FakeClick {
    fn hash(&self) -> String {
        self.hash.clone()
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[derive(Clone, Default)]
pub struct FakeReveal {
    pub calls: Rc<RefCell<Vec<RevealConfig>>>,
    pub fail: bool,
}

impl RevealAnimator for FakeReveal {
    fn init(&self, config: &RevealConfig) -> Result<(), ViewError> {
        self.calls.borrow_mut().push(config.clone());
        if self.fail {
            Err(ViewError::Reveal("AOS is not defined".to_string()))
        } else {
            Ok(())
        }
    }
}

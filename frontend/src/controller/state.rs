use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::trace;

use crate::config::{BACK_TO_TOP_THRESHOLD, COMPACT_NAV_THRESHOLD};

pub fn is_past_threshold(offset: u32) -> bool {
    offset > COMPACT_NAV_THRESHOLD
}

pub fn is_past_back_to_top_threshold(offset: u32) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// Converts the browser's `scrollY` into a pixel offset.
///
/// Rounds up so that a fractional offset like 100.4 still counts as past the
/// 100px line. Negative values (overscroll bounce) and NaN become 0.
pub fn viewport_offset(scroll_y: f64) -> u32 {
    if scroll_y.is_nan() || scroll_y <= 0.0 {
        0
    } else {
        scroll_y.ceil() as u32
    }
}

/// Scroll position of the page plus the flags derived from it.
///
/// The flags can only move by recording a new offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportScrollState {
    offset: u32,
    past_threshold: bool,
}

impl ViewportScrollState {
    pub fn at(offset: u32) -> Self {
        Self {
            offset,
            past_threshold: is_past_threshold(offset),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn is_past_back_to_top_threshold(&self) -> bool {
        is_past_back_to_top_threshold(self.offset)
    }

    /// Records a new offset. Returns true when the navbar flag flipped.
    pub fn record(&mut self, offset: u32) -> bool {
        self.offset = offset;
        let past = is_past_threshold(offset);
        if past != self.past_threshold {
            self.past_threshold = past;
            true
        } else {
            false
        }
    }

    pub fn flags(&self) -> ViewFlags {
        ViewFlags {
            compact_nav: self.is_past_threshold(),
            show_back_to_top: self.is_past_back_to_top_threshold(),
        }
    }
}

/// What the page actually renders from the scroll state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFlags {
    pub compact_nav: bool,
    pub show_back_to_top: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub state: ViewportScrollState,
    pub compact_changed: bool,
}

pub type Observer = Rc<dyn Fn(&ScrollUpdate)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

/// Holds the page's scroll state and tells render callbacks about changes.
#[derive(Default)]
pub struct ScrollStore {
    state: Cell<ViewportScrollState>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_id: Cell<usize>,
}

impl ScrollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewportScrollState {
        self.state.get()
    }

    pub fn subscribe(&self, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Stores `offset` and notifies every observer exactly once.
    pub fn record(&self, offset: u32) -> ScrollUpdate {
        let mut state = self.state.get();
        let compact_changed = state.record(offset);
        self.state.set(state);

        let update = ScrollUpdate {
            state,
            compact_changed,
        };
        trace!(
            "scroll offset {} (compact: {}, back to top: {})",
            offset,
            state.is_past_threshold(),
            state.is_past_back_to_top_threshold()
        );

        // Observers may subscribe or unsubscribe while being notified.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&update);
        }
        update
    }
}

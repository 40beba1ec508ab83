use std::rc::Rc;

use crate::config::RevealConfig;
use crate::error::ViewError;

/// A click on an in-page anchor.
pub trait AnchorClick {
    /// The anchor's `hash`: `"#products"`, or empty when the link has no fragment.
    fn hash(&self) -> String;

    fn prevent_default(&self);
}

/// The scroll and event surface the view controller runs against.
///
/// `Listener` values detach their handler when dropped.
pub trait ViewportHost {
    type Listener;
    type Click: AnchorClick;

    fn scroll_offset(&self) -> u32;

    /// Smooth-scrolls to the element with this id. Returns false when there is none.
    fn scroll_to_fragment(&self, id: &str) -> bool;

    fn scroll_to_origin(&self);

    fn listen_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Self::Listener, ViewError>;

    /// Attaches `handler` to every anchor whose href starts with `#`.
    fn listen_anchor_clicks(
        &self,
        handler: Rc<dyn Fn(&Self::Click)>,
    ) -> Result<Vec<Self::Listener>, ViewError>;
}

/// The reveal-on-scroll library. Only ever initialized.
pub trait RevealAnimator {
    fn init(&self, config: &RevealConfig) -> Result<(), ViewError>;
}

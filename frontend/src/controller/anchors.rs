use log::debug;

use super::host::{AnchorClick, ViewportHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// No fragment on the link, the browser handles it.
    Passthrough,
    Scrolled(String),
    /// Default navigation was cancelled but no element has this id.
    Unresolved(String),
}

/// Element id named by an anchor hash, percent-decoded.
pub fn fragment_target(hash: &str) -> Option<String> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }
    let id = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };
    Some(id)
}

pub fn handle_anchor_click<H: ViewportHost>(host: &H, click: &H::Click) -> AnchorOutcome {
    let Some(id) = fragment_target(&click.hash()) else {
        return AnchorOutcome::Passthrough;
    };

    click.prevent_default();
    if host.scroll_to_fragment(&id) {
        debug!("Smooth scrolling to #{}", id);
        AnchorOutcome::Scrolled(id)
    } else {
        debug!("No element with id {:?}, ignoring anchor click", id);
        AnchorOutcome::Unresolved(id)
    }
}

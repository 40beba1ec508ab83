use wasm_bindgen::prelude::*;

use crate::config::RevealConfig;
use crate::controller::host::RevealAnimator;
use crate::error::{js_reason, ViewError};

#[wasm_bindgen]
extern "C" {
    // Loaded from a <script> tag in index.html.
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// The AOS (animate on scroll) library. Watches `data-aos` elements by itself
/// once initialized.
pub struct Aos;

impl RevealAnimator for Aos {
    fn init(&self, config: &RevealConfig) -> Result<(), ViewError> {
        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|err| ViewError::Reveal(err.to_string()))?;
        aos_init(&options).map_err(|err| ViewError::Reveal(js_reason(&err)))
    }
}

/// `data-aos-delay` for the item at `index` in a staggered list.
pub fn stagger_delay(index: usize) -> String {
    (index as u32 * crate::config::REVEAL_STAGGER_MS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_by_100ms_per_item() {
        assert_eq!(stagger_delay(0), "0");
        assert_eq!(stagger_delay(1), "100");
        assert_eq!(stagger_delay(2), "200");
    }
}

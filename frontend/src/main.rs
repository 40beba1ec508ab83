use log::info;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod controller {
    pub mod anchors;
    pub mod host;
    pub mod state;
    pub mod view;
    #[cfg(test)]
    pub mod fake;
}
mod dom {
    pub mod browser;
    pub mod reveal;
}
mod components {
    pub mod back_to_top;
    pub mod navbar;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

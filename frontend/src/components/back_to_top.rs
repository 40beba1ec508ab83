use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <button class="back-to-top" onclick={props.onclick.clone()} aria-label="Back to top">
            <svg xmlns="http://www.w3.org/2000/svg" class="arrow-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18" />
            </svg>
        </button>
    }
}

use yew::prelude::*;

use crate::content::{nav_href, BRAND, NAV_LINKS};

pub fn header_class(compact: bool) -> &'static str {
    if compact {
        "site-header compact"
    } else {
        "site-header"
    }
}

pub fn logo_class(compact: bool) -> &'static str {
    if compact {
        "site-logo small"
    } else {
        "site-logo"
    }
}

/// Links stay in the DOM either way so anchor listeners can find them.
pub fn links_class(compact: bool) -> &'static str {
    if compact {
        "site-nav shown"
    } else {
        "site-nav"
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub compact: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let compact = props.compact;

    html! {
        <header class={header_class(compact)}>
            <div class="container header-row">
                <h1 class={logo_class(compact)}>{BRAND}</h1>
                <nav class={links_class(compact)}>
                    { for NAV_LINKS.iter().map(|label| html! {
                        <a key={*label} href={nav_href(label)} class="nav-link">
                            {*label}
                            <span class="nav-underline"></span>
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_navbar_hides_links_but_keeps_them() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(logo_class(false), "site-logo");
        assert_eq!(links_class(false), "site-nav");
    }

    #[test]
    fn compact_navbar_shrinks_and_shows_links() {
        assert!(header_class(true).contains("compact"));
        assert!(logo_class(true).contains("small"));
        assert!(links_class(true).contains("shown"));
    }
}

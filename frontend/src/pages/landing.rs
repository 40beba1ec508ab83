use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local};
use log::{debug, error};
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::navbar::Navbar;
use crate::content::{
    copyright_line, product_image, ABOUT_PARAGRAPHS, BRAND, FAQS, FEATURES, FOOTER_LINKS,
    PRODUCTS, TAGLINE, TESTIMONIALS,
};
use crate::controller::state::{ScrollUpdate, ViewFlags};
use crate::controller::view::ViewController;
use crate::dom::browser::BrowserViewport;
use crate::dom::reveal::{stagger_delay, Aos};
use crate::error::ViewError;

type PageController = ViewController<BrowserViewport, Aos>;

fn mount_controller(on_change: UseStateSetter<ViewFlags>) -> Result<PageController, ViewError> {
    let host = Rc::new(BrowserViewport::new()?);
    let mut controller = ViewController::new(host, Aos);
    controller
        .store()
        .subscribe(Rc::new(move |update: &ScrollUpdate| {
            on_change.set(update.state.flags());
        }));
    controller.mount()?;
    Ok(controller)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // `use_state_eq` so the page only re-renders when a flag flips.
    let flags = use_state_eq(ViewFlags::default);
    let controller: Rc<RefCell<Option<PageController>>> = use_mut_ref(|| None);

    {
        let setter = flags.setter();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                match mount_controller(setter) {
                    Ok(mounted) => *controller.borrow_mut() = Some(mounted),
                    Err(err) => error!("Scroll effects unavailable: {}", err),
                }
                move || {
                    // Dropping the controller detaches all of its listeners.
                    controller.borrow_mut().take();
                }
            },
            (),
        );
    }

    let scroll_to_top = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(controller) = controller.borrow().as_ref() {
                controller.scroll_to_top();
            }
        })
    };

    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Newsletter signup submitted");
    });

    let year = Local::now().year();

    html! {
        <div class="landing-page">
            <Navbar compact={flags.compact_nav} />

            <div class="hero">
                <div class="hero-pattern"></div>
                <div class="hero-shade"></div>
                <div class="container hero-content">
                    <div class="hero-grid">
                        <div class="hero-copy" data-aos="fade-right">
                            <h1 class="hero-title">{BRAND}</h1>
                            <p class="hero-tagline">{TAGLINE}</p>
                            <div class="hero-buttons">
                                <button class="hero-cta">{"Shop Now"}</button>
                                <button class="hero-cta outline">{"Our Story"}</button>
                            </div>
                        </div>
                        <div class="hero-collage" data-aos="fade-left">
                            <img src="/images/retro-product-collage.webp" alt="ACME Products Collage" />
                            <div class="since-badge">{"Since 1950"}</div>
                        </div>
                    </div>
                </div>
                <div class="hero-wave">
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1440 320">
                        <path fill="#fffbeb" fill-opacity="1" d="M0,96L48,112C96,128,192,160,288,165.3C384,171,480,149,576,128C672,107,768,85,864,96C960,107,1056,149,1152,154.7C1248,160,1344,128,1392,112L1440,96L1440,320L0,320Z"></path>
                    </svg>
                </div>
            </div>

            <main class="container page-main">
                <section id="products" class="page-section">
                    <h2 class="section-title western" data-aos="fade-up">{"Timeless Treasures"}</h2>
                    <div class="grid three">
                        { for PRODUCTS.iter().enumerate().map(|(index, item)| html! {
                            <div key={item.name} class="product-card" data-aos="fade-up" data-aos-delay={stagger_delay(index)}>
                                <div class="product-photo">
                                    <img src={product_image(index)} alt={item.name} />
                                </div>
                                <div class="product-info">
                                    <h3>{item.name}</h3>
                                    <p class="product-description">{item.description}</p>
                                    <p class="product-price">{item.price}</p>
                                    <button class="add-to-cart">{"Add to Cart"}</button>
                                </div>
                                <div class="stock-badge">{"Limited Stock"}</div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="testimonials" class="page-section">
                    <h2 class="section-title" data-aos="fade-up">{"What Our Customers Say"}</h2>
                    <div class="grid two">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, item)| html! {
                            <div key={item.author} class="card bordered" data-aos="fade-up" data-aos-delay={stagger_delay(index)}>
                                <p class="quote">{format!("\"{}\"", item.quote)}</p>
                                <p class="quote-author">{format!("- {}", item.author)}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="about" class="page-section about">
                    <div class="about-pattern"></div>
                    <div class="about-row">
                        <div class="about-copy" data-aos="fade-right">
                            <h2>{"The ACME Story"}</h2>
                            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                            <button class="history-button">{"Learn Our History"}</button>
                        </div>
                        <div class="about-image" data-aos="fade-left">
                            <img src="/images/retro-factory.jpeg" alt="ACME Co. Factory" />
                        </div>
                    </div>
                </section>

                <section id="features" class="page-section">
                    <h2 class="section-title" data-aos="fade-up">{"Why Choose ACME?"}</h2>
                    <div class="grid three">
                        { for FEATURES.iter().enumerate().map(|(index, item)| html! {
                            <div key={item.title} class="feature" data-aos="fade-up" data-aos-delay={stagger_delay(index)}>
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="newsletter" class="newsletter" data-aos="fade-up">
                    <div class="newsletter-pattern"></div>
                    <div class="newsletter-body">
                        <h2>{"Join the ACME Family!"}</h2>
                        <p>{"Subscribe to our newsletter for exclusive offers, new product announcements, and helpful tips for your ACME products!"}</p>
                        <form class="newsletter-form" onsubmit={on_subscribe}>
                            <input type="email" placeholder="Your email address" required=true />
                            <button type="submit">{"Subscribe Now!"}</button>
                        </form>
                    </div>
                </section>

                <section id="faq" class="page-section">
                    <h2 class="section-title" data-aos="fade-up">{"Frequently Asked Questions"}</h2>
                    <div class="faq-list">
                        { for FAQS.iter().enumerate().map(|(index, item)| html! {
                            <div key={item.question} class="card" data-aos="fade-up" data-aos-delay={stagger_delay(index)}>
                                <h3>{item.question}</h3>
                                <p>{item.answer}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container">
                    <p>{copyright_line(year)}</p>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|label| html! {
                            <a key={*label} href="#">{*label}</a>
                        }) }
                    </div>
                </div>
            </footer>

            <BackToTop visible={flags.show_back_to_top} onclick={scroll_to_top} />

            <style>
                {r#"
                .landing-page {
                    background: #fef3c7;
                    color: #78350f;
                    min-height: 100vh;
                    font-family: Georgia, serif;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .site-header.compact {
                    padding: 0.75rem 0;
                    background: rgba(146, 64, 14, 0.9);
                }

                .header-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    font-weight: bold;
                    color: #fef3c7;
                    transition: font-size 0.3s ease;
                }

                .site-logo.small {
                    font-size: 1.5rem;
                }

                .site-nav {
                    display: flex;
                    gap: 1.5rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .site-nav.shown {
                    opacity: 1;
                }

                .nav-link {
                    position: relative;
                    color: #fef3c7;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #fcd34d;
                }

                .nav-underline {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 2px;
                    background: #fcd34d;
                    transform: scaleX(0);
                    transition: transform 0.3s ease;
                }

                .nav-link:hover .nav-underline {
                    transform: scaleX(1);
                }

                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #b45309, #78350f);
                }

                .hero-pattern, .about-pattern, .newsletter-pattern {
                    position: absolute;
                    inset: 0;
                    background-image: url('/images/retro-pattern.jpeg');
                    opacity: 0.2;
                }

                .about-pattern { opacity: 0.1; }
                .newsletter-pattern { opacity: 0.05; }

                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: black;
                    opacity: 0.3;
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                }

                .hero-grid, .grid {
                    display: grid;
                    gap: 3rem;
                    grid-template-columns: 1fr;
                    align-items: center;
                }

                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 4rem;
                    color: #fef3c7;
                    text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5);
                }

                .hero-tagline {
                    font-size: 1.75rem;
                    font-style: italic;
                    color: #fde68a;
                    margin-bottom: 2rem;
                }

                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                }

                .hero-cta, .add-to-cart, .history-button, .newsletter-form button, .back-to-top {
                    border: none;
                    border-radius: 9999px;
                    font-weight: bold;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-cta {
                    padding: 1rem 2rem;
                    font-size: 1.25rem;
                    background: #f59e0b;
                    color: #fef3c7;
                }

                .hero-cta.outline {
                    background: transparent;
                    border: 2px solid #fef3c7;
                }

                .hero-cta:hover {
                    transform: scale(1.05);
                }

                .hero-collage {
                    position: relative;
                }

                .hero-collage img, .about-image img {
                    width: 100%;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .since-badge, .stock-badge {
                    position: absolute;
                    border-radius: 9999px;
                    font-weight: bold;
                    transform: rotate(12deg);
                }

                .since-badge {
                    bottom: -1.5rem;
                    right: -1.5rem;
                    padding: 0.75rem 1.5rem;
                    background: #f59e0b;
                    color: #fef3c7;
                }

                .hero-wave {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                }

                .page-main {
                    padding-top: 6rem;
                    padding-bottom: 6rem;
                }

                .page-section {
                    margin-bottom: 8rem;
                }

                .section-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 3rem;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-title.western {
                    font-family: 'Western', serif;
                }

                .product-card {
                    position: relative;
                }

                .product-photo {
                    overflow: hidden;
                    border: 4px solid #92400e;
                    border-radius: 0.5rem;
                }

                .product-photo img {
                    width: 100%;
                    height: 20rem;
                    object-fit: cover;
                    filter: sepia(1);
                    transition: transform 0.3s ease;
                }

                .product-card:hover .product-photo img {
                    transform: scale(1.1);
                }

                .product-info {
                    margin-top: 1.5rem;
                    padding: 1.5rem;
                    text-align: center;
                    background: #fde68a;
                    border-radius: 0.5rem;
                    transform: translateY(-2rem);
                }

                .product-description {
                    font-style: italic;
                    color: #b45309;
                }

                .product-price {
                    font-size: 1.25rem;
                    font-weight: bold;
                }

                .add-to-cart {
                    padding: 0.75rem 2rem;
                    background: #92400e;
                    color: #fef3c7;
                }

                .stock-badge {
                    top: 1rem;
                    left: 1rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    background: #92400e;
                    color: #fef3c7;
                }

                .card {
                    padding: 1.5rem;
                    background: #fffbeb;
                    border-radius: 0.5rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .card.bordered {
                    border: 4px solid #92400e;
                }

                .quote {
                    font-size: 1.25rem;
                    font-style: italic;
                }

                .quote-author {
                    font-weight: 600;
                }

                .about {
                    position: relative;
                    padding: 8rem 2rem;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    color: #fef3c7;
                    background: linear-gradient(135deg, #78350f, #92400e);
                }

                .about-row {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .history-button {
                    margin-top: 2rem;
                    padding: 0.75rem 2rem;
                    background: #fbbf24;
                    color: #78350f;
                }

                .feature {
                    text-align: center;
                }

                .newsletter {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem;
                    margin-bottom: 8rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #fde68a, #fcd34d, #fde68a);
                }

                .newsletter-body {
                    position: relative;
                    z-index: 10;
                }

                .newsletter-form {
                    display: flex;
                    flex-direction: column;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .newsletter-form input {
                    flex-grow: 1;
                    padding: 1.25rem 2rem;
                    font-size: 1.125rem;
                    border: none;
                    border-radius: 9999px;
                    background: #fffbeb;
                    color: #78350f;
                }

                .newsletter-form button {
                    padding: 1.25rem 2.5rem;
                    font-size: 1.125rem;
                    background: #92400e;
                    color: #fef3c7;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .site-footer {
                    padding: 4rem 0;
                    text-align: center;
                    color: #fef3c7;
                    background: linear-gradient(90deg, #78350f, #92400e, #78350f);
                }

                .footer-links {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }

                .footer-links a {
                    color: inherit;
                }

                .footer-links a:hover {
                    color: #fde68a;
                }

                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    padding: 0.75rem;
                    background: #d97706;
                    color: #fef3c7;
                }

                .back-to-top:hover {
                    background: #f59e0b;
                }

                .arrow-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                @media (min-width: 768px) {
                    .hero-grid, .grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .hero-title {
                        font-size: 6rem;
                    }

                    .about-row {
                        flex-direction: row;
                        align-items: center;
                    }

                    .newsletter-form {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </div>
    }
}

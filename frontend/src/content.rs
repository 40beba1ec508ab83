//! Copy shown on the landing page. Order is display order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductItem {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestimonialItem {
    pub author: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const BRAND: &str = "ACME Co.";
pub const TAGLINE: &str = "Bringing Tomorrow's Technology to Today's Homes";
pub const FOUNDED: i32 = 1950;

pub const PRODUCTS: &[ProductItem] = &[
    ProductItem {
        name: "Miracle Toaster",
        price: "$19.99",
        description: "Toast like it's 1952",
    },
    ProductItem {
        name: "Super Vacuum",
        price: "$49.99",
        description: "Sucks up trouble since '55",
    },
    ProductItem {
        name: "Deluxe Radio",
        price: "$29.99",
        description: "Tunes that never get old",
    },
];

pub const TESTIMONIALS: &[TestimonialItem] = &[
    TestimonialItem {
        author: "Jane Doe",
        quote: "ACME products have revolutionized my home life!",
    },
    TestimonialItem {
        author: "John Smith",
        quote: "I can't imagine my kitchen without my ACME Miracle Toaster.",
    },
];

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "Quality",
        description: "Built to last with premium materials",
    },
    FeatureItem {
        title: "Innovation",
        description: "Cutting-edge technology for everyday use",
    },
    FeatureItem {
        title: "Customer Service",
        description: "24/7 support for all your needs",
    },
];

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "How long is the warranty?",
        answer: "All ACME products come with a 2-year warranty.",
    },
    FaqItem {
        question: "Do you offer international shipping?",
        answer: "Yes, we ship to most countries worldwide.",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Since 1950, ACME Co. has been bringing innovation to American homes. Our founder, John Smith, believed in creating products that make life easier and more enjoyable.",
    "From our humble beginnings in a small garage to becoming a household name, we've never lost sight of our mission: to provide quality, affordable products for the modern family.",
];

/// Navbar labels; each links to the section whose id is the lowercased label.
pub const NAV_LINKS: &[&str] = &["Products", "About", "Newsletter"];

pub const FOOTER_LINKS: &[&str] = &["Catalog", "Warranty", "Contact"];

pub fn nav_href(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

/// Product photos are numbered from 1 in display order.
pub fn product_image(index: usize) -> String {
    format!("/images/retro-product-{}.webp", index + 1)
}

pub fn copyright_line(current_year: i32) -> String {
    format!("© {}-{} {} All rights reserved.", FOUNDED, current_year, BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_images_follow_display_order() {
        let images: Vec<String> = (0..PRODUCTS.len()).map(product_image).collect();
        assert_eq!(
            images,
            vec![
                "/images/retro-product-1.webp",
                "/images/retro-product-2.webp",
                "/images/retro-product-3.webp",
            ]
        );
        assert_eq!(PRODUCTS[0].name, "Miracle Toaster");
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(|label| nav_href(label)).collect();
        assert_eq!(hrefs, vec!["#products", "#about", "#newsletter"]);
    }

    #[test]
    fn copyright_spans_from_founding_year() {
        assert_eq!(
            copyright_line(2026),
            "© 1950-2026 ACME Co. All rights reserved."
        );
    }
}

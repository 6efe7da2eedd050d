//! Static page copy: feature descriptors and navigation links.
//!
//! Content is data, not markup, so the grid and menus render it uniformly
//! and tests can check it without touching the view layer.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The six feature cards, in grid order.
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "\u{2728}",
        title: "Dynamic Themes",
        description: "Switch between multiple beautiful themes with smooth transitions and unique color palettes.",
    },
    Feature {
        icon: "\u{26a1}",
        title: "Lightning Fast",
        description: "Optimized performance with modern web technologies for instant loading and smooth interactions.",
    },
    Feature {
        icon: "\u{1f6e1}",
        title: "Secure & Reliable",
        description: "Built with security best practices and reliable architecture for production environments.",
    },
    Feature {
        icon: "\u{1f310}",
        title: "Global Ready",
        description: "Responsive design that works perfectly across all devices and screen sizes worldwide.",
    },
    Feature {
        icon: "\u{2605}",
        title: "Premium Quality",
        description: "Professional-grade design with attention to detail and pixel-perfect implementation.",
    },
    Feature {
        icon: "\u{1f680}",
        title: "Future Proof",
        description: "Built with cutting-edge technologies and designed to evolve with your needs.",
    },
];

/// Same-page navigation links, shared by the desktop nav and mobile menu.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

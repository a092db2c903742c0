//! Navigation: mobile menu, active links and floating hero images.

/// Icon shown in the hamburger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Open state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A document click outside the hamburger and the menu closes it.
    pub fn document_click(&mut self, on_menu: bool) {
        if !on_menu {
            self.open = false;
        }
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }
}

/// Page named by the last segment of `pathname`, `index.html` when empty.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => "index.html",
    }
}

/// Whether a navigation link pointing at `href` is the active one.
pub fn is_active_link(href: &str, current: &str) -> bool {
    href == current
}

/// Staggered `animation-delay` of the floating image at `index`.
pub fn animation_delay(index: usize) -> String {
    let ms = index as f64 * 200.0;
    format!("{}s", ms / 1000.0)
}

/// Vertical parallax shift in pixels for the floating image at `index`.
pub fn parallax_offset(scrolled: f64, index: usize) -> f64 {
    let rate = scrolled * -0.1;
    rate * (0.1 + index as f64 * 0.05)
}

/// The `transform` style for a parallax shift.
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_outside_click() {
        let mut menu = MenuState::default();
        assert_eq!(menu.icon(), MenuIcon::Bars);
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon().class(), "fa-times");

        menu.document_click(true);
        assert!(menu.is_open());
        menu.document_click(false);
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/shop/products.html"), "products.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("contact.html"), "contact.html");
        assert!(is_active_link("index.html", current_page("/")));
        assert!(!is_active_link("about.html", current_page("/")));
    }

    #[test]
    fn test_floating_images() {
        assert_eq!(animation_delay(0), "0s");
        assert_eq!(animation_delay(3), "0.6s");
        assert!(parallax_offset(0.0, 2).abs() < f64::EPSILON);
        assert!((parallax_offset(100.0, 0) - -1.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2) - -2.0).abs() < 1e-9);
        assert_eq!(parallax_transform(-1.5), "translateY(-1.5px)");
    }
}

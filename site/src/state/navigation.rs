//! Page-level navigation between landing, form and payment screens.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// The three screens of the site. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Landing,
    Form,
    PaymentOptions,
}

impl Page {
    /// Fragment value (without `#`) that represents this page.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        match self {
            Page::Landing => "landingPage",
            Page::Form => "form",
            Page::PaymentOptions => "paymentOptions",
        }
    }

    /// Parse a `location.hash` value. Accepts it with or without the leading
    /// `#`; anything unrecognised lands on [`Page::Landing`].
    #[must_use]
    pub fn from_fragment(raw: &str) -> Self {
        match raw.strip_prefix('#').unwrap_or(raw) {
            "form" => Page::Form,
            "paymentOptions" => Page::PaymentOptions,
            _ => Page::Landing,
        }
    }
}

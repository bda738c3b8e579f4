//! Window access: the URL fragment used for page routing, scrolling and
//! opening outbound links.
//!
//! TRADE-OFFS
//! ==========
//! The fragment is the only place navigation survives a reload or a
//! back/forward step. Browser access is hydrate-only; SSR renders the
//! landing page and hydration re-derives the page from the real fragment.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::navigation::Page;

/// Raw `location.hash` (including `#`), empty when absent or off-browser.
pub fn read_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Point the fragment at `page` unless it already does.
pub fn write_page(page: Page) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        // An empty or unknown fragment already means landing; rewriting it
        // would push a history entry on every back step.
        let current = location.hash().unwrap_or_default();
        if Page::from_fragment(&current) == page {
            return;
        }
        log::debug!("fragment -> {}", page.fragment());
        if let Err(e) = location.set_hash(page.fragment()) {
            log::warn!("failed to update fragment: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
    }
}

/// Scroll the window back to the top after a page change.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("failed to open {url}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Navigate the current tab to `url` (used for `upi://` intents).
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

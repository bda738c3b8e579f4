//! Outbound deep links: phone, WhatsApp, UPI and calendar.
//!
//! All user- or config-provided text is percent-encoded before it is placed
//! in a query string.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use chrono::Utc;

use crate::config::{ClassEvent, SiteConfig};

const CALENDAR_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[must_use]
pub fn tel_link(phone: &str) -> String {
    format!("tel:{phone}")
}

/// `wa.me` chat link with a prefilled message.
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

/// Message sent alongside the payment screenshot.
#[must_use]
pub fn screenshot_message(name: &str) -> String {
    format!("Sir, I'm {name}, and I'm sending here the screenshot of fee payment for AI For smart teacher Course.")
}

#[must_use]
pub fn inquiry_message() -> &'static str {
    "Hello First Bench Learning, I'm interested in the AI For Smart Teacher Course and have some questions."
}

#[must_use]
pub fn screenshot_link(config: &SiteConfig, name: &str) -> String {
    whatsapp_link(config.whatsapp_number, &screenshot_message(name))
}

#[must_use]
pub fn inquiry_link(config: &SiteConfig) -> String {
    whatsapp_link(config.whatsapp_number, inquiry_message())
}

/// UPI intent for the current payable amount.
#[must_use]
pub fn upi_link(config: &SiteConfig, payable_amount: u32) -> String {
    let note = format!("Fee for {}", config.course_name);
    format!(
        "upi://pay?pa={}&pn={}&am={payable_amount}&cu=INR&tn={}",
        config.upi.address,
        urlencoding::encode(config.upi.name),
        urlencoding::encode(&note),
    )
}

/// Google Calendar "create event" link for the class.
#[must_use]
pub fn calendar_link(event: &ClassEvent) -> String {
    let starts = event.starts_at.with_timezone(&Utc).format(CALENDAR_DATE_FORMAT);
    let ends = event.ends_at.with_timezone(&Utc).format(CALENDAR_DATE_FORMAT);
    let details = format!("{}\n\nJoin: {}", event.details, event.venue_link);
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={starts}/{ends}&details={}&location={}",
        urlencoding::encode(event.title),
        urlencoding::encode(&details),
        urlencoding::encode(event.venue_link),
    )
}

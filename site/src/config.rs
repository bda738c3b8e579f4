//! Fixed course content, amounts and outbound endpoints for each edition.
//!
//! DESIGN
//! ======
//! The site ships in two editions that share every page and state
//! transition. Everything that differs between them (fee, coupon, countdown,
//! fragment routing) lives here so the state machine never branches on
//! anything but typed config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use chrono::{DateTime, FixedOffset};

use crate::state::pricing::Coupon;

/// Default country code for both phone fields.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Static images served from the host's assets directory.
pub const LOGO_PATH: &str = "/logo.svg";
pub const FACULTY_PHOTO_PATH: &str = "/faculty.svg";

/// Country-code choices offered next to the phone and WhatsApp inputs.
pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { name: "India", code: "+91" },
    CountryCode { name: "UAE", code: "+971" },
    CountryCode { name: "Saudi Arabia", code: "+966" },
    CountryCode { name: "Qatar", code: "+974" },
    CountryCode { name: "Kuwait", code: "+965" },
    CountryCode { name: "Bahrain", code: "+973" },
    CountryCode { name: "Oman", code: "+968" },
    CountryCode { name: "UK", code: "+44" },
    CountryCode { name: "US", code: "+1" },
    CountryCode { name: "Canada", code: "+1" },
];

const COURSE_NAME: &str = "AI For Smart Teacher Course";
const SUBMISSION_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx2Q-CVi1SQOwnPfqnkqc4mD7TzRjHZk2W-AlZVd-C-ys_9a6G0yGXppIbOBI80wucU/exec";
const BATCH_START: &str = "2025-07-21T19:00:00+05:30";
const BATCH_END: &str = "2025-07-21T20:30:00+05:30";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub name: &'static str,
    pub code: &'static str,
}

/// Which of the two site layouts is being served.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Edition {
    /// Base fee with a one-time coupon; navigation lives only in memory.
    #[default]
    Coupon,
    /// Fixed fee, countdown to the batch start, navigation mirrored in the
    /// URL fragment.
    Countdown,
}

/// Payee identity used to build the UPI intent link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpiPayee {
    pub address: &'static str,
    pub name: &'static str,
}

/// One labelled value on the payment page that can be copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub copied_message: &'static str,
}

/// Calendar event published by the countdown edition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEvent {
    pub title: &'static str,
    pub details: &'static str,
    pub venue_link: &'static str,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
}

/// Everything the pages need that is not user input.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub edition: Edition,
    pub course_name: &'static str,
    pub base_fee: u32,
    pub coupon: Option<Coupon>,
    pub submission_endpoint: &'static str,
    pub inquiry_phone: &'static str,
    pub whatsapp_number: &'static str,
    pub upi: UpiPayee,
    pub bank_details: &'static [BankDetail],
    pub batch_label: &'static str,
    /// Countdown target and calendar event; `None` in the coupon edition.
    pub class_event: Option<ClassEvent>,
}

const BANK_DETAILS: &[BankDetail] = &[
    BankDetail { label: "GPay No", value: "7559865389", copied_message: "GPay Number copied!" },
    BankDetail { label: "GPay Name", value: "MSK Gallery", copied_message: "GPay Name copied!" },
    BankDetail { label: "Bank", value: "State Bank of India", copied_message: "Bank Name copied!" },
    BankDetail { label: "Account Name", value: "Muhammad Shameel", copied_message: "Account Name copied!" },
    BankDetail { label: "Account No", value: "32865807717", copied_message: "Account Number copied!" },
    BankDetail { label: "IFSC", value: "SBIN0002207", copied_message: "IFSC copied!" },
];

impl SiteConfig {
    /// Edition with the `FLAT50` coupon (1999 → 999).
    #[must_use]
    pub fn coupon_edition() -> Self {
        Self {
            edition: Edition::Coupon,
            base_fee: 1999,
            coupon: Some(Coupon {
                code: "FLAT50",
                description: "50% FLAT off on 100+ Sessions Celebration",
                discounted_fee: 999,
            }),
            class_event: None,
            ..Self::shared()
        }
    }

    /// Edition with a fixed fee and a countdown to the batch start.
    #[must_use]
    pub fn countdown_edition() -> Self {
        Self {
            edition: Edition::Countdown,
            base_fee: 999,
            coupon: None,
            class_event: Some(ClassEvent {
                title: COURSE_NAME,
                details: "Live online session of the AI For Smart Teacher Course by First Bench Learning.",
                venue_link: "https://meet.google.com/",
                starts_at: parse_fixed(BATCH_START),
                ends_at: parse_fixed(BATCH_END),
            }),
            ..Self::shared()
        }
    }

    /// Edition selected at build time by the `countdown` feature.
    #[must_use]
    pub fn active() -> Self {
        if cfg!(feature = "countdown") {
            Self::countdown_edition()
        } else {
            Self::coupon_edition()
        }
    }

    /// Whether the current page is mirrored into `location.hash`.
    #[must_use]
    pub fn mirrors_fragment(&self) -> bool {
        self.edition == Edition::Countdown
    }

    /// All bank and GPay details as one copyable block.
    #[must_use]
    pub fn bank_details_block(&self) -> String {
        let mut out = String::new();
        for (i, detail) in self.bank_details.iter().enumerate() {
            // GPay lines and bank lines are separated by a blank line.
            if i == 2 {
                out.push('\n');
            }
            out.push_str(detail.label);
            out.push_str(": ");
            out.push_str(detail.value);
            if i + 1 < self.bank_details.len() {
                out.push('\n');
            }
        }
        out
    }

    fn shared() -> Self {
        Self {
            edition: Edition::Coupon,
            course_name: COURSE_NAME,
            base_fee: 0,
            coupon: None,
            submission_endpoint: SUBMISSION_ENDPOINT,
            inquiry_phone: "+917559865389",
            whatsapp_number: "918590319881",
            upi: UpiPayee { address: "shameelmalayamma13@oksbi", name: "Shameel" },
            bank_details: BANK_DETAILS,
            batch_label: "July 21, 2025 (Monday) 7:00 PM IST",
            class_event: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::active()
    }
}

fn parse_fixed(raw: &str) -> DateTime<FixedOffset> {
    // Both inputs are compile-time constants covered by tests.
    DateTime::parse_from_rfc3339(raw).unwrap_or_default()
}

//! The view/form state controller.
//!
//! DESIGN
//! ======
//! One owned value holds every piece of mutable UI state: current page,
//! form fields, pricing, overlays and the in-flight flag. Pages hold it in a
//! single `RwSignal` and call the methods below; nothing else mutates UI
//! state. Derived values (WhatsApp mirror, payable amount) are recomputed
//! inside the mutator that changes their sources.
//!
//! Submission is split in two around the network call so no borrow of the
//! state is held across an `await`:
//! [`EnrollmentState::begin_submit`] validates and yields the payload,
//! [`EnrollmentState::finish_submit`] applies the outcome.

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use super::modal::ModalState;
use super::navigation::Page;
use super::pricing::{CouponOutcome, PricingState};
use super::registration::{Field, Registration};
use super::validation::validate_registration;
use crate::config::SiteConfig;
use crate::net::api::{SubmitError, submit_failed_message};
use crate::net::types::SubmissionPayload;
use crate::util::clipboard::{ClipboardError, copy_notice};
use crate::util::links;

pub const SUBMITTED_MESSAGE: &str = "Your application has been submitted! Please proceed to payment.";
pub const COUPON_ALREADY_APPLIED_MESSAGE: &str = "Coupon already applied.";
pub const NAME_REQUIRED_MESSAGE: &str = "Please enter your name to proceed.";

#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentState {
    pub page: Page,
    pub registration: Registration,
    pub same_as_mobile: bool,
    pub pricing: PricingState,
    pub modals: ModalState,
    /// Submission in flight; the submit button is disabled while set.
    pub loading: bool,
    pub show_bank_details: bool,
    /// Short highlight on the coupon row right after it is applied.
    pub coupon_highlight: bool,
    config: SiteConfig,
}

impl EnrollmentState {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            page: Page::Landing,
            registration: Registration::default(),
            same_as_mobile: false,
            pricing: PricingState::new(config.base_fee, config.coupon),
            modals: ModalState::default(),
            loading: false,
            show_bank_details: false,
            coupon_highlight: false,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Landing → form ("Register Now").
    pub fn open_form(&mut self) {
        if self.page == Page::Landing {
            self.page = Page::Form;
        }
    }

    /// Payment options → form ("Back to Form").
    pub fn back_to_form(&mut self) {
        if self.page == Page::PaymentOptions {
            self.page = Page::Form;
        }
    }

    /// Re-derive the page from a `location.hash` value. Only the countdown
    /// edition routes through the fragment; otherwise this is a no-op.
    pub fn sync_from_fragment(&mut self, raw: &str) {
        if !self.config.mirrors_fragment() {
            return;
        }
        self.page = Page::from_fragment(raw);
    }

    // =========================================================================
    // FIELDS
    // =========================================================================

    /// Update one field. While "Same as Mobile" is on, the WhatsApp pair
    /// follows the phone pair and direct edits to it are ignored.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.same_as_mobile && field.is_whatsapp() {
            return;
        }
        self.registration.set(field, value);
        if self.same_as_mobile && field.is_phone() {
            self.registration.mirror_phone_to_whatsapp();
        }
    }

    /// Uniform handler keyed by the control's `name` attribute; every form
    /// control dispatches here. Returns `false` for names that are not form
    /// fields.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match Field::from_name(name) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => {
                log::warn!("ignoring input for unknown field {name:?}");
                false
            }
        }
    }

    pub fn set_same_as_mobile(&mut self, enabled: bool) {
        self.same_as_mobile = enabled;
        if enabled {
            self.registration.mirror_phone_to_whatsapp();
        } else {
            self.registration.reset_whatsapp();
        }
    }

    // =========================================================================
    // VALIDATION + SUBMISSION
    // =========================================================================

    /// Check the form, showing the first failure as a notice.
    pub fn validate_form(&mut self) -> bool {
        match validate_registration(&self.registration) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("form rejected: {err:?}");
                self.modals.show_notice(err.to_string());
                false
            }
        }
    }

    /// Validate and, on success, mark the submission in flight and return
    /// the payload to post. Returns `None` when validation fails or a
    /// submission is already running.
    pub fn begin_submit(&mut self, timestamp: impl Into<String>) -> Option<SubmissionPayload> {
        if self.loading {
            return None;
        }
        if !self.validate_form() {
            return None;
        }
        self.loading = true;
        Some(SubmissionPayload::new(
            &self.registration,
            self.config.course_name,
            &self.pricing,
            timestamp,
        ))
    }

    /// Apply the outcome of the network call. Success means "dispatched";
    /// the endpoint's response is never observable.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                self.modals.show_notice(SUBMITTED_MESSAGE);
                self.page = Page::PaymentOptions;
            }
            Err(err) => {
                log::error!("registration submission failed: {err}");
                self.modals.show_notice(submit_failed_message(&err));
            }
        }
    }

    // =========================================================================
    // PRICING
    // =========================================================================

    pub fn apply_coupon(&mut self) -> CouponOutcome {
        let outcome = self.pricing.apply_coupon();
        match outcome {
            CouponOutcome::Applied { code, payable_amount } => {
                log::info!("coupon {code} applied, payable {payable_amount}");
                self.coupon_highlight = true;
                self.modals.show_notice(format!(
                    "Coupon \"{code}\" applied successfully! Payable amount is now ₹ {payable_amount}."
                ));
            }
            CouponOutcome::AlreadyApplied => self.modals.show_notice(COUPON_ALREADY_APPLIED_MESSAGE),
            CouponOutcome::Unavailable => log::debug!("no coupon in this edition"),
        }
        outcome
    }

    pub fn clear_coupon_highlight(&mut self) {
        self.coupon_highlight = false;
    }

    // =========================================================================
    // PAYMENT PAGE
    // =========================================================================

    pub fn toggle_bank_details(&mut self) {
        self.show_bank_details = !self.show_bank_details;
    }

    /// Show the outcome of a clipboard copy.
    pub fn finish_copy(&mut self, result: &Result<(), ClipboardError>, message: Option<&str>) {
        if let Err(err) = result {
            log::warn!("{err}");
        }
        self.modals.show_notice(copy_notice(result, message));
    }

    #[must_use]
    pub fn upi_link(&self) -> String {
        links::upi_link(&self.config, self.pricing.payable_amount)
    }

    // =========================================================================
    // WHATSAPP OVERLAYS
    // =========================================================================

    pub fn open_whatsapp_choice(&mut self) {
        self.modals.open_whatsapp_choice();
    }

    pub fn close_whatsapp_choice(&mut self) {
        self.modals.close_whatsapp_choice();
    }

    /// "Send Payment Screenshot": swap the choice menu for the name prompt.
    pub fn choose_screenshot(&mut self) {
        self.modals.close_whatsapp_choice();
        self.open_name_prompt();
    }

    /// "Make a Course Inquiry": close the menu and return the link to open.
    pub fn choose_inquiry(&mut self) -> String {
        self.modals.close_whatsapp_choice();
        links::inquiry_link(&self.config)
    }

    /// Open the name prompt, prefilled with the name typed into the form.
    pub fn open_name_prompt(&mut self) {
        self.modals.open_name_prompt(&self.registration.name);
    }

    pub fn close_name_prompt(&mut self) {
        self.modals.close_name_prompt();
    }

    pub fn set_name_draft(&mut self, value: impl Into<String>) {
        self.modals.set_name_draft(value);
    }

    /// Submit the name prompt. A blank name keeps the prompt open and shows a
    /// notice; otherwise the prompt closes and the screenshot link is
    /// returned for the caller to open.
    pub fn submit_name_prompt(&mut self) -> Option<String> {
        let draft = self.modals.name_prompt.as_ref()?.draft.trim().to_owned();
        if draft.is_empty() {
            self.modals.show_notice(NAME_REQUIRED_MESSAGE);
            return None;
        }
        self.modals.close_name_prompt();
        Some(links::screenshot_link(&self.config, &draft))
    }

    pub fn dismiss_notice(&mut self) {
        self.modals.dismiss_notice();
    }
}

impl Default for EnrollmentState {
    fn default() -> Self {
        Self::new(SiteConfig::active())
    }
}

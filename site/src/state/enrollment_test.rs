use super::*;
use crate::state::validation::ValidationError;

fn coupon_state() -> EnrollmentState {
    EnrollmentState::new(SiteConfig::coupon_edition())
}

fn countdown_state() -> EnrollmentState {
    EnrollmentState::new(SiteConfig::countdown_edition())
}

fn filled(mut state: EnrollmentState) -> EnrollmentState {
    state.open_form();
    state.set_field(Field::Name, "Anjali");
    state.set_field(Field::Age, "25");
    state.set_field(Field::PhoneNumber, "9876543210");
    state.set_field(Field::WhatsappNumber, "9876543210");
    state.set_field(Field::Email, "a@b.com");
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_starts_on_landing_with_nothing_open() {
    let state = coupon_state();
    assert_eq!(state.page, Page::Landing);
    assert!(!state.loading);
    assert!(!state.same_as_mobile);
    assert!(!state.modals.is_any_open());
    assert_eq!(state.pricing.payable_amount, 1999);
}

#[test]
fn countdown_edition_has_fixed_fee() {
    let state = countdown_state();
    assert_eq!(state.pricing.base_fee, 999);
    assert_eq!(state.pricing.payable_amount, 999);
    assert!(state.pricing.coupon.is_none());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn register_now_moves_landing_to_form() {
    let mut state = coupon_state();
    state.open_form();
    assert_eq!(state.page, Page::Form);
}

#[test]
fn back_to_form_only_leaves_payment_options() {
    let mut state = coupon_state();
    state.back_to_form();
    assert_eq!(state.page, Page::Landing);

    state.page = Page::PaymentOptions;
    state.back_to_form();
    assert_eq!(state.page, Page::Form);
}

#[test]
fn register_now_is_ignored_after_landing() {
    let mut state = coupon_state();
    state.page = Page::PaymentOptions;
    state.open_form();
    assert_eq!(state.page, Page::PaymentOptions);
}

#[test]
fn fragment_drives_page_in_countdown_edition() {
    let mut state = countdown_state();
    state.sync_from_fragment("#paymentOptions");
    assert_eq!(state.page, Page::PaymentOptions);
    state.sync_from_fragment("#form");
    assert_eq!(state.page, Page::Form);
    state.sync_from_fragment("#bogus");
    assert_eq!(state.page, Page::Landing);
    state.sync_from_fragment("");
    assert_eq!(state.page, Page::Landing);
}

#[test]
fn fragment_is_ignored_in_coupon_edition() {
    let mut state = coupon_state();
    state.sync_from_fragment("#paymentOptions");
    assert_eq!(state.page, Page::Landing);
}

// =============================================================
// Fields + Same as Mobile
// =============================================================

#[test]
fn set_field_by_name_updates_one_field() {
    let mut state = coupon_state();
    assert!(state.set_field_by_name("place", "Tirur"));
    assert_eq!(state.registration.place, "Tirur");
    assert!(!state.set_field_by_name("coupon", "FLAT50"));
}

#[test]
fn named_inputs_follow_mirroring_rules() {
    let mut state = coupon_state();
    state.set_field_by_name("phoneNumber", "9876543210");
    state.set_same_as_mobile(true);
    assert!(state.set_field_by_name("whatsappNumber", "1111111111"));
    assert_eq!(state.registration.whatsapp_number, "9876543210");

    state.set_field_by_name("phoneCode", "+971");
    state.set_field_by_name("phoneNumber", "501234567");
    assert_eq!(state.registration.whatsapp_code, "+971");
    assert_eq!(state.registration.whatsapp_number, "501234567");
}

#[test]
fn same_as_mobile_on_copies_phone() {
    let mut state = coupon_state();
    state.set_field(Field::PhoneCode, "+91");
    state.set_field(Field::PhoneNumber, "9876543210");
    state.set_same_as_mobile(true);
    assert_eq!(state.registration.whatsapp_number, "9876543210");
    assert_eq!(state.registration.whatsapp_code, "+91");
}

#[test]
fn same_as_mobile_keeps_following_phone_edits() {
    let mut state = coupon_state();
    state.set_same_as_mobile(true);
    state.set_field(Field::PhoneNumber, "501234567");
    state.set_field(Field::PhoneCode, "+971");
    assert_eq!(state.registration.whatsapp_number, "501234567");
    assert_eq!(state.registration.whatsapp_code, "+971");
}

#[test]
fn same_as_mobile_blocks_direct_whatsapp_edits() {
    let mut state = coupon_state();
    state.set_field(Field::PhoneNumber, "9876543210");
    state.set_same_as_mobile(true);
    state.set_field(Field::WhatsappNumber, "1111111111");
    assert_eq!(state.registration.whatsapp_number, "9876543210");
}

#[test]
fn same_as_mobile_off_resets_whatsapp() {
    let mut state = coupon_state();
    state.set_field(Field::PhoneCode, "+44");
    state.set_field(Field::PhoneNumber, "7700900123");
    state.set_same_as_mobile(true);
    state.set_same_as_mobile(false);
    assert_eq!(state.registration.whatsapp_number, "");
    assert_eq!(state.registration.whatsapp_code, "+91");

    state.set_field(Field::WhatsappNumber, "1111111111");
    state.set_field(Field::PhoneNumber, "2222222222");
    assert_eq!(state.registration.whatsapp_number, "1111111111");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_form_shows_mandatory_message() {
    let mut state = coupon_state();
    assert!(!state.validate_form());
    assert_eq!(
        state.modals.notice.as_deref(),
        Some(ValidationError::MissingMandatory.to_string().as_str())
    );
}

#[test]
fn validate_form_shows_age_message() {
    let mut state = filled(coupon_state());
    state.set_field(Field::Age, "-5");
    assert!(!state.validate_form());
    assert_eq!(state.modals.notice.as_deref(), Some("Please enter a valid age."));
}

#[test]
fn validate_form_passes_without_notice() {
    let mut state = filled(coupon_state());
    assert!(state.validate_form());
    assert!(state.modals.notice.is_none());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn invalid_form_never_sets_loading() {
    let mut state = coupon_state();
    state.open_form();
    assert!(state.begin_submit("t").is_none());
    assert!(!state.loading);
    assert_eq!(state.page, Page::Form);
}

#[test]
fn begin_submit_builds_payload_and_sets_loading() {
    let mut state = filled(coupon_state());
    state.apply_coupon();
    state.dismiss_notice();
    let payload = state.begin_submit("21/7/2025, 7:00:00 pm").unwrap();
    assert!(state.loading);
    assert_eq!(payload.registration, state.registration);
    assert_eq!(payload.course_name, "AI For Smart Teacher Course");
    assert_eq!(payload.original_fee, 1999);
    assert_eq!(payload.payable_amount, 999);
    assert_eq!(payload.discount_amount, 1000);
    assert!(payload.coupon_applied);
    assert_eq!(payload.timestamp, "21/7/2025, 7:00:00 pm");
}

#[test]
fn second_begin_submit_while_loading_is_rejected() {
    let mut state = filled(coupon_state());
    assert!(state.begin_submit("t").is_some());
    assert!(state.begin_submit("t").is_none());
}

#[test]
fn dispatched_submission_moves_to_payment_options() {
    let mut state = filled(coupon_state());
    state.begin_submit("t").unwrap();
    state.finish_submit(Ok(()));
    assert!(!state.loading);
    assert_eq!(state.page, Page::PaymentOptions);
    assert_eq!(state.modals.notice.as_deref(), Some(SUBMITTED_MESSAGE));
}

#[test]
fn failed_submission_stays_on_form_with_error() {
    let mut state = filled(coupon_state());
    state.begin_submit("t").unwrap();
    state.finish_submit(Err(SubmitError::Network("Failed to fetch".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.page, Page::Form);
    assert_eq!(
        state.modals.notice.as_deref(),
        Some("Failed to submit application. Please try again. Error: Failed to fetch")
    );

    // The user can resubmit.
    state.dismiss_notice();
    assert!(state.begin_submit("t").is_some());
}

// =============================================================
// Coupon
// =============================================================

#[test]
fn coupon_applies_once_then_reports_already_applied() {
    let mut state = coupon_state();
    state.apply_coupon();
    assert_eq!(state.pricing.payable_amount, 999);
    assert_eq!(state.pricing.discount_amount, 1000);
    assert!(state.coupon_highlight);
    assert_eq!(
        state.modals.notice.as_deref(),
        Some("Coupon \"FLAT50\" applied successfully! Payable amount is now ₹ 999.")
    );

    state.dismiss_notice();
    assert_eq!(state.apply_coupon(), CouponOutcome::AlreadyApplied);
    assert_eq!(state.pricing.payable_amount, 999);
    assert_eq!(state.pricing.discount_amount, 1000);
    assert_eq!(state.modals.notice.as_deref(), Some(COUPON_ALREADY_APPLIED_MESSAGE));

    state.clear_coupon_highlight();
    assert!(!state.coupon_highlight);
    assert!(state.pricing.coupon_applied);
}

#[test]
fn coupon_is_unavailable_in_countdown_edition() {
    let mut state = countdown_state();
    assert_eq!(state.apply_coupon(), CouponOutcome::Unavailable);
    assert!(state.modals.notice.is_none());
    assert_eq!(state.pricing.payable_amount, 999);
}

#[test]
fn upi_link_tracks_discounted_amount() {
    let mut state = coupon_state();
    assert!(state.upi_link().contains("&am=1999&"));
    state.apply_coupon();
    assert!(state.upi_link().contains("&am=999&"));
}

// =============================================================
// Payment page helpers
// =============================================================

#[test]
fn bank_details_toggle() {
    let mut state = coupon_state();
    state.toggle_bank_details();
    assert!(state.show_bank_details);
    state.toggle_bank_details();
    assert!(!state.show_bank_details);
}

#[test]
fn finish_copy_reports_success_and_failure() {
    let mut state = coupon_state();
    state.finish_copy(&Ok(()), Some("IFSC copied!"));
    assert_eq!(state.modals.notice.as_deref(), Some("IFSC copied!"));
    state.finish_copy(&Err(ClipboardError("denied".to_owned())), Some("IFSC copied!"));
    assert_eq!(state.modals.notice.as_deref(), Some("Failed to copy. Please copy manually."));
}

// =============================================================
// WhatsApp overlays
// =============================================================

#[test]
fn screenshot_choice_chains_into_prefilled_name_prompt() {
    let mut state = filled(coupon_state());
    state.open_whatsapp_choice();
    state.choose_screenshot();
    assert!(!state.modals.whatsapp_choice);
    assert_eq!(state.modals.name_prompt.as_ref().map(|p| p.draft.as_str()), Some("Anjali"));
}

#[test]
fn inquiry_choice_closes_menu_and_returns_link() {
    let mut state = coupon_state();
    state.open_whatsapp_choice();
    let link = state.choose_inquiry();
    assert!(link.starts_with("https://wa.me/918590319881?text=Hello%20First%20Bench"));
    assert!(!state.modals.is_any_open());
}

#[test]
fn blank_name_keeps_prompt_open() {
    let mut state = coupon_state();
    state.open_name_prompt();
    state.set_name_draft("   ");
    assert_eq!(state.submit_name_prompt(), None);
    assert!(state.modals.name_prompt.is_some());
    assert_eq!(state.modals.notice.as_deref(), Some(NAME_REQUIRED_MESSAGE));
}

#[test]
fn named_prompt_returns_screenshot_link_and_closes() {
    let mut state = coupon_state();
    state.open_name_prompt();
    state.set_name_draft("  Anjali  ");
    let link = state.submit_name_prompt().unwrap();
    assert!(link.contains("Sir%2C%20I%27m%20Anjali%2C"));
    assert!(state.modals.name_prompt.is_none());
    assert!(state.modals.notice.is_none());
}

#[test]
fn submit_name_prompt_without_prompt_is_noop() {
    let mut state = coupon_state();
    assert_eq!(state.submit_name_prompt(), None);
    assert!(!state.modals.is_any_open());
}

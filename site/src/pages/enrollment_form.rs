//! Enrollment form: applicant details, fee summary and submission.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and network errors both land in the notice modal via
//! `EnrollmentState`; this view only sequences `begin_submit`, the POST and
//! `finish_submit`.

use leptos::prelude::*;

use crate::components::form_fields::{NotesInput, PhoneInput, TextInput};
use crate::state::enrollment::EnrollmentState;
use crate::state::pricing::CouponOutcome;
use crate::state::registration::Field;
use crate::util::clock;

/// How long the coupon row pulses after a successful apply.
#[cfg(feature = "hydrate")]
const COUPON_HIGHLIGHT_MS: u64 = 1_000;

#[component]
pub fn EnrollmentForm() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let (course_name, coupon) = enrollment.with_untracked(|s| (s.config().course_name, s.config().coupon));

    let loading = move || enrollment.with(|s| s.loading);
    let same_as_mobile = move || enrollment.with(|s| s.same_as_mobile);
    let base_fee = move || enrollment.with(|s| s.pricing.base_fee);
    let discount = move || enrollment.with(|s| s.pricing.discount_amount);
    let payable = move || enrollment.with(|s| s.pricing.payable_amount);
    let coupon_applied = move || enrollment.with(|s| s.pricing.coupon_applied);
    let highlight = move || enrollment.with(|s| s.coupon_highlight);

    let on_same_as_mobile = move |ev| enrollment.update(|s| s.set_same_as_mobile(event_target_checked(&ev)));

    let on_apply_coupon = move |_| {
        let outcome = enrollment.try_update(EnrollmentState::apply_coupon);
        if matches!(outcome, Some(CouponOutcome::Applied { .. })) {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(COUPON_HIGHLIGHT_MS)).await;
                enrollment.try_update(EnrollmentState::clear_coupon_highlight);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = enrollment.try_update(|s| s.begin_submit(clock::locale_timestamp())).flatten() else {
            return;
        };
        let endpoint = enrollment.with_untracked(|s| s.config().submission_endpoint);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_registration(endpoint, &payload).await;
            enrollment.try_update(|s| s.finish_submit(result));
        });
    };

    let on_screenshot = move |_| enrollment.update(EnrollmentState::open_name_prompt);

    view! {
        <form class="enrollment-form" novalidate=true on:submit=on_submit>
            <h2 class="enrollment-form__title">"Enrollment Details"</h2>

            <TextInput field=Field::Name label="Name" placeholder="Your Full Name"/>
            <TextInput field=Field::Age label="Age" input_type="number" placeholder="Your Age"/>
            <PhoneInput code_field=Field::PhoneCode number_field=Field::PhoneNumber label="Phone Number *"/>
            <label class="form-field form-field--inline">
                <input type="checkbox" prop:checked=same_as_mobile on:change=on_same_as_mobile/>
                <span>"WhatsApp number same as mobile number"</span>
            </label>
            <PhoneInput code_field=Field::WhatsappCode number_field=Field::WhatsappNumber label="WhatsApp Number *"/>
            <TextInput field=Field::Email label="Email ID" input_type="email" placeholder="your.email@example.com"/>
            <TextInput field=Field::Place label="Place" placeholder="Your City/Town" optional=true/>
            <TextInput field=Field::District label="District" placeholder="Your District" optional=true/>
            <NotesInput/>

            <div class="summary">
                <h3 class="summary__title">"💰 Course & Payment Summary"</h3>
                <p><span class="summary__label">"Course Name: "</span>{course_name}</p>
                <p><span class="summary__label">"Fee: "</span>"₹ "{base_fee}</p>
                {coupon.map(|coupon| {
                    view! {
                        <div class=move || if highlight() { "coupon coupon--highlight" } else { "coupon" }>
                            <span class="coupon__icon">"🏷️"</span>
                            <div class="coupon__text">
                                <p class="coupon__code">{format!("Coupon Code: {}", coupon.code)}</p>
                                <p class="coupon__description">{coupon.description}</p>
                            </div>
                            <button
                                type="button"
                                class="btn btn--accent btn--small"
                                prop:disabled=coupon_applied
                                on:click=on_apply_coupon
                            >
                                {move || if coupon_applied() { "Applied!" } else { "Apply" }}
                            </button>
                        </div>
                    }
                })}
                <div class="summary__totals">
                    <p class="summary__row"><span>"Total Amount:"</span><span>"₹ "{base_fee}</span></p>
                    <p class="summary__row summary__row--discount">
                        <span>"Discount:"</span><span>"- ₹ "{discount}</span>
                    </p>
                    <p class="summary__row summary__row--payable">
                        <span>"Total Payable:"</span><span>"₹ "{payable}</span>
                    </p>
                </div>
            </div>

            <button type="submit" class="btn btn--primary btn--block" prop:disabled=loading>
                {move || if loading() { "Submitting..." } else { "Submit and Proceed to Payment" }}
            </button>
            <button type="button" class="btn btn--whatsapp btn--block" on:click=on_screenshot>
                "WhatsApp Fee Screenshot"
            </button>
        </form>
    }
}

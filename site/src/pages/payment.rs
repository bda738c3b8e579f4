//! Payment instructions: UPI intent, bank details with copy buttons and the
//! screenshot reminder.

use leptos::prelude::*;

use crate::config::BankDetail;
use crate::state::enrollment::EnrollmentState;
use crate::util::{browser, clipboard};

const COPY_ALL_MESSAGE: &str = "All Bank Details copied!";

/// Rows before this index are GPay details; the rest are bank account rows.
const GPAY_ROWS: usize = 2;

/// Copy `text` and report the outcome through the notice modal.
fn copy_with_notice(enrollment: RwSignal<EnrollmentState>, text: String, message: &'static str) {
    leptos::task::spawn_local(async move {
        let result = clipboard::copy_text(&text).await;
        enrollment.try_update(|s| s.finish_copy(&result, Some(message)));
    });
}

fn detail_rows(enrollment: RwSignal<EnrollmentState>, details: &'static [BankDetail]) -> impl IntoView {
    details
        .iter()
        .map(|detail| {
            let on_copy = move |_| copy_with_notice(enrollment, detail.value.to_owned(), detail.copied_message);
            view! {
                <p class="bank__row">
                    <span class="bank__label">{detail.label}": "</span>
                    <span class="bank__value">{detail.value}</span>
                    <button class="btn btn--link btn--small" on:click=on_copy>"Copy"</button>
                </p>
            }
        })
        .collect_view()
}

#[component]
pub fn PaymentOptions() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let (bank_details, whatsapp_number) =
        enrollment.with_untracked(|s| (s.config().bank_details, s.config().whatsapp_number));
    let split = GPAY_ROWS.min(bank_details.len());
    let (gpay, bank) = bank_details.split_at(split);

    let payable = move || enrollment.with(|s| s.pricing.payable_amount);
    let show_bank = move || enrollment.with(|s| s.show_bank_details);

    let on_upi = move |_| {
        let link = enrollment.with_untracked(EnrollmentState::upi_link);
        browser::navigate_to(&link);
    };
    let on_toggle_bank = move |_| enrollment.update(EnrollmentState::toggle_bank_details);
    let on_copy_all = move |_| {
        let block = enrollment.with_untracked(|s| s.config().bank_details_block());
        copy_with_notice(enrollment, block, COPY_ALL_MESSAGE);
    };
    let on_screenshot = move |_| enrollment.update(EnrollmentState::open_name_prompt);
    let on_back = move |_| enrollment.update(EnrollmentState::back_to_form);

    view! {
        <section class="payment">
            <h2 class="payment__title">"Choose Payment Method"</h2>
            <p class="payment__amount">"Amount Payable: ₹ "{payable}</p>
            <p class="callout callout--note">
                <strong>"Important Note: "</strong>
                {format!(
                    "The screenshot of payment should be sent to the WhatsApp number +{whatsapp_number}. If not, the application may not be considered."
                )}
            </p>

            <button class="btn btn--primary btn--block" on:click=on_upi>"Pay with UPI"</button>

            <div class="bank">
                <button class="btn btn--secondary btn--block" on:click=on_toggle_bank>
                    "Bank Transfer "
                    <span class=move || if show_bank() { "chevron chevron--open" } else { "chevron" }>"▾"</span>
                </button>
                <Show when=show_bank>
                    <div class="bank__details">
                        <h3 class="bank__heading">"GPay Details:"</h3>
                        {detail_rows(enrollment, gpay)}
                        <h3 class="bank__heading">"Bank Account Details:"</h3>
                        {detail_rows(enrollment, bank)}
                        <button class="btn btn--accent btn--block" on:click=on_copy_all>"Copy All Details"</button>
                    </div>
                </Show>
            </div>

            <p class="callout callout--warning">
                <strong>"Warning: "</strong>
                "Please come back to this screen or the home screen after payment completion and take a screenshot. Then, send the screenshot to the WhatsApp number by clicking the button below."
            </p>
            <button type="button" class="btn btn--whatsapp btn--block" on:click=on_screenshot>
                "WhatsApp Fee Screenshot"
            </button>
            <button class="btn btn--link" on:click=on_back>"Back to Form"</button>
        </section>
    }
}

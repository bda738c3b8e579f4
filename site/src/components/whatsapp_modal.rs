//! "How can we help?" menu: payment screenshot or course inquiry.

use leptos::prelude::*;

use crate::state::enrollment::EnrollmentState;
use crate::util::browser;

#[component]
pub fn WhatsAppChoiceModal() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();

    let on_screenshot = move |_| enrollment.update(EnrollmentState::choose_screenshot);
    let on_inquiry = move |_| {
        if let Some(link) = enrollment.try_update(EnrollmentState::choose_inquiry) {
            browser::open_in_new_tab(&link);
        }
    };
    let on_cancel = move |_| enrollment.update(EnrollmentState::close_whatsapp_choice);
    let on_backdrop = move |_| enrollment.update(EnrollmentState::close_whatsapp_choice);

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div class="dialog dialog--choice" on:click=move |ev| ev.stop_propagation()>
                <h3>"How can we help?"</h3>
                <button class="btn btn--whatsapp btn--block" on:click=on_screenshot>
                    "Send Payment Screenshot"
                </button>
                <button class="btn btn--secondary btn--block" on:click=on_inquiry>
                    "Make a Course Inquiry"
                </button>
                <button class="btn btn--link" on:click=on_cancel>"Cancel"</button>
            </div>
        </div>
    }
}

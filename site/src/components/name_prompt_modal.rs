//! Name prompt used to template the payment-screenshot WhatsApp message.

use leptos::prelude::*;

use crate::state::enrollment::EnrollmentState;
use crate::util::browser;

#[component]
pub fn NamePromptModal() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();

    let draft = move || {
        enrollment.with(|s| {
            s.modals
                .name_prompt
                .as_ref()
                .map(|p| p.draft.clone())
                .unwrap_or_default()
        })
    };
    let on_input = move |ev| enrollment.update(|s| s.set_name_draft(event_target_value(&ev)));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(link) = enrollment.try_update(EnrollmentState::submit_name_prompt).flatten() {
            browser::open_in_new_tab(&link);
        }
    };
    let on_cancel = move |_| enrollment.update(EnrollmentState::close_name_prompt);

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--prompt">
                <h3>"Enter Your Name"</h3>
                <p class="dialog__hint">"Please provide the name used in the application form."</p>
                <form on:submit=on_submit>
                    <input
                        class="form-field__input"
                        type="text"
                        placeholder="Your Full Name"
                        prop:value=draft
                        on:input=on_input
                    />
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--link" on:click=on_cancel>"Cancel"</button>
                        <button type="submit" class="btn btn--whatsapp">"Submit"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

//! Acknowledgement modal: one message and an OK button.

#[cfg(test)]
#[path = "notice_modal_test.rs"]
mod notice_modal_test;

use leptos::prelude::*;

use crate::state::enrollment::EnrollmentState;

/// Keys that acknowledge the notice while it is open.
#[must_use]
pub fn dismisses_notice(key: &str) -> bool {
    matches!(key, "Escape" | "Enter")
}

#[component]
pub fn NoticeModal() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();

    let message = move || enrollment.with(|s| s.modals.notice.clone().unwrap_or_default());
    let on_close = move |_| enrollment.update(EnrollmentState::dismiss_notice);

    // Window-level: the dialog itself never takes focus.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if dismisses_notice(&ev.key()) {
                ev.prevent_default();
                enrollment.update(EnrollmentState::dismiss_notice);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="dialog-backdrop dialog-backdrop--top">
            <div class="dialog dialog--notice" role="alertdialog">
                <p class="dialog__message">{message}</p>
                <button class="btn btn--primary" on:click=on_close>"OK"</button>
            </div>
        </div>
    }
}

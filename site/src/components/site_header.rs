//! Landing-page chrome: offer marquee and the sticky contact header.

use leptos::prelude::*;

use crate::state::enrollment::EnrollmentState;
use crate::util::links;

/// Scrolling promo strip shown by the coupon edition.
#[component]
pub fn OfferMarquee() -> impl IntoView {
    view! {
        <div class="marquee">
            <div class="marquee__text">
                "🎉 100+ Sessions Celebration! ✨ FLAT 50% Offer! 🚀 Don't Miss Out! 🎉"
            </div>
        </div>
    }
}

/// Sticky header with call, register and WhatsApp actions.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let tel = enrollment.with_untracked(|s| links::tel_link(s.config().inquiry_phone));

    let on_register = move |_| enrollment.update(EnrollmentState::open_form);
    let on_whatsapp = move |_| enrollment.update(EnrollmentState::open_whatsapp_choice);

    view! {
        <header class="site-header">
            <a href=tel class="site-header__icon site-header__icon--call" aria-label="Call for Inquiry">
                "📞"
            </a>
            <button class="btn btn--primary site-header__register" on:click=on_register>
                "Register Now"
            </button>
            <button
                class="site-header__icon site-header__icon--whatsapp"
                aria-label="Contact via WhatsApp"
                on:click=on_whatsapp
            >
                "💬"
            </button>
        </header>
    }
}

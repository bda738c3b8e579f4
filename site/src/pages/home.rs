//! The single route: page switcher plus overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the navigation side effects: in the countdown edition the current
//! page is read from and written to `location.hash`, and a `hashchange`
//! listener re-derives it on back/forward. Every page change scrolls to top.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::name_prompt_modal::NamePromptModal;
use crate::components::notice_modal::NoticeModal;
use crate::components::site_header::{OfferMarquee, SiteHeader};
use crate::components::whatsapp_modal::WhatsAppChoiceModal;
use crate::config::LOGO_PATH;
use crate::pages::enrollment_form::EnrollmentForm;
use crate::pages::landing::LandingPage;
use crate::pages::payment::PaymentOptions;
use crate::state::enrollment::EnrollmentState;
use crate::state::navigation::Page;
use crate::util::browser;

#[component]
pub fn HomePage() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let (mirrors_fragment, show_marquee) =
        enrollment.with_untracked(|s| (s.config().mirrors_fragment(), s.config().coupon.is_some()));

    let page = Memo::new(move |_| enrollment.with(|s| s.page));

    // Initial page from the fragment. Runs once after hydration, so SSR and
    // the first client render agree on the landing page.
    Effect::new(move || {
        if mirrors_fragment {
            let raw = browser::read_fragment();
            enrollment.update(|s| s.sync_from_fragment(&raw));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if mirrors_fragment {
            let handle = window_event_listener(leptos::ev::hashchange, move |_| {
                let raw = browser::read_fragment();
                enrollment.update(|s| s.sync_from_fragment(&raw));
            });
            on_cleanup(move || handle.remove());
        }
    }

    Effect::new(move |prev: Option<Page>| {
        let current = page.get();
        if let Some(prev) = prev {
            if prev != current {
                browser::scroll_to_top();
                if mirrors_fragment {
                    browser::write_page(current);
                }
            }
        }
        current
    });

    let has_notice = move || enrollment.with(|s| s.modals.notice.is_some());
    let has_choice = move || enrollment.with(|s| s.modals.whatsapp_choice);
    let has_prompt = move || enrollment.with(|s| s.modals.name_prompt.is_some());
    let course_name = enrollment.with_untracked(|s| s.config().course_name);

    view! {
        <div class="site">
            <Show when=move || show_marquee>
                <OfferMarquee/>
            </Show>
            <Show when=move || page.get() == Page::Landing>
                <SiteHeader/>
            </Show>
            <main class="site__card">
                <div class="site__logo-wrap">
                    <img src=LOGO_PATH alt="First Bench Learning Logo" class="site__logo"/>
                </div>
                <h1 class="site__title">{course_name}</h1>
                {move || match page.get() {
                    Page::Landing => view! { <LandingPage/> }.into_any(),
                    Page::Form => view! { <EnrollmentForm/> }.into_any(),
                    Page::PaymentOptions => view! { <PaymentOptions/> }.into_any(),
                }}
            </main>
            <Show when=has_choice>
                <WhatsAppChoiceModal/>
            </Show>
            <Show when=has_prompt>
                <NamePromptModal/>
            </Show>
            // Rendered last so a notice sits above the name prompt.
            <Show when=has_notice>
                <NoticeModal/>
            </Show>
        </div>
    }
}

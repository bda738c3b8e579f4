//! Live countdown to the next batch, with an add-to-calendar link.
//!
//! DESIGN
//! ======
//! The banner owns its own `CountdownState` signal; the enrollment state
//! never sees it. A hydrate-only loop ticks once per second and exits
//! when the countdown freezes or the component unmounts.

#[cfg(test)]
#[path = "countdown_banner_test.rs"]
mod countdown_banner_test;

use leptos::prelude::*;

use crate::config::ClassEvent;
use crate::state::countdown::CountdownState;
use crate::util::{clock, links};

/// Two-digit display for one countdown field. Days may exceed two digits.
#[must_use]
pub fn format_unit(value: i64) -> String {
    format!("{:02}", value.max(0))
}

#[component]
pub fn CountdownBanner(event: ClassEvent) -> impl IntoView {
    let countdown = RwSignal::new(CountdownState::new(event.starts_at, clock::now_utc()));
    let calendar = links::calendar_link(&event);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let running = countdown.try_update(|s| s.tick(clock::now_utc())).unwrap_or(false);
                if !running {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let unit = move |label: &'static str, pick: fn(&CountdownState) -> i64| {
        view! {
            <div class="countdown__unit">
                <span class="countdown__value">{move || countdown.with(|s| format_unit(pick(s)))}</span>
                <span class="countdown__label">{label}</span>
            </div>
        }
    };

    view! {
        <section class="countdown">
            <p class="countdown__heading">
                {move || if countdown.with(|s| s.finished) { "Class has started!" } else { "Class starts in" }}
            </p>
            <div class="countdown__grid">
                {unit("Days", |s| s.remaining.days)}
                {unit("Hours", |s| s.remaining.hours)}
                {unit("Minutes", |s| s.remaining.minutes)}
                {unit("Seconds", |s| s.remaining.seconds)}
            </div>
            <a class="btn btn--secondary countdown__calendar" href=calendar target="_blank" rel="noopener noreferrer">
                "📅 Add to Google Calendar"
            </a>
        </section>
    }
}

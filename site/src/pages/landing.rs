//! Marketing page: offer, batch date, faculty and course outline.

use leptos::prelude::*;

use crate::components::countdown_banner::CountdownBanner;
use crate::config::FACULTY_PHOTO_PATH;
use crate::state::enrollment::EnrollmentState;

const COURSE_FACTS: &[(&str, &str)] = &[
    ("Course Name:", "AI For Smart Teacher Course"),
    ("For:", "All Teachers & Aspirants"),
    ("Mode:", "Live Online Sessions"),
    ("Duration:", "7 Days + 3 days Doubt clearance assistance"),
];

const COURSE_CONTENTS: &[&str] = &[
    "Lesson Plan & Activities",
    "Simplify Tough Concepts",
    "Memory Codes & Stories",
    "Students Data Managing",
    "Tables & Mind Map Notes",
    "PDF & Picture Analysis",
    "Question Making & PYQ Practice",
    "Slide & Edu Websites Making",
    "Timetable & Mark List Creation",
    "Images, Animation & Videos",
    "Study with Songs, Quiz Making",
    "Speak & Video Chat with AI",
];

const WHY_POINTS: &[&str] = &[
    "അധ്യാപനം കൂടുതൽ വേഗത്തിലും ഫലപ്രദവുമാക്കാം.",
    "ബുദ്ധിമുട്ടുള്ള പാഠഭാഗങ്ങൾ സിമ്പിളായി പഠിപ്പിക്കാം.",
    "ആക്റ്റീവ് ലേണിംഗിലൂടെ കുട്ടികളെ കൂടുതൽ എൻഗേജ് ചെയ്യാം.",
    "Marksheet Making, Question Paper making, Valuation, Time Table Scheduling തുടങ്ങിയവ നിമിഷനേരങ്ങൾ കൊണ്ട് തീർത്ത് സമയം ലാഭിക്കാം.",
    "മാറുന്ന ലോകത്ത് ഏറ്റവും മികച്ച കരിയർ ഉയർച്ച.",
];

fn check_list(items: &'static [&'static str]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <li class="check-list__item">
                    <span class="check-list__mark">"✔"</span>
                    <span>{*item}</span>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let (batch_label, class_event, has_coupon) = enrollment.with_untracked(|s| {
        let config = s.config();
        (config.batch_label, config.class_event.clone(), config.coupon.is_some())
    });

    let on_register = move |_| enrollment.update(EnrollmentState::open_form);
    let (tagline, cta) = if has_coupon {
        (
            "Grab now the 100+ sessions Celebration 50% offer! Don't miss out on this incredible opportunity! ✨",
            "Register Now with 50% off ✨",
        )
    } else {
        ("Seats are limited for the next live batch. Reserve yours today! ✨", "Register Now ✨")
    };

    view! {
        <section class="landing">
            <p class="landing__tagline">{tagline}</p>
            <button class="btn btn--primary btn--large" on:click=on_register>{cta}</button>

            <div class="landing__batch">
                <p class="landing__batch-label">"Next Batch Starts:"</p>
                <p class="landing__batch-date">{batch_label}</p>
            </div>
            {class_event.map(|event| view! { <CountdownBanner event=event/> })}

            <div class="landing__faculty">
                <img src=FACULTY_PHOTO_PATH alt="Faculty: Shameel Malayamma" class="landing__faculty-photo"/>
                <div>
                    <h3>"Faculty:"</h3>
                    <p class="landing__faculty-name">"Shameel Malayamma"</p>
                    <p>"AI Training Expert & Founder, First Bench Learning"</p>
                    <div class="landing__stars">"⭐⭐⭐⭐⭐"</div>
                </div>
            </div>

            <div class="panel">
                <h3 class="panel__title">"Course Details"</h3>
                {COURSE_FACTS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="panel__row">
                                <span class="panel__label">{*label}</span>
                                <span class="panel__value">{*value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel panel--dark">
                <h3 class="panel__title">"Course Contents"</h3>
                <ul class="check-list">
                    {check_list(COURSE_CONTENTS)}
                    <li class="check-list__more">"And many more smart AI hacks for your teaching career..."</li>
                </ul>
            </div>

            <div class="panel">
                <h3 class="panel__title">"Why AI For Smart Teachers?"</h3>
                <ul class="check-list">{check_list(WHY_POINTS)}</ul>
            </div>

            <button class="btn btn--primary btn--large" on:click=on_register>"Register Now ✨"</button>
        </section>
    }
}

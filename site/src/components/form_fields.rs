//! Inputs bound to one `Registration` field each.
//!
//! Every control dispatches through `EnrollmentState::set_field_by_name`
//! using its own `name` attribute, so the WhatsApp mirroring rules apply no
//! matter which control changed.

use leptos::prelude::*;

use crate::config::COUNTRY_CODES;
use crate::state::enrollment::EnrollmentState;
use crate::state::registration::Field;

fn field_value(enrollment: RwSignal<EnrollmentState>, field: Field) -> impl Fn() -> String + Copy {
    move || enrollment.with(|s| s.registration.get(field).to_owned())
}

/// Uniform change handler: the target's `name` attribute selects the field.
fn apply_named_input(enrollment: RwSignal<EnrollmentState>, ev: &leptos::ev::Event) {
    let Some(name) = event_target::<leptos::web_sys::Element>(ev).get_attribute("name") else {
        log::warn!("form control without a name attribute");
        return;
    };
    let value = event_target_value(ev);
    enrollment.update(|s| {
        s.set_field_by_name(&name, value);
    });
}

/// Whether `field` is locked because it mirrors the phone number.
fn is_mirrored(enrollment: RwSignal<EnrollmentState>, field: Field) -> impl Fn() -> bool + Copy {
    move || field.is_whatsapp() && enrollment.with(|s| s.same_as_mobile)
}

/// Single-line text, number or email input.
#[component]
pub fn TextInput(
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] optional: bool,
) -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let value = field_value(enrollment, field);
    let on_input = move |ev| apply_named_input(enrollment, &ev);

    view! {
        <label class="form-field">
            <span class="form-field__label">
                {label}
                {(!optional).then(|| view! { <span class="form-field__required">" *"</span> })}
            </span>
            <input
                class="form-field__input"
                type=input_type
                name=field.name()
                placeholder=placeholder
                required=!optional
                prop:value=value
                on:input=on_input
            />
        </label>
    }
}

/// Country-code select plus number input.
#[component]
pub fn PhoneInput(code_field: Field, number_field: Field, label: &'static str) -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let code = field_value(enrollment, code_field);
    let number = field_value(enrollment, number_field);
    let locked = is_mirrored(enrollment, number_field);

    let on_code = move |ev| apply_named_input(enrollment, &ev);
    let on_number = move |ev| apply_named_input(enrollment, &ev);

    view! {
        <div class="form-field">
            <span class="form-field__label">{label}</span>
            <div class="form-field__phone">
                <select
                    class="form-field__select"
                    name=code_field.name()
                    prop:value=code
                    prop:disabled=locked
                    on:change=on_code
                >
                    {COUNTRY_CODES
                        .iter()
                        .map(|c| {
                            view! {
                                <option value=c.code selected=move || code() == c.code>
                                    {format!("{} ({})", c.code, c.name)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    class="form-field__input"
                    type="tel"
                    name=number_field.name()
                    placeholder="Mobile Number"
                    required=true
                    prop:value=number
                    prop:disabled=locked
                    on:input=on_number
                />
            </div>
        </div>
    }
}

/// Optional multi-line notes.
#[component]
pub fn NotesInput() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let value = field_value(enrollment, Field::Notes);
    let on_input = move |ev| apply_named_input(enrollment, &ev);

    view! {
        <label class="form-field">
            <span class="form-field__label">"Any other information needed?"</span>
            <textarea
                class="form-field__input form-field__textarea"
                name=Field::Notes.name()
                rows="3"
                placeholder="e.g., specific requirements, questions"
                prop:value=value
                on:input=on_input
            ></textarea>
        </label>
    }
}

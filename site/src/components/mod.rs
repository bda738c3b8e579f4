//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render overlays and page chrome while reading/writing the shared
//! `EnrollmentState` from Leptos context.

pub mod countdown_banner;
pub mod form_fields;
pub mod name_prompt_modal;
pub mod notice_modal;
pub mod site_header;
pub mod whatsapp_modal;

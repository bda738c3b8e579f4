//! Page modules for the three screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the only route; it owns navigation side effects (fragment,
//! scroll) and swaps between the landing, form and payment screens.

pub mod enrollment_form;
pub mod home;
pub mod landing;
pub mod payment;

//! UI state for the enrollment flow.
//!
//! ARCHITECTURE
//! ============
//! `enrollment` is the controller that owns everything; the other modules are
//! the plain data types and pure rules it composes. None of them touch the
//! browser, so the whole flow is testable natively.

pub mod countdown;
pub mod enrollment;
pub mod modal;
pub mod navigation;
pub mod pricing;
pub mod registration;
pub mod validation;

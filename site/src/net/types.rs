//! Wire schema for the registration submission.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::pricing::PricingState;
use crate::state::registration::Registration;

/// JSON body posted to the collection endpoint: the form fields plus the
/// course and pricing snapshot at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub registration: Registration,
    pub course_name: String,
    pub original_fee: u32,
    pub payable_amount: u32,
    pub discount_amount: u32,
    pub coupon_applied: bool,
    pub timestamp: String,
}

impl SubmissionPayload {
    #[must_use]
    pub fn new(
        registration: &Registration,
        course_name: &str,
        pricing: &PricingState,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            registration: registration.clone(),
            course_name: course_name.to_owned(),
            original_fee: pricing.base_fee,
            payable_amount: pricing.payable_amount,
            discount_amount: pricing.discount_amount,
            coupon_applied: pricing.coupon_applied,
            timestamp: timestamp.into(),
        }
    }
}

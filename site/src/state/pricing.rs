//! Course fee, coupon discount and the payable amount.
//!
//! The payable amount is always `base_fee - discount_amount`; the only way
//! the discount changes is a single successful coupon application.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// A fixed promotional code that replaces the fee with `discounted_fee`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coupon {
    pub code: &'static str,
    pub description: &'static str,
    pub discounted_fee: u32,
}

/// Result of pressing "Apply" on the coupon row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CouponOutcome {
    Applied { code: &'static str, payable_amount: u32 },
    AlreadyApplied,
    /// The edition has no coupon to apply.
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingState {
    pub base_fee: u32,
    pub payable_amount: u32,
    pub discount_amount: u32,
    pub coupon_applied: bool,
    pub coupon: Option<Coupon>,
}

impl PricingState {
    #[must_use]
    pub fn new(base_fee: u32, coupon: Option<Coupon>) -> Self {
        Self {
            base_fee,
            payable_amount: base_fee,
            discount_amount: 0,
            coupon_applied: false,
            coupon,
        }
    }

    /// Apply the coupon once. Repeated calls leave the amounts untouched.
    pub fn apply_coupon(&mut self) -> CouponOutcome {
        let Some(coupon) = self.coupon else {
            return CouponOutcome::Unavailable;
        };
        if self.coupon_applied {
            return CouponOutcome::AlreadyApplied;
        }
        let payable = coupon.discounted_fee.min(self.base_fee);
        self.payable_amount = payable;
        self.discount_amount = self.base_fee - payable;
        self.coupon_applied = true;
        CouponOutcome::Applied { code: coupon.code, payable_amount: payable }
    }
}

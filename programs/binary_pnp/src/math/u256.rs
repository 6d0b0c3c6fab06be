//! Minimal 256-bit unsigned integer
//!
//! Only what the pricing math needs: a full `u128 x u128` product, ordering,
//! and floor division back down to `u128`. Share balances are 18-decimal
//! `u128` values, so `reserve * amount` routinely exceeds 128 bits.

const LOW_MASK: u128 = u64::MAX as u128;

/// 256-bit unsigned integer stored as two 128-bit halves
///
/// Field order matters: the derived `Ord` compares `hi` first, which is the
/// numeric order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256 {
    pub hi: u128,
    pub lo: u128,
}

impl U256 {
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    pub const fn from_u128(value: u128) -> Self {
        Self { hi: 0, lo: value }
    }

    /// Exact product of two `u128` values
    pub fn mul_u128(a: u128, b: u128) -> Self {
        let (a0, a1) = (a & LOW_MASK, a >> 64);
        let (b0, b1) = (b & LOW_MASK, b >> 64);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // Each term is below 2^64, so the sum fits comfortably.
        let mid = (p00 >> 64) + (p01 & LOW_MASK) + (p10 & LOW_MASK);

        let lo = (p00 & LOW_MASK) | ((mid & LOW_MASK) << 64);
        let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);

        Self { hi, lo }
    }

    /// Floor division by a `u128`
    ///
    /// Returns `None` on division by zero or when the quotient needs more
    /// than 128 bits.
    pub fn div_u128(self, divisor: u128) -> Option<u128> {
        if divisor == 0 || self.hi >= divisor {
            return None;
        }
        if self.hi == 0 {
            return Some(self.lo / divisor);
        }

        // Restoring long division over the low half. The running remainder
        // starts as `hi` (< divisor) and stays below the divisor.
        let mut remainder = self.hi;
        let mut quotient = 0u128;
        for bit in (0..128).rev() {
            let carry = remainder >> 127;
            remainder = (remainder << 1) | ((self.lo >> bit) & 1);
            if carry == 1 || remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient |= 1u128 << bit;
            }
        }

        Some(quotient)
    }
}

/// `floor(a * b / denominator)` without intermediate overflow
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Option<u128> {
    U256::mul_u128(a, b).div_u128(denominator)
}

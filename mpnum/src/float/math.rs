//! Transcendental functions. Each result is rounded to the receiver's
//! context; two-argument functions use the wider precision and the
//! receiver's rule.

use rug::ops::Pow;

use super::FloatBig;
use crate::error::{trap, NumericError};

macro_rules! unary_fns {
    ($($(#[$doc:meta])* $name:ident => $engine:ident),* $(,)?) => {
        impl FloatBig {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Self {
                    let ctx = self.context();
                    Self::in_context(&ctx, ctx.round(self.value.$engine()))
                }
            )*
        }
    };
}

unary_fns! {
    sin => sin_ref,
    cos => cos_ref,
    tan => tan_ref,
    asin => asin_ref,
    acos => acos_ref,
    atan => atan_ref,
    sinh => sinh_ref,
    cosh => cosh_ref,
    tanh => tanh_ref,
    asinh => asinh_ref,
    acosh => acosh_ref,
    atanh => atanh_ref,
    exp => exp_ref,
    exp2 => exp2_ref,
    exp10 => exp10_ref,
    /// `e^self - 1`, accurate near zero.
    exp_m1 => exp_m1_ref,
    /// Natural logarithm.
    ln => ln_ref,
    log2 => log2_ref,
    log10 => log10_ref,
    /// `ln(1 + self)`, accurate near zero.
    ln_1p => ln_1p_ref,
    erf => erf_ref,
    erfc => erfc_ref,
    gamma => gamma_ref,
    /// `ln(gamma(self))`; NaN where gamma is negative.
    ln_gamma => ln_gamma_ref,
    sqrt => sqrt_ref,
    cbrt => cbrt_ref,
}

impl FloatBig {
    /// Four-quadrant arctangent of `self / x`.
    pub fn atan2(&self, x: &Self) -> Self {
        let ctx = self.binary_context(x);
        Self::in_context(&ctx, ctx.round(self.value.atan2_ref(&x.value)))
    }

    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    pub fn hypot(&self, other: &Self) -> Self {
        let ctx = self.binary_context(other);
        Self::in_context(&ctx, ctx.round(self.value.hypot_ref(&other.value)))
    }

    /// `self^exp` for a real exponent.
    pub fn pow(&self, exp: &Self) -> Self {
        let ctx = self.binary_context(exp);
        Self::in_context(&ctx, ctx.round((&self.value).pow(&exp.value)))
    }

    /// `self^exp` for an integer exponent.
    pub fn powi(&self, exp: i32) -> Self {
        let ctx = self.context();
        Self::in_context(&ctx, ctx.round((&self.value).pow(exp)))
    }

    /// The `index`-th root. Even roots of negative values are NaN.
    ///
    /// Fails with `InvalidRootIndex` unless `1 <= index <= u32::MAX`.
    pub fn try_root(&self, index: i64) -> Result<Self, NumericError> {
        let k = u32::try_from(index)
            .ok()
            .filter(|&k| k > 0)
            .ok_or(NumericError::InvalidRootIndex(index))?;
        let ctx = self.context();
        Ok(Self::in_context(&ctx, ctx.round(self.value.root_ref(k))))
    }

    /// Panicking form of [`try_root`](Self::try_root).
    pub fn root(&self, index: i64) -> Self {
        self.try_root(index).unwrap_or_else(|err| trap(err))
    }
}

impl num_traits::Pow<i32> for FloatBig {
    type Output = FloatBig;

    fn pow(self, exp: i32) -> FloatBig {
        self.powi(exp)
    }
}

impl num_traits::Pow<&FloatBig> for &FloatBig {
    type Output = FloatBig;

    fn pow(self, exp: &FloatBig) -> FloatBig {
        FloatBig::pow(self, exp)
    }
}

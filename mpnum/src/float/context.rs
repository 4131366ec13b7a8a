//! Rounding rules, precision configuration and the process-wide defaults.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering as AtomicOrdering};

use rug::float::Round;
use rug::ops::AssignRound;
use rug::Float;
use serde::{Deserialize, Serialize};

use crate::error::NumericError;

/// Significand precision of an IEEE double, the initial default.
pub const DOUBLE_PRECISION: u32 = 53;

static DEFAULT_PRECISION: AtomicU32 = AtomicU32::new(DOUBLE_PRECISION);
static DEFAULT_ROUNDING: AtomicU8 = AtomicU8::new(RoundingRule::NearestEven as u8);

/// How a result that falls between two representable values is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoundingRule {
    /// Nearest, ties to even significand.
    #[default]
    NearestEven = 0,
    TowardZero = 1,
    /// Toward positive infinity.
    Up = 2,
    /// Toward negative infinity.
    Down = 3,
    AwayFromZero = 4,
    /// Nearest, ties away from zero.
    NearestTiesAway = 5,
    /// Either neighbour; computed as nearest-even.
    Faithful = 6,
}

impl RoundingRule {
    const ALL: [RoundingRule; 7] = [
        RoundingRule::NearestEven,
        RoundingRule::TowardZero,
        RoundingRule::Up,
        RoundingRule::Down,
        RoundingRule::AwayFromZero,
        RoundingRule::NearestTiesAway,
        RoundingRule::Faithful,
    ];

    fn from_u8(raw: u8) -> Self {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .unwrap_or_default()
    }

    /// The engine mode that implements this rule directly.
    ///
    /// `NearestTiesAway` has no engine mode; [`round_into`] and [`reround`]
    /// emulate it with a two-step rounding.
    pub(crate) fn engine(self) -> Round {
        match self {
            RoundingRule::NearestEven | RoundingRule::Faithful => Round::Nearest,
            RoundingRule::TowardZero => Round::Zero,
            RoundingRule::Up => Round::Up,
            RoundingRule::Down => Round::Down,
            RoundingRule::AwayFromZero => Round::AwayZero,
            RoundingRule::NearestTiesAway => Round::Nearest,
        }
    }
}

// ============================================================================
// Precision limits and process defaults
// ============================================================================

/// Smallest precision the engine accepts.
pub fn min_precision() -> u32 {
    rug::float::prec_min()
}

/// Largest precision a [`FloatContext`] accepts.
///
/// One bit below the engine limit, so ties-away rounding can work one bit
/// wider than the target.
pub fn max_precision() -> u32 {
    rug::float::prec_max() - 1
}

pub(crate) fn check_precision(precision: u32) -> Result<u32, NumericError> {
    let (min, max) = (min_precision(), max_precision());
    if (min..=max).contains(&precision) {
        Ok(precision)
    } else {
        Err(NumericError::InvalidPrecision {
            precision,
            min,
            max,
        })
    }
}

pub fn default_precision() -> u32 {
    DEFAULT_PRECISION.load(AtomicOrdering::Relaxed)
}

/// Change the precision used by zero-argument construction.
pub fn set_default_precision(precision: u32) -> Result<(), NumericError> {
    let precision = check_precision(precision)?;
    let previous = DEFAULT_PRECISION.swap(precision, AtomicOrdering::Relaxed);
    tracing::debug!(previous, precision, "default float precision changed");
    Ok(())
}

pub fn default_rounding() -> RoundingRule {
    RoundingRule::from_u8(DEFAULT_ROUNDING.load(AtomicOrdering::Relaxed))
}

/// Change the rounding rule used by zero-argument construction.
pub fn set_default_rounding(rounding: RoundingRule) {
    let previous =
        RoundingRule::from_u8(DEFAULT_ROUNDING.swap(rounding as u8, AtomicOrdering::Relaxed));
    tracing::debug!(?previous, ?rounding, "default float rounding changed");
}

// ============================================================================
// FloatContext
// ============================================================================

/// Precision and rounding rule for a float result.
///
/// ```
/// use mpnum::{FloatContext, RoundingRule};
///
/// let ctx = FloatContext::new(128, RoundingRule::TowardZero).unwrap();
/// assert_eq!(ctx.precision(), 128);
/// assert!(FloatContext::new(0, RoundingRule::NearestEven).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFloatContext")]
pub struct FloatContext {
    precision: u32,
    rounding: RoundingRule,
}

#[derive(Deserialize)]
struct RawFloatContext {
    precision: u32,
    #[serde(default)]
    rounding: RoundingRule,
}

impl TryFrom<RawFloatContext> for FloatContext {
    type Error = NumericError;

    fn try_from(raw: RawFloatContext) -> Result<Self, NumericError> {
        FloatContext::new(raw.precision, raw.rounding)
    }
}

impl Default for FloatContext {
    /// The current process-wide defaults.
    fn default() -> Self {
        Self {
            precision: default_precision(),
            rounding: default_rounding(),
        }
    }
}

impl FloatContext {
    pub fn new(precision: u32, rounding: RoundingRule) -> Result<Self, NumericError> {
        Ok(Self {
            precision: check_precision(precision)?,
            rounding,
        })
    }

    /// Precision matching `f64`, nearest-even rounding.
    pub fn double() -> Self {
        Self {
            precision: DOUBLE_PRECISION,
            rounding: RoundingRule::NearestEven,
        }
    }

    pub(crate) fn from_parts_unchecked(precision: u32, rounding: RoundingRule) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingRule {
        self.rounding
    }

    pub fn with_precision(self, precision: u32) -> Result<Self, NumericError> {
        Self::new(precision, self.rounding)
    }

    pub fn with_rounding(self, rounding: RoundingRule) -> Self {
        Self { rounding, ..self }
    }

    /// Make this context the process-wide default.
    pub fn install(self) {
        DEFAULT_PRECISION.store(self.precision, AtomicOrdering::Relaxed);
        DEFAULT_ROUNDING.store(self.rounding as u8, AtomicOrdering::Relaxed);
        tracing::debug!(
            precision = self.precision,
            rounding = ?self.rounding,
            "float context installed as default"
        );
    }

    /// Round `src` to this context, returning the direction of the error.
    pub(crate) fn round_ordered<T>(&self, src: T) -> (Float, Ordering)
    where
        Float: AssignRound<T, Round = Round, Ordering = Ordering>,
    {
        round_into(self.precision, self.rounding, src)
    }

    pub(crate) fn round<T>(&self, src: T) -> Float
    where
        Float: AssignRound<T, Round = Round, Ordering = Ordering>,
    {
        self.round_ordered(src).0
    }
}

// ============================================================================
// Rounding primitives
// ============================================================================

/// Evaluate `src` at `precision` bits under `rule`.
pub(crate) fn round_into<T>(precision: u32, rule: RoundingRule, src: T) -> (Float, Ordering)
where
    Float: AssignRound<T, Round = Round, Ordering = Ordering>,
{
    match rule {
        RoundingRule::NearestTiesAway => {
            // Truncate one bit wide, then the dropped bit decides the direction.
            let (mut value, first) = Float::with_val_round(precision + 1, src, Round::Zero);
            let second = value.set_prec_round(precision, Round::AwayZero);
            (value, combine(first, second))
        }
        rule => Float::with_val_round(precision, src, rule.engine()),
    }
}

/// Change the precision of `value` in place, rounding under `rule`.
pub(crate) fn reround(value: &mut Float, precision: u32, rule: RoundingRule) -> Ordering {
    match rule {
        RoundingRule::NearestTiesAway if precision < value.prec() => {
            let first = value.set_prec_round(precision + 1, Round::Zero);
            let second = value.set_prec_round(precision, Round::AwayZero);
            combine(first, second)
        }
        rule => value.set_prec_round(precision, rule.engine()),
    }
}

/// Direction of the total error after two roundings of the same value.
fn combine(first: Ordering, second: Ordering) -> Ordering {
    if second == Ordering::Equal {
        first
    } else {
        second
    }
}

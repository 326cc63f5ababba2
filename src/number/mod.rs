//! # Triangular fuzzy numbers
//!
//! A triangular fuzzy number models an uncertain quantity by three bounds: the smallest value it
//! may take, the most plausible value and the largest value it may take. Arithmetic combines the
//! bounds of its operands, while comparison ranks numbers through a centroid transform of the
//! triangle the bounds span.
use core::fmt;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{FromPrimitive, One, Zero};


/// Scalar type of the bounds of a triangular fuzzy number.
pub type Real = f64;

/// The crisp number representing zero, the neutral element of addition.
pub const CRISP_ZERO: TriFuzzyNum = TriFuzzyNum::crisp(0.0);

/// A triangular fuzzy number.
///
/// The three bounds are kept sorted: `l` is the lower bound, `m` the modal value and `u` the
/// upper bound. Equality is exact componentwise equality of the bounds; the order relation
/// instead compares derived rank triples, so values with equal ranks are interchangeable in the
/// order even when they are not equal.
///
/// Bounds are assumed finite. Operations on values holding a `NAN` or an infinity are outside of
/// the contract of this type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriFuzzyNum {
    l: Real,
    m: Real,
    u: Real,
}

impl TriFuzzyNum {
    /// Create a new triangular fuzzy number.
    ///
    /// This is the entry point establishing the bound order; the arithmetic operators maintain
    /// it on their results.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c`: Bounds in arbitrary order. They are sorted into the lower, modal and
    /// upper slot.
    pub fn new(a: Real, b: Real, c: Real) -> Self {
        let mut bounds = [a, b, c];
        bounds.sort_unstable_by(Real::total_cmp);

        let [l, m, u] = bounds;
        Self { l, m, u }
    }

    /// Create a crisp number: the single value `value` with no uncertainty around it.
    pub const fn crisp(value: Real) -> Self {
        Self { l: value, m: value, u: value }
    }

    /// Lower bound.
    pub const fn lower(&self) -> Real {
        self.l
    }

    /// Modal value.
    pub const fn modal(&self) -> Real {
        self.m
    }

    /// Upper bound.
    pub const fn upper(&self) -> Real {
        self.u
    }

    /// Rank triple inducing the order on triangular fuzzy numbers.
    ///
    /// The first two keys locate the centroid of the triangle spanned by the bounds; the modal
    /// value is the final tie breaker.
    ///
    /// # Return value
    ///
    /// The three comparison keys, most significant first.
    fn ranks(&self) -> (Real, Real, Real) {
        let spread = self.u - self.l;
        let upper_edge = (1.0 + (self.u - self.m) * (self.u - self.m)).sqrt();
        let lower_edge = (1.0 + (self.m - self.l) * (self.m - self.l)).sqrt();

        // Both edge lengths are at least one, so `z` is never zero.
        let z = spread + upper_edge + lower_edge;
        let y = spread / z;
        let x = (spread * self.m + upper_edge * self.l + lower_edge * self.u) / z;

        (x - y / 2.0, 1.0 - y, self.m)
    }

    /// Whether the bounds are in sorted order.
    fn is_normalized(&self) -> bool {
        self.l <= self.m && self.m <= self.u
    }
}

/// Lifting primitive values to crisp numbers.
impl FromPrimitive for TriFuzzyNum {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::crisp(n as Real))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::crisp(n as Real))
    }

    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() {
            Some(Self::crisp(n))
        } else {
            None
        }
    }
}

/// Componentwise addition.
///
/// Sums of sorted triples taken position by position are sorted again by monotonicity of
/// addition, so the result needs no renormalization.
impl Add for TriFuzzyNum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let result = Self {
            l: self.l + rhs.l,
            m: self.m + rhs.m,
            u: self.u + rhs.u,
        };
        debug_assert!(result.is_normalized());

        result
    }
}

/// Fuzzy subtraction.
///
/// The lower bound of a difference subtracts the largest value the right operand may take from
/// the smallest value of the left operand, and conversely for the upper bound, so the extremes
/// of `rhs` swap roles. The swap also keeps the resulting bounds sorted. Note that `a - a` is
/// not crisp zero when `a` has any spread.
impl Sub for TriFuzzyNum {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let result = Self {
            l: self.l - rhs.u,
            m: self.m - rhs.m,
            u: self.u - rhs.l,
        };
        debug_assert!(result.is_normalized());

        result
    }
}

/// Componentwise multiplication.
///
/// Products of sorted triples are not necessarily sorted (signs can reverse the order), so the
/// result is renormalized through the constructor.
impl Mul for TriFuzzyNum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.l * rhs.l, self.m * rhs.m, self.u * rhs.u)
    }
}

impl Neg for TriFuzzyNum {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { l: -self.u, m: -self.m, u: -self.l }
    }
}

macro_rules! impl_trait_for_TriFuzzyNum_assign {
    ($trait:ident, $trait_method:ident, $base_trait:ident, $base_trait_method:ident) => {
        impl $trait for TriFuzzyNum {
            fn $trait_method(&mut self, rhs: Self) {
                *self = $base_trait::$base_trait_method(*self, rhs);
            }
        }
    }
}
impl_trait_for_TriFuzzyNum_assign!(AddAssign, add_assign, Add, add);
impl_trait_for_TriFuzzyNum_assign!(SubAssign, sub_assign, Sub, sub);
impl_trait_for_TriFuzzyNum_assign!(MulAssign, mul_assign, Mul, mul);

macro_rules! impl_trait_for_TriFuzzyNum_fold {
    ($trait:ident, $trait_method:ident, $initial_value:expr, $base_trait:ident, $base_trait_method:ident) => {
        impl $trait for TriFuzzyNum {
            fn $trait_method<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($initial_value, $base_trait::$base_trait_method)
            }
        }
    }
}
impl_trait_for_TriFuzzyNum_fold!(Sum, sum, Self::zero(), Add, add);
impl_trait_for_TriFuzzyNum_fold!(Product, product, Self::one(), Mul, mul);

impl Zero for TriFuzzyNum {
    fn zero() -> Self {
        CRISP_ZERO
    }
    fn is_zero(&self) -> bool {
        *self == CRISP_ZERO
    }
}
impl One for TriFuzzyNum {
    fn one() -> Self {
        Self::crisp(1.0)
    }
}

// Bounds are finite by contract, which makes the derived `PartialEq` reflexive.
impl Eq for TriFuzzyNum {}

impl Ord for TriFuzzyNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}
/// The order follows the rank triples, compared lexicographically.
///
/// Equal bounds imply equal ranks, so the order is consistent with `==`; the converse need not
/// hold.
impl PartialOrd for TriFuzzyNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.ranks().partial_cmp(&other.ranks())
    }
}

impl Display for TriFuzzyNum {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.l, self.m, self.u)
    }
}

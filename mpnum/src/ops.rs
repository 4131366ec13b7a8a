//! Operator-forwarding macros.
//!
//! Each numeric type implements an operation once, by reference, and these
//! macros expand it to every owned/borrowed operand combination plus the
//! compound-assignment forms.

/// `impl Op` for all four `T`/`&T` operand combinations and `OpAssign` for
/// `T` and `&T` right-hand sides.
///
/// `$bin` is `fn(&T, &T) -> T`; `$assign` is `fn(&mut T, &T)`.
macro_rules! forward_binop {
    ($t:ty, $imp:ident::$method:ident => $bin:path, $assign_imp:ident::$assign_method:ident => $assign:path) => {
        impl std::ops::$imp<&$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                $bin(self, rhs)
            }
        }

        impl std::ops::$imp<$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $bin(self, &rhs)
            }
        }

        impl std::ops::$imp<&$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                $bin(&self, rhs)
            }
        }

        impl std::ops::$imp<$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $bin(&self, &rhs)
            }
        }

        impl std::ops::$assign_imp<&$t> for $t {
            #[inline]
            fn $assign_method(&mut self, rhs: &$t) {
                $assign(self, rhs)
            }
        }

        impl std::ops::$assign_imp<$t> for $t {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                $assign(self, &rhs)
            }
        }
    };
}

/// Shift operators by a `u32` bit count, for `T` and `&T`, plus the
/// assigning form.
macro_rules! forward_shift {
    ($t:ty, $imp:ident::$method:ident => $shift:path, $assign_imp:ident::$assign_method:ident => $assign:path) => {
        impl std::ops::$imp<u32> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, bits: u32) -> $t {
                $shift(self, bits)
            }
        }

        impl std::ops::$imp<u32> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, bits: u32) -> $t {
                $shift(&self, bits)
            }
        }

        impl std::ops::$assign_imp<u32> for $t {
            #[inline]
            fn $assign_method(&mut self, bits: u32) {
                $assign(self, bits)
            }
        }
    };
}

/// Unary operator for `T` and `&T`; `$f` is `fn(&T) -> T`.
macro_rules! forward_unop {
    ($t:ty, $imp:ident::$method:ident => $f:path) => {
        impl std::ops::$imp for &$t {
            type Output = $t;
            #[inline]
            fn $method(self) -> $t {
                $f(self)
            }
        }

        impl std::ops::$imp for $t {
            type Output = $t;
            #[inline]
            fn $method(self) -> $t {
                $f(&self)
            }
        }
    };
}

/// Equality and ordering against native numbers in both operand orders,
/// delegated to the engine value reached through `$field`.
macro_rules! native_cmp {
    ($t:ty, $field:ident: $($n:ty),*) => {$(
        impl PartialEq<$n> for $t {
            #[inline]
            fn eq(&self, other: &$n) -> bool {
                self.$field == *other
            }
        }

        impl PartialEq<$t> for $n {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == other.$field
            }
        }

        impl PartialOrd<$n> for $t {
            #[inline]
            fn partial_cmp(&self, other: &$n) -> Option<std::cmp::Ordering> {
                self.$field.partial_cmp(other)
            }
        }

        impl PartialOrd<$t> for $n {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.$field)
            }
        }
    )*};
}

/// `From<native>` through the engine's own conversion.
macro_rules! from_native {
    ($t:ty, $engine:ty: $($n:ty),*) => {$(
        impl From<$n> for $t {
            #[inline]
            fn from(v: $n) -> Self {
                Self::from_engine(<$engine>::from(v))
            }
        }
    )*};
}

pub(crate) use {forward_binop, forward_shift, forward_unop, from_native, native_cmp};

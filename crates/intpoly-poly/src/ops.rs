//! Operator and `num_traits` impls for [`Polynomial`].
//!
//! Operators delegate to the inherent methods and share their overflow
//! behavior: they panic where the inherent method would.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::sparse::Polynomial;

macro_rules! forward_binop {
    ($tr:ident, $method:ident, $inherent:ident) => {
        impl $tr<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$inherent(self, rhs)
            }
        }

        impl $tr<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$inherent(&self, &rhs)
            }
        }

        impl $tr<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$inherent(&self, rhs)
            }
        }

        impl $tr<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$inherent(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, multiply);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1)
    }
}

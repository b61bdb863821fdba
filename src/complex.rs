use crate::Problem;
use num::complex::Complex64;

mod format;
pub use format::{Form, Rendering};

/// A complex number, held in both algebraic and polar form
///
/// The argument of the polar form is in degrees. Values made from the
/// algebraic form have an argument in the range (-90, 270].
///
/// # Examples
///
/// ```
/// use argand::Complex;
/// let z = Complex::from_algebraic(-1.0, 0.0);
/// assert_eq!(z.modulus(), 1.0);
/// assert_eq!(z.argument(), 180.0);
/// ```
///
/// Multiplication and division use the polar form
/// ```
/// use argand::Complex;
/// let a = Complex::from_polar(2.0, 30.0);
/// let b = Complex::from_polar(4.0, 60.0);
/// let product = a * b;
/// assert_eq!(product.modulus(), 8.0);
/// assert_eq!(product.argument(), 90.0);
/// let quotient = (b / a).unwrap();
/// assert_eq!(quotient.argument(), 30.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Complex {
    algebraic: Complex64,
    modulus: f64,
    argument: f64,
}

impl Complex {
    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self {
            algebraic: Complex64::new(0.0, 0.0),
            modulus: 0.0,
            argument: 0.0,
        }
    }

    /// z = a + bi
    pub fn from_algebraic(real: f64, imaginary: f64) -> Self {
        let algebraic = Complex64::new(real, imaginary);
        let modulus = algebraic.norm();
        if modulus == 0.0 {
            return Self {
                algebraic,
                modulus: 0.0,
                argument: 0.0,
            };
        }

        let mut argument = (imaginary / modulus).asin().to_degrees();
        // asin only covers the right half plane
        if real < 0.0 {
            argument = 180.0 - argument;
        }
        Self {
            algebraic,
            modulus,
            argument,
        }
    }

    /// z = r(cos φ + i sin φ), with φ in degrees
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self {
            algebraic: Complex64::from_polar(modulus, argument.to_radians()),
            modulus,
            argument,
        }
    }

    pub fn real(&self) -> f64 {
        self.algebraic.re
    }

    pub fn imaginary(&self) -> f64 {
        self.algebraic.im
    }

    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    /// The argument in degrees
    pub fn argument(&self) -> f64 {
        self.argument
    }

    /// The complex conjugate a - bi
    pub fn conjugate(&self) -> Self {
        Self::from_algebraic(self.real(), -self.imaginary())
    }

    /// |z|², the product of this number and its conjugate
    pub fn norm_sqr(&self) -> f64 {
        self.algebraic.norm_sqr()
    }

    /// This number raised to a real power
    pub fn pow(&self, exponent: f64) -> Self {
        Self::from_polar(self.modulus.powf(exponent), self.argument * exponent)
    }

    /// Are all four components finite?
    pub fn is_finite(&self) -> bool {
        self.algebraic.is_finite() && self.modulus.is_finite() && self.argument.is_finite()
    }
}

// Equal if either representation matches exactly
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.algebraic == other.algebraic
            || (self.modulus == other.modulus && self.argument == other.argument)
    }
}

use std::ops::*;

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum = self.algebraic + other.algebraic;
        Self::from_algebraic(sum.re, sum.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let difference = self.algebraic - other.algebraic;
        Self::from_algebraic(difference.re, difference.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::from_polar(self.modulus * other.modulus, self.argument + other.argument)
    }
}

impl Div for Complex {
    type Output = Result<Self, Problem>;

    fn div(self, other: Self) -> Result<Self, Problem> {
        if other.modulus == 0.0 {
            return Err(Problem::DivideByZero);
        }
        Ok(Self::from_polar(
            self.modulus / other.modulus,
            self.argument - other.argument,
        ))
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_algebraic(-self.real(), -self.imaginary())
    }
}

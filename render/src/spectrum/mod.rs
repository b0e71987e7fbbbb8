//! Spectra
//!
//! Spectral quantities are carried as a small, fixed number of wavelength
//! samples per batch lane. Two views of the same coefficient layout exist:
//! [`Wavelength`] holds per-sample wavelengths (or per-sample densities) and
//! [`UnpolarizedSpectrum`] holds per-sample values of a physical quantity,
//! ignoring polarization.

use crate::math::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

mod sampling;

// Re-export
pub use sampling::*;

/// Number of wavelength samples carried per lane.
pub const SPECTRUM_SAMPLES: usize = 4;

/// Lower end of the wavelength domain in nm.
pub const LAMBDA_MIN: Float = 360.0;

/// Upper end of the wavelength domain in nm.
pub const LAMBDA_MAX: Float = 830.0;

/// Extent of the wavelength domain in nm.
pub const LAMBDA_RANGE: Float = LAMBDA_MAX - LAMBDA_MIN;

/// Interface for fixed-size per-wavelength-sample coefficient vectors.
pub trait SpectralCoefficients: Sized {
    /// Returns the stored coefficients.
    fn coefficients(&self) -> &[Float; SPECTRUM_SAMPLES];

    /// Returns the stored coefficients as mutable.
    fn coefficients_mut(&mut self) -> &mut [Float; SPECTRUM_SAMPLES];

    /// Returns true if any coefficient is NaN.
    fn has_nans(&self) -> bool {
        self.coefficients().iter().any(|c| c.is_nan())
    }

    /// Returns true if all coefficients are 0.
    fn is_black(&self) -> bool {
        self.coefficients().iter().all(|c| *c == 0.0)
    }

    /// Returns the largest coefficient.
    fn max_coefficient(&self) -> Float {
        self.coefficients().iter().fold(-INFINITY, |a, &c| max(a, c))
    }

    /// Returns the average of the coefficients.
    fn average(&self) -> Float {
        let sum: Float = self.coefficients().iter().sum();
        sum / SPECTRUM_SAMPLES as Float
    }
}

/// Define a macro that generates a coefficient vector type along with its
/// constructors and component-wise arithmetic.
macro_rules! coefficient_vector {
    ($t: ident, $doc: expr) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $t {
            /// The per-wavelength-sample coefficients.
            c: [Float; SPECTRUM_SAMPLES],
        }

        impl $t {
            /// Create a new value with a constant coefficient across all
            /// wavelength samples.
            ///
            /// * `v` - Constant value.
            pub fn new(v: Float) -> Self {
                Self {
                    c: [v; SPECTRUM_SAMPLES],
                }
            }

            /// Value with all coefficients set to 0.
            pub const ZERO: Self = Self {
                c: [0.0; SPECTRUM_SAMPLES],
            };

            /// Value with all coefficients set to 1.
            pub const ONE: Self = Self {
                c: [1.0; SPECTRUM_SAMPLES],
            };
        }

        impl SpectralCoefficients for $t {
            /// Returns the stored coefficients.
            fn coefficients(&self) -> &[Float; SPECTRUM_SAMPLES] {
                &self.c
            }

            /// Returns the stored coefficients as mutable.
            fn coefficients_mut(&mut self) -> &mut [Float; SPECTRUM_SAMPLES] {
                &mut self.c
            }
        }

        impl Default for $t {
            /// Return a zero-valued default.
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl From<Float> for $t {
            /// Create a new value with a constant coefficient across all
            /// wavelength samples.
            ///
            /// * `v` - Constant value.
            fn from(v: Float) -> Self {
                Self::new(v)
            }
        }

        impl From<[Float; SPECTRUM_SAMPLES]> for $t {
            /// Create a new value from individual coefficients.
            ///
            /// * `c` - The coefficients.
            fn from(c: [Float; SPECTRUM_SAMPLES]) -> Self {
                Self { c }
            }
        }

        impl Index<usize> for $t {
            type Output = Float;

            /// Index the coefficient at the given wavelength sample.
            ///
            /// * `i` - The wavelength sample index.
            fn index(&self, i: usize) -> &Self::Output {
                &self.c[i]
            }
        }

        impl IndexMut<usize> for $t {
            /// Index the coefficient at the given wavelength sample.
            ///
            /// * `i` - The wavelength sample index.
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                &mut self.c[i]
            }
        }

        impl Add for $t {
            type Output = Self;

            /// Adds the coefficients component-wise.
            ///
            /// * `other` - The value to add.
            fn add(self, other: Self) -> Self::Output {
                let mut c = self.c;
                for (i, v) in c.iter_mut().enumerate() {
                    *v += other.c[i];
                }
                Self::Output { c }
            }
        }

        impl AddAssign for $t {
            /// Adds the coefficients component-wise.
            ///
            /// * `other` - The value to add.
            fn add_assign(&mut self, other: Self) {
                for (i, v) in self.c.iter_mut().enumerate() {
                    *v += other.c[i];
                }
            }
        }

        impl Sub for $t {
            type Output = Self;

            /// Subtracts the coefficients component-wise.
            ///
            /// * `other` - The value to subtract.
            fn sub(self, other: Self) -> Self::Output {
                let mut c = self.c;
                for (i, v) in c.iter_mut().enumerate() {
                    *v -= other.c[i];
                }
                Self::Output { c }
            }
        }

        impl SubAssign for $t {
            /// Subtracts the coefficients component-wise.
            ///
            /// * `other` - The value to subtract.
            fn sub_assign(&mut self, other: Self) {
                for (i, v) in self.c.iter_mut().enumerate() {
                    *v -= other.c[i];
                }
            }
        }

        impl Mul for $t {
            type Output = Self;

            /// Multiplies the coefficients component-wise.
            ///
            /// * `other` - The value to multiply by.
            fn mul(self, other: Self) -> Self::Output {
                let mut c = self.c;
                for (i, v) in c.iter_mut().enumerate() {
                    *v *= other.c[i];
                }
                Self::Output { c }
            }
        }

        impl MulAssign<Float> for $t {
            /// Scales the coefficients uniformly.
            ///
            /// * `f` - The scaling factor.
            fn mul_assign(&mut self, f: Float) {
                for v in self.c.iter_mut() {
                    *v *= f;
                }
            }
        }

        impl Mul<Float> for $t {
            type Output = Self;

            /// Scales the coefficients uniformly.
            ///
            /// * `f` - The scaling factor.
            fn mul(self, f: Float) -> Self::Output {
                let mut c = self.c;
                for v in c.iter_mut() {
                    *v *= f;
                }
                Self::Output { c }
            }
        }

        impl Div<Float> for $t {
            type Output = Self;

            /// Scales the coefficients uniformly by 1/f.
            ///
            /// * `f` - The scaling factor.
            fn div(self, f: Float) -> Self::Output {
                debug_assert!(f != 0.0);
                let mut c = self.c;
                for v in c.iter_mut() {
                    *v /= f;
                }
                Self::Output { c }
            }
        }

        impl DivAssign<Float> for $t {
            /// Scales the coefficients uniformly by 1/f.
            ///
            /// * `f` - The scaling factor.
            fn div_assign(&mut self, f: Float) {
                debug_assert!(f != 0.0);
                for v in self.c.iter_mut() {
                    *v /= f;
                }
            }
        }

        impl fmt::Display for $t {
            /// Formats the coefficients as a bracketed list.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, v) in self.c.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    };
}

coefficient_vector!(
    UnpolarizedSpectrum,
    "A spectral value across the sampled wavelengths of a lane, ignoring polarization state."
);
coefficient_vector!(
    Wavelength,
    "Per-sample wavelengths in nm, or a per-sample scalar such as a sampling density."
);

impl Div<Wavelength> for UnpolarizedSpectrum {
    type Output = Self;

    /// Divides each coefficient by the matching per-sample value, typically
    /// a sampling density.
    ///
    /// * `w` - The per-sample divisors.
    fn div(self, w: Wavelength) -> Self::Output {
        let mut c = self.c;
        for (i, v) in c.iter_mut().enumerate() {
            debug_assert!(w[i] != 0.0);
            *v /= w[i];
        }
        Self::Output { c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn constant_spectrum_averages_to_its_value() {
        let s = UnpolarizedSpectrum::new(0.5);
        assert!(approx_eq!(Float, s.average(), 0.5, ulps = 2));
        assert!(!s.is_black());
        assert!(UnpolarizedSpectrum::ZERO.is_black());
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = UnpolarizedSpectrum::from([1.0, 2.0, 3.0, 4.0]);
        let b = UnpolarizedSpectrum::new(2.0);
        assert_eq!(a + b, UnpolarizedSpectrum::from([3.0, 4.0, 5.0, 6.0]));
        assert_eq!(a * b, UnpolarizedSpectrum::from([2.0, 4.0, 6.0, 8.0]));
        assert_eq!(a * 0.5, UnpolarizedSpectrum::from([0.5, 1.0, 1.5, 2.0]));
    }

    #[test]
    fn division_by_per_sample_density_rescales_each_coefficient() {
        let s = UnpolarizedSpectrum::new(1.0);
        let pdf = Wavelength::from([0.5, 1.0, 2.0, 4.0]);
        assert_eq!(
            s / pdf,
            UnpolarizedSpectrum::from([2.0, 1.0, 0.5, 0.25])
        );
    }
}

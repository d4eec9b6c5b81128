//! Square matrices (row-major) for 3D and homogeneous transforms
//!
//! `Mat3` and `Mat4` share one implementation through `square_matrix!`;
//! only the vector type they multiply differs.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::math::{Vec3, Vec4};

macro_rules! square_matrix {
    ($name:ident, $n:expr, $vec:ident, [$($field:ident),+]) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            /// `m[row][col]`
            pub m: [[f32; $n]; $n],
        }

        impl $name {
            pub const ZERO: $name = $name { m: [[0.0; $n]; $n] };

            pub const fn from_rows(m: [[f32; $n]; $n]) -> Self {
                Self { m }
            }

            pub fn identity() -> Self {
                let mut out = Self::ZERO;
                for i in 0..$n {
                    out.m[i][i] = 1.0;
                }
                out
            }

            pub fn transposed(&self) -> Self {
                let mut out = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.m[col][row] = self.m[row][col];
                    }
                }
                out
            }

            pub fn transpose(&mut self) {
                *self = self.transposed();
            }

            /// Element-wise comparison with an absolute tolerance
            pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| (a - b).abs() <= eps)
            }

            fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut out = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.m[row][col] = f(self.m[row][col], other.m[row][col]);
                    }
                }
                out
            }

            fn map(&self, f: impl Fn(f32) -> f32) -> Self {
                let mut out = *self;
                for v in out.m.iter_mut().flatten() {
                    *v = f(*v);
                }
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl Index<(usize, usize)> for $name {
            type Output = f32;
            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                &self.m[row][col]
            }
        }

        impl IndexMut<(usize, usize)> for $name {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                &mut self.m[row][col]
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, other: $name) -> $name {
                self.zip_with(&other, |a, b| a + b)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, other: $name) -> $name {
                self.zip_with(&other, |a, b| a - b)
            }
        }

        impl Mul for $name {
            type Output = $name;
            fn mul(self, other: $name) -> $name {
                let mut out = $name::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.m[row][col] = (0..$n).map(|k| self.m[row][k] * other.m[k][col]).sum();
                    }
                }
                out
            }
        }

        impl Mul<$vec> for $name {
            type Output = $vec;
            fn mul(self, v: $vec) -> $vec {
                let input = [$(v.$field),+];
                let out: [f32; $n] =
                    std::array::from_fn(|r| (0..$n).map(|k| self.m[r][k] * input[k]).sum());
                let [$($field),+] = out;
                $vec { $($field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;
            fn mul(self, s: f32) -> $name {
                self.map(|v| v * s)
            }
        }

        /// Plain IEEE division: a zero divisor yields infinities or NaN
        impl Div<f32> for $name {
            type Output = $name;
            fn div(self, s: f32) -> $name {
                self.map(|v| v / s)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: $name) {
                *self = *self + other;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: $name) {
                *self = *self - other;
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, other: $name) {
                *self = *self * other;
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, s: f32) {
                *self = *self * s;
            }
        }

        impl DivAssign<f32> for $name {
            fn div_assign(&mut self, s: f32) {
                *self = *self / s;
            }
        }

        /// `[[a, b, c]` one row per line, rows aligned under the outer bracket
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, row) in self.m.iter().enumerate() {
                    if i != 0 {
                        write!(f, "\n ")?;
                    }
                    write!(f, "[")?;
                    for (j, v) in row.iter().enumerate() {
                        if j != 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", v)?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    };
}

square_matrix!(Mat3, 3, Vec3, [x, y, z]);
square_matrix!(Mat4, 4, Vec4, [x, y, z, w]);

impl Mat4 {
    /// Homogeneous translation by `t`
    pub fn translation(t: Vec3) -> Self {
        let mut out = Self::identity();
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }
}

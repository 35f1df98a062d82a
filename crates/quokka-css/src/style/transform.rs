//! Transform operations and the matrix they accumulate into.
//!
//! [CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/)
//!
//! Matrices use the row-vector layout: a point `(x, y, z, 1)` maps to
//! `p · M`, so the translation lives in `m41..m43`. Accessor names follow
//! that layout (`m11` is row 1, column 1).

use serde::Serialize;

use super::length::Length;

/// One function of a `-webkit-transform` list, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TransformOperation {
    /// `translate*()`; x and y may be percentages of the box.
    Translate {
        /// Horizontal offset.
        x: Length,
        /// Vertical offset.
        y: Length,
        /// Depth offset in pixels.
        z: f64,
    },
    /// `scale*()`
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
        /// Depth factor.
        z: f64,
    },
    /// `rotate()` (about the z axis) and `rotate3d()`.
    Rotate {
        /// Axis x component.
        x: f64,
        /// Axis y component.
        y: f64,
        /// Axis z component.
        z: f64,
        /// Angle in degrees.
        angle: f64,
    },
    /// `skew*()`
    Skew {
        /// Angle along the x axis.
        x: f64,
        /// Angle along the y axis.
        y: f64,
    },
    /// `matrix(a, b, c, d, e, f)`
    Matrix([f64; 6]),
    /// `matrix3d(...)`, sixteen values in `m11..m44` order.
    Matrix3d([f64; 16]),
    /// `perspective(d)`
    Perspective(f64),
}

impl TransformOperation {
    /// A 2D rotation.
    #[must_use]
    pub const fn rotate(angle: f64) -> Self {
        Self::Rotate {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            angle,
        }
    }

    /// Apply this operation to `matrix`, resolving percentages against a
    /// box of `width` × `height`.
    pub fn apply(&self, matrix: &mut TransformationMatrix, width: f64, height: f64) {
        let op = match *self {
            Self::Translate { x, y, z } => TransformationMatrix::translation(
                f64::from(x.calc_float_value(1.0)) * if x.is_percent() { width } else { 1.0 },
                f64::from(y.calc_float_value(1.0)) * if y.is_percent() { height } else { 1.0 },
                z,
            ),
            Self::Scale { x, y, z } => TransformationMatrix::scaling(x, y, z),
            Self::Rotate { x, y, z, angle } => TransformationMatrix::rotation(x, y, z, angle),
            Self::Skew { x, y } => TransformationMatrix::skewing(x, y),
            Self::Matrix([a, b, c, d, e, f]) => TransformationMatrix::affine(a, b, c, d, e, f),
            Self::Matrix3d(values) => TransformationMatrix::from_values(values),
            Self::Perspective(depth) => TransformationMatrix::perspective(depth),
        };
        matrix.multiply(&op);
    }
}

/// A 4×4 transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformationMatrix {
    m: [[f64; 4]; 4],
}

impl Default for TransformationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformationMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build from sixteen values in `m11..m44` order.
    #[must_use]
    pub const fn from_values(v: [f64; 16]) -> Self {
        Self {
            m: [
                [v[0], v[1], v[2], v[3]],
                [v[4], v[5], v[6], v[7]],
                [v[8], v[9], v[10], v[11]],
                [v[12], v[13], v[14], v[15]],
            ],
        }
    }

    /// The 2D matrix `matrix(a, b, c, d, e, f)`.
    #[must_use]
    pub const fn affine(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0][0] = a;
        out.m[0][1] = b;
        out.m[1][0] = c;
        out.m[1][1] = d;
        out.m[3][0] = e;
        out.m[3][1] = f;
        out
    }

    /// A translation.
    #[must_use]
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[3][0] = x;
        out.m[3][1] = y;
        out.m[3][2] = z;
        out
    }

    /// A scale.
    #[must_use]
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0][0] = x;
        out.m[1][1] = y;
        out.m[2][2] = z;
        out
    }

    /// A rotation of `angle` degrees about the axis `(x, y, z)`. A zero
    /// axis yields the identity.
    #[must_use]
    pub fn rotation(x: f64, y: f64, z: f64, angle: f64) -> Self {
        let length = (x * x + y * y + z * z).sqrt();
        if length == 0.0 {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / length, y / length, z / length);
        let (s, c) = angle.to_radians().sin_cos();
        let t = 1.0 - c;

        let mut out = Self::IDENTITY;
        out.m[0][0] = t.mul_add(x * x, c);
        out.m[0][1] = t.mul_add(x * y, z * s);
        out.m[0][2] = t.mul_add(x * z, -y * s);
        out.m[1][0] = t.mul_add(x * y, -z * s);
        out.m[1][1] = t.mul_add(y * y, c);
        out.m[1][2] = t.mul_add(y * z, x * s);
        out.m[2][0] = t.mul_add(x * z, y * s);
        out.m[2][1] = t.mul_add(y * z, -x * s);
        out.m[2][2] = t.mul_add(z * z, c);
        out
    }

    /// A skew by `x` and `y` degrees.
    #[must_use]
    pub fn skewing(x: f64, y: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[1][0] = x.to_radians().tan();
        out.m[0][1] = y.to_radians().tan();
        out
    }

    /// `perspective(depth)`; a zero depth yields the identity.
    #[must_use]
    pub fn perspective(depth: f64) -> Self {
        let mut out = Self::IDENTITY;
        if depth != 0.0 {
            out.m[2][3] = -1.0 / depth;
        }
        out
    }

    /// Compose `op` after the transforms already accumulated, so that
    /// operations are applied in list order to the element.
    pub fn multiply(&mut self, op: &Self) {
        let mut out = [[0.0; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| op.m[row][k] * self.m[k][col]).sum();
            }
        }
        self.m = out;
    }

    /// Whether the matrix can be written as `matrix(a, b, c, d, e, f)`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_affine(&self) -> bool {
        let m = &self.m;
        m[0][2] == 0.0
            && m[0][3] == 0.0
            && m[1][2] == 0.0
            && m[1][3] == 0.0
            && m[2][0] == 0.0
            && m[2][1] == 0.0
            && m[2][2] == 1.0
            && m[2][3] == 0.0
            && m[3][2] == 0.0
            && m[3][3] == 1.0
    }

    /// Element at `row`, `col` (both 1-based).
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row - 1][col - 1]
    }

    /// The six 2D components `a, b, c, d, e, f`.
    #[must_use]
    pub const fn to_affine(&self) -> [f64; 6] {
        [
            self.m[0][0],
            self.m[0][1],
            self.m[1][0],
            self.m[1][1],
            self.m[3][0],
            self.m[3][1],
        ]
    }

    /// All sixteen components in `m11..m44` order.
    #[must_use]
    pub fn to_values(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, value) in self.m.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn build(ops: &[TransformOperation]) -> TransformationMatrix {
        let mut matrix = TransformationMatrix::IDENTITY;
        for op in ops {
            op.apply(&mut matrix, 200.0, 100.0);
        }
        matrix
    }

    #[test]
    fn test_translate_resolves_percentages_against_box() {
        let m = build(&[TransformOperation::Translate {
            x: Length::Percent(50.0),
            y: Length::Fixed(7.0),
            z: 0.0,
        }]);
        assert!(m.is_affine());
        assert_eq!(m.to_affine(), [1.0, 0.0, 0.0, 1.0, 100.0, 7.0]);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let [a, b, c, d, e, f] = build(&[TransformOperation::rotate(90.0)]).to_affine();
        assert!(close(a, 0.0) && close(b, 1.0) && close(c, -1.0) && close(d, 0.0));
        assert!(close(e, 0.0) && close(f, 0.0));
    }

    #[test]
    fn test_operations_compose_in_list_order() {
        // translate then scale: the translation is not scaled.
        let m = build(&[
            TransformOperation::Translate {
                x: Length::Fixed(10.0),
                y: Length::Fixed(0.0),
                z: 0.0,
            },
            TransformOperation::Scale {
                x: 2.0,
                y: 2.0,
                z: 1.0,
            },
        ]);
        assert_eq!(m.to_affine(), [2.0, 0.0, 0.0, 2.0, 10.0, 0.0]);

        // scale then translate: the translation is scaled.
        let m = build(&[
            TransformOperation::Scale {
                x: 2.0,
                y: 2.0,
                z: 1.0,
            },
            TransformOperation::Translate {
                x: Length::Fixed(10.0),
                y: Length::Fixed(0.0),
                z: 0.0,
            },
        ]);
        assert_eq!(m.to_affine(), [2.0, 0.0, 0.0, 2.0, 20.0, 0.0]);
    }

    #[test]
    fn test_perspective_is_not_affine() {
        let m = build(&[TransformOperation::Perspective(100.0)]);
        assert!(!m.is_affine());
        assert!(close(m.get(3, 4), -0.01));
    }

    #[test]
    fn test_matrix3d_round_trips_values() {
        let mut values = [0.0; 16];
        for (i, v) in values.iter_mut().enumerate() {
            *v = f64::from(u8::try_from(i).unwrap());
        }
        assert_eq!(TransformationMatrix::from_values(values).to_values(), values);
    }
}

//! 3x3 rotation matrices for tilting map coordinates into scene space.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. When
//! applied to a position vector, it rotates that vector while preserving its
//! length. Here they carry flat-map points into the orientation a tilted
//! scene expects: the map plane is pitched back about X, canted about Y, and
//! turned about Z, and the product of those three axis rotations does all of
//! it in one multiply.
//!
//! # Rotation Convention
//!
//! Rotations are **active**: they rotate the vector, not the coordinate
//! frame. Positive angles rotate counterclockwise when looking from the
//! positive axis toward the origin (right-hand rule), which matches what
//! scene-graph libraries do when you set an object's rotation. A positive
//! 90 degree rotation about Z takes the vector `[1, 0, 0]` to `[0, 1, 0]`.
//!
//! Frame-rotating (passive) conventions, common in astronomy libraries, are
//! the transpose of these matrices.
//!
//! # Composing Rotations
//!
//! Rotation matrices compose by multiplication. To apply rotation A, then
//! rotation B, compute `B * A` (the rightmost matrix acts first on the
//! vector):
//!
//! ```
//! use maptilt_core::RotationMatrix3;
//!
//! let pitch = RotationMatrix3::about_x(-1.148);
//! let turn = RotationMatrix3::about_z(-1.361);
//!
//! // Pitch the plane back first, then turn it
//! let combined = turn * pitch;
//! assert!(combined.is_rotation_matrix(1e-12));
//! ```
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at
//! row `i`, column `j` is accessed as `matrix[(i, j)]` or `matrix.get(i, j)`.
//! When the matrix multiplies a column vector, the result is the standard
//! matrix-vector product:
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! # Inverting Rotations
//!
//! For a proper rotation matrix, the inverse equals the transpose. This is
//! much cheaper than a general matrix inverse and is numerically stable:
//!
//! ```
//! use maptilt_core::RotationMatrix3;
//!
//! let m = RotationMatrix3::about_z(0.5);
//! let product = m * m.transpose();
//! assert!((product.get(0, 0) - 1.0).abs() < 1e-15);
//! ```

use std::fmt;

/// A 3x3 rotation matrix in row-major storage.
///
/// This type represents proper rotation matrices (orthogonal with
/// determinant +1). All angles are in radians.
///
/// # Construction
///
/// ```
/// use maptilt_core::RotationMatrix3;
///
/// // Single-axis rotations
/// let pitch = RotationMatrix3::about_x(-1.148);
/// let cant = RotationMatrix3::about_y(-0.161);
///
/// // Or construct directly from elements
/// let m = RotationMatrix3::from_array([
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    ///
    /// The identity matrix leaves any vector unchanged when applied.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::identity();
    /// let v = [1.0, 2.0, 3.0];
    /// assert_eq!(m.apply_to_vector(v), v);
    /// ```
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a rotation about the X-axis by `angle` radians.
    ///
    /// Positive angles rotate counterclockwise when looking from +X toward
    /// the origin, so +Y swings toward +Z:
    ///
    /// ```text
    /// Rx(angle) = | 1      0           0      |
    ///             | 0  cos(angle) -sin(angle) |
    ///             | 0  sin(angle)  cos(angle) |
    /// ```
    ///
    /// A negative angle pitches the map plane's +Y axis toward the viewer,
    /// which is how a flat map gets tilted back in a scene.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [0, 1, 0] rotates to [0, 0, 1]
    /// let v = RotationMatrix3::about_x(FRAC_PI_2).apply_to_vector([0.0, 1.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!(v[1].abs() < 1e-15);
    /// assert!((v[2] - 1.0).abs() < 1e-15);
    /// ```
    pub fn about_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    /// Creates a rotation about the Y-axis by `angle` radians.
    ///
    /// Positive angles rotate counterclockwise when looking from +Y toward
    /// the origin, so +Z swings toward +X:
    ///
    /// ```text
    /// Ry(angle) = |  cos(angle)  0  sin(angle) |
    ///             |      0       1      0      |
    ///             | -sin(angle)  0  cos(angle) |
    /// ```
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [0, 0, 1] rotates to [1, 0, 0]
    /// let v = RotationMatrix3::about_y(FRAC_PI_2).apply_to_vector([0.0, 0.0, 1.0]);
    /// assert!((v[0] - 1.0).abs() < 1e-15);
    /// assert!(v[1].abs() < 1e-15);
    /// assert!(v[2].abs() < 1e-15);
    /// ```
    pub fn about_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            elements: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        }
    }

    /// Creates a rotation about the Z-axis by `angle` radians.
    ///
    /// Positive angles rotate counterclockwise when looking from +Z toward
    /// the origin, so +X swings toward +Y:
    ///
    /// ```text
    /// Rz(angle) = | cos(angle) -sin(angle)  0 |
    ///             | sin(angle)  cos(angle)  0 |
    ///             |     0           0       1 |
    /// ```
    ///
    /// In map terms this is a turn of the compass heading.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [1, 0, 0] rotates to [0, 1, 0]
    /// let v = RotationMatrix3::about_z(FRAC_PI_2).apply_to_vector([1.0, 0.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!((v[1] - 1.0).abs() < 1e-15);
    /// assert!(v[2].abs() < 1e-15);
    /// ```
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            elements: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a rotation matrix from a 3x3 array of elements.
    ///
    /// The array is interpreted as row-major: `elements[i][j]` is row `i`,
    /// column `j`.
    ///
    /// This does not validate that the matrix is a proper rotation. Use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// // A rotation by 90 degrees about Z
    /// let m = RotationMatrix3::from_array([
    ///     [0.0, -1.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(m.is_rotation_matrix(1e-15));
    /// ```
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    ///
    /// You can also use indexing syntax: `matrix[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// Matrix multiplication is not commutative: `A * B` is generally
    /// different from `B * A`. The result represents the composition of two
    /// rotations where `other` is applied first, then `self`.
    ///
    /// You can also use the `*` operator: `a * b` or `&a * &b`.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// let rx = RotationMatrix3::about_x(0.1);
    /// let rz = RotationMatrix3::about_z(0.2);
    ///
    /// // First rotate about X, then about Z
    /// let combined = rz.multiply(&rx);
    /// assert_eq!(combined, rz * rx);
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this rotation matrix to a 3D vector.
    ///
    /// Computes the standard matrix-vector product `M * v`, rotating the
    /// position vector within its frame.
    ///
    /// You can also use the `*` operator with [`Vector3`](super::Vector3):
    /// `matrix * vector`.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[0][1] * vector[1]
                + self.elements[0][2] * vector[2],
            self.elements[1][0] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[1][2] * vector[2],
            self.elements[2][0] * vector[0]
                + self.elements[2][1] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    /// Computes the determinant of this matrix.
    ///
    /// For a proper rotation matrix, the determinant is always +1. A
    /// determinant of -1 indicates a reflection. Values far from +/-1
    /// indicate the matrix is not orthogonal.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix.
    ///
    /// For a rotation matrix, the transpose equals the inverse, which is how
    /// a scene point gets carried back onto the flat map.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::about_z(0.5) * RotationMatrix3::about_x(0.3);
    /// let m_inv = m.transpose();
    ///
    /// // Applying m then m_inv returns to the original
    /// let v = [1.0, 2.0, 3.0];
    /// let restored = m_inv.apply_to_vector(m.apply_to_vector(v));
    ///
    /// assert!((restored[0] - v[0]).abs() < 1e-14);
    /// assert!((restored[1] - v[1]).abs() < 1e-14);
    /// assert!((restored[2] - v[2]).abs() < 1e-14);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_array([
            [
                self.elements[0][0],
                self.elements[1][0],
                self.elements[2][0],
            ],
            [
                self.elements[0][1],
                self.elements[1][1],
                self.elements[2][1],
            ],
            [
                self.elements[0][2],
                self.elements[1][2],
                self.elements[2][2],
            ],
        ])
    }

    /// Checks whether this matrix is a valid rotation matrix within a
    /// tolerance.
    ///
    /// A proper rotation matrix must satisfy two conditions:
    /// 1. Determinant equals +1 (not -1, which would be a reflection)
    /// 2. The matrix is orthogonal: `M * M^T = I`
    ///
    /// Due to floating-point arithmetic, these conditions are checked within
    /// the specified tolerance.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::about_z(0.5) * RotationMatrix3::about_x(0.3);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// // A scaling matrix is not a rotation
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if (det - 1.0).abs() > tolerance {
            return false;
        }

        let rt = self.transpose();
        let product = self.multiply(&rt);
        let identity = Self::identity();

        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements.
    ///
    /// Useful for comparing matrices against reference values in tests.
    ///
    /// ```
    /// use maptilt_core::RotationMatrix3;
    ///
    /// let a = RotationMatrix3::identity();
    /// let b = RotationMatrix3::from_array([
    ///     [1.0, 0.001, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    ///
    /// let diff = a.max_difference(&b);
    /// assert!((diff - 0.001).abs() < 1e-15);
    /// ```
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::Mul<super::Vector3> for RotationMatrix3 {
    type Output = super::Vector3;

    fn mul(self, vec: super::Vector3) -> super::Vector3 {
        let result = self.apply_to_vector([vec.x, vec.y, vec.z]);
        super::Vector3::from_array(result)
    }
}

impl std::ops::Mul<super::Vector3> for &RotationMatrix3 {
    type Output = super::Vector3;

    fn mul(self, vec: super::Vector3) -> super::Vector3 {
        let result = self.apply_to_vector([vec.x, vec.y, vec.z]);
        super::Vector3::from_array(result)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

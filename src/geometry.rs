//! Pure geometric computations over atomic coordinates.
//!
//! Distance, bond angle, and dihedral (torsion) angle over points in
//! angstrom space. All functions are deterministic, allocation-free, and
//! side-effect-free; degenerate input is an explicit [`GeometryError`],
//! never a silently propagated `NaN`.

use std::fmt;

use glam::DVec3;

/// Degenerate-geometry failures.
///
/// A pick set is degenerate when atoms coincide (a zero-length arm or
/// bond vector) or when three consecutive torsion atoms are collinear,
/// leaving the dihedral planes undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// An angle arm has zero length (an arm atom coincides with the
    /// vertex).
    DegenerateAngle,
    /// A torsion bond vector is zero, or consecutive bonds are collinear.
    DegenerateTorsion,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAngle => {
                write!(f, "degenerate angle: arm atom coincides with vertex")
            }
            Self::DegenerateTorsion => {
                write!(f, "degenerate torsion: coincident or collinear atoms")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Euclidean distance between two points, in angstroms.
///
/// Always succeeds; `distance(a, a)` is exactly `0.0`.
#[must_use]
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Angle at `vertex` subtended by `a` and `b`, in degrees.
///
/// Result is in `[0, 180]` and symmetric in the two arms. Returns
/// [`GeometryError::DegenerateAngle`] when either arm atom coincides with
/// the vertex.
pub fn angle(vertex: DVec3, a: DVec3, b: DVec3) -> Result<f64, GeometryError> {
    let v1 = a - vertex;
    let v2 = b - vertex;
    let mag1 = v1.length();
    let mag2 = v2.length();
    if mag1 == 0.0 || mag2 == 0.0 {
        return Err(GeometryError::DegenerateAngle);
    }
    // Rounding can push the cosine just past ±1 for (anti)parallel arms;
    // clamp so acos never sees an out-of-domain argument.
    let cos = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Signed dihedral angle around the `p2`–`p3` axis, in degrees.
///
/// Standard four-point torsion: the angle between the plane through
/// `p1, p2, p3` and the plane through `p2, p3, p4`, signed via atan2
/// against the axis. Result is in `(-180, 180]`; a cis arrangement is
/// `0`, trans is `180`.
///
/// Returns [`GeometryError::DegenerateTorsion`] when consecutive atoms
/// coincide or either atom triple is collinear (the plane normals vanish).
pub fn torsion(
    p1: DVec3,
    p2: DVec3,
    p3: DVec3,
    p4: DVec3,
) -> Result<f64, GeometryError> {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(b2);
    let n2 = b2.cross(b3);
    if b2.length() == 0.0 || n1.length() == 0.0 || n2.length() == 0.0 {
        return Err(GeometryError::DegenerateTorsion);
    }

    // m1 completes an orthonormal-ish frame with n1 and the axis, so the
    // atan2 quadrant carries the sign of the dihedral.
    let m1 = n1.cross(b2 / b2.length());
    let x = n1.dot(n2);
    let y = m1.dot(n2);
    Ok(y.atan2(x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::{angle, distance, torsion, GeometryError};
    use glam::DVec3;

    const TOL: f64 = 1e-6;

    #[test]
    fn distance_three_four_five() {
        let a = DVec3::new(0.0, 0.0, 0.0);
        let b = DVec3::new(3.0, 4.0, 0.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = DVec3::new(1.25, -2.5, 3.75);
        let b = DVec3::new(-0.5, 0.25, 7.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn right_angle() {
        let vertex = DVec3::ZERO;
        let a = DVec3::new(1.0, 0.0, 0.0);
        let b = DVec3::new(0.0, 1.0, 0.0);
        let deg = angle(vertex, a, b).unwrap();
        assert!((deg - 90.0).abs() < TOL, "expected 90°, got {deg}");
    }

    #[test]
    fn angle_is_symmetric_in_the_arms() {
        let vertex = DVec3::new(0.5, 0.5, 0.5);
        let a = DVec3::new(2.0, 1.0, -1.0);
        let b = DVec3::new(-1.0, 3.0, 2.0);
        let ab = angle(vertex, a, b).unwrap();
        let ba = angle(vertex, b, a).unwrap();
        assert!((ab - ba).abs() < TOL);
        assert!((0.0..=180.0).contains(&ab));
    }

    #[test]
    fn collinear_arms_clamp_instead_of_nan() {
        let vertex = DVec3::ZERO;
        let a = DVec3::new(1.0, 1.0, 1.0);
        // Parallel arms: 0°. Antiparallel: 180°. Neither may be NaN.
        let parallel = angle(vertex, a, a * 2.0).unwrap();
        assert!(parallel.abs() < TOL, "expected 0°, got {parallel}");
        let anti = angle(vertex, a, -a).unwrap();
        assert!((anti - 180.0).abs() < TOL, "expected 180°, got {anti}");
    }

    #[test]
    fn angle_rejects_zero_length_arm() {
        let vertex = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(
            angle(vertex, vertex, b),
            Err(GeometryError::DegenerateAngle)
        );
        assert_eq!(
            angle(vertex, b, vertex),
            Err(GeometryError::DegenerateAngle)
        );
    }

    #[test]
    fn planar_cis_torsion_is_zero() {
        let t = torsion(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(t.abs() < TOL, "expected 0°, got {t}");
    }

    #[test]
    fn planar_trans_torsion_is_180() {
        let t = torsion(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
        )
        .unwrap();
        assert!((t - 180.0).abs() < TOL, "expected 180°, got {t}");
    }

    #[test]
    fn torsion_sign_follows_handedness() {
        let p1 = DVec3::new(0.0, 1.0, 0.0);
        let p2 = DVec3::new(0.0, 0.0, 0.0);
        let p3 = DVec3::new(1.0, 0.0, 0.0);
        let up = torsion(p1, p2, p3, DVec3::new(1.0, 0.0, 1.0)).unwrap();
        let down = torsion(p1, p2, p3, DVec3::new(1.0, 0.0, -1.0)).unwrap();
        assert!((up + 90.0).abs() < TOL, "expected -90°, got {up}");
        assert!((down - 90.0).abs() < TOL, "expected +90°, got {down}");
        assert!((up + down).abs() < TOL);
    }

    #[test]
    fn torsion_rejects_collinear_triple() {
        let t = torsion(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 1.0, 0.0),
        );
        assert_eq!(t, Err(GeometryError::DegenerateTorsion));
    }

    #[test]
    fn torsion_rejects_coincident_axis_atoms() {
        let p = DVec3::new(1.0, 1.0, 1.0);
        let t = torsion(DVec3::new(0.0, 0.0, 0.0), p, p, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(t, Err(GeometryError::DegenerateTorsion));
    }
}

use geom2d::{Matrix2, Vector2, EPS};
use proptest::prelude::*;

fn vector(range: f64) -> impl Strategy<Value = Vector2> {
    (-range..range, -range..range).prop_map(|(x, y)| Vector2::new(x, y))
}

/// Matrices with small integer entries, so products and powers are exact.
fn int_matrix() -> impl Strategy<Value = Matrix2> {
    prop::array::uniform4(-2_i8..=2).prop_map(|[a, b, c, d]| {
        Matrix2::new(f64::from(a), f64::from(b), f64::from(c), f64::from(d))
    })
}

fn matrix(range: f64) -> impl Strategy<Value = Matrix2> {
    prop::array::uniform4(-range..range).prop_map(|[a, b, c, d]| Matrix2::new(a, b, c, d))
}

proptest! {
    #[test]
    fn zero_iff_short(v in vector(4.0 * EPS)) {
        if v.norm() < EPS {
            prop_assert!(v.is_zero());
        }
        if v.is_zero() {
            prop_assert!(v.norm() < 2.0_f64.sqrt() * EPS);
        }
    }

    #[test]
    fn unit_has_length_one(v in vector(100.0)) {
        prop_assume!(!v.is_zero());
        prop_assert!(v.unit().is_unit());
        prop_assert!(v.unit().is_parallel(v));
    }

    #[test]
    fn rotation_round_trip(v in vector(100.0), a in -10.0..10.0_f64) {
        prop_assert_eq!(v.rotate_ccw(a).rotate_cw(a), v);
    }

    #[test]
    fn polar_round_trip(v in vector(100.0)) {
        prop_assume!(v.norm() > 1e-3);
        prop_assert_eq!(Vector2::from_polar(v.norm(), v.angle()), v);
    }

    #[test]
    fn identity_fixes_vectors(v in vector(1e6)) {
        prop_assert_eq!(Matrix2::identity() * v, v);
        prop_assert_eq!(v.transform(&Matrix2::identity()), v);
    }

    #[test]
    fn inverse_is_two_sided(a in matrix(10.0)) {
        prop_assume!(a.determinant().abs() > 1e-2);
        let inv = a.inverse();
        prop_assert!((a * inv).is_identity());
        prop_assert!((inv * a).is_identity());
    }

    #[test]
    fn pow_adds_exponents(a in int_matrix(), m in 0_i64..5, n in 0_i64..5) {
        prop_assert!(a.pow(0).is_identity());
        prop_assert_eq!(a.pow(1), a);
        prop_assert_eq!(a.pow(m + n), a.pow(m) * a.pow(n));
    }

    #[test]
    fn pow_negative_adds_exponents(m in 0_i64..4, n in 0_i64..4) {
        // determinant 1, so every power of the inverse has integer entries
        let a = Matrix2::new(2.0, 1.0, 1.0, 1.0);
        prop_assert_eq!(a.pow(-(m + n)), a.pow(-m) * a.pow(-n));
    }

    #[test]
    fn transpose_is_involution(a in matrix(1e3)) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn determinant_is_multiplicative(a in int_matrix(), b in int_matrix()) {
        let lhs = (a * b).determinant();
        let rhs = a.determinant() * b.determinant();
        prop_assert!((lhs - rhs).abs() < EPS, "{} != {}", lhs, rhs);
    }

    #[test]
    fn orthogonal_preserves_norm(a in -10.0..10.0_f64, v in vector(100.0)) {
        let r = Matrix2::rotation(a);
        prop_assert!(r.is_orthogonal());
        prop_assert!(((r * v).norm() - v.norm()).abs() < 1e-12);
    }

    #[test]
    fn free_functions_match_methods(u in vector(10.0), v in vector(10.0)) {
        prop_assert_eq!(geom2d::parallel(u, v), u.is_parallel(v));
        prop_assert_eq!(geom2d::antiparallel(u, v), u.is_antiparallel(v));
        prop_assert_eq!(geom2d::collinear(u, v), u.is_collinear(v));
        prop_assert_eq!(geom2d::orthogonal(u, v), u.is_orthogonal(v));
        prop_assert_eq!(geom2d::opposite(u, v), u.is_opposite(v));
        prop_assert_eq!(geom2d::dot(u, v).to_bits(), u.dot(v).to_bits());
        prop_assert_eq!(geom2d::cross(u, v).to_bits(), u.cross(v).to_bits());
        prop_assert_eq!(geom2d::angle(u, v).to_bits(), u.angle_to(v).to_bits());
    }
}

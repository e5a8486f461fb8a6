// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Property checks over arbitrary axis/angle rotations and raw components.
#![allow(missing_docs)]

use orient_core::math::Quat;
use proptest::prelude::*;

const TOL: f32 = 1e-5;

fn component() -> impl Strategy<Value = f32> {
    -100.0f32..100.0
}

fn rotation() -> impl Strategy<Value = Quat> {
    (
        prop_oneof![Just(0.0f32), -1.0f32..1.0],
        -1.0f32..1.0,
        prop_oneof![Just(1.0f32), 0.1f32..1.0],
        -720.0f32..720.0,
    )
        .prop_map(|(x, y, z, deg)| Quat::from_axis_angle(x, y, z, deg))
}

fn close(a: Quat, b: Quat) -> bool {
    (a.dot(&b) - 1.0).abs() <= TOL
}

proptest! {
    #[test]
    fn construction_yields_unit_length(
        x in component(), y in component(), z in component(), w in component()
    ) {
        let mut q = Quat::identity();
        let resolved = q.set(x, y, z, w);
        let norm_sq = q.dot(&q);
        prop_assert!((norm_sq - 1.0).abs() <= TOL, "norm² {norm_sq} for {q}");
        if x * x + y * y + z * z + w * w > 1e-6 {
            prop_assert!(resolved);
        }
    }

    #[test]
    fn identity_is_neutral(q in rotation()) {
        prop_assert!(close(Quat::identity().multiply(&q), q));
        prop_assert!(close(q.multiply(&Quat::identity()), q));
    }

    #[test]
    fn inverse_composes_to_identity(q in rotation()) {
        prop_assert!(close(q.multiply(&q.inverted()), Quat::identity()));
        prop_assert!(close(q.inverted().multiply(&q), Quat::identity()));
    }

    #[test]
    fn negation_flips_the_dot_product(q in rotation()) {
        prop_assert!((q.dot(&q.negated()) + 1.0).abs() <= TOL);
        prop_assert_ne!(q, q.negated());
    }

    #[test]
    fn multiplication_is_associative(a in rotation(), b in rotation(), c in rotation()) {
        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));
        prop_assert!(close(left, right), "{left} vs {right}");
    }

    #[test]
    fn rescaling_preserves_rotation(q in rotation(), factor in 0.01f32..50.0) {
        prop_assert!(close(q.scaled(factor).normalized(), q));
    }

    #[test]
    fn bit_identical_values_share_a_fingerprint(
        x in component(), y in component(), z in component(), w in component()
    ) {
        let a = Quat::new(x, y, z, w);
        let b = Quat::new(x, y, z, w);
        prop_assert_eq!(a.to_array(), b.to_array());
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use rigid_math::{Mat3, Mat4, Quat, Vec2, Vec3};

// Seeds are pinned so a failing case reproduces identically on every machine.
// Override locally with PROPTEST_SEED for exploratory runs.
const SEED_BYTES: [u8; 32] = [
    0x52, 0x4d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn point() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn direction() -> impl Strategy<Value = Vec3> {
    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0)
        .prop_filter("well away from zero", |(x, y, z)| x * x + y * y + z * z > 0.01)
        .prop_map(|(x, y, z)| {
            let mut v = Vec3::new(x, y, z);
            v.normalize();
            v
        })
}

fn angle() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

/// Rotation about `axis` through `pivot`, followed by a translation.
fn rigid(axis: Vec3, angle: f64, pivot: Vec3, shift: Vec3) -> Mat4 {
    let mut m = Mat4::identity();
    m.set_rotation_axis_angle_at_offset(&axis, angle, &pivot);
    let mut t = Mat4::identity();
    t.set_translation(&shift);
    m.premultiply(&t);
    m
}

#[test]
fn inverse_round_trip_restores_points() {
    let strategy = (direction(), angle(), point(), point(), point());
    pinned_runner()
        .run(&strategy, |(axis, theta, pivot, shift, v)| {
            let m = rigid(axis, theta, pivot, shift);
            let mut inv = m;
            inv.invert_transform();
            let mut w = v;
            w.apply_mat4(&m).apply_mat4(&inv);
            prop_assert!(w.distance_to(&v) <= 1e-9, "{w:?} vs {v:?}");
            Ok(())
        })
        .unwrap();
}

#[test]
fn rotation_block_preserves_length() {
    let strategy = (direction(), angle(), point(), point());
    pinned_runner()
        .run(&strategy, |(axis, theta, pivot, v)| {
            let mut m = Mat4::identity();
            m.set_rotation_axis_angle_at_offset(&axis, theta, &pivot);
            let mut w = v;
            w.apply_mat4_rotation(&m);
            prop_assert!((w.length() - v.length()).abs() <= 1e-9);
            Ok(())
        })
        .unwrap();
}

#[test]
fn composing_with_inverse_yields_identity() {
    let strategy = (direction(), angle(), point(), point());
    pinned_runner()
        .run(&strategy, |(axis, theta, pivot, shift)| {
            let m = rigid(axis, theta, pivot, shift);
            let mut inv = m;
            inv.invert_transform();
            let mut product = m;
            product.multiply(&inv);
            let expected = Mat4::identity().elements();
            for (a, b) in product.elements().iter().zip(expected) {
                prop_assert!((a - b).abs() <= 1e-9, "{:?}", product.elements());
            }
            // At the default tolerance the flag may be either value, but it must
            // agree with a fresh check. tolerance_tests.rs asserts it under 1e-9.
            prop_assert_eq!(
                product.is_identity(),
                Mat4::new(product.elements()).is_identity()
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn vector_to_vector_maps_direction() {
    let strategy = (direction(), direction());
    pinned_runner()
        .run(&strategy, |(from, to)| {
            let mut m = Mat4::identity();
            m.set_rotation_from_vector_to_vector(&from, &to);
            let mut v = from;
            v.apply_mat4(&m);
            prop_assert!(v.distance_to(&to) <= 1e-9, "{v:?} vs {to:?}");

            let mut q = Quat::identity();
            q.set_from_unit_vectors(&from, &to);
            let mut u = from;
            u.apply_quat(&q);
            prop_assert!(u.distance_to(&to) <= 1e-9, "{u:?} vs {to:?}");
            prop_assert!((q.length() - 1.0).abs() <= 1e-9);
            Ok(())
        })
        .unwrap();
}

#[test]
fn reflection_is_an_involution() {
    let strategy = (direction(), point(), point());
    pinned_runner()
        .run(&strategy, |(normal, offset, v)| {
            let mut m = Mat4::identity();
            m.set_reflection_normal_at_offset(&normal, &offset);
            let mut w = v;
            w.apply_mat4(&m).apply_mat4(&m);
            prop_assert!(w.distance_to(&v) <= 1e-9);
            Ok(())
        })
        .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mat3_inverse_round_trip(theta in angle(), tx in coord(), ty in coord(), px in coord(), py in coord()) {
        let mut m = Mat3::identity();
        m.set_from_rotation_translation(theta, &[tx, ty]);
        let mut inv = m;
        inv.invert_transform();
        let mut p = Vec2::new(px, py);
        p.apply_mat3(&m).apply_mat3(&inv);
        prop_assert!(p.distance_to(&[px, py]) <= 1e-9);
    }

    #[test]
    fn quaternion_normalize_gives_unit_length(x in coord(), y in coord(), z in coord(), w in coord()) {
        prop_assume!(x * x + y * y + z * z + w * w > 1e-6);
        let mut q = Quat::new(x, y, z, w);
        q.normalize();
        prop_assert!((q.length() - 1.0).abs() <= 1e-12);
    }
}

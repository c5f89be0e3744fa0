// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
//! Degenerate inputs warn through `tracing` and fall back to a safe value.
use std::io;
use std::sync::{Arc, Mutex};

use rigid_math::diag::TARGET;
use rigid_math::{Degeneracy, Mat4, Quat, Vec2, Vec3};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` under a thread-local subscriber and returns everything it logged.
fn captured(f: impl FnOnce()) -> String {
    let sink = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn zero_vector_normalize_warns_and_keeps_value() {
    let mut v = Vec3::ZERO;
    let out = captured(|| {
        v.normalize();
    });
    assert_eq!(v, Vec3::ZERO);
    assert!(out.contains("WARN"), "{out}");
    assert!(out.contains(TARGET), "{out}");
    assert!(out.contains(Degeneracy::ZeroLengthVector.message()), "{out}");
    assert!(out.contains("Vec3::normalize"), "{out}");
}

#[test]
fn zero_vec2_normalize_stays_zero() {
    let mut v = Vec2::new(0.0, 0.0);
    let out = captured(|| {
        v.normalize();
    });
    assert_eq!(v, Vec2::new(0.0, 0.0));
    assert!(!v.x.is_nan() && !v.y.is_nan());
    assert!(out.contains(Degeneracy::ZeroLengthVector.message()), "{out}");
}

#[test]
fn zero_quaternion_resets_to_identity() {
    let mut q = Quat::new(0.0, 0.0, 0.0, 0.0);
    let out = captured(|| {
        q.normalize();
    });
    assert_eq!(q, Quat::identity());
    assert!(out.contains(Degeneracy::ZeroLengthQuaternion.message()), "{out}");
}

#[test]
fn divide_by_zero_leaves_vector_unchanged() {
    let mut v = Vec3::new(1.0, -2.0, 3.0);
    let mut w = Vec2::new(4.0, 5.0);
    let out = captured(|| {
        v.div_scalar(0.0);
        w.div_scalar(1e-300);
    });
    assert_eq!(v, Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(w, Vec2::new(4.0, 5.0));
    assert_eq!(out.matches(Degeneracy::DivideByZero.message()).count(), 2, "{out}");
}

#[test]
fn antiparallel_rotations_warn() {
    let out = captured(|| {
        let mut q = Quat::identity();
        q.set_from_unit_vectors(&Vec3::UNIT_Y, &[0.0, -1.0, 0.0]);
        let mut m = Mat4::identity();
        m.set_rotation_from_vector_to_vector(&Vec3::UNIT_Z, &[0.0, 0.0, -4.0]);
    });
    assert_eq!(
        out.matches(Degeneracy::AntiparallelVectors.message()).count(),
        2,
        "{out}"
    );
    assert!(out.contains("Quat::set_from_unit_vectors"), "{out}");
}

#[test]
fn zero_length_rotation_input_warns_as_zero_vector() {
    let mut m = Mat4::identity();
    let out = captured(|| {
        m.set_rotation_from_vector_to_vector(&Vec3::ZERO, &Vec3::UNIT_Y);
    });
    assert!(m.is_identity());
    assert_eq!(out.matches(Degeneracy::ZeroLengthVector.message()).count(), 1, "{out}");
    assert_eq!(out.matches(Degeneracy::AntiparallelVectors.message()).count(), 0, "{out}");
    assert!(out.contains("Mat4::set_rotation_from_vector_to_vector"), "{out}");
    assert!(out.contains("diagnostics_tests.rs"), "{out}");
}

#[test]
fn location_points_at_the_caller() {
    let out = captured(|| {
        let mut v = Vec3::ZERO;
        v.normalize();
        let mut m = Mat4::identity();
        m.set_rotation_from_vector_to_vector_at_offset(&Vec3::UNIT_X, &[-1.0, 0.0, 0.0], &[1.0, 1.0, 1.0]);
    });
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    for line in lines {
        assert!(line.contains("diagnostics_tests.rs"), "{line}");
    }
}

#[test]
fn healthy_inputs_are_silent() {
    let out = captured(|| {
        let mut v = Vec3::new(3.0, 4.0, 0.0);
        v.normalize().div_scalar(2.0);
        let mut q = Quat::new(0.0, 0.0, 1.0, 1.0);
        q.normalize();
        let mut m = Mat4::identity();
        m.set_rotation_from_vector_to_vector(&Vec3::UNIT_X, &Vec3::UNIT_Y);
    });
    assert!(out.is_empty(), "{out}");
}

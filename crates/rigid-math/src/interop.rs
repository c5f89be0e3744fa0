// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Structural vector and quaternion shapes.
//!
//! Every operation that takes a vector or quaternion argument accepts any type
//! exposing the required numeric components. Only component reads are made;
//! no other method of the argument is called. This lets values from other
//! geometry libraries (plain arrays, tuples, `nalgebra` types behind the
//! `nalgebra` feature) flow in without adapter code.

/// Anything readable as `(x, y)`.
pub trait Vector2Like {
    /// X component.
    fn x(&self) -> f64;
    /// Y component.
    fn y(&self) -> f64;
}

/// Anything readable as `(x, y, z)`.
pub trait Vector3Like {
    /// X component.
    fn x(&self) -> f64;
    /// Y component.
    fn y(&self) -> f64;
    /// Z component.
    fn z(&self) -> f64;
}

/// Anything readable as `(x, y, z, w)` with `w` the scalar part.
pub trait QuaternionLike {
    /// X component of the vector part.
    fn x(&self) -> f64;
    /// Y component of the vector part.
    fn y(&self) -> f64;
    /// Z component of the vector part.
    fn z(&self) -> f64;
    /// Scalar part.
    fn w(&self) -> f64;
}

impl<T: Vector2Like + ?Sized> Vector2Like for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<T: Vector3Like + ?Sized> Vector3Like for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
    fn z(&self) -> f64 {
        (**self).z()
    }
}

impl<T: QuaternionLike + ?Sized> QuaternionLike for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
    fn z(&self) -> f64 {
        (**self).z()
    }
    fn w(&self) -> f64 {
        (**self).w()
    }
}

impl Vector2Like for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Vector2Like for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Vector3Like for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
}

impl Vector3Like for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
}

impl QuaternionLike for [f64; 4] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
    fn w(&self) -> f64 {
        self[3]
    }
}

impl QuaternionLike for (f64, f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
    fn w(&self) -> f64 {
        self.3
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impls {
    use super::{QuaternionLike, Vector2Like, Vector3Like};

    impl Vector2Like for nalgebra::Vector2<f64> {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
    }

    impl Vector3Like for nalgebra::Vector3<f64> {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
        fn z(&self) -> f64 {
            self.z
        }
    }

    // `coords` is stored as [i, j, k, w].
    impl QuaternionLike for nalgebra::Quaternion<f64> {
        fn x(&self) -> f64 {
            self.coords.x
        }
        fn y(&self) -> f64 {
            self.coords.y
        }
        fn z(&self) -> f64 {
            self.coords.z
        }
        fn w(&self) -> f64 {
            self.coords.w
        }
    }

    impl QuaternionLike for nalgebra::UnitQuaternion<f64> {
        fn x(&self) -> f64 {
            self.as_ref().coords.x
        }
        fn y(&self) -> f64 {
            self.as_ref().coords.y
        }
        fn z(&self) -> f64 {
            self.as_ref().coords.z
        }
        fn w(&self) -> f64 {
            self.as_ref().coords.w
        }
    }
}

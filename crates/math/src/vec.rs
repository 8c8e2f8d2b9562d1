use core::ops;
use core::fmt;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_traits::Float;

use crate::scalar::Scalar;

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl<T: Scalar> ops::$trait<$v<T>> for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn $func(self, rhs: $v<T>) -> $v<T> {
                $v { $( $e: ops::$trait::$func(self.$e, rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $op_trait: ident, $op: ident, $v: ident, $($e: ident),*) => {
        impl<T: Scalar> ops::$trait<$v<T>> for $v<T> {
            #[inline]
            fn $func(&mut self, rhs: $v<T>) {
                $( self.$e = ops::$op_trait::$op(self.$e, rhs.$e); )*
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl<T: Scalar> ops::$trait<T> for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn $func(self, rhs: T) -> $v<T> {
                $v { $( $e: ops::$trait::$func(self.$e, rhs), )* }
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $op_trait: ident, $op: ident, $v: ident, $($e: ident),*) => {
        impl<T: Scalar> ops::$trait<T> for $v<T> {
            #[inline]
            fn $func(&mut self, rhs: T) {
                $( self.$e = ops::$op_trait::$op(self.$e, rhs); )*
            }
        }
    }
}

macro_rules! vec_float_utils_impl {
    ($v: ident, $($e: ident),*) => {
        impl<T: Scalar + Float> $v<T> {
            #[inline]
            pub fn length2(self) -> T {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> T {
                self.length2().sqrt()
            }
        }

        impl<T: Scalar + ops::Neg<Output = T>> ops::Neg for $v<T> {
            type Output = $v<T>;

            fn neg(self) -> $v<T> {
                $v { $( $e: -self.$e, )* }
            }
        }
    }
}

macro_rules! vec_approx_impl {
    ($v: ident, $($e: ident),*) => {
        impl<T: Scalar + AbsDiffEq<Epsilon = T>> AbsDiffEq for $v<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $( self.$e.abs_diff_eq(&other.$e, epsilon) )&&*
            }
        }

        impl<T: Scalar + RelativeEq<Epsilon = T>> RelativeEq for $v<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $( self.$e.relative_eq(&other.$e, epsilon, max_relative) )&&*
            }
        }
    }
}

macro_rules! vec_impl {
    ($v: ident, $n: expr, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(C)]
        pub struct $v<T> {
            $( pub $e : T, )*
        }

        // repr(C) with every field of type T leaves no padding.
        unsafe impl<T: Zeroable> Zeroable for $v<T> {}
        unsafe impl<T: Pod> Pod for $v<T> {}

        impl<T: Scalar> $v<T> {
            #[inline]
            pub fn new($( $e: T, )*) -> $v<T> {
                $v { $( $e, )* }
            }

            #[inline]
            pub fn from_slice(a: &[T; $n]) -> $v<T> {
                let [$( $e, )*] = *a;
                $v { $( $e, )* }
            }

            #[inline]
            pub fn to_slice(self) -> [T; $n] {
                [$( self.$e, )*]
            }

            #[inline]
            pub fn dot(self, b: $v<T>) -> T {
                T::zero() $( + self.$e * b.$e )*
            }
        }

        impl<T: Scalar> fmt::Display for $v<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($v),
                        vec![$(
                           format!("{:.prec$}", self.$e, prec = f.precision().unwrap_or(3)),
                        )*].join(", "))
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);
        vec_op_impl!(Div, div, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, Add, add, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, Sub, sub, $v, $($e),*);
        vec_assign_op_impl!(MulAssign, mul_assign, Mul, mul, $v, $($e),*);
        vec_assign_op_impl!(DivAssign, div_assign, Div, div, $v, $($e),*);

        scalar_op_impl!(Add, add, $v, $($e),*);
        scalar_op_impl!(Sub, sub, $v, $($e),*);
        scalar_op_impl!(Mul, mul, $v, $($e),*);
        scalar_op_impl!(Div, div, $v, $($e),*);

        scalar_assign_op_impl!(AddAssign, add_assign, Add, add, $v, $($e),*);
        scalar_assign_op_impl!(SubAssign, sub_assign, Sub, sub, $v, $($e),*);
        scalar_assign_op_impl!(MulAssign, mul_assign, Mul, mul, $v, $($e),*);
        scalar_assign_op_impl!(DivAssign, div_assign, Div, div, $v, $($e),*);

        vec_float_utils_impl!($v, $($e),*);
        vec_approx_impl!($v, $($e),*);
    }
}

vec_impl!(Vector2T, 2, x, y);
vec_impl!(Vector3T, 3, x, y, z);

impl<T: Scalar> Vector2T<T> {
    /// Lifts a 2D point to homogeneous coordinates.
    #[inline]
    pub fn extend(self, z: T) -> Vector3T<T> {
        Vector3T::new(self.x, self.y, z)
    }
}

impl<T: Scalar> Vector3T<T> {
    #[inline]
    pub fn truncate(self) -> Vector2T<T> {
        Vector2T::new(self.x, self.y)
    }

    #[inline]
    pub fn cross(self, b: Vector3T<T>) -> Vector3T<T> {
        Vector3T {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }
}

pub type Vec2 = Vector2T<f32>;
pub type Vec3 = Vector3T<f32>;
pub type Vec2d = Vector2T<f64>;
pub type Vec3d = Vector3T<f64>;
pub type Vec2i = Vector2T<i32>;
pub type Vec3i = Vector3T<i32>;

//! # Apex Quaternion
//!
//! A small quaternion kernel for representing and propagating 3D orientation.
//!
//! ## Features
//!
//! - **Generic scalar**: `Quaternion<f32>` and `Quaternion<f64>` are distinct types built on
//!   `num_traits::Float`
//! - **Hamilton algebra**: products, conjugates, norms and scalar operators
//! - **Matrix conversion**: Shepperd's method for matrix → quaternion, closed form for the
//!   inverse, against any container implementing [`Matrix3View`] / [`Matrix3Storage`]
//!   (nalgebra, faer and plain arrays are supported out of the box)
//! - **Attitude integration**: explicit Euler and classic Runge-Kutta 4 steps driven by a
//!   body-frame angular velocity
//!
//! ## Example
//!
//! ```
//! use apex_quaternion::Quaternion;
//! use nalgebra::Matrix3;
//!
//! let q = Quaternion::rotation(std::f64::consts::FRAC_PI_2, 0.0, 0.0, 1.0);
//! let r: Matrix3<f64> = q.to_matrix();
//! let back = Quaternion::from_matrix(&r);
//! assert!(q.is_approx(&back, 1e-12));
//! ```

pub mod error;
pub mod integration;
pub mod logger;
pub mod matrix;
pub mod quaternion;

mod ops;

pub use error::{QuatError, QuatResult};
pub use integration::{IntegrationMethod, PropagationConfig, propagate};
pub use logger::{init_logger, init_logger_with_level};
pub use matrix::{Matrix3Storage, Matrix3View};
pub use quaternion::{Quaternion, Quaterniond, Quaternionf};

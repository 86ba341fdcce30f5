//! Attitude integration under a body-frame angular velocity.
//!
//! The orientation quaternion obeys the kinematic equation
//!
//! ```text
//! dq/dt = 0.5 * q * w,    w = (0, wx, wy, wz)
//! ```
//!
//! with `w` the angular velocity expressed in the body frame as a pure quaternion.
//! Two explicit schemes share that derivative:
//!
//! - **Euler**: `q + dt * f(q)`, first order
//! - **Runge-Kutta 4**: the classic four-stage scheme, fourth order
//!
//! The `*_step` methods return the raw next state. An explicit step does not stay on the
//! unit sphere (Euler grows the norm by roughly `(0.5 * |w| * dt)² / 2` per step), so the
//! in-place `integrate_*` methods renormalize after every step.
//!
//! [`propagate`] runs many steps with a [`PropagationConfig`].

use crate::error::{QuatError, QuatResult};
use crate::quaternion::{Quaternion, half, two};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

impl<T: Float> Quaternion<T> {
    /// Kinematic derivative `0.5 * (q * w)` for the body-frame angular velocity `w`.
    #[inline]
    pub fn derivative(&self, w: &Self) -> Self {
        (*self * *w) * half::<T>()
    }

    /// One explicit Euler step, without renormalization.
    pub fn euler_step(&self, w: &Self, dt: T) -> Self {
        *self + self.derivative(w) * dt
    }

    /// One classic Runge-Kutta 4 step, without renormalization.
    ///
    /// ```text
    /// k1 = f(q)
    /// k2 = f(q + dt/2 * k1)
    /// k3 = f(q + dt/2 * k2)
    /// k4 = f(q + dt * k3)
    /// q' = q + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
    /// ```
    pub fn runge_kutta4_step(&self, w: &Self, dt: T) -> Self {
        let two = two::<T>();
        let six = two + two + two;
        let half_dt = dt * half::<T>();

        let k1 = self.derivative(w);
        let k2 = (*self + k1 * half_dt).derivative(w);
        let k3 = (*self + k2 * half_dt).derivative(w);
        let k4 = (*self + k3 * dt).derivative(w);

        *self + (k1 + k2 * two + k3 * two + k4) * (dt / six)
    }

    /// Advance in place by one Euler step, then renormalize.
    pub fn integrate_euler(&mut self, w: &Self, dt: T) {
        *self = self.euler_step(w, dt);
        self.normalize();
    }

    /// Advance in place by one Runge-Kutta 4 step, then renormalize.
    pub fn integrate_runge_kutta4(&mut self, w: &Self, dt: T) {
        *self = self.runge_kutta4_step(w, dt);
        self.normalize();
    }
}

/// Integration scheme used by [`propagate`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// Explicit Euler (first order)
    Euler,
    /// Classic Runge-Kutta (fourth order)
    #[default]
    RungeKutta4,
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMethod::Euler => write!(f, "Euler"),
            IntegrationMethod::RungeKutta4 => write!(f, "Runge-Kutta 4"),
        }
    }
}

impl FromStr for IntegrationMethod {
    type Err = QuatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(IntegrationMethod::Euler),
            "rk4" | "runge-kutta4" | "runge_kutta4" => Ok(IntegrationMethod::RungeKutta4),
            other => Err(QuatError::InvalidInput(format!(
                "unknown integration method '{other}' (expected 'euler' or 'rk4')"
            ))),
        }
    }
}

/// Settings for [`propagate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationConfig<T> {
    /// Integration scheme
    pub method: IntegrationMethod,
    /// Step size in seconds
    pub time_step: T,
    /// Renormalize after every step
    pub renormalize: bool,
}

impl<T: Float> PropagationConfig<T> {
    /// Runge-Kutta 4 with renormalization and the given step size.
    pub fn new(time_step: T) -> Self {
        Self {
            method: IntegrationMethod::default(),
            time_step,
            renormalize: true,
        }
    }

    /// Set the integration scheme
    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the step size in seconds
    pub fn with_time_step(mut self, time_step: T) -> Self {
        self.time_step = time_step;
        self
    }

    /// Enable or disable renormalization after each step
    pub fn with_renormalize(mut self, renormalize: bool) -> Self {
        self.renormalize = renormalize;
        self
    }

    /// Check that the step size is finite and positive.
    pub fn validate(&self) -> QuatResult<()> {
        if !self.time_step.is_finite() {
            return Err(QuatError::NonFinite("time step".to_string()));
        }
        if self.time_step <= T::zero() {
            return Err(QuatError::InvalidInput(format!(
                "time step must be positive, got {}",
                self.time_step.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}

/// Integrate `orientation` for `steps` steps under the constant body rate `w`.
///
/// # Arguments
/// * `orientation` - Initial orientation
/// * `w` - Angular velocity as a pure quaternion (0, wx, wy, wz), rad/s
/// * `steps` - Number of steps of `config.time_step`
/// * `config` - Scheme, step size and renormalization
pub fn propagate<T: Float>(
    orientation: Quaternion<T>,
    w: &Quaternion<T>,
    steps: usize,
    config: &PropagationConfig<T>,
) -> QuatResult<Quaternion<T>> {
    config.validate()?;
    if w.coords().iter().any(|v| !v.is_finite()) {
        return Err(QuatError::NonFinite("angular velocity".to_string()));
    }
    if orientation.coords().iter().any(|v| !v.is_finite()) {
        return Err(QuatError::NonFinite("initial orientation".to_string()));
    }

    trace!(
        "Propagating {} steps with {} (renormalize: {})",
        steps, config.method, config.renormalize
    );

    let dt = config.time_step;
    let mut q = orientation;
    for _ in 0..steps {
        q = match config.method {
            IntegrationMethod::Euler => q.euler_step(w, dt),
            IntegrationMethod::RungeKutta4 => q.runge_kutta4_step(w, dt),
        };
        if config.renormalize {
            q.try_normalize()?;
        }
    }

    debug!(
        "Propagation finished: {} steps, final norm {:.3e}",
        steps,
        q.norm().to_f64().unwrap_or(f64::NAN)
    );

    Ok(q)
}

// ============================================================================
// Tests
// ============================================================================

use std::time::Instant;

use apex_quaternion::{
    IntegrationMethod, PropagationConfig, Quaternion, init_logger_with_level, propagate,
};
use clap::Parser;
use nalgebra::Matrix3;
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(name = "propagate_attitude")]
#[command(about = "Propagate an orientation under a constant body rate and compare with the closed form")]
struct Args {
    /// Angular rate magnitude in degrees per second
    #[arg(short, long, default_value = "60")]
    rate_deg: f64,

    /// Rotation axis as comma separated components (normalized internally)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [0.0, 0.0, 1.0]
    )]
    axis: Vec<f64>,

    /// Integration step in seconds
    #[arg(long, default_value = "1e-5")]
    dt: f64,

    /// Number of integration steps
    #[arg(short, long, default_value = "100000")]
    steps: usize,

    /// Integration method: "euler" or "rk4"
    #[arg(short, long, default_value = "rk4")]
    method: IntegrationMethod,

    /// Keep the raw integrator output instead of renormalizing every step
    #[arg(long)]
    no_renormalize: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger_with_level(if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    });

    if args.axis.len() != 3 {
        return Err(format!("expected 3 axis components, got {}", args.axis.len()).into());
    }

    let axis_norm = args.axis.iter().map(|v| v * v).sum::<f64>().sqrt();
    if axis_norm < f64::EPSILON {
        return Err("rotation axis must not be zero".into());
    }

    let rate = args.rate_deg.to_radians();
    let w = Quaternion::pure(
        rate * args.axis[0] / axis_norm,
        rate * args.axis[1] / axis_norm,
        rate * args.axis[2] / axis_norm,
    );

    let config = PropagationConfig::new(args.dt)
        .with_method(args.method)
        .with_renormalize(!args.no_renormalize);

    info!(
        "Propagating {} steps of {:e} s with {} at {} deg/s",
        args.steps, args.dt, config.method, args.rate_deg
    );

    let start = Instant::now();
    let result = propagate(Quaternion::identity(), &w, args.steps, &config)?;
    let elapsed = start.elapsed();

    let elapsed_time = args.dt * args.steps as f64;
    let expected = Quaternion::rotation(
        rate * elapsed_time,
        args.axis[0],
        args.axis[1],
        args.axis[2],
    );

    let error = (result - expected).norm().min((result + expected).norm());
    let rotation: Matrix3<f64> = result.to_matrix();

    info!("Result:   {}", result);
    info!("Expected: {}", expected);
    info!("Component error: {:.3e}", error);
    info!("Norm drift: {:.3e}", result.norm() - 1.0);
    info!("Rotation matrix:{}", rotation);
    info!("Time: {:.2} ms", elapsed.as_secs_f64() * 1000.0);

    if error > 1e-6 {
        warn!("Integration error above 1e-6; consider a smaller --dt or --method rk4");
    }

    Ok(())
}

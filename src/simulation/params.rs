//! Numerical and physical parameters for a mission scenario
//!
//! `Parameters` holds runtime settings:
//! - normal and warp step sizes and the end time,
//! - the suggested tick rate for real-time drivers,
//! - the per-tick engine impulse and gravitational constant (`thrust`, `G`)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // simulated seconds after which a driver should stop
    pub dt: f64, // step size [s]
    pub dt_warp: f64, // step size while warping [s]
    pub freq: f64, // suggested tick rate [Hz], a hint for real-time drivers only
    pub thrust: f64, // per-tick engine impulse magnitude [m/s]
    pub G: f64, // gravitational constant
}

//! Mission clock with discrete time warp
//!
//! Tracks cumulative simulated time and owns the timestep. Warp switches
//! `dt` between the normal and accelerated values without touching elapsed
//! time or the update frequency: a warped tick simply advances simulated
//! time further. The cost is integration accuracy, since the explicit
//! stepper's truncation error grows with the step size. That loss of
//! fidelity is the accepted price of warp, not a defect.

#[derive(Debug, Clone)]
pub struct MissionClock {
    elapsed: f64, // simulated seconds since reset
    dt_normal: f64, // step size with warp off
    dt_warp: f64, // step size with warp on
    warp: bool,
}

impl MissionClock {
    pub fn new(dt_normal: f64, dt_warp: f64) -> Self {
        Self {
            elapsed: 0.0,
            dt_normal,
            dt_warp,
            warp: false,
        }
    }

    /// Simulated seconds advanced per tick under the current warp setting
    pub fn dt(&self) -> f64 {
        if self.warp {
            self.dt_warp
        } else {
            self.dt_normal
        }
    }

    pub fn warp(&self) -> bool {
        self.warp
    }

    /// Flip warp. Elapsed time keeps its value; only the step size changes.
    pub fn toggle_warp(&mut self) {
        self.warp = !self.warp;
    }

    /// Advance the clock by one tick
    pub fn advance(&mut self) {
        self.elapsed += self.dt();
    }

    /// Zero elapsed time and disengage warp
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.warp = false;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Whole mission minutes, truncating division
    pub fn elapsed_minutes(&self) -> u64 {
        (self.elapsed / 60.0) as u64
    }

    /// Whole mission days: floor(((mt / 60) / 60) / 24)
    pub fn elapsed_days(&self) -> u64 {
        (((self.elapsed / 60.0) / 60.0) / 24.0) as u64
    }
}

//! Build fully-initialized mission scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the mission controller:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the primary/secondary/vehicle trio at t = 0)
//! - the active gravity field (`GravityField`)

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::GravityField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Fully-initialized runtime bundle for one mission scenario
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: GravityField,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // in role order: primary, secondary, vehicle
        let system = System {
            bodies: [
                runtime_body(&cfg.primary),
                runtime_body(&cfg.secondary),
                runtime_body(&cfg.vehicle),
            ],
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            dt_warp: p_cfg.dt_warp,
            freq: p_cfg.freq,
            thrust: p_cfg.thrust,
            G: p_cfg.G,
        };

        let gravity = GravityField { G: parameters.G };

        Self {
            parameters,
            system,
            gravity,
        }
    }
}

fn runtime_body(bc: &BodyConfig) -> Body {
    Body {
        x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
        v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
        m: bc.m,
        radius: bc.radius,
    }
}

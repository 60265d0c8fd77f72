//! Position integrator (Verlet)
//!
//! velocity      = position - last_position
//! last_position = position
//! position     += velocity + acceleration * dt^2 / 2
//! acceleration  = 0

use crate::core::Vec2;
use crate::domain::{Body, EngineConfig};

use super::forces::{ForceContext, ForceRegistry};

/// Advance one body by `dt`. Static bodies are untouched.
#[inline]
pub fn integrate(body: &mut Body, dt: f64) {
    if body.is_static() {
        return;
    }
    let velocity = body.velocity();
    body.last_position = body.position;
    body.position = body.position + velocity + body.acceleration * (dt * dt / 2.0);
    body.acceleration = Vec2::ZERO;
}

/// Accumulate registered forces into every body, then integrate it.
///
/// `grips[i]` is the grip flag of `bodies[i]` sampled before anything moved
/// this frame.
pub fn integrate_all(
    bodies: &mut [Body],
    forces: &ForceRegistry,
    grips: &[bool],
    config: &EngineConfig,
    dt: f64,
) {
    engine_invariant!(
        grips.len() == bodies.len(),
        "grip flags out of sync: {} flags for {} bodies",
        grips.len(),
        bodies.len()
    );
    for (i, body) in bodies.iter_mut().enumerate() {
        if body.is_static() {
            continue;
        }
        let ctx = ForceContext {
            config,
            has_grip: grips.get(i).copied().unwrap_or(false),
        };
        forces.accumulate(body, &ctx);
        integrate(body, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyStyle, PlayerState};

    fn free_player(x: f64, y: f64) -> Body {
        Body::player(Vec2::new(x, y), 4.0, 8.0, PlayerState::new(0), BodyStyle::PLAYER_ONE)
    }

    fn gravity_only(g: f64) -> EngineConfig {
        EngineConfig {
            gravity: g,
            friction: 0.0,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn static_body_never_moves() {
        let config = EngineConfig::default();
        let forces = ForceRegistry::with_defaults();
        let mut bodies = vec![Body::wall(3.0, 4.0, 10.0, 2.0)];
        let start = bodies[0].position;
        for _ in 0..100 {
            integrate_all(&mut bodies, &forces, &[true], &config, 1.6);
        }
        assert_eq!(bodies[0].position, start);
        assert_eq!(bodies[0].last_position, start);
    }

    #[test]
    fn first_frame_from_rest_falls_half_g_dt_squared() {
        let config = gravity_only(10.0);
        let forces = ForceRegistry::with_defaults();
        let mut bodies = vec![free_player(10.0, 10.0)];
        integrate_all(&mut bodies, &forces, &[false], &config, 0.1);

        let dy = bodies[0].position.y - 10.0;
        assert!((dy - 10.0 * 0.1 * 0.1 / 2.0).abs() < 1e-12);
        assert_eq!(bodies[0].position.x, 10.0);
        assert_eq!(bodies[0].last_position, Vec2::new(10.0, 10.0));
        assert_eq!(bodies[0].acceleration, Vec2::ZERO);
    }

    #[test]
    fn fall_accelerates_with_friction_below_one() {
        let config = EngineConfig {
            gravity: 10.0,
            ..EngineConfig::default()
        };
        let forces = ForceRegistry::with_defaults();
        let mut bodies = vec![free_player(10.0, 10.0)];

        integrate_all(&mut bodies, &forces, &[false], &config, 0.1);
        let after_one = bodies[0].position.y - 10.0;
        integrate_all(&mut bodies, &forces, &[false], &config, 0.1);
        let after_two = bodies[0].position.y - 10.0;

        assert!(after_one > 0.0);
        assert!(after_two > after_one);
        // Second frame keeps the first frame's displacement (momentum).
        assert!(after_two - after_one > after_one);
    }

    #[test]
    fn momentum_persists_without_forces() {
        let mut body = free_player(0.0, 0.0);
        body.last_position = Vec2::new(-2.0, 1.0);
        integrate(&mut body, 1.0);
        assert_eq!(body.position, Vec2::new(2.0, -1.0));
        integrate(&mut body, 1.0);
        assert_eq!(body.position, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn impulse_is_consumed_once() {
        let mut body = free_player(0.0, 0.0);
        body.acceleration = Vec2::new(0.0, -0.4);
        integrate(&mut body, 2.0);
        assert!((body.position.y - (-0.8)).abs() < 1e-12);
        assert_eq!(body.acceleration, Vec2::ZERO);
        integrate(&mut body, 2.0);
        assert!((body.position.y - (-1.6)).abs() < 1e-12);
    }
}

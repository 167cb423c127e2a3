//! Damped spring smoothing for scroll-driven values.
//!
//! A second-order system integrated with semi-implicit Euler. `step` is the
//! whole filter: no hidden state, no animation-library black box. The hooks
//! feed it real frame deltas and stop ticking once `is_rest` holds.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    /// Distance from target below which the value may snap to rest.
    pub rest_delta: f64,
    /// Speed below which the value may snap to rest.
    pub rest_speed: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping, rest_delta: 0.001, rest_speed: 0.001 }
    }

    /// The fastest spring that does not overshoot: damping = 2·√stiffness.
    pub fn critically_damped(stiffness: f64) -> Self {
        Self::new(stiffness, 2.0 * stiffness.sqrt())
    }

    /// Advance `(position, velocity)` toward `target` by `dt` seconds.
    pub fn step(&self, position: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64) {
        let acceleration = self.stiffness * (target - position) - self.damping * velocity;
        let velocity = velocity + acceleration * dt;
        let position = position + velocity * dt;
        (position, velocity)
    }

    pub fn is_rest(&self, position: f64, velocity: f64, target: f64) -> bool {
        velocity.abs() < self.rest_speed && (target - position).abs() < self.rest_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn converges_and_comes_to_rest() {
        let spring = Spring::critically_damped(120.0);
        let (mut pos, mut vel) = (0.0, 0.0);
        let mut rested_at = None;
        for frame in 0..600 {
            let (p, v) = spring.step(pos, vel, 1.0, DT);
            pos = p;
            vel = v;
            if spring.is_rest(pos, vel, 1.0) {
                rested_at = Some(frame);
                break;
            }
        }
        let frame = rested_at.expect("spring never settled");
        assert!(frame < 300, "settled too slowly: {frame} frames");
        assert!((pos - 1.0).abs() < spring.rest_delta);
    }

    #[test]
    fn critically_damped_does_not_overshoot() {
        let spring = Spring::critically_damped(120.0);
        let (mut pos, mut vel) = (0.0, 0.0);
        for _ in 0..600 {
            let (p, v) = spring.step(pos, vel, 1.0, DT);
            pos = p;
            vel = v;
            assert!(pos <= 1.0 + 1e-9, "overshot to {pos}");
        }
    }

    #[test]
    fn tracks_a_moving_target() {
        let spring = Spring::critically_damped(120.0);
        let (mut pos, mut vel) = (0.0, 0.0);
        for _ in 0..120 {
            let (p, v) = spring.step(pos, vel, 0.5, DT);
            pos = p;
            vel = v;
        }
        for _ in 0..600 {
            let (p, v) = spring.step(pos, vel, 0.2, DT);
            pos = p;
            vel = v;
            if spring.is_rest(pos, vel, 0.2) {
                break;
            }
        }
        assert!((pos - 0.2).abs() < 0.01);
    }

    #[test]
    fn zero_dt_is_the_identity() {
        let spring = Spring::new(170.0, 26.0);
        assert_eq!(spring.step(0.3, 4.0, 1.0, 0.0), (0.3, 4.0));
    }

    #[test]
    fn at_rest_only_near_target_and_slow() {
        let spring = Spring::critically_damped(100.0);
        assert!(spring.is_rest(1.0, 0.0, 1.0));
        assert!(!spring.is_rest(0.5, 0.0, 1.0));
        assert!(!spring.is_rest(1.0, 5.0, 1.0));
    }
}

//! Easing curves
//!
//! The power family follows the usual naming of tweening engines:
//! power1 is quadratic, power2 cubic, power3 quartic and power4 quintic.

/// Easing function applied to a tween's normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in
    Power1In,
    /// Quadratic ease-out
    Power1Out,
    /// Cubic ease-in
    Power2In,
    /// Cubic ease-out
    Power2Out,
    /// Cubic ease-in-out
    Power2InOut,
    /// Quartic ease-in
    Power3In,
    /// Quartic ease-out
    Power3Out,
    /// Quintic ease-in
    Power4In,
    /// Quintic ease-out
    Power4Out,
    /// Cubic bezier with control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map linear progress `t` (clamped to 0..=1) through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power1In => ease_in(t, 2),
            Easing::Power1Out => ease_out(t, 2),
            Easing::Power2In => ease_in(t, 3),
            Easing::Power2Out => ease_out(t, 3),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Power3In => ease_in(t, 4),
            Easing::Power3Out => ease_out(t, 4),
            Easing::Power4In => ease_in(t, 5),
            Easing::Power4Out => ease_out(t, 5),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

fn ease_in(t: f32, power: i32) -> f32 {
    t.powi(power)
}

fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

/// Solve the bezier's x for `t` with Newton iterations, then evaluate y
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let bezier = |s: f32, p1: f32, p2: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let derivative = |s: f32, p1: f32, p2: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = t;
    for _ in 0..8 {
        let x = bezier(s, x1, x2) - t;
        let dx = derivative(s, x1, x2);
        if x.abs() < 1e-5 || dx.abs() < 1e-6 {
            break;
        }
        s = (s - x / dx).clamp(0.0, 1.0);
    }
    bezier(s, y1, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::Power1In,
        Easing::Power1Out,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::Power2InOut,
        Easing::Power3In,
        Easing::Power3Out,
        Easing::Power4In,
        Easing::Power4Out,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_out_curves_lead_in_curves() {
        assert!(Easing::Power4Out.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::Power3In.apply(0.3) < Easing::Linear.apply(0.3));
        assert!(Easing::Power4Out.apply(0.3) > Easing::Power2Out.apply(0.3));
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Power2Out.apply(-1.0), 0.0);
        assert_eq!(Easing::Power2Out.apply(3.0), 1.0);
    }
}

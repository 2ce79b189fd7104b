//! Animatable value types
//!
//! Provides the interpolation trait and the value type stored by tweens.

use atrium_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// A value a tween can drive
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Scalar(f32),
    Color(Color),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            PropertyValue::Scalar(v) => Some(*v),
            PropertyValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(c) => Some(*c),
            PropertyValue::Scalar(_) => None,
        }
    }
}

impl Interpolate for PropertyValue {
    /// Mismatched kinds jump to `other` instead of blending
    fn lerp(&self, other: &Self, t: f32) -> Self {
        match (self, other) {
            (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => {
                PropertyValue::Scalar(a.lerp(b, t))
            }
            (PropertyValue::Color(a), PropertyValue::Color(b)) => {
                PropertyValue::Color(Interpolate::lerp(a, b, t))
            }
            _ => *other,
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        match (self, other) {
            (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => a.approx_eq(b, epsilon),
            (PropertyValue::Color(a), PropertyValue::Color(b)) => a.approx_eq(b, epsilon),
            _ => false,
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        PropertyValue::Color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lerp() {
        let v = PropertyValue::Scalar(100.0).lerp(&PropertyValue::Scalar(0.0), 0.25);
        assert!(v.approx_eq(&PropertyValue::Scalar(75.0), 1e-4));
    }

    #[test]
    fn test_color_lerp() {
        let v = PropertyValue::from(Color::BLACK).lerp(&Color::WHITE.into(), 0.5);
        let c = v.as_color().unwrap();
        assert!((c.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_mismatched_kinds_snap_to_target() {
        let v = PropertyValue::Scalar(1.0).lerp(&Color::WHITE.into(), 0.1);
        assert_eq!(v, PropertyValue::Color(Color::WHITE));
    }
}

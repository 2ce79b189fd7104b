//! Animation targets
//!
//! A target is anything a tween can move: a panel, a background layer, a
//! label. Each target holds the visual properties the engine writes to and
//! the renderer reads from. Opacity and color are *inline overrides*: `None`
//! means "no override", so the stylesheet value applies, and a tween can
//! clear its override when it completes.

use atrium_core::Color;
use slotmap::new_key_type;

use crate::values::PropertyValue;

new_key_type! {
    /// Handle to a registered animation target
    pub struct TargetId;
}

/// A property a tween can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Horizontal translation as a percentage of the target's own width
    XPercent,
    /// Vertical translation as a percentage of the target's own height
    YPercent,
    /// Horizontal translation in pixels
    X,
    /// Vertical translation in pixels
    Y,
    /// Rotation in degrees
    Rotate,
    /// Inline opacity override
    Opacity,
    /// Inline color override
    Color,
    /// Free scalar, for values rendered as content (counters)
    Value,
}

/// The visual state of one target
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualProps {
    pub x_percent: f32,
    pub y_percent: f32,
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
    pub opacity: Option<f32>,
    pub color: Option<Color>,
    pub value: f32,
}

impl VisualProps {
    /// Read a property; cleared opacity reads as fully opaque and cleared
    /// color as `base_color`
    pub fn get(&self, property: Property, base_color: Color) -> PropertyValue {
        match property {
            Property::XPercent => PropertyValue::Scalar(self.x_percent),
            Property::YPercent => PropertyValue::Scalar(self.y_percent),
            Property::X => PropertyValue::Scalar(self.x),
            Property::Y => PropertyValue::Scalar(self.y),
            Property::Rotate => PropertyValue::Scalar(self.rotate),
            Property::Opacity => PropertyValue::Scalar(self.opacity.unwrap_or(1.0)),
            Property::Color => PropertyValue::Color(self.color.unwrap_or(base_color)),
            Property::Value => PropertyValue::Scalar(self.value),
        }
    }

    /// Write a property; a value of the wrong kind is ignored
    pub fn set(&mut self, property: Property, value: PropertyValue) {
        match (property, value) {
            (Property::XPercent, PropertyValue::Scalar(v)) => self.x_percent = v,
            (Property::YPercent, PropertyValue::Scalar(v)) => self.y_percent = v,
            (Property::X, PropertyValue::Scalar(v)) => self.x = v,
            (Property::Y, PropertyValue::Scalar(v)) => self.y = v,
            (Property::Rotate, PropertyValue::Scalar(v)) => self.rotate = v,
            (Property::Opacity, PropertyValue::Scalar(v)) => self.opacity = Some(v),
            (Property::Color, PropertyValue::Color(c)) => self.color = Some(c),
            (Property::Value, PropertyValue::Scalar(v)) => self.value = v,
            (property, value) => {
                tracing::debug!("ignoring {:?} written to {:?}", value, property);
            }
        }
    }

    /// Remove an inline override; transforms reset to zero
    pub fn clear(&mut self, property: Property) {
        match property {
            Property::XPercent => self.x_percent = 0.0,
            Property::YPercent => self.y_percent = 0.0,
            Property::X => self.x = 0.0,
            Property::Y => self.y = 0.0,
            Property::Rotate => self.rotate = 0.0,
            Property::Opacity => self.opacity = None,
            Property::Color => self.color = None,
            Property::Value => self.value = 0.0,
        }
    }
}

/// A registered target: its props plus the base color cleared overrides fall back to
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Target {
    pub props: VisualProps,
    pub base_color: Color,
}

impl Target {
    pub fn get(&self, property: Property) -> PropertyValue {
        self.props.get(property, self.base_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_opacity_reads_opaque() {
        let mut props = VisualProps::default();
        props.set(Property::Opacity, PropertyValue::Scalar(0.0));
        assert_eq!(props.opacity, Some(0.0));

        props.clear(Property::Opacity);
        assert_eq!(props.opacity, None);
        assert_eq!(
            props.get(Property::Opacity, Color::BLACK),
            PropertyValue::Scalar(1.0)
        );
    }

    #[test]
    fn test_wrong_kind_is_ignored() {
        let mut props = VisualProps::default();
        props.set(Property::XPercent, PropertyValue::Color(Color::WHITE));
        assert_eq!(props.x_percent, 0.0);
    }
}

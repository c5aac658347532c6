//! Node registry: the fixed vocabulary of node types a host can wire.
//!
//! Hosts register nodes under a stable type name and show users a display
//! name; [`NodeKind`] carries both.

use std::fmt;
use std::str::FromStr;

use crate::NodeError;

/// The five adjustment node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Brightness/contrast adjustment.
    BrightnessContrast,
    /// Black/white point levels remap.
    Levels,
    /// Hue rotation and saturation scale.
    HueSaturation,
    /// Per-luminance-band color balance.
    ColorBalance,
    /// Perspective transform (stub).
    PerspectiveTransform,
}

impl NodeKind {
    /// All node kinds, in registration order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::BrightnessContrast,
        NodeKind::Levels,
        NodeKind::HueSaturation,
        NodeKind::ColorBalance,
        NodeKind::PerspectiveTransform,
    ];

    /// Stable host registration key.
    pub fn type_name(self) -> &'static str {
        match self {
            NodeKind::BrightnessContrast => "BrightnessContrastNode",
            NodeKind::Levels => "LevelsNode",
            NodeKind::HueSaturation => "HueSaturationNode",
            NodeKind::ColorBalance => "ColorBalanceNode",
            NodeKind::PerspectiveTransform => "PerspectiveTransformNode",
        }
    }

    /// Human-readable name shown in a host's node palette.
    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::BrightnessContrast => "Brightness/Contrast",
            NodeKind::Levels => "Levels",
            NodeKind::HueSaturation => "Hue/Saturation",
            NodeKind::ColorBalance => "Color Balance",
            NodeKind::PerspectiveTransform => "Perspective Transform",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NodeKind {
    type Err = NodeError;

    /// Parses a host registration key (`type_name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.type_name() == s)
            .ok_or_else(|| NodeError::UnknownNode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_roundtrip() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.type_name().parse::<NodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "GaussianBlurNode".parse::<NodeKind>().unwrap_err();
        assert!(matches!(err, NodeError::UnknownNode(_)));
    }

    #[test]
    fn display_names() {
        assert_eq!(
            NodeKind::BrightnessContrast.to_string(),
            "Brightness/Contrast"
        );
        assert_eq!(
            NodeKind::PerspectiveTransform.display_name(),
            "Perspective Transform"
        );
    }

    #[test]
    fn registry_is_complete() {
        assert_eq!(NodeKind::ALL.len(), 5);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::{BrightnessContrastNode, ColorBalanceNode};

    #[test]
    fn node_kind_roundtrips_through_json() {
        for kind in NodeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: NodeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn params_roundtrip_through_json() {
        let bc = BrightnessContrastNode::new(-12.5, 1.4);
        let json = serde_json::to_string(&bc).unwrap();
        assert_eq!(serde_json::from_str::<BrightnessContrastNode>(&json).unwrap(), bc);

        let cb = ColorBalanceNode::new([1.0, 2.0, 3.0], [0.0; 3], [-4.0, 0.0, 4.0]);
        let json = serde_json::to_string(&cb).unwrap();
        assert_eq!(serde_json::from_str::<ColorBalanceNode>(&json).unwrap(), cb);
    }
}

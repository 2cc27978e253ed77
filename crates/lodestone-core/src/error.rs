//! Error types for placement edits

use thiserror::Error;

use crate::{Axis, ComponentKind, Plane};

/// Core Lodestone errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LodestoneError {
    // Invalid arguments
    #[error("Invalid plane: {0:?} given twice")]
    DegeneratePlane(Axis),

    #[error("Invalid plane: expected 2 distinct axes, got {0}")]
    PlaneArity(usize),

    #[error("Invalid rotation: {degree} is not a multiple of {step} degrees about {axis:?}")]
    DegreeNotMultiple { axis: Axis, degree: f64, step: f64 },

    #[error("Invalid rotation: degree {0} is not finite")]
    NonFiniteDegree(f64),

    // Unsupported operations
    #[error("Unsupported rotation about {axis:?} for {kind:?}")]
    UnsupportedRotation { kind: ComponentKind, axis: Axis },

    #[error("Unsupported mirror across {plane} for {kind:?}")]
    UnsupportedMirror { kind: ComponentKind, plane: Plane },

    // Placement errors
    #[error("Invalid placement for {block}: {source}")]
    PlacementInvalid {
        block: &'static str,
        #[source]
        source: Box<LodestoneError>,
    },
}

impl LodestoneError {
    /// Argument was malformed (bad plane, bad degree)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LodestoneError::DegeneratePlane(_)
                | LodestoneError::PlaneArity(_)
                | LodestoneError::DegreeNotMultiple { .. }
                | LodestoneError::NonFiniteDegree(_)
        )
    }

    /// Operation is not legal for the component that received it
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            LodestoneError::UnsupportedRotation { .. } | LodestoneError::UnsupportedMirror { .. }
        )
    }

    pub fn is_placement_invalid(&self) -> bool {
        matches!(self, LodestoneError::PlacementInvalid { .. })
    }
}

/// Result type for Lodestone operations
pub type LodestoneResult<T> = Result<T, LodestoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(LodestoneError::PlaneArity(3).is_invalid_argument());
        assert!(!LodestoneError::PlaneArity(3).is_unsupported());

        let unsupported = LodestoneError::UnsupportedRotation {
            kind: ComponentKind::Facing,
            axis: Axis::X,
        };
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_invalid_argument());

        let placement = LodestoneError::PlacementInvalid {
            block: "chest",
            source: Box::new(unsupported),
        };
        assert!(placement.is_placement_invalid());
        assert!(!placement.is_unsupported());
    }

    #[test]
    fn test_error_messages() {
        let err = LodestoneError::DegreeNotMultiple {
            axis: Axis::X,
            degree: 90.0,
            step: 180.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid rotation: 90 is not a multiple of 180 degrees about X"
        );
    }
}

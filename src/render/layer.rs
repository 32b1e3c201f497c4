use serde::{Deserialize, Serialize};

/// Logical layer a draw command belongs to.
///
/// Replay paints whole layers bottom to top, so builders may push commands
/// in any order. Tests and hosts use the tag to pick out the data marks
/// without matching geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
    Axis,
    Label,
    Legend,
    Overlay,
}

impl CanvasLayerKind {
    #[must_use]
    pub fn paint_order() -> [Self; 6] {
        [
            Self::Grid,
            Self::Series,
            Self::Axis,
            Self::Label,
            Self::Legend,
            Self::Overlay,
        ]
    }
}

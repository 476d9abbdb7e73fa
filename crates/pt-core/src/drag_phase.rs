use crate::{CoreError, Result as CoreErrorResult};

/// Where a single drag gesture currently is.
///
/// ```text
/// Idle -> Dragging -> Hovering -> Dropped
///                        ^  |
///                        |  v
///                  LeftWithoutDrop
/// ```
/// Any phase after `Idle` can move to `Ended` when the source's drag finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Hovering,
    Dropped,
    LeftWithoutDrop,
    Ended,
}

impl DragPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Hovering => "hovering",
            Self::Dropped => "dropped",
            Self::LeftWithoutDrop => "left_without_drop",
            Self::Ended => "ended",
        }
    }

    pub fn can_transition_to(&self, next: DragPhase) -> bool {
        use DragPhase::*;

        matches!(
            (*self, next),
            (Idle, Dragging)
                | (Dragging, Hovering)
                // dragover repeats while the pointer stays over a target
                | (Hovering, Hovering)
                | (Hovering, Dropped)
                | (Hovering, LeftWithoutDrop)
                | (LeftWithoutDrop, Hovering)
                | (Dragging | Hovering | LeftWithoutDrop | Dropped, Ended)
        )
    }

    #[track_caller]
    pub fn transition(self, next: DragPhase) -> CoreErrorResult<DragPhase> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::drag_transition(self, next))
        }
    }

    /// The gesture is over and no further events are accepted
    pub fn is_terminal(&self) -> bool {
        *self == Self::Ended
    }
}

impl std::fmt::Display for DragPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

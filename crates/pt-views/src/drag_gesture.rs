use crate::{DragTarget, Draggable, Result as ViewErrorResult};

use pt_core::{CoreError, DataTransfer, DragPhase};

use log::debug;

/// One drag gesture from a source to (possibly) a target.
///
/// Feeds the source and target handlers in the order a browser would and
/// refuses event sequences that cannot happen, such as a drop before the
/// target accepted the hover.
#[derive(Debug, Default)]
pub struct DragGesture {
    phase: DragPhase,
    transfer: DataTransfer,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Idle -> Dragging: the source fills the payload
    pub fn start(&mut self, source: &dyn Draggable) -> ViewErrorResult<()> {
        self.phase = self.phase.transition(DragPhase::Dragging)?;
        source.drag_start_handler(&mut self.transfer);
        debug!("Drag started with payload types {:?}", self.transfer.types());
        Ok(())
    }

    /// The pointer is over `target`. Returns whether the target accepted the
    /// hover; a refused hover leaves the phase unchanged.
    pub fn drag_over(&mut self, target: &dyn DragTarget) -> ViewErrorResult<bool> {
        if !self.phase.can_transition_to(DragPhase::Hovering) {
            return Err(CoreError::drag_transition(self.phase, DragPhase::Hovering).into());
        }

        let accepted = target.drag_over_handler(&self.transfer);
        if accepted {
            self.phase = DragPhase::Hovering;
        }
        Ok(accepted)
    }

    /// Hovering -> Dropped: the target consumes the payload
    pub fn drop_on(&mut self, target: &dyn DragTarget) -> ViewErrorResult<()> {
        self.phase = self.phase.transition(DragPhase::Dropped)?;
        target.drop_handler(&self.transfer);
        Ok(())
    }

    /// The pointer left `target` without dropping
    pub fn leave(&mut self, target: &dyn DragTarget) -> ViewErrorResult<()> {
        match self.phase {
            DragPhase::Hovering => self.phase = DragPhase::LeftWithoutDrop,
            // The target never accepted the hover, so there is nothing to undo
            DragPhase::Dragging | DragPhase::LeftWithoutDrop => {}
            phase => {
                return Err(CoreError::drag_transition(phase, DragPhase::LeftWithoutDrop).into());
            }
        }

        target.drag_leave_handler(&self.transfer);
        Ok(())
    }

    /// The source's drag is over, dropped or not
    pub fn end(&mut self, source: &dyn Draggable) -> ViewErrorResult<()> {
        self.phase = self.phase.transition(DragPhase::Ended)?;
        source.drag_end_handler(&self.transfer);
        Ok(())
    }
}

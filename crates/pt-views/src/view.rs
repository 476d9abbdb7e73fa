//! Capabilities a view can offer. Each concrete view implements the ones it
//! needs instead of extending a common base.

use pt_core::DataTransfer;

/// Wire the view to its event sources (store subscriptions, handlers)
pub trait Configurable {
    fn configure(&self);
}

/// Fill in the view's static content
pub trait Renderable {
    fn render_content(&self);
}

/// Something that can be picked up and dragged
pub trait Draggable {
    fn drag_start_handler(&self, transfer: &mut DataTransfer);

    fn drag_end_handler(&self, transfer: &DataTransfer);
}

/// Something that can receive a dragged payload
pub trait DragTarget {
    /// Called repeatedly while a drag is over the target. Returns true to
    /// accept the hover, which is what makes a drop possible.
    fn drag_over_handler(&self, transfer: &DataTransfer) -> bool;

    fn drop_handler(&self, transfer: &DataTransfer);

    fn drag_leave_handler(&self, transfer: &DataTransfer);
}

mod picking_event;

pub use picking_event::{PickingEvent, PickingIntersection};

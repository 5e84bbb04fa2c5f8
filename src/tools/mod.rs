//! Gesture tools attached to chart views.

pub mod listeners;
pub mod move_tool;
pub mod pan;
pub mod zoom;

pub use listeners::{ListenerId, ListenerRegistry};
pub use move_tool::{GestureMode, MoveEvent, MoveTool, OverlayWindow, DEFAULT_DRAG_THRESHOLD_DP};
pub use pan::{PanEvent, PanTool};
pub use zoom::{ZoomEvent, ZoomTool};

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod input;
pub mod panels;
pub mod registry;
pub mod renderer;
pub mod stroke;
pub mod whiteboard;

pub use app::WhiteboardApp;
pub use canvas::Canvas;
pub use config::{BrushConfig, WhiteboardConfig};
pub use error::{WhiteboardError, WhiteboardResult};
pub use event::{BoardEvent, EventBus, EventKind};
pub use geometry::SurfaceGeometry;
pub use history::StrokeHistory;
pub use registry::{FrameLayout, LayoutHost, Mount, PressTarget, WhiteboardId, WhiteboardRegistry};
pub use renderer::{DisplayList, Renderer, Surface};
pub use stroke::{NormPos, Stroke};
pub use whiteboard::Whiteboard;

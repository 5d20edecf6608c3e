#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod label;
pub mod renderer;
pub mod session;
pub mod stroke;
pub mod tools;

pub use app::SketchApp;
pub use canvas::{CanvasState, Snapshot, StrokeView};
pub use config::{LabelConfig, SketchConfig};
pub use error::{SketchError, SketchResult};
pub use input::{DragEvent, DragSample, InputHandler};
pub use label::TextLabel;
pub use renderer::{Renderer, StrokePath};
pub use session::{Mode, SketchSession};
pub use stroke::{Stroke, StrokeHandle};

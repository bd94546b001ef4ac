pub mod app;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod view;
pub mod window;

pub use renderer::Renderer;
pub use surface::{Point, Stroke, Surface};

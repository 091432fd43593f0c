pub mod highlight;
pub mod recording;
pub mod renderer;

pub use highlight::HighlightController;
pub use recording::{RecordingRenderer, RenderCall};
pub use renderer::{Renderer, RendererError};

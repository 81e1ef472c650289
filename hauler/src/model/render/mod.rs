mod geojson_renderer;
mod renderer;

pub use geojson_renderer::GeoJsonRenderer;
pub use renderer::{RenderError, RouteRenderer};

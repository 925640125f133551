// Library exports for the binary and integration tests
pub mod batch;
pub mod constants;
pub mod draw;
pub mod error;
pub mod icon;

pub use batch::{generate_icons, icon_path, print_summary};
pub use error::RenderError;
pub use icon::{render_icon, IconGeometry, StrokeWidths};

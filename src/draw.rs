mod config;
mod drawer;
mod error;
pub mod svg;

pub use config::DrawConfig;
pub use drawer::GraphDrawer;
pub use error::DrawError;

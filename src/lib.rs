pub mod draw;
pub mod graph;
pub mod util;

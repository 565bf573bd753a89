pub mod canvas;
pub mod vis2d;

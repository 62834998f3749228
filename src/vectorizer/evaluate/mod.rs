pub mod matrix;
pub mod scoring;

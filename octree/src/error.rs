use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OctreeError {
    #[error("size must be finite and greater than zero (size: {size})")]
    InvalidSize { size: f64 },
    #[error(
        "pregen_levels may not be bigger than total_levels (pregen_levels: {pregen_levels}, total_levels: {total_levels})"
    )]
    PregenExceedsTotal { pregen_levels: u8, total_levels: u8 },
    #[error("position must be finite (x: {x}, y: {y}, z: {z})")]
    InvalidPosition { x: f64, y: f64, z: f64 },
    #[error("failed to build find worker pool: {message}")]
    ThreadPool { message: String },
    #[error("entity not found")]
    NotFound,
}

pub type OctreeResult<T> = Result<T, OctreeError>;

impl OctreeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OctreeError::NotFound)
    }
}

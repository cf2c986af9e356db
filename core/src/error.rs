use thiserror::Error;

/// An error raised while configuring a window.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("window size {width}x{height} is invalid")]
    InvalidSize { width: i32, height: i32 },
    #[error("window size {width}x{height} is below the minimum of {min_width}x{min_height}")]
    BelowMinimumSize {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}

//! Integer geometry used by widgets and windows.

/// Two-dimensional integer point, in pixels.
pub type Point = euclid::Point2D<i32, euclid::UnknownUnit>;
/// Two-dimensional integer size, in pixels.
pub type Size = euclid::Size2D<i32, euclid::UnknownUnit>;
/// Two-dimensional integer rectangle; a widget's position and size.
pub type Rect = euclid::Rect<i32, euclid::UnknownUnit>;
/// Two-dimensional floating-point vector, used for scroll deltas.
pub type Vector = euclid::Vector2D<f32, euclid::UnknownUnit>;

/// A zero-sized rectangle at the origin.
#[inline]
pub fn zero_rect() -> Rect {
    Rect::new(Point::new(0, 0), Size::new(0, 0))
}

/// Returns true if `(x, y)` lies in `[0, size.width) x [0, size.height)`.
///
/// The right and bottom edges are excluded.
#[inline]
pub fn local_contains(size: Size, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && x < size.width && y < size.height
}

//! Value types shared by the three generators: 2D points, line segments,
//! packed RGB colors and complex numbers.

use crate::error::FractalError;
use std::ops::{Add, Mul};

/// A 2D coordinate in the caller's drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Endpoint of a polar step from this point: length `len` at `angle`
    /// degrees, with positive angles pointing visually upward (y grows
    /// downward in the drawing space).
    pub fn polar_offset(&self, len: f64, angle_degrees: f64) -> Point {
        let radians = angle_degrees.to_radians();
        Point::new(
            self.x + len * radians.cos(),
            self.y - len * radians.sin(),
        )
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Role of a segment in the generated figure. The renderer decides what RGB
/// value each tag maps to; the generators only classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Leaf,
    Branch,
    Plain,
}

/// One straight line to be drawn. Produced by the generators, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub tag: ColorTag,
}

impl Segment {
    pub fn new(from: Point, to: Point, tag: ColorTag) -> Self {
        Self { from, to, tag }
    }
}

/// Packed 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Parses `"#RRGGBB"` into a packed color.
    pub fn from_hex(hex: &str) -> Result<Color, FractalError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| FractalError::MalformedHexColor(hex.to_string()))?;
        if digits.len() != 6 {
            return Err(FractalError::MalformedHexColor(hex.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| FractalError::MalformedHexColor(hex.to_string()))?;
        Ok(Color(packed))
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }
}

/// Complex number used by the escape-time iteration. Plain f64 pair, copied
/// by value, no aliasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared magnitude; the escape test compares this against 4.0 to avoid
    /// the square root.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn magnitude(&self) -> f64 {
        self.norm_sqr().sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polar_offset_up_is_negative_y() {
        let p = Point::new(10.0, 20.0);
        let up = p.polar_offset(5.0, 90.0);
        assert_relative_eq!(up.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_offset_right() {
        let p = Point::new(0.0, 0.0);
        let right = p.polar_offset(3.0, 0.0);
        assert_relative_eq!(right.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#04182B").unwrap();
        assert_eq!(c, Color(0x04182B));
        assert_eq!(c.r(), 0x04);
        assert_eq!(c.g(), 0x18);
        assert_eq!(c.b(), 0x2B);
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("04182B").is_err()); // missing '#'
        assert!(Color::from_hex("#04182").is_err()); // too short
        assert!(Color::from_hex("#04182BFF").is_err()); // too long
        assert!(Color::from_hex("#GG0000").is_err()); // not hex
    }

    #[test]
    fn test_complex_add() {
        let z = Complex::new(1.0, 2.0) + Complex::new(3.0, -4.0);
        assert_relative_eq!(z.re, 4.0);
        assert_relative_eq!(z.im, -2.0);
    }

    #[test]
    fn test_complex_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        let z = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_relative_eq!(z.re, -5.0);
        assert_relative_eq!(z.im, 10.0);
    }

    #[test]
    fn test_complex_magnitude() {
        let z = Complex::new(3.0, 4.0);
        assert_relative_eq!(z.norm_sqr(), 25.0);
        assert_relative_eq!(z.magnitude(), 5.0);
    }
}

//! Rasterization helpers for the demo binary.
//!
//! The generators only emit segments and color grids; turning those into
//! pixels is the caller's job. This module is that caller: Bresenham line
//! drawing into an `ImageBuffer` and a straight blit for the Mandelbrot grid.

use crate::geometry::{Color, ColorTag, Segment};
use image::{ImageBuffer, Rgb, RgbImage};
use ndarray::Array2;

/// Colors of recursive tree segments (leaves are level `order`).
pub const LEAF_COLOR: Color = Color(0x2E8B57);
pub const BRANCH_COLOR: Color = Color(0x8B7765);
pub const PLAIN_COLOR: Color = Color(0x000000);

fn display_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Leaf => LEAF_COLOR,
        ColorTag::Branch => BRANCH_COLOR,
        ColorTag::Plain => PLAIN_COLOR,
    }
}

/// Draws segments onto a white canvas of the given dimensions.
pub fn rasterize_segments(segments: &[Segment], width: u32, height: u32) -> RgbImage {
    let mut img = ImageBuffer::from_pixel(width, height, Rgb([0xFF, 0xFF, 0xFF]));
    for segment in segments {
        let color = display_color(segment.tag);
        draw_line(
            &mut img,
            segment.from.x.round() as i32,
            segment.from.y.round() as i32,
            segment.to.x.round() as i32,
            segment.to.y.round() as i32,
            color,
        );
    }
    img
}

/// Copies a color grid into an image, one cell per pixel.
pub fn rasterize_grid(grid: &Array2<Color>) -> RgbImage {
    let (height, width) = grid.dim();
    let mut img = ImageBuffer::new(width as u32, height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = grid[(y as usize, x as usize)];
        *pixel = Rgb([color.r(), color.g(), color.b()]);
    }
    img
}

fn draw_line(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let rgb = Rgb([color.r(), color.g(), color.b()]);
    let (width, height) = (img.width() as i32, img.height() as i32);
    let mut x0 = x0;
    let mut y0 = y0;
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && x0 < width && y0 >= 0 && y0 < height {
            img.put_pixel(x0 as u32, y0 as u32, rgb);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

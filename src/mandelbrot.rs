//! Mandelbrot escape-time field.
//!
//! Builds coordinate planes for the requested view (meshgrid style), then
//! fills an `Array2<Color>` pixel grid in parallel; every cell's iteration is
//! independent, so rows and cells can be computed in any order.

use crate::error::FractalError;
use crate::geometry::{Color, Complex};
use crate::palette::build_palette;
use ndarray::{Array1, Array2, Zip};

/// Cells the reference leaves untouched (escaped points in solid-color mode)
/// keep the white background of the drawing surface.
pub const BACKGROUND: Color = Color(0xFFFFFF);

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid
fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let nx = x.len();
    let ny = y.len();

    let mut x_grid = Array2::zeros((ny, nx));
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    let mut y_grid = Array2::zeros((ny, nx));
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

/// Runs `z = z*z + c` from `z = 0` and returns the number of steps taken
/// before the squared magnitude exceeded 4, or `max_iterations` if it never
/// did (the point is assumed to be in the set).
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut n = 0;
    while n < max_iterations {
        if z.norm_sqr() > 4.0 {
            return n;
        }
        z = z * z + c;
        n += 1;
    }
    max_iterations
}

/// Computes the escape-time color field for the view whose top-left cell maps
/// to `(min_x, min_y)` and whose cells step by `(inc_x, inc_y)`.
///
/// `fixed_color` switches the whole field into solid-color mode: points that
/// never escape get `fixed_color`, and escaped points keep the background.
/// Without it, escaped points cycle through the palette by escape count and
/// in-set points get the first palette entry.
#[allow(clippy::too_many_arguments)]
pub fn compute_field(
    min_x: f64,
    inc_x: f64,
    min_y: f64,
    inc_y: f64,
    width: usize,
    height: usize,
    max_iterations: u32,
    fixed_color: Option<Color>,
) -> Result<Array2<Color>, FractalError> {
    if width == 0 || height == 0 {
        return Err(FractalError::InvalidDimensions { width, height });
    }
    let palette = build_palette()?;

    let xs = Array1::from_shape_fn(width, |col| min_x + col as f64 * inc_x);
    let ys = Array1::from_shape_fn(height, |row| min_y + row as f64 * inc_y);
    let (x_grid, y_grid) = meshgrid(&xs, &ys);

    let mut pixels = Array2::from_elem((height, width), BACKGROUND);
    Zip::from(&mut pixels)
        .and(&x_grid)
        .and(&y_grid)
        .par_for_each(|pixel, &re, &im| {
            let n = escape_iterations(Complex::new(re, im), max_iterations);
            *pixel = if n == max_iterations {
                fixed_color.unwrap_or_else(|| palette.first())
            } else if fixed_color.is_none() {
                palette.color_for(n)
            } else {
                BACKGROUND
            };
        });

    Ok(pixels)
}

mod error;
mod geometry;
mod mandelbrot;
mod palette;
mod render;
mod sierpinski;
mod tree;

use geometry::Point;
use mandelbrot::compute_field;
use render::{rasterize_grid, rasterize_segments};
use sierpinski::generate_sierpinski;
use tree::generate_tree;

fn main() {
    println!("Generating Sierpinski triangle...");
    let triangle =
        generate_sierpinski(Point::new(40.0, 40.0), 720.0, 7).expect("valid triangle parameters");
    rasterize_segments(&triangle, 800, 700)
        .save("sierpinski.png")
        .expect("write sierpinski.png");

    println!("Generating recursive tree...");
    let tree = generate_tree(Point::new(100.0, 50.0), 600.0, 6).expect("valid tree parameters");
    rasterize_segments(&tree, 800, 700)
        .save("tree.png")
        .expect("write tree.png");

    println!("Generating Mandelbrot set...");
    let (width, height) = (800usize, 600usize);
    let (min_x, max_x) = (-2.5, 1.0);
    let (min_y, max_y) = (-1.2, 1.2);
    let inc_x = (max_x - min_x) / width as f64;
    let inc_y = (max_y - min_y) / height as f64;
    let grid = compute_field(min_x, inc_x, min_y, inc_y, width, height, 200, None)
        .expect("valid field parameters");
    rasterize_grid(&grid)
        .save("mandelbrot.png")
        .expect("write mandelbrot.png");

    println!("Saved sierpinski.png, tree.png and mandelbrot.png");
}

/// Basic example: Convert a simple test image to ASCII text
///
/// This creates a test image with some basic shapes and prints the
/// rendered character grid to stdout
use ascii_etch::{LumaMapper, RenderConfig, render};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Etch - Basic Example");
    println!("==========================\n");

    // Create a simple 64x32 test image
    let width = 64;
    let height = 32;
    let mut img = RgbaImage::new(width, height);

    // Fill with gray background
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, Rgba([100, 100, 100, 255]));
        }
    }

    // Draw a white circle in the center on a transparent band
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 12.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = (y as f32 - center_y) * 2.0; // terminal cells are tall
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // White circle
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if dist < radius + 3.0 {
                // Transparent halo, rendered as blank space
                img.put_pixel(x, y, Rgba([200, 10, 10, 0]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let mapper = LumaMapper::new(RenderConfig::default()).expect("default config is valid");

    let mut sink = Vec::new();
    render(&img, &mapper, &mut sink).expect("Failed to render");

    println!("{}", String::from_utf8(sink).expect("ramp output is ASCII"));
    println!("ASCII conversion complete!");
}

//! Example: Generate a hexagrid
//!
//! Demonstrates the basic usage of the generation pipeline.

use hexagrid::*;

fn main() {
    println!("Hexagrid Generation Example");
    println!("===========================\n");

    // Create a configuration for a small grid
    let config = GridConfigBuilder::new()
        .seed(42)
        .side_size(8)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Side Size: {}", config.side_size);
    println!("  Lattice Points: {}", config.lattice_point_count());
    println!("  Search Budget: {}", config.search_iteration_count);
    println!();

    // Generate the grid
    println!("Generating grid...");
    let grid = HexGrid::generate(config).expect("Failed to generate grid");

    let paired = grid.base_quads().len();
    let leftover = grid.triangles().iter().filter(|t| t.active).count();
    println!(
        "Generated {} points and {} quads ({} merged pairs, {} leftover triangles)\n",
        grid.point_count(),
        grid.quad_count(),
        paired,
        leftover
    );

    // Analyze the generated quads
    let areas: Vec<f64> = (0..grid.quad_count())
        .filter_map(|i| grid.quad_area(i))
        .collect();
    let mean = areas.iter().sum::<f64>() / areas.len() as f64;
    let min = areas.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = areas.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    println!("Statistics:");
    println!("  Total area: {:.6}", grid.total_area());
    println!("  Quad area mean: {:.6}, min: {:.6}, max: {:.6}", mean, min, max);
    println!();

    // Show details for the first few quads
    println!("Sample quads:");
    for index in 0..5.min(grid.quad_count()) {
        let center = grid.quad_center(index).unwrap();
        println!(
            "  Quad {}: center=({:.3}, {:.3}), vertices={:?}",
            index,
            center.x,
            center.y,
            grid.quads()[index].vertices
        );
    }

    println!("\nGeneration complete!");
}

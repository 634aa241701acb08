//! Demonstration of the relaxation sweeps

use hexagrid::*;

fn main() -> Result<()> {
    println!("Generating grid...");

    let config = GridConfigBuilder::new()
        .seed(42)
        .side_size(12)?
        .force_circle_shape(true)
        .build()?;

    let mut grid = HexGrid::generate(config)?;
    println!("Generated {} quads", grid.quad_count());

    let spread = |grid: &HexGrid| {
        let areas: Vec<f64> = (0..grid.quad_count())
            .filter_map(|i| grid.quad_area(i))
            .collect();
        let mean = areas.iter().sum::<f64>() / areas.len() as f64;
        let variance =
            areas.iter().map(|a| (a - mean) * (a - mean)).sum::<f64>() / areas.len() as f64;
        variance.sqrt() / mean
    };

    println!("\nQuad area spread before relaxation: {:.4}", spread(&grid));

    // Weighted sweeps even out cell sizes, boundary sweeps round the rim
    for step in 1..=50 {
        let displacement = grid.relax_weighted();
        grid.relax_boundary();
        if step % 10 == 0 {
            println!(
                "  after {} sweeps: spread {:.4}, max displacement {:.6}",
                step,
                spread(&grid),
                displacement
            );
        }
    }

    println!("Quad area spread after relaxation: {:.4}", spread(&grid));

    // Convergence-driven smoothing on a fresh grid
    println!("\n=== Convergence-driven relaxation ===");
    let mut fresh = HexGrid::generate(*grid.config())?;
    let iterations = fresh.relax_until(RelaxOptions::default());
    println!("Converged after {} uniform sweeps", iterations);

    #[cfg(feature = "spatial-index")]
    {
        fresh.rebuild_spatial_index();
        let quad = fresh.find_quad_at(DVec2::new(0.25, -0.1));
        println!("Quad under (0.25, -0.1): {}", quad);
    }

    Ok(())
}

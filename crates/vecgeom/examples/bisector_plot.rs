//! Render two vectors, their bisector, and the split of the first onto the second.
//!
//! Usage: cargo run -p vecgeom --example bisector_plot -- [out.png]

use std::path::PathBuf;

use vecgeom::prelude::*;

fn main() -> Result<(), PlotError> {
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bisector.png"));

    let a = Vec2::new(3.0, 1.0);
    let b = Vec2::new(1.0, 2.0);
    let bis = unit_vector(get_bisector(a, b)) * 3.0;
    let split = decompose(a, b);

    println!(
        "angle(a,b) = {:.4} rad, a above slope of b: {}",
        angle_between(a, b),
        is_vector_endpoint_above_vector_slope(a, b)
    );
    plot_vectors(
        &[a, b, bis, split.parallel, split.perpendicular],
        &["b", "r", "k", "orange", "purple"],
        &out,
        &PlotCfg::default(),
    )?;
    println!("wrote {}", out.display());
    Ok(())
}

/// Diagnostic tool to verify the fit → arrange → group → divvy pipeline
use palette_layout::fit::fit_partition_with_slivers;
use palette_layout::geometry::{position_blocks, Frame, PALETTE_GAP};
use palette_layout::layout::arrange::{apply_order, redistribute_slivers};
use palette_layout::layout::blocks::group_slices;
use palette_layout::layout::divvy::divvy_heights;

const SLICES: u32 = 24;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("palette_layout=debug".parse().unwrap()),
        )
        .init();

    let mut weights = Vec::new();
    for arg in std::env::args().skip(1) {
        weights.push(arg.parse::<f64>().map_err(|e| anyhow::anyhow!("bad weight '{arg}': {e}"))?);
    }
    if weights.is_empty() {
        weights = vec![2.0, 2.0, 11.0, 11.0, 11.0, 11.0];
    }

    println!("=== DIAGNOSTIC: Fit → Arrange → Divvy Pipeline ===");
    println!("Weights: {:?} ({} slices)", weights, SLICES);

    // Fit
    let partition = fit_partition_with_slivers(SLICES, &weights)?;
    println!(
        "\n[1] Fitted partition: {:?} (sum={})",
        partition,
        partition.iter().sum::<u32>()
    );

    // Settle slivers away from the ends, carrying the weights along the
    // same way the renderer carries its colors
    let order = redistribute_slivers(&partition)?;
    let partition = apply_order(&order, &partition);
    let weights = apply_order(&order, &weights);
    println!("\n[2] Sliver arrangement: order {:?}", order);
    println!("    partition: {:?}", partition);
    println!("    weights:   {:?}", weights);

    // Group
    let groups = group_slices(&partition);
    println!("\n[3] Groups: {} rows", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!("    [{}] {:?}", i, group);
    }

    // Divvy
    let frame = Frame::block_column();
    let heights = divvy_heights(&frame, &groups, None)?;
    println!("\n[4] Row heights in {:.2}x{:.2} frame:", frame.width, frame.height);
    for (group, height) in groups.iter().zip(&heights) {
        println!("    {:?} -> {:.3}", group, height);
    }

    // Position
    let rects = position_blocks(&frame, &partition)?;
    println!("\n[5] Rects: {} (one per slice)", rects.len());
    for (i, rect) in rects.iter().enumerate() {
        let inner = rect.inset(PALETTE_GAP / 2.0);
        println!(
            "    [{}] {:.2}x{:.2} at ({:.2}, {:.2}) -> {:.2}x{:.2} after gap",
            i, rect.w, rect.h, rect.x, rect.y, inner.w, inner.h
        );
    }

    // Check for anomalies
    println!("\n[6] Checking for anomalies:");
    let height_sum: f64 = heights.iter().sum();
    println!("    Row height sum: {:.6}", height_sum);
    println!("    Frame height:   {:.6}", frame.height);
    println!("    Coverage: {:.2}%", height_sum / frame.height * 100.0);

    Ok(())
}

//! Re-bin a 3-D lattice of samples at several resolutions
//!
//! Run with `RUST_LOG=debug` to see each rebuild.

use ndhist_core::ListSample;
use ndhist_histogram::{HistogramOps, SampleToHistogramFilter};
use tracing_subscriber::EnvFilter;

fn main() -> ndhist_histogram::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sample = ListSample::<f32>::new(3);
    for i in 0..35 {
        for j in 0..39 {
            for k in 0..49 {
                sample.push_back(&[i as f32 - 17.0, j as f32 - 19.0, k as f32 - 24.0])?;
            }
        }
    }

    let mut filter = SampleToHistogramFilter::new();
    filter.set_input(&sample);

    for size in [[35usize, 39, 49], [7, 39, 49], [7, 13, 49], [7, 13, 7]] {
        filter.set_histogram_size(size);
        filter.update()?;

        let histogram = filter.output();
        let first = histogram.iter().next().map(|bin| bin.frequency).unwrap_or(0);
        println!("{histogram}: first bin holds {first}");
        for d in 0..histogram.dimension() {
            println!(
                "  dim {d}: bounds {}, median {:.3}, mean {:.3}",
                histogram.bounds()[d],
                histogram.quantile(d, 0.5)?,
                histogram.mean(d)?
            );
        }
    }

    Ok(())
}

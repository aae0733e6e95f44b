use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndhist_core::ListSample;
use ndhist_histogram::{GridBuilder, HistogramBuilder, SampleToHistogramFilter};

fn lattice(n: usize) -> ListSample<f32> {
    let mut sample = ListSample::with_capacity(3, n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                sample
                    .push_back(&[i as f32 + 0.5, j as f32 + 0.5, k as f32 + 0.5])
                    .unwrap();
            }
        }
    }
    sample
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for n in [16, 32, 64] {
        let sample = lattice(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sample, |b, sample| {
            let builder = GridBuilder::new([n / 2, n / 2, n / 2]);
            b.iter(|| builder.build(black_box(sample)).unwrap());
        });
    }
    group.finish();
}

fn bench_filter_rebin(c: &mut Criterion) {
    let sample = lattice(32);
    c.bench_function("filter_rebin_32", |b| {
        let mut filter = SampleToHistogramFilter::new();
        filter.set_input(&sample);
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            filter.set_histogram_size(if toggle { [8, 8, 8] } else { [16, 16, 16] });
            filter.update().unwrap();
            black_box(filter.output().total_frequency())
        });
    });

    c.bench_function("filter_cached_update", |b| {
        let mut filter = SampleToHistogramFilter::new();
        filter.set_input(&sample);
        filter.set_histogram_size([16, 16, 16]);
        filter.update().unwrap();
        b.iter(|| filter.update().unwrap());
    });
}

criterion_group!(benches, bench_build, bench_filter_rebin);
criterion_main!(benches);

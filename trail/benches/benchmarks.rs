use criterion::{criterion_group, criterion_main, Criterion};
use route::Synthetic;
use trail::{constants::DEFAULT_PROMINENCE_FT, Profile};

fn trail_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Trail Profile");
    let samples = Synthetic::appalachian().seed(1).generate().unwrap();
    let profile = Profile::new(&samples).unwrap();

    group.bench_with_input("derive", &samples, |b, s| {
        b.iter(|| Profile::new(s).unwrap())
    });
    group.bench_with_input("peaks_and_valleys", &profile, |b, p| {
        b.iter(|| p.peaks_and_valleys(DEFAULT_PROMINENCE_FT))
    });
    group.bench_with_input("toughest_windows", &profile, |b, p| {
        b.iter(|| p.toughest_windows(10, 5.0))
    });
    group.bench_with_input("region_breakdown", &profile, |b, p| {
        b.iter(|| p.region_breakdown())
    });
}

criterion_group!(benches, trail_profile);
criterion_main!(benches);

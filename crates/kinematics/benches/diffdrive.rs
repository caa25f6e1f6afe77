use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kinematics::{diffdrive, Pose, WheelVelocities};

fn bench_diffdrive(c: &mut Criterion) {
    let pose = Pose::new(300.0, 300.0, 0.3);

    c.bench_function("diffdrive_straight", |b| {
        let wheels = WheelVelocities::new(4.0, 4.0);
        b.iter(|| diffdrive(black_box(pose), black_box(wheels), 1.0, 5.0).unwrap());
    });

    c.bench_function("diffdrive_curved", |b| {
        let wheels = WheelVelocities::new(1.0, 2.0);
        b.iter(|| diffdrive(black_box(pose), black_box(wheels), 1.0, 5.0).unwrap());
    });
}

criterion_group!(benches, bench_diffdrive);
criterion_main!(benches);

// benches/pga_variants.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pga_engine::{Line, Motor, Plane, Point, Rotor};
use std::f32::consts::FRAC_PI_2;

const BATCH: usize = 1_000;

fn apply_matrix3(m: &[f32; 9], p: [f32; 3]) -> [f32; 3] {
    [
        m[0] * p[0] + m[1] * p[1] + m[2] * p[2],
        m[3] * p[0] + m[4] * p[1] + m[5] * p[2],
        m[6] * p[0] + m[7] * p[1] + m[8] * p[2],
    ]
}

fn bench_rotate(c: &mut Criterion) {
    // 3D rotation about Z by 90 degrees
    let rotor = Rotor::new(FRAC_PI_2, 0.0, 0.0, 1.0);
    let matrix: [f32; 9] = [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];

    c.bench_function("rotate classical 3x3 x 1000", |bencher| {
        bencher.iter(|| {
            let mut p = [1.0f32, 0.0, 0.0];
            for _ in 0..BATCH {
                p = apply_matrix3(black_box(&matrix), black_box(p));
            }
            black_box(p)
        })
    });

    c.bench_function("rotate rotor sandwich x 1000", |bencher| {
        bencher.iter(|| {
            let mut p = Point::new(1.0, 0.0, 0.0);
            for _ in 0..BATCH {
                p = rotor.transform_point(black_box(p));
            }
            black_box(p)
        })
    });
}

fn bench_motor_application(c: &mut Criterion) {
    let axis = Line::new(0.0, 0.0, 1.0, 0.2, -0.1, 0.0);
    let motor = Motor::new(0.7, 0.4, axis);
    let pts: Vec<Point> = (0..BATCH)
        .map(|i| Point::new(i as f32 * 0.01, 1.0, -0.5))
        .collect();

    c.bench_function("motor on points one-by-one x 1000", |bencher| {
        bencher.iter(|| {
            let mut acc = Point::origin();
            for p in &pts {
                acc = motor.transform_point(black_box(*p));
            }
            black_box(acc)
        })
    });

    c.bench_function("motor on points batched x 1000", |bencher| {
        let mut dst = vec![Point::origin(); pts.len()];
        bencher.iter(|| {
            motor.transform_points(black_box(&pts), &mut dst);
            black_box(dst[BATCH - 1])
        })
    });
}

fn bench_composition(c: &mut Criterion) {
    let a = Motor::new(0.3, 1.0, Line::new(1.0, 0.0, 0.0, 0.0, 0.1, 0.2));
    let b = Motor::new(-0.9, 0.2, Line::new(0.0, 1.0, 0.0, 0.3, 0.0, -0.1));

    c.bench_function("motor composition x 1000", |bencher| {
        bencher.iter(|| {
            let mut m = a;
            for _ in 0..BATCH {
                m = black_box(m) * black_box(b);
            }
            black_box(m)
        })
    });

    c.bench_function("plane meet x 1000", |bencher| {
        let p1 = Plane::new(1.0, 2.0, 3.0, 4.0);
        let p2 = Plane::new(-2.0, 0.5, 1.0, 0.0);
        bencher.iter(|| {
            let mut l = Line::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
            for _ in 0..BATCH {
                l = black_box(p1) ^ black_box(p2);
            }
            black_box(l)
        })
    });
}

criterion_group!(
    benches,
    bench_rotate,
    bench_motor_application,
    bench_composition
);
criterion_main!(benches);

//! Randomized algebraic property tests over the whole entity set.

use pga_engine::{Branch, Direction, Line, Motor, Plane, Point, Rotor, Translator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 1e-3;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x9a7d_21c4)
}

fn rand_unit(rng: &mut StdRng) -> f32 {
    rng.gen_range(-1.0f32..1.0)
}

fn rand_plane(rng: &mut StdRng) -> Plane {
    Plane::new(
        rand_unit(rng) + 1.5,
        rand_unit(rng),
        rand_unit(rng),
        rand_unit(rng) * 2.0,
    )
}

fn rand_point(rng: &mut StdRng) -> Point {
    Point::new(
        rand_unit(rng) * 3.0,
        rand_unit(rng) * 3.0,
        rand_unit(rng) * 3.0,
    )
}

fn rand_direction(rng: &mut StdRng) -> Direction {
    Direction::new(rand_unit(rng) + 1.1, rand_unit(rng), rand_unit(rng))
}

fn rand_rotor(rng: &mut StdRng) -> Rotor {
    Rotor::new(
        rng.gen_range(0.1f32..3.0),
        rand_unit(rng) + 1.1,
        rand_unit(rng),
        rand_unit(rng),
    )
}

fn rand_motor(rng: &mut StdRng) -> Motor {
    let r = rand_rotor(rng);
    let t = Translator::new(
        rng.gen_range(-2.0f32..2.0),
        rand_unit(rng) + 1.1,
        rand_unit(rng),
        rand_unit(rng),
    );
    t * r
}

#[test]
fn rotor_times_its_reverse_is_the_identity() {
    let mut rng = rng();
    for _ in 0..100 {
        let r = rand_rotor(&mut rng);
        assert!((r * r.reversed()).approx_eq(Rotor::identity(), EPS));
    }
}

#[test]
fn motor_exp_log_round_trips() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = rand_motor(&mut rng);
        assert!(m.log().exp().approx_eq(m, EPS), "failed for {m}");
    }
}

#[test]
fn screw_recovery_rebuilds_the_motor() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = rand_motor(&mut rng).constrained();
        let (ang, delta, axis) = m.screw();
        assert!(Motor::new(ang, delta, axis).approx_eq(m, EPS), "failed for {m}");
    }
}

#[test]
fn plane_reflection_is_an_involution() {
    let mut rng = rng();
    for _ in 0..100 {
        let mirror = rand_plane(&mut rng).normalized();
        let p = rand_point(&mut rng);
        let twice = mirror.reflect_point(mirror.reflect_point(p));
        assert!(twice.approx_eq(p, EPS));

        let q = rand_plane(&mut rng);
        let q_twice = mirror.reflect_plane(mirror.reflect_plane(q));
        assert!(q_twice.approx_eq(q, EPS));
    }
}

#[test]
fn double_dual_is_the_identity_bit_for_bit() {
    let mut rng = rng();
    for _ in 0..100 {
        let p = rand_plane(&mut rng);
        assert_eq!(!!p, p);
        let x = rand_point(&mut rng);
        assert_eq!(!!x, x);
        let b = Branch::new(rand_unit(&mut rng), rand_unit(&mut rng), rand_unit(&mut rng));
        assert_eq!(!!b, b);
        let l = Line::new(
            rand_unit(&mut rng),
            rand_unit(&mut rng),
            rand_unit(&mut rng),
            rand_unit(&mut rng),
            rand_unit(&mut rng),
            rand_unit(&mut rng),
        );
        assert_eq!(!!l, l);
    }
}

#[test]
fn join_is_the_dual_of_the_meet_of_duals() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = rand_point(&mut rng);
        let b = rand_point(&mut rng);
        // BitAnd is defined as !(!a ^ !b); pin the identity bit-exactly
        assert_eq!(a & b, !(!a ^ !b));

        let pl = rand_plane(&mut rng);
        assert_eq!(a & pl, !(!a ^ !pl));
    }
}

#[test]
fn normalization_invariants() {
    let mut rng = rng();
    for _ in 0..100 {
        let p = rand_plane(&mut rng).normalized();
        assert!((p.squared_norm() - 1.0).abs() < EPS);

        let r = (rand_rotor(&mut rng) * 3.7).normalized();
        assert!((r.squared_norm() - 1.0).abs() < EPS);

        let m = (rand_motor(&mut rng) * 1.9).normalized();
        let id = m * m.reversed();
        assert!(id.approx_eq(Motor::identity(), EPS), "m ~m = {id}");
    }
}

#[test]
fn motor_inverse_composes_to_identity() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = rand_motor(&mut rng) * rng.gen_range(0.5f32..2.0);
        assert!((m * m.inverse()).approx_eq(Motor::identity(), EPS));
    }
}

#[test]
fn batch_conjugation_matches_single() {
    let mut rng = rng();
    let m = rand_motor(&mut rng);

    let pts: Vec<Point> = (0..64).map(|_| rand_point(&mut rng)).collect();
    let mut dst = vec![Point::origin(); pts.len()];
    m.transform_points(&pts, &mut dst);
    let mut in_place = pts.clone();
    m.transform_points_in_place(&mut in_place);
    for i in 0..pts.len() {
        let single = m.transform_point(pts[i]);
        assert!(dst[i].approx_eq(single, EPS));
        assert!(in_place[i].approx_eq(single, EPS));
    }

    let planes: Vec<Plane> = (0..64).map(|_| rand_plane(&mut rng)).collect();
    let mut pdst = vec![Plane::new(0.0, 0.0, 0.0, 0.0); planes.len()];
    m.transform_planes(&planes, &mut pdst);
    let mut p_in_place = planes.clone();
    m.transform_planes_in_place(&mut p_in_place);
    for i in 0..planes.len() {
        let single = m.transform_plane(planes[i]);
        assert!(pdst[i].approx_eq(single, EPS));
        assert!(p_in_place[i].approx_eq(single, EPS));
    }

    let dirs: Vec<Direction> = (0..64).map(|_| rand_direction(&mut rng)).collect();
    let mut ddst = vec![Direction::new(1.0, 0.0, 0.0); dirs.len()];
    m.transform_directions(&dirs, &mut ddst);
    let mut d_in_place = dirs.clone();
    m.transform_directions_in_place(&mut d_in_place);
    let r = rand_rotor(&mut rng);
    let mut rdst = vec![Direction::new(1.0, 0.0, 0.0); dirs.len()];
    r.transform_directions(&dirs, &mut rdst);
    let mut r_in_place = dirs.clone();
    r.transform_directions_in_place(&mut r_in_place);
    for i in 0..dirs.len() {
        let single = m.transform_direction(dirs[i]);
        assert!(ddst[i].approx_eq(single, EPS));
        assert!(d_in_place[i].approx_eq(single, EPS));
        let r_single = r.transform_direction(dirs[i]);
        assert!(rdst[i].approx_eq(r_single, EPS));
        assert!(r_in_place[i].approx_eq(r_single, EPS));
    }
}

#[test]
fn line_meet_detects_coplanarity() {
    let mut rng = rng();
    for _ in 0..50 {
        // two lines through a shared point are coplanar
        let shared = rand_point(&mut rng);
        let a = shared & rand_point(&mut rng);
        let b = shared & rand_point(&mut rng);
        assert!((a ^ b).e0123().abs() < 1e-2);
    }
}

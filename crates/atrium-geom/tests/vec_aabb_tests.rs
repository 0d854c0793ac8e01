use atrium_geom::{Aabb, Vec2, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));

    let d = c - a;
    assert!(vec3_approx_eq(d, b, 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));

    // Zero vector normalization should be a no-op (not NaN, unchanged)
    let z = Vec3::ZERO.normalized();
    assert!(vec3_approx_eq(z, Vec3::ZERO, 1e-6));
}

#[test]
fn vec3_flat_drops_height_only() {
    let v = Vec3::new(2.0, 5.5, -3.0);
    assert!(vec3_approx_eq(v.flat(), Vec3::new(2.0, 0.0, -3.0), 1e-6));
    assert!(approx_eq(v.with_y(1.6).y, 1.6, 1e-6));
}

#[test]
fn vec3_distance_xz_ignores_height() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(3.0, 100.0, 4.0);
    assert!(approx_eq(a.distance_xz(b), 5.0, 1e-6));
}

#[test]
fn vec2_round_trips_through_vec3() {
    let p = Vec2::new(7.0, -2.0);
    let v = p.lifted(1.5);
    assert!(vec3_approx_eq(v, Vec3::new(7.0, 1.5, -2.0), 1e-6));
    let back = v.xz();
    assert!(approx_eq(back.x, p.x, 1e-6) && approx_eq(back.z, p.z, 1e-6));
}

#[test]
fn vec2_distance() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert!(approx_eq(a.distance(b), 5.0, 1e-6));
}

#[test]
fn nan_coordinates_are_not_finite() {
    assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
    assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
    assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
}

#[test]
fn aabb_from_center_half() {
    let b = Aabb::from_center_half(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 1.5));
    assert!(vec3_approx_eq(b.min, Vec3::new(0.5, 1.0, 1.5), 1e-6));
    assert!(vec3_approx_eq(b.max, Vec3::new(1.5, 3.0, 4.5), 1e-6));
    assert!(vec3_approx_eq(b.center(), Vec3::new(1.0, 2.0, 3.0), 1e-6));
}

#[test]
fn aabb_expanded_grows_every_face() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)).expanded(0.25);
    assert!(vec3_approx_eq(b.min, Vec3::new(-0.25, -0.25, -0.25), 1e-6));
    assert!(vec3_approx_eq(b.max, Vec3::new(1.25, 1.25, 1.25), 1e-6));
}

#[test]
fn aabb_contains_boundary_inclusive() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    assert!(b.contains(Vec3::new(0.0, 0.0, 0.0)));
    assert!(b.contains(Vec3::new(2.0, 2.0, 2.0)));
    assert!(!b.contains(Vec3::new(2.1, 1.0, 1.0)));
}

#[test]
fn sphere_box_overlap_cases() {
    let b = Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0));

    // Sphere center inside the box always overlaps
    assert!(b.intersects_sphere(Vec3::new(0.0, 1.0, 0.0), 0.01));

    // Touching a face from outside
    assert!(b.intersects_sphere(Vec3::new(1.3, 1.0, 0.0), 0.35));
    assert!(!b.intersects_sphere(Vec3::new(1.5, 1.0, 0.0), 0.35));

    // Corner approach: diagonal distance matters, not per-axis distance
    let corner = Vec3::new(1.0, 2.0, 1.0);
    let out = corner + Vec3::new(0.3, 0.3, 0.3);
    assert!(!b.intersects_sphere(out, 0.5));
    assert!(b.intersects_sphere(out, 0.6));
}

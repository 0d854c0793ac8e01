use atrium_geom::{Aabb, Vec3};
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_vec3(), arb_vec3()).prop_map(|(a, b)| {
        Aabb::new(
            Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        )
    })
}

fn small_radius() -> impl Strategy<Value = f32> {
    0.01f32..10.0
}

proptest! {
    // Closest point is always contained in the box
    #[test]
    fn closest_point_contained(b in arb_box(), p in arb_vec3()) {
        prop_assert!(b.contains(b.closest_point(p)));
    }

    // Closest point of a contained point is the point itself
    #[test]
    fn closest_point_identity_inside(b in arb_box(), p in arb_vec3()) {
        let q = b.closest_point(p);
        let q2 = b.closest_point(q);
        prop_assert!((q2 - q).length() <= 1e-6);
    }

    // A sphere centered inside the box intersects for any radius
    #[test]
    fn sphere_inside_always_intersects(b in arb_box(), p in arb_vec3(), r in small_radius()) {
        let c = b.closest_point(p);
        prop_assert!(b.intersects_sphere(c, r));
    }

    // Growing the radius never turns an intersection into a miss
    #[test]
    fn sphere_test_monotone_in_radius(b in arb_box(), p in arb_vec3(), r in small_radius()) {
        if b.intersects_sphere(p, r) {
            prop_assert!(b.intersects_sphere(p, r * 2.0));
        }
    }

    // Expansion by m is equivalent to a radius increase of m for face-on hits
    #[test]
    fn expanded_box_contains_original(b in arb_box(), m in 0.0f32..5.0) {
        let e = b.expanded(m);
        prop_assert!(e.contains(b.min));
        prop_assert!(e.contains(b.max));
    }
}

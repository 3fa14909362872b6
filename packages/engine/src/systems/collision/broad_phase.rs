use crate::systems::rigid_body::{Aabb, BodyKind, RigidBody};

/// Whether a pair is worth testing at all
pub fn can_collide(a: &RigidBody, b: &RigidBody) -> bool {
    if !a.is_dynamic() && !b.is_dynamic() {
        return false;
    }
    if a.is_sleeping() && b.is_sleeping() {
        return false;
    }
    // A sleeping body resting on the floor stays put until something wakes it.
    if (a.is_sleeping() && b.kind != BodyKind::Dynamic) || (b.is_sleeping() && a.kind != BodyKind::Dynamic) {
        return false;
    }
    true
}

/// Collect candidate pairs `(i, j)` with `i < j` into `pairs`.
///
/// `scratch` holds `(body index, aabb)` sorted by `min.x`; it is reused
/// between steps to avoid reallocating.
pub fn sweep_and_prune(bodies: &[RigidBody], scratch: &mut Vec<(usize, Aabb)>, pairs: &mut Vec<(usize, usize)>) {
    pairs.clear();
    scratch.clear();
    scratch.extend(
        bodies
            .iter()
            .enumerate()
            .filter_map(|(idx, body)| body.aabb().map(|aabb| (idx, aabb))),
    );
    scratch.sort_by(|a, b| a.1.min.x.total_cmp(&b.1.min.x));

    for i in 0..scratch.len() {
        let (ia, aabb_a) = scratch[i];
        for &(ib, aabb_b) in &scratch[i + 1..] {
            if aabb_b.min.x > aabb_a.max.x {
                break;
            }
            if !aabb_a.overlaps(&aabb_b) {
                continue;
            }
            if !can_collide(&bodies[ia], &bodies[ib]) {
                continue;
            }
            pairs.push((ia.min(ib), ia.max(ib)));
        }
    }
}

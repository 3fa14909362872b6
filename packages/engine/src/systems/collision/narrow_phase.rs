use crate::core::math::Vec2;
use crate::systems::rigid_body::{RigidBody, Shape};

/// Prefer the first box as reference unless the second separates clearly more
const REFERENCE_FLIP_TOLERANCE: f32 = 1e-3;

/// One contact between `body_a` and `body_b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    pub body_a: usize,
    pub body_b: usize,
    /// Unit normal pointing from A toward B
    pub normal: Vec2,
    /// Contact point on A's surface, relative to A's center
    pub ra: Vec2,
    /// Contact point on B's surface, relative to B's center
    pub rb: Vec2,
    /// Signed gap along the normal (negative = penetrating)
    pub depth: f32,
}

/// Dispatch on the shape pair and append contacts to `out`
pub fn collide(ia: usize, a: &RigidBody, ib: usize, b: &RigidBody, out: &mut Vec<ContactPoint>) {
    match (a.shape, b.shape) {
        (Some(Shape::Plane), Some(Shape::Box { .. })) => plane_box(ia, a, ib, b, out),
        (Some(Shape::Box { .. }), Some(Shape::Plane)) => plane_box(ib, b, ia, a, out),
        (Some(Shape::Box { .. }), Some(Shape::Box { .. })) => box_box(ia, a, ib, b, out),
        _ => {}
    }
}

fn plane_box(ip: usize, plane: &RigidBody, ib: usize, body: &RigidBody, out: &mut Vec<ContactPoint>) {
    let Some(half) = body.shape.and_then(|s| s.half_extents()) else {
        return;
    };
    let normal = Vec2::new(0.0, 1.0).rotate(plane.angle);

    for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        let corner = body.local_to_world(Vec2::new(sx * half.x, sy * half.y));
        let depth = (corner - plane.pos).dot(normal);
        if depth < 0.0 {
            let on_plane = corner - normal * depth;
            out.push(ContactPoint {
                body_a: ip,
                body_b: ib,
                normal,
                ra: on_plane - plane.pos,
                rb: corner - body.pos,
                depth,
            });
        }
    }
}

#[derive(Clone, Copy)]
struct Separation {
    distance: f32,
    /// Face normal of the reference box, oriented toward the other box
    normal: Vec2,
    /// Distance from the reference center to the face
    face_extent: f32,
    /// Half length of the face
    side_extent: f32,
}

fn axes(body: &RigidBody) -> [Vec2; 2] {
    let (sin, cos) = body.angle.sin_cos();
    [Vec2::new(cos, sin), Vec2::new(-sin, cos)]
}

/// Largest separation along the face normals of `reference`
fn max_separation(reference: &RigidBody, ref_half: Vec2, other: &RigidBody, other_half: Vec2) -> Separation {
    let d = other.pos - reference.pos;
    let ref_axes = axes(reference);
    let other_axes = axes(other);

    let mut best: Option<Separation> = None;
    for (k, axis) in ref_axes.iter().enumerate() {
        let normal = if d.dot(*axis) < 0.0 { -*axis } else { *axis };
        let (face_extent, side_extent) = if k == 0 { (ref_half.x, ref_half.y) } else { (ref_half.y, ref_half.x) };
        let radius = other_half.x * other_axes[0].dot(normal).abs() + other_half.y * other_axes[1].dot(normal).abs();
        let distance = d.dot(normal) - face_extent - radius;

        if best.map_or(true, |b| distance > b.distance) {
            best = Some(Separation {
                distance,
                normal,
                face_extent,
                side_extent,
            });
        }
    }

    // ref_axes is non-empty, so `best` is always set
    best.unwrap_or(Separation {
        distance: f32::INFINITY,
        normal: Vec2::new(0.0, 1.0),
        face_extent: 0.0,
        side_extent: 0.0,
    })
}

/// Keep the part of a segment where `normal · p <= offset`
fn clip_segment(segment: [Vec2; 2], normal: Vec2, offset: f32) -> Option<[Vec2; 2]> {
    let d0 = normal.dot(segment[0]) - offset;
    let d1 = normal.dot(segment[1]) - offset;

    let mut out = [Vec2::zero(); 2];
    let mut count = 0;
    if d0 <= 0.0 {
        out[count] = segment[0];
        count += 1;
    }
    if d1 <= 0.0 {
        out[count] = segment[1];
        count += 1;
    }
    if d0 * d1 < 0.0 {
        out[count] = segment[0] + (segment[1] - segment[0]) * (d0 / (d0 - d1));
        count += 1;
    }

    (count == 2).then_some(out)
}

fn box_box(ia: usize, a: &RigidBody, ib: usize, b: &RigidBody, out: &mut Vec<ContactPoint>) {
    let (Some(half_a), Some(half_b)) = (a.shape.and_then(|s| s.half_extents()), b.shape.and_then(|s| s.half_extents()))
    else {
        return;
    };

    let sep_a = max_separation(a, half_a, b, half_b);
    if sep_a.distance > 0.0 {
        return;
    }
    let sep_b = max_separation(b, half_b, a, half_a);
    if sep_b.distance > 0.0 {
        return;
    }

    let (ir, reference, sep, ii, incident, incident_half) = if sep_b.distance > sep_a.distance + REFERENCE_FLIP_TOLERANCE {
        (ib, b, sep_b, ia, a, half_a)
    } else {
        (ia, a, sep_a, ib, b, half_b)
    };

    let n = sep.normal;
    let face_center = reference.pos + n * sep.face_extent;
    let tangent = n.perp();

    // Incident face: the one most anti-parallel to the reference normal
    let [ax, ay] = axes(incident);
    let candidates = [
        (ax, incident_half.x, incident_half.y),
        (-ax, incident_half.x, incident_half.y),
        (ay, incident_half.y, incident_half.x),
        (-ay, incident_half.y, incident_half.x),
    ];
    let mut face = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0.dot(n) < face.0.dot(n) {
            face = *candidate;
        }
    }
    let (face_normal, face_extent, side_extent) = face;
    let incident_center = incident.pos + face_normal * face_extent;
    let incident_tangent = face_normal.perp();
    let segment = [
        incident_center + incident_tangent * side_extent,
        incident_center - incident_tangent * side_extent,
    ];

    let Some(segment) = clip_segment(segment, tangent, tangent.dot(face_center) + sep.side_extent) else {
        return;
    };
    let Some(segment) = clip_segment(segment, -tangent, -tangent.dot(face_center) + sep.side_extent) else {
        return;
    };

    for p in segment {
        let depth = (p - face_center).dot(n);
        if depth <= 0.0 {
            out.push(ContactPoint {
                body_a: ir,
                body_b: ii,
                normal: n,
                ra: p - n * depth - reference.pos,
                rb: p - incident.pos,
                depth,
            });
        }
    }
}

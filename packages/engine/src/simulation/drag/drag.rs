use crate::core::math::Vec2;
use crate::systems::solver::Equation;

use super::{BodyHandle, DragConstraint, World};

pub(super) fn set_pointer_position(world: &mut World, point: Vec2) {
    if world.torn_down {
        return;
    }
    if let Some(proxy) = world.bodies.get_mut(world.pointer.0) {
        proxy.pos = point;
    }
}

pub(super) fn begin_drag(world: &mut World, target: BodyHandle, pivot: Vec2) -> bool {
    if world.torn_down || world.drag.is_some() || target == world.pointer {
        return false;
    }
    let Some(body) = world.bodies.get_mut(target.0) else {
        return false;
    };
    if !body.is_dynamic() {
        return false;
    }

    body.wake_up();
    let local_pivot = body.world_to_local(pivot);
    world.drag = Some(DragConstraint {
        proxy: world.pointer,
        target,
        local_pivot,
    });
    true
}

pub(super) fn end_drag(world: &mut World) -> bool {
    world.drag.take().is_some()
}

/// Two point-to-point rows (x and y) between the proxy and the grab point
pub(super) fn push_drag_equations(world: &mut World) {
    let Some(drag) = world.drag else {
        return;
    };
    let Some(proxy_pos) = world.bodies.get(drag.proxy.0).map(|b| b.pos) else {
        return;
    };
    let Some(target) = world.bodies.get_mut(drag.target.0) else {
        return;
    };

    // a held glyph must not doze off under the pointer
    target.wake_up();
    let rb = drag.local_pivot.rotate(target.angle);
    let gap = (target.pos + rb) - proxy_pos;

    for axis in [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)] {
        world.equations.push(Equation::point_to_point(
            drag.proxy.0,
            drag.target.0,
            axis,
            Vec2::zero(),
            rb,
            gap.dot(axis),
        ));
    }
}

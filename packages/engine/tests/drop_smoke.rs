use letterdrop_engine::core::math::Vec2;
use letterdrop_engine::core::random::Rng;
use letterdrop_engine::input::{on_move, on_press, on_release, PointerButton};
use letterdrop_engine::render::{run_frame, DrawingSurface};
use letterdrop_engine::schedule::DropQueue;
use letterdrop_engine::simulation::TIME_STEP;
use letterdrop_engine::{spawn, Tunables, ViewTransform, World, WorldConfig, CATALOG};

struct NullSurface;

impl DrawingSurface for NullSurface {
    fn resize(&mut self, _: f32, _: f32) {}
    fn clear_rect(&mut self, _: f32, _: f32, _: f32, _: f32) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _: f32, _: f32) {}
    fn rotate(&mut self, _: f32) {}
    fn scale(&mut self, _: f32, _: f32) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _: f32, _: f32) {}
    fn line_to(&mut self, _: f32, _: f32) {}
    fn rect(&mut self, _: f32, _: f32, _: f32, _: f32) {}
    fn stroke(&mut self) {}
    fn fill_text(&mut self, _: &str, _: f32, _: f32) {}
    fn set_fill_style(&mut self, _: &str) {}
    fn set_stroke_style(&mut self, _: &str) {}
    fn set_line_width(&mut self, _: f32) {}
    fn set_font(&mut self, _: &str) {}
}

fn mounted_world(view: &ViewTransform) -> World {
    World::new(WorldConfig {
        floor_height: view.floor_height(),
        ..WorldConfig::default()
    })
}

#[test]
fn single_glyph_falls_and_rests_above_floor() {
    let mut world = World::new(WorldConfig::default());
    let glyph = spawn(&CATALOG[1], &mut Rng::new(4));
    let handle = world
        .add_body_with_motion(glyph, Vec2::new(0.0, 8.0), Vec2::zero(), 0.0)
        .unwrap();

    let mut previous = 8.0;
    let mut highest_rebound = f32::MIN;
    for step in 0..100 {
        world.step(TIME_STEP);
        let y = world.body(handle).unwrap().pos.y;
        assert!(y > 0.0, "step {step}: below the floor at {y}");
        if y > previous {
            highest_rebound = highest_rebound.max(y);
        }
        previous = y;
    }

    let y = world.body(handle).unwrap().pos.y;
    assert!(y < 8.0);
    assert!(y > 0.3 && y < 0.7, "settled at {y}");
    // floor contact may bounce a little, never back toward the drop height
    assert!(highest_rebound < 2.0);
}

/// Deepest any glyph corner may sit below the floor while the pile settles
const PILE_SINK_BOUND: f32 = 0.3;

#[test]
fn whole_catalog_drops_and_stays_in_play() {
    let viewports = [(1280.0, 800.0, 1.0), (400.0, 800.0, 2.0), (1920.0, 1080.0, 1.0)];

    for (width, height, dpr) in viewports {
        for seed in [1, 9, 2024] {
            let view = ViewTransform::for_viewport(width, height, dpr);
            let mut world = mounted_world(&view);
            let mut rng = Rng::new(seed);
            let mut queue = DropQueue::from_catalog(&mut rng);
            let tunables = Tunables::default();
            let mut surface = NullSurface;
            let floor = view.floor_height();
            let up = Vec2::new(0.0, 1.0);

            // 200ms between drops is 9 frames at 45 steps per second
            for frame in 0..1500 {
                if frame % 9 == 0 {
                    queue.release_next(&mut world, &mut rng);
                }
                run_frame(&mut surface, &mut world, &view, &tunables, &mut rng);

                for (_, body) in world.glyphs() {
                    assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
                    assert!(
                        body.pos.y > floor,
                        "{width}x{height} seed {seed} frame {frame}: center below floor at {:?}",
                        body.pos
                    );
                    let corner = body.lowest_corner_along(Vec2::new(0.0, floor), up).unwrap();
                    assert!(
                        corner > -PILE_SINK_BOUND,
                        "{width}x{height} seed {seed} frame {frame}: corner {corner} below floor"
                    );
                }
            }

            assert!(queue.is_empty());
            assert_eq!(world.glyph_count(), CATALOG.len());
            for (_, body) in world.glyphs() {
                assert!(body.pos.x.abs() <= 10.0);
            }
        }
    }
}

#[test]
fn pointer_drag_through_view_transform() {
    let view = ViewTransform::for_viewport(800.0, 600.0, 2.0);
    let mut world = World::new(WorldConfig {
        tunables: Tunables { gravity: 0.0, ..Tunables::default() },
        floor_height: view.floor_height(),
        ..WorldConfig::default()
    });
    let glyph = spawn(&CATALOG[0], &mut Rng::new(8));
    let handle = world
        .add_body_with_motion(glyph, Vec2::new(0.0, 1.0), Vec2::zero(), 0.0)
        .unwrap();

    let grab = view.simulation_to_screen(Vec2::new(0.0, 1.0));
    assert!(on_press(&mut world, &view, grab, PointerButton::Primary));

    let target = Vec2::new(1.5, 2.0);
    on_move(&mut world, &view, view.simulation_to_screen(target));
    for _ in 0..150 {
        world.step(TIME_STEP);
    }

    let pos = world.body(handle).unwrap().pos;
    assert!((pos - target).length() < 0.25, "glyph at {pos:?}");

    assert!(on_release(&mut world));
    assert!(!world.has_drag());
}

#[test]
fn nothing_moves_after_teardown() {
    let view = ViewTransform::for_viewport(1280.0, 800.0, 1.0);
    let mut world = mounted_world(&view);
    let mut rng = Rng::new(5);
    let mut queue = DropQueue::from_catalog(&mut rng);
    queue.release_next(&mut world, &mut rng);
    world.teardown();

    let before = world.body_count();
    assert!(queue.release_next(&mut world, &mut rng).is_none());
    on_press(&mut world, &view, Vec2::new(640.0, 400.0), PointerButton::Primary);
    run_frame(&mut NullSurface, &mut world, &view, &Tunables::default(), &mut rng);

    assert_eq!(world.body_count(), before);
    assert_eq!(world.frame(), 0);
}

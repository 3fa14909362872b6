use super::*;
use crate::core::math::Vec2;
use crate::domain::glyphs::{spawn, CATALOG};
use crate::simulation::WorldConfig;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Resize(f32, f32),
    Clear,
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Rect(f32, f32, f32, f32),
    Stroke,
    FillText(String, f32, f32),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    Font(String),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DrawingSurface for Recorder {
    fn resize(&mut self, width: f32, height: f32) { self.ops.push(Op::Resize(width, height)); }
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) { self.ops.push(Op::Clear); }
    fn save(&mut self) { self.ops.push(Op::Save); }
    fn restore(&mut self) { self.ops.push(Op::Restore); }
    fn translate(&mut self, x: f32, y: f32) { self.ops.push(Op::Translate(x, y)); }
    fn rotate(&mut self, angle: f32) { self.ops.push(Op::Rotate(angle)); }
    fn scale(&mut self, x: f32, y: f32) { self.ops.push(Op::Scale(x, y)); }
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath); }
    fn move_to(&mut self, x: f32, y: f32) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f32, y: f32) { self.ops.push(Op::LineTo(x, y)); }
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) { self.ops.push(Op::Rect(x, y, w, h)); }
    fn stroke(&mut self) { self.ops.push(Op::Stroke); }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) { self.ops.push(Op::FillText(text.to_string(), x, y)); }
    fn set_fill_style(&mut self, css: &str) { self.ops.push(Op::FillStyle(css.to_string())); }
    fn set_stroke_style(&mut self, css: &str) { self.ops.push(Op::StrokeStyle(css.to_string())); }
    fn set_line_width(&mut self, width: f32) { self.ops.push(Op::LineWidth(width)); }
    fn set_font(&mut self, font: &str) { self.ops.push(Op::Font(font.to_string())); }
}

fn scene(glyphs: &[(usize, Vec2)]) -> (World, ViewTransform) {
    let view = ViewTransform::for_viewport(1000.0, 800.0, 1.0);
    let mut world = World::new(WorldConfig {
        floor_height: view.floor_height(),
        ..WorldConfig::default()
    });
    let mut rng = Rng::new(11);
    for &(idx, pos) in glyphs {
        let glyph = spawn(&CATALOG[idx], &mut rng);
        world.add_body_with_motion(glyph, pos, Vec2::zero(), 0.0);
    }
    (world, view)
}

#[test]
fn configure_sets_canvas_size_and_pen() {
    let view = ViewTransform::for_viewport(1000.0, 800.0, 2.0);
    let mut rec = Recorder::default();
    configure_surface(&mut rec, &view);
    assert_eq!(
        rec.ops,
        vec![Op::Resize(2000.0, 1600.0), Op::LineWidth(LINE_WIDTH), Op::Font(FONT.to_string())]
    );
}

#[test]
fn frame_is_centered_scaled_and_balanced() {
    let (mut world, view) = scene(&[(0, Vec2::new(1.0, 2.0))]);
    let mut rec = Recorder::default();
    draw_frame(&mut rec, &mut world, &view, &Tunables::default(), &mut Rng::new(1));

    assert_eq!(rec.ops[0], Op::Clear);
    assert_eq!(rec.ops[1], Op::Save);
    assert_eq!(rec.ops[2], Op::Translate(500.0, 400.0));
    assert_eq!(rec.ops[3], Op::Scale(view.scale, view.scale));
    assert_eq!(rec.ops[4], Op::BeginPath);
    assert_eq!(rec.ops[5], Op::Save);
    assert_eq!(rec.ops[6], Op::Translate(1.0, 2.0));
    assert_eq!(rec.count(|op| *op == Op::Save), rec.count(|op| *op == Op::Restore));
    assert_eq!(rec.ops.last(), Some(&Op::Restore));
}

#[test]
fn glyph_text_is_scaled_flipped_and_offset() {
    let (mut world, view) = scene(&[(6, Vec2::zero())]);
    let mut rec = Recorder::default();
    draw_frame(&mut rec, &mut world, &view, &Tunables::default(), &mut Rng::new(1));

    let text = rec
        .ops
        .iter()
        .position(|op| matches!(op, Op::FillText(..)))
        .unwrap();
    assert_eq!(rec.ops[text], Op::FillText("B".to_string(), -6.0, 3.8));
    assert_eq!(rec.ops[text - 1], Op::Rotate(PI));
    assert_eq!(rec.ops[text - 2], Op::Scale(GLYPH_SCALE, GLYPH_SCALE));
    assert!(matches!(&rec.ops[text - 3], Op::FillStyle(css) if css == "#000" || css == "#fff"));
}

#[test]
fn floor_is_stroked_only_with_hitboxes() {
    let (mut world, view) = scene(&[(0, Vec2::zero())]);
    let floor = view.floor_height();

    let mut plain = Recorder::default();
    draw_frame(&mut plain, &mut world, &view, &Tunables::default(), &mut Rng::new(1));
    assert!(plain.ops.contains(&Op::MoveTo(-1000.0, floor)));
    assert!(plain.ops.contains(&Op::LineTo(1000.0, floor)));
    assert_eq!(plain.count(|op| *op == Op::Stroke), 0);
    assert_eq!(plain.count(|op| matches!(op, Op::Rect(..))), 0);

    let debug = Tunables { show_hitboxes: true, ..Tunables::default() };
    let mut boxed = Recorder::default();
    draw_frame(&mut boxed, &mut world, &view, &debug, &mut Rng::new(1));
    assert!(boxed.ops.contains(&Op::Rect(-0.6, -0.5, 1.2, 1.0)));
    assert!(boxed.ops.contains(&Op::StrokeStyle(HITBOX_STROKE.to_string())));
    assert_eq!(boxed.count(|op| *op == Op::Stroke), 1);
}

#[test]
fn stray_glyph_is_reset_instead_of_drawn() {
    let (mut world, view) = scene(&[(0, Vec2::new(11.0, 0.0)), (1, Vec2::new(0.0, 0.0))]);
    let mut rec = Recorder::default();
    draw_frame(&mut rec, &mut world, &view, &Tunables::default(), &mut Rng::new(1));

    assert_eq!(rec.count(|op| matches!(op, Op::FillText(..))), 1);
    let stray = world.glyphs().next().unwrap().0;
    let body = world.body(stray).unwrap();
    assert!(body.pos.x.abs() <= 5.0);
    assert_eq!(body.pos.y, 10.0);
}

#[test]
fn run_frame_steps_before_drawing() {
    let (mut world, view) = scene(&[(0, Vec2::new(0.0, 3.0))]);
    let mut rec = Recorder::default();
    run_frame(&mut rec, &mut world, &view, &Tunables::default(), &mut Rng::new(1));

    assert_eq!(world.frame(), 1);
    let y = world.body(world.glyphs().next().unwrap().0).unwrap().pos.y;
    assert!(rec.ops.iter().any(|op| matches!(op, Op::Translate(x, ty) if *x == 0.0 && *ty == y)));
}

#[test]
fn torn_down_world_draws_nothing() {
    let (mut world, view) = scene(&[(0, Vec2::zero())]);
    world.teardown();
    let mut rec = Recorder::default();
    run_frame(&mut rec, &mut world, &view, &Tunables::default(), &mut Rng::new(1));
    assert!(rec.ops.is_empty());
}

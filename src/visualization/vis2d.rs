use bevy::prelude::*;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::primitives::Circle;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::frame::run_frame;
use crate::simulation::input::{ButtonState, FrameInput};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgba};
use crate::simulation::viewport::Viewport;
use crate::visualization::canvas::{DrawCmd, DrawList};

const DRAG_BUTTON: MouseButton = MouseButton::Right;
const SPAWN_BUTTON: MouseButton = MouseButton::Left;
const RESET_KEY: KeyCode = KeyCode::KeyR;
const CANCEL_KEY: KeyCode = KeyCode::Escape;

/// Pixel-unit wheel deltas (touchpads) per wheel line
const PIXELS_PER_LINE: f32 = 40.0;

/// Depth offset between consecutive filled circles so later ones draw on top
const Z_STEP: f32 = 1.0e-4;

/// Marks the pooled filled-circle entities
#[derive(Component)]
struct CircleSlot;

/// Reusable filled-circle entities, one per filled-circle draw call
#[derive(Resource, Default)]
struct CirclePool {
    mesh: Handle<Mesh>, // unit circle, scaled per slot
    slots: Vec<(Entity, Handle<ColorMaterial>)>,
}

pub fn run_2d(scenario: Scenario) {
    let window = Window {
        title: scenario.engine.title.clone(),
        resolution: (scenario.engine.width as f32, scenario.engine.height as f32).into(),
        resizable: true,
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(to_color(scenario.palette.background)))
        .insert_resource(scenario)
        .init_resource::<DrawList>()
        .init_resource::<CirclePool>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_systems(Startup, setup_viewer_system)
        .add_systems(Update, (frame_system, stroke_width_system, sync_circles_system, draw_strokes_system).chain())
        .run();
}

fn setup_viewer_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, mut pool: ResMut<CirclePool>, scenario: Res<Scenario>) {
    commands.spawn(Camera2dBundle::default());
    pool.mesh = meshes.add(Circle::new(1.0));

    info!(
        "run_2d: starting viewer with {} bodies (capacity {}, G = {:e})",
        scenario.bodies.len(),
        scenario.bodies.capacity(),
        scenario.parameters.g,
    );
}

/// Sample input, run one simulation frame, record its draw calls
#[allow(clippy::too_many_arguments)]
fn frame_system(
    mut scenario: ResMut<Scenario>,
    mut draw_list: ResMut<DrawList>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    mut last_pointer: Local<Vec2>,
) {
    // Drain the wheel even on skipped frames
    let scroll: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        })
        .sum();

    let Ok(window) = windows.get_single() else {
        return;
    };
    // Minimized
    if window.width() < 1.0 || window.height() < 1.0 {
        return;
    }

    if let Some(p) = window.cursor_position() {
        *last_pointer = p;
    }

    let input = FrameInput {
        delta: time.delta_seconds(),
        viewport: Viewport::new(window.width(), window.height()),
        pointer: NVec2::new(last_pointer.x, last_pointer.y),
        scroll,
        drag: ButtonState {
            pressed: mouse.just_pressed(DRAG_BUTTON),
            down: mouse.pressed(DRAG_BUTTON),
        },
        spawn_pressed: mouse.just_pressed(SPAWN_BUTTON),
        reset_pressed: keys.just_pressed(RESET_KEY),
        cancel_pressed: keys.just_pressed(CANCEL_KEY),
    };

    let report = run_frame(&mut scenario, &input, &mut *draw_list);

    if report.cleared {
        info!("reset: body store cleared");
    }
    if report.spawned > 0 {
        debug!("spawned {} body, {} total", report.spawned, scenario.bodies.len());
    }
    if report.bounced > 0 {
        trace!("{} bodies hit an edge", report.bounced);
    }
}

/// Gizmo strokes share one width, taken from the frame's widest stroke
fn stroke_width_system(draw_list: Res<DrawList>, mut config_store: ResMut<GizmoConfigStore>) {
    if let Some(width) = draw_list.max_stroke() {
        let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
        config.line_width = width.max(1.0);
    }
}

/// Replay filled circles onto pooled mesh entities; unused slots are hidden
fn sync_circles_system(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    scenario: Res<Scenario>,
    mut pool: ResMut<CirclePool>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&mut Transform, &mut Visibility), With<CircleSlot>>,
) {
    let vp = scenario.viewport;
    let mut used = 0;

    for (k, (center, radius, color)) in draw_list.filled_circles().enumerate() {
        let translation = to_world(&vp, center).extend(k as f32 * Z_STEP);
        let color = to_color(color);

        if let Some((entity, material)) = pool.slots.get(k) {
            if let Ok((mut transform, mut visibility)) = query.get_mut(*entity) {
                transform.translation = translation;
                transform.scale = Vec3::splat(radius);
                *visibility = Visibility::Visible;
            }
            if materials.get(material).is_some_and(|m| m.color != color) {
                if let Some(m) = materials.get_mut(material) {
                    m.color = color;
                }
            }
        } else {
            let material = materials.add(ColorMaterial::from(color));
            let entity = commands
                .spawn((
                    MaterialMesh2dBundle {
                        mesh: Mesh2dHandle(pool.mesh.clone()),
                        material: material.clone(),
                        transform: Transform::from_translation(translation).with_scale(Vec3::splat(radius)),
                        ..Default::default()
                    },
                    CircleSlot,
                ))
                .id();
            pool.slots.push((entity, material));
        }
        used = k + 1;
    }

    for (entity, _) in pool.slots.iter().skip(used) {
        if let Ok((_, mut visibility)) = query.get_mut(*entity) {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Rings and lines go through gizmos
fn draw_strokes_system(draw_list: Res<DrawList>, scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let vp = scenario.viewport;
    for cmd in &draw_list.cmds {
        match *cmd {
            DrawCmd::Ring { center, inner_radius, outer_radius, color } => {
                gizmos.circle_2d(to_world(&vp, center), 0.5 * (inner_radius + outer_radius), to_color(color));
            }
            DrawCmd::Line { p0, p1, color, .. } => {
                gizmos.line_2d(to_world(&vp, p0), to_world(&vp, p1), to_color(color));
            }
            DrawCmd::FilledCircle { .. } => {}
        }
    }
}

/// Screen pixels (top-left origin, y down) to 2D camera world space
fn to_world(vp: &Viewport, p: NVec2) -> Vec2 {
    Vec2::new(p.x - 0.5 * vp.width, 0.5 * vp.height - p.y)
}

fn to_color(c: Rgba) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}

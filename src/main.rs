// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;
use std::time::Instant;

use moonvis::{
    config::{Config, ConfigSource},
    controllers::{DragGesture, DragTracker, GestureDetector, PointerId},
    logging,
    models::DragState,
    utilities::SurfaceTransform,
    views::{MoonView, NightSky},
};

struct Model {
    // Scene
    sky: NightSky,
    moon: MoonView,

    // Interaction: the tracker and the release animation both write `drag`,
    // the moon view reads it
    drag: DragState,
    tracker: DragTracker,
    gestures: GestureDetector,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");
    logging::init(&config.logging);
    match &config.source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
        ConfigSource::Defaults => tracing::info!("no config.toml found, using defaults"),
    }

    let window_id = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .touch(touch)
        .unfocused(unfocused)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("window was just built");
    let surface = SurfaceTransform::from_rect(window.rect());

    Model {
        sky: NightSky::new(&config.sky, surface.size()),
        moon: MoonView::new(&config.moon),

        drag: DragState::default(),
        tracker: DragTracker::new(&config.drag, &config.release),
        gestures: GestureDetector::new(config.drag.touch_slop),

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    model.tracker.update(&mut model.drag, app.time);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let transform = SurfaceTransform::from_rect(app.window_rect());

    model.sky.draw(&draw, &transform);
    model.moon.draw(&draw, &model.drag, &transform);

    if model.debug_flag {
        draw_debug(&draw, model, &transform);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!("failed to draw frame: {:?}", e);
    }
}

fn draw_debug(draw: &Draw, model: &Model, transform: &SurfaceTransform) {
    // circle a drag has to start inside of
    let center = transform.to_window(model.moon.to_surface(model.moon.center()));
    draw.ellipse()
        .xy(center)
        .radius(model.moon.bounds().x / 2.0)
        .no_fill()
        .stroke(BLUE)
        .stroke_weight(1.0);
    draw.line()
        .points(center, center + vec2(20.0, 0.0))
        .color(RED)
        .stroke_weight(1.0);
    draw.line()
        .points(center, center + vec2(0.0, 20.0))
        .color(BLUE)
        .stroke_weight(1.0);

    let phase = if model.tracker.is_dragging() {
        "dragging"
    } else if model.tracker.is_releasing() {
        "releasing"
    } else if model.drag.is_deformed() {
        "deformed"
    } else {
        "idle"
    };
    let text = format!(
        "FPS: {:.1}\nstrength: {:+.3}\nindex: {}\nphase: {}",
        model.fps, model.drag.strength, model.drag.index, phase
    );
    draw.text(&text)
        .xy(transform.to_window(pt2(transform.width - 110.0, 50.0)))
        .w_h(200.0, 80.0)
        .left_justify()
        .color(RED);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::D => {
            model.debug_flag = !model.debug_flag;
            tracing::debug!(enabled = model.debug_flag, "debug overlay");
        }
        _ => (),
    }
}

// ******************************* Pointer input *******************************

// window coords -> coords local to the moon's square
fn moon_local(app: &App, model: &Model, window_point: Point2) -> Point2 {
    let transform = SurfaceTransform::from_rect(app.window_rect());
    model.moon.to_local(transform.to_surface(window_point))
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let position = moon_local(app, model, app.mouse.position());
    model.gestures.pointer_down(PointerId::Mouse, position);
}

fn mouse_moved(app: &App, model: &mut Model, window_point: Point2) {
    let position = moon_local(app, model, window_point);
    let gestures = model.gestures.pointer_move(PointerId::Mouse, position);
    apply_gestures(app, model, gestures);
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let gesture = model.gestures.pointer_up(PointerId::Mouse);
    apply_gestures(app, model, gesture);
}

fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    let pointer = PointerId::Touch(touch.id);
    let position = moon_local(app, model, touch.position);
    match touch.phase {
        TouchPhase::Started => model.gestures.pointer_down(pointer, position),
        TouchPhase::Moved => {
            let gestures = model.gestures.pointer_move(pointer, position);
            apply_gestures(app, model, gestures);
        }
        TouchPhase::Ended | TouchPhase::Cancelled => {
            let gesture = model.gestures.pointer_up(pointer);
            apply_gestures(app, model, gesture);
        }
    }
}

fn unfocused(app: &App, model: &mut Model) {
    if model.gestures.is_dragging() {
        tracing::debug!("focus lost mid-drag, releasing");
    }
    let gesture = model.gestures.cancel();
    apply_gestures(app, model, gesture);
}

fn apply_gestures(app: &App, model: &mut Model, gestures: impl IntoIterator<Item = DragGesture>) {
    for gesture in gestures {
        match gesture {
            DragGesture::Start(position) => model.tracker.drag_start(position),
            DragGesture::Move(position) => {
                model
                    .tracker
                    .drag_move(&mut model.drag, position, model.moon.bounds());
            }
            DragGesture::End => model.tracker.drag_end(&model.drag, app.time),
        }
    }
}

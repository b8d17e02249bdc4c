//! Frame driver.
//!
//! The [`Engine`] owns everything that persists between frames: the renderer
//! settings, the gesture in progress, the committed primitives and the
//! animated wireframes. Each [`tick`](Engine::tick) runs one frame:
//!
//! 1. apply the input events that arrived since the last frame;
//! 2. clear the surface;
//! 3. replay every committed primitive;
//! 4. advance each animated object, then project and draw it;
//! 5. flush.

use tracing::{info, trace};

use crate::config::EngineConfig;
use crate::error::{EngineError, LoadError};
use crate::input::{InputEvent, InputSource};
use crate::model::WireframeModel;
use crate::projection::Projection;
use crate::render::line::LineAlgorithm;
use crate::render::Renderer;
use crate::scene::{DrawMode, Gesture, PrimitiveStore};
use crate::surface::Surface;
use crate::timing::FramePacer;
use crate::transform::{AnimationState, BounceArea};

/// A wireframe plus the state that moves it.
#[derive(Debug, Clone)]
pub struct AnimatedObject {
    pub model: WireframeModel,
    pub state: AnimationState,
}

impl AnimatedObject {
    pub fn new(model: WireframeModel, state: AnimationState) -> Self {
        Self { model, state }
    }
}

pub struct Engine {
    renderer: Renderer,
    gesture: Gesture,
    store: PrimitiveStore,
    objects: Vec<AnimatedObject>,
    running: bool,
    frame: u64,
    status_dirty: bool,
}

impl Engine {
    /// Build the default scene: a bouncing cube and a spine spinning in
    /// place (or the configured OBJ model in the spine's place).
    pub fn new(config: &EngineConfig) -> Result<Self, LoadError> {
        let mut cube = AnimationState::new(config.cube_anchor);
        cube.set_velocity(config.cube_velocity)
            .set_spin(config.cube_spin)
            .set_bounds(BounceArea::inset(
                config.width,
                config.height,
                config.bounce_margin,
            ));

        let second_model = match &config.model_path {
            Some(path) => {
                let model = WireframeModel::from_obj(path, config.model_scale)?;
                info!(
                    path = %path.display(),
                    vertices = model.vertices().len(),
                    edges = model.edges().len(),
                    "loaded OBJ model"
                );
                model
            }
            None => WireframeModel::spine(),
        };
        let mut spine = AnimationState::new(config.spine_anchor);
        spine.set_spin(config.spine_spin());

        let objects = vec![
            AnimatedObject::new(WireframeModel::cube(config.cube_half), cube),
            AnimatedObject::new(second_model.with_stroke(config.spine_stroke), spine),
        ];

        Ok(Self::with_objects(config.algorithm, objects))
    }

    /// An engine animating exactly `objects`.
    pub fn with_objects(algorithm: LineAlgorithm, objects: Vec<AnimatedObject>) -> Self {
        Self {
            renderer: Renderer::new(algorithm),
            gesture: Gesture::default(),
            store: PrimitiveStore::new(),
            objects,
            running: true,
            frame: 0,
            status_dirty: true,
        }
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.renderer.algorithm()
    }

    pub fn mode(&self) -> DrawMode {
        self.gesture.mode()
    }

    pub fn primitives(&self) -> &PrimitiveStore {
        &self.store
    }

    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Status line shown by surfaces that support it.
    pub fn status(&self) -> String {
        format!(
            "Lines: {} [F/D/B] | Mode: {} [L/C]",
            self.renderer.algorithm(),
            self.gesture.mode()
        )
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerClick(at) => {
                if let Some(primitive) = self.gesture.click(at) {
                    self.store.push(primitive);
                }
            }
            InputEvent::SelectAlgorithm(algorithm) => {
                if algorithm != self.renderer.algorithm() {
                    info!(%algorithm, "line algorithm selected");
                    self.renderer.set_algorithm(algorithm);
                    self.status_dirty = true;
                }
            }
            InputEvent::SelectMode(mode) => {
                if mode != self.gesture.mode() {
                    info!(%mode, "draw mode selected");
                    self.gesture.set_mode(mode);
                    self.status_dirty = true;
                }
            }
            InputEvent::Quit => {
                info!(frame = self.frame, "quit requested");
                self.running = false;
            }
        }
    }

    /// Run one frame against `surface`.
    pub fn tick(
        &mut self,
        surface: &mut dyn Surface,
        events: &[InputEvent],
    ) -> Result<(), EngineError> {
        for &event in events {
            self.handle_event(event);
        }
        if self.status_dirty {
            surface.set_status(&self.status());
            self.status_dirty = false;
        }

        surface.clear();
        self.renderer.draw_primitives(surface, &self.store)?;

        for object in &mut self.objects {
            object.state.advance();
            let projection = Projection::from_state(&object.state);
            self.renderer
                .draw_wireframe(surface, &object.model, &projection);
        }

        surface.flush()?;
        self.frame += 1;
        Ok(())
    }

    /// Drive frames until a quit command arrives; returns the number of
    /// frames rendered.
    pub fn run(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputSource,
        pacer: &mut dyn FramePacer,
    ) -> Result<u64, EngineError> {
        self.run_frames(pacer, |engine| {
            let events = input.poll_events();
            engine.tick(surface, &events)
        })
    }

    /// [`run`](Engine::run) against one object that both displays frames
    /// and produces input, such as the SDL2 window.
    pub fn run_interactive<T>(
        &mut self,
        io: &mut T,
        pacer: &mut dyn FramePacer,
    ) -> Result<u64, EngineError>
    where
        T: Surface + InputSource,
    {
        self.run_frames(pacer, |engine| {
            let events = io.poll_events();
            engine.tick(io, &events)
        })
    }

    fn run_frames<F>(&mut self, pacer: &mut dyn FramePacer, mut frame: F) -> Result<u64, EngineError>
    where
        F: FnMut(&mut Self) -> Result<(), EngineError>,
    {
        info!(algorithm = %self.renderer.algorithm(), mode = %self.gesture.mode(), "engine started");
        while self.running {
            frame(self)?;
            let delta = pacer.wait();
            trace!(frame = self.frame, ?delta, primitives = self.store.len(), "frame");
        }
        Ok(self.frame)
    }
}

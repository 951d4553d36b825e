//! Orchestration of mesh, lights, animation and rendering for one surface.
//!
//! The controller never schedules anything itself. Operations that need work
//! on a later frame return a [`FrameTask`]; the host runs it on its next frame
//! callback through [`SurfaceController::run_frame`] and schedules whatever
//! task that returns in turn.

use crate::animator::{resolve_frames, FrameTask, LightAnimator, LightTween};
use crate::color::Color;
use crate::config::SurfaceConfig;
use crate::distort::distort_mesh;
use crate::error::Result;
use crate::light::{Light, LightDef};
use crate::mesh::generate_mesh;
use crate::scene::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drawing backend.
pub trait Renderer {
    /// Resize the drawable surface, in px.
    fn set_size(&mut self, width: f64, height: f64) -> Result<()>;
    fn render(&mut self, scene: &Scene) -> Result<()>;
}

/// Element the surface fills.
pub trait Container {
    /// Current content `(width, height)` in px.
    fn size(&self) -> (f64, f64);
}

pub struct SurfaceController<R: Renderer, C: Container> {
    config: SurfaceConfig,
    light_defs: Vec<LightDef>,
    scene: Scene,
    renderer: R,
    container: C,
    rng: StdRng,
    animator: LightAnimator,
    resize_pending: bool,
}

impl<R: Renderer, C: Container> SurfaceController<R, C> {
    /// Build the distorted mesh and one light per definition, randomizing
    /// from OS entropy.
    pub fn new(config: SurfaceConfig, light_defs: Vec<LightDef>, container: C, renderer: R) -> Result<Self> {
        Self::with_rng(config, light_defs, container, renderer, StdRng::from_entropy())
    }

    /// Like [`SurfaceController::new`] with an explicit random source, so
    /// meshes are reproducible.
    pub fn with_rng(
        config: SurfaceConfig,
        light_defs: Vec<LightDef>,
        container: C,
        mut renderer: R,
        mut rng: StdRng,
    ) -> Result<Self> {
        let (width, height) = container.size();
        let mut mesh = generate_mesh(&config, width, height)?;
        distort_mesh(&mut mesh, &config, &mut rng)?;
        renderer.set_size(mesh.geometry.width, mesh.geometry.height)?;

        let mut scene = Scene::new(mesh);
        for def in &light_defs {
            scene.add_light(Light::from(def));
        }
        log::info!(
            "[surface] initialized {}x{} renderer={} lights={} distortion={}",
            width,
            height,
            config.render_with,
            scene.lights.len(),
            config.distortion
        );

        Ok(Self {
            config,
            light_defs,
            scene,
            renderer,
            container,
            rng,
            animator: LightAnimator::new(),
            resize_pending: false,
        })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn animator(&self) -> &LightAnimator {
        &self.animator
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize_pending
    }

    /// Surface width: the mesh's padded width.
    pub fn width(&self) -> f64 {
        self.scene.mesh.geometry.width
    }

    /// Surface height: the mesh's padded height.
    pub fn height(&self) -> f64 {
        self.scene.mesh.geometry.height
    }

    /// Replace the mesh with a fresh distorted one for the container's
    /// current size and resize the renderer to match. Lights are left as
    /// they are until the next `draw`.
    pub fn resize(&mut self) -> Result<()> {
        let (width, height) = self.container.size();
        let mut mesh = generate_mesh(&self.config, width, height)?;
        distort_mesh(&mut mesh, &self.config, &mut self.rng)?;
        let (w, h) = (mesh.geometry.width, mesh.geometry.height);
        self.scene.mesh = mesh;
        self.renderer.set_size(w, h)?;
        log::debug!("[surface] resized to {}x{} (surface {}x{})", width, height, w, h);
        Ok(())
    }

    /// Resolve every light position against the current dimensions and
    /// render.
    pub fn draw(&mut self) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        for (light, def) in self.scene.lights.iter_mut().zip(&self.light_defs) {
            light.place(def.position.resolve(w, h)?);
        }
        self.render()
    }

    /// Paint the mesh black and render immediately. Geometry and lights are
    /// untouched.
    pub fn dark(&mut self) -> Result<()> {
        let material = &mut self.scene.mesh.material;
        material.ambient = Color::BLACK;
        material.diffuse = Color::BLACK;
        self.render()
    }

    /// Start tweening every light from its start pose to its current target
    /// over `frames` frames (see [`resolve_frames`]). Step 0 renders before
    /// this returns; the returned task continues the run.
    ///
    /// A run already in flight is superseded and its pending task goes stale.
    pub fn light_up(&mut self, frames: Option<f64>) -> Result<Option<FrameTask>> {
        let frames = resolve_frames(frames);
        let (w, h) = (self.width(), self.height());
        let mut tweens = Vec::with_capacity(self.scene.lights.len());
        for (light, def) in self.scene.lights.iter().zip(&self.light_defs) {
            tweens.push(LightTween::new(def.resolve_start(w, h)?, light.target));
        }
        if self.animator.is_running() {
            log::debug!("[light-up] superseding run {}", self.animator.generation());
        }
        let generation = self.animator.begin(tweens, frames);
        log::info!("[light-up] run {} over {} frames", generation, frames);

        let material = &mut self.scene.mesh.material;
        material.ambient = self.config.material_ambient;
        material.diffuse = self.config.material_diffuse;

        self.animate_step()
    }

    /// Ask for the mesh to be rebuilt on the next frame. Returns `None` when
    /// a resize is already pending, so bursts of notifications coalesce into
    /// one rebuild per frame.
    pub fn request_resize(&mut self) -> Option<FrameTask> {
        if self.resize_pending {
            return None;
        }
        self.resize_pending = true;
        Some(FrameTask::Resize)
    }

    /// Run a task handed back by the host's frame callback. Returns the
    /// follow-up task to schedule, if any.
    pub fn run_frame(&mut self, task: FrameTask) -> Result<Option<FrameTask>> {
        match task {
            FrameTask::Animate { generation } => {
                if !self.animator.is_current(generation) {
                    log::debug!("[light-up] dropping stale frame for run {}", generation);
                    return Ok(None);
                }
                self.animator.advance();
                self.animate_step()
            }
            FrameTask::Resize => {
                if !self.resize_pending {
                    return Ok(None);
                }
                self.resize_pending = false;
                self.resize()?;
                self.draw()?;
                Ok(None)
            }
        }
    }

    /// Cancel any light-up run and pending resize. Tasks already handed to
    /// the host become no-ops.
    pub fn teardown(&mut self) {
        self.animator.cancel();
        self.resize_pending = false;
        log::info!("[surface] torn down");
    }

    fn render(&mut self) -> Result<()> {
        if self.scene.mesh.geometry.update_faces() {
            log::debug!("[surface] refreshed {} faces", self.scene.mesh.geometry.triangles.len());
        }
        self.renderer.render(&self.scene)
    }

    fn animate_step(&mut self) -> Result<Option<FrameTask>> {
        for (light, pos) in self.scene.lights.iter_mut().zip(self.animator.positions()) {
            light.set_position(pos.x, pos.y, pos.z);
        }
        if let Err(e) = self.render() {
            self.animator.cancel();
            return Err(e);
        }
        let next = self.animator.next_task();
        if next.is_none() {
            log::info!("[light-up] run {} finished", self.animator.generation());
            self.animator.finish();
        }
        Ok(next)
    }
}

//! Buoyant - a ship riding procedurally animated waves
//!
//! Arrow keys push the ship around; the water decides its height and tilt.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use buoyant::camera::CameraSystem;
use buoyant::cli::Args;
use buoyant::frame::FrameUniforms;
use buoyant::mesh::SceneMeshes;
use buoyant::params::{FixedCamera, RenderConfig, WaveParams};
use buoyant::rendering::RenderSystem;
use buoyant::simulation::{FrameClock, Simulation};
use buoyant::wave::WaveField;

/// Fixed step used when running without a window
const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation state, owned by the frame loop
    simulation: Simulation,
    camera: CameraSystem,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    clock: FrameClock,

    /// Fatal error raised while setting up the window or GPU
    init_error: Option<anyhow::Error>,
}

impl App {
    fn new(render_config: RenderConfig, simulation: Simulation) -> Self {
        let camera = CameraSystem::new(
            FixedCamera::default(),
            render_config.window_width,
            render_config.window_height,
        );

        Self {
            window: None,
            render_system: None,
            simulation,
            camera,
            render_config,
            clock: FrameClock::new(),
            init_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Ship on the waves")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let meshes = SceneMeshes::new(&self.render_config);
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &meshes,
            self.simulation.wave(),
        ))
        .context("Failed to initialize graphics")?;

        // The window may not match the requested size (DPI scaling, tiling WMs)
        let (width, height) = render_system.size();
        self.camera.resize(width, height);
        info!(
            "Window ready: {}x{} (aspect {:.3})",
            width,
            height,
            self.camera.aspect_ratio()
        );
        info!("Arrow keys steer, ESC quits");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.clock = FrameClock::new();
        Ok(())
    }

    /// Advance the simulation and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let (dt, time_s) = self.clock.tick();
        self.simulation.step(dt, time_s);

        let frame = FrameUniforms::new(
            &self.simulation.ship,
            &self.camera,
            time_s,
            &self.render_config,
        );

        match render_system.render(&frame) {
            Ok(()) => {}
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                warn!("Surface {:?}, reconfiguring", e);
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            error!("{:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                self.simulation.input.handle_key(code, state);
            }
            WindowEvent::Focused(false) => {
                // Releases may never arrive for keys held while focus moves away
                self.simulation.input.clear();
            }
            WindowEvent::Resized(size) => {
                self.camera.resize(size.width, size.height);
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
                info!(
                    "Resized to {}x{} (aspect {:.3})",
                    size.width,
                    size.height,
                    self.camera.aspect_ratio()
                );
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let wave = WaveField::new(WaveParams::default());
    let wave_params = wave.params();
    info!(
        "Wave field: amplitude {} m, frequency ({}, {}) rad/m",
        wave_params.amplitude_m, wave_params.frequency_x, wave_params.frequency_z
    );
    let mut simulation = Simulation::new(wave, args.ship_physics());

    if let Some(frames) = args.headless {
        info!("Running {} headless frames", frames);
        simulation.run_headless(frames, HEADLESS_DT);
        return Ok(());
    }

    let mut app = App::new(args.render_config(), simulation);
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

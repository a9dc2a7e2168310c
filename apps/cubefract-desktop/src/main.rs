use anyhow::Result;
use clap::{Parser, ValueEnum};
use cubefract_input::{Control, HeldControls, sample};
use cubefract_render_wgpu::{CubeRenderer, RenderMode, RenderSources};
use cubefract_scene::{Camera, CursorTracker, FpsCounter, FrameClock, Lights};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Lit cube at the origin with an orbiting point light.
    Orbit,
    /// Recursive cube-fractal layout.
    Fractal,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Orbit => RenderMode::Orbit,
            Mode::Fractal => RenderMode::Fractal,
        }
    }
}

#[derive(Parser)]
#[command(name = "cubefract-desktop", about = "Interactive textured cube demo")]
struct Cli {
    /// Render strategy
    #[arg(long, value_enum, default_value_t = Mode::Orbit)]
    mode: Mode,

    /// Vertex shader source path
    #[arg(long, default_value = "shaders/cube.vert.wgsl")]
    vert: PathBuf,

    /// Fragment shader source path
    #[arg(long, default_value = "shaders/cube.frag.wgsl")]
    frag: PathBuf,

    /// Texture image path
    #[arg(long, default_value = "assets/container.png")]
    texture: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Map a physical key to its semantic control, if bound.
fn map_key(key: KeyCode) -> Option<Control> {
    Some(match key {
        KeyCode::KeyW => Control::MoveForward,
        KeyCode::KeyS => Control::MoveBack,
        KeyCode::KeyA => Control::StrafeLeft,
        KeyCode::KeyD => Control::StrafeRight,
        KeyCode::Space => Control::Boost,
        KeyCode::Digit1 => Control::AmbientRedUp,
        KeyCode::Digit2 => Control::AmbientRedDown,
        KeyCode::Digit3 => Control::AmbientGreenUp,
        KeyCode::Digit4 => Control::AmbientGreenDown,
        KeyCode::Digit5 => Control::AmbientBlueUp,
        KeyCode::Digit6 => Control::AmbientBlueDown,
        KeyCode::Digit7 => Control::PointStrengthUp,
        KeyCode::Digit8 => Control::PointStrengthDown,
        KeyCode::NumpadAdd | KeyCode::Equal => Control::AmbientStrengthUp,
        KeyCode::NumpadSubtract | KeyCode::Minus => Control::AmbientStrengthDown,
        _ => return None,
    })
}

/// Per-frame mutable state, one writer per field per frame.
struct AppState {
    camera: Camera,
    lights: Lights,
    cursor: CursorTracker,
    clock: FrameClock,
    fps: FpsCounter,
    held: HeldControls,
    started: Instant,
}

impl AppState {
    fn new() -> Self {
        Self {
            camera: Camera::default(),
            lights: Lights::default(),
            cursor: CursorTracker::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            held: HeldControls::new(),
            started: Instant::now(),
        }
    }
}

struct GpuApp {
    cli: Cli,
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<CubeRenderer>,
    /// Setup failure to surface through `main` as exit code 1.
    fatal: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            state: AppState::new(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            fatal: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("cubefract")
            .with_inner_size(PhysicalSize::new(self.cli.width, self.cli.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        // Relative-look: keep the cursor in the window and hide it. Not
        // every platform supports both grab modes, hence the fallback.
        if window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
            .is_err()
        {
            tracing::warn!("cursor grab unavailable; look input may escape the window");
        }
        window.set_cursor_visible(false);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubefract_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let sources = RenderSources {
            vertex_shader: &self.cli.vert,
            fragment_shader: &self.cli.frag,
            texture: &self.cli.texture,
        };
        let renderer = match CubeRenderer::new(
            &device,
            &queue,
            surface_format,
            size.width,
            size.height,
            self.cli.mode.into(),
            &sources,
        ) {
            Ok(renderer) => renderer,
            Err(err) => {
                self.fatal = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                // The window is fixed-size, but some window managers ignore
                // the hint; keep the surface consistent anyway.
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect =
                        config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(control) = map_key(key) {
                    self.state
                        .held
                        .set(control, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = self.state.started.elapsed().as_secs_f64();
                self.state.clock.advance(now);
                sample(
                    &self.state.held,
                    &mut self.state.camera,
                    &mut self.state.lights,
                    self.state.clock.delta(),
                );
                if self.cli.mode == Mode::Orbit {
                    self.state.lights.orbit(self.state.clock.elapsed());
                }

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        &self.state.lights,
                    );
                }

                output.present();

                if let Some(fps) = self.state.fps.frame(now) {
                    tracing::info!("{fps} fps");
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion keeps look input alive even when the grabbed cursor is
        // pinned at the window border or frozen by a locked grab.
        if let DeviceEvent::MouseMotion { delta } = event {
            if let Some((dx, dy)) = self
                .state
                .cursor
                .motion(delta.0 as f32, delta.1 as f32)
            {
                self.state.camera.look(dx, dy);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("cubefract-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(cli);
    event_loop.run_app(&mut app)?;

    match app.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

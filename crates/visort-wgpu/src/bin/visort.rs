//! Animated sort visualizer.
//!
//! Usage: `visort [ALGORITHM] [SEED]`
//! - ALGORITHM: `bubble` or `quick` (default `quick`)
//! - SEED: shuffle seed; omitted means a fresh random shuffle
//!
//! Controls:
//! - Escape or closing the window: Quit

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use visort_vis::{Invocation, Session, VisConfig};
use visort_wgpu::{Error, Renderer, Result};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

struct App {
    session: Session,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    next_frame: Instant,
    /// Set when the window or GPU could not be brought up.
    init_error: Option<Error>,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            window: None,
            renderer: None,
            next_frame: Instant::now(),
            init_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = self.session.config();
        let window_attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            config.window_width,
            config.window_height,
        ))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match self.session.draw(renderer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("Out of GPU memory");
                event_loop.exit();
            }
            Err(e) => {
                tracing::warn!("Render error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
            return;
        }

        self.next_frame = Instant::now();
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Quit requested");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Quit requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            self.session.tick();
            window.request_redraw();
            self.next_frame = now + self.session.config().frame_interval;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn run(invocation: Invocation) -> Result<()> {
    let config = VisConfig::default();
    tracing::info!(
        "Window {}x{}, {} columns of width {}, frame interval {:?}",
        config.window_width,
        config.window_height,
        config.column_count(),
        config.column_width,
        config.frame_interval
    );

    // The trace is complete before any window exists.
    let session = Session::new(config, invocation.algorithm, invocation.seed)?;
    tracing::info!(
        "Playing {} sort: {} swaps",
        session.algorithm(),
        session.playback().total_steps()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session);
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let invocation = match Invocation::from_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(2);
        }
    };

    tracing::info!("Visort: {} sort", invocation.algorithm);
    if let Some(seed) = invocation.seed {
        tracing::info!("Shuffle seed: {}", seed);
    }

    match run(invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

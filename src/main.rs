//! Quartet entry point
//!
//! Opens a fullscreen window and drives the animation core at a fixed tick
//! rate: redraws run at display rate, ticks are consumed from a frame-time
//! accumulator, and keyboard input reconfigures the core between ticks.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use quartet::anim::{Animation, Frame};
use quartet::consts::{CIRCLE_SEGMENTS, MAX_SUBSTEPS, TICK_DT, VIEW_SCALE};
use quartet::renderer::vertex::{Vertex, colors};
use quartet::renderer::{RenderState, shapes};

struct App {
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    anim: Animation,
    current: Frame,
    accumulator: f32,
    last_time: Option<Instant>,
}

impl App {
    fn new(mut anim: Animation) -> Self {
        let current = anim.next_frame();
        Self {
            window: None,
            render: None,
            anim,
            current,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Consume elapsed time as fixed-rate ticks
    fn update(&mut self) {
        let now = Instant::now();
        let dt = match self.last_time {
            Some(last) => now.duration_since(last).as_secs_f32().min(0.1),
            None => TICK_DT,
        };
        self.last_time = Some(now);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.current = self.anim.next_frame();
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
    }

    /// Build the scene geometry for the current frame
    fn scene(&self) -> Vec<Vertex> {
        let frame = &self.current;
        let mut vertices = Vec::new();
        for circle in &frame.circles {
            vertices.extend(shapes::circle(
                circle.center,
                circle.radius,
                colors::CIRCLE,
                CIRCLE_SEGMENTS,
            ));
        }
        vertices.extend(shapes::easing_curve(
            Vec2::ZERO,
            frame.sharpness,
            frame.progress,
            frame.eased,
        ));
        vertices
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Quartet")
            .with_fullscreen(Some(Fullscreen::Borderless(None)));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        window.set_cursor_visible(false);

        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let render = pollster::block_on(async {
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .expect("Failed to get adapter");

            log::info!("Using adapter: {:?}", adapter.get_info().name);

            RenderState::new(surface, &adapter, size.width, size.height, VIEW_SCALE).await
        });

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                match code {
                    KeyCode::Escape => event_loop.exit(),
                    KeyCode::ArrowLeft => self.anim.increase_duration(),
                    KeyCode::ArrowRight => self.anim.decrease_duration(),
                    KeyCode::ArrowUp => self.anim.increase_sharpness(),
                    KeyCode::ArrowDown => self.anim.decrease_sharpness(),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                self.update();
                let vertices = self.scene();

                if let Some(render) = &mut self.render {
                    match render.render(&vertices) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let (w, h) = render.size;
                            render.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of memory!");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    let anim = Animation::new(seed);
    log::info!(
        "Quartet starting: seed {}, {} arrangements, {:.2}s per cycle",
        seed,
        anim.group_count(),
        anim.config().duration_secs
    );

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(anim);
    event_loop.run_app(&mut app).expect("Event loop error");
}

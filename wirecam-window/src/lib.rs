/// Windowed frontend for the wireframe renderer
///
/// Thin platform binding: window creation, keyboard/mouse capture and
/// the fixed-rate frame loop. All transform and projection work lives
/// in `wirecam-core`.
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};
use wirecam_core::{Camera, FrameInput, Scene, Viewport};

pub mod gpu;

pub use gpu::GpuContext;

const TARGET_FPS: u32 = 60;

/// Main application: owns the scene, camera and per-frame input
/// state, and drives one pipeline pass per frame.
pub struct WindowApp {
    scene: Scene,
    camera: Camera,
    viewport: Viewport,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    keys_held: HashSet<KeyCode>,
    mouse_captured: bool,
    look_dx: f32,
    look_dy: f32,
    last_frame: Instant,
    target_frame_time: Duration,
    // FPS/HUD bookkeeping
    frame_count: u32,
    hud_updated: Instant,
}

impl WindowApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            camera: Camera::default(),
            viewport: Viewport::default(),
            window: None,
            gpu: None,
            keys_held: HashSet::new(),
            mouse_captured: false,
            look_dx: 0.0,
            look_dy: 0.0,
            last_frame: Instant::now(),
            target_frame_time: Duration::from_secs(1) / TARGET_FPS,
            frame_count: 0,
            hud_updated: Instant::now(),
        }
    }

    fn set_mouse_captured(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        let grab = if captured {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            tracing::warn!("cursor grab failed: {e}");
            return;
        }
        window.set_cursor_visible(!captured);
        self.mouse_captured = captured;
        tracing::info!("pointer capture {}", if captured { "on" } else { "off" });
    }

    fn frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            forward: self.keys_held.contains(&KeyCode::KeyW),
            back: self.keys_held.contains(&KeyCode::KeyS),
            left: self.keys_held.contains(&KeyCode::KeyA),
            right: self.keys_held.contains(&KeyCode::KeyD),
            up: self.keys_held.contains(&KeyCode::Space),
            down: self.keys_held.contains(&KeyCode::ShiftLeft),
            look_dx: self.look_dx,
            look_dy: self.look_dy,
        };
        self.look_dx = 0.0;
        self.look_dy = 0.0;
        input
    }

    fn frame(&mut self) {
        let frame_start = Instant::now();
        let dt = (frame_start - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = frame_start;

        let input = self.frame_input();
        self.camera.update(&input, dt);
        self.scene.advance(dt);

        if let Some(gpu) = &mut self.gpu {
            if gpu.begin_frame() {
                self.scene.render(&self.camera, &self.viewport, gpu);
            }
        }

        self.update_hud();

        // Cap the frame rate; an overrun is not recovered.
        let elapsed = frame_start.elapsed();
        if elapsed < self.target_frame_time {
            std::thread::sleep(self.target_frame_time - elapsed);
        }
    }

    /// Once-per-second window title refresh standing in for an
    /// on-screen text overlay.
    fn update_hud(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        let elapsed = (now - self.hud_updated).as_secs_f32();
        if elapsed < 1.0 {
            return;
        }
        let fps = self.frame_count as f32 / elapsed;
        self.frame_count = 0;
        self.hud_updated = now;

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "Wirecam | pos ({:.1}, {:.1}, {:.1}) yaw {:.2} pitch {:.2} | {:.0} FPS",
                self.camera.position.x,
                self.camera.position.y,
                self.camera.position.z,
                self.camera.yaw,
                self.camera.pitch,
                fps,
            ));
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Wirecam")
            .with_inner_size(PhysicalSize::new(self.viewport.width, self.viewport.height));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match GpuContext::new(window.clone()) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.last_frame = Instant::now();
        self.hud_updated = Instant::now();
        self.set_mouse_captured(true);
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
                self.viewport.width = new_size.width.max(1);
                self.viewport.height = new_size.height.max(1);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                if pressed {
                    self.keys_held.insert(key);
                } else {
                    self.keys_held.remove(&key);
                }
                match key {
                    KeyCode::Escape if pressed => {
                        let captured = self.mouse_captured;
                        self.set_mouse_captured(!captured);
                    }
                    KeyCode::KeyQ if pressed => {
                        event_loop.exit();
                    }
                    _ => {}
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if !self.mouse_captured {
                    self.set_mouse_captured(true);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.mouse_captured {
                self.look_dx += delta.0 as f32;
                self.look_dy += delta.1 as f32;
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

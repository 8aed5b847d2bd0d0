//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application,
//! and the clear/draw/present loop every lesson runs.

use std::{sync::Arc, time::Instant};

use glow::HasContext;
use sdl2::{
    event::{Event, WindowEvent},
    video::{GLProfile, SwapInterval},
};

use crate::{config::WindowConfig, error::GfxError};

/// The viewport covering the whole drawable, in framebuffer pixels.
fn viewport_rect((width, height): (u32, u32)) -> [i32; 4] {
    [0, 0, width as i32, height as i32]
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub window: sdl2::video::Window,
    pub event_pump: sdl2::EventPump,
    config: WindowConfig,
    started: Instant,
    // Kept alive as long as the window.
    _gl_context: sdl2::video::GLContext,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl App {
    /// Creates the window described by `config` and makes its OpenGL context current.
    pub fn new(config: &WindowConfig) -> Result<Self, GfxError> {
        config.validate()?;

        let sdl = sdl2::init().map_err(GfxError::Sdl)?;
        let video_subsystem = sdl.video().map_err(GfxError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GfxError::WindowBuild(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(GfxError::Context)?;
        window.gl_make_current(&gl_context).map_err(GfxError::Context)?;

        let interval = if config.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let event_pump = sdl.event_pump().map_err(GfxError::Sdl)?;

        let (width, height) = window.drawable_size();
        let [x, y, w, h] = viewport_rect(window.drawable_size());
        unsafe {
            gl.viewport(x, y, w, h);
            if config.wireframe {
                gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
            }
            log::info!(
                "OpenGL {} on {} ({})",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR)
            );
        }
        log::debug!("opened '{}' at {}x{}", config.title, width, height);

        Ok(Self {
            gl: Arc::new(gl),
            window,
            event_pump,
            config: config.clone(),
            started: Instant::now(),
            _gl_context: gl_context,
            _video_subsystem: video_subsystem,
            _sdl: sdl,
        })
    }

    /// Seconds since the window was opened.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Clears, calls `frame`, presents and polls events until the window is closed.
    ///
    /// `frame` receives the seconds elapsed since the window was opened.
    pub fn run(&mut self, mut frame: impl FnMut(f32)) {
        let clear = self.config.clear_color();
        let mut frames: u64 = 0;

        'running: loop {
            unsafe {
                self.gl.clear_color(clear.x, clear.y, clear.z, clear.w);
                self.gl.clear(glow::COLOR_BUFFER_BIT);
            }

            frame(self.elapsed());
            self.window.gl_swap_window();
            frames += 1;

            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    // The event carries window coordinates, which differ from pixels on HiDPI.
                    Event::Window {
                        win_event: WindowEvent::SizeChanged(..),
                        ..
                    } => {
                        let [x, y, w, h] = viewport_rect(self.window.drawable_size());
                        unsafe {
                            self.gl.viewport(x, y, w, h);
                        }
                    }
                    _ => {}
                }
            }
        }

        log::info!(
            "window closed after {} frames ({:.1}s)",
            frames,
            self.elapsed()
        );
    }
}

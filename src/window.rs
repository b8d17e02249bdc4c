//! SDL2 window: the live [`Surface`] and [`InputSource`].
//!
//! Pixels are written into an owned [`FrameBuffer`]; `flush` uploads it to a
//! streaming ARGB8888 texture and presents it. Mouse and keyboard events are
//! translated to [`InputEvent`]s here, so SDL2 types stay inside this module.

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::{debug, warn};

use crate::error::SurfaceError;
use crate::geometry::Point2D;
use crate::input::{command_for_key, InputEvent, InputSource};
use crate::render::FrameBuffer;
use crate::surface::Surface;

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    // Fields drop in declaration order: the texture borrows from the creator
    // and must go first.
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    texture_stale: bool,
    event_pump: sdl2::EventPump,
    buffer: FrameBuffer,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, SurfaceError> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            texture_stale: false,
            event_pump,
            buffer: FrameBuffer::new(width, height),
        })
    }

    fn create_texture(
        creator: &TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Texture<'static>, SurfaceError> {
        // SAFETY: the creator is boxed, so its address is stable for the
        // lifetime of the Window, and `texture` is declared before
        // `texture_creator` so it is dropped first.
        let creator: &'static TextureCreator<WindowContext> = unsafe { &*(creator as *const _) };
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| SurfaceError::Display(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!(width, height, "ignoring resize to an empty window");
            return;
        }
        debug!(width, height, "window resized");
        self.buffer.resize(width, height);
        self.texture_stale = true;
    }
}

fn key_char(key: Keycode) -> Option<char> {
    match key {
        Keycode::F => Some('f'),
        Keycode::D => Some('d'),
        Keycode::B => Some('b'),
        Keycode::L => Some('l'),
        Keycode::C => Some('c'),
        _ => None,
    }
}

impl Surface for Window {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.buffer.set_pixel(x, y, color);
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = (self.buffer.width(), self.buffer.height());
        if self.texture_stale {
            self.texture = Self::create_texture(&self.texture_creator, width, height)?;
            self.texture_stale = false;
        }

        self.texture
            .update(None, self.buffer.as_bytes(), (width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, width, height)))?;
        self.canvas.present();
        Ok(())
    }

    fn set_status(&mut self, status: &str) {
        if let Err(e) = self.canvas.window_mut().set_title(status) {
            warn!(error = %e, "could not set window title");
        }
    }
}

impl InputSource for Window {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let mut resized = None;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(command) = key_char(key).and_then(command_for_key) {
                        events.push(command);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => events.push(InputEvent::PointerClick(Point2D::new(x, y))),
                Event::Window {
                    win_event: WindowEvent::Resized(w, h),
                    ..
                } => resized = Some((w as u32, h as u32)),
                _ => {}
            }
        }

        if let Some((w, h)) = resized {
            self.resize(w, h);
        }
        events
    }
}

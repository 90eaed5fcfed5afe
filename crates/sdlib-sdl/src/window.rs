use anyhow::{Result, anyhow};
use log::{debug, warn};
use sdl2::VideoSubsystem;
use sdl2::render::Canvas;
use sdl2::video::{Window, WindowPos};

use sdlib_engine::config::{AppConfig, RendererFlags, WindowFlags};
use sdlib_engine::time::FramePacer;
use sdlib_engine::window::WindowCommand;

use crate::graphics::SdlGraphics;

/// Creates the window and its canvas from `config`.
pub fn build_canvas(video: &VideoSubsystem, config: &AppConfig) -> Result<Canvas<Window>> {
    let flags = config.window_flags();

    let mut builder = video.window(&config.title, config.width, config.height);
    match config.position {
        Some((x, y)) => builder.position(x, y),
        None => builder.position_centered(),
    };
    if !flags.contains(WindowFlags::SHOWN) {
        builder.hidden();
    }
    if flags.contains(WindowFlags::RESIZABLE) {
        builder.resizable();
    }
    if flags.contains(WindowFlags::FULLSCREEN) {
        builder.fullscreen();
    }
    if flags.contains(WindowFlags::BORDERLESS) {
        builder.borderless();
    }
    if flags.contains(WindowFlags::MAXIMIZED) {
        builder.maximized();
    }
    if flags.contains(WindowFlags::ALLOW_HIGH_DPI) {
        builder.allow_highdpi();
    }

    let mut window = builder
        .build()
        .map_err(|e| anyhow!("window creation failed: {e}"))?;

    let (min_w, min_h) = config.min_size;
    window
        .set_minimum_size(min_w, min_h)
        .map_err(|e| anyhow!("invalid minimum size {min_w}x{min_h}: {e}"))?;

    let (max_w, max_h) = match config.max_size {
        Some(size) => size,
        None => {
            let display = window.display_index().unwrap_or(0);
            let bounds = video
                .display_bounds(display)
                .map_err(|e| anyhow!("display bounds unavailable: {e}"))?;
            (bounds.width(), bounds.height())
        }
    };
    window
        .set_maximum_size(max_w, max_h)
        .map_err(|e| anyhow!("invalid maximum size {max_w}x{max_h}: {e}"))?;

    let renderer = config.renderer_flags();
    let mut canvas = window.into_canvas();
    if renderer.contains(RendererFlags::SOFTWARE) {
        canvas = canvas.software();
    } else if renderer.contains(RendererFlags::ACCELERATED) {
        canvas = canvas.accelerated();
    }
    if renderer.contains(RendererFlags::PRESENT_VSYNC) {
        canvas = canvas.present_vsync();
    }
    if renderer.contains(RendererFlags::TARGET_TEXTURE) {
        canvas = canvas.target_texture();
    }

    let canvas = canvas
        .build()
        .map_err(|e| anyhow!("renderer creation failed: {e}"))?;
    debug!("renderer created: {}", canvas.info().name);
    Ok(canvas)
}

/// Applies one queued command. Returns `true` when the app asked to exit.
pub fn apply_command(gfx: &mut SdlGraphics<'_>, pacer: &mut FramePacer, command: WindowCommand) -> bool {
    let window = gfx.window_mut();
    match command {
        WindowCommand::SetTitle(title) => {
            if let Err(e) = window.set_title(&title) {
                warn!("cannot set window title {title:?}: {e}");
            }
        }
        WindowCommand::SetSize(w, h) => {
            if let Err(e) = window.set_size(w, h) {
                warn!("cannot resize window to {w}x{h}: {e}");
            }
        }
        WindowCommand::SetPosition(x, y) => {
            window.set_position(WindowPos::Positioned(x), WindowPos::Positioned(y));
        }
        WindowCommand::Center => {
            window.set_position(WindowPos::Centered, WindowPos::Centered);
        }
        WindowCommand::SetMinimumSize(w, h) => {
            if let Err(e) = window.set_minimum_size(w, h) {
                warn!("cannot set minimum size {w}x{h}: {e}");
            }
        }
        WindowCommand::SetMaximumSize(w, h) => {
            if let Err(e) = window.set_maximum_size(w, h) {
                warn!("cannot set maximum size {w}x{h}: {e}");
            }
        }
        WindowCommand::SetMaxFramerate(fps) => {
            pacer.set_max_framerate(fps);
        }
        WindowCommand::Exit => return true,
    }
    false
}

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use sdl2::event::Event;

use sdlib_engine::audio::{AudioDevice, SilentAudio};
use sdlib_engine::config::AppConfig;
use sdlib_engine::core::{App, AppControl, FrameCtx};
use sdlib_engine::gfx::Graphics;
use sdlib_engine::input::{InputFrame, InputState};
use sdlib_engine::time::{AppTime, FpsCounter, FrameClock, FramePacer};
use sdlib_engine::window::RuntimeCtx;

use crate::audio::SdlAudio;
use crate::context::SdlContext;
use crate::events::translate;
use crate::graphics::SdlGraphics;
use crate::window::{apply_command, build_canvas};

/// Entry point for the SDL main loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window described by `config` and drives `app` until it exits
    /// or the window is closed.
    ///
    /// Each frame: poll events (`on_event` sees each one before it reaches
    /// the input state), clear, `on_frame`, present, apply queued window
    /// commands, then sleep out the rest of the frame budget.
    pub fn run<A: App>(config: AppConfig, mut app: A) -> Result<()> {
        config.validate().context("invalid configuration")?;

        let sdl = SdlContext::init()?;
        let canvas = build_canvas(&sdl.video, &config)?;
        let mut gfx = SdlGraphics::new(canvas, &sdl.ttf);
        let mut events = sdl.event_pump()?;
        let mut audio = open_audio(&sdl, &config);

        let mut input_state = InputState::default();
        let mut input_frame = InputFrame::default();
        let mut clock = FrameClock::new();
        let mut pacer = FramePacer::new(config.frame_cap());
        let mut fps = FpsCounter::new();
        let mut runtime_ctx = RuntimeCtx::default();

        {
            let window = gfx.window_info(input_state.focused);
            let mut ctx = FrameCtx {
                gfx: &mut gfx,
                audio: audio.as_mut(),
                input: &input_state,
                input_frame: &input_frame,
                time: AppTime::default(),
                fps: 0.0,
                window: &window,
                runtime: &mut runtime_ctx,
            };
            app.on_init(&mut ctx).context("app initialization failed")?;
        }

        let mut running = !apply_commands(&mut gfx, &mut pacer, &mut runtime_ctx);
        info!("entering main loop");
        clock.reset();

        while running {
            pacer.begin_frame();

            for event in events.poll_iter() {
                if let Event::Quit { .. } = event {
                    debug!("quit requested by the window system");
                    running = false;
                    continue;
                }
                if let Some(ev) = translate(&event) {
                    if app.on_event(&ev) == AppControl::Exit {
                        running = false;
                    }
                    input_state.apply_event(&mut input_frame, ev);
                }
            }
            if !running {
                break;
            }

            let time = clock.tick();
            gfx.clear(config.clear_color)?;

            let control = {
                let window = gfx.window_info(input_state.focused);
                let mut ctx = FrameCtx {
                    gfx: &mut gfx,
                    audio: audio.as_mut(),
                    input: &input_state,
                    input_frame: &input_frame,
                    time,
                    fps: fps.fps(),
                    window: &window,
                    runtime: &mut runtime_ctx,
                };
                app.on_frame(&mut ctx)
            };

            gfx.present();

            if control == AppControl::Exit {
                runtime_ctx.exit();
            }
            if apply_commands(&mut gfx, &mut pacer, &mut runtime_ctx) {
                running = false;
            }

            // Per-frame deltas are consumed.
            input_frame.clear();
            pacer.wait();

            if let Some(rate) = fps.tick(time.delta as f64) {
                trace!("{rate:.1} fps");
            }
        }

        info!("main loop finished");
        let window = gfx.window_info(input_state.focused);
        let mut ctx = FrameCtx {
            gfx: &mut gfx,
            audio: audio.as_mut(),
            input: &input_state,
            input_frame: &input_frame,
            time: AppTime {
                delta: 0.0,
                total: clock.total(),
                frame_index: 0,
            },
            fps: fps.fps(),
            window: &window,
            runtime: &mut runtime_ctx,
        };
        app.on_quit(&mut ctx);

        Ok(())
    }
}

/// A missing or broken audio device is not fatal: the app runs silent.
fn open_audio(sdl: &SdlContext, config: &AppConfig) -> Box<dyn AudioDevice> {
    if !config.audio.enabled {
        debug!("audio disabled by configuration");
        return Box::new(SilentAudio::new());
    }
    match SdlAudio::open(&sdl.sdl, &config.audio) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            warn!("{e:#}; continuing without sound");
            Box::new(SilentAudio::new())
        }
    }
}

/// Applies and clears every queued command; returns `true` on exit.
fn apply_commands(gfx: &mut SdlGraphics<'_>, pacer: &mut FramePacer, ctx: &mut RuntimeCtx) -> bool {
    let mut exit = false;
    for command in ctx.drain() {
        exit |= apply_command(gfx, pacer, command);
    }
    exit
}

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use tilesnake::config::{Settings, StartState};
use tilesnake::input::Key;
use tilesnake::logging;
use tilesnake::render::PixelCanvas;
use tilesnake::state::App;

#[derive(Parser)]
#[command(name = "tilesnake")]
#[command(version, about = "Tile-grid snake game")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start on the title screen instead of straight in a game
    #[arg(long)]
    title: bool,

    /// Difficulty index (0 = Slow .. 4 = Dunno)
    #[arg(long)]
    difficulty: Option<i64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if self.title {
            settings.start_state = StartState::Title;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Physical keys behind each logical key.
fn physical_keys(key: Key) -> &'static [VirtualKeyCode] {
    match key {
        Key::Up => &[VirtualKeyCode::Up, VirtualKeyCode::W],
        Key::Down => &[VirtualKeyCode::Down, VirtualKeyCode::S],
        Key::Left => &[VirtualKeyCode::Left, VirtualKeyCode::A],
        Key::Right => &[VirtualKeyCode::Right, VirtualKeyCode::D],
        Key::Confirm => &[VirtualKeyCode::Y, VirtualKeyCode::Z],
        Key::Cancel => &[VirtualKeyCode::X],
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    logging::init(&settings.log_level)?;
    info!("Starting with {:?}", settings);

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Snake Game")
        .with_inner_size(LogicalSize::new(settings.window_width, settings.window_height))
        .with_resizable(true)
        .build(&event_loop)
        .context("Failed to create window")?;

    let (canvas_width, canvas_height) = (settings.canvas_width, settings.canvas_height);
    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(canvas_width, canvas_height, surface_texture)
            .context("Failed to create pixel surface")?
    };

    let mut app = App::new(&settings);
    let frame_interval = Duration::from_secs(1) / settings.frame_rate;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            let tile_size = app.ctx.tile_size;
            let frame = pixels.frame_mut();
            let mut canvas = PixelCanvas::new(frame, canvas_width, canvas_height, tile_size);
            app.draw(&mut canvas);
            if let Err(err) = pixels.render() {
                error!("Render failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape)
                || input.close_requested()
                || input.destroyed()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized()
                && let Err(err) = pixels.resize_surface(size.width, size.height)
            {
                error!("Resize failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Busy-poll limiter: skip the frame until the interval has passed.
            if last_frame.elapsed() < frame_interval {
                return;
            }
            last_frame = Instant::now();

            app.sample_inputs(|key| physical_keys(key).iter().any(|&code| input.key_held(code)));
            if let Err(err) = app.tick() {
                error!("Tick failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }

            window.request_redraw();
        }
    });
}

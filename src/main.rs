use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use game_of_life::config::Config;
use game_of_life::error::LifeError;
use game_of_life::game::{clock_seed, Game};
use game_of_life::graphics::GraphicsRenderer;
use game_of_life::input::InputHandler;

fn main() {
    env_logger::init();

    if let Err(err) = run(Config::default()) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), LifeError> {
    match serde_json::to_string(&config) {
        Ok(json) => log::info!("Starting with config {}", json),
        Err(err) => log::warn!("Could not serialize config: {}", err),
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(config.window_size())
        .with_min_inner_size(config.window_size())
        .build(&event_loop)?;

    let buffer_size = config.grid_size as u32;
    let mut graphics = GraphicsRenderer::new(&window, buffer_size, buffer_size)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Random seed: {}", seed);
    let mut game = Game::seeded(&config, &mut StdRng::seed_from_u64(seed));

    let mut input = InputHandler::new();
    let frame_interval = config.frame_interval();
    let mut next_frame = Instant::now();
    let mut occluded = false;
    let mut minimized = false;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => {
                if input.handle_window_event(&event) {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        minimized = size.width == 0 || size.height == 0;
                        if !minimized {
                            graphics.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::Occluded(hidden) => {
                        occluded = hidden;
                    }
                    _ => {}
                }
            }
            Event::MainEventsCleared => {
                if let ControlFlow::ExitWithCode(_) = *control_flow {
                    return;
                }
                let now = Instant::now();
                if now >= next_frame {
                    next_frame = now + frame_interval;

                    let pointer = input
                        .primary_position()
                        .map(|position| graphics.window_pos_to_cell(position));

                    if game.frame(pointer, occluded || minimized) {
                        graphics.render(game.grid());
                        if let Err(err) = graphics.present() {
                            log::error!("Render error: {}", err);
                            *control_flow = ControlFlow::ExitWithCode(1);
                            return;
                        }
                    }
                }
                control_flow.set_wait_until(next_frame);
            }
            _ => {}
        }
    });
}

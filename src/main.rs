use clap::Parser;
use env_logger::Env;
use log::{error, info};
use macroquad::prelude::*;

use chaos_equations::generator::seed_rng;
use chaos_equations::render::PointCloudRenderer;
use chaos_equations::{AnimationDriver, ChaosGenerator, Cli, LaunchFragment, Settings};

const PERF_LOG_FRAMES: u64 = 600;

fn window_conf() -> Conf {
    Conf {
        window_title: "Chaos Equations".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}

fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid settings: {}", e);
            return;
        }
    };

    info!(
        "{} iterations x {} steps, t in [{}, {}], point size {}",
        settings.iters, settings.steps, settings.t_start, settings.t_end, settings.point_size
    );

    let seed = seed_rng();
    info!("Seeded generator with {:#x}", seed);

    let renderer = match PointCloudRenderer::new(settings.iters, settings.steps, settings.point_size) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Could not set up the point cloud: {}", e);
            return;
        }
    };

    let mut driver = AnimationDriver::new(
        &settings,
        ChaosGenerator,
        LaunchFragment::new(cli.code.clone()),
        (screen_width(), screen_height()),
        screen_dpi_scale(),
    );

    prevent_quit();
    loop {
        if quit_requested() {
            break;
        }

        clear_background(BLACK);
        driver.tick(
            (screen_width(), screen_height()),
            screen_dpi_scale(),
            |coefficients, frame, viewport, surface, dpi_scale| {
                renderer.draw(coefficients, frame, viewport, surface, dpi_scale)
            },
        );
        driver.hud().draw();

        if driver.frames() % PERF_LOG_FRAMES == 0 {
            let state = driver.state();
            let dt = driver.last_frame().map_or(0.0, |frame| frame.dt);
            info!(
                "{} fps, {} points, t = {:.4} ({:.0}%), dt = {:.3e}, {} resets",
                get_fps(),
                renderer.points(),
                state.clock().t,
                state.clock().progress() * 100.0,
                dt,
                state.resets()
            );
        }

        next_frame().await
    }

    info!("Shutting down after {} frames", driver.frames());
    drop(renderer);
}

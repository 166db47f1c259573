/// Wirecam - first-person wireframe renderer
///
/// Controls:
///   - WASD: move, Space/LShift: up/down
///   - Mouse: look (Escape toggles pointer capture, click to recapture)
///   - Q: quit
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};
use wirecam_core::{Scene, Spin};
use wirecam_window::WindowApp;

#[derive(Parser)]
#[command(name = "wirecam", about = "First-person wireframe renderer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Hold the cube still instead of spinning it
    #[arg(long)]
    no_spin: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("wirecam starting");

    let mut scene = Scene::demo()?;
    if cli.no_spin {
        for object in &mut scene.objects {
            object.spin = Spin::default();
        }
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = WindowApp::new(scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}

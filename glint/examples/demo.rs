//! Renders the built-in demo scene to `demo.png`.
//!
//! ```shell
//! RUST_LOG=debug cargo run --release --example demo
//! ```

use glam::uvec2;
use glint::{DenoisingPassParams, Engine, Scene, TracingPassParams};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene = Scene::demo();
    let mut engine = Engine::new(uvec2(1280, 720));

    let output = engine.render(
        &scene,
        &TracingPassParams::default(),
        &DenoisingPassParams::default(),
    );

    glint::to_rgb_image(output).save("demo.png")?;

    log::info!("Saved demo.png");

    Ok(())
}

mod scenes;
mod studio;

use anyhow::{Context, Result};

use shaderbox_engine::logging::{init_logging, LoggingConfig};

use crate::scenes::SceneKind;
use crate::studio::Studio;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = match std::env::args().nth(1) {
        Some(name) => name.parse::<SceneKind>().context("invalid scene argument")?,
        None => SceneKind::default(),
    };

    Studio::new().scene(scene).size(800, 600).run()
}

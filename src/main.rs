use macroquad::prelude::*;
use tracing::error;

use valve_trainer::audio::AudioManager;
use valve_trainer::catalog::NoteCatalog;
use valve_trainer::scene::PracticeScene;
use valve_trainer::util;

fn window_conf() -> Conf {
    Conf {
        window_title: "Euphonium Fingering Practice".to_owned(),
        window_width: 800,
        window_height: 600,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    util::init_logging();

    let catalog = NoteCatalog::builtin();
    let audio = match AudioManager::new(&catalog) {
        Ok(audio) => audio,
        Err(e) => {
            error!("audio initialization failed: {e:#}");
            return;
        }
    };

    let mut scene = PracticeScene::new(catalog, audio);

    loop {
        scene.update();
        scene.draw();
        next_frame().await;
    }
}

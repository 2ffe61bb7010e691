use crate::config::AppConfig;
use crate::load_app;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "course_quiz_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let canvas = match web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::error!("canvas #{CANVAS_ID} not found");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| {
                    let app = load_app(AppConfig::default())?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = result {
            log::error!("failed to start course viewer: {e:?}");
        }
    });
}

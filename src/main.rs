#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use course_quiz::config::AppConfig;
    use course_quiz::load_app;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let title = config.window_title.clone();
    let app = load_app(config).inspect_err(|e| log::error!("cannot start: {e}"))?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}

// The web build starts from `web::start` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}

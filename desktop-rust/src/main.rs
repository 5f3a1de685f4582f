mod app;
mod io;
mod model;

use app::DesktopApp;
use perfection_common::view::APP_TITLE;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let endpoint = io::resolve_endpoint();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(endpoint))),
    )
}

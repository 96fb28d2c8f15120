use image_adjust_lab::app::ImageAdjustApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Image Adjust Lab"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Adjust Lab",
        options,
        Box::new(|cc| Ok(Box::new(ImageAdjustApp::new(cc)))),
    )
}

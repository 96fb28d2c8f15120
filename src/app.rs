use eframe::egui;
use std::path::PathBuf;
use web_time::Instant;

use crate::display;
use crate::histogram::{self, ChannelHistogram, HistogramVisibility};
use crate::histogram_display;
use crate::image_io::IMAGE_EXTENSIONS;
use crate::pipeline::{AdjustParams, BRIGHTNESS_RANGE, CONTRAST_RANGE, SATURATION_RANGE};
use crate::session::Session;

pub struct ImageAdjustApp {
    session: Session,
    source_path: Option<PathBuf>,
    params: AdjustParams,
    histogram_visibility: HistogramVisibility,
    histogram: Option<ChannelHistogram>,
    preview_texture: Option<egui::TextureHandle>,
    preview_width: usize,
    preview_height: usize,
    needs_refresh: bool,
    processing_time_ms: f64,
    /// Dialog title and message for the last failed load.
    load_error: Option<(String, String)>,
}

impl ImageAdjustApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Session::new(),
            source_path: None,
            params: AdjustParams::default(),
            histogram_visibility: HistogramVisibility::Hidden,
            histogram: None,
            preview_texture: None,
            preview_width: 0,
            preview_height: 0,
            needs_refresh: false,
            processing_time_ms: 0.0,
            load_error: None,
        }
    }

    fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open Image File")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            return;
        };

        match self.session.load(&path) {
            Ok(_) => {
                self.source_path = Some(path);
                self.needs_refresh = true;
            }
            Err(e) => {
                log::warn!("Error loading image: {e}");
                let name = e
                    .path()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.load_error = Some((format!("Cannot open {name}"), e.to_string()));
            }
        }
    }

    /// Run `op` against the session and time it; schedule a redraw if it ran.
    fn run(&mut self, op: impl FnOnce(&mut Session) -> bool) {
        let start = Instant::now();
        if op(&mut self.session) {
            self.processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;
            self.needs_refresh = true;
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let Some(current) = self.session.current() else {
            return;
        };

        let frame = display::preview_frame(current);
        self.preview_width = frame.width;
        self.preview_height = frame.height;
        let color_image = egui::ColorImage::from_rgb([frame.width, frame.height], &frame.rgb);
        self.preview_texture = Some(ctx.load_texture(
            "preview",
            color_image,
            egui::TextureOptions::LINEAR,
        ));

        self.histogram = histogram::for_display(self.histogram_visibility, Some(current));
    }

    fn reset(&mut self) {
        self.params = AdjustParams::default();
        self.run(Session::reset);
    }
}

impl eframe::App for ImageAdjustApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: file and correction buttons
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Load").clicked() {
                    self.open_image();
                }
                ui.separator();

                if ui.button("Grayscale").clicked() {
                    self.run(Session::to_grayscale);
                }
                if ui.button("Linear").on_hover_text("Histogram equalization").clicked() {
                    self.run(Session::equalize_linear);
                }
                if ui.button("Nonlinear").on_hover_text("Adaptive equalization (CLAHE)").clicked() {
                    self.run(Session::equalize_adaptive);
                }
                if ui.button("Reset").clicked() {
                    self.reset();
                }
                ui.separator();

                let mut shown = self.histogram_visibility.is_shown();
                if ui.checkbox(&mut shown, "Histogram").changed()
                    && self
                        .histogram_visibility
                        .set_checked(shown, self.session.is_loaded())
                {
                    self.needs_refresh = true;
                }

                ui.separator();
                if let (Some(path), Some(img)) = (&self.source_path, self.session.original()) {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    ui.label(format!(
                        "{name} | {}x{} | {:.0}ms",
                        img.width(),
                        img.height(),
                        self.processing_time_ms
                    ));
                }
            });
        });

        // Bottom panel: sliders
        egui::TopBottomPanel::bottom("sliders").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.add(
                    egui::Slider::new(&mut self.params.brightness, BRIGHTNESS_RANGE)
                        .text("Brightness"),
                ).changed() {
                    let v = self.params.brightness;
                    self.run(|s| s.set_brightness(v));
                }
                if ui.add(
                    egui::Slider::new(&mut self.params.contrast, CONTRAST_RANGE)
                        .text("Contrast"),
                ).changed() {
                    let v = self.params.contrast;
                    self.run(|s| s.set_contrast(v));
                }
                if ui.add(
                    egui::Slider::new(&mut self.params.saturation, SATURATION_RANGE)
                        .text("Saturation"),
                ).changed() {
                    let v = self.params.saturation;
                    self.run(|s| s.set_saturation(v));
                }
            });
        });

        if self.needs_refresh {
            self.refresh_preview(ctx);
            self.needs_refresh = false;
        }

        // Central panel: preview and histogram
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.preview_texture {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let display_size = egui::vec2(
                            self.preview_width as f32,
                            self.preview_height as f32,
                        );
                        ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                        if let Some(hist) = &self.histogram {
                            ui.add_space(6.0);
                            histogram_display::draw_histogram(ui, hist);
                        }
                    });
                });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Load an image to begin");
                });
            }
        });

        // Load failures
        if let Some((title, message)) = &self.load_error {
            let mut dismissed = false;
            egui::Window::new(title.as_str())
                .id(egui::Id::new("load_error"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.load_error = None;
            }
        }
    }
}

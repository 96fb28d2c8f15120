use eframe::egui;

use crate::histogram::{BINS, ChannelHistogram};

// Plot colors
const PLOT_BG: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
const PLOT_GRID: egui::Color32 = egui::Color32::from_rgb(225, 225, 225);
const PLOT_BORDER: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);
const TRACE_BLUE: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);
const TRACE_GREEN: egui::Color32 = egui::Color32::from_rgb(44, 160, 44);
const TRACE_RED: egui::Color32 = egui::Color32::from_rgb(214, 39, 40);
const LABEL_DIM: egui::Color32 = egui::Color32::from_rgb(110, 110, 110);

const PLOT_HEIGHT: f32 = 180.0;
const X_MAX: f32 = 256.0;
const X_TICKS: [u32; 6] = [0, 50, 100, 150, 200, 250];

pub fn draw_histogram(ui: &mut egui::Ui, hist: &ChannelHistogram) {
    let width = ui.available_width().min(720.0);
    let (response, painter) = ui.allocate_painter(
        egui::vec2(width, PLOT_HEIGHT),
        egui::Sense::hover(),
    );
    let rect = response.rect;
    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + 4.0, rect.min.y + 14.0),
        egui::pos2(rect.max.x - 4.0, rect.max.y - 14.0),
    );

    draw_plot_bg(&painter, rect, plot);

    let max = hist.max_count().max(1) as f32;
    let traces = [
        (hist.blue(), TRACE_BLUE),
        (hist.green(), TRACE_GREEN),
        (hist.red(), TRACE_RED),
    ];
    for (bins, color) in traces {
        draw_trace(&painter, plot, bins, max, color);
    }

    painter.text(
        egui::pos2(rect.min.x + 4.0, rect.min.y + 1.0),
        egui::Align2::LEFT_TOP,
        format!("max {}", max as u32),
        egui::FontId::monospace(9.0),
        LABEL_DIM,
    );

    if let Some(hover_pos) = response.hover_pos() {
        if plot.contains(hover_pos) {
            let bin = (((hover_pos.x - plot.min.x) / plot.width()) * X_MAX) as usize;
            let bin = bin.min(BINS - 1);
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                ui.id().with("histogram_tip"),
                |ui: &mut egui::Ui| {
                    ui.label(egui::RichText::new(format!("Level {bin}")).monospace().strong());
                    ui.label(egui::RichText::new(format!("B {}", hist.blue()[bin])).monospace().color(TRACE_BLUE));
                    ui.label(egui::RichText::new(format!("G {}", hist.green()[bin])).monospace().color(TRACE_GREEN));
                    ui.label(egui::RichText::new(format!("R {}", hist.red()[bin])).monospace().color(TRACE_RED));
                },
            );
        }
    }
}

fn x_for(plot: egui::Rect, level: f32) -> f32 {
    plot.min.x + level / X_MAX * plot.width()
}

fn draw_plot_bg(painter: &egui::Painter, rect: egui::Rect, plot: egui::Rect) {
    painter.rect_filled(rect, 2.0, PLOT_BG);
    painter.rect(
        plot, 0.0, egui::Color32::TRANSPARENT,
        egui::Stroke::new(1.0, PLOT_BORDER),
        egui::StrokeKind::Inside,
    );

    for i in 1..4 {
        let y = plot.min.y + plot.height() * i as f32 / 4.0;
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.5, PLOT_GRID),
        );
    }

    for tick in X_TICKS {
        let x = x_for(plot, tick as f32);
        if tick > 0 {
            painter.line_segment(
                [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
                egui::Stroke::new(0.5, PLOT_GRID),
            );
        }
        painter.text(
            egui::pos2(x, plot.max.y + 2.0),
            egui::Align2::CENTER_TOP,
            tick.to_string(),
            egui::FontId::monospace(9.0),
            LABEL_DIM,
        );
    }
}

fn draw_trace(
    painter: &egui::Painter,
    plot: egui::Rect,
    bins: &[u32; BINS],
    max: f32,
    color: egui::Color32,
) {
    let points: Vec<egui::Pos2> = bins
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let y = plot.max.y - (count as f32 / max) * plot.height();
            egui::pos2(x_for(plot, i as f32), y)
        })
        .collect();
    painter.add(egui::Shape::line(points, egui::Stroke::new(1.2, color)));
}

use crate::config::DisplayConfig;
use crate::engines::simulation::{Metric, SimulationRecord};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};

const MARGIN_LEFT: f32 = 48.0;
const MARGIN_BOTTOM: f32 = 36.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_RIGHT: f32 = 16.0;
const Y_TICKS: usize = 5;

/// Round a maximum value up to the next multiple of 0.5, never below 1.0.
pub fn axis_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 1.0 {
        return 1.0;
    }
    (value * 2.0).ceil() / 2.0
}

/// Maps (generation, value) pairs into the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub x_max: f64,
    pub y_max: f64,
}

impl ChartScale {
    pub fn for_record(record: &SimulationRecord) -> Self {
        Self {
            x_max: record.len().saturating_sub(1).max(1) as f64,
            y_max: axis_ceiling(record.max_value()),
        }
    }

    /// `(0, 0)` is the origin, `(1, 1)` the top-right corner.
    pub fn to_unit(&self, generation: usize, value: f64) -> (f64, f64) {
        let x = generation as f64 / self.x_max;
        let y = (value / self.y_max).clamp(0.0, 1.0);
        (x, y)
    }

    /// Generation closest to a horizontal unit position.
    pub fn generation_at(&self, unit_x: f64) -> usize {
        (unit_x.clamp(0.0, 1.0) * self.x_max).round() as usize
    }
}

pub fn metric_color(metric: Metric) -> Color32 {
    match metric {
        Metric::Resistance => Color32::from_rgb(99, 110, 250),
        Metric::Effectiveness => Color32::from_rgb(239, 85, 59),
        Metric::Infectiousness => Color32::from_rgb(0, 204, 150),
        Metric::Virulence => Color32::from_rgb(171, 99, 250),
    }
}

pub struct LineChart;

impl LineChart {
    pub fn show(ui: &mut egui::Ui, record: &SimulationRecord, display: &DisplayConfig) {
        ui.heading(format!(
            "Virus and Immune System Dynamics for {}",
            record.pathogen_name
        ));

        if display.show_legend {
            Self::show_legend(ui);
        }

        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let outer = response.rect;
        let plot = Rect::from_min_max(
            Pos2::new(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
            Pos2::new(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return;
        }

        let scale = ChartScale::for_record(record);
        let text_color = ui.visuals().text_color();
        let grid_stroke = Stroke::new(0.5, ui.visuals().weak_text_color());
        let to_screen = |generation: usize, value: f64| {
            let (x, y) = scale.to_unit(generation, value);
            Pos2::new(
                plot.left() + x as f32 * plot.width(),
                plot.bottom() - y as f32 * plot.height(),
            )
        };

        painter.rect_filled(plot, 2.0, ui.visuals().extreme_bg_color);

        // Horizontal grid and y labels
        for tick in 0..=Y_TICKS {
            let value = scale.y_max * tick as f64 / Y_TICKS as f64;
            let y = to_screen(0, value).y;
            painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid_stroke);
            painter.text(
                Pos2::new(plot.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                format!("{:.1}", value),
                FontId::proportional(11.0),
                text_color,
            );
        }

        // X labels every tenth of the run
        let step = (record.len() / 10).max(1);
        for generation in (0..record.len()).step_by(step) {
            let x = to_screen(generation, 0.0).x;
            painter.text(
                Pos2::new(x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                generation.to_string(),
                FontId::proportional(11.0),
                text_color,
            );
        }

        painter.text(
            Pos2::new(plot.center().x, outer.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            "Generations",
            FontId::proportional(12.0),
            text_color,
        );
        painter.text(
            Pos2::new(outer.left() + 2.0, plot.top()),
            Align2::LEFT_BOTTOM,
            "Levels",
            FontId::proportional(12.0),
            text_color,
        );

        for metric in Metric::all() {
            let points: Vec<Pos2> = record
                .series(metric)
                .iter()
                .enumerate()
                .map(|(generation, value)| to_screen(generation, *value))
                .collect();
            if points.len() > 1 {
                painter.add(Shape::line(
                    points,
                    Stroke::new(display.line_width, metric_color(metric)),
                ));
            }
        }

        // Hover readout
        if let Some(pointer) = response.hover_pos() {
            if plot.contains(pointer) && !record.is_empty() {
                let unit_x = ((pointer.x - plot.left()) / plot.width()) as f64;
                let generation = scale.generation_at(unit_x).min(record.len() - 1);
                let x = to_screen(generation, 0.0).x;
                painter.line_segment(
                    [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
                    Stroke::new(1.0, text_color),
                );

                let mut readout = format!("Generation {}", generation);
                for metric in Metric::all() {
                    readout.push_str(&format!(
                        "\n{}: {:.4}",
                        metric.label(),
                        record.series(metric)[generation]
                    ));
                }
                painter.text(
                    Pos2::new(plot.left() + 8.0, plot.top() + 8.0),
                    Align2::LEFT_TOP,
                    readout,
                    FontId::monospace(11.0),
                    text_color,
                );
            }
        }
    }

    fn show_legend(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for metric in Metric::all() {
                ui.colored_label(metric_color(metric), "━━");
                ui.label(metric.label());
                ui.add_space(8.0);
            }
        });
    }
}

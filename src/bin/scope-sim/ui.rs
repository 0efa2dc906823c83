//! UI rendering methods for the scope simulator.

use crate::ScopeSimApp;
use crate::colors;
use crate::constants::{CONTROLS_WIDTH, FIELD_SPEED, VIEWPORT_MARGIN, ZOOM_MARKS};
use crate::input::{Setter, apply_input, meters_range};
use crate::scope::{
    draw_background, draw_eyepiece_mask, draw_fallback_background, draw_reticle, draw_target,
    fit_viewport,
};
use eframe::egui;
use scope_sim::ScaleModel;
use scope_sim::scale::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

impl ScopeSimApp {
    /// Handles keyboard shortcuts for zoom and reset.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Digits and minus belong to the numeric fields while one is focused
        if ctx.wants_keyboard_input() {
            return;
        }

        let (zoom_in, zoom_out, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });

        let mut changed = false;
        if zoom_in {
            changed |= self.scale.zoom_in();
        }
        if zoom_out {
            changed |= self.scale.zoom_out();
        }
        if reset {
            self.scale.reset();
            changed = true;
        }
        if changed {
            ctx.request_repaint();
        }
    }

    /// Renders the bottom status bar with controls hint and the target size.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("+/-: Zoom | 0: Reset");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.scale.derived_size();
                    ui.label(format!(
                        "Target: {:.1} × {:.1} px",
                        size.pixel_width, size.pixel_height
                    ));
                });
            });
        });
    }

    /// Renders the right-hand controls panel.
    pub fn show_controls(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("controls")
            .exact_width(CONTROLS_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_controls_content(ui);
                });
            });
    }

    fn show_controls_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);

        ui.strong("Target");
        ui.separator();

        egui::Grid::new("target_fields")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let fields: [(&str, f64, Setter); 3] = [
                    (
                        "Distance",
                        self.scale.distance_meters(),
                        ScaleModel::set_distance,
                    ),
                    (
                        "Target width",
                        self.scale.target_width_meters(),
                        ScaleModel::set_target_width,
                    ),
                    (
                        "Target height",
                        self.scale.target_height_meters(),
                        ScaleModel::set_target_height,
                    ),
                ];
                for (name, mut value, setter) in fields {
                    ui.label(name);
                    if Self::meters_field(ui, &mut value) {
                        apply_input(ui.ctx(), &mut self.scale, setter, value, name);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        ui.strong(format!("Zoom: {:.1}x", self.scale.zoom()));
        ui.separator();

        let mut zoom = self.scale.zoom();
        let slider = egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX)
            .step_by(ZOOM_STEP)
            .show_value(false);
        if ui.add(slider).on_hover_text(format!("{zoom}x")).changed() {
            apply_input(ui.ctx(), &mut self.scale, ScaleModel::set_zoom, zoom, "zoom");
        }

        ui.horizontal(|ui| {
            for mark in ZOOM_MARKS {
                let selected = self.scale.zoom() == mark;
                if ui.selectable_label(selected, format!("{mark}x")).clicked() {
                    apply_input(ui.ctx(), &mut self.scale, ScaleModel::set_zoom, mark, "zoom");
                }
            }
        });

        ui.add_space(12.0);

        if ui.button("Reset").on_hover_text("Reset (0)").clicked() {
            self.scale.reset();
            ui.ctx().request_repaint();
        }
    }

    /// A meters input. Returns `true` when the user edited the value.
    ///
    /// The field shows the model's value every frame, so an edit the model
    /// rejects snaps back on the next repaint. Dragging stops at the minimum.
    fn meters_field(ui: &mut egui::Ui, value: &mut f64) -> bool {
        ui.add(
            egui::DragValue::new(value)
                .range(meters_range())
                .speed(FIELD_SPEED)
                .max_decimals(2)
                .suffix(" m"),
        )
        .changed()
    }

    /// Renders the central panel containing the scope view.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap().shrink(VIEWPORT_MARGIN);
            let viewport = fit_viewport(available);
            ui.allocate_rect(viewport, egui::Sense::hover());

            self.show_scope(ui, viewport);
        });
    }

    /// Paints the magnified scene and the overlays on top of it.
    fn show_scope(&self, ui: &mut egui::Ui, viewport: egui::Rect) {
        let painter = ui.painter_at(viewport);
        let zoom = self.scale.zoom() as f32;

        match &self.background {
            Some(texture) => draw_background(&painter, viewport, texture, zoom),
            None => draw_fallback_background(&painter, viewport, zoom),
        }

        draw_target(&painter, viewport, self.scale.derived_size());
        draw_reticle(&painter, viewport, &self.reticle);
        draw_eyepiece_mask(&painter, viewport);

        if self.background.is_none() && !self.background_loading() {
            painter.text(
                viewport.left_bottom() + egui::vec2(12.0, -12.0),
                egui::Align2::LEFT_BOTTOM,
                "No background image.\nRun `cargo run --bin fetch_background` to download one.",
                egui::FontId::proportional(13.0),
                colors::FALLBACK_HINT,
            );
        }
    }
}

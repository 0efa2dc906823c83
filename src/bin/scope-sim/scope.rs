//! Painting of the scope view: background, target box, reticle and eyepiece.
//!
//! Layer order, bottom to top: background, target box, centerlines, dots, eyepiece mask.

use crate::colors;
use crate::constants::VIEWPORT_ASPECT;
use eframe::egui;
use scope_sim::{Axis, DerivedSize, ReticleGrid};

/// Largest rectangle with the viewport aspect ratio that fits in `available`, centered.
pub fn fit_viewport(available: egui::Rect) -> egui::Rect {
    let size = available.size();
    let width = size.x.min(size.y * VIEWPORT_ASPECT);
    let height = width / VIEWPORT_ASPECT;
    egui::Rect::from_center_size(available.center(), egui::vec2(width, height))
}

/// Rect an image of `image_size` covers when "cover"-fit into `viewport` and magnified by `zoom`.
pub fn cover_rect(viewport: egui::Rect, image_size: egui::Vec2, zoom: f32) -> egui::Rect {
    let cover_scale = (viewport.width() / image_size.x).max(viewport.height() / image_size.y);
    egui::Rect::from_center_size(viewport.center(), image_size * cover_scale * zoom)
}

/// Draws the background texture magnified about the viewport center.
pub fn draw_background(
    painter: &egui::Painter,
    viewport: egui::Rect,
    texture: &egui::TextureHandle,
    zoom: f32,
) {
    let image_rect = cover_rect(viewport, texture.size_vec2(), zoom);
    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Draws a simple sky/ridge/ground scene, magnified like a real background would be.
pub fn draw_fallback_background(painter: &egui::Painter, viewport: egui::Rect, zoom: f32) {
    let scene = egui::Rect::from_center_size(viewport.center(), viewport.size() * zoom);
    let horizon = scene.top() + scene.height() * 0.6;

    painter.rect_filled(viewport, 0.0, colors::FALLBACK_SKY);

    let ridge: Vec<egui::Pos2> = [
        (0.0, 0.0),
        (0.15, -0.12),
        (0.3, -0.05),
        (0.5, -0.18),
        (0.7, -0.07),
        (0.85, -0.14),
        (1.0, -0.02),
    ]
    .iter()
    .map(|(fx, fy)| egui::pos2(scene.left() + fx * scene.width(), horizon + fy * scene.height()))
    .collect();
    // Ridge is concave, so it is painted as one quad per segment.
    for pair in ridge.windows(2) {
        painter.add(egui::Shape::convex_polygon(
            vec![
                pair[0],
                pair[1],
                egui::pos2(pair[1].x, horizon),
                egui::pos2(pair[0].x, horizon),
            ],
            colors::FALLBACK_RIDGE,
            egui::Stroke::NONE,
        ));
    }

    let ground = egui::Rect::from_min_max(
        egui::pos2(viewport.left(), horizon),
        egui::pos2(viewport.right(), viewport.bottom().max(horizon)),
    );
    painter.rect_filled(ground, 0.0, colors::FALLBACK_GROUND);
}

/// Draws the target box centered in the viewport.
pub fn draw_target(painter: &egui::Painter, viewport: egui::Rect, size: DerivedSize) {
    let rect = egui::Rect::from_center_size(
        viewport.center(),
        egui::vec2(size.pixel_width as f32, size.pixel_height as f32),
    );
    painter.rect_filled(rect, 4.0, colors::TARGET_FILL);
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(2.0, colors::TARGET_STROKE),
        egui::StrokeKind::Outside,
    );
}

/// Draws the centerlines and mil-dots. The reticle ignores zoom.
pub fn draw_reticle(painter: &egui::Painter, viewport: egui::Rect, grid: &ReticleGrid) {
    let center = viewport.center();

    for line in grid.centerlines() {
        let stroke = egui::Stroke::new(line.thickness as f32, colors::RETICLE_LINE);
        let points = match line.axis {
            Axis::Horizontal => [
                egui::pos2(viewport.left(), center.y),
                egui::pos2(viewport.right(), center.y),
            ],
            Axis::Vertical => [
                egui::pos2(center.x, viewport.top()),
                egui::pos2(center.x, viewport.bottom()),
            ],
        };
        painter.line_segment(points, stroke);
    }

    for dot in grid.dots() {
        let pos = center + egui::vec2(dot.center[0] as f32, dot.center[1] as f32);
        painter.circle(
            pos,
            dot.radius as f32,
            colors::RETICLE_DOT,
            egui::Stroke::new(1.0, colors::RETICLE_DOT_OUTLINE),
        );
    }
}

/// Blacks out everything outside the round lens.
pub fn draw_eyepiece_mask(painter: &egui::Painter, viewport: egui::Rect) {
    let center = viewport.center();
    let lens_radius = viewport.width().min(viewport.height()) / 2.0;
    let outer_radius = viewport.size().length() / 2.0 + 1.0;
    let ring_width = outer_radius - lens_radius;

    painter.circle_stroke(
        center,
        lens_radius + ring_width / 2.0,
        egui::Stroke::new(ring_width, colors::EYEPIECE_MASK),
    );
    painter.circle_stroke(
        center,
        lens_radius,
        egui::Stroke::new(2.0, colors::EYEPIECE_RIM),
    );
}

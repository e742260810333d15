use common::games::snake::{DrawCommand, Fill, Rgba, Scene};
use eframe::egui::{self, Color32, Pos2, Stroke, pos2, vec2};

const GLOW_RINGS: usize = 5;
const GRADIENT_RINGS: usize = 4;

pub fn to_color(color: Rgba) -> Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

/// Maps canvas coordinates into the allocated widget rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    pub origin: Pos2,
    pub scale: f32,
}

impl CanvasTransform {
    pub fn point(&self, x: f32, y: f32) -> Pos2 {
        pos2(self.origin.x + x * self.scale, self.origin.y + y * self.scale)
    }

    pub fn len(&self, value: f32) -> f32 {
        value * self.scale
    }
}

pub fn paint_scene(painter: &egui::Painter, transform: CanvasTransform, scene: &Scene) {
    for command in &scene.commands {
        paint_command(painter, transform, command);
    }
}

fn paint_command(painter: &egui::Painter, t: CanvasTransform, command: &DrawCommand) {
    match command {
        DrawCommand::Rect { x, y, w, h, radius, fill } => {
            let rect = egui::Rect::from_min_size(t.point(*x, *y), vec2(t.len(*w), t.len(*h)));
            match fill {
                Fill::Solid(color) => {
                    painter.rect_filled(rect, t.len(*radius), to_color(*color));
                }
                Fill::Gradient { from, to } => paint_rect_gradient(painter, rect, *from, *to),
            }
        }
        DrawCommand::Line { from, to, width, color } => {
            painter.line_segment(
                [t.point(from.0, from.1), t.point(to.0, to.1)],
                Stroke::new(t.len(*width), to_color(*color)),
            );
        }
        DrawCommand::Circle { cx, cy, radius, fill } => {
            let center = t.point(*cx, *cy);
            match fill {
                Fill::Solid(color) => {
                    painter.circle_filled(center, t.len(*radius), to_color(*color));
                }
                Fill::Gradient { from, to } => {
                    // Concentric rings from the edge colour inwards.
                    for ring in 0..GRADIENT_RINGS {
                        let f = ring as f32 / GRADIENT_RINGS as f32;
                        let color = to.lerp(*from, f);
                        painter.circle_filled(center, t.len(*radius) * (1.0 - f * 0.7), to_color(color));
                    }
                }
            }
        }
        DrawCommand::Glow { cx, cy, radius, blur, color } => {
            let center = t.point(*cx, *cy);
            for ring in (1..=GLOW_RINGS).rev() {
                let f = ring as f32 / GLOW_RINGS as f32;
                let faded = color.with_alpha(color.a * (1.0 - f) * 0.5);
                painter.circle_filled(center, t.len(radius + blur * f), to_color(faded));
            }
        }
        DrawCommand::Text { x, y, text, size, bold, color } => {
            let font = egui::FontId::proportional(t.len(*size));
            let pos = t.point(*x, *y);
            if *bold {
                // No bold face in the default fonts: offset a second pass.
                painter.text(pos + vec2(0.6, 0.0), egui::Align2::CENTER_CENTER, text, font.clone(), to_color(*color));
            }
            painter.text(pos, egui::Align2::CENTER_CENTER, text, font, to_color(*color));
        }
    }
}

/// Diagonal gradient as a two-triangle mesh with per-vertex colours.
fn paint_rect_gradient(painter: &egui::Painter, rect: egui::Rect, from: Rgba, to: Rgba) {
    let mid = to_color(from.lerp(to, 0.5));
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), to_color(from));
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), to_color(to));
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_scaled_and_clamped() {
        assert_eq!(to_color(Rgba::rgba(255, 0, 0, 0.5)), Color32::from_rgba_unmultiplied(255, 0, 0, 128));
        assert_eq!(to_color(Rgba::rgba(1, 2, 3, 4.0)), Color32::from_rgb(1, 2, 3));
    }

    #[test]
    fn test_transform_scales_from_origin() {
        let t = CanvasTransform { origin: pos2(10.0, 20.0), scale: 0.5 };
        assert_eq!(t.point(100.0, 50.0), pos2(60.0, 45.0));
        assert_eq!(t.len(25.0), 12.5);
    }
}

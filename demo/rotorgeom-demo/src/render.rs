//! Wireframe rendering of draw commands onto an egui painter

use eframe::{egui, epaint};

use rotorgeom::hierarchy::*;
use rotorgeom::matrix::Matrix;
use rotorgeom::re3::Vector;
use rotorgeom::voxel::*;

/// Outline segments for every primitive, computed once
pub struct Outlines {
    cube: Vec<[Vector<f32>; 2]>,
    circle: Vec<[Vector<f32>; 2]>,
    plane: Vec<[Vector<f32>; 2]>,
}

impl Default for Outlines {
    fn default() -> Self {
        Outlines {
            cube: Primitive::Cube.edges(),
            circle: Primitive::Circle.edges(),
            plane: Primitive::Plane.edges(),
        }
    }
}

impl Outlines {
    fn of(&self, primitive: Primitive) -> &[[Vector<f32>; 2]] {
        match primitive {
            Primitive::Cube => &self.cube,
            Primitive::Circle => &self.circle,
            Primitive::Plane => &self.plane,
        }
    }
}

fn paint_color(paint: Paint) -> epaint::Color32 {
    match paint {
        Paint::Color([r, g, b, a]) => {
            let byte = |c: f32| (c.clamp(0., 1.) * 255.).round() as u8;
            epaint::Color32::from_rgba_unmultiplied(byte(r), byte(g), byte(b), byte(a))
        }
        Paint::Texture(WATER_TEXTURE) => epaint::Color32::from_rgb(40, 110, 200),
        Paint::Texture(DIRT_TEXTURE) => epaint::Color32::from_rgb(120, 85, 50),
        Paint::Texture(GROUND_TEXTURE) => epaint::Color32::from_rgb(60, 150, 60),
        Paint::Texture(SKY_TEXTURE) => epaint::Color32::from_rgb(150, 200, 240),
        Paint::Texture(_) => epaint::Color32::GRAY,
    }
}

/// Draws every primitive as its outline, projected orthographically
///
/// Points are taken through `view * model * centering` into clip space.
/// Segments with an endpoint outside the clip depth range `[-1, 1]` are skipped.
pub struct WireframePainter<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    outlines: &'a Outlines,
    view: Matrix<f32>,
    pub segments: usize,
}

impl<'a> WireframePainter<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, outlines: &'a Outlines) -> Self {
        WireframePainter {
            painter,
            rect,
            outlines,
            view: Matrix::identity(),
            segments: 0,
        }
    }

    fn to_screen(&self, p: Vector<f32>) -> Option<egui::Pos2> {
        if !(-1. ..=1.).contains(&p.z) {
            return None;
        }
        let half = 0.5 * self.rect.width().min(self.rect.height());
        Some(self.rect.center() + egui::vec2(p.x, -p.y) * half)
    }
}

impl DrawTarget<f32> for WireframePainter<'_> {
    fn set_view(&mut self, view: Matrix<f32>) {
        self.view = view;
    }

    fn draw(&mut self, command: DrawCommand<f32>) {
        let m = self.view * command.model * command.primitive.centering();
        let stroke = epaint::Stroke::new(1.5, paint_color(command.paint));
        for &[a, b] in self.outlines.of(command.primitive) {
            if let (Some(a), Some(b)) = (
                self.to_screen(m.mul_point(a)),
                self.to_screen(m.mul_point(b)),
            ) {
                self.painter.line_segment([a, b], stroke);
                self.segments += 1;
            }
        }
    }
}

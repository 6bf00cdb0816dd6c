use super::App;
use crate::{Rgb, Simulation};
use eframe::egui::{pos2, vec2, Color32, Rect, Sense, Ui, Vec2};

/// Placement of the grid inside the drawing surface: square cells of a whole
/// number of points, remainder split evenly around the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub origin: Vec2,
    pub cell: f32,
}

impl Layout {
    pub fn fit(area: Vec2, width: usize, height: usize) -> Self {
        let cell = (area.x / width as f32)
            .floor()
            .min((area.y / height as f32).floor())
            .max(0.);
        let used = vec2(cell * width as f32, cell * height as f32);
        Self {
            origin: ((area - used) * 0.5).floor(),
            cell,
        }
    }

    /// Rectangle of the cell at (x, y) relative to the surface, with a one
    /// point gap to the next cell. `None` when cells are too small to show.
    pub fn cell_rect(&self, x: usize, y: usize) -> Option<Rect> {
        if self.cell < 2. {
            return None;
        }
        let min = pos2(
            self.origin.x + x as f32 * self.cell + 1.,
            self.origin.y + y as f32 * self.cell + 1.,
        );
        Some(Rect::from_min_size(min, Vec2::splat(self.cell - 1.)))
    }
}

fn to_color32(color: Rgb) -> Color32 {
    let [r, g, b] = color.to_array();
    Color32::from_rgb(r, g, b)
}

impl App {
    pub fn draw(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let surface = response.rect;
        let (width, height) = self.life.size();
        let layout = Layout::fit(surface.size(), width, height);
        let offset = surface.min.to_vec2();

        for y in 0..height {
            for x in 0..width {
                let Some(color) = self.life.color_at(x, y) else {
                    continue;
                };
                if let Some(rect) = layout.cell_rect(x, y) {
                    painter.rect_filled(rect.translate(offset), 0., to_color32(color));
                }
            }
        }
    }
}

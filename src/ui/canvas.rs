//! 2D-Canvas: zeichnet die Render-Szene und sammelt Maus-Intents.

use glam::Vec2;

use crate::app::AppIntent;
use crate::shared::{ComponentSprite, RenderScene};

/// Drag-Zustand des Canvas über Frames hinweg.
#[derive(Default)]
pub struct CanvasInput {
    /// Laufender Drag: Komponenten-ID und Griff-Offset zur oberen
    /// linken Ecke
    dragging: Option<(u64, Vec2)>,
}

impl CanvasInput {
    /// Erstellt einen leeren Canvas-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rendert das 2D-Canvas und gibt erzeugte Events zurück.
pub fn render_canvas(
    ui: &mut egui::Ui,
    scene: &RenderScene,
    input: &mut CanvasInput,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    let zoom = scene.zoom;

    let to_screen =
        |p: Vec2| -> egui::Pos2 { egui::pos2(rect.min.x + p.x * zoom, rect.min.y + p.y * zoom) };
    let from_screen =
        |p: egui::Pos2| -> Vec2 { Vec2::new((p.x - rect.min.x) / zoom, (p.y - rect.min.y) / zoom) };

    painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_gray(250));

    if scene.grid_visible {
        draw_grid(&painter, rect, scene.options.grid_size * zoom);
    }

    for sprite in &scene.sprites {
        draw_sprite(&painter, sprite, &to_screen);
    }

    for guide in &scene.guides {
        draw_guide(&painter, rect, guide, zoom);
    }

    // ── Interaktion ──
    if response.drag_started() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let pos = from_screen(pointer);
            if let Some(sprite) = hit_test(&scene.sprites, pos) {
                input.dragging = Some((sprite.id, pos - sprite.position));
                events.push(AppIntent::ComponentPickRequested { id: sprite.id });
            }
        }
    }

    if response.dragged() {
        if let (Some((id, grab_offset)), Some(pointer)) =
            (input.dragging, response.interact_pointer_pos())
        {
            events.push(AppIntent::DragMoved {
                id,
                pos: from_screen(pointer) - grab_offset,
            });
        }
    }

    if response.drag_stopped() {
        if let Some((id, _)) = input.dragging.take() {
            events.push(AppIntent::DragEnded { id });
        }
    }

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasClicked {
                pos: from_screen(pointer),
            });
        }
    }

    events
}

/// Oberste Komponente unter dem Zeiger (Z-Order = Listenreihenfolge).
fn hit_test(sprites: &[ComponentSprite], pos: Vec2) -> Option<&ComponentSprite> {
    sprites.iter().rev().find(|s| {
        pos.x >= s.position.x
            && pos.y >= s.position.y
            && pos.x <= s.position.x + s.size.x
            && pos.y <= s.position.y + s.size.y
    })
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect, spacing: f32) {
    if spacing < 2.0 {
        return;
    }
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(225));

    let mut x = rect.min.x;
    while x <= rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            stroke,
        );
        x += spacing;
    }
    let mut y = rect.min.y;
    while y <= rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            stroke,
        );
        y += spacing;
    }
}

fn draw_sprite(
    painter: &egui::Painter,
    sprite: &ComponentSprite,
    to_screen: &impl Fn(Vec2) -> egui::Pos2,
) {
    let [r, g, b] = sprite.kind.spec().color;
    let fill = egui::Color32::from_rgb(r, g, b);
    let stroke = if sprite.selected {
        egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 160, 0))
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(60))
    };

    // Footprint-Ecken um das Zentrum rotiert
    let center = sprite.position + sprite.size / 2.0;
    let half = sprite.size / 2.0;
    let rad = (sprite.rotation_deg as f32).to_radians();
    let (sin, cos) = rad.sin_cos();
    let points: Vec<egui::Pos2> = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .iter()
    .map(|c| to_screen(center + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos)))
    .collect();

    painter.add(egui::Shape::convex_polygon(points, fill, stroke));
}

fn draw_guide(painter: &egui::Painter, rect: egui::Rect, guide: &crate::core::Guide, zoom: f32) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(13, 110, 253));
    match guide.axis {
        crate::core::GuideAxis::Vertical => {
            let x = rect.min.x + guide.coord * zoom;
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                stroke,
            );
        }
        crate::core::GuideAxis::Horizontal => {
            let y = rect.min.y + guide.coord * zoom;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
        }
    }
}

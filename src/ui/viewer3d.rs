//! 3D-Viewer: isometrische Darstellung der Mirrors mit Ports und
//! Verbindungslinien.
//!
//! Der Viewer ist ein Renderer-Sink über der Render-Szene; Bewegungen
//! werden als `MirrorMoved` zurückgemeldet und laufen über die
//! Command-Pipeline in die 2D-Szene.

use glam::{Vec2, Vec3};

use crate::app::AppIntent;
use crate::shared::{MirrorSprite, RenderScene};
use crate::sync::PortId;

/// Pixel pro Meter in der isometrischen Projektion.
const ISO_SCALE: f32 = 80.0;
/// Klick-Radius für Mirror- und Port-Picking (Pixel).
const PICK_RADIUS: f32 = 14.0;

/// Interaktions-Zustand des 3D-Viewers über Frames hinweg.
#[derive(Default)]
pub struct Viewer3dInput {
    /// Laufender Drag: Komponenten-ID, Startposition, Start-Zeiger
    dragging: Option<(u64, Vec3, egui::Pos2)>,
    /// Erster Port einer angefangenen Verbindung
    pending_port: Option<(u64, PortId)>,
}

impl Viewer3dInput {
    /// Erstellt einen leeren Viewer-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rendert den 3D-Viewer und gibt erzeugte Events zurück.
pub fn render_viewer3d(
    ui: &mut egui::Ui,
    scene: &RenderScene,
    input: &mut Viewer3dInput,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    let origin = rect.center();

    painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_gray(30));
    draw_ground(&painter, origin);

    if scene.options.show_connections {
        for line in &scene.connections {
            painter.line_segment(
                [project(line.from, origin), project(line.to, origin)],
                egui::Stroke::new(2.0, egui::Color32::from_rgb(25, 135, 84)),
            );
        }
    }

    for mirror in &scene.mirrors {
        draw_mirror(&painter, mirror, origin, scene.options.show_ports);
    }

    handle_interaction(scene, input, &response, origin, &mut events);
    events
}

/// Isometrische Projektion: Weltposition (Meter) → Bildschirm.
fn project(world: Vec3, origin: egui::Pos2) -> egui::Pos2 {
    let (sin30, cos30) = (0.5f32, 0.866f32);
    egui::pos2(
        origin.x + (world.x - world.z) * cos30 * ISO_SCALE,
        origin.y + (world.x + world.z) * sin30 * ISO_SCALE - world.y * ISO_SCALE,
    )
}

/// Inverse Projektion eines Bildschirm-Deltas in die Bodenebene.
fn unproject_delta(delta: egui::Vec2) -> Vec2 {
    let (sin30, cos30) = (0.5f32, 0.866f32);
    let a = delta.x / (cos30 * ISO_SCALE);
    let b = delta.y / (sin30 * ISO_SCALE);
    Vec2::new((a + b) / 2.0, (b - a) / 2.0)
}

fn draw_ground(painter: &egui::Painter, origin: egui::Pos2) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(55));
    for i in -5..=5 {
        let f = i as f32;
        painter.line_segment(
            [
                project(Vec3::new(f, 0.0, -5.0), origin),
                project(Vec3::new(f, 0.0, 5.0), origin),
            ],
            stroke,
        );
        painter.line_segment(
            [
                project(Vec3::new(-5.0, 0.0, f), origin),
                project(Vec3::new(5.0, 0.0, f), origin),
            ],
            stroke,
        );
    }
}

fn draw_mirror(
    painter: &egui::Painter,
    mirror: &MirrorSprite,
    origin: egui::Pos2,
    show_ports: bool,
) {
    let [r, g, b] = mirror.kind.spec().color;
    let color = egui::Color32::from_rgb(r, g, b);
    let stroke_width = if mirror.selected { 7.0 } else { 5.0 };

    if mirror.ports.len() == 2 {
        // Rohr bzw. Winkel: Körper als Linie(n) zwischen den Ports
        let center = project(mirror.position, origin);
        for &(_, port_pos) in &mirror.ports {
            painter.line_segment(
                [center, project(port_pos, origin)],
                egui::Stroke::new(stroke_width, color),
            );
        }
    } else {
        painter.circle_filled(project(mirror.position, origin), 6.0, color);
    }

    if mirror.selected {
        painter.circle_stroke(
            project(mirror.position, origin),
            PICK_RADIUS,
            egui::Stroke::new(1.5, egui::Color32::from_rgb(255, 160, 0)),
        );
    }

    if show_ports {
        for &(_, port_pos) in &mirror.ports {
            painter.circle_filled(
                project(port_pos, origin),
                4.0,
                egui::Color32::from_rgb(255, 193, 7),
            );
        }
    }
}

fn handle_interaction(
    scene: &RenderScene,
    input: &mut Viewer3dInput,
    response: &egui::Response,
    origin: egui::Pos2,
    events: &mut Vec<AppIntent>,
) {
    if response.drag_started() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some(mirror) = mirror_at(scene, pointer, origin) {
                input.dragging = Some((mirror.id, mirror.position, pointer));
                events.push(AppIntent::ComponentPickRequested { id: mirror.id });
            }
        }
    }

    if response.dragged() {
        if let (Some((id, start_pos, start_pointer)), Some(pointer)) =
            (input.dragging, response.interact_pointer_pos())
        {
            let ground = unproject_delta(pointer - start_pointer);
            let rotation_y = scene
                .mirrors
                .iter()
                .find(|m| m.id == id)
                .map_or(0.0, |m| m.rotation_y);
            events.push(AppIntent::MirrorMoved {
                id,
                world_pos: Vec3::new(
                    start_pos.x + ground.x,
                    start_pos.y,
                    start_pos.z + ground.y,
                ),
                rotation_y,
            });
        }
    }

    if response.drag_stopped() {
        input.dragging = None;
    }

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some((id, port)) = port_at(scene, pointer, origin) {
                // Zwei Port-Klicks ergeben eine Verbindungsanfrage
                match input.pending_port.take() {
                    Some((first_id, first_port)) if (first_id, first_port) != (id, port) => {
                        events.push(AppIntent::ConnectPortsRequested {
                            comp1: first_id,
                            port1: first_port,
                            comp2: id,
                            port2: port,
                        });
                    }
                    _ => input.pending_port = Some((id, port)),
                }
            } else if let Some(mirror) = mirror_at(scene, pointer, origin) {
                events.push(AppIntent::ComponentPickRequested { id: mirror.id });
            } else {
                // Klick ins Leere: angefangene Verbindung und Selektion aufheben
                input.pending_port = None;
                events.push(AppIntent::EscapePressed);
            }
        }
    }

    if response.secondary_clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some((id, port)) = port_at(scene, pointer, origin) {
                events.push(AppIntent::DisconnectPortRequested { comp: id, port });
            }
        }
    }
}

fn mirror_at<'a>(
    scene: &'a RenderScene,
    pointer: egui::Pos2,
    origin: egui::Pos2,
) -> Option<&'a MirrorSprite> {
    scene
        .mirrors
        .iter()
        .rev()
        .find(|m| project(m.position, origin).distance(pointer) <= PICK_RADIUS)
}

fn port_at(scene: &RenderScene, pointer: egui::Pos2, origin: egui::Pos2) -> Option<(u64, PortId)> {
    for mirror in scene.mirrors.iter().rev() {
        for &(port, pos) in &mirror.ports {
            if project(pos, origin).distance(pointer) <= PICK_RADIUS / 2.0 {
                return Some((mirror.id, port));
            }
        }
    }
    None
}

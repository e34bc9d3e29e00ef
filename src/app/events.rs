//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::{Vec2, Vec3};

use crate::core::PartKind;
use crate::sync::PortId;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Platzier-Werkzeug aus der Teilebibliothek bewaffnen
    ToolArmRequested { kind: PartKind },
    /// Escape: Werkzeug entwaffnen und Selektion aufheben
    EscapePressed,
    /// Klick auf freie Canvas-Fläche oder eine Komponente
    CanvasClicked { pos: Vec2 },
    /// Komponente direkt angeklickt (Hit-Test bereits im UI erfolgt)
    ComponentPickRequested { id: u64 },
    /// Drag-Update einer Komponente
    DragMoved { id: u64, pos: Vec2 },
    /// Drag abgeschlossen
    DragEnded { id: u64 },
    /// Selektierte Komponente löschen
    DeleteSelectedRequested,
    /// Selektierte Komponente um Delta drehen (±90 aus der UI)
    RotateSelectedRequested { delta_deg: i32 },
    /// Position aus dem Eigenschaften-Panel setzen
    SetPositionRequested { id: u64, pos: Vec2 },
    /// Rotation aus dem Eigenschaften-Panel setzen
    SetRotationRequested { id: u64, deg: i32 },
    /// Rohrlänge aus Panel oder Resize-Handle setzen (cm, wird geklemmt)
    SetLengthRequested { id: u64, value: f64 },

    /// Raster ein/aus
    GridToggled,
    /// Snap ein/aus
    SnapToggled,
    /// 3D-Ansicht ein/aus
    View3DToggled,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom auf 100% zurücksetzen
    ZoomResetRequested,
    /// Gesamte Szene leeren
    ClearAllRequested,

    /// JSON-Export anstoßen (zeigt Dateidialog)
    ExportJsonRequested,
    /// PNG-Export anstoßen (zeigt Dateidialog)
    ExportPngRequested,
    /// Design-Import anstoßen (zeigt Dateidialog)
    ImportRequested,
    /// Exportpfad für JSON wurde im Dialog gewählt
    ExportJsonPathSelected { path: String },
    /// Exportpfad für PNG wurde im Dialog gewählt
    ExportPngPathSelected { path: String },
    /// Importdatei wurde im Dialog gewählt
    ImportFileSelected { path: String },

    /// Mirror wurde im 3D-Viewer bewegt
    MirrorMoved {
        id: u64,
        world_pos: Vec3,
        rotation_y: f32,
    },
    /// Zwei Ports verbinden
    ConnectPortsRequested {
        comp1: u64,
        port1: PortId,
        comp2: u64,
        port2: PortId,
    },
    /// Verbindung an einem Port lösen
    DisconnectPortRequested { comp: u64, port: PortId },
    /// Frame-Tick für laufende Animationen (Sekunden)
    FrameAdvanced { dt: f32 },

    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands; ausgeführt vom Controller über Feature-Handler.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Platzier-Werkzeug setzen (None = entwaffnen)
    ArmTool { kind: Option<PartKind> },
    /// Komponente an Position platzieren
    PlaceComponent { kind: PartKind, pos: Vec2 },
    /// Selektion setzen (None = aufheben)
    SelectComponent { id: Option<u64> },
    /// Komponente während eines Drags bewegen
    MoveComponent { id: u64, pos: Vec2 },
    /// Drag-Lifecycle Ende: finale Snap-Position anwenden
    EndComponentDrag { id: u64 },
    /// Selektierte Komponente löschen
    DeleteSelected,
    /// Selektierte Komponente drehen
    RotateSelected { delta_deg: i32 },
    /// Position direkt setzen
    SetComponentPosition { id: u64, pos: Vec2 },
    /// Rotation direkt setzen
    SetComponentRotation { id: u64, deg: i32 },
    /// Rohrlänge setzen (cm, wird geklemmt)
    SetComponentLength { id: u64, value: f64 },

    /// Raster umschalten
    ToggleGrid,
    /// Snap umschalten
    ToggleSnap,
    /// 3D-Ansicht umschalten
    Toggle3D,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoom zurücksetzen
    ResetZoom,
    /// Szene vollständig leeren
    ClearScene,

    /// JSON-Export-Dialog anfordern
    RequestExportJsonDialog,
    /// PNG-Export-Dialog anfordern
    RequestExportPngDialog,
    /// Import-Dialog anfordern
    RequestImportDialog,
    /// Design als JSON nach `path` schreiben
    ExportJson { path: String },
    /// Szene als PNG nach `path` rastern
    ExportPng { path: String },
    /// Design-Datei laden und Szene ersetzen
    ImportDesign { path: String },

    /// Ports verbinden
    ConnectPorts {
        comp1: u64,
        port1: PortId,
        comp2: u64,
        port2: PortId,
    },
    /// Port-Verbindung lösen
    DisconnectPort { comp: u64, port: PortId },
    /// 3D-Bewegung in die 2D-Szene zurückschreiben
    ApplyMirrorMove {
        id: u64,
        world_pos: Vec3,
        rotation_y: f32,
    },
    /// Animationen um `dt` Sekunden weitertakten
    TickAnimations { dt: f32 },

    /// Anwendung beenden
    RequestExit,
}

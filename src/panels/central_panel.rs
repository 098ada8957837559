use crate::PaintApp;
use crate::command::Command;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let buffer = app.session().buffer();
        let size = egui::vec2(buffer.width() as f32, buffer.height() as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        let frame = PointerFrame::read(ctx, canvas_rect);
        dispatch_pointer(app, frame);

        if let Some(texture) = app.canvas_texture(ctx) {
            painter.image(
                texture,
                canvas_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    });
}

/// Primary-button input for one frame, with the position in canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PointerFrame {
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// Set only while the pointer is over the canvas
    pub inside: Option<(i32, i32)>,
}

impl PointerFrame {
    fn read(ctx: &egui::Context, canvas_rect: egui::Rect) -> Self {
        ctx.input(|i| {
            let inside = i
                .pointer
                .interact_pos()
                .filter(|pos| canvas_rect.contains(*pos))
                .map(|pos| {
                    let local = pos - canvas_rect.min;
                    (local.x.floor() as i32, local.y.floor() as i32)
                });
            Self {
                pressed: i.pointer.primary_pressed(),
                down: i.pointer.primary_down(),
                released: i.pointer.primary_released(),
                inside,
            }
        })
    }
}

/// Whatever receives the pointer commands of the canvas
pub(crate) trait PointerTarget {
    fn send(&mut self, command: Command);

    /// True while a stroke or drag is in progress
    fn is_busy(&self) -> bool;

    fn last_pointer(&self) -> Option<(i32, i32)>;

    fn set_last_pointer(&mut self, pos: Option<(i32, i32)>);
}

/// Translates a frame's pointer input into session commands
fn dispatch_pointer(target: &mut impl PointerTarget, frame: PointerFrame) {
    if frame.pressed {
        if let Some((x, y)) = frame.inside {
            target.send(Command::PointerDown { x, y });
            target.set_last_pointer(Some((x, y)));
        }
    } else if frame.down && target.is_busy() {
        match frame.inside {
            Some(point) => {
                if target.last_pointer() != Some(point) {
                    target.send(Command::PointerMove { x: point.0, y: point.1 });
                    target.set_last_pointer(Some(point));
                }
            }
            None => {
                target.send(Command::PointerLeave);
                target.set_last_pointer(None);
            }
        }
    }

    // Press and release can land in the same frame on a quick click, so
    // the gesture state is checked again after the press went through
    if frame.released && target.is_busy() {
        target.send(Command::PointerUp);
        target.set_last_pointer(None);
    }
}

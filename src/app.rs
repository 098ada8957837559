use crate::command::{Command, CommandOutcome};
use crate::error::CanvasError;
use crate::file_handler::FileHandler;
use crate::panels::{PointerTarget, central_panel, tools_panel};
use crate::session::DrawingSession;

/// egui front end for a [`DrawingSession`].
///
/// Holds no drawing logic: widgets and pointer events are turned into
/// [`Command`]s and the session's buffer is shown as a texture.
pub struct PaintApp {
    session: DrawingSession,
    file_handler: FileHandler,
    texture: Option<egui::TextureHandle>,
    /// Session revision the texture was last uploaded at
    texture_revision: Option<u64>,
    /// Last pointer position sent to the session, in canvas pixels
    last_pointer: Option<(i32, i32)>,
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, session: DrawingSession) -> Self {
        Self {
            session,
            file_handler: FileHandler::new(),
            texture: None,
            texture_revision: None,
            last_pointer: None,
            status: None,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Runs a command, exporting to disk if asked, and keeps the outcome
    /// for the status line
    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing {:?}", command);
        match self.session.apply(&command) {
            Ok(CommandOutcome::Done) => {
                if command.resets_status() {
                    self.status = None;
                }
            }
            Ok(CommandOutcome::Exported(png)) => {
                let file_name = self.session.export_file_name().to_owned();
                self.status = Some(match self.file_handler.save(&file_name, &png) {
                    Ok(()) => format!("Saved {file_name}"),
                    Err(err) => err.to_string(),
                });
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: CanvasError) {
        if err.is_recoverable() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        self.status = Some(err.to_string());
    }

    /// Re-uploads the canvas texture if the session changed since last frame
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let revision = self.session.revision();
        if self.texture.is_none() || self.texture_revision != Some(revision) {
            let buffer = self.session.buffer();
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [buffer.width() as usize, buffer.height() as usize],
                buffer.data(),
            );
            if let Some(texture) = &mut self.texture {
                texture.set(image, egui::TextureOptions::NEAREST);
            } else {
                let texture = ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST);
                self.texture = Some(texture);
            }
            self.texture_revision = Some(revision);
        }

        self.texture.as_ref().map(|texture| texture.id())
    }

    fn import_dropped_files(&mut self, ctx: &egui::Context) {
        for (name, bytes) in self.file_handler.take_dropped_images(ctx) {
            match self.session.import(&bytes) {
                Ok(()) => self.status = Some(format!("Imported {name}")),
                Err(err) => self.report(err),
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z));
        if undo {
            self.execute_command(Command::Undo);
        }
    }
}

impl PointerTarget for PaintApp {
    fn send(&mut self, command: Command) {
        self.execute_command(command);
    }

    fn is_busy(&self) -> bool {
        !self.session.state().is_idle()
    }

    fn last_pointer(&self) -> Option<(i32, i32)> {
        self.last_pointer
    }

    fn set_last_pointer(&mut self, pos: Option<(i32, i32)>) {
        self.last_pointer = pos;
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.import_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

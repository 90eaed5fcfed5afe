/// Change requested by the app, applied by the runtime after the current callback.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    SetTitle(String),
    SetSize(u32, u32),
    SetPosition(i32, i32),
    /// Centers the window on its display.
    Center,
    SetMinimumSize(u32, u32),
    SetMaximumSize(u32, u32),
    /// `None` or non-positive disables the frame cap.
    SetMaxFramerate(Option<f64>),
    Exit,
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns,
/// in the order they were queued.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<WindowCommand>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(WindowCommand::SetTitle(title.into()));
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.commands.push(WindowCommand::SetSize(width, height));
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.commands.push(WindowCommand::SetPosition(x, y));
    }

    pub fn center(&mut self) {
        self.commands.push(WindowCommand::Center);
    }

    pub fn set_minimum_size(&mut self, width: u32, height: u32) {
        self.commands.push(WindowCommand::SetMinimumSize(width, height));
    }

    pub fn set_maximum_size(&mut self, width: u32, height: u32) {
        self.commands.push(WindowCommand::SetMaximumSize(width, height));
    }

    pub fn set_max_framerate(&mut self, fps: Option<f64>) {
        self.commands.push(WindowCommand::SetMaxFramerate(fps));
    }

    pub fn exit(&mut self) {
        self.commands.push(WindowCommand::Exit);
    }

    pub fn exit_requested(&self) -> bool {
        self.commands.contains(&WindowCommand::Exit)
    }

    /// Hands the queued commands to the runtime.
    pub fn drain(&mut self) -> std::vec::Drain<'_, WindowCommand> {
        self.commands.drain(..)
    }
}

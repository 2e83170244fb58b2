// Drawing surface for the particle field
//
// The animator draws through the `Surface` trait. The production surface is
// a `DrawList`: it records immediate-mode commands that the backdrop widget
// replays onto a ratatui canvas each frame.

/// A 2D immediate-mode drawing surface measured in surface units
pub trait Surface {
    /// Current (width, height)
    fn size(&self) -> (f64, f64);

    /// Resize the backing surface
    fn resize(&mut self, width: f64, height: f64);

    /// Clear everything drawn so far
    fn clear(&mut self);

    /// Filled circle with the given alpha (0.0 ~ 1.0)
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);

    /// Straight line with the given stroke width and alpha
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, alpha: f64);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        alpha: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        alpha: f64,
    },
}

/// Surface that records commands for later replay
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            commands: Vec::new(),
        }
    }

    /// Commands recorded since the last clear, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded circles only
    #[cfg(test)]
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Recorded lines only
    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, alpha: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            alpha,
        });
    }
}

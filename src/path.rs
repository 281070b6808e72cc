use crate::math::{Extent, Point, Rect};
use crate::surface::PathSink;

/// Sweep direction of arcs and ellipses, in y-down canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The `anticlockwise` flag of the canvas arc calls.
    pub fn is_counter_clockwise(self) -> bool {
        self == Direction::CounterClockwise
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    BezierTo {
        cp1: Point,
        cp2: Point,
        pt: Point,
    },
    QuadTo {
        cp: Point,
        pt: Point,
    },
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        dir: Direction,
    },
    Ellipse {
        center: Point,
        radii: Extent,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    },
    Rect(Rect),
    Close,
}

/// A recorded path, replayed by a surface in the coordinate system current
/// when it is filled, stroked, clipped or hit tested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathCommands {
    commands: Vec<PathCommand>,
}

impl PathCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Sends every command to `sink`.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(pt) => sink.move_to(pt),
                PathCommand::LineTo(pt) => sink.line_to(pt),
                PathCommand::BezierTo { cp1, cp2, pt } => sink.bezier_to(cp1, cp2, pt),
                PathCommand::QuadTo { cp, pt } => sink.quad_to(cp, pt),
                PathCommand::Arc {
                    center,
                    radius,
                    start,
                    end,
                    dir,
                } => sink.arc(center, radius, start, end, dir),
                PathCommand::Ellipse {
                    center,
                    radii,
                    rotation,
                    start,
                    end,
                    dir,
                } => sink.ellipse(center, radii, rotation, start, end, dir),
                PathCommand::Rect(rect) => sink.rect(rect),
                PathCommand::Close => sink.close_path(),
            }
        }
    }
}

impl From<Vec<PathCommand>> for PathCommands {
    fn from(commands: Vec<PathCommand>) -> Self {
        PathCommands { commands }
    }
}

impl PathSink for PathCommands {
    fn move_to(&mut self, pt: Point) {
        self.push(PathCommand::MoveTo(pt));
    }

    fn line_to(&mut self, pt: Point) {
        self.push(PathCommand::LineTo(pt));
    }

    fn bezier_to(&mut self, cp1: Point, cp2: Point, pt: Point) {
        self.push(PathCommand::BezierTo { cp1, cp2, pt });
    }

    fn quad_to(&mut self, cp: Point, pt: Point) {
        self.push(PathCommand::QuadTo { cp, pt });
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, dir: Direction) {
        self.push(PathCommand::Arc {
            center,
            radius,
            start,
            end,
            dir,
        });
    }

    fn ellipse(
        &mut self,
        center: Point,
        radii: Extent,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    ) {
        self.push(PathCommand::Ellipse {
            center,
            radii,
            rotation,
            start,
            end,
            dir,
        });
    }

    fn rect(&mut self, rect: Rect) {
        self.push(PathCommand::Rect(rect));
    }

    fn close_path(&mut self) {
        self.push(PathCommand::Close);
    }
}

//! Formula shape: a markup field placed on the canvas.

use crate::field::FieldChange;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique shape identifier.
pub type ShapeId = Uuid;

/// Validation errors for formula props.
#[derive(Debug, Error, PartialEq)]
pub enum PropsError {
    #[error("width must be a finite positive number, got {0}")]
    InvalidWidth(f64),
    #[error("height must be a finite positive number, got {0}")]
    InvalidHeight(f64),
}

/// Editable properties of a formula shape.
///
/// `width` and `height` track the rendered size of the markup; they are
/// rewritten on every edit and are not user-resizable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaProps {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
    /// Markup source, opaque to everything but the field widget.
    pub text: String,
}

impl FormulaProps {
    /// Smallest width an edit may shrink the shape to.
    pub const MIN_WIDTH: f64 = 50.0;
    /// Smallest height an edit may shrink the shape to.
    pub const MIN_HEIGHT: f64 = 40.0;

    pub const DEFAULT_WIDTH: f64 = 200.0;
    pub const DEFAULT_HEIGHT: f64 = 60.0;
    /// Seed markup for newly placed shapes.
    pub const DEFAULT_TEXT: &'static str = r"\sin^2\theta+\cos^2\theta=1";

    /// Props-schema hook for host registration. The markup is not parsed
    /// here; syntax is the field widget's concern.
    pub fn validate(&self) -> Result<(), PropsError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PropsError::InvalidWidth(self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(PropsError::InvalidHeight(self.height));
        }
        Ok(())
    }
}

impl Default for FormulaProps {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            text: Self::DEFAULT_TEXT.to_string(),
        }
    }
}

/// Interaction capabilities reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub editable: bool,
    pub resizable: bool,
    pub aspect_ratio_locked: bool,
}

/// How a formula shape is presented on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Live field plus suggestion palette; pointer input stays on the shape.
    Editing,
    /// Markup display only; pointer input passes through to the canvas.
    Static,
}

impl RenderMode {
    /// Pick the mode from the host's editing-session state.
    pub fn for_shape(id: ShapeId, editing: Option<ShapeId>) -> Self {
        if editing == Some(id) {
            Self::Editing
        } else {
            Self::Static
        }
    }

    /// Whether the rendered surface takes pointer events.
    pub fn captures_pointer(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// A formula shape record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaShape {
    pub(crate) id: ShapeId,
    /// Position of the top-left corner in canvas coordinates.
    pub position: Point,
    /// Editable properties.
    #[serde(default)]
    pub props: FormulaProps,
}

impl FormulaShape {
    /// Type tag hosts register and persist the shape under.
    pub const TYPE: &'static str = "formula";

    /// Editable in place, not resizable: the field sizes itself from its
    /// content.
    pub const CAPABILITIES: Capabilities = Capabilities {
        editable: true,
        resizable: false,
        aspect_ratio_locked: false,
    };

    /// Create a shape with default props at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            props: FormulaProps::default(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.props.width,
            self.position.y + self.props.height,
        )
    }

    /// The geometry is a filled rectangle, so interior points hit.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    /// Path representation of the geometry.
    pub fn to_path(&self) -> BezPath {
        let bounds = self.bounds();
        let mut path = BezPath::new();
        path.move_to(Point::new(bounds.x0, bounds.y0));
        path.line_to(Point::new(bounds.x1, bounds.y0));
        path.line_to(Point::new(bounds.x1, bounds.y1));
        path.line_to(Point::new(bounds.x0, bounds.y1));
        path.close_path();
        path
    }

    /// Selection indicator outline.
    pub fn indicator(&self) -> Rect {
        self.bounds()
    }

    /// Fold a field edit into the record: store the markup and clamp the
    /// reported render size to the minimums. Identity and position are
    /// untouched.
    pub fn apply_field_change(&mut self, change: FieldChange) {
        self.props.width = change.width.max(FormulaProps::MIN_WIDTH);
        self.props.height = change.height.max(FormulaProps::MIN_HEIGHT);
        self.props.text = change.markup;
    }
}

//! Geometry produced by the layout engine

use crate::tree::NodeId;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A bounding box representing the spatial extent of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// A phrase label with its optional coreference subscript.
///
/// `position` is the horizontal center and baseline of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    pub index: String,
    pub position: Point,
}

/// A lexical head, with display substitutions already applied
#[derive(Debug, Clone, PartialEq)]
pub struct HeadLayout {
    pub text: String,
    /// Horizontal center and baseline of the text
    pub position: Point,
    pub italic: bool,
}

/// A connector between a label and what hangs below it
#[derive(Debug, Clone, PartialEq)]
pub enum Connector {
    Line { from: Point, to: Point },
    /// Collapsed-subtree triangle: apex under the label, base over the head
    Triangle { apex: Point, left: Point, right: Point },
}

impl Connector {
    pub fn translate(&self, dx: f64, dy: f64) -> Connector {
        match self {
            Connector::Line { from, to } => Connector::Line {
                from: from.offset(dx, dy),
                to: to.offset(dx, dy),
            },
            Connector::Triangle { apex, left, right } => Connector::Triangle {
                apex: apex.offset(dx, dy),
                left: left.offset(dx, dy),
                right: right.offset(dx, dy),
            },
        }
    }
}

/// Geometry of one visible node and its visible descendants.
///
/// All coordinates are absolute; `offset` additionally records the node's
/// origin relative to its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub id: NodeId,
    pub offset: Point,
    pub bounds: BoundingBox,
    pub label: LabelLayout,
    pub head: Option<HeadLayout>,
    /// Line or triangle between the label and the head of a leaf
    pub head_connector: Option<Connector>,
    /// Line from this node's top to its parent's label
    pub edge: Option<Connector>,
    pub is_trace: bool,
    pub children: Vec<NodeLayout>,
}

impl NodeLayout {
    /// Shift this node and everything below it
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.bounds = self.bounds.translate(dx, dy);
        self.label.position = self.label.position.offset(dx, dy);
        if let Some(head) = &mut self.head {
            head.position = head.position.offset(dx, dy);
        }
        self.head_connector = self.head_connector.as_ref().map(|c| c.translate(dx, dy));
        self.edge = self.edge.as_ref().map(|c| c.translate(dx, dy));
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// This node and all its descendants, in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &NodeLayout> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, id: NodeId) -> Option<&NodeLayout> {
        self.iter().find(|n| n.id == id)
    }
}

/// A curved connector between a trace and its antecedent
#[derive(Debug, Clone, PartialEq)]
pub enum Movement {
    /// Elliptical arc from the antecedent's center to the trace's center,
    /// ending in an arrowhead at the trace
    Arc {
        trace: NodeId,
        antecedent: NodeId,
        from: Point,
        to: Point,
        rx: f64,
        ry: f64,
        /// SVG sweep flag (true = clockwise in y-down coordinates)
        sweep: bool,
    },
    /// Closed loop around a moved phrase; no arrowhead
    Loop {
        trace: NodeId,
        antecedent: NodeId,
        center: Point,
        rx: f64,
        ry: f64,
    },
}

impl Movement {
    pub fn trace(&self) -> NodeId {
        match self {
            Movement::Arc { trace, .. } | Movement::Loop { trace, .. } => *trace,
        }
    }

    pub fn antecedent(&self) -> NodeId {
        match self {
            Movement::Arc { antecedent, .. } | Movement::Loop { antecedent, .. } => *antecedent,
        }
    }

    pub fn has_arrow(&self) -> bool {
        matches!(self, Movement::Arc { .. })
    }

    /// SVG path `d` attribute for this connector
    pub fn path_data(&self) -> String {
        match self {
            Movement::Arc {
                from,
                to,
                rx,
                ry,
                sweep,
                ..
            } => format!(
                "M{:.2} {:.2} A{:.2} {:.2} 0 0 {} {:.2} {:.2}",
                from.x,
                from.y,
                rx,
                ry,
                u8::from(*sweep),
                to.x,
                to.y
            ),
            Movement::Loop { center, rx, ry, .. } => {
                let left = center.x - rx;
                let right = center.x + rx;
                format!(
                    "M{:.2} {:.2} A{:.2} {:.2} 0 1 0 {:.2} {:.2} A{:.2} {:.2} 0 1 0 {:.2} {:.2} Z",
                    left, center.y, rx, ry, right, center.y, rx, ry, left, center.y
                )
            }
        }
    }

    /// Extent of the curve as an SVG renderer draws it
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Movement::Arc {
                from,
                to,
                rx,
                ry,
                sweep,
                ..
            } => arc_bounds(*from, *to, *rx, *ry, *sweep),
            Movement::Loop { center, rx, ry, .. } => {
                BoundingBox::new(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0)
            }
        }
    }
}

fn points_bounds(points: &[Point]) -> BoundingBox {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Bounds of an unrotated, small-arc SVG elliptical arc.
///
/// Follows the SVG endpoint-to-center conversion: radii too small to span
/// the chord are scaled up, then the ellipse's extreme points that fall on
/// the swept part are added to the endpoints.
fn arc_bounds(from: Point, to: Point, rx: f64, ry: f64, sweep: bool) -> BoundingBox {
    const EPSILON: f64 = 1e-9;
    let (mut rx, mut ry) = (rx.abs(), ry.abs());
    if rx < EPSILON || ry < EPSILON || (from.x == to.x && from.y == to.y) {
        // drawn as a straight line, or not at all
        return points_bounds(&[from, to]);
    }

    let hx = (from.x - to.x) / 2.0;
    let hy = (from.y - to.y) / 2.0;
    let lambda = (hx * hx) / (rx * rx) + (hy * hy) / (ry * ry);
    if lambda > 1.0 {
        rx *= lambda.sqrt();
        ry *= lambda.sqrt();
    }

    // The large-arc flag is always 0, so the center sits on the side
    // opposite the sweep. Scaled radii put it on the chord's midpoint.
    let coef = if lambda >= 1.0 {
        0.0
    } else {
        let num = rx * rx * ry * ry - rx * rx * hy * hy - ry * ry * hx * hx;
        let den = rx * rx * hy * hy + ry * ry * hx * hx;
        let sign = if sweep { 1.0 } else { -1.0 };
        sign * (num / den).max(0.0).sqrt()
    };
    let cx = coef * rx * hy / ry + (from.x + to.x) / 2.0;
    let cy = -coef * ry * hx / rx + (from.y + to.y) / 2.0;

    let angle = |p: Point| ((p.y - cy) / ry).atan2((p.x - cx) / rx);
    let start = angle(from);
    let mut delta = angle(to) - start;
    if sweep && delta < 0.0 {
        delta += std::f64::consts::TAU;
    } else if !sweep && delta > 0.0 {
        delta -= std::f64::consts::TAU;
    }

    let mut points = vec![from, to];
    for k in 0..4 {
        let a = f64::from(k) * std::f64::consts::FRAC_PI_2;
        let travelled = if sweep {
            (a - start).rem_euclid(std::f64::consts::TAU)
        } else {
            (start - a).rem_euclid(std::f64::consts::TAU)
        };
        if travelled <= delta.abs() + EPSILON {
            points.push(Point::new(cx + rx * a.cos(), cy + ry * a.sin()));
        }
    }
    points_bounds(&points)
}

/// Complete layout of a tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    pub root: NodeLayout,
    pub movements: Vec<Movement>,
    /// Extent of all nodes and movement connectors
    pub bounds: BoundingBox,
}

impl TreeLayout {
    pub fn find(&self, id: NodeId) -> Option<&NodeLayout> {
        self.root.find(id)
    }

    /// All laid-out nodes in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeLayout> {
        self.root.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let bbox = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bbox.right(), 110.0);
        assert_eq!(bbox.bottom(), 70.0);
        assert_eq!(bbox.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_bounding_box_union() {
        let a = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        let b = BoundingBox::new(25.0, 25.0, 50.0, 50.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, 0.0, 75.0, 75.0));
    }

    #[test]
    fn test_connector_translate() {
        let line = Connector::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 2.0),
        };
        assert_eq!(
            line.translate(10.0, 5.0),
            Connector::Line {
                from: Point::new(10.0, 5.0),
                to: Point::new(11.0, 7.0),
            }
        );
    }

    #[test]
    fn test_arc_path_data() {
        let arc = Movement::Arc {
            trace: NodeId(2),
            antecedent: NodeId(1),
            from: Point::new(0.0, 10.0),
            to: Point::new(40.0, 10.0),
            rx: 20.0,
            ry: 30.0,
            sweep: false,
        };
        assert_eq!(arc.path_data(), "M0.00 10.00 A20.00 30.00 0 0 0 40.00 10.00");
        assert!(arc.has_arrow());

        // A half ellipse hanging below the chord
        let bounds = arc.bounds();
        assert!((bounds.x - 0.0).abs() < 1e-9);
        assert!((bounds.y - 10.0).abs() < 1e-9);
        assert!((bounds.width - 40.0).abs() < 1e-9);
        assert!((bounds.height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_bounds_between_different_depths() {
        let arc = Movement::Arc {
            trace: NodeId(2),
            antecedent: NodeId(1),
            from: Point::new(0.0, 0.0),
            to: Point::new(40.0, 100.0),
            rx: 20.0,
            ry: 30.0,
            sweep: false,
        };
        // The radii are scaled to span the chord and the curve swings out
        // to the left of both endpoints and below the lower one
        let lambda: f64 = 1.0 + (50.0 * 50.0) / (30.0 * 30.0);
        let rx = 20.0 * lambda.sqrt();
        let ry = 30.0 * lambda.sqrt();
        let bounds = arc.bounds();
        assert!((bounds.x - (20.0 - rx)).abs() < 1e-6);
        assert!((bounds.right() - 40.0).abs() < 1e-6);
        assert!((bounds.y - 0.0).abs() < 1e-6);
        assert!((bounds.bottom() - (50.0 + ry)).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_arc_is_a_line() {
        let arc = Movement::Arc {
            trace: NodeId(2),
            antecedent: NodeId(1),
            from: Point::new(5.0, 0.0),
            to: Point::new(5.0, 80.0),
            rx: 0.0,
            ry: 30.0,
            sweep: false,
        };
        assert_eq!(arc.bounds(), BoundingBox::new(5.0, 0.0, 0.0, 80.0));
    }

    #[test]
    fn test_loop_path_is_closed() {
        let ring = Movement::Loop {
            trace: NodeId(2),
            antecedent: NodeId(1),
            center: Point::new(50.0, 50.0),
            rx: 10.0,
            ry: 5.0,
        };
        let d = ring.path_data();
        assert!(d.starts_with("M40.00 50.00"));
        assert!(d.ends_with('Z'));
        assert!(!ring.has_arrow());
    }
}

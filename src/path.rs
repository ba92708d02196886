//! Closed outline descriptions as ordered command lists.
//!
//! A [`Path`] is the unit every shape produces: move, line, quadratic curve
//! and arc segments terminated by an explicit close. Paths are built with a
//! fluent API and are never mutated after being returned from a shape.

use glam::{DVec2, dvec2};
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::types::{Angle, Rect};

/// One drawing command.
///
/// Arcs are described by their bounding oval plus a start angle and sweep,
/// both in the Y-down convention where 0 points east and positive sweeps
/// turn clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    ArcTo { oval: Rect, start: Angle, sweep: Angle },
    Close,
}

/// An ordered sequence of drawing commands describing one closed outline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

/// The point on an oval's perimeter at the given angle.
pub fn point_on_oval(oval: Rect, angle: Angle) -> DVec2 {
    let rx = oval.width() / 2.0;
    let ry = oval.height() / 2.0;
    dvec2(
        oval.center_x() + rx * angle.raw().cos(),
        oval.center_y() + ry * angle.raw().sin(),
    )
}

impl Path {
    pub fn new() -> Path {
        Path { cmds: Vec::new() }
    }

    pub fn m(mut self, x: f64, y: f64) -> Path {
        self.cmds.push(PathCmd::MoveTo(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Path {
        self.cmds.push(PathCmd::LineTo(dvec2(x, y)));
        self
    }

    pub fn q(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Path {
        self.cmds.push(PathCmd::QuadTo {
            ctrl: dvec2(cx, cy),
            to: dvec2(x, y),
        });
        self
    }

    pub fn a(mut self, oval: Rect, start: Angle, sweep: Angle) -> Path {
        self.cmds.push(PathCmd::ArcTo { oval, start, sweep });
        self
    }

    pub fn z(mut self) -> Path {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// A path is closed when an explicit close command terminates it.
    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }

    /// Segment endpoints in order, including the initial move. Quadratic
    /// control points are not vertices; arcs contribute both endpoints.
    pub fn vertices(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => out.push(p),
                PathCmd::QuadTo { to, .. } => out.push(to),
                PathCmd::ArcTo { oval, start, sweep } => {
                    out.push(point_on_oval(oval, start));
                    out.push(point_on_oval(oval, Angle::radians(start.raw() + sweep.raw())));
                }
                PathCmd::Close => {}
            }
        }
        out
    }

    /// Tight bounding box of the outline. Curves are sampled; straight
    /// segments are exact. `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = dvec2(f64::MAX, f64::MAX);
        let mut max = dvec2(f64::MIN, f64::MIN);
        let mut any = false;
        let mut cursor = DVec2::ZERO;
        let include = |p: DVec2, min: &mut DVec2, max: &mut DVec2| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                    include(p, &mut min, &mut max);
                    cursor = p;
                    any = true;
                }
                PathCmd::QuadTo { ctrl, to } => {
                    const STEPS: usize = 16;
                    for i in 1..=STEPS {
                        let t = i as f64 / STEPS as f64;
                        let u = 1.0 - t;
                        let p = cursor * (u * u) + ctrl * (2.0 * u * t) + to * (t * t);
                        include(p, &mut min, &mut max);
                    }
                    cursor = to;
                    any = true;
                }
                PathCmd::ArcTo { oval, start, sweep } => {
                    const STEPS: usize = 64;
                    for i in 0..=STEPS {
                        let t = i as f64 / STEPS as f64;
                        let angle = Angle::radians(start.raw() + sweep.raw() * t);
                        include(point_on_oval(oval, angle), &mut min, &mut max);
                    }
                    cursor = point_on_oval(oval, Angle::radians(start.raw() + sweep.raw()));
                    any = true;
                }
                PathCmd::Close => {}
            }
        }

        any.then(|| Rect::new(min.x, min.y, max.x, max.y))
    }

    /// SVG path-data syntax, used for debugging and snapshot tests.
    ///
    /// Arcs assume the current point already sits at the arc's start angle,
    /// which holds for every generator in this crate; full sweeps are split
    /// into two half arcs because the endpoint form cannot express them.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    let _ = write!(out, "M{},{}", p.x, p.y);
                }
                PathCmd::LineTo(p) => {
                    let _ = write!(out, "L{},{}", p.x, p.y);
                }
                PathCmd::QuadTo { ctrl, to } => {
                    let _ = write!(out, "Q{},{} {},{}", ctrl.x, ctrl.y, to.x, to.y);
                }
                PathCmd::ArcTo { oval, start, sweep } => {
                    let rx = oval.width() / 2.0;
                    let ry = oval.height() / 2.0;
                    let sf = i32::from(sweep.raw() > 0.0);
                    if sweep.raw().abs() >= TAU {
                        let mid = point_on_oval(oval, Angle::radians(start.raw() + PI));
                        let end = point_on_oval(oval, start);
                        let _ = write!(out, "A{},{} 0 1,{} {},{}", rx, ry, sf, mid.x, mid.y);
                        let _ = write!(out, "A{},{} 0 1,{} {},{}", rx, ry, sf, end.x, end.y);
                    } else {
                        let laf = i32::from(sweep.raw().abs() > PI);
                        let end =
                            point_on_oval(oval, Angle::radians(start.raw() + sweep.raw()));
                        let _ = write!(out, "A{},{} 0 {},{} {},{}", rx, ry, laf, sf, end.x, end.y);
                    }
                }
                PathCmd::Close => out.push('Z'),
            }
        }
        out
    }
}

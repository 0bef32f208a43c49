// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Hyperplane Intersections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form intersections of lines (2D) and planes (3D).
//!
//! A plane is the set `{x : normal · x = offset}`. Parallel, coincident or
//! otherwise degenerate configurations return `None`; they are ordinary
//! outcomes of user input, not errors.

use linviz_types::constants::{DENOMINATOR_EPS, PARALLEL_EPS};
use serde::{Deserialize, Serialize};

use crate::determinant::{det2, det3};

type Vec3 = [f64; 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// 2 components for a line in the plane, 3 for a plane in space.
    pub normal: Vec<f64>,
    pub offset: f64,
}

impl Plane {
    pub fn new(normal: impl Into<Vec<f64>>, offset: f64) -> Self {
        Plane {
            normal: normal.into(),
            offset,
        }
    }

    pub fn dimension(&self) -> usize {
        self.normal.len()
    }

    /// A vanishing or non-finite normal cannot take part in an intersection.
    pub fn is_degenerate(&self) -> bool {
        if !self.offset.is_finite() || self.normal.iter().any(|v| !v.is_finite()) {
            return true;
        }
        self.normal.iter().map(|v| v * v).sum::<f64>().sqrt() < PARALLEL_EPS
    }

    fn normal3(&self) -> Option<Vec3> {
        match self.normal.as_slice() {
            &[x, y, z] if !self.is_degenerate() => Some([x, y, z]),
            _ => None,
        }
    }

    fn normal2(&self) -> Option<[f64; 2]> {
        match self.normal.as_slice() {
            &[x, y] if !self.is_degenerate() => Some([x, y]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Intersection {
    Line { point: Vec3, direction: Vec3 },
    Point { coordinates: Vec<f64> },
}

#[inline]
fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn norm(a: &Vec3) -> f64 {
    dot(a, a).sqrt()
}

#[inline]
fn scale(a: &Vec3, s: f64) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// Line of two planes in 3D from cross products.
///
/// direction `v = n1 x n2`, point `p0 = (d1 (n2 x v) + d2 (v x n1)) / (n1 · (n2 x v))`.
pub fn intersect_two_planes(p1: &Plane, p2: &Plane) -> Option<Intersection> {
    let n1 = p1.normal3()?;
    let n2 = p2.normal3()?;

    let v = cross(&n1, &n2);
    let v_len = norm(&v);
    if v_len < PARALLEL_EPS {
        return None;
    }

    let n2_x_v = cross(&n2, &v);
    let v_x_n1 = cross(&v, &n1);
    let denom = dot(&n1, &n2_x_v);
    if denom.abs() < DENOMINATOR_EPS {
        return None;
    }

    let point = [0, 1, 2].map(|k| (p1.offset * n2_x_v[k] + p2.offset * v_x_n1[k]) / denom);
    Some(Intersection::Line {
        point,
        direction: scale(&v, 1.0 / v_len),
    })
}

/// Line of two planes in 3D, axis-robust variant.
///
/// Each component of `n1 x n2` is the 2x2 minor of the normals on the other
/// two axes. The axis with the largest minor is pinned to zero and the
/// remaining 2x2 system is solved by Cramer's rule.
pub fn intersect_two_planes_by_minor(p1: &Plane, p2: &Plane) -> Option<Intersection> {
    let n1 = p1.normal3()?;
    let n2 = p2.normal3()?;

    let v = cross(&n1, &n2);
    let v_len = norm(&v);
    if v_len < PARALLEL_EPS {
        return None;
    }

    let pinned = (0..3)
        .max_by(|&a, &b| v[a].abs().total_cmp(&v[b].abs()))
        .unwrap_or(2);
    let (i, j) = ((pinned + 1) % 3, (pinned + 2) % 3);

    let det = det2(n1[i], n1[j], n2[i], n2[j]);
    if det.abs() < PARALLEL_EPS {
        return None;
    }

    let mut point = [0.0; 3];
    point[i] = det2(p1.offset, n1[j], p2.offset, n2[j]) / det;
    point[j] = det2(n1[i], p1.offset, n2[i], p2.offset) / det;

    Some(Intersection::Line {
        point,
        direction: scale(&v, 1.0 / v_len),
    })
}

/// Unique point of three planes in 3D by Cramer's rule.
pub fn intersect_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Intersection> {
    let rows = [p1.normal3()?, p2.normal3()?, p3.normal3()?];
    let d = [p1.offset, p2.offset, p3.offset];

    let det = det3(&rows);
    if det.abs() < PARALLEL_EPS {
        return None;
    }

    let coordinates = (0..3)
        .map(|col| {
            let mut m = rows;
            for (row, &rhs) in m.iter_mut().zip(&d) {
                row[col] = rhs;
            }
            det3(&m) / det
        })
        .collect();

    Some(Intersection::Point { coordinates })
}

/// Point where two lines in 2D meet, by Cramer's rule.
pub fn intersect_lines_2d(l1: &Plane, l2: &Plane) -> Option<Intersection> {
    let [a1, b1] = l1.normal2()?;
    let [a2, b2] = l2.normal2()?;

    let det = det2(a1, b1, a2, b2);
    if det.abs() < PARALLEL_EPS {
        return None;
    }

    let x = det2(l1.offset, b1, l2.offset, b2) / det;
    let y = det2(a1, l1.offset, a2, l2.offset) / det;
    Some(Intersection::Point {
        coordinates: vec![x, y],
    })
}

/// Pick the solver matching the number and dimension of the planes.
pub fn intersect(planes: &[Plane]) -> Option<Intersection> {
    let dim = planes.first()?.dimension();
    if planes.iter().any(|p| p.dimension() != dim) {
        return None;
    }
    match (dim, planes) {
        (2, [a, b]) => intersect_lines_2d(a, b),
        (3, [a, b]) => intersect_two_planes(a, b),
        (3, [a, b, c]) => intersect_three_planes(a, b, c),
        _ => None,
    }
}

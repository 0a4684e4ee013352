//! BCC lattice traversal tables for simplex-style noise.
//!
//! The rotated input space is covered by two interleaved cubic lattices (the
//! second offset by half a cell on every axis). For each of the 8 octants of a
//! cell, a table lists the candidate lattice points that may fall inside the
//! kernel radius, linked so that one point being in range rules out others.
//! Traversal starts at the octant entry and follows `next_on_success` when a
//! point contributed and `next_on_failure` when it was out of range.

use std::sync::LazyLock;

use super::SimplexQuality;

/// Hash offset separating the second half-lattice from the first.
const HALF_LATTICE_OFFSET: i32 = 1024;

const FLIP_X: u8 = 0b001;
const FLIP_Y: u8 = 0b010;
const FLIP_Z: u8 = 0b100;

/// A point visited by the simplex-style kernel, relative to the cell base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Offset to add to the in-cell x position to get the vector from this point.
    pub dxr: f64,
    /// Offset to add to the in-cell y position.
    pub dyr: f64,
    /// Offset to add to the in-cell z position.
    pub dzr: f64,
    /// Integer x offset used for hashing (second lattice shifted by 1024).
    pub xrv: i32,
    /// Integer y offset used for hashing.
    pub yrv: i32,
    /// Integer z offset used for hashing.
    pub zrv: i32,
    /// Next point to test when this one is out of range.
    pub next_on_failure: Option<u8>,
    /// Next point to test when this one contributed.
    pub next_on_success: Option<u8>,
}

impl LatticePoint {
    fn new(xrv: i32, yrv: i32, zrv: i32, lattice: i32) -> Self {
        let half = f64::from(lattice) * 0.5;
        Self {
            dxr: f64::from(-xrv) + half,
            dyr: f64::from(-yrv) + half,
            dzr: f64::from(-zrv) + half,
            xrv: xrv + lattice * HALF_LATTICE_OFFSET,
            yrv: yrv + lattice * HALF_LATTICE_OFFSET,
            zrv: zrv + lattice * HALF_LATTICE_OFFSET,
            next_on_failure: None,
            next_on_success: None,
        }
    }
}

/// Template for one candidate, shared by all octants.
///
/// On the first lattice a flipped axis steps to the neighbouring cell corner;
/// on the second lattice it steps to the neighbouring half-offset point.
/// Links are indices within the octant's candidate list.
struct Candidate {
    lattice: i32,
    flip: u8,
    on_failure: Option<u8>,
    on_success: Option<u8>,
}

const fn candidate(
    lattice: i32,
    flip: u8,
    on_failure: Option<u8>,
    on_success: Option<u8>,
) -> Candidate {
    Candidate {
        lattice,
        flip,
        on_failure,
        on_success,
    }
}

/// 8 candidates: the two guaranteed points, then single steps on each lattice.
/// Within squared radius `0.5`, finding a point on one lattice rules out the
/// rest of that lattice.
const STANDARD_CANDIDATES: [Candidate; 8] = [
    candidate(0, 0, Some(1), Some(1)),
    candidate(1, 0, Some(2), Some(2)),
    candidate(0, FLIP_X, Some(3), Some(6)),
    candidate(0, FLIP_Y, Some(4), Some(5)),
    candidate(0, FLIP_Z, Some(5), Some(5)),
    candidate(1, FLIP_X, Some(6), None),
    candidate(1, FLIP_Y, Some(7), None),
    candidate(1, FLIP_Z, None, None),
];

/// 14 candidates: the two guaranteed points, then for each axis the pair
/// "one step along the axis" vs "one step along the other two", on both lattices.
/// Only the two members of a pair exclude each other.
const SMOOTH_CANDIDATES: [Candidate; 14] = [
    candidate(0, 0, Some(1), Some(1)),
    candidate(1, 0, Some(2), Some(2)),
    candidate(0, FLIP_X, Some(3), Some(4)),
    candidate(0, FLIP_Y | FLIP_Z, Some(4), Some(4)),
    candidate(1, FLIP_X, Some(5), Some(6)),
    candidate(1, FLIP_Y | FLIP_Z, Some(6), Some(6)),
    candidate(0, FLIP_Y, Some(7), Some(8)),
    candidate(0, FLIP_X | FLIP_Z, Some(8), Some(8)),
    candidate(1, FLIP_Y, Some(9), Some(10)),
    candidate(1, FLIP_X | FLIP_Z, Some(10), Some(10)),
    candidate(0, FLIP_Z, Some(11), Some(12)),
    candidate(0, FLIP_X | FLIP_Y, Some(12), Some(12)),
    candidate(1, FLIP_Z, Some(13), None),
    candidate(1, FLIP_X | FLIP_Y, None, None),
];

/// Linked candidate points for all 8 octants of a cell.
#[derive(Debug, Clone)]
pub struct LatticeTable {
    points: Vec<LatticePoint>,
    entries: [u8; 8],
    squared_radius: f64,
}

impl LatticeTable {
    fn build(candidates: &[Candidate], squared_radius: f64) -> Self {
        let per_octant = candidates.len();
        let mut points = Vec::with_capacity(per_octant * 8);
        let mut entries = [0u8; 8];

        for (octant, entry) in entries.iter_mut().enumerate() {
            let base = points.len();
            *entry = base as u8;

            let i1 = (octant & 1) as i32;
            let j1 = ((octant >> 1) & 1) as i32;
            let k1 = ((octant >> 2) & 1) as i32;

            for c in candidates {
                let step = |first: i32, mask: u8| -> i32 {
                    let flipped = i32::from(c.flip & mask != 0);
                    if c.lattice == 0 {
                        first ^ flipped
                    } else {
                        first + ((first ^ 1) ^ flipped)
                    }
                };
                let mut point = LatticePoint::new(
                    step(i1, FLIP_X),
                    step(j1, FLIP_Y),
                    step(k1, FLIP_Z),
                    c.lattice,
                );
                point.next_on_failure = c.on_failure.map(|i| (base + usize::from(i)) as u8);
                point.next_on_success = c.on_success.map(|i| (base + usize::from(i)) as u8);
                points.push(point);
            }
        }

        Self {
            points,
            entries,
            squared_radius,
        }
    }

    /// Index of the first candidate for `octant` (`0..8`).
    #[inline]
    #[must_use]
    pub fn entry(&self, octant: usize) -> u8 {
        self.entries[octant]
    }

    /// The candidate at `index`.
    #[inline]
    #[must_use]
    pub fn point(&self, index: u8) -> &LatticePoint {
        &self.points[usize::from(index)]
    }

    /// Squared radius of the contribution kernel.
    #[inline]
    #[must_use]
    pub const fn squared_radius(&self) -> f64 {
        self.squared_radius
    }

    /// Number of candidate points stored across all octants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

static STANDARD_TABLE: LazyLock<LatticeTable> =
    LazyLock::new(|| LatticeTable::build(&STANDARD_CANDIDATES, 0.5));

static SMOOTH_TABLE: LazyLock<LatticeTable> =
    LazyLock::new(|| LatticeTable::build(&SMOOTH_CANDIDATES, 0.75));

impl SimplexQuality {
    /// The traversal table for this quality.
    #[inline]
    #[must_use]
    pub fn lattice(self) -> &'static LatticeTable {
        match self {
            Self::Standard => &STANDARD_TABLE,
            Self::Smooth => &SMOOTH_TABLE,
        }
    }
}

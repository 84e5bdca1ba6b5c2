//! Precomputed multiples of the generator

use crate::ec::p384::point::{Point, ProjectivePoint, WINDOWS, WINDOW_SIZE};
use once_cell::sync::Lazy;

/// Row `i` holds j·16ⁱ·G for j = 0..15
pub(crate) type GeneratorTable = Vec<[ProjectivePoint; WINDOW_SIZE]>;

static GENERATOR_TABLE: Lazy<GeneratorTable> = Lazy::new(build_generator_table);

/// The process-wide generator table, built on first use
pub(crate) fn generator_table() -> &'static GeneratorTable {
    &GENERATOR_TABLE
}

fn build_generator_table() -> GeneratorTable {
    tracing::trace!("building P-384 generator table");

    let mut table = Vec::with_capacity(WINDOWS);
    let mut base = Point::generator().to_projective();
    for _ in 0..WINDOWS {
        let mut row = [ProjectivePoint::identity(); WINDOW_SIZE];
        for j in 1..WINDOW_SIZE {
            row[j] = row[j - 1].add(&base);
        }
        // 16·base starts the next row
        base = row[WINDOW_SIZE - 1].add(&base);
        table.push(row);
    }
    table
}

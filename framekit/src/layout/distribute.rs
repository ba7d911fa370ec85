use crate::types::{BoxMode, Placement};

/// Compute the normalized placement of `count` children under `mode`.
///
/// Placements come back in child order. An empty box yields no placements.
pub fn distribute(mode: BoxMode, count: usize) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }

    match mode {
        BoxMode::Horizontal => strip(count, true),
        BoxMode::Vertical => strip(count, false),
        BoxMode::Grid => grid(count),
    }
}

fn strip(count: usize, is_row: bool) -> Vec<Placement> {
    let share = 1.0 / count as f32;

    (0..count)
        .map(|i| {
            let offset = i as f32 / count as f32;
            if is_row {
                Placement::new(offset, 0.0, share, 1.0)
            } else {
                Placement::new(0.0, offset, 1.0, share)
            }
        })
        .collect()
}

/// Row-major grid with `floor(sqrt(count))` columns.
///
/// The row divisor is `columns + count % 2`, not the real row count, so for
/// most counts the rows do not tile the parent exactly. Host layouts depend
/// on this output, keep it as is.
fn grid(count: usize) -> Vec<Placement> {
    let columns = (count as f64).sqrt().floor() as usize;
    if columns == 0 {
        return Vec::new();
    }
    let rows = columns + count % 2;

    let width = 1.0 / columns as f32;
    let height = 1.0 / rows as f32;

    let mut placements = Vec::with_capacity(count);
    let mut column = 0;
    let mut row = 0;

    for _ in 0..count {
        if column >= columns {
            column = 0;
            row += 1;
        }
        placements.push(Placement::new(
            column as f32 / columns as f32,
            row as f32 / rows as f32,
            width,
            height,
        ));
        column += 1;
    }

    placements
}

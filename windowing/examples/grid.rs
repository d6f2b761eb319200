// Example: grid windowing with a partially filled final row.
use windowing::{GridLayoutParameters, ViewportState, grid};

fn main() {
    let layout = GridLayoutParameters::new(97, 4, 80).with_gap(8);
    let viewport = ViewportState::new(1_800, 400).clamped(layout.total_extent());

    let w = grid::compute_window(viewport, &layout);
    println!(
        "rows={:?} items={:?} total_extent={}",
        w.rows.as_inclusive(),
        w.items.as_inclusive(),
        w.total_extent
    );

    // A real UI would place each cell at (column_span(column).0, row.offset).
    w.for_each_cell(|cell| {
        let (x, width) = layout.column_span(cell.column, 640);
        match cell.index {
            Some(index) => println!("row={} x={x} width={width} item={index}", cell.row),
            None => println!("row={} x={x} width={width} placeholder", cell.row),
        }
    });
}

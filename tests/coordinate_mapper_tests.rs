use approx::assert_relative_eq;
use simple_charts::core::{
    CoordinateMapper, Frame, GridSpec, LegendPlacement, Offset, TickAnchor, ValueRange,
    compute_offset, slot_for_index, x_axis_tick_label, x_for_index, x_tick_count,
    y_axis_tick_value, y_for_value,
};

fn bottom_offset() -> Offset {
    compute_offset(LegendPlacement::Bottom, 1.0)
}

#[test]
fn x_spans_plot_width_between_offsets() {
    let offset = bottom_offset();
    assert_eq!(x_for_index(0, 5, 300.0, offset), 31.0);
    assert_eq!(x_for_index(4, 5, 300.0, offset), 269.0);
    assert_relative_eq!(x_for_index(2, 5, 300.0, offset), 150.0);
}

#[test]
fn single_sample_is_left_aligned() {
    let offset = bottom_offset();
    assert_eq!(x_for_index(0, 1, 300.0, offset), offset.left);
}

#[test]
fn y_maps_range_ends_to_plot_edges() {
    let offset = bottom_offset();
    assert_eq!(y_for_value(0.0, 100.0, 0.0, 200.0, offset), 138.0);
    assert_eq!(y_for_value(100.0, 100.0, 0.0, 200.0, offset), 20.0);
    assert_relative_eq!(y_for_value(50.0, 100.0, 0.0, 200.0, offset), 79.0);
}

#[test]
fn y_respects_non_zero_minimum() {
    let offset = bottom_offset();
    assert_eq!(y_for_value(-10.0, 10.0, -10.0, 200.0, offset), 138.0);
    assert_relative_eq!(y_for_value(0.0, 10.0, -10.0, 200.0, offset), 79.0);
}

#[test]
fn flat_range_maps_to_baseline() {
    let offset = bottom_offset();
    assert_eq!(y_for_value(7.0, 7.0, 7.0, 200.0, offset), 138.0);
    assert_eq!(y_for_value(3.0, 7.0, 7.0, 200.0, offset), 138.0);
}

#[test]
fn y_tick_values_are_evenly_spaced_from_zero() {
    let ticks: Vec<f64> = (0..=6).map(|i| y_axis_tick_value(i, 61.0, 6)).collect();
    assert_eq!(ticks[0], 0.0);
    assert_relative_eq!(ticks[3], 30.5);
    assert_eq!(ticks[6], 61.0);
}

#[test]
fn x_tick_labels_keep_truncating_scale() {
    // fewer points than gridlines: scale = 4 / 3 = 1
    assert_eq!(x_axis_tick_label(3, 4, 6), Some(3));
    // 20 points over 6 gridlines: scale = 3
    assert_eq!(x_axis_tick_label(6, 20, 6), Some(18));
    assert_eq!(x_axis_tick_label(0, 1, 6), None);
    assert_eq!(x_axis_tick_label(1, 10, 0), None);
}

#[test]
fn x_tick_count_caps_at_gridlines_plus_one() {
    assert_eq!(x_tick_count(0, 6), 0);
    assert_eq!(x_tick_count(3, 6), 3);
    assert_eq!(x_tick_count(50, 6), 7);
}

#[test]
fn bar_slots_partition_plot_width() {
    let offset = bottom_offset();
    let (first_x, width) = slot_for_index(0, 4, 300.0, offset);
    let (last_x, _) = slot_for_index(3, 4, 300.0, offset);
    assert_eq!(first_x, 31.0);
    assert_relative_eq!(width, 59.5);
    assert_relative_eq!(last_x + width, 269.0);
}

#[test]
fn mapper_ticks_line_up_with_point_mapping() {
    let mapper = CoordinateMapper::new(
        Frame::new(400.0, 300.0),
        bottom_offset(),
        ValueRange::new(0.0, 60.0),
    );
    let grid = GridSpec::new(6, 6);

    let y_ticks = mapper.y_ticks(grid);
    assert_eq!(y_ticks.len(), 7);
    assert_eq!(y_ticks[0].1, mapper.baseline_y());
    assert_eq!(y_ticks[6].1, mapper.top_y());

    let x_ticks = mapper.x_ticks(7, grid, TickAnchor::Point);
    assert_eq!(x_ticks.len(), 7);
    for (index, (label, x)) in x_ticks.iter().enumerate() {
        assert_eq!(*label, Some(index as i64));
        assert_eq!(*x, mapper.x(index, 7));
    }
}

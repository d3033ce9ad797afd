use simple_charts::core::{
    DEFAULT_VALUE_PADDING, RangeAggregator, Series, SeriesSet, ValueRange,
};
use simple_charts::render::Color;

fn set(values: Vec<Vec<f64>>) -> SeriesSet {
    SeriesSet::new(
        values
            .into_iter()
            .enumerate()
            .map(|(index, values)| Series::new(format!("s{index}"), Color::BLACK, values))
            .collect(),
    )
}

#[test]
fn max_spans_every_series_plus_padding() {
    let series = set(vec![vec![1.0, 5.0, 3.0], vec![2.0, 9.0, 0.0]]);
    let aggregator = RangeAggregator::default();
    assert_eq!(aggregator.aggregate_max(&series), 9.0 + DEFAULT_VALUE_PADDING);
    assert_eq!(RangeAggregator::new(10.0).aggregate_max(&series), 19.0);
}

#[test]
fn empty_set_yields_padding_and_zero_count() {
    let aggregator = RangeAggregator::default();
    let empty = SeriesSet::default();
    assert_eq!(aggregator.aggregate_max(&empty), DEFAULT_VALUE_PADDING);
    assert_eq!(aggregator.aggregate_count(&empty), 0);
}

#[test]
fn empty_series_are_ignored() {
    let series = set(vec![vec![], vec![4.0], vec![]]);
    let aggregator = RangeAggregator::new(1.0);
    assert_eq!(aggregator.aggregate_max(&series), 5.0);
    assert_eq!(aggregator.aggregate_count(&series), 1);

    let all_empty = set(vec![vec![], vec![]]);
    assert_eq!(aggregator.aggregate_max(&all_empty), 1.0);
}

#[test]
fn count_follows_longest_series() {
    let series = set(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0], vec![7.0]]);
    assert_eq!(RangeAggregator::default().aggregate_count(&series), 4);
}

#[test]
fn manual_range_overrides_data() {
    let series = set(vec![vec![1.0, 500.0]]);
    let aggregator = RangeAggregator::default();
    assert_eq!(
        aggregator.resolve(&series, Some(ValueRange::new(-5.0, 50.0))),
        ValueRange::new(-5.0, 50.0)
    );
    assert_eq!(
        aggregator.resolve(&series, None),
        ValueRange::new(0.0, 500.0 + DEFAULT_VALUE_PADDING)
    );
}

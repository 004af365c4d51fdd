use crate::analyzers::day::{DayType, WEEK, day_name, day_number, day_type_of};
use crate::analyzers::types::{LabelCount, RouteCount};
use crate::analyzers::utility::{correlation, mean};
use crate::error::Result;
use crate::table::{Column, Table, TrainRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Number of distinct non-missing values in `column`.
pub fn count_distinct(table: &Table, column: Column) -> usize {
    table.values(column).collect::<BTreeSet<_>>().len()
}

/// Occurrences of each non-missing value in `column`, keyed in lexicographic order.
pub fn value_counts(table: &Table, column: Column) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in table.values(column) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// The most common value in `column`; ties go to the lexicographically smallest.
pub fn most_frequent(table: &Table, column: Column) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (value, count) in value_counts(table, column) {
        // strict comparison keeps the earlier (smaller) key on ties
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Row counts per combination of `columns`.
///
/// Rows with a missing cell in any grouping column are skipped.
pub fn group_count(table: &Table, columns: &[Column]) -> BTreeMap<Vec<String>, usize> {
    let mut counts = BTreeMap::new();
    for record in table.records() {
        let key: Option<Vec<String>> = columns
            .iter()
            .map(|&c| record.get(c).map(str::to_string))
            .collect();
        if let Some(key) = key {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// For every value of `group`, the mean row count across its `subgroup` values.
pub fn average_per_group(table: &Table, group: Column, subgroup: Column) -> BTreeMap<String, f64> {
    let mut series: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (key, count) in group_count(table, &[group, subgroup]) {
        if let Some(head) = key.into_iter().next() {
            series.entry(head).or_default().push(count as f64);
        }
    }

    series
        .into_iter()
        .map(|(group, counts)| (group, mean(&counts)))
        .collect()
}

/// The `n` largest entries by count, descending.
///
/// The sort is stable, so equal counts keep the map's key order.
pub fn top_n<K: Clone>(counts: &BTreeMap<K, usize>, n: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// The `n` busiest stations in `column`.
pub fn top_stations(table: &Table, column: Column, n: usize) -> Vec<LabelCount> {
    top_n(&value_counts(table, column), n)
        .into_iter()
        .map(|(label, count)| LabelCount::new(label, count))
        .collect()
}

/// The `n` most frequent (source, destination) pairs.
pub fn top_routes(table: &Table, n: usize) -> Vec<RouteCount> {
    let routes = group_count(table, &[Column::SourceStation, Column::DestinationStation]);

    top_n(&routes, n)
        .into_iter()
        .filter_map(|(key, count)| match key.as_slice() {
            [source, destination] => Some(RouteCount {
                source: source.clone(),
                destination: destination.clone(),
                count,
            }),
            _ => None,
        })
        .collect()
}

/// Rows per day name, most frequent first.
pub fn day_counts(table: &Table) -> Vec<LabelCount> {
    let counts = value_counts(table, Column::Day);
    top_n(&counts, counts.len())
        .into_iter()
        .map(|(label, count)| LabelCount::new(label, count))
        .collect()
}

/// Rows per day, Monday through Sunday, with zero for days absent from the data.
pub fn day_counts_ordered(table: &Table) -> Vec<LabelCount> {
    let counts = value_counts(table, Column::Day);
    WEEK.iter()
        .map(|d| {
            let name = day_name(*d);
            LabelCount::new(name, counts.get(name).copied().unwrap_or(0))
        })
        .collect()
}

/// Rows per day number (Monday = 1), only for days that occur in the data.
pub fn day_number_counts(table: &Table) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for day in table.values(Column::Day) {
        if let Some(n) = day_number(day) {
            *counts.entry(n).or_insert(0) += 1;
        }
    }
    counts
}

/// Correlation between day number and the number of rows on that day.
pub fn day_trend(table: &Table) -> Result<f64> {
    let counts = day_number_counts(table);
    let days: Vec<f64> = counts.keys().map(|&d| d as f64).collect();
    let totals: Vec<f64> = counts.values().map(|&c| c as f64).collect();
    correlation(&days, &totals)
}

/// Rows per [`DayType`]; rows without a day are skipped.
pub fn day_type_counts(table: &Table) -> BTreeMap<DayType, usize> {
    let mut counts = BTreeMap::new();
    for day in table.values(Column::Day) {
        *counts.entry(day_type_of(day)).or_insert(0) += 1;
    }
    counts
}

pub fn filter_by_day<'a>(table: &'a Table, day: &str) -> Vec<&'a TrainRecord> {
    table
        .records()
        .iter()
        .filter(|r| r.day.as_deref() == Some(day))
        .collect()
}

pub fn filter_by_source<'a>(table: &'a Table, station: &str) -> Vec<&'a TrainRecord> {
    table
        .records()
        .iter()
        .filter(|r| r.source_station.as_deref() == Some(station))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::clean;

    fn table(rows: &[(&str, &str, &str, &str)]) -> Table {
        Table::from_records(
            rows.iter()
                .map(|(n, s, d, day)| TrainRecord::new(n, s, d, day))
                .collect(),
        )
    }

    fn sample() -> Table {
        let mut t = table(&[
            ("T1", "delhi", "mumbai", "monday"),
            ("T2", "DELHI", "Chennai", "Saturday"),
            ("T3", "Mumbai", "Delhi", "sunday"),
        ]);
        clean(&mut t);
        t
    }

    #[test]
    fn test_count_distinct_after_cleaning() {
        let t = sample();
        assert_eq!(count_distinct(&t, Column::SourceStation), 2);
        assert_eq!(count_distinct(&t, Column::DestinationStation), 3);
        assert_eq!(count_distinct(&t, Column::TrainNo), 3);
    }

    #[test]
    fn test_count_distinct_ignores_missing() {
        let mut t = sample();
        let mut extra = TrainRecord::new("T4", "X", "Y", "Monday");
        extra.source_station = None;
        t = Table::from_records(t.records().iter().cloned().chain([extra]).collect());

        assert_eq!(count_distinct(&t, Column::SourceStation), 2);
    }

    #[test]
    fn test_most_frequent() {
        let t = sample();
        assert_eq!(most_frequent(&t, Column::SourceStation).as_deref(), Some("DELHI"));
    }

    #[test]
    fn test_most_frequent_tie_breaks_lexicographically() {
        let t = table(&[
            ("T1", "PUNE", "GOA", "Monday"),
            ("T2", "AGRA", "GOA", "Monday"),
            ("T3", "PUNE", "GOA", "Monday"),
            ("T4", "AGRA", "GOA", "Monday"),
        ]);
        assert_eq!(most_frequent(&t, Column::SourceStation).as_deref(), Some("AGRA"));
    }

    #[test]
    fn test_most_frequent_empty_table() {
        assert_eq!(most_frequent(&Table::default(), Column::SourceStation), None);
    }

    #[test]
    fn test_group_count_sums_to_row_count() {
        let t = sample();
        let groups = group_count(&t, &[Column::SourceStation, Column::Day]);
        assert_eq!(groups.values().sum::<usize>(), t.len());
        assert_eq!(
            groups.get(&vec!["DELHI".to_string(), "Monday".to_string()]),
            Some(&1)
        );
    }

    #[test]
    fn test_average_per_group() {
        let t = table(&[
            ("T1", "DELHI", "AGRA", "Monday"),
            ("T2", "DELHI", "AGRA", "Monday"),
            ("T3", "DELHI", "AGRA", "Monday"),
            ("T4", "DELHI", "AGRA", "Friday"),
            ("T5", "PUNE", "GOA", "Sunday"),
        ]);
        let avg = average_per_group(&t, Column::SourceStation, Column::Day);

        assert_eq!(avg.get("DELHI"), Some(&2.0));
        assert_eq!(avg.get("PUNE"), Some(&1.0));
        assert_eq!(avg.len(), 2);
    }

    #[test]
    fn test_top_n_sorted_and_stable() {
        let mut counts = BTreeMap::new();
        counts.insert("B", 2);
        counts.insert("A", 2);
        counts.insert("C", 5);
        counts.insert("D", 1);

        let top = top_n(&counts, 3);
        assert_eq!(top, vec![("C", 5), ("A", 2), ("B", 2)]);
    }

    #[test]
    fn test_top_routes_unique_and_descending() {
        let mut rows = Vec::new();
        for i in 0..15 {
            for j in 0..=i {
                rows.push(TrainRecord::new(
                    &format!("T{i}-{j}"),
                    &format!("S{i}"),
                    &format!("D{i}"),
                    "Monday",
                ));
            }
        }
        let t = Table::from_records(rows);
        let routes = top_routes(&t, 10);

        assert_eq!(routes.len(), 10);
        assert_eq!(routes[0].source, "S14");
        assert_eq!(routes[0].count, 15);
        assert!(routes.windows(2).all(|w| w[0].count >= w[1].count));
        let pairs: BTreeSet<_> = routes.iter().map(|r| (&r.source, &r.destination)).collect();
        assert_eq!(pairs.len(), routes.len());
    }

    #[test]
    fn test_top_routes_fewer_than_n() {
        let routes = top_routes(&sample(), 10);
        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn test_day_counts_ordered_fills_gaps() {
        let ordered = day_counts_ordered(&sample());
        let labels: Vec<_> = ordered.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels[0], "Monday");
        assert_eq!(labels[6], "Sunday");
        assert_eq!(ordered[0].count, 1);
        assert_eq!(ordered[1].count, 0);
        assert_eq!(ordered[5].count, 1);
    }

    #[test]
    fn test_day_counts_most_frequent_first() {
        let t = table(&[
            ("T1", "A", "B", "Friday"),
            ("T2", "A", "B", "Monday"),
            ("T3", "A", "B", "Monday"),
        ]);
        let counts = day_counts(&t);
        assert_eq!(counts[0], LabelCount::new("Monday", 2));
        assert_eq!(counts[1], LabelCount::new("Friday", 1));
    }

    #[test]
    fn test_day_trend_declining_week() {
        let mut rows = Vec::new();
        for (day, n) in [
            ("Monday", 5),
            ("Tuesday", 3),
            ("Wednesday", 3),
            ("Thursday", 2),
            ("Friday", 1),
        ] {
            for i in 0..n {
                rows.push(TrainRecord::new(&format!("{day}{i}"), "A", "B", day));
            }
        }
        let r = day_trend(&Table::from_records(rows)).unwrap();
        assert!(r < -0.3);
    }

    #[test]
    fn test_day_trend_single_day_is_degenerate() {
        let t = table(&[("T1", "A", "B", "Monday"), ("T2", "A", "B", "Monday")]);
        assert!(day_trend(&t).is_err());
    }

    #[test]
    fn test_day_types_of_sample() {
        let t = sample();
        let types: Vec<_> = t.values(Column::Day).map(day_type_of).collect();
        assert_eq!(types, vec![DayType::Weekday, DayType::Weekend, DayType::Weekend]);

        let counts = day_type_counts(&t);
        assert_eq!(counts.get(&DayType::Weekday), Some(&1));
        assert_eq!(counts.get(&DayType::Weekend), Some(&2));
    }

    #[test]
    fn test_filters() {
        let t = sample();
        assert_eq!(filter_by_day(&t, "Saturday").len(), 1);
        assert_eq!(filter_by_source(&t, "DELHI").len(), 2);
        assert!(filter_by_source(&t, "LUCKNOW JN.").is_empty());
    }
}

//! Stable single-column sort stage.

use std::cmp::Ordering;

use gridkit_types::{CellValue, Column, Record, SortDirection, SortSpec};

/// Order the filtered indices by the active sort column.
///
/// `key = None` (or a key naming no column) returns the input unchanged.
/// Comparison happens over the column's raw underlying value, never the
/// rendered text: two numeric values compare numerically, everything else
/// compares as its string representation with locale-independent byte
/// ordering. The sort is stable in both directions; descending flips the
/// comparator result, so equal-comparing records keep their relative input
/// order regardless of direction.
pub fn apply_sort<T: Record>(
    records: &[T],
    mut indices: Vec<usize>,
    columns: &[Column<T>],
    spec: &SortSpec,
) -> Vec<usize> {
    let Some(key) = spec.key.as_deref() else {
        return indices;
    };
    let Some(column) = columns.iter().find(|column| column.key == key) else {
        tracing::warn!(key, "sort key names no column; leaving order unchanged");
        return indices;
    };

    let values: Vec<CellValue> = records.iter().map(|record| column.raw_value(record)).collect();
    indices.sort_by(|&a, &b| {
        let ordering = compare_cells(&values[a], &values[b]);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    indices
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn products() -> Vec<Value> {
        vec![
            json!({"name": "Gloss", "price": 12.0, "category": "lip"}),
            json!({"name": "Balm", "price": 8.5, "category": "lip"}),
            json!({"name": "Liner", "price": 12.0, "category": "eye"}),
            json!({"name": "Mascara", "price": 21.0, "category": "eye"}),
        ]
    }

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(true),
            Column::new("price", "Price").sortable(true),
            Column::new("category", "Category"),
        ]
    }

    fn all(records: &[Value]) -> Vec<usize> {
        (0..records.len()).collect()
    }

    fn spec(key: &str, direction: SortDirection) -> SortSpec {
        SortSpec {
            key: Some(key.into()),
            direction,
        }
    }

    #[test]
    fn no_key_preserves_order() {
        let records = products();
        let spec = SortSpec::default();
        assert_eq!(
            apply_sort(&records, all(&records), &columns(), &spec),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn numeric_values_sort_numerically() {
        let records = products();
        let spec = spec("price", SortDirection::Ascending);
        assert_eq!(
            apply_sort(&records, all(&records), &columns(), &spec),
            vec![1, 0, 2, 3]
        );
    }

    #[test]
    fn strings_sort_lexically() {
        let records = products();
        let spec = spec("name", SortDirection::Ascending);
        assert_eq!(
            apply_sort(&records, all(&records), &columns(), &spec),
            vec![1, 0, 2, 3]
        );
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let records = products();
        // Gloss and Liner share price 12.0; Gloss precedes Liner on input.
        let asc = apply_sort(
            &records,
            all(&records),
            &columns(),
            &spec("price", SortDirection::Ascending),
        );
        assert_eq!(asc, vec![1, 0, 2, 3]);
        let desc = apply_sort(
            &records,
            all(&records),
            &columns(),
            &spec("price", SortDirection::Descending),
        );
        assert_eq!(desc, vec![3, 0, 2, 1]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let records = products();
        let spec = spec("price", SortDirection::Ascending);
        let once = apply_sort(&records, all(&records), &columns(), &spec);
        let twice = apply_sort(&records, once.clone(), &columns(), &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn descending_reverses_strict_orderings_exactly() {
        let records = products();
        let asc = apply_sort(
            &records,
            all(&records),
            &columns(),
            &spec("name", SortDirection::Ascending),
        );
        let mut desc = apply_sort(
            &records,
            all(&records),
            &columns(),
            &spec("name", SortDirection::Descending),
        );
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn unknown_key_leaves_order_unchanged() {
        let records = products();
        let spec = spec("ghost", SortDirection::Ascending);
        assert_eq!(
            apply_sort(&records, all(&records), &columns(), &spec),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn mixed_values_fall_back_to_string_comparison() {
        let records = vec![
            json!({"v": "10"}),
            json!({"v": 9}),
            json!({"v": null}),
        ];
        let columns: Vec<Column<Value>> = vec![Column::new("v", "V").sortable(true)];
        let spec = spec("v", SortDirection::Ascending);
        // "" < "10" < "9" lexically once any side is non-numeric.
        assert_eq!(apply_sort(&records, vec![0, 1, 2], &columns, &spec), vec![2, 0, 1]);
    }
}

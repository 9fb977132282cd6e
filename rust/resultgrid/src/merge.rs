//! Folding fetched pages into an accumulated execution result.

use crate::models::{Data, ExecutionResult, ResultHeaderItem};

/// Merges the next fetched `page` into the accumulated result, consuming
/// both and returning the new accumulator. Merging only ever appends:
/// previously accumulated cells and header items stay untouched.
///
/// Works for one- and two-dimensional results. `paging.count` of the
/// returned accumulator is recomputed from the merged header rows, which is
/// the authoritative size; the page's own count is never carried over.
pub fn merge_page(prev: ExecutionResult, page: ExecutionResult) -> ExecutionResult {
    let mut acc = prev;
    let ExecutionResult {
        header_items,
        data,
        paging,
    } = page;

    let dims = paging.offset.len();

    acc.data = merge_data(acc.data, data, paging.offset[0]);

    for (dim, rows) in header_items.into_iter().enumerate() {
        // A page only introduces new header items for a dimension when it
        // sits at the edge of the other one (offset 0); pages further along
        // a row band repeat the same labels and must not re-append them.
        // One-dimensional results have no other dimension to check.
        let is_edge = dims < 2 || paging.offset[if dim == 0 { 1 } else { 0 }] == 0;
        if !is_edge {
            continue;
        }
        if let Some(acc_rows) = acc.header_items.get_mut(dim) {
            merge_header_rows(acc_rows, rows);
        }
    }

    acc.paging.count = (0..dims)
        .map(|dim| {
            acc.header_items
                .get(dim)
                .and_then(|rows| rows.first())
                .map_or(0, |row| row.len() as i64)
        })
        .collect();

    acc
}

fn merge_data(prev: Data, page: Data, row_offset: i64) -> Data {
    match (prev, page) {
        (Data::OneDim(mut acc), Data::OneDim(cells)) => {
            acc.extend(cells);
            Data::OneDim(acc)
        }
        (Data::TwoDim(mut acc), Data::TwoDim(rows)) => {
            let row_offset = usize::try_from(row_offset).unwrap_or(0);
            if row_offset < acc.len() {
                // the page extends already-known rows with further columns
                for (i, row) in rows.into_iter().enumerate() {
                    match acc.get_mut(row_offset + i) {
                        Some(target) => target.extend(row),
                        None => acc.push(row),
                    }
                }
            } else {
                // a genuinely new row band
                acc.extend(rows);
            }
            Data::TwoDim(acc)
        }
        // An empty data array is shapeless on the wire and deserializes as
        // flat; nothing to merge in that direction.
        (prev @ Data::TwoDim(_), Data::OneDim(cells)) if cells.is_empty() => prev,
        (Data::OneDim(acc), page) if acc.is_empty() => page,
        (prev, _) => prev,
    }
}

fn merge_header_rows(acc: &mut Vec<Vec<ResultHeaderItem>>, rows: Vec<Vec<ResultHeaderItem>>) {
    for (idx, items) in rows.into_iter().enumerate() {
        match acc.get_mut(idx) {
            Some(target) => target.extend(items),
            None => acc.push(items),
        }
    }
}

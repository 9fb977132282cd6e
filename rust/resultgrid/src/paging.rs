//! Page-window arithmetic for row-major traversal of 1- and 2-dimensional
//! execution results.
//!
//! The traversal walks all column windows of a row band before advancing to
//! the next row band. Offsets produced here are deliberately unclamped:
//! an offset at or past `total[0]` is how the pager learns it is done, and
//! [`next_limit`] may in turn yield negative values for such windows. The
//! driving loop always consults [`has_next_page`] first, so those values are
//! never turned into a request.

/// Default page size requested per dimension.
pub const DEFAULT_LIMIT: i64 = 1000;

/// Offset of the page after the one described by `limit`/`offset`.
///
/// One dimension simply advances by the limit. Two dimensions stay in the
/// current row band while column windows remain, then wrap to column 0 of
/// the next row band.
pub fn next_offset(limit: &[i64], offset: &[i64], total: &[i64]) -> Vec<i64> {
    let next_rows_offset = offset[0] + limit[0];

    if total.len() == 1 {
        return vec![next_rows_offset];
    }

    if offset[1] + limit[1] < total[1] {
        // next columns of the same rows
        vec![offset[0], offset[1] + limit[1]]
    } else {
        // beginning of the next rows
        vec![next_rows_offset, 0]
    }
}

/// Limit to request for the page at `next_offset`.
///
/// Each dimension keeps its limit until the remainder is smaller; past the
/// end the remainder goes negative and is returned as-is. When a new row
/// band starts and the row limit is below the column total, the column limit
/// is pinned to the row limit so window sizes stay consistent across bands.
pub fn next_limit(limit: &[i64], next_offset: &[i64], total: &[i64]) -> Vec<i64> {
    let clamp = |limit: i64, next_offset: i64, total: i64| -> i64 {
        if next_offset + limit > total {
            total - next_offset
        } else {
            limit
        }
    };

    if total.len() == 2 && next_offset[1] == 0 && limit[0] < total[1] {
        return vec![clamp(limit[0], next_offset[0], total[0]), limit[0]];
    }

    (0..total.len())
        .map(|i| clamp(limit[i], next_offset[i], total[i]))
        .collect()
}

/// Whether a page at `next_offset` still exists. Row exhaustion is the sole
/// completion signal; leftover columns always come with a further row pass.
pub fn has_next_page(next_offset: &[i64], total: &[i64]) -> bool {
    next_offset[0] < total[0]
}

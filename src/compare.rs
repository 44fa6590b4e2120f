//! The rpmvercmp segment comparison algorithm
//!
//! Reimplements rpm's version ordering: strings are walked as alternating
//! runs of ASCII digits and letters, with `~` sorting below everything
//! (pre-release) and `^` sorting above end-of-string (post-release
//! snapshot). All other characters are segment separators.

use crate::evr::Evr;
use std::cmp::Ordering;

/// Compare two parsed EVRs using rpm's label ordering
///
/// Epoch dominates: EVRs with different epochs are ordered by epoch alone.
/// Versions are consulted only on an epoch tie, releases only on a version
/// tie.
pub fn compare_evr(a: &Evr, b: &Evr) -> Ordering {
    let epoch_cmp = a.epoch().cmp(&b.epoch());
    if epoch_cmp != Ordering::Equal {
        return epoch_cmp;
    }

    let version_cmp = rpmvercmp(a.version(), b.version());
    if version_cmp != Ordering::Equal {
        return version_cmp;
    }

    rpmvercmp(a.release(), b.release())
}

/// Compare two version (or release) strings segment by segment
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut left = a;
    let mut right = b;

    loop {
        left = left.trim_start_matches(is_separator);
        right = right.trim_start_matches(is_separator);

        // Tilde sorts lower than everything, including end-of-string
        match (left.strip_prefix('~'), right.strip_prefix('~')) {
            (Some(l), Some(r)) => {
                left = l;
                right = r;
                continue;
            }
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }

        // Caret sorts higher than end-of-string, lower than any segment
        match (left.strip_prefix('^'), right.strip_prefix('^')) {
            (Some(l), Some(r)) => {
                left = l;
                right = r;
                continue;
            }
            (Some(_), None) => {
                return if right.is_empty() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (None, Some(_)) => {
                return if left.is_empty() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (None, None) => {}
        }

        if left.is_empty() || right.is_empty() {
            break;
        }

        // Both sides have a segment; its type is set by the left side
        let numeric = left.starts_with(|c: char| c.is_ascii_digit());
        let (left_seg, left_rest) = take_run(left, numeric);
        let (right_seg, right_rest) = take_run(right, numeric);

        // Mismatched segment types at the same position: numeric wins
        if right_seg.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let seg_cmp = if numeric {
            compare_digit_runs(left_seg, right_seg)
        } else {
            left_seg.cmp(right_seg)
        };
        if seg_cmp != Ordering::Equal {
            return seg_cmp;
        }

        left = left_rest;
        right = right_rest;
    }

    // One side ran out of segments; the side with leftovers is newer
    left.len().cmp(&right.len())
}

/// Characters that only separate segments and never compare
fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~' && c != '^'
}

/// Split off the maximal leading digit or letter run
fn take_run(s: &str, numeric: bool) -> (&str, &str) {
    let end = s
        .find(|c: char| {
            if numeric {
                !c.is_ascii_digit()
            } else {
                !c.is_ascii_alphabetic()
            }
        })
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Numeric comparison of two digit runs without overflow
///
/// Leading zeros are insignificant; after stripping them, the longer run is
/// the larger number, and equal lengths fall back to a lexical tiebreak.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

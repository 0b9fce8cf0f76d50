//! Snapshot tests pinning slice and pad results for a fixed set of inputs.

use insta::assert_json_snapshot;
use serde::Serialize;

use strext::{pad_left, pad_right, slice};
use strext_rust as strext;

#[derive(Serialize)]
struct SliceRow<'a> {
    start: isize,
    end: Option<isize>,
    out: &'a str,
}

#[derive(Serialize)]
struct PadRow {
    target: usize,
    left: String,
    right: String,
}

#[test]
fn snapshot_slice_bounds() {
    let bounds = [
        (0, None),
        (-3, None),
        (1, Some(-1)),
        (-2, Some(99)),
        (3, Some(1)),
        (-99, Some(2)),
    ];
    let rows: Vec<SliceRow<'_>> = bounds
        .iter()
        .map(|&(start, end)| SliceRow {
            start,
            end,
            out: slice("hello", start, end),
        })
        .collect();

    assert_json_snapshot!(rows, @r#"
    [
      {
        "start": 0,
        "end": null,
        "out": "hello"
      },
      {
        "start": -3,
        "end": null,
        "out": "llo"
      },
      {
        "start": 1,
        "end": -1,
        "out": "ell"
      },
      {
        "start": -2,
        "end": 99,
        "out": "lo"
      },
      {
        "start": 3,
        "end": 1,
        "out": ""
      },
      {
        "start": -99,
        "end": 2,
        "out": "he"
      }
    ]
    "#);
}

#[test]
fn snapshot_pad_targets() {
    let rows: Vec<PadRow> = [0, 2, 3, 6]
        .into_iter()
        .map(|target| PadRow {
            target,
            left: pad_left("ab", "xyz", target),
            right: pad_right("ab", "xyz", target),
        })
        .collect();

    assert_json_snapshot!(rows, @r#"
    [
      {
        "target": 0,
        "left": "ab",
        "right": "ab"
      },
      {
        "target": 2,
        "left": "ab",
        "right": "ab"
      },
      {
        "target": 3,
        "left": "xab",
        "right": "abx"
      },
      {
        "target": 6,
        "left": "xyzxab",
        "right": "abxyzx"
      }
    ]
    "#);
}

use metroroute_lib::{Anchor, Error, LineTopology, Segment, SegmentRecord};

fn three_station_line() -> LineTopology {
    let mut line = LineTopology::new();
    line.insert(Anchor::Head, 1, 10, 10).expect("head insert");
    line.insert(Anchor::After(1), 2, 10, 10).expect("second insert");
    line.insert(Anchor::After(2), 3, 10, 10).expect("third insert");
    line
}

fn segment_after(line: &LineTopology, station: i64) -> Segment {
    line.segments()
        .find(|(anchor, _)| *anchor == Anchor::After(station))
        .map(|(_, segment)| *segment)
        .expect("segment exists")
}

#[test]
fn insert_at_head_prepends_station() {
    let mut line = three_station_line();
    line.insert(Anchor::Head, 4, 10, 10).expect("insert new head");

    assert_eq!(line.linearize(), vec![4, 1, 2, 3]);
}

#[test]
fn insert_between_relinks_successor() {
    let mut line = three_station_line();
    line.insert(Anchor::After(1), 4, 7, 3).expect("insert between");

    assert_eq!(line.linearize(), vec![1, 4, 2, 3]);

    // The displaced segment keeps its own weights; only its anchor moved.
    let displaced = segment_after(&line, 4);
    assert_eq!(displaced.to, 2);
    assert_eq!(displaced.distance, 10);
    assert_eq!(displaced.duration, 10);
}

#[test]
fn insert_at_tail_appends_station() {
    let mut line = three_station_line();
    line.insert(Anchor::After(3), 4, 10, 10).expect("insert at tail");

    assert_eq!(line.linearize(), vec![1, 2, 3, 4]);
}

#[test]
fn insert_duplicate_station_is_rejected() {
    let mut line = three_station_line();
    let error = line
        .insert(Anchor::After(1), 3, 10, 10)
        .expect_err("duplicate station");

    assert!(matches!(error, Error::InvalidTopology { .. }));
    assert_eq!(line.linearize(), vec![1, 2, 3], "topology unchanged");
}

#[test]
fn insert_with_unknown_anchor_is_rejected() {
    let mut line = three_station_line();
    let error = line
        .insert(Anchor::After(9), 4, 10, 10)
        .expect_err("missing anchor");

    assert!(format!("{error}").contains("anchor station 9"));
    assert_eq!(line.linearize(), vec![1, 2, 3], "topology unchanged");
}

#[test]
fn insert_zero_weight_is_rejected() {
    let mut line = three_station_line();

    let error = line.insert(Anchor::After(3), 4, 0, 10).expect_err("zero distance");
    assert!(matches!(error, Error::InvalidTopology { .. }));

    let error = line.insert(Anchor::After(3), 4, 10, 0).expect_err("zero duration");
    assert!(matches!(error, Error::InvalidTopology { .. }));
}

#[test]
fn remove_head_promotes_successor() {
    let mut line = three_station_line();
    line.remove(1).expect("remove head");

    assert_eq!(line.linearize(), vec![2, 3]);

    // The promoted segment sits in the head slot with its own weights.
    let (anchor, segment) = line.segments().next().expect("head segment");
    assert_eq!(anchor, Anchor::Head);
    assert_eq!(segment.to, 2);
    assert_eq!(segment.distance, 10);
}

#[test]
fn remove_interior_bridges_and_sums_weights() {
    let mut line = LineTopology::new();
    line.insert(Anchor::Head, 1, 10, 10).expect("head insert");
    line.insert(Anchor::After(1), 2, 3, 4).expect("second insert");
    line.insert(Anchor::After(2), 3, 5, 6).expect("third insert");

    line.remove(2).expect("remove interior");

    assert_eq!(line.linearize(), vec![1, 3]);
    let bridged = segment_after(&line, 1);
    assert_eq!(bridged.to, 3);
    assert_eq!(bridged.distance, 8);
    assert_eq!(bridged.duration, 10);
}

#[test]
fn remove_tail_drops_last_segment() {
    let mut line = three_station_line();
    line.remove(3).expect("remove tail");

    assert_eq!(line.linearize(), vec![1, 2]);
}

#[test]
fn remove_unknown_station_is_rejected() {
    let mut line = three_station_line();
    let error = line.remove(9).expect_err("unknown station");

    assert!(matches!(error, Error::StationNotFound { station: 9 }));
    assert_eq!(line.linearize(), vec![1, 2, 3], "topology unchanged");
}

#[test]
fn remove_only_station_empties_line() {
    let mut line = LineTopology::new();
    line.insert(Anchor::Head, 1, 10, 10).expect("head insert");

    line.remove(1).expect("remove only station");

    assert!(line.is_empty());
    assert_eq!(line.linearize(), Vec::<i64>::new());
}

#[test]
fn insert_then_remove_restores_chain() {
    let mut line = three_station_line();
    let before = line.clone();

    line.insert(Anchor::After(1), 4, 7, 3).expect("insert");
    line.remove(4).expect("remove inserted");

    assert_eq!(line, before);
}

#[test]
fn linearize_tracks_inserts_minus_removes() {
    let mut line = LineTopology::new();
    for (anchor, station) in [
        (Anchor::Head, 1),
        (Anchor::After(1), 2),
        (Anchor::After(2), 3),
        (Anchor::After(1), 4),
        (Anchor::Head, 5),
    ] {
        line.insert(anchor, station, 2, 2).expect("insert");
    }
    line.remove(4).expect("remove");
    line.remove(5).expect("remove");

    let stations = line.linearize();
    assert_eq!(stations, vec![1, 2, 3]);
    assert_eq!(stations.len(), line.len());
}

#[test]
fn from_segments_accepts_unordered_records() {
    let records = [
        SegmentRecord { prev: Some(2), station: 3, distance: 5, duration: 6 },
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(1), station: 2, distance: 3, duration: 4 },
    ];

    let line = LineTopology::from_segments(&records).expect("valid chain");
    assert_eq!(line.linearize(), vec![1, 2, 3]);
}

#[test]
fn from_segments_matches_insert_built_line() {
    let records = [
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(1), station: 2, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(2), station: 3, distance: 10, duration: 10 },
    ];

    let loaded = LineTopology::from_segments(&records).expect("valid chain");
    assert_eq!(loaded, three_station_line());
}

#[test]
fn from_segments_rejects_two_heads() {
    let records = [
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: None, station: 2, distance: 10, duration: 10 },
    ];

    let error = LineTopology::from_segments(&records).expect_err("two heads");
    assert!(format!("{error}").contains("head slot"));
}

#[test]
fn from_segments_rejects_branch() {
    let records = [
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(1), station: 2, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(1), station: 3, distance: 10, duration: 10 },
    ];

    let error = LineTopology::from_segments(&records).expect_err("branch");
    assert!(format!("{error}").contains("two segments depart from station 1"));
}

#[test]
fn from_segments_rejects_cycle() {
    let records = [
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(1), station: 2, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(2), station: 3, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(3), station: 2, distance: 10, duration: 10 },
    ];

    let error = LineTopology::from_segments(&records).expect_err("cycle");
    assert!(matches!(error, Error::InvalidTopology { .. }));
}

#[test]
fn from_segments_rejects_dangling_segment() {
    let records = [
        SegmentRecord { prev: None, station: 1, distance: 10, duration: 10 },
        SegmentRecord { prev: Some(5), station: 6, distance: 10, duration: 10 },
    ];

    let error = LineTopology::from_segments(&records).expect_err("dangling segment");
    assert!(format!("{error}").contains("reachable from the head"));
}

#[test]
fn from_segments_rejects_zero_weight() {
    let records = [SegmentRecord { prev: None, station: 1, distance: 0, duration: 10 }];

    let error = LineTopology::from_segments(&records).expect_err("zero weight");
    assert!(matches!(error, Error::InvalidTopology { .. }));
}

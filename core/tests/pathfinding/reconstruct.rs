use pargraph_core::{SearchError, reconstruct_path};
use rustc_hash::FxHashMap;

#[test]
fn test_reconstruct_walks_back_to_start() {
    let parent_map: FxHashMap<u32, u32> = [(4, 2), (2, 1), (3, 1)].into_iter().collect();

    let path = reconstruct_path(&parent_map, 4, 1).unwrap();

    assert_eq!(path, vec![4, 2, 1]);
}

#[test]
fn test_reconstruct_from_start_is_single_node() {
    let parent_map = FxHashMap::default();

    assert_eq!(reconstruct_path(&parent_map, 9, 9).unwrap(), vec![9]);
}

#[test]
fn test_reconstruct_detects_cycle() {
    // 5 -> 6 -> 7 -> 5 never reaches 1
    let parent_map: FxHashMap<u32, u32> = [(5, 6), (6, 7), (7, 5)].into_iter().collect();

    let error = reconstruct_path(&parent_map, 5, 1).unwrap_err();

    assert_eq!(error, SearchError::PredecessorCycle { node: 5 });
    assert!(error.to_string().contains("cycle"));
}

#[test]
fn test_reconstruct_reports_missing_link() {
    let parent_map: FxHashMap<u32, u32> = [(4, 3)].into_iter().collect();

    let error = reconstruct_path(&parent_map, 4, 1).unwrap_err();

    assert_eq!(error, SearchError::MissingPredecessor { node: 3, start: 1 });
}

//! Map behaviour over shared generated fixtures.

use wisp_map::{MultiMap, SetOnceMap};

#[test]
fn multimap_groups_repeated_fixture_keys() {
    let pairs = wisp_testkit::repeated_pairs(5, 3);
    let map: MultiMap<String, i64> = pairs.iter().cloned().collect();

    assert_eq!(map.len(), 5);
    assert_eq!(map.total_len(), 15);
    for (key, _) in &pairs {
        assert_eq!(map.get(key).map(<[i64]>::len), Some(3));
    }
}

#[test]
fn set_once_accepts_each_fixture_key_exactly_once() {
    let pairs = wisp_testkit::keyed_pairs(10);
    let mut map = SetOnceMap::new();
    for (key, value) in pairs.clone() {
        map.insert(key, value).unwrap();
    }
    assert_eq!(map.len(), 10);

    let (dup_key, _) = pairs[0].clone();
    let err = map.insert(dup_key.clone(), -1).unwrap_err();
    assert_eq!(err.key(), format!("{dup_key:?}"));
}

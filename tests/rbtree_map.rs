use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use osrb_tree::{OSRBTreeMap, Rank};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn init_logging() {
    // Every test tries; only the first call in the process succeeds.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn key_strategy() -> impl Strategy<Value = i64> {
    // Narrower than TEST_SIZE so inserts collide and erases hit.
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

type Discarded = Arc<Mutex<Vec<(i32, String)>>>;

/// Builds a map whose destructor records every discarded entry.
fn recording_map() -> (OSRBTreeMap<i32, String>, Discarded) {
    let discarded: Discarded = Arc::default();
    let sink = Arc::clone(&discarded);
    let map = OSRBTreeMap::new().with_destructor(move |k, v| sink.lock().unwrap().push((k, v)));
    (map, discarded)
}

fn taken(discarded: &Discarded) -> Vec<(i32, String)> {
    let mut entries = std::mem::take(&mut *discarded.lock().unwrap());
    entries.sort();
    entries
}

fn forward_keys<K: Copy, V, C>(map: &OSRBTreeMap<K, V, C>) -> Vec<K> {
    let mut keys = Vec::new();
    if let Some(mut cursor) = map.begin() {
        keys.push(*cursor.key());
        while cursor.move_next() {
            keys.push(*cursor.key());
        }
    }
    keys
}

fn backward_keys<K: Copy, V, C>(map: &OSRBTreeMap<K, V, C>) -> Vec<K> {
    let mut keys = Vec::new();
    if let Some(mut cursor) = map.end() {
        keys.push(*cursor.key());
        while cursor.move_prev() {
            keys.push(*cursor.key());
        }
    }
    keys
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Erase(i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    PopFirst,
    PopLast,
    OrderOfKey(i64),
    FindByOrder(usize),
    LowerBound(i64),
    UpperBound(i64),
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        2 => key_strategy().prop_map(MapOp::Erase),
        2 => key_strategy().prop_map(MapOp::Remove),
        1 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
        2 => key_strategy().prop_map(MapOp::OrderOfKey),
        2 => (0usize..TEST_SIZE).prop_map(MapOp::FindByOrder),
        2 => key_strategy().prop_map(MapOp::LowerBound),
        2 => key_strategy().prop_map(MapOp::UpperBound),
    ]
}

// ─── Core operations against a model ─────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OSRBTreeMap and
    /// BTreeMap and asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut os_map: OSRBTreeMap<i64, i64> = OSRBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(os_map.insert(*k, *v), bt_map.insert(*k, *v), "insert({}, {})", k, v);
                }
                MapOp::Erase(k) => {
                    prop_assert_eq!(os_map.erase(k), bt_map.remove(k).is_some(), "erase({})", k);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(os_map.remove(k), bt_map.remove(k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(os_map.get(k), bt_map.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(os_map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(os_map.pop_first(), bt_map.pop_first(), "pop_first");
                }
                MapOp::PopLast => {
                    prop_assert_eq!(os_map.pop_last(), bt_map.pop_last(), "pop_last");
                }
                MapOp::OrderOfKey(k) => {
                    prop_assert_eq!(os_map.order_of_key(k), bt_map.range(..*k).count(), "order_of_key({})", k);
                }
                MapOp::FindByOrder(order) => {
                    let os_result = os_map.find_by_order(*order).map(|c| c.key_value());
                    prop_assert_eq!(os_result, bt_map.iter().nth(*order), "find_by_order({})", order);
                }
                MapOp::LowerBound(k) => {
                    let os_result = os_map.lower_bound(k).map(|c| c.key_value());
                    prop_assert_eq!(os_result, bt_map.range(*k..).next(), "lower_bound({})", k);
                }
                MapOp::UpperBound(k) => {
                    let os_result = os_map.upper_bound(k).map(|c| c.key_value());
                    prop_assert_eq!(os_result, bt_map.range(..=*k).next_back(), "upper_bound({})", k);
                }
            }
            prop_assert_eq!(os_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(os_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
        }

        prop_assert!(os_map.iter().eq(bt_map.iter()));
    }

    /// Iterators and cursor walks agree with BTreeMap in both directions.
    #[test]
    fn traversal_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let os_map: OSRBTreeMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        prop_assert_eq!(os_map.iter().len(), bt_map.len());
        prop_assert!(os_map.iter().eq(bt_map.iter()));
        prop_assert!(os_map.iter().rev().eq(bt_map.iter().rev()));
        prop_assert!(os_map.keys().eq(bt_map.keys()));
        prop_assert!(os_map.values().rev().eq(bt_map.values().rev()));

        let expected: Vec<i64> = bt_map.keys().copied().collect();
        prop_assert_eq!(forward_keys(&os_map), expected.clone());
        let mut reversed = expected;
        reversed.reverse();
        prop_assert_eq!(backward_keys(&os_map), reversed);
    }

    /// Alternating `next` and `next_back` meets in the middle without
    /// yielding anything twice.
    #[test]
    fn iter_double_ended_meets_once(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let os_map: OSRBTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut model_iter = entries.iter().map(|(k, _)| *k).collect::<BTreeSet<_>>().into_iter();
        let mut os_iter = os_map.iter();

        let mut from_front = true;
        loop {
            let (os_next, model_next) = if from_front {
                (os_iter.next(), model_iter.next())
            } else {
                (os_iter.next_back(), model_iter.next_back())
            };
            prop_assert_eq!(os_next.map(|(k, _)| *k), model_next);
            prop_assert_eq!(os_iter.len(), model_iter.len());
            if model_next.is_none() {
                break;
            }
            from_front = !from_front;
        }
        prop_assert!(os_iter.next().is_none());
    }
}

// ─── Order statistics ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Every rank query agrees with a sorted vector of the entries.
    #[test]
    fn ranks_match_sorted_vec(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let os_map: OSRBTreeMap<i64, i64> = entries.iter().copied().collect();
        let sorted: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();

        for (rank, (k, v)) in sorted.iter().enumerate() {
            prop_assert_eq!(os_map.order_of_key(k), rank);
            prop_assert_eq!(os_map.rank_of(k), Some(rank));
            prop_assert_eq!(os_map.get_by_order(rank), Some((k, v)));
            prop_assert_eq!(os_map[Rank(rank)], *v);

            let cursor = os_map.find_by_order(rank).unwrap();
            prop_assert_eq!(cursor.key_value(), (k, v));
            prop_assert_eq!(cursor.rank(), rank);
        }
        prop_assert!(os_map.find_by_order(sorted.len()).is_none());
        prop_assert!(os_map.get_by_order(sorted.len()).is_none());
    }

    /// `rank_of` only answers for stored keys while `order_of_key` answers
    /// for any key.
    #[test]
    fn order_of_absent_keys(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE),
        probes in proptest::collection::vec(key_strategy(), 100),
    ) {
        let os_map: OSRBTreeMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for probe in &probes {
            prop_assert_eq!(os_map.order_of_key(probe), bt_map.range(..*probe).count());
            let expected = bt_map.contains_key(probe).then(|| bt_map.range(..*probe).count());
            prop_assert_eq!(os_map.rank_of(probe), expected);
        }
    }

    /// Ranks stay exact while entries are erased in a different random order
    /// than they were inserted, down to an empty map.
    #[test]
    fn permutation_insert_then_erase(
        (inserts, erases) in Just((1..=200).collect::<Vec<i32>>()).prop_shuffle()
            .prop_flat_map(|inserts| (Just(inserts.clone()), Just(inserts).prop_shuffle()))
    ) {
        init_logging();
        let mut map = OSRBTreeMap::new();
        for (i, &key) in inserts.iter().enumerate() {
            prop_assert_eq!(map.insert(key, key * 10), None);
            prop_assert_eq!(map.len(), i + 1);
        }
        prop_assert_eq!(forward_keys(&map), (1..=200).collect::<Vec<_>>());

        let mut remaining: Vec<i32> = (1..=200).collect();
        for &key in &erases {
            prop_assert!(map.erase(&key));
            remaining.retain(|&k| k != key);

            prop_assert_eq!(map.len(), remaining.len());
            if let Some(&probe) = remaining.get(remaining.len() / 2) {
                prop_assert_eq!(map.order_of_key(&probe), remaining.len() / 2);
                prop_assert_eq!(map.find_by_order(remaining.len() / 2).map(|c| *c.key()), Some(probe));
            }
        }
        prop_assert!(map.is_empty());
        prop_assert!(map.begin().is_none());
        prop_assert!(map.end().is_none());
    }

    /// `get_by_order_mut` and `IndexMut<Rank>` write to the selected entry.
    #[test]
    fn mutation_by_rank(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let mut os_map: OSRBTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (rank, (k, v)) in bt_map.iter_mut().enumerate() {
            let (os_k, os_v) = os_map.get_by_order_mut(rank).unwrap();
            prop_assert_eq!(os_k, k);
            *os_v = os_v.wrapping_add(1);
            os_map[Rank(rank)] = os_map[Rank(rank)].wrapping_mul(2);
            *v = v.wrapping_add(1).wrapping_mul(2);
        }
        prop_assert!(os_map.iter().eq(bt_map.iter()));
    }
}

// ─── Worked scenarios ────────────────────────────────────────────────────────

#[test]
fn small_tree_ranks_and_selects() {
    let mut map = OSRBTreeMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(key, ());
    }

    assert_eq!(map.order_of_key(&7), 4);
    assert_eq!(map.find_by_order(0).map(|c| *c.key()), Some(1));
    assert_eq!(map.find_by_order(6).map(|c| *c.key()), Some(9));
    assert!(map.find_by_order(7).is_none());
}

#[test]
fn sequential_inserts_keep_ranks_exact() {
    let map: OSRBTreeMap<u32, u32> = (1..=1000).map(|k| (k, k * k)).collect();

    assert_eq!(map.len(), 1000);
    for k in [1, 2, 500, 999, 1000] {
        assert_eq!(map.order_of_key(&k), (k - 1) as usize);
        assert_eq!(map[Rank((k - 1) as usize)], k * k);
    }
    assert_eq!(map.first_key_value(), Some((&1, &1)));
    assert_eq!(map.last_key_value(), Some((&1000, &1_000_000)));
}

#[test]
fn erasing_inner_node_keeps_order() {
    let mut map: OSRBTreeMap<i32, &str> = [(50, "a"), (30, "b"), (70, "c"), (20, "d"), (40, "e"), (60, "f"), (80, "g")]
        .into_iter()
        .collect();

    // 50 is the root here and has two children.
    assert!(map.erase(&50));
    assert_eq!(forward_keys(&map), [20, 30, 40, 60, 70, 80]);
    assert_eq!(map.get(&60), Some(&"f"));
    assert_eq!(map.find(&40).and_then(|c| c.peek_next()), Some((&60, &"f")));

    assert!(map.erase(&30));
    assert_eq!(forward_keys(&map), [20, 40, 60, 70, 80]);
    assert_eq!(backward_keys(&map), [80, 70, 60, 40, 20]);
}

// ─── Bounds and cursors ──────────────────────────────────────────────────────

#[test]
fn bounds_at_edges() {
    let map = OSRBTreeMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    let key = |c: Option<osrb_tree::Cursor<'_, i32, char>>| c.map(|c| *c.key());

    assert_eq!(key(map.lower_bound(&i32::MIN)), Some(10));
    assert_eq!(key(map.lower_bound(&30)), Some(30));
    assert_eq!(key(map.lower_bound(&31)), None);

    assert_eq!(key(map.upper_bound(&9)), None);
    assert_eq!(key(map.upper_bound(&10)), Some(10));
    assert_eq!(key(map.upper_bound(&25)), Some(20));
    assert_eq!(key(map.upper_bound(&i32::MAX)), Some(30));

    let empty: OSRBTreeMap<i32, char> = OSRBTreeMap::new();
    assert!(empty.lower_bound(&0).is_none());
    assert!(empty.upper_bound(&0).is_none());
    assert!(empty.find(&0).is_none());
}

#[test]
fn cursor_steps_from_a_bound() {
    let map = OSRBTreeMap::from([(1, "a"), (3, "c"), (5, "e")]);

    let mut cursor = map.lower_bound(&2).unwrap();
    assert_eq!(cursor.key_value(), (&3, &"c"));
    assert!(cursor.move_prev());
    assert_eq!(*cursor.key(), 1);
    assert!(!cursor.move_prev());
    assert_eq!(*cursor.key(), 1);

    let mut cursor = map.upper_bound(&4).unwrap();
    assert_eq!(*cursor.value(), "c");
    assert!(cursor.move_next());
    assert_eq!(*cursor.value(), "e");
    assert!(!cursor.move_next());
    assert_eq!(cursor.rank(), 2);
}

#[test]
fn empty_map_has_no_cursors() {
    let map: OSRBTreeMap<u8, u8> = OSRBTreeMap::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.begin().is_none());
    assert!(map.end().is_none());
    assert!(map.find_by_order(0).is_none());
    assert_eq!(map.order_of_key(&42), 0);
    assert_eq!(map.iter().next(), None);
}

// ─── Duplicate keys and comparators ──────────────────────────────────────────

#[test]
fn duplicate_insert_replaces_value_and_keeps_key() {
    init_logging();
    let case_insensitive = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
    let mut map = OSRBTreeMap::with_comparator(case_insensitive);

    assert_eq!(map.insert("Apple".to_string(), 1), None);
    assert_eq!(map.insert("banana".to_string(), 2), None);
    assert_eq!(map.insert("APPLE".to_string(), 3), Some(1));

    assert_eq!(map.len(), 2);
    let (key, value) = map.get_key_value(&"apple".to_string()).unwrap();
    assert_eq!((key.as_str(), *value), ("Apple", 3));
    assert_eq!(map.order_of_key(&"BANANA".to_string()), 1);
}

#[test]
fn reverse_comparator_reverses_everything() {
    let mut map = OSRBTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    map.extend([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);

    assert_eq!(forward_keys(&map), [4, 3, 2, 1]);
    assert_eq!(map.order_of_key(&3), 1);
    assert_eq!(map.find_by_order(0).map(|c| *c.key()), Some(4));
    // "Smallest" and "largest" follow the comparator.
    assert_eq!(map.lower_bound(&0).map(|c| *c.key()), None);
    assert_eq!(map.lower_bound(&5).map(|c| *c.key()), Some(4));
    assert_eq!(map.upper_bound(&5).map(|c| *c.key()), None);
    assert_eq!(map.upper_bound(&0).map(|c| *c.key()), Some(1));
}

// ─── Discarded entries ───────────────────────────────────────────────────────

#[test]
fn erase_hands_entry_to_destructor() {
    init_logging();
    let (mut map, discarded) = recording_map();
    map.insert(1, "one".to_string());
    map.insert(2, "two".to_string());

    assert!(map.erase(&1));
    assert!(!map.erase(&1));
    assert_eq!(taken(&discarded), [(1, "one".to_string())]);
    assert_eq!(map.len(), 1);
}

#[test]
fn erase_hands_over_the_erased_pair_at_every_position() {
    init_logging();
    for len in [7, 50, 300] {
        for target in 0..len {
            let discarded = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&discarded);
            let mut map = OSRBTreeMap::new().with_destructor(move |k: i32, v: i32| sink.lock().unwrap().push((k, v)));
            map.extend((0..len).map(|k| (k, k * 3)));

            assert!(map.erase(&target));
            assert_eq!(*discarded.lock().unwrap(), [(target, target * 3)]);

            let remaining: Vec<i32> = (0..len).filter(|&k| k != target).collect();
            assert_eq!(map.len(), remaining.len());
            for (rank, &key) in remaining.iter().enumerate() {
                assert_eq!(map.order_of_key(&key), rank);
                assert_eq!(map.find_by_order(rank).map(|c| c.key_value()), Some((&key, &(key * 3))));
            }
        }
    }
}

#[test]
fn clear_and_drop_hand_every_entry_to_destructor() {
    init_logging();
    let (mut map, discarded) = recording_map();
    for k in 0..5 {
        map.insert(k, k.to_string());
    }

    map.clear();
    assert!(map.is_empty());
    assert_eq!(taken(&discarded), (0..5).map(|k| (k, k.to_string())).collect::<Vec<_>>());

    // The map stays usable after clear.
    map.insert(9, "nine".to_string());
    map.insert(8, "eight".to_string());
    assert_eq!(map.len(), 2);
    drop(map);
    assert_eq!(taken(&discarded), [(8, "eight".to_string()), (9, "nine".to_string())]);
}

#[test]
fn returned_entries_skip_destructor() {
    let (mut map, discarded) = recording_map();
    for k in 0..6 {
        map.insert(k, k.to_string());
    }

    assert_eq!(map.insert(0, "zero".to_string()), Some("0".to_string()));
    assert_eq!(map.remove(&1), Some("1".to_string()));
    assert_eq!(map.remove_entry(&2), Some((2, "2".to_string())));
    assert_eq!(map.pop_first(), Some((0, "zero".to_string())));
    assert_eq!(map.pop_last(), Some((5, "5".to_string())));
    assert!(taken(&discarded).is_empty());

    drop(map);
    assert_eq!(taken(&discarded), [(3, "3".to_string()), (4, "4".to_string())]);
}

#[test]
fn empty_map_never_calls_destructor() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut map = OSRBTreeMap::new().with_destructor(move |_: u8, _: u8| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    map.clear();
    assert!(!map.erase(&1));
    drop(map);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn later_destructor_replaces_earlier() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let (a, b) = (Arc::clone(&first), Arc::clone(&second));

    let mut map = OSRBTreeMap::new()
        .with_destructor(move |_: i32, _: i32| {
            a.fetch_add(1, Ordering::SeqCst);
        })
        .with_destructor(move |_: i32, _: i32| {
            b.fetch_add(1, Ordering::SeqCst);
        });
    map.extend([(1, 1), (2, 2), (3, 3)]);
    drop(map);

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 3);
}

#[test]
fn maps_without_destructor_drop_their_entries() {
    let tracker = Arc::new(());
    let mut map = OSRBTreeMap::new();
    for k in 0..10 {
        map.insert(k, Arc::clone(&tracker));
    }
    assert_eq!(Arc::strong_count(&tracker), 11);

    assert!(map.erase(&0));
    assert_eq!(Arc::strong_count(&tracker), 10);
    map.clear();
    assert_eq!(Arc::strong_count(&tracker), 1);
}

#[test]
fn map_with_destructor_moves_across_threads() {
    let (mut map, discarded) = recording_map();
    map.insert(1, "one".to_string());

    std::thread::spawn(move || {
        map.insert(2, "two".to_string());
        map.erase(&2);
    })
    .join()
    .unwrap();

    assert_eq!(taken(&discarded), [(1, "one".to_string()), (2, "two".to_string())]);
}

// ─── Traits, capacity and panics ─────────────────────────────────────────────

#[test]
fn capacity_reuses_freed_slots() {
    let mut map: OSRBTreeMap<u32, u32> = OSRBTreeMap::with_capacity(16);
    assert!(map.capacity() >= 16);

    map.extend((0..16).map(|k| (k, k)));
    let capacity = map.capacity();
    for k in 0..8 {
        map.erase(&k);
    }
    map.extend((100..108).map(|k| (k, k)));
    assert_eq!(map.capacity(), capacity);
    assert_eq!(map.len(), 16);

    let reversed: OSRBTreeMap<u32, (), _> = OSRBTreeMap::with_comparator_and_capacity(|a: &u32, b: &u32| b.cmp(a), 4);
    assert!(reversed.capacity() >= 4);
    assert!(reversed.is_empty());
}

#[test]
fn debug_and_equality() {
    let a = OSRBTreeMap::from([(2, "b"), (1, "a")]);
    let b: OSRBTreeMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
    let c = OSRBTreeMap::from([(1, "a"), (2, "z")]);

    assert_eq!(format!("{a:?}"), r#"{1: "a", 2: "b"}"#);
    assert_eq!(format!("{:?}", a.keys()), "[1, 2]");
    assert_eq!(format!("{:?}", a.values()), r#"["a", "b"]"#);
    assert!(a == b);
    assert!(a != c);
    assert_eq!((&a).into_iter().count(), 2);
}

#[test]
fn index_by_key_and_get_mut() {
    let mut map = OSRBTreeMap::from([("x", 1), ("y", 2)]);
    *map.get_mut(&"x").unwrap() += 10;
    assert_eq!(map[&"x"], 11);
    assert!(map.get_mut(&"z").is_none());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_rank_out_of_bounds() {
    let map = OSRBTreeMap::from([(1, 1)]);
    let _ = map[Rank(1)];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_mut_rank_out_of_bounds() {
    let mut map: OSRBTreeMap<i32, i32> = OSRBTreeMap::new();
    map[Rank(0)] = 1;
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key() {
    let map = OSRBTreeMap::from([(1, 1)]);
    let _ = map[&2];
}

use classic_algorithms::data_structures::DisjointSet;
use classic_algorithms::AlgorithmError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Label-relabelling partition used as the reference model.
fn naive_union(labels: &mut [usize], a: usize, b: usize) {
    let (from, to) = (labels[b], labels[a]);
    for label in labels.iter_mut() {
        if *label == from {
            *label = to;
        }
    }
}

#[test]
fn worked_example() {
    let mut u = DisjointSet::new([1, 2, 3, 4, 5]);
    u.union(&1, &3).unwrap();
    u.union(&2, &4).unwrap();

    assert!(u.in_same_set(&1, &3).unwrap());
    assert!(u.in_same_set(&4, &2).unwrap());
    assert!(!u.in_same_set(&2, &5).unwrap());
    assert!(!u.in_same_set(&2, &1).unwrap());
    assert!(!u.in_same_set(&1, &4).unwrap());

    u.union(&5, &1).unwrap();
    assert!(u.in_same_set(&3, &5).unwrap());
}

#[test]
fn random_unions_match_reference_partition() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let n = 64;
    let mut sets = DisjointSet::new(0..n);
    let mut labels: Vec<usize> = (0..n).collect();

    for _ in 0..200 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        sets.union(&a, &b).unwrap();
        naive_union(&mut labels, a, b);
        assert!(sets.in_same_set(&a, &b).unwrap());
    }

    let mut distinct = labels.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(sets.set_count(), distinct.len());

    for x in 0..n {
        for y in 0..n {
            assert_eq!(sets.in_same_set(&x, &y).unwrap(), labels[x] == labels[y], "{x} vs {y}");
        }
    }
}

#[test]
fn same_set_is_an_equivalence_relation() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 24;
    let mut sets = DisjointSet::new(0..n);
    for _ in 0..18 {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        sets.union(&a, &b).unwrap();
    }
    for x in 0..n {
        assert!(sets.in_same_set(&x, &x).unwrap());
        for y in 0..n {
            let xy = sets.in_same_set(&x, &y).unwrap();
            assert_eq!(xy, sets.in_same_set(&y, &x).unwrap());
            for z in 0..n {
                if xy && sets.in_same_set(&y, &z).unwrap() {
                    assert!(sets.in_same_set(&x, &z).unwrap());
                }
            }
        }
    }
}

#[test]
fn compression_never_changes_the_partition() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 40;
    let mut sets = DisjointSet::new(0..n);
    for _ in 0..30 {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        sets.union(&a, &b).unwrap();
    }
    let uncompressed = sets.clone();
    for x in 0..n {
        for y in 0..n {
            let before = uncompressed.peek_root(&x).unwrap() == uncompressed.peek_root(&y).unwrap();
            assert_eq!(sets.in_same_set(&x, &y).unwrap(), before);
        }
    }
}

#[test]
fn mixed_element_kinds_through_strings() {
    let mut u = DisjointSet::new(["1".to_string(), "2".to_string()]);
    u.add(["a".to_string(), "b".to_string()]);
    assert!(u.contains(&"1".to_string()));
    assert!(u.contains(&"a".to_string()));
    assert_eq!(u.find(&"zz".to_string()), Err(AlgorithmError::NotFound));
}

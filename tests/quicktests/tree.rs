use avl::tree::Tree;
use avl::Error;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset, checking the AVL invariant after each
/// one. This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut HashSet<K>) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => tree.remove(k) == set.remove(k),
        };
        if !agrees || !tree.is_valid() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn stays_valid_through_any_operations(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.len() == set.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let keys: Vec<_> = tree.iter().collect();
    let mut expected: Vec<_> = set.iter().collect();
    expected.sort();

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys == expected
}

#[quickcheck]
fn duplicate_insert_is_a_no_op(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = format!("{tree:?}");

    let inserted = tree.insert(xs[pick % xs.len()]);

    TestResult::from_bool(!inserted && format!("{tree:?}") == before)
}

#[quickcheck]
fn insert_then_remove_restores_keys(xs: Vec<i8>, x: i8) -> TestResult {
    let mut tree: Tree<_> = xs.into_iter().collect();
    if tree.search(&x) {
        return TestResult::discard();
    }
    let before: Vec<_> = tree.iter().copied().collect();

    tree.insert(x);
    tree.remove(&x);

    TestResult::from_bool(tree.is_valid() && tree.iter().copied().eq(before))
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let bound = 1.44 * ((tree.len() + 2) as f64).log2();

    tree.height() as f64 <= bound
}

#[quickcheck]
fn sorted_inserts_stay_logarithmic(n: u16) -> bool {
    let tree: Tree<_> = (0..u32::from(n % 2048)).collect();
    let bound = 1.44 * ((tree.len() + 2) as f64).log2();

    tree.is_valid() && tree.height() as f64 <= bound
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.is_valid()
}

#[quickcheck]
fn lca_is_a_shared_ancestor(xs: Vec<i8>, a: usize, b: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let (a, b) = (xs[a % xs.len()], xs[b % xs.len()]);

    let Some(&lca) = tree.find_lca(&a, &b) else {
        return TestResult::failed();
    };
    let (low, high) = (a.min(b), a.max(b));
    let to_lca = tree.distance_from_root(&lca);

    TestResult::from_bool(
        (low..=high).contains(&lca)
            && to_lca <= tree.distance_from_root(&a)
            && to_lca <= tree.distance_from_root(&b),
    )
}

#[quickcheck]
fn distance_is_symmetric(xs: Vec<i8>, a: usize, b: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let (a, b) = (xs[a % xs.len()], xs[b % xs.len()]);

    TestResult::from_bool(
        tree.find_distance(&a, &b) == tree.find_distance(&b, &a)
            && tree.find_distance(&a, &a) == Some(0)
            && tree.find_distance(&a, &b).is_some(),
    )
}

fn sample() -> Tree<i32> {
    [20, 10, 30, 5, 15, 25, 35].into_iter().collect()
}

#[test]
fn lca_of_sample_tree() {
    let tree = sample();

    assert_eq!(tree.find_lca(&5, &15), Some(&10));
    assert_eq!(tree.find_lca(&5, &35), Some(&20));
}

#[test]
fn distance_in_sample_tree() {
    let tree = sample();

    assert_eq!(tree.find_distance(&5, &15), Some(2));
    assert_eq!(tree.find_distance(&5, &35), Some(4));
}

#[test]
fn empty_tree() {
    let mut tree = Tree::<i32>::new();

    assert!(tree.is_empty());
    assert!(tree.is_valid());
    assert!(!tree.search(&0));
    assert!(!tree.remove(&0));
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.in_order(), Err(Error::Empty));
    assert_eq!(tree.level_order(), Err(Error::Empty));
    assert_eq!(tree.find_lca(&0, &0), None);
    assert_eq!(tree.find_distance(&0, &0), None);
    assert_eq!(Error::Empty.to_string(), "tree is empty");
}

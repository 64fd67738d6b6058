use ordered_tree::OrderedTree;

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

fn build(xs: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
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

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn counts_add_up(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut model: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        assert_eq!(tree.remove(delete), model.remove(delete));
    }

    tree.len() == model.len() && tree.leaf_count() + tree.internal_count() == model.len()
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<i8> = tree.pre_order().into_iter().copied().collect();

    let rejected = xs.iter().all(|x| !tree.insert(*x));
    let after: Vec<i8> = tree.pre_order().into_iter().copied().collect();

    rejected && before == after
}

#[quickcheck]
fn same_insertions_are_identical(xs: Vec<i8>) -> bool {
    build(&xs).is_identical_to(&build(&xs))
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted = tree.in_order();

    [tree.pre_order(), tree.post_order(), tree.breadth_first()]
        .iter()
        .all(|values| {
            let mut values = values.clone();
            values.sort();
            values == sorted
        })
}

#[quickcheck]
fn level_and_parent_agree(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| match tree.parent_of(x).value() {
        Some(parent) => tree.level_of(parent).map(|level| level + 1) == tree.level_of(x),
        None => tree.level_of(x) == Some(0),
    })
}

use std::collections::BTreeMap;

use bst_index::Bst;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// An enum for the various kinds of "things" to do to the index in a
/// quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K, V> {
    /// Insert the K, V into the index, failing on duplicates
    Insert(K, V),
    /// Overwrite or insert the K, V
    Set(K, V),
    /// Delete the K from the index
    Delete(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Set(K::arbitrary(g), V::arbitrary(g)),
            _ => Op::Delete(K::arbitrary(g)),
        }
    }
}

/// Applies a set of operations to the index and to a BTreeMap, as
/// reference, and returns false as soon as the two disagree.
fn do_ops(ops: &[Op<i8, i8>], bst: &mut Bst<i8, i8>, map: &mut BTreeMap<i8, i8>) -> bool {
    for op in ops {
        let ok = match *op {
            Op::Insert(k, v) => {
                let res = bst.insert(k, v).is_ok();
                let refres = !map.contains_key(&k);
                if refres {
                    map.insert(k, v);
                }
                res == refres
            }
            Op::Set(k, v) => bst.set(k, v) == map.insert(k, v),
            Op::Delete(k) => bst.delete(&k).ok() == map.remove(&k),
        };
        if !ok || bst.len() != map.len() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut bst = Bst::new("quick");
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut bst, &mut map)
        && bst.validate().is_ok()
        && bst.iter().map(|(k, v)| (*k, *v)).eq(map.into_iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut bst = Bst::new("quick");
    for x in &xs {
        bst.set(*x, *x);
    }

    xs.iter().all(|x| bst.get(x) == Some(*x))
}

#[quickcheck]
fn deleted_not_found(xs: Vec<i8>, dels: Vec<i8>) -> bool {
    let mut bst = Bst::new("quick");
    for x in &xs {
        bst.set(*x, ());
    }
    for d in &dels {
        let before = bst.len();
        let present = bst.contains_key(d);
        let _ = bst.delete(d);
        let expect = if present { before - 1 } else { before };
        if bst.len() != expect || bst.search(d).is_some() {
            return false;
        }
    }
    bst.validate().is_ok()
}

#[quickcheck]
fn successor_walk_is_sorted(xs: Vec<i16>) -> bool {
    let mut bst = Bst::new("quick");
    for x in &xs {
        bst.set(*x, ());
    }
    let mut expected: Vec<i16> = xs.clone();
    expected.sort();
    expected.dedup();

    let mut walked = vec![];
    let mut at = bst.min().ok();
    while let Some(id) = at {
        walked.push(*bst.node(id).unwrap().key());
        at = bst.successor(id).unwrap();
    }

    let mut back = vec![];
    let mut at = bst.max().ok();
    while let Some(id) = at {
        back.push(*bst.node(id).unwrap().key());
        at = bst.predecessor(id).unwrap();
    }
    back.reverse();

    walked == expected && back == expected
}

#[quickcheck]
fn recursive_search_agrees(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let mut bst = Bst::new("quick");
    for x in &xs {
        bst.set(*x, ());
    }
    probes
        .iter()
        .chain(xs.iter())
        .all(|p| bst.search(p) == bst.search_recursive(p))
}

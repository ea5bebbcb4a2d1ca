use crate::{CaseMode, TrieSet};

use std::collections::BTreeSet;
use std::io;
use std::ops::Neg;
use std::panic;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy)]
enum Action {
    Add,
    AddExisting,
    QueryExisting,
    QueryNonexistent,
    Iter,
    PrefixQuery,
    RemoveExisting,
    RemoveNonexistent,
}

struct Simulation<R: Rng> {
    model: BTreeSet<String>,
    trie: TrieSet,

    rng: R,
}

impl<R: Rng> Simulation<R> {
    fn new(rng: R) -> Self {
        Self {
            model: BTreeSet::new(),
            trie: TrieSet::new(CaseMode::Upper),
            rng,
        }
    }

    fn sample(&mut self) -> Action {
        use Action::*;

        // Let the probability of adding a new key be e^{-keys.len() / 8}
        let pr_add = (self.model.len() as f64 / 8.).neg().exp();
        if self.rng.gen::<f64>() < pr_add || self.model.is_empty() {
            Add
        } else {
            let choices = &[
                AddExisting,
                QueryExisting,
                QueryNonexistent,
                Iter,
                PrefixQuery,
                RemoveExisting,
                RemoveNonexistent,
            ];
            *choices.choose(&mut self.rng).unwrap()
        }
    }

    fn step(&mut self) {
        use Action::*;
        let r = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            match self.sample() {
                Add => {
                    let key = self.nonexistent_key();
                    assert!(self.model.insert(key.clone()));
                    self.trie.add(&key).unwrap();
                    assert!(self.trie.contains(&key).unwrap());
                }
                AddExisting => {
                    let key = self.sample_key();
                    self.trie.add(&key).unwrap();
                }
                QueryExisting => {
                    let key = self.sample_key();
                    assert!(self.trie.contains(&key).unwrap());
                }
                QueryNonexistent => {
                    let key = self.nonexistent_key();
                    assert!(!self.trie.contains(&key).unwrap());
                }
                Iter => {
                    assert!(self.trie.iter().eq(self.model.iter().cloned()));
                }
                PrefixQuery => {
                    let prefix = self.sample_prefix();
                    let expected = self
                        .model
                        .iter()
                        .filter(|k| k.starts_with(&prefix))
                        .cloned()
                        .collect::<Vec<_>>();
                    let got = self
                        .trie
                        .keys_with_prefix(&prefix)
                        .unwrap()
                        .collect::<Vec<_>>();
                    assert_eq!(got, expected);
                }
                RemoveExisting => {
                    let key = self.sample_key();
                    assert!(self.model.remove(&key));
                    self.trie.remove(&key).unwrap();
                    assert!(!self.trie.contains(&key).unwrap());
                }
                RemoveNonexistent => {
                    let key = self.nonexistent_key();
                    self.trie.remove(&key).unwrap();
                }
            }
            assert_eq!(self.trie.len(), self.model.len());
            assert_eq!(self.trie.is_empty(), self.model.is_empty());
        }));
        if let Err(e) = r {
            self.trie.debug(&mut io::stderr().lock()).unwrap();
            panic!("{:?}", e);
        }
    }

    fn sample_key(&mut self) -> String {
        self.model.iter().choose(&mut self.rng).unwrap().clone()
    }

    fn sample_prefix(&mut self) -> String {
        let key = self.sample_key();
        let cut = self.rng.gen_range(0, key.len() + 1);
        key[..cut].to_string()
    }

    fn nonexistent_key(&mut self) -> String {
        loop {
            // A tiny alphabet and short keys force shared prefixes.
            let key_length = self.rng.gen_range(1, 8);
            let key = (0..key_length)
                .map(|_| (b'A' + self.rng.gen_range(0u8, 4)) as char)
                .collect::<String>();

            if self.model.contains(&key) {
                continue;
            }
            return key;
        }
    }
}

#[test]
fn test_simulation() {
    for i in 0..200 {
        let seed = rand::thread_rng().gen();

        if i % 100 == 0 {
            eprintln!("Using seed {:?}", seed);
        }
        let mut s = Simulation::new(StdRng::from_seed(seed));
        for _ in 0..300 {
            s.step();
        }
    }
}

/// Squash an arbitrary string onto the uppercase alphabet.
fn letters(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn build(keys: &[String]) -> (TrieSet, BTreeSet<String>) {
    let mut trie = TrieSet::new(CaseMode::Upper);
    let mut model = BTreeSet::new();
    for raw in keys {
        let key = letters(raw);
        trie.add(&key).unwrap();
        if !key.is_empty() {
            model.insert(key);
        }
    }
    (trie, model)
}

#[quickcheck]
fn qc_add_then_contains(keys: Vec<String>) -> bool {
    let (trie, model) = build(&keys);
    model.iter().all(|k| trie.contains(k).unwrap())
}

#[quickcheck]
fn qc_iter_matches_model(keys: Vec<String>) -> bool {
    let (trie, model) = build(&keys);
    trie.len() == model.len() && trie.iter().eq(model.iter().cloned())
}

#[quickcheck]
fn qc_add_idempotent(keys: Vec<String>) -> bool {
    let (mut trie, model) = build(&keys);
    for k in &model {
        trie.add(k).unwrap();
    }
    trie.len() == model.len()
}

#[quickcheck]
fn qc_remove_restores_len(keys: Vec<String>, pick: usize) -> TestResult {
    let (mut trie, model) = build(&keys);
    if model.is_empty() {
        return TestResult::discard();
    }
    let victim = model.iter().nth(pick % model.len()).unwrap();

    let before = trie.len();
    trie.add(victim).unwrap();
    assert_eq!(trie.len(), before);
    trie.remove(victim).unwrap();
    TestResult::from_bool(!trie.contains(victim).unwrap() && trie.len() == before - 1)
}

#[quickcheck]
fn qc_remove_all_leaves_empty(keys: Vec<String>) -> bool {
    let (mut trie, model) = build(&keys);
    for k in &model {
        trie.remove(k).unwrap();
    }
    trie.is_empty() && trie.len() == 0 && trie.iter().next().is_none()
}

#[quickcheck]
fn qc_empty_prefix_is_iter(keys: Vec<String>) -> bool {
    let (trie, _) = build(&keys);
    trie.keys_with_prefix("").unwrap().eq(trie.iter())
}

#[quickcheck]
fn qc_prefix_filters_model(keys: Vec<String>, raw_prefix: String) -> bool {
    let (trie, model) = build(&keys);
    let prefix = letters(&raw_prefix);
    let expected = model
        .iter()
        .filter(|k| k.starts_with(&prefix))
        .cloned()
        .collect::<Vec<_>>();
    trie.keys_with_prefix(&prefix).unwrap().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn qc_match_key_as_pattern(keys: Vec<String>) -> bool {
    // A member used verbatim as a pattern matches exactly itself.
    let (trie, model) = build(&keys);
    model.iter().all(|k| {
        trie.keys_that_match(k)
            .unwrap()
            .eq(std::iter::once(k.clone()))
    })
}

#[quickcheck]
fn qc_match_filters_model(keys: Vec<String>, pick: usize, mask: u64) -> TestResult {
    // Take one member, punch wildcard holes into it, and compare against a
    // brute-force filter of the model.
    let (trie, model) = build(&keys);
    if model.is_empty() {
        return TestResult::discard();
    }
    let base = model.iter().nth(pick % model.len()).unwrap();
    let pattern = base
        .chars()
        .enumerate()
        .map(|(i, c)| if mask >> (i % 64) & 1 == 1 { '.' } else { c })
        .collect::<String>();

    let expected = model
        .iter()
        .filter(|k| {
            k.len() == pattern.len()
                && k.chars()
                    .zip(pattern.chars())
                    .all(|(kc, pc)| pc == '.' || pc == kc)
        })
        .cloned()
        .collect::<Vec<_>>();
    let got = trie.keys_that_match(&pattern).unwrap().collect::<Vec<_>>();
    TestResult::from_bool(got == expected)
}

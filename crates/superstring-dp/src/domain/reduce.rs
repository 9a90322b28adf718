//! Containment reduction
//!
//! This module removes input strings that are exact duplicates or substrings of
//! another input string. The survivors form an antichain under the substring
//! relation, which is what the overlap search requires.

use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Where an input string sits inside the reduced set
///
/// `member` indexes [`ReducedSet::strings`], `offset` is the byte offset of the
/// input string inside that member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the containing survivor
    pub member: usize,
    /// Byte offset inside the survivor
    pub offset: usize,
}

/// Strings that survive reduction, in first-occurrence input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReducedSet<'a> {
    strings: Vec<&'a str>,
    origins: Vec<usize>,
    placements: Vec<Placement>,
}

impl<'a> ReducedSet<'a> {
    /// Surviving strings
    pub fn strings(&self) -> &[&'a str] {
        &self.strings
    }

    /// Original input index of each survivor (its first occurrence)
    pub fn origins(&self) -> &[usize] {
        &self.origins
    }

    /// Placement of every input string, indexed by original input index
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Survivor at `member`
    #[inline]
    pub fn get(&self, member: usize) -> &'a str {
        self.strings[member]
    }

    /// Number of survivors
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Sum of survivor lengths in bytes (the no-overlap upper bound)
    pub fn total_len(&self) -> usize {
        self.strings.iter().map(|s| s.len()).sum()
    }
}

/// Reduce an input sequence to its containment-free survivors
///
/// A string is dropped when it equals an earlier string or occurs inside a
/// longer one. The empty string is therefore dropped whenever any non-empty
/// string is present; an input made only of empty strings reduces to a single
/// empty string.
pub fn reduce<'a, S: AsRef<str>>(strings: &'a [S]) -> ReducedSet<'a> {
    // Exact duplicates collapse onto their first occurrence
    let mut slot_of: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut distinct: Vec<(usize, &'a str)> = Vec::new();
    let mut input_slots = Vec::with_capacity(strings.len());

    for (index, s) in strings.iter().enumerate() {
        let s = s.as_ref();
        let slot = *slot_of.entry(s).or_insert_with(|| {
            distinct.push((index, s));
            distinct.len() - 1
        });
        input_slots.push(slot);
    }

    // Longest first: anything containing a string is examined before it.
    // Distinct strings of equal length never contain each other.
    let mut by_length: Vec<usize> = (0..distinct.len()).collect();
    by_length.sort_by_key(|&slot| Reverse(distinct[slot].1.len()));

    let mut kept: Vec<usize> = Vec::new();
    let mut host = vec![(0usize, 0usize); distinct.len()];

    for &slot in &by_length {
        let s = distinct[slot].1;
        let container = kept
            .iter()
            .find_map(|&k| distinct[k].1.find(s).map(|offset| (k, offset)));

        match container {
            Some(found) => host[slot] = found,
            None => {
                host[slot] = (slot, 0);
                kept.push(slot);
            }
        }
    }

    // Slots are numbered in first-occurrence order
    kept.sort_unstable();

    let mut member_of = vec![0usize; distinct.len()];
    for (member, &slot) in kept.iter().enumerate() {
        member_of[slot] = member;
    }

    let placements = input_slots
        .iter()
        .map(|&slot| {
            let (host_slot, offset) = host[slot];
            Placement {
                member: member_of[host_slot],
                offset,
            }
        })
        .collect();

    ReducedSet {
        strings: kept.iter().map(|&slot| distinct[slot].1).collect(),
        origins: kept.iter().map(|&slot| distinct[slot].0).collect(),
        placements,
    }
}

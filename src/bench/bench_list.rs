use std::collections::LinkedList;
use std::fmt::Display;

use serde::Serialize;

/// Operations a list must offer to be benchmarked.
///
/// Both implementations come from std; this trait only gives them a common
/// index based surface.
pub trait BenchList: Send {
    fn append(&mut self, value: i64);
    fn get(&self, index: usize) -> Option<i64>;
    fn remove(&mut self, index: usize) -> Option<i64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BenchList for Vec<i64> {
    fn append(&mut self, value: i64) {
        Vec::push(self, value);
    }

    fn get(&self, index: usize) -> Option<i64> {
        self.as_slice().get(index).copied()
    }

    fn remove(&mut self, index: usize) -> Option<i64> {
        if index >= Vec::len(self) {
            return None;
        }
        Some(Vec::remove(self, index))
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl BenchList for LinkedList<i64> {
    fn append(&mut self, value: i64) {
        self.push_back(value);
    }

    // walk from whichever end is closer
    fn get(&self, index: usize) -> Option<i64> {
        let len = LinkedList::len(self);
        if index >= len {
            return None;
        }
        if index < len / 2 {
            self.iter().nth(index).copied()
        } else {
            self.iter().rev().nth(len - 1 - index).copied()
        }
    }

    fn remove(&mut self, index: usize) -> Option<i64> {
        if index >= LinkedList::len(self) {
            return None;
        }
        // split_off also walks from the closer end
        let mut tail = self.split_off(index);
        let res = tail.pop_front();
        LinkedList::append(self, &mut tail);
        res
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
    // contiguous growable array
    #[serde(rename = "Vec")]
    Contiguous,
    // doubly linked nodes
    #[serde(rename = "LinkedList")]
    Linked,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Contiguous, Variant::Linked];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Contiguous => "Vec",
            Variant::Linked => "LinkedList",
        }
    }

    pub fn new_list(&self) -> Box<dyn BenchList> {
        match self {
            Variant::Contiguous => Box::new(Vec::<i64>::new()),
            Variant::Linked => Box::new(LinkedList::<i64>::new()),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! A fixed-capacity open-addressing hash table with probe accounting.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt::Debug;

use crate::hash_fn::HashFn;

/// The result of a single insert or remove, carrying the probe count.
///
/// `probes` is the number of slots the operation examined, including the slot
/// it stopped on. It is never zero: even an operation that resolves at the
/// home slot performed one examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Number of slots examined, including the final one.
    pub probes: usize,
}

/// A fixed-capacity hash table over `i32` keys using linear probing.
///
/// The table is built for measurement rather than general-purpose storage:
/// every operation reports how many slots it examined, and nothing is done
/// behind the caller's back. Capacity is fixed at construction. There is no
/// resizing, no rehashing, no duplicate detection, and no tombstoning;
/// removal restores the empty marker, so a probe chain always terminates at
/// the first empty slot.
///
/// Those omissions are deliberate. Growth and tombstone cleanup would make
/// probe counts a function of the table's history instead of the hash
/// function and the load factor, which is the relationship the probe counts
/// exist to expose.
///
/// ## Example
///
/// ```rust
/// use probe_hash::HashFn;
/// use probe_hash::HashTable;
///
/// let mut table = HashTable::new(5, HashFn::Modulo);
///
/// // 0, 5, and 10 all have home slot 0, so they chain.
/// assert_eq!(table.insert(0).probes, 1);
/// assert_eq!(table.insert(5).probes, 2);
/// assert_eq!(table.insert(10).probes, 3);
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Clone)]
pub struct HashTable {
    slots: Box<[Option<i32>]>,
    hash_fn: HashFn,
    populated: usize,
}

impl Debug for HashTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("hash_fn", &self.hash_fn.name())
            .field("populated", &self.populated)
            .field("capacity", &self.slots.len())
            .finish()
    }
}

impl HashTable {
    /// Creates a table with exactly `capacity` slots, all empty, using
    /// `hash_fn` to map keys to home slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-slot table cannot satisfy the
    /// hash functions' range contract, so this is rejected at construction
    /// rather than surfacing as a division by zero later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::HashFn;
    /// # use probe_hash::HashTable;
    /// #
    /// let table = HashTable::new(100, HashFn::Multiplication);
    /// assert_eq!(table.capacity(), 100);
    /// assert!(table.is_empty());
    /// ```
    pub fn new(capacity: usize, hash_fn: HashFn) -> Self {
        assert!(capacity > 0, "table capacity must be positive");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            hash_fn,
            populated: 0,
        }
    }

    /// Inserts `key` into the first empty slot on its probe chain.
    ///
    /// Probing examines `(home + i) mod capacity` for `i = 0, 1, 2, ...`,
    /// counting each examination. On success, `probes` includes the slot the
    /// key landed in, so an insert that resolves at its home slot reports 1.
    /// If every slot is occupied the insert fails with `probes` equal to the
    /// capacity.
    ///
    /// A key already present is stored again in a second slot; the table
    /// never checks for prior existence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::HashFn;
    /// # use probe_hash::HashTable;
    /// #
    /// let mut table = HashTable::new(2, HashFn::Modulo);
    /// assert!(table.insert(7).ok);
    /// assert!(table.insert(9).ok);
    ///
    /// // Full table: the scan visits both slots, then gives up.
    /// let full = table.insert(4);
    /// assert!(!full.ok);
    /// assert_eq!(full.probes, 2);
    /// ```
    pub fn insert(&mut self, key: i32) -> Outcome {
        let m = self.slots.len();
        let home = self.hash_fn.slot(key, m);
        for i in 0..m {
            let index = (home + i) % m;
            if self.slots[index].is_none() {
                self.slots[index] = Some(key);
                self.populated += 1;
                return Outcome {
                    ok: true,
                    probes: i + 1,
                };
            }
        }
        Outcome {
            ok: false,
            probes: m,
        }
    }

    /// Removes `key`, scanning the same probe chain insert would have used.
    ///
    /// At each examined slot: a matching key is cleared back to empty and the
    /// operation succeeds; an empty slot ends the scan immediately with a
    /// failure, since insert would never have placed the key beyond it. If
    /// the scan wraps through all slots with neither a match nor an empty
    /// slot, the remove fails with `probes` equal to the capacity.
    ///
    /// Because removal restores the empty marker rather than a tombstone,
    /// clearing a slot can hide keys that probed past it: a later remove of
    /// such a key stops at the cleared slot and reports the key absent even
    /// though it is still stored. Workloads that complete all inserts before
    /// any removes never observe this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::HashFn;
    /// # use probe_hash::HashTable;
    /// #
    /// let mut table = HashTable::new(5, HashFn::Modulo);
    /// table.insert(3);
    ///
    /// assert!(table.remove(3).ok);
    ///
    /// // Gone now, and the home slot is empty again: one probe to find out.
    /// let missing = table.remove(3);
    /// assert!(!missing.ok);
    /// assert_eq!(missing.probes, 1);
    /// ```
    pub fn remove(&mut self, key: i32) -> Outcome {
        let m = self.slots.len();
        let home = self.hash_fn.slot(key, m);
        for i in 0..m {
            let index = (home + i) % m;
            match self.slots[index] {
                Some(stored) if stored == key => {
                    self.slots[index] = None;
                    self.populated -= 1;
                    return Outcome {
                        ok: true,
                        probes: i + 1,
                    };
                }
                None => {
                    return Outcome {
                        ok: false,
                        probes: i + 1,
                    };
                }
                Some(_) => {}
            }
        }
        Outcome {
            ok: false,
            probes: m,
        }
    }

    /// Resets every slot to empty without changing the capacity.
    ///
    /// Lets a harness reuse one allocation across repetitions instead of
    /// constructing a fresh table each time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::HashFn;
    /// # use probe_hash::HashTable;
    /// #
    /// let mut table = HashTable::new(8, HashFn::DigitSum);
    /// table.insert(123);
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.populated = 0;
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    ///
    /// Duplicate inserts of the same key each occupy a slot and each count.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the hash strategy this table was constructed with.
    pub fn hash_fn(&self) -> HashFn {
        self.hash_fn
    }
}

/// Statistics describing runs of consecutively occupied slots.
///
/// A "run" is a maximal stretch of occupied slots, treating the slot array as
/// circular. Long runs are what long probe chains look like from the storage
/// side, so these numbers explain measured probe counts directly.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterStats {
    /// Number of maximal occupied runs.
    pub runs: usize,
    /// Length of the longest run.
    pub longest_run: usize,
    /// Number of occupied slots.
    pub occupied: usize,
    /// Total number of slots.
    pub total_slots: usize,
}

#[cfg(feature = "stats")]
impl ClusterStats {
    /// Pretty-print the clustering statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Slot Clustering ===");
        println!(
            "Occupied: {}/{} ({:.2}% load)",
            self.occupied,
            self.total_slots,
            if self.total_slots == 0 {
                0.0
            } else {
                (self.occupied as f64 / self.total_slots as f64) * 100.0
            }
        );
        println!("Runs: {}", self.runs);
        println!("Longest run: {}", self.longest_run);
        println!(
            "Mean run length: {:.2}",
            if self.runs == 0 {
                0.0
            } else {
                self.occupied as f64 / self.runs as f64
            }
        );
    }
}

#[cfg(feature = "stats")]
impl HashTable {
    /// Scans the slot array and reports occupied-run statistics.
    ///
    /// O(capacity). The scan starts just past an empty slot so a run that
    /// wraps from the last slot into the first is counted once, not twice.
    pub fn cluster_stats(&self) -> ClusterStats {
        let m = self.slots.len();
        let start = match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => index,
            // No empty slot: the whole array is one circular run.
            None => {
                return ClusterStats {
                    runs: 1,
                    longest_run: m,
                    occupied: m,
                    total_slots: m,
                };
            }
        };

        let mut runs = 0;
        let mut longest_run = 0;
        let mut current = 0;
        for i in 0..m {
            let index = (start + 1 + i) % m;
            if self.slots[index].is_some() {
                if current == 0 {
                    runs += 1;
                }
                current += 1;
                longest_run = longest_run.max(current);
            } else {
                current = 0;
            }
        }

        ClusterStats {
            runs,
            longest_run,
            occupied: self.populated,
            total_slots: m,
        }
    }
}

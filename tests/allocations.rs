// Allocation counts for table construction.
//
// Runs in its own test binary so the counting allocator sees only this
// file's work. Counting is limited to the test thread.
use chain_hashtable::{HashTable, Set};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingAlloc;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static COUNTING: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNTING.try_with(Cell::get).unwrap_or(false) {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn allocations_during<R>(f: impl FnOnce() -> R) -> (usize, R) {
    ALLOCATIONS.store(0, Ordering::Relaxed);
    COUNTING.with(|c| c.set(true));
    let r = f();
    COUNTING.with(|c| c.set(false));
    (ALLOCATIONS.load(Ordering::Relaxed), r)
}

// Test: building a table allocates the bucket array and nothing else.
// Verifies: empty buckets own no heap memory, so the count does not grow
// with the slot count; the first insert pays for its own bucket.
#[test]
fn new_table_allocates_once() {
    let (n, set) = allocations_during(Set::<u8>::new);
    assert_eq!(n, 0);
    drop(set);

    for slots in [1usize, 10, 1000, 100_000] {
        let (n, t) = allocations_during(|| HashTable::<u8>::new(slots).unwrap());
        assert_eq!(n, 1, "{slots} slots");
        drop(t);
    }

    let mut t = HashTable::<u8>::new(1000).unwrap();
    let (n, ()) = allocations_during(|| t.insert("Dartmouth", 1).unwrap());
    assert!(n >= 1);
    let (n, found) = allocations_during(|| t.find("Dartmouth").copied());
    assert_eq!((n, found), (0, Some(1)));
}

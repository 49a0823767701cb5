use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{GameSnapshot, Session};
use blockfall::types::Command;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn session_hot_paths_do_not_allocate() {
    let mut session = Session::new(Some(1));
    let mut snap = GameSnapshot::default();

    // Warm-up: the first lock shuffles a bag into the preallocated queue.
    session.on_command(Command::HardDrop);
    session.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            session.on_tick();
            session.on_command(Command::MoveLeft);
            session.on_command(Command::RotateCw);
            if i % 10 == 0 {
                session.on_command(Command::HardDrop);
            }
            let _ = session.take_last_event();
            session.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
}

use kernel_sync::{SpinLock, SyncOnceCell};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::{panic, thread};

#[test]
fn lock_is_released_when_the_guard_drops() {
    let l = SpinLock::new(0_u32);
    {
        let mut g = l.lock();
        *g = 41;
        assert!(l.is_locked());
    }
    assert!(!l.is_locked());

    let mut g = l.lock();
    *g += 1;
    assert_eq!(*g, 42);
}

#[test]
fn try_lock_fails_while_held() {
    let l = SpinLock::new(1u8);

    let g1 = l.try_lock();
    assert_eq!(g1.as_deref(), Some(&1));
    assert!(l.try_lock().is_none());

    drop(g1);
    assert!(l.try_lock().is_some());
}

#[test]
fn irq_guard_behaves_like_a_plain_guard() {
    let l = SpinLock::new(Vec::<u8>::new());
    {
        let mut g = l.lock_irq();
        g.extend_from_slice(b"abc");
        assert!(l.try_lock().is_none());
    }
    assert_eq!(l.lock().as_slice(), b"abc");
}

#[test]
fn with_lock_returns_the_closure_result() {
    let l = SpinLock::new(String::from("a"));
    let len = l.with_lock(|s| {
        s.push('b');
        s.len()
    });
    assert_eq!(len, 2);
    assert_eq!(l.into_inner(), "ab");
}

#[test]
fn get_mut_needs_no_locking() {
    let mut l = SpinLock::new(vec![1, 2, 3]);
    l.get_mut().push(4);
    assert_eq!(l.lock().as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn contended_increments_are_exact_and_exclusive() {
    let threads = 8;
    let iters = 5_000;

    let lock = Arc::new(SpinLock::new(0usize));
    let in_cs = Arc::new(AtomicUsize::new(0));
    let start = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let lock = Arc::clone(&lock);
            let in_cs = Arc::clone(&in_cs);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for _ in 0..iters {
                    let mut v = lock.lock_irq();
                    let prev = in_cs.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(prev, 0, "mutual exclusion violated");
                    *v += 1;
                    in_cs.fetch_sub(1, Ordering::SeqCst);
                    drop(v);
                    thread::yield_now();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(lock.with_lock(|v| *v), threads * iters);
}

#[test]
fn lock_is_released_on_panic() {
    let l = SpinLock::new(0u32);

    let res = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        l.with_lock(|v| {
            *v = 123;
            panic!("boom");
        });
    }));
    assert!(res.is_err());
    assert_eq!(l.with_lock(|v| *v), 123);
}

#[test]
fn once_cell_has_a_single_winner() {
    let cell = Arc::new(SyncOnceCell::new());
    let threads = 8;
    let start = Arc::new(Barrier::new(threads));

    let winners: usize = (0..threads)
        .map(|i| {
            let cell = Arc::clone(&cell);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                usize::from(cell.set(i).is_ok())
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .sum();

    assert_eq!(winners, 1);
    assert!(cell.get().is_some_and(|&v| v < threads));
}

#[test]
fn usable_in_statics() {
    static COUNTER: SpinLock<u64> = SpinLock::new(0);
    static NAME: SyncOnceCell<&str> = SyncOnceCell::new();

    *COUNTER.lock() += 2;
    assert_eq!(*NAME.get_or_init(|| "boot"), "boot");
    assert_eq!(*COUNTER.lock(), 2);
}

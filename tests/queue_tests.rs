//! 7-bag randomizer tests.

use blockfall::core::PieceQueue;
use blockfall::types::PieceKind;

#[test]
fn test_seeded_draws_are_uniform() {
    let mut queue = PieceQueue::new(Some(12345));
    let mut counts = [0u32; 7];
    for _ in 0..7000 {
        counts[queue.next().index()] += 1;
    }
    assert_eq!(counts, [1000; 7]);
}

#[test]
fn test_every_bag_window_holds_each_kind_once() {
    let mut queue = PieceQueue::new(Some(7));
    for _ in 0..50 {
        let mut window: Vec<PieceKind> = (0..7).map(|_| queue.next()).collect();
        window.sort_by_key(|k| k.index());
        assert_eq!(window, PieceKind::ALL.to_vec());
    }
    assert_eq!(queue.bags_drawn(), 50);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceQueue::new(Some(42));
    let mut b = PieceQueue::new(Some(42));
    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_bag_refills_only_when_empty() {
    let mut queue = PieceQueue::new(Some(3));
    assert_eq!(queue.remaining_in_bag(), 0);
    assert_eq!(queue.peek(), None);

    queue.next();
    assert_eq!(queue.remaining_in_bag(), 6);
    for left in (0..6).rev() {
        let peeked = queue.peek();
        assert_eq!(Some(queue.next()), peeked);
        assert_eq!(queue.remaining_in_bag(), left);
    }
    assert_eq!(queue.bags_drawn(), 1);
}

#[test]
fn test_unseeded_queue_still_uses_bags() {
    let mut queue = PieceQueue::new(None);
    let mut window: Vec<PieceKind> = (0..7).map(|_| queue.next()).collect();
    window.sort_by_key(|k| k.index());
    assert_eq!(window, PieceKind::ALL.to_vec());
}

use selfref_containers::*;
use std::collections::VecDeque;
use test_case::test_case;

fn front_to_rear<T: Clone, M: MemoryPolicy>(queue: &Queue<T, M>) -> Vec<T> {
    queue.iter().cloned().collect()
}

fn fifo<M: MemoryPolicy>(n: i32) {
    let mut queue = Queue::<i32, M>::default();
    let mut model = VecDeque::new();

    for i in 0..n {
        queue.enqueue(i);
        model.push_back(i);

        if i % 4 == 3 {
            assert_eq!(queue.dequeue().ok(), model.pop_front());
            assert_eq!(queue.dequeue().ok(), model.pop_front());
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek().ok(), model.front());
        assert!(queue.iter().eq(model.iter()));
    }

    while let Some(expected) = model.pop_front() {
        assert_eq!(queue.dequeue(), Ok(expected));
    }
    assert_eq!(queue.dequeue(), Err(ContainerError::EmptyContainer));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(4)]
#[test_case(333)]
fn fifo_with_default_policy(n: i32) {
    fifo::<DefaultMemory>(n);
}

#[test_case(0)]
#[test_case(1)]
#[test_case(4)]
#[test_case(333)]
fn fifo_with_never_reclaim(n: i32) {
    fifo::<MemoryReclaimNever>(n);
}

#[test_case(0)]
#[test_case(1)]
#[test_case(4)]
#[test_case(333)]
fn fifo_with_half_reclaim(n: i32) {
    fifo::<MemoryReclaimOnThreshold<1>>(n);
}

#[test]
fn empty_queue_errors() {
    let mut queue = Queue::<char>::new();
    assert_eq!(queue.dequeue(), Err(ContainerError::EmptyContainer));
    assert_eq!(queue.peek(), Err(ContainerError::EmptyContainer));

    queue.enqueue('x');
    assert_eq!(queue.dequeue(), Ok('x'));
    assert_eq!(queue.peek(), Err(ContainerError::EmptyContainer));
}

#[test]
fn sort_puts_smallest_at_front() {
    let mut queue = Queue::new();
    for x in [5, 3, 1, 4, 1] {
        queue.enqueue(x);
    }

    queue.sort();
    assert_eq!(front_to_rear(&queue), vec![1, 1, 3, 4, 5]);

    queue.enqueue(0);
    assert_eq!(front_to_rear(&queue), vec![1, 1, 3, 4, 5, 0]);

    queue.sort();
    queue.sort();
    assert_eq!(front_to_rear(&queue), vec![0, 1, 1, 3, 4, 5]);
}

#[test]
fn sort_strings() {
    let mut queue: Queue<_> = ["pear", "apple", "fig"].map(String::from).into_iter().collect();
    queue.sort();
    assert_eq!(queue.to_string(), "apple fig pear");
}

#[test]
fn print_from_front() {
    let queue: Queue<_> = [-1, 0, 7].into_iter().collect();
    assert_eq!(queue.to_string(), "-1 0 7");
    assert_eq!(Queue::<f32>::new().to_string(), "");
}

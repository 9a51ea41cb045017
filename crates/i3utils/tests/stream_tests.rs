//! Behaviour of `ListStream` through the public `Stream` protocol

use i3utils::stream::{ListStream, Stream};
use proptest::prelude::*;

#[test]
fn test_mixed_call_sequence() {
    let mut stream = ListStream::new(&[1, 2, 3]);

    assert!(stream.has_next());
    assert_eq!(stream.next(), Some(1));
    assert_eq!(stream.next(), Some(2));
    assert!(stream.has_next());
    assert_eq!(stream.to_list(), vec![3]);
    assert!(!stream.has_next());
}

#[test]
fn test_original_mutation_does_not_leak_into_stream() {
    let mut original = vec!["a".to_string(), "b".to_string()];
    let mut stream = ListStream::new(&original);

    original[0] = "changed".to_string();
    original.push("c".to_string());

    assert_eq!(stream.next().as_deref(), Some("a"));
    assert_eq!(stream.to_list(), vec!["b".to_string()]);
}

#[test]
fn test_stream_can_be_moved_across_threads() {
    let stream = ListStream::new(&[10, 20, 30]);

    let collected = std::thread::spawn(move || {
        let mut stream = stream;
        stream.by_iter().collect::<Vec<_>>()
    })
    .join()
    .unwrap();

    assert_eq!(collected, vec![10, 20, 30]);
}

proptest! {
    #[test]
    fn prop_next_yields_every_item_in_order(items in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut stream = ListStream::new(&items);

        let mut seen = Vec::new();
        for _ in 0..items.len() {
            prop_assert!(stream.has_next());
            seen.push(stream.next().unwrap());
        }

        prop_assert_eq!(seen, items);
        prop_assert!(!stream.has_next());
        prop_assert_eq!(stream.next(), None);
    }

    #[test]
    fn prop_to_list_after_construction_returns_everything(items in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut stream = ListStream::new(&items);

        prop_assert_eq!(stream.to_list(), items);
        prop_assert!(!stream.has_next());
        prop_assert!(stream.to_list().is_empty());
    }

    #[test]
    fn prop_to_list_returns_unconsumed_suffix(
        items in proptest::collection::vec(any::<u16>(), 0..64),
        taken in 0usize..80,
    ) {
        let mut stream = ListStream::new(&items);
        let k = taken.min(items.len());
        for _ in 0..taken {
            stream.next();
        }

        prop_assert_eq!(stream.position(), k);
        prop_assert_eq!(stream.to_list(), items[k..].to_vec());
        prop_assert!(!stream.has_next());
    }
}

//! Independent derivations share nothing and may run concurrently.

use std::thread;

use drsa_core::{generate, generate_key_pair};

#[test]
fn concurrent_streams_match_sequential_ones() {
    let inputs: Vec<(&[u8], &[u8])> = vec![
        (&b"alpha"[..], &b"a"[..]),
        (&b"bravo"[..], &b"b"[..]),
        (&b"charlie"[..], &b"c"[..]),
        (&b"alpha"[..], &b"a"[..]),
    ];

    let sequential: Vec<Vec<u8>> = inputs
        .iter()
        .map(|(pw, c)| generate(64, pw, c, 2).expect("generate").expose().to_vec())
        .collect();

    let concurrent: Vec<Vec<u8>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(pw, c)| {
                scope.spawn(move || generate(64, pw, c, 2).expect("generate").expose().to_vec())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
    assert_eq!(concurrent[0], concurrent[3]);
    assert_ne!(concurrent[0], concurrent[1]);
}

#[test]
fn concurrent_key_pairs_are_reproducible() {
    let keys: Vec<Vec<u8>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|_| scope.spawn(|| generate_key_pair(b"pw", b"q", 1, 256).expect("derive")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().n_bytes())
            .collect()
    });
    assert!(keys.windows(2).all(|w| w[0] == w[1]));
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use studykit::{fib, Error, MAX_FIB_INDEX};

fuzz_target!(|n: i64| {
    // Keep the input near the interesting range; the loop is linear in n
    let n = n % (MAX_FIB_INDEX + 16);
    match fib(n) {
        Ok(value) => {
            assert!((0..=MAX_FIB_INDEX).contains(&n));
            if n >= 2 {
                let expected = fib(n - 1).unwrap() + fib(n - 2).unwrap();
                assert_eq!(value, expected);
            }
        }
        Err(Error::InvalidArgument(_)) => assert!(n < 0),
        Err(Error::Overflow(_)) => assert!(n > MAX_FIB_INDEX),
        Err(e) => panic!("unexpected error: {}", e),
    }
});

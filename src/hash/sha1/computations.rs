//! SHA-1 round functions.
//!
//! `all_rounds` has two builds with identical output: a loop over the 80
//! rounds, and a fully unrolled version selected by the `speed` feature.
//! The test suite covers whichever build is compiled, so run it both ways:
//!
//! ```text
//! cargo test
//! cargo test --release --features speed
//! ```

pub use super::{K0, K1, K2, K3};
use super::SCHEDULE_LEN;

/// Choose: rounds 0..20.
#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

/// Parity: rounds 20..40 and 60..80.
#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Majority: rounds 40..60.
#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; SCHEDULE_LEN]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (t, &wt) in w.iter().enumerate() {
        let (f, k) = match t {
            0..20 => (ch(b, c, d), K0),
            20..40 => (parity(b, c, d), K1),
            40..60 => (maj(b, c, d), K2),
            _ => (parity(b, c, d), K3),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; SCHEDULE_LEN]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! R {
        ($f:ident, $k:expr, $i:expr) => {{
            let temp = a
                .rotate_left(5)
                .wrapping_add($f(b, c, d))
                .wrapping_add(e)
                .wrapping_add($k)
                .wrapping_add(w[$i]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }};
    }

    macro_rules! R5 {
        ($f:ident, $k:expr, $i:expr) => {{
            R!($f, $k, $i);
            R!($f, $k, $i + 1);
            R!($f, $k, $i + 2);
            R!($f, $k, $i + 3);
            R!($f, $k, $i + 4);
        }};
    }

    R5!(ch, K0, 0);
    R5!(ch, K0, 5);
    R5!(ch, K0, 10);
    R5!(ch, K0, 15);

    R5!(parity, K1, 20);
    R5!(parity, K1, 25);
    R5!(parity, K1, 30);
    R5!(parity, K1, 35);

    R5!(maj, K2, 40);
    R5!(maj, K2, 45);
    R5!(maj, K2, 50);
    R5!(maj, K2, 55);

    R5!(parity, K3, 60);
    R5!(parity, K3, 65);
    R5!(parity, K3, 70);
    R5!(parity, K3, 75);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

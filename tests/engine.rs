use sha1p::hash::sha1::core::{compress, digest_bytes};
use sha1p::hash::sha1::padding::pad;
use sha1p::hash::sha1::schedule::expand;
use sha1p::hash::sha1::{
    H160_INIT, Sha1Engine, Sha1Error, Sha1ParamError, Sha1Params, available_threads,
    compress_block, hash, sha1,
};

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 253) as u8).collect()
}

// -------------------------------------------------------
// 1. PARAMETERS
// -------------------------------------------------------

#[test]
fn default_params_use_one_thread() {
    assert_eq!(Sha1Params::default().threads, 1);
    assert!(Sha1Params::default().validate().is_ok());
}

#[test]
fn zero_threads_is_rejected() {
    assert_eq!(
        Sha1Params::with_threads(0).validate(),
        Err(Sha1ParamError::ZeroThreads)
    );
    assert_eq!(
        hash(b"abc", 3, 0).unwrap_err(),
        Sha1Error::InvalidParams(Sha1ParamError::ZeroThreads)
    );
    assert!(Sha1Engine::new(Sha1Params::with_threads(0)).is_err());
}

#[test]
fn host_params_fit_the_host() {
    let params = Sha1Params::host();
    assert_eq!(params.threads, available_threads());
    assert!(params.validate_for_host().is_ok());
}

#[test]
fn oversubscription_is_reported_but_not_enforced() {
    let available = available_threads();
    let params = Sha1Params::with_threads(available + 1);

    assert_eq!(
        params.validate_for_host(),
        Err(Sha1ParamError::TooManyThreads {
            requested: available + 1,
            available,
        })
    );

    let engine = Sha1Engine::new(params).unwrap();
    assert_eq!(engine.digest(b"abc").unwrap(), sha1(b"abc"));
}

#[test]
fn errors_have_readable_messages() {
    let err = Sha1Error::from(Sha1ParamError::ZeroThreads);
    assert_eq!(err.to_string(), "invalid parameters: thread count must be at least 1");

    let err = Sha1Error::LengthOutOfBounds {
        length: 9,
        available: 4,
    };
    assert_eq!(err.to_string(), "message length 9 exceeds buffer of 4 bytes");
}

// -------------------------------------------------------
// 2. THREAD-COUNT INVARIANCE
// -------------------------------------------------------

#[test]
fn digest_is_independent_of_thread_count() {
    for len in [0, 1, 63, 64, 65, 64 * 100 + 5] {
        let msg = message(len);
        let single = hash(&msg, len as u64, 1).unwrap();

        for threads in [2, 3, 4, 5, 8, 16] {
            assert_eq!(
                hash(&msg, len as u64, threads).unwrap(),
                single,
                "length {len}, {threads} threads"
            );
        }
    }
}

#[test]
fn engine_is_reusable() {
    let engine = Sha1Engine::new(Sha1Params::with_threads(4)).unwrap();
    assert_eq!(engine.threads(), 4);
    assert_eq!(engine.params(), &Sha1Params::with_threads(4));

    for len in [0, 10, 1000, 100_000] {
        let msg = message(len);
        assert_eq!(engine.digest(&msg).unwrap(), sha1(&msg), "length {len}");
    }
}

#[test]
fn engine_rejects_length_past_buffer() {
    let engine = Sha1Engine::new(Sha1Params::default()).unwrap();
    assert_eq!(
        engine.digest_prefix(b"abc", 10).unwrap_err(),
        Sha1Error::LengthOutOfBounds {
            length: 10,
            available: 3,
        }
    );
}

// -------------------------------------------------------
// 3. CHUNK FOLD
// -------------------------------------------------------

#[test]
fn fold_matches_block_by_block_compression() {
    // 2, 3 and 16 padded chunks
    for len in [64, 150, 64 * 15 + 10] {
        let msg = message(len);
        let padded = pad(&msg, len as u64).unwrap();

        let mut state = H160_INIT;
        for block in padded.chunks() {
            compress_block(block, &mut state);
        }

        let table = expand(&padded).unwrap();
        assert_eq!(compress(&table), state, "length {len}");
        assert_eq!(hash(&msg, len as u64, 4).unwrap(), digest_bytes(&state));
    }
}

#[test]
fn padded_chunk_counts_for_fold_test() {
    assert_eq!(pad(&message(64), 64).unwrap().num_chunks(), 2);
    assert_eq!(pad(&message(150), 150).unwrap().num_chunks(), 3);
    assert_eq!(pad(&message(970), 970).unwrap().num_chunks(), 16);
}

#[test]
fn chunk_order_matters() {
    let mut msg = message(128);
    let original = hash(&msg, 128, 2).unwrap();

    let (first, second) = msg.split_at_mut(64);
    first.swap_with_slice(second);

    assert_ne!(hash(&msg, 128, 2).unwrap(), original);
}

#[test]
fn digest_bytes_are_big_endian() {
    let state = [0x0102_0304, 0x0506_0708, 0x090A_0B0C, 0x0D0E_0F10, 0x1112_1314];
    let bytes = digest_bytes(&state);
    let want: Vec<u8> = (1..=20).collect();
    assert_eq!(bytes.to_vec(), want);
}

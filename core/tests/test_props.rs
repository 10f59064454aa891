//! Property tests for the two contracts everything else rests on:
//! the transform is an involution, and every byte follows the cycling law.

use proptest::prelude::*;

use xorpad_core::prelude::*;

fn transform_memory(input: Vec<u8>, key: &KeyMaterial, chunk_size: Option<usize>) -> Vec<u8> {
    let options = TransformOptions {
        chunk_size,
        ..Default::default()
    };
    transform_stream(
        InputSource::Memory(input),
        OutputSink::Memory,
        key,
        &options,
        &mut NullProgress,
    )
    .expect("transform should succeed")
    .output
    .expect("memory sink captures output")
}

proptest! {
    #[test]
    fn transform_is_an_involution(
        input in proptest::collection::vec(any::<u8>(), 2..4096),
        key_bytes in proptest::collection::vec(any::<u8>(), 1..128),
    ) {
        let key = KeyMaterial::from_bytes(key_bytes).unwrap();
        let once = transform_memory(input.clone(), &key, None);
        prop_assert_eq!(once.len(), input.len());
        let twice = transform_memory(once, &key, None);
        prop_assert_eq!(twice, input);
    }

    #[test]
    fn every_byte_follows_the_cycling_law(
        input in proptest::collection::vec(any::<u8>(), 2..2048),
        key_bytes in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let key = KeyMaterial::from_bytes(key_bytes.clone()).unwrap();
        let out = transform_memory(input.clone(), &key, None);
        for (i, (&got, &src)) in out.iter().zip(&input).enumerate() {
            prop_assert_eq!(got, src ^ key_bytes[i % key_bytes.len()]);
        }
    }

    #[test]
    fn chunking_is_invisible_in_the_output(
        input in proptest::collection::vec(any::<u8>(), 2..4096),
        key_bytes in proptest::collection::vec(any::<u8>(), 1..64),
        chunk_size in 1usize..200_000,
    ) {
        let key = KeyMaterial::from_bytes(key_bytes).unwrap();
        let default_chunks = transform_memory(input.clone(), &key, None);
        let custom_chunks = transform_memory(input, &key, Some(chunk_size));
        prop_assert_eq!(default_chunks, custom_chunks);
    }
}

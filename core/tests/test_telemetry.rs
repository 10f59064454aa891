#[cfg(test)]
mod tests {
    use xorpad_core::prelude::*;

    /// Captures markers for assertions.
    #[derive(Default)]
    struct Recorder {
        ticks: Vec<(u64, u64)>,
        completed: Vec<u64>,
    }

    impl ProgressObserver for Recorder {
        fn on_tick(&mut self, done: u64, total: u64) {
            self.ticks.push((done, total));
        }
        fn on_complete(&mut self, total: u64) {
            self.completed.push(total);
        }
    }

    fn key() -> KeyMaterial {
        KeyMaterial::from_bytes(vec![0x42]).unwrap()
    }

    #[test]
    fn large_input_emits_ticks_and_a_completion_marker() {
        const LEN: usize = 1024 * 1024;
        let options = TransformOptions {
            chunk_size: Some(16 * 1024),
            progress: ProgressConfig {
                threshold: 128 * 1024,
                tick_count: 10,
            },
            ..Default::default()
        };

        let mut recorder = Recorder::default();
        let snapshot = transform_stream(
            InputSource::Memory(vec![0u8; LEN]),
            OutputSink::Memory,
            &key(),
            &options,
            &mut recorder,
        )
        .unwrap();

        // tick interval = LEN / 10; every boundary up to LEN fires once.
        assert_eq!(recorder.ticks.len(), 10);
        for (done, total) in &recorder.ticks {
            assert_eq!(*total, LEN as u64);
            assert!(*done <= LEN as u64);
        }
        assert_eq!(recorder.completed, vec![LEN as u64]);
        assert_eq!(snapshot.ticks_emitted, 10);
    }

    #[test]
    fn below_threshold_input_emits_no_markers() {
        let options = TransformOptions {
            progress: ProgressConfig {
                threshold: 5 * 1024 * 1024,
                tick_count: 20,
            },
            ..Default::default()
        };

        let mut recorder = Recorder::default();
        let snapshot = transform_stream(
            InputSource::Memory(vec![0u8; 4096]),
            OutputSink::Memory,
            &key(),
            &options,
            &mut recorder,
        )
        .unwrap();

        assert!(recorder.ticks.is_empty());
        assert!(recorder.completed.is_empty());
        assert_eq!(snapshot.ticks_emitted, 0);
    }

    #[test]
    fn zero_tick_count_is_a_validation_error() {
        let options = TransformOptions {
            progress: ProgressConfig {
                threshold: 0,
                tick_count: 0,
            },
            ..Default::default()
        };

        let result = transform_stream(
            InputSource::Memory(vec![0u8; 4096]),
            OutputSink::Memory,
            &key(),
            &options,
            &mut NullProgress,
        );
        assert!(matches!(result, Err(StreamError::Validation(_))));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = transform_stream(
            InputSource::Memory(vec![0u8; 4096]),
            OutputSink::Memory,
            &key(),
            &TransformOptions::default(),
            &mut NullProgress,
        )
        .unwrap();

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["bytes_in"], 4096);
        assert_eq!(value["bytes_out"], 4096);
        assert_eq!(value["key_len"], 1);
        // The captured output buffer must not leak into the JSON.
        assert!(value.get("output").is_none());
    }

    #[test]
    fn reporting_never_changes_the_bytes() {
        // Same input with and without active progress must produce identical
        // output.
        let input: Vec<u8> = (0..200_000u32).map(|i| (i % 256) as u8).collect();
        let noisy_options = TransformOptions {
            progress: ProgressConfig {
                threshold: 1,
                tick_count: 30,
            },
            ..Default::default()
        };

        let with_progress = transform_stream(
            InputSource::Memory(input.clone()),
            OutputSink::Memory,
            &key(),
            &noisy_options,
            &mut Recorder::default(),
        )
        .unwrap()
        .output
        .unwrap();

        let without_progress = transform_stream(
            InputSource::Memory(input),
            OutputSink::Memory,
            &key(),
            &TransformOptions::default(),
            &mut NullProgress,
        )
        .unwrap()
        .output
        .unwrap();

        assert_eq!(with_progress, without_progress);
    }
}

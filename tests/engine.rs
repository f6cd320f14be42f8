mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use strip_monitor::render::gradient_pairs;
    use strip_monitor::{
        DisplayEngine, DisplayEngineConfig, DisplayMode, Rgb, StripDriver, WaveformBuffer,
        WaveformConfig,
    };

    const N: usize = 10;
    const FOREGROUND: Rgb = Rgb::new(16, 0, 0);

    static MESSAGE: [u8; 7] = *b"NCC1701";
    static TABLE: [i32; 4] = [0, 2, 60, 62];

    /// Fake strip backend that records every flushed frame.
    #[derive(Clone, Default)]
    struct RecordingDriver {
        frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
    }

    impl RecordingDriver {
        fn flush_count(&self) -> usize {
            self.frames.borrow().len()
        }

        fn last_frame(&self) -> Vec<Rgb> {
            self.frames.borrow().last().cloned().unwrap()
        }
    }

    impl StripDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.borrow_mut().push(colors.to_vec());
        }
    }

    fn config() -> DisplayEngineConfig<N> {
        DisplayEngineConfig {
            foreground: FOREGROUND,
            range_min: 0,
            range_max: 100,
            palette: gradient_pairs::<N>(
                Rgb::new(0, 64, 0),
                Rgb::new(64, 64, 0),
                Rgb::new(64, 0, 0),
            ),
            message: &MESSAGE,
            message_width: 8,
            marker_offset: None,
            waveform: WaveformConfig {
                hold_delta: 2,
                src_min: 0,
                src_max: 100,
            },
        }
    }

    #[test]
    fn test_engine_flushes_once_per_update() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        engine.update(DisplayMode::Chase, 0);
        assert_eq!(driver.flush_count(), 1);
        engine.update(DisplayMode::RegisterScroll, 0);
        assert_eq!(driver.flush_count(), 2);
        engine.update(DisplayMode::Bargraph, 50);
        assert_eq!(driver.flush_count(), 3);
    }

    #[test]
    fn test_engine_unimplemented_modes_leave_strip_untouched() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        engine.update(DisplayMode::Bargraph, 50);
        let before = engine.frame().as_slice().to_vec();

        engine.update(DisplayMode::Banded, 50);
        engine.update(DisplayMode::Flashlight, 50);
        assert_eq!(driver.flush_count(), 1);
        assert_eq!(engine.frame().as_slice(), &before[..]);
    }

    #[test]
    fn test_engine_unknown_raw_mode_is_ignored() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        engine.update_raw(99, 0);
        assert_eq!(driver.flush_count(), 0);

        engine.update_raw(2, 50);
        assert_eq!(driver.flush_count(), 1);
    }

    #[test]
    fn test_engine_flush_carries_the_completed_frame() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        engine.update(DisplayMode::Bargraph, 100);
        let written = driver.last_frame();
        assert_eq!(&written[..], engine.frame().as_slice());

        let palette = config().palette;
        for (i, pixel) in written.iter().enumerate() {
            assert_eq!(*pixel, palette[i].on);
        }
    }

    #[test]
    fn test_engine_waveform_mode_applies_hysteresis() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        // first cycle always draws
        engine.update(DisplayMode::FastWaveform, 0);
        assert_eq!(driver.flush_count(), 1);

        // sample 2 still maps to pixel 0: held, no flush
        wave.advance();
        engine.update(DisplayMode::FastWaveform, 0);
        assert_eq!(driver.flush_count(), 1);

        // sample 60 maps to pixel 6: exactly one more flush
        wave.advance();
        engine.update(DisplayMode::FastWaveform, 0);
        assert_eq!(driver.flush_count(), 2);

        // sample 62 maps to pixel 6 again: held
        wave.advance();
        engine.update(DisplayMode::FastWaveform, 0);
        assert_eq!(driver.flush_count(), 2);
    }

    #[test]
    fn test_engine_waveform_idle_timer_causes_no_redraws() {
        let driver = RecordingDriver::default();
        let wave = WaveformBuffer::new(&TABLE);
        let mut engine = DisplayEngine::new(driver.clone(), &wave, &config()).unwrap();

        engine.update(DisplayMode::FastWaveform, 0);
        // timer stopped: the index is frozen, so nothing moves
        for _ in 0..5 {
            engine.update(DisplayMode::FastWaveform, 0);
        }
        assert_eq!(driver.flush_count(), 1);

        engine.reset_waveform_cursor();
        engine.update(DisplayMode::FastWaveform, 0);
        assert_eq!(driver.flush_count(), 2);
    }
}

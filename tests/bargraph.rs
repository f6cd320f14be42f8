mod tests {
    use strip_monitor::render::{gradient_pairs, BargraphRenderer, ColorPair, ConfigError, Render};
    use strip_monitor::{PixelBuffer, Rgb};

    const N: usize = 20;

    const GREEN: Rgb = Rgb::new(0, 64, 0);
    const YELLOW: Rgb = Rgb::new(64, 64, 0);
    const RED: Rgb = Rgb::new(64, 0, 0);

    fn bargraph() -> BargraphRenderer<N> {
        BargraphRenderer::new(0, 100, gradient_pairs::<N>(GREEN, YELLOW, RED)).unwrap()
    }

    #[test]
    fn test_bargraph_value_at_or_below_min_lights_nothing() {
        let bar = bargraph();
        assert_eq!(bar.level_for(0), 0);
        assert_eq!(bar.level_for(-50), 0);
    }

    #[test]
    fn test_bargraph_value_at_or_above_max_lights_everything() {
        let bar = bargraph();
        assert_eq!(bar.level_for(100), N);
        assert_eq!(bar.level_for(5000), N);
    }

    #[test]
    fn test_bargraph_level_is_monotonic() {
        let bar = bargraph();
        let mut previous = 0;
        for value in -10..=110 {
            let level = bar.level_for(value);
            assert!(level >= previous);
            assert!(level <= N);
            previous = level;
        }
    }

    #[test]
    fn test_bargraph_degenerate_range_is_rejected() {
        let palette = gradient_pairs::<N>(GREEN, YELLOW, RED);
        assert_eq!(
            BargraphRenderer::<N>::new(50, 50, palette).err(),
            Some(ConfigError::DegenerateRange)
        );
        assert_eq!(
            BargraphRenderer::<N>::new(100, 0, palette).err(),
            Some(ConfigError::DegenerateRange)
        );
        // span narrower than the strip gives a zero per-pixel step
        assert_eq!(
            BargraphRenderer::<N>::new(0, 10, palette).err(),
            Some(ConfigError::DegenerateRange)
        );
    }

    #[test]
    fn test_bargraph_renders_per_pixel_color_pairs() {
        const SMALL: usize = 4;
        let palette = [
            ColorPair { on: Rgb::new(10, 0, 0), off: Rgb::new(1, 0, 0) },
            ColorPair { on: Rgb::new(0, 10, 0), off: Rgb::new(0, 1, 0) },
            ColorPair { on: Rgb::new(0, 0, 10), off: Rgb::new(0, 0, 1) },
            ColorPair { on: Rgb::new(10, 10, 0), off: Rgb::new(1, 1, 0) },
        ];
        let mut bar = BargraphRenderer::<SMALL>::new(0, 40, palette).unwrap();
        let mut frame = PixelBuffer::<SMALL>::new();

        // two of four pixels lit
        bar.render(20, &mut frame);
        assert_eq!(frame.get(0), Some(palette[0].on));
        assert_eq!(frame.get(1), Some(palette[1].on));
        assert_eq!(frame.get(2), Some(palette[2].off));
        assert_eq!(frame.get(3), Some(palette[3].off));
    }

    #[test]
    fn test_bargraph_gradient_palette_runs_green_to_red() {
        let palette = gradient_pairs::<N>(GREEN, YELLOW, RED);
        assert_eq!(palette[0].on, GREEN);
        assert_eq!(palette[N - 1].on, RED);
        // off colors are dim versions of the on colors
        for pair in &palette {
            assert!(pair.off.r <= pair.on.r);
            assert!(pair.off.g <= pair.on.g);
            assert!(pair.off.b <= pair.on.b);
        }
    }
}

mod tests {
    use strip_monitor::render::{ChaseRenderer, Render};
    use strip_monitor::{PixelBuffer, Rgb};

    const N: usize = 5;
    const FOREGROUND: Rgb = Rgb::new(16, 0, 0);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    fn lit_index(frame: &PixelBuffer<N>) -> Option<usize> {
        let mut lit = None;
        for i in 0..N {
            if frame.get(i) != Some(BLACK) {
                assert!(lit.is_none(), "more than one pixel lit");
                lit = Some(i);
            }
        }
        lit
    }

    #[test]
    fn test_chase_first_call_lights_pixel_zero() {
        let mut chase = ChaseRenderer::new(FOREGROUND);
        let mut frame = PixelBuffer::<N>::new();

        chase.render(0, &mut frame);
        assert_eq!(lit_index(&frame), Some(0));
        assert_eq!(frame.get(0), Some(FOREGROUND));
    }

    #[test]
    fn test_chase_position_stays_in_range() {
        let mut chase = ChaseRenderer::new(FOREGROUND);
        let mut frame = PixelBuffer::<N>::new();

        for _ in 0..200 {
            chase.render(0, &mut frame);
            let lit = lit_index(&frame).expect("one pixel lit");
            assert!(lit < N);
            assert!(chase.position() >= 0);
            assert!(chase.position() < N as i32);
        }
    }

    #[test]
    fn test_chase_oscillation_period() {
        let mut chase = ChaseRenderer::new(FOREGROUND);
        let mut frame = PixelBuffer::<N>::new();
        let period = 2 * (N - 1);

        let mut positions = Vec::new();
        for _ in 0..3 * period {
            chase.render(0, &mut frame);
            positions.push(lit_index(&frame).unwrap());
        }

        for i in 0..positions.len() - period {
            assert_eq!(positions[i], positions[i + period]);
        }
    }

    #[test]
    fn test_chase_bounces_at_both_ends() {
        let mut chase = ChaseRenderer::new(FOREGROUND);
        let mut frame = PixelBuffer::<N>::new();

        let mut positions = Vec::new();
        for _ in 0..2 * (N - 1) {
            chase.render(0, &mut frame);
            positions.push(lit_index(&frame).unwrap());
        }
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn test_chase_reset_restarts_from_origin() {
        let mut chase = ChaseRenderer::new(FOREGROUND);
        let mut frame = PixelBuffer::<N>::new();

        for _ in 0..7 {
            chase.render(0, &mut frame);
        }
        <ChaseRenderer as Render<N>>::reset(&mut chase);
        chase.render(0, &mut frame);
        assert_eq!(lit_index(&frame), Some(0));
    }
}

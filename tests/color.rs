mod tests {
    use myrtio_status_led::color::{
        BLACK, GREEN, LIME, NAMED_COLORS, NAVY, RED, Rgb, WHITE, color_name, invert,
        parse_color_name, rgb_from_u32, rgb_to_u32,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_3456), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_from_u32(0xFF12_3456), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(rgb_to_u32(Rgb::new(0x12, 0x34, 0x56)), 0x12_3456);
        assert_eq!(rgb_to_u32(WHITE), 0xFF_FFFF);
        assert_eq!(rgb_to_u32(BLACK), 0);
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(RED, Rgb::new(255, 0, 0));
        assert_eq!(LIME, Rgb::new(0, 255, 0));
        assert_eq!(GREEN, Rgb::new(0, 128, 0));
        assert_eq!(NAVY, Rgb::new(0, 0, 128));
    }

    #[test]
    fn test_parse_color_name() {
        assert_eq!(parse_color_name("red"), Some(RED));
        assert_eq!(parse_color_name("green"), Some(GREEN));
        assert_eq!(parse_color_name("Red"), None);
        assert_eq!(parse_color_name("orange"), None);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(color_name(LIME), Some("lime"));
        assert_eq!(color_name(Rgb::new(1, 2, 3)), None);
        for (name, color) in NAMED_COLORS {
            assert_eq!(parse_color_name(name), Some(color));
        }
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(RED), Rgb::new(0, 255, 255));
        assert_eq!(invert(BLACK), WHITE);
        assert_eq!(invert(Rgb::new(10, 128, 200)), Rgb::new(245, 127, 55));
    }
}

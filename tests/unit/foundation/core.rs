use super::*;

#[test]
fn canvas_rejects_oversized_and_empty_dimensions() {
    assert_eq!(Canvas::square(500).to_u16().unwrap(), (500, 500));
    assert!(Canvas::square(70_000).to_u16().is_err());
    assert!(Canvas::square(0).to_u16().is_err());
}

#[test]
fn hex_colors_unpack_channels() {
    assert_eq!(Rgba8::from_hex(0xefefef), Rgba8::opaque(0xef, 0xef, 0xef));
    assert_eq!(Rgba8::from_hex(0x102030).b, 0x30);
}

#[test]
fn premultiply_scales_channels_by_alpha() {
    let c = Rgba8::opaque(255, 128, 0).with_alpha(0.5);
    assert_eq!(c.a, 128);
    assert_eq!(c.to_premul_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::WHITE.to_premul_array(), [255, 255, 255, 255]);
}

#[test]
fn frame_index_advances() {
    assert_eq!(FrameIndex(3).next(), FrameIndex(4));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}

use super::*;
use crate::foundation::core::Viewport;

fn surface(w: u32, h: u32) -> Surface {
    let mut s = Surface::new(Viewport::new(w, h, 1.0).unwrap()).unwrap();
    s.begin_frame(None);
    s
}

const WHITE: Color = Color::rgba(255, 255, 255, 1.0);

#[test]
fn radial_fade_is_strongest_at_center_and_empty_outside() {
    let mut s = surface(64, 64);
    fill_radial_fade(&mut s, Point::new(32.0, 32.0), 20.0, WHITE, 1.0);
    s.end_frame();

    let center = s.pixel(32, 32).unwrap();
    let mid = s.pixel(42, 32).unwrap();
    let outside = s.pixel(60, 32).unwrap();
    assert!(center[3] > 240, "{center:?}");
    assert!(mid[3] > 0 && mid[3] < center[3], "{mid:?}");
    assert_eq!(outside, [0, 0, 0, 0]);
    assert_eq!(s.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn disc_is_solid_inside_radius() {
    let mut s = surface(32, 32);
    fill_disc(&mut s, Point::new(16.0, 16.0), 5.0, Color::rgba(255, 0, 0, 1.0), 1.0);
    s.end_frame();
    assert_eq!(s.pixel(16, 16).unwrap(), [255, 0, 0, 255]);
    assert_eq!(s.pixel(13, 16).unwrap(), [255, 0, 0, 255]);
    assert_eq!(s.pixel(25, 16).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn disc_edges_are_antialiased() {
    let mut s = surface(16, 16);
    fill_disc(&mut s, Point::new(8.0, 8.0), 3.5, WHITE, 1.0);
    s.end_frame();
    let edge = s.pixel(11, 8).unwrap();
    assert!(edge[3] > 0 && edge[3] < 255, "{edge:?}");
}

#[test]
fn opacity_scales_alpha() {
    let mut s = surface(16, 16);
    fill_disc(&mut s, Point::new(8.0, 8.0), 6.0, WHITE, 0.5);
    s.end_frame();
    let px = s.pixel(8, 8).unwrap();
    assert!((126..=130).contains(&px[3]), "{px:?}");
    assert_eq!(px[0], px[3]);
}

#[test]
fn shapes_partially_offscreen_are_clipped() {
    let mut s = surface(16, 16);
    let green = Color::rgba(0, 255, 0, 1.0);
    fill_disc(&mut s, Point::new(-2.0, -2.0), 6.0, green, 1.0);
    fill_radial_fade(&mut s, Point::new(100.0, 100.0), 10.0, green, 1.0);
    s.end_frame();
    assert_eq!(s.pixel(0, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(s.pixel(15, 15).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn degenerate_inputs_draw_nothing() {
    let mut s = surface(8, 8);
    fill_disc(&mut s, Point::new(4.0, 4.0), 0.0, WHITE, 1.0);
    fill_radial_fade(&mut s, Point::new(f64::NAN, 4.0), 3.0, WHITE, 1.0);
    fill_radial_fade(&mut s, Point::new(4.0, 4.0), 3.0, WHITE, 0.0);
    s.end_frame();
    assert!(s.data().iter().all(|&b| b == 0));
}

// Host-side tests for the interaction state tracker.

use amphora_web::core::*;
use glam::Vec3;

fn dragging(button: PointerButton) -> InteractionState {
    let mut s = InteractionState::default();
    s.on_pointer_down(button);
    s
}

#[test]
fn pointer_down_and_up_toggle_only_their_flag() {
    let mut s = InteractionState::default();
    s.on_pointer_down(PointerButton::Primary);
    s.on_pointer_down(PointerButton::Middle);
    assert!(s.buttons.primary && s.buttons.middle && !s.buttons.secondary);

    s.on_pointer_up(PointerButton::Primary);
    assert!(!s.buttons.primary);
    assert!(s.buttons.middle);
}

#[test]
fn pointer_leave_clears_all_flags() {
    let mut s = InteractionState::default();
    s.on_pointer_down(PointerButton::Primary);
    s.on_pointer_down(PointerButton::Secondary);
    s.on_pointer_down(PointerButton::Middle);

    s.on_pointer_leave();
    assert_eq!(s.buttons, ButtonState::default());

    // Leaving with only one flag set also clears everything.
    s.on_pointer_down(PointerButton::Secondary);
    s.on_pointer_leave();
    assert!(!s.buttons.any());
}

#[test]
fn dom_button_codes_map_to_buttons() {
    assert_eq!(PointerButton::from_dom(0), Some(PointerButton::Primary));
    assert_eq!(PointerButton::from_dom(1), Some(PointerButton::Middle));
    assert_eq!(PointerButton::from_dom(2), Some(PointerButton::Secondary));
}

#[test]
fn wheel_adds_scaled_delta_to_every_axis() {
    let mut s = InteractionState::default();
    s.transform.scale = Vec3::new(10.0, 20.0, 30.0);
    let out = s.on_wheel(-50.0, false);
    assert!(!out.consumed);
    assert_eq!(s.transform.scale, Vec3::new(15.0, 25.0, 35.0));

    s.on_wheel(100.0, false);
    assert_eq!(s.transform.scale, Vec3::new(5.0, 15.0, 25.0));
}

#[test]
fn wheel_clamp_is_all_or_nothing() {
    let mut s = InteractionState::default();
    s.transform.scale = Vec3::new(2.0, 50.0, 50.0);
    // d = -5: x would go to -3, so every axis collapses.
    s.on_wheel(50.0, false);
    assert_eq!(s.transform.scale, Vec3::ZERO);
}

#[test]
fn wheel_reaching_exactly_zero_is_not_clamped_elsewhere() {
    let mut s = InteractionState::default();
    s.transform.scale = Vec3::new(5.0, 8.0, 9.0);
    s.on_wheel(50.0, false);
    assert_eq!(s.transform.scale, Vec3::new(0.0, 3.0, 4.0));
}

#[test]
fn wheel_with_modifier_moves_depth_and_consumes_event() {
    let mut s = InteractionState::default();
    let scale_before = s.transform.scale;
    let depth_before = s.transform.depth;
    let out = s.on_wheel(-30.0, true);
    assert!(out.consumed);
    assert_eq!(s.transform.depth, depth_before + 3.0);
    assert_eq!(s.transform.scale, scale_before);
}

#[test]
fn wheel_with_modifier_cannot_push_depth_below_minimum() {
    let mut s = InteractionState::default();
    for _ in 0..100 {
        s.on_wheel(100.0, true);
    }
    assert_eq!(s.transform.depth, MIN_DEPTH);
    assert!(build_matrix(&s.transform, 640.0, 480.0).is_finite());

    // Scrolling back out moves away from the floor again.
    s.on_wheel(-20.0, true);
    assert_eq!(s.transform.depth, MIN_DEPTH + 2.0);
}

#[test]
fn shifted_wheel_reads_the_horizontal_axis() {
    // Shift+wheel arrives as deltaX with deltaY = 0.
    assert_eq!(wheel_delta(100.0, 0.0, true), 100.0);
    assert_eq!(wheel_delta(100.0, -30.0, true), -30.0);
    assert_eq!(wheel_delta(100.0, 0.0, false), 0.0);

    let mut s = InteractionState::default();
    let before = s.transform.depth;
    s.on_wheel(wheel_delta(-50.0, 0.0, true), true);
    assert_eq!(s.transform.depth, before + 5.0);
}

#[test]
fn primary_drag_rotates_y_and_x() {
    let mut s = dragging(PointerButton::Primary);
    s.on_pointer_move(50.0, 25.0, false);
    assert_eq!(s.transform.rotation, Vec3::new(0.25, 0.5, 0.0));
}

#[test]
fn secondary_drag_rotates_z_and_x() {
    let mut s = dragging(PointerButton::Secondary);
    s.on_pointer_move(50.0, 25.0, false);
    assert_eq!(s.transform.rotation, Vec3::new(0.25, 0.0, 0.5));
}

#[test]
fn middle_drag_pans_by_raw_pixels() {
    let mut s = dragging(PointerButton::Middle);
    s.on_pointer_move(7.0, -3.0, false);
    assert_eq!(s.transform.translation, Vec3::new(7.0, -3.0, 0.0));
    assert_eq!(s.transform.rotation, Vec3::ZERO);
}

#[test]
fn middle_drag_pans_in_device_pixels() {
    let mut s = dragging(PointerButton::Middle);
    s.set_pixel_ratio(2.0);
    s.on_pointer_move(7.0, -3.0, false);
    assert_eq!(s.transform.translation, Vec3::new(14.0, -6.0, 0.0));

    // Rotation stays in pointer units.
    let mut s = dragging(PointerButton::Primary);
    s.set_pixel_ratio(2.0);
    s.on_pointer_move(50.0, 25.0, false);
    assert_eq!(s.transform.rotation, Vec3::new(0.25, 0.5, 0.0));
}

#[test]
fn unusable_pixel_ratio_falls_back_to_one() {
    let mut s = InteractionState::default();
    assert_eq!(s.pixel_ratio, 1.0);
    s.set_pixel_ratio(0.0);
    assert_eq!(s.pixel_ratio, 1.0);
    s.set_pixel_ratio(f32::NAN);
    assert_eq!(s.pixel_ratio, 1.0);
    s.set_pixel_ratio(1.5);
    assert_eq!(s.pixel_ratio, 1.5);
}

#[test]
fn modifier_drags_rotate_single_axes() {
    let mut s = dragging(PointerButton::Primary);
    s.on_pointer_move(50.0, 25.0, true);
    assert_eq!(s.transform.rotation, Vec3::new(0.25, 0.0, 0.0));

    let mut s = dragging(PointerButton::Secondary);
    s.on_pointer_move(50.0, 25.0, true);
    assert_eq!(s.transform.rotation, Vec3::new(0.0, 0.5, 0.0));

    let mut s = dragging(PointerButton::Middle);
    s.on_pointer_move(50.0, 25.0, true);
    assert_eq!(s.transform.rotation, Vec3::new(0.0, 0.0, 0.5));
    assert_eq!(s.transform.translation, Vec3::ZERO);
}

#[test]
fn reset_recentres_and_restores_defaults() {
    let mut s = dragging(PointerButton::Primary);
    s.on_pointer_move(100.0, 100.0, false);
    s.on_wheel(-10.0, false);
    s.reset(640.0, 480.0);
    assert_eq!(s.transform, TransformState::centered(640.0, 480.0));
    assert_eq!(s.transform.translation, Vec3::new(320.0, 240.0, 0.0));
    assert!(s.buttons.primary);
}

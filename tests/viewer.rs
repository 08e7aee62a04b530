// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! End-to-end tests over a real variable font
//!
//! Vazirmatn declares a single `wght` axis, 100–900 with default 400, and
//! nine named instances at the standard hundred stops.

use vf_viewer::display::{compose, Frame};
use vf_viewer::face::FaceStore;
use vf_viewer::state::{Control, SLNT, WDTH, WGHT};
use vf_viewer::{Rgb, Session};

fn session(text: &str) -> Session {
    let face = FaceStore::from_data(font_test_data::VAZIRMATN_VAR).unwrap();
    Session::new(face, text.to_string(), Rgb::BLACK)
}

#[test]
fn axis_model_from_font() {
    let s = session("");
    let [wght, wdth, slnt] = s.face.axes();

    assert!(wght.present);
    assert_eq!((wght.min, wght.max, wght.default), (100, 900, 400));
    // Nine instances at 100, 200, …, 900 infer the standard weight step.
    assert_eq!(wght.step, 100);

    assert!(!wdth.present);
    assert_eq!(wdth.step, 2);
    assert!(!slnt.present);
    assert_eq!(slnt.step, 1);
}

#[test]
fn initial_state_matches_defaults() {
    let s = session("");
    assert_eq!(s.state.coords, [400, 100, 0]);
    assert!(s.state.enabled.iter().all(|e| !e));
}

#[test]
fn weight_steps_and_clamps() {
    let mut s = session("");

    assert!(s.control(Control::Increment(WGHT)));
    assert_eq!(s.state.coords[WGHT], 500);
    assert!(s.control(Control::Decrement(WGHT)));
    assert_eq!(s.state.coords[WGHT], 400);

    for _ in 0..20 {
        s.control(Control::Increment(WGHT));
    }
    assert_eq!(s.state.coords[WGHT], 900);
}

#[test]
fn undeclared_axes_are_inert() {
    let mut s = session("");
    assert!(!s.control(Control::Increment(WDTH)));
    assert!(!s.control(Control::Decrement(SLNT)));
    assert_eq!(s.state.coords, [400, 100, 0]);
}

#[test]
fn missing_set_toggle_is_clean() {
    let mut s = session("");
    let absent = (0..9)
        .find(|i| !s.sets.present(*i))
        .expect("some set absent");
    let before = s.state.enabled;
    assert!(!s.control(Control::ToggleSet(absent)));
    assert_eq!(s.state.enabled, before);
}

#[test]
fn compose_draws_text() {
    let mut s = session("Hamburg");
    let mut frame = Frame::new(600, 150);
    compose(&mut s, &mut frame, 1.0);
    assert!(frame.pixels().iter().any(|px| *px != 0x00FF_FFFF));
}

#[test]
fn compose_is_idempotent() {
    let mut s = session("Hamburg\nwolves 0123");
    let mut frame = Frame::new(600, 200);
    compose(&mut s, &mut frame, 1.0);
    let first = frame.pixels().to_vec();
    compose(&mut s, &mut frame, 1.0);
    assert_eq!(frame.pixels(), &first[..]);
}

#[test]
fn weight_change_alters_output() {
    let mut s = session("Hamburg");
    let mut frame = Frame::new(600, 150);
    compose(&mut s, &mut frame, 1.0);
    let regular = frame.pixels().to_vec();

    assert!(s.control(Control::Increment(WGHT)));
    compose(&mut s, &mut frame, 1.0);
    assert_ne!(frame.pixels(), &regular[..]);
}

//! Integration tests for rendering posters onto a surface
//!
//! These tests drive the public `render` entry point against a recording
//! surface with deterministic fake measurement.

use poster_render::{render, PosterOptions, RecordingSurface, RenderConverter, Surface};
use poster_text::{Extent, MeasureFn, TextMeasurer};

const EPSILON: f32 = 1e-3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Surface whose text is `advance` wide per char and `line_height` tall
fn surface(
    width: f32,
    height: f32,
    advance: f32,
    line_height: f32,
) -> RecordingSurface<impl TextMeasurer> {
    init_tracing();
    RecordingSurface::new(
        Extent::new(width, height),
        MeasureFn::new(move |text: &str| {
            Extent::new(text.chars().count() as f32 * advance, line_height)
        }),
    )
}

#[test]
fn test_render_twice_replaces_content() {
    let mut target = surface(1000.0, 500.0, 20.0, 30.0);
    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG\n@@ since 1888";

    let first = render(&mut target, text, None);
    let first_lines = target.lines().to_vec();
    let first_top = target.block_top();

    let second = render(&mut target, text, None);

    assert_eq!(first, second);
    assert_eq!(target.lines(), first_lines.as_slice());
    assert_eq!(target.block_top(), first_top);
    assert_eq!(target.lines().len(), second.line_count());
    assert_eq!(target.render_passes(), 2);
}

#[test]
fn test_blank_line_separates_paragraphs() {
    let mut target = surface(1000.0, 500.0, 20.0, 30.0);
    let layout = render(&mut target, "HOT\n\nDEALS", None);

    let texts: Vec<_> = target.lines().iter().map(|line| line.text.as_str()).collect();
    assert_eq!(texts, vec!["HOT", "DEALS"]);
    assert_ne!(layout.lines[0].paragraph, layout.lines[1].paragraph);
}

#[test]
fn test_small_text_marker_scales_to_minimum() {
    let mut target = surface(1000.0, 500.0, 10.0, 20.0);
    let layout = render(&mut target, "@@ hello world", None);

    assert_eq!(layout.line_count(), 1);
    let line = &layout.lines[0];
    assert!(line.small_text);
    assert_eq!(line.text, "hello world");
    assert!((line.scaled_height() - 0.044 * 500.0).abs() < EPSILON);
    assert!((line.scaled_height() - 0.2 * 500.0).abs() > 1.0);
    assert!(target.lines()[0].small_text);
}

#[test]
fn test_width_fill_versus_height_cap() {
    let mut target = surface(1000.0, 500.0, 100.0, 50.0);
    let options = PosterOptions::new().max_line_height(0.2);

    // 10 chars fill exactly 1000 wide at 50 high, a 0.1 ratio
    let layout = render(&mut target, "FULL WIDTH", Some(&options));
    let line = &layout.lines[0];
    assert_eq!(layout.line_count(), 1);
    assert!((line.scale - 1.0).abs() < EPSILON);
    assert!(line.x.abs() < EPSILON);

    // Filling the width would make "TALL" 125 high; it is capped at 100
    let layout = render(&mut target, "TALL", Some(&options));
    let line = &layout.lines[0];
    assert!((line.scaled_height() - 100.0).abs() < EPSILON);
    assert!((line.scale - 2.0).abs() < EPSILON);
    assert!((line.x - 100.0).abs() < EPSILON);
}

#[test]
fn test_missing_options_equal_explicit_defaults() {
    let text = "SUMMER SALE EVERYTHING MUST GO\n@@ while stocks last";
    let explicit = PosterOptions::new()
        .max_line_height(0.2)
        .min_line_height(0.044)
        .line_spacing(0.0);

    let mut defaulted = surface(900.0, 600.0, 12.0, 18.0);
    let mut configured = surface(900.0, 600.0, 12.0, 18.0);

    assert_eq!(
        render(&mut defaulted, text, None),
        render(&mut configured, text, Some(&explicit))
    );
    assert_eq!(defaulted.lines(), configured.lines());
}

#[test]
fn test_options_from_json() {
    let options = PosterOptions::from_json(r#"{"lineSpacing": 10, "theme": "dark"}"#).unwrap();
    let mut target = surface(800.0, 400.0, 10.0, 20.0);
    let layout = render(&mut target, "ONE\nTWO", Some(&options));

    let first = &layout.lines[0];
    assert!((layout.lines[1].y - (first.scaled_height() + 10.0)).abs() < EPSILON);
}

#[test]
fn test_headline_scenario() {
    let mut target = surface(800.0, 400.0, 10.0, 20.0);
    let layout = render(&mut target, "@@ small\nBIG HEADLINE", None);

    assert_eq!(layout.line_count(), 2);

    let small = &layout.lines[0];
    assert_eq!(small.text, "small");
    assert!(small.small_text);
    assert!((small.scaled_height() - 17.6).abs() < EPSILON);

    // Filling 800 wide would be 133 px tall, so the headline is capped at 80
    let headline = &layout.lines[1];
    assert_eq!(headline.text, "BIG HEADLINE");
    assert!(!headline.small_text);
    assert!((headline.scaled_height() - 80.0).abs() < EPSILON);
    assert!((headline.x - 160.0).abs() < EPSILON);
    assert!((headline.y - 17.6).abs() < EPSILON);

    assert!((layout.total_height - 97.6).abs() < EPSILON);
    assert!((layout.block_top - 151.2).abs() < EPSILON);
    assert!((target.block_top() - 151.2).abs() < EPSILON);
}

#[test]
fn test_render_model_snapshot() {
    let mut target = surface(800.0, 400.0, 10.0, 20.0);
    let layout = render(&mut target, "@@ small\nBIG HEADLINE", None);
    let model = RenderConverter::new().convert(&layout).unwrap();

    assert_eq!(model.items.len(), 3);
    let lines: Vec<_> = model.lines().collect();
    assert!((lines[1].bounds.y - (151.2 + 17.6)).abs() < 1e-2);
    assert!((lines[1].bounds.width - 480.0).abs() < 1e-2);

    let json = model.to_json_pretty().unwrap();
    assert!(json.contains("\"BIG HEADLINE\""));
}

#[test]
fn test_resize_takes_effect_on_next_render() {
    let mut target = surface(800.0, 400.0, 10.0, 20.0);
    render(&mut target, "BIG", None);
    let before = target.lines()[0].scale;

    target.resize(Extent::new(400.0, 200.0));
    assert_eq!(target.size(), Extent::new(400.0, 200.0));
    render(&mut target, "BIG", None);

    assert!((target.lines()[0].scale - before / 2.0).abs() < EPSILON);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_rerender_is_idempotent(
            text in "(@@ )?[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}(\n(@@ )?[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}){0,3}",
            width in 200.0f32..1500.0,
            height in 200.0f32..1500.0,
        ) {
            let mut target = surface(width, height, 11.0, 17.0);
            let first = render(&mut target, &text, None);
            let first_lines = target.lines().to_vec();
            let second = render(&mut target, &text, None);

            prop_assert_eq!(first, second);
            prop_assert_eq!(target.lines(), first_lines.as_slice());
        }
    }
}

//! Layout properties across many inputs
//!
//! Uses a proportional oracle (narrow ASCII, wide CJK) so break points are
//! not all evenly spaced.

use wm_layout::{
    FontDescriptor, LayoutConfig, LayoutError, WatermarkOptions, break_lines, compute_layout,
};

fn proportional(s: &str, _: &FontDescriptor) -> f64 {
    s.chars()
        .map(|c| match c {
            'i' | 'l' | '.' | ' ' => 4.0,
            'm' | 'w' | 'M' | 'W' => 13.0,
            c if c.is_ascii() => 9.0,
            _ => 18.0,
        })
        .sum()
}

const SAMPLES: &[&str] = &[
    "",
    "a",
    "test",
    "自定义水印",
    "Confidential - do not distribute",
    "mmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmmm",
    "内部资料 internal use only 请勿外传 2024-06-01",
    "illillillillillillillillillillillillillill",
];

const WIDTHS: &[f64] = &[20.0, 37.5, 64.0, 100.0, 200.0, 1000.0];

// ============================================================================
// LINE BREAKING
// ============================================================================

#[test]
fn test_lines_reconstruct_input() {
    let font = FontDescriptor::default();
    for text in SAMPLES {
        for &width in WIDTHS {
            let result = break_lines(&mut proportional, text, width, &font).unwrap();
            assert_eq!(result.lines.concat(), *text, "width {}", width);
            assert!(result.lines.iter().all(|line| !line.is_empty()));
        }
    }
}

#[test]
fn test_lines_fit_except_last() {
    let font = FontDescriptor::default();
    for text in SAMPLES {
        for &width in WIDTHS {
            let result = break_lines(&mut proportional, text, width, &font).unwrap();
            let Some((_, wrapped)) = result.lines.split_last() else {
                continue;
            };
            for line in wrapped {
                assert!(
                    proportional(line, &font) <= width,
                    "{:?} wider than {} in {:?}",
                    line,
                    width,
                    text
                );
            }
        }
    }
}

#[test]
fn test_wider_limit_never_adds_lines() {
    let font = FontDescriptor::default();
    for text in SAMPLES {
        let counts: Vec<usize> = WIDTHS
            .iter()
            .map(|&w| break_lines(&mut proportional, text, w, &font).unwrap().lines.len())
            .collect();
        assert!(counts.windows(2).all(|pair| pair[1] <= pair[0]), "{:?}: {:?}", text, counts);
    }
}

#[test]
fn test_empty_string_for_any_width() {
    for &width in WIDTHS {
        let font = FontDescriptor::new(format!("{}px serif", width));
        let result = break_lines(&mut proportional, "", width, &font).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.max_width_used, 0.0);
    }
}

#[test]
fn test_degenerate_single_character() {
    let font = FontDescriptor::default();
    let result = break_lines(&mut proportional, "水", 5.0, &font).unwrap();
    assert_eq!(result.lines, vec!["水"]);
}

// ============================================================================
// CANVAS SIZING
// ============================================================================

#[test]
fn test_layout_is_idempotent() {
    let texts: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();
    let config = LayoutConfig::default().with_rotation_degrees(-30.0);
    let first = compute_layout(&mut proportional, &texts, &config).unwrap();
    let second = compute_layout(&mut proportional, &texts, &config).unwrap();
    assert_eq!(first.plan, second.plan);
    assert_eq!(first.block, second.block);
}

#[test]
fn test_rotated_block_stays_on_canvas() {
    let texts = vec![
        "Confidential - do not distribute".to_string(),
        "内部资料".to_string(),
    ];
    for deg in [0.0, -1.0, -15.0, -30.0, -45.0, -60.0, -89.5, -90.0] {
        let config = LayoutConfig::default()
            .with_rotation_degrees(deg)
            .with_tile_margins(0.0, 0.0);
        let plan = compute_layout(&mut proportional, &texts, &config).unwrap().plan;
        let (w, h) = (plan.content_width, plan.content_height);
        for (x, y) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
            let (cx, cy) = plan.map_point(x, y);
            assert!(cx >= -1e-9 && cx <= plan.width as f64 + 1.0, "deg {}: x {}", deg, cx);
            assert!(cy >= -1e-9 && cy <= plan.height as f64 + 1.0, "deg {}: y {}", deg, cy);
        }
    }
}

#[test]
fn test_options_to_layout() {
    let options = WatermarkOptions::from_json(
        r#"{
            "textArr": ["ab", "cd"],
            "maxWidth": 200,
            "minWidth": 120,
            "lineHeight": 24,
            "deg": -45,
            "marginRight": 150,
            "marginBottom": 50
        }"#,
    )
    .unwrap();
    let config = options.into_config().unwrap();
    let layout = compute_layout(&mut proportional, config.texts(), config.layout()).unwrap();
    assert_eq!((layout.plan.width, layout.plan.height), (268, 168));
}

#[test]
fn test_invalid_rotation_rejected_at_layout() {
    let config = LayoutConfig::default().with_rotation_degrees(45.0);
    let err = compute_layout(&mut proportional, &["a".to_string()], &config).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
}

//! End-to-end layout passes over small trees.

use flexframe::{
    apply_layout, apply_layout_with, measure, Align, Direction, Frame, Justify, LayoutHost,
    LayoutNode, LayoutOptions, Wrap,
};
use taffy::geometry::Size;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn leaf(width: f32, height: f32) -> LayoutNode {
    LayoutNode::new().with_intrinsic_size(width, height)
}

fn frames(node: &LayoutNode) -> Vec<Frame> {
    node.children().iter().map(LayoutNode::frame).collect()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// =============================================================================
// Grow / shrink
// =============================================================================

#[test]
fn test_grow_splits_leftover_equally() {
    init_logging();
    let mut root = LayoutNode::new()
        .with_width(300.0)
        .with_child(leaf(100.0, 20.0).with_flex_grow(1.0))
        .with_child(leaf(100.0, 20.0).with_flex_grow(1.0));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], Frame::new(0.0, 0.0, 150.0, 20.0));
    assert_eq!(f[1], Frame::new(150.0, 0.0, 150.0, 20.0));
    assert_eq!(root.frame(), Frame::new(0.0, 0.0, 300.0, 20.0));
}

#[test]
fn test_grow_ratio() {
    let mut root = LayoutNode::new()
        .with_size(400.0, 10.0)
        .with_child(LayoutNode::new().with_flex_grow(1.0))
        .with_child(LayoutNode::new().with_flex_grow(1.0))
        .with_child(LayoutNode::new().with_flex_grow(2.0));

    apply_layout(&mut root, false);

    let widths: Vec<f32> = frames(&root).iter().map(Frame::width).collect();
    assert_eq!(widths, vec![100.0, 100.0, 200.0]);
}

#[test]
fn test_shrink_distributes_deficit() {
    init_logging();
    let mut root = LayoutNode::new()
        .with_width(200.0)
        .with_children((0..3).map(|_| leaf(100.0, 10.0).with_flex_shrink(1.0)));

    apply_layout(&mut root, false);

    let f = frames(&root);
    for frame in &f {
        assert!(approx(frame.width(), 200.0 / 3.0));
    }
    assert!(approx(f[2].max_x(), 200.0));
}

#[test]
fn test_rigid_items_overflow() {
    let mut root = LayoutNode::new()
        .with_size(100.0, 10.0)
        .with_child(leaf(80.0, 10.0))
        .with_child(leaf(80.0, 10.0));

    apply_layout(&mut root, false);

    assert_eq!(frames(&root)[1], Frame::new(80.0, 0.0, 80.0, 10.0));
}

// =============================================================================
// Participation
// =============================================================================

#[test]
fn test_excluded_child_takes_no_space() {
    let mut excluded = LayoutNode::new().with_width(500.0).with_margin(20.0);
    excluded.set_included_in_layout(false);

    let mut root = LayoutNode::new()
        .with_width(300.0)
        .with_child(leaf(100.0, 20.0).with_flex_grow(1.0))
        .with_child(excluded)
        .with_child(leaf(100.0, 20.0).with_flex_grow(1.0));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], Frame::new(0.0, 0.0, 150.0, 20.0));
    assert_eq!(f[1], Frame::ZERO);
    assert_eq!(f[2], Frame::new(150.0, 0.0, 150.0, 20.0));
}

#[test]
fn test_hidden_and_disabled_keep_previous_frames() {
    let stale = Frame::new(9.0, 9.0, 9.0, 9.0);

    let mut hidden = leaf(50.0, 50.0);
    hidden.set_hidden(true);
    hidden.set_frame(stale);

    let mut disabled = leaf(50.0, 50.0).with_child(leaf(5.0, 5.0));
    disabled.set_enabled(false);
    disabled.set_frame(stale);

    let mut root = LayoutNode::new()
        .with_child(hidden)
        .with_child(disabled)
        .with_child(leaf(10.0, 10.0));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], stale);
    assert_eq!(f[1], stale);
    assert_eq!(root.children()[1].children()[0].frame(), Frame::ZERO);
    assert_eq!(f[2], Frame::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(root.frame().size, Size { width: 10.0, height: 10.0 });
}

// =============================================================================
// Wrap and lines
// =============================================================================

#[test]
fn test_wrap_moves_overflow_to_next_line() {
    init_logging();
    let mut root = LayoutNode::new()
        .with_width(100.0)
        .with_wrap(Wrap::Wrap)
        .with_children((0..3).map(|_| leaf(40.0, 10.0)));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], Frame::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(f[1], Frame::new(40.0, 0.0, 40.0, 10.0));
    assert_eq!(f[2], Frame::new(0.0, 10.0, 40.0, 10.0));
    assert_eq!(root.frame().height(), 20.0);
}

#[test]
fn test_flex_count_fixes_items_per_line() {
    let mut root = LayoutNode::new()
        .with_width(1000.0)
        .with_wrap(Wrap::Wrap)
        .with_flex_count(2)
        .with_children((0..5).map(|_| leaf(10.0, 10.0)));

    apply_layout(&mut root, false);

    let ys: Vec<f32> = frames(&root).iter().map(Frame::y).collect();
    assert_eq!(ys, vec![0.0, 0.0, 10.0, 10.0, 20.0]);
}

#[test]
fn test_flex_count_without_wrap_is_ignored() {
    let mut root = LayoutNode::new()
        .with_flex_count(2)
        .with_children((0..4).map(|_| leaf(10.0, 10.0)));

    apply_layout(&mut root, false);

    let xs: Vec<f32> = frames(&root).iter().map(Frame::x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn test_number_of_lines_clips_rest() {
    let mut root = LayoutNode::new()
        .with_width(100.0)
        .with_wrap(Wrap::Wrap)
        .with_flex_number_of_line(1)
        .with_child(LayoutNode::new().with_size(60.0, 10.0).with_child(leaf(5.0, 5.0)))
        .with_child(LayoutNode::new().with_size(60.0, 10.0).with_child(leaf(5.0, 5.0)));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], Frame::new(0.0, 0.0, 60.0, 10.0));
    assert_eq!(f[1], Frame::new(0.0, 0.0, 0.0, 0.0));
    // Clipped subtrees are not visited.
    assert_eq!(root.children()[1].children()[0].frame(), Frame::ZERO);
    assert_eq!(root.frame().height(), 10.0);
}

// =============================================================================
// Justify / align
// =============================================================================

#[test]
fn test_justify_variants() {
    let cases: [(Justify, [f32; 2]); 5] = [
        (Justify::Start, [0.0, 10.0]),
        (Justify::Center, [45.0, 55.0]),
        (Justify::End, [90.0, 100.0]),
        (Justify::StartAround, [34.0, 77.0]),
        (Justify::EndAround, [33.0, 76.0]),
    ];

    for (justify, expected) in cases {
        let mut root = LayoutNode::new()
            .with_size(if justify.is_around() { 120.0 } else { 110.0 }, 10.0)
            .with_justify(justify)
            .with_child(leaf(10.0, 10.0))
            .with_child(leaf(10.0, 10.0));

        apply_layout(&mut root, false);

        let xs: Vec<f32> = frames(&root).iter().map(Frame::x).collect();
        assert_eq!(xs, expected.to_vec(), "{justify:?}");
    }
}

#[test]
fn test_around_gaps_on_retina_grid() {
    // free 101 is 202 half-points over 3 slots: 68, 67, 67
    let mut root = LayoutNode::new()
        .with_size(121.0, 10.0)
        .with_justify(Justify::StartAround)
        .with_child(leaf(10.0, 10.0))
        .with_child(leaf(10.0, 10.0));

    let options = LayoutOptions::new().with_point_scale(2.0);
    apply_layout_with(&mut root, &options);

    let xs: Vec<f32> = frames(&root).iter().map(Frame::x).collect();
    assert_eq!(xs, vec![34.0, 77.5]);
}

#[test]
fn test_around_gaps_stay_even_with_fractional_space() {
    // free 99.9 over 10 gaps: none may differ from 9.99 by more than one point
    for justify in [Justify::StartAround, Justify::EndAround] {
        let mut root = LayoutNode::new()
            .with_size(189.9, 10.0)
            .with_justify(justify)
            .with_children((0..9).map(|_| leaf(10.0, 10.0)));

        apply_layout(&mut root, false);

        let f = frames(&root);
        let mut gaps = vec![f[0].x()];
        gaps.extend(f.windows(2).map(|pair| pair[1].x() - pair[0].max_x()));
        gaps.push(189.9 - f[8].max_x());

        let total: f32 = gaps.iter().sum();
        assert!(approx(total, 99.9), "{justify:?}: {gaps:?}");
        for gap in &gaps {
            assert!((gap - 9.99).abs() <= 1.0, "{justify:?}: {gaps:?}");
        }
    }
}

#[test]
fn test_align_in_column() {
    let cases: [(Align, f32); 4] = [
        (Align::Default, 0.0),
        (Align::Start, 0.0),
        (Align::Center, 20.0),
        (Align::End, 40.0),
    ];

    for (align, expected_x) in cases {
        let mut root = LayoutNode::new()
            .with_direction(Direction::Column)
            .with_size(50.0, 50.0)
            .with_align(align)
            .with_child(leaf(10.0, 10.0));

        apply_layout(&mut root, false);

        assert_eq!(frames(&root)[0].x(), expected_x, "{align:?}");
    }
}

#[test]
fn test_column_with_padding_and_margin() {
    let mut root = LayoutNode::new()
        .with_direction(Direction::Column)
        .with_padding(4.0)
        .with_child(leaf(10.0, 10.0).with_margin(1.0))
        .with_child(leaf(20.0, 5.0));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0], Frame::new(5.0, 5.0, 10.0, 10.0));
    assert_eq!(f[1], Frame::new(4.0, 16.0, 20.0, 5.0));
    assert_eq!(root.frame(), Frame::new(0.0, 0.0, 28.0, 25.0));
}

// =============================================================================
// Origin, insets, sizing sources
// =============================================================================

#[test]
fn test_preserve_origin() {
    let mut root = LayoutNode::new().with_size(10.0, 10.0);
    root.left = Some(3.0);
    root.top = Some(4.0);
    root.set_frame(Frame::new(50.0, 60.0, 1.0, 1.0));

    apply_layout(&mut root, true);
    assert_eq!(root.frame(), Frame::new(53.0, 64.0, 10.0, 10.0));

    apply_layout(&mut root, false);
    assert_eq!(root.frame(), Frame::new(3.0, 4.0, 10.0, 10.0));
}

#[test]
fn test_aspect_ratio_sizes() {
    let mut root = LayoutNode::new()
        .with_child(LayoutNode::new().with_width(40.0).with_aspect_ratio(4.0))
        .with_child(LayoutNode::new().with_height(20.0).with_aspect_ratio(0.5));

    apply_layout(&mut root, false);

    let f = frames(&root);
    assert_eq!(f[0].size, Size { width: 40.0, height: 10.0 });
    assert_eq!(f[1], Frame::new(40.0, 0.0, 10.0, 20.0));
}

#[test]
fn test_root_without_fit_keeps_seeded_size() {
    let mut root = LayoutNode::new().with_child(leaf(10.0, 10.0).with_flex_grow(1.0));
    root.set_fit_size_self(false);
    root.set_frame(Frame::new(0.0, 0.0, 320.0, 480.0));

    apply_layout(&mut root, false);

    assert_eq!(root.frame(), Frame::new(0.0, 0.0, 320.0, 480.0));
    assert_eq!(frames(&root)[0].width(), 320.0);
}

#[test]
fn test_intrinsic_source_is_queried() {
    let mut label = LayoutNode::new();
    let text = String::from("twelve chars");
    label.set_intrinsic_source(move || Size {
        width: text.len() as f32 * 2.0,
        height: 4.0,
    });

    let root = LayoutNode::new().with_padding(1.0).with_child(label);
    assert_eq!(measure(&root), Size { width: 26.0, height: 6.0 });
}

#[test]
fn test_reapply_is_stable() {
    let mut root = LayoutNode::new()
        .with_width(90.0)
        .with_wrap(Wrap::Wrap)
        .with_justify(Justify::StartAround)
        .with_align(Align::Center)
        .with_children((0..5).map(|i| leaf(20.0 + i as f32, 5.0 + i as f32)));

    apply_layout(&mut root, false);
    let first = root.collect_frames();
    apply_layout(&mut root, false);
    assert_eq!(root.collect_frames(), first);
}

// =============================================================================
// Hosts
// =============================================================================

struct Panel {
    node: LayoutNode,
    title: &'static str,
}

impl LayoutHost for Panel {
    fn layout_node(&self) -> &LayoutNode {
        &self.node
    }

    fn layout_node_mut(&mut self) -> &mut LayoutNode {
        &mut self.node
    }
}

#[test]
fn test_host_drives_its_own_subtree() {
    let mut panel = Panel {
        node: LayoutNode::new(),
        title: "inspector",
    };
    panel.configure_layout(|layout| {
        layout.direction = Direction::Column;
        layout.width = Some(80.0);
        layout.add_child(LayoutNode::new().with_height(12.0).with_flex_grow(1.0));
        layout.add_child(LayoutNode::new().with_height(12.0));
    });
    panel.apply_layout(false);

    let node = panel.layout_node();
    assert_eq!(panel.title, "inspector");
    assert_eq!(node.frame(), Frame::new(0.0, 0.0, 80.0, 24.0));
    assert_eq!(node.children()[1].frame(), Frame::new(0.0, 12.0, 0.0, 12.0));
}

use pallet_planner::{
    bucket_sizes, compute_area, compute_curvature_score, partition_into_pallets, sort_for_stack,
    Panel, PanelDraft, PanelSession,
};

fn panel(id: u64, label: &str, length: f64, width: f64, radius: f64, angle_deg: f64) -> Panel {
    Panel::from_draft(id, PanelDraft::new(label, length, width, radius, angle_deg))
}

fn labels(panels: &[Panel]) -> Vec<&str> {
    panels.iter().map(|p| p.label.as_str()).collect()
}

/// 混合正負值與零的樣本
fn sample_panels() -> Vec<Panel> {
    vec![
        panel(1, "A", 127.0, 24.0, 91.0, 30.0),
        panel(2, "B", 127.0, 20.0, 91.0, 45.0),
        panel(3, "C", 96.0, 24.0, 0.0, 15.0),
        panel(4, "D", -10.0, 5.0, 40.0, 0.0),
        panel(5, "E", 127.0, 24.0, -91.0, -30.0),
        panel(6, "F", 0.0, 0.0, 12.0, 90.0),
        panel(7, "G", 110.0, 24.0, 91.0, 30.0),
    ]
}

#[test]
fn test_area_matches_product_for_every_panel() {
    for p in sample_panels() {
        assert_eq!(compute_area(&p), p.length * p.width);
        assert_eq!(p.area(), compute_area(&p));
    }
}

#[test]
fn test_curvature_edge_values() {
    let zero_radius = panel(1, "z", 1.0, 1.0, 0.0, 45.0);
    let score = compute_curvature_score(&zero_radius);
    assert!(score.is_finite() && score > 0.0 && !score.is_nan());

    let flat = panel(2, "f", 1.0, 1.0, 91.0, 0.0);
    assert_eq!(compute_curvature_score(&flat), 0.0);
}

#[test]
fn test_reference_pair_orders_flatter_first() {
    let a = panel(1, "A", 127.0, 24.0, 91.0, 30.0);
    let b = panel(2, "B", 127.0, 20.0, 91.0, 45.0);

    assert!((compute_curvature_score(&a) - 0.00576).abs() < 1e-4);
    assert!((compute_curvature_score(&b) - 0.00864).abs() < 1e-4);
    assert_eq!(labels(&sort_for_stack(&[a.clone(), b.clone()])), vec!["A", "B"]);
    assert_eq!(labels(&sort_for_stack(&[b, a])), vec!["A", "B"]);
}

#[test]
fn test_sort_is_idempotent_permutation() {
    let input = sample_panels();
    let sorted = sort_for_stack(&input);
    assert_eq!(sort_for_stack(&sorted), sorted);

    let mut ids: Vec<u64> = sorted.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=7).collect::<Vec<u64>>());
}

#[test]
fn test_sort_is_independent_of_input_order() {
    let input = sample_panels();
    let mut reversed = input.clone();
    reversed.reverse();
    let mut rotated = input.clone();
    rotated.rotate_left(3);

    let expected = sort_for_stack(&input);
    assert_eq!(sort_for_stack(&reversed), expected);
    assert_eq!(sort_for_stack(&rotated), expected);
    // D 角度為 0 最平，A/E 完全相同以 id 排序，G 面積較小
    assert_eq!(labels(&expected), vec!["D", "A", "E", "G", "B", "F", "C"]);
}

#[test]
fn test_partition_empty_cases() {
    assert!(partition_into_pallets(&sample_panels(), 0).is_empty());
    assert!(partition_into_pallets(&[], 4).is_empty());
}

#[test]
fn test_bucket_sizing_example() {
    assert_eq!(bucket_sizes(6, 4), vec![2, 2, 1, 1]);

    let panels: Vec<Panel> = (1..=6)
        .map(|i| panel(i, &format!("P{}", i), 100.0 - i as f64, 10.0, 50.0, 10.0))
        .collect();
    let sizes: Vec<usize> = partition_into_pallets(&panels, 4)
        .iter()
        .map(Vec::len)
        .collect();
    assert_eq!(sizes, vec![2, 2, 1, 1]);
}

#[test]
fn test_single_pallet_holds_everything_in_stack_order() {
    let panels = vec![
        panel(1, "long-curvy", 127.0, 24.0, 91.0, 45.0),
        panel(2, "long-flat", 127.0, 24.0, 91.0, 30.0),
        panel(3, "long-flat-narrow", 127.0, 20.0, 91.0, 30.0),
        panel(4, "short-flat", 96.0, 24.0, 91.0, 30.0),
    ];
    let pallets = partition_into_pallets(&panels, 1);
    assert_eq!(pallets.len(), 1);
    assert_eq!(pallets[0], sort_for_stack(&panels));
    assert_eq!(
        labels(&pallets[0]),
        vec!["long-flat", "long-flat-narrow", "short-flat", "long-curvy"]
    );
}

#[test]
fn test_session_plan_does_not_mutate_panels() {
    let mut session = PanelSession::new();
    session
        .import_csv("A,127,24,91,30\nB,96,24,91,45\nC,110,24,91,10\n")
        .unwrap();
    let before = session.panels().to_vec();

    let _ = session.plan(None);
    let _ = session.plan(Some(2));

    assert_eq!(session.panels(), before.as_slice());
}

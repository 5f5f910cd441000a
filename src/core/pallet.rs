use crate::core::stack::{cmp_f64, sort_for_stack};
use crate::domain::model::Panel;

/// 每個棧板分到的片數：前 `total % pallet_count` 個多一片。
/// 只列出非空的棧板，`pallet_count > total` 時長度為 `total`。
pub fn bucket_sizes(total: usize, pallet_count: usize) -> Vec<usize> {
    if pallet_count == 0 {
        return Vec::new();
    }

    let base = total / pallet_count;
    let remainder = total % pallet_count;
    (0..pallet_count.min(total))
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

/// Splits panels into `pallet_count` groups by length, longest panels in the earliest pallets,
/// then stack-sorts each group.
///
/// Equal lengths are ordered by ascending id before bucketing so identical panels never
/// shuffle across pallet boundaries. Empty pallets are dropped, so the result may hold
/// fewer than `pallet_count` groups.
pub fn partition_into_pallets(panels: &[Panel], pallet_count: usize) -> Vec<Vec<Panel>> {
    if pallet_count == 0 || panels.is_empty() {
        return Vec::new();
    }

    let mut by_length = panels.to_vec();
    by_length.sort_by(|a, b| cmp_f64(b.length, a.length).then_with(|| a.id.cmp(&b.id)));

    let mut rest = by_length.as_slice();
    let mut pallets = Vec::with_capacity(pallet_count.min(panels.len()));
    for size in bucket_sizes(panels.len(), pallet_count) {
        let (bucket, tail) = rest.split_at(size);
        pallets.push(sort_for_stack(bucket));
        rest = tail;
    }

    pallets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PanelDraft;

    fn panel(id: u64, length: f64, width: f64, radius: f64, angle_deg: f64) -> Panel {
        Panel::from_draft(
            id,
            PanelDraft::new(format!("P{}", id), length, width, radius, angle_deg),
        )
    }

    fn ids(pallets: &[Vec<Panel>]) -> Vec<Vec<u64>> {
        pallets
            .iter()
            .map(|p| p.iter().map(|panel| panel.id).collect())
            .collect()
    }

    #[test]
    fn test_bucket_sizes_front_loads_remainder() {
        assert_eq!(bucket_sizes(6, 4), vec![2, 2, 1, 1]);
        assert_eq!(bucket_sizes(6, 3), vec![2, 2, 2]);
        assert_eq!(bucket_sizes(2, 4), vec![1, 1]);
        assert!(bucket_sizes(5, 0).is_empty());
        assert!(bucket_sizes(0, 3).is_empty());
        assert_eq!(bucket_sizes(3, usize::MAX), vec![1, 1, 1]);
    }

    #[test]
    fn test_zero_pallets_or_no_panels_is_empty() {
        let panels = vec![panel(1, 100.0, 10.0, 50.0, 10.0)];
        assert!(partition_into_pallets(&panels, 0).is_empty());
        assert!(partition_into_pallets(&[], 3).is_empty());
    }

    #[test]
    fn test_single_pallet_is_stack_sorted() {
        let panels = vec![
            panel(1, 127.0, 24.0, 91.0, 45.0),
            panel(2, 127.0, 20.0, 91.0, 30.0),
            panel(3, 127.0, 24.0, 91.0, 30.0),
            panel(4, 96.0, 24.0, 91.0, 30.0),
        ];
        let pallets = partition_into_pallets(&panels, 1);
        // 2/3/4 曲率相同，依面積 3048 > 2540 > 2304
        assert_eq!(ids(&pallets), vec![vec![3, 2, 4, 1]]);
    }

    #[test]
    fn test_longest_panels_land_in_first_pallets() {
        let panels = vec![
            panel(1, 50.0, 10.0, 10.0, 10.0),
            panel(2, 300.0, 10.0, 10.0, 10.0),
            panel(3, 200.0, 10.0, 10.0, 10.0),
            panel(4, 100.0, 10.0, 10.0, 10.0),
            panel(5, 250.0, 10.0, 10.0, 10.0),
            panel(6, 150.0, 10.0, 10.0, 10.0),
        ];
        let pallets = partition_into_pallets(&panels, 4);
        let sizes: Vec<usize> = pallets.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1, 1]);
        // 同曲率同寬：長的面積大，放在下面
        assert_eq!(ids(&pallets), vec![vec![2, 5], vec![3, 6], vec![4], vec![1]]);
    }

    #[test]
    fn test_each_pallet_ordered_by_curvature() {
        let panels = vec![
            panel(1, 300.0, 10.0, 10.0, 90.0),
            panel(2, 290.0, 10.0, 100.0, 10.0),
            panel(3, 100.0, 10.0, 10.0, 45.0),
            panel(4, 90.0, 10.0, 0.0, 0.0),
        ];
        let pallets = partition_into_pallets(&panels, 2);
        assert_eq!(ids(&pallets), vec![vec![2, 1], vec![4, 3]]);
    }

    #[test]
    fn test_more_pallets_than_panels_drops_empty() {
        let panels = vec![
            panel(1, 100.0, 10.0, 10.0, 10.0),
            panel(2, 200.0, 10.0, 10.0, 10.0),
        ];
        let pallets = partition_into_pallets(&panels, 5);
        assert_eq!(ids(&pallets), vec![vec![2], vec![1]]);
    }

    #[test]
    fn test_huge_pallet_count_gives_one_panel_per_pallet() {
        let panels = vec![
            panel(1, 100.0, 10.0, 10.0, 10.0),
            panel(2, 200.0, 10.0, 10.0, 10.0),
        ];
        let pallets = partition_into_pallets(&panels, usize::MAX);
        assert_eq!(ids(&pallets), vec![vec![2], vec![1]]);
    }

    #[test]
    fn test_equal_lengths_split_by_id() {
        let panels = vec![
            panel(7, 127.0, 10.0, 10.0, 10.0),
            panel(3, 127.0, 10.0, 10.0, 10.0),
            panel(5, 127.0, 10.0, 10.0, 10.0),
            panel(1, 127.0, 10.0, 10.0, 10.0),
        ];
        let pallets = partition_into_pallets(&panels, 2);
        assert_eq!(ids(&pallets), vec![vec![1, 3], vec![5, 7]]);

        let mut reversed = panels.clone();
        reversed.reverse();
        assert_eq!(partition_into_pallets(&reversed, 2), pallets);
    }

    #[test]
    fn test_partition_preserves_every_panel() {
        let panels: Vec<Panel> = (1..=11)
            .map(|i| panel(i, (i % 4) as f64 * 10.0, 5.0, i as f64, 15.0))
            .collect();
        let pallets = partition_into_pallets(&panels, 3);
        let mut all: Vec<u64> = pallets.iter().flatten().map(|p| p.id).collect();
        all.sort_unstable();
        assert_eq!(all, (1..=11).collect::<Vec<u64>>());
        assert_eq!(
            pallets.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![4, 4, 3]
        );
    }
}

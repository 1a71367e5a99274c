use super::*;

#[path = "fixtures.rs"]
mod fixtures;

#[test]
fn test_case_variants_merge() {
    let records = vec![
        fixtures::human("2025-01-30", "lung", true, 100),
        fixtures::human("2025-01-30", "Lung", true, 50),
    ];
    let refs: Vec<&CensusRecord> = records.iter().collect();
    let buckets = aggregate_by_tissue(&refs).unwrap();
    assert_eq!(
        buckets,
        vec![TissueBucket {
            tissue: "Lung".to_string(),
            n_cells: 150,
        }]
    );
}

#[test]
fn test_separator_variants_merge() {
    let records = vec![
        fixtures::human("2025-01-30", "bone_marrow", true, 40),
        fixtures::human("2025-01-30", "bone marrow", false, 60),
        fixtures::human("2025-01-30", "Bone__Marrow", false, 1),
    ];
    let refs: Vec<&CensusRecord> = records.iter().collect();
    let totals = tissue_totals(&refs).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Bone Marrow"), Some(&101));
}

#[test]
fn test_aggregate_preserves_total() {
    let records = fixtures::mixed_records();
    let refs: Vec<&CensusRecord> = records.iter().collect();
    let buckets = aggregate_by_tissue(&refs).unwrap();
    let bucket_sum: u64 = buckets.iter().map(|b| b.n_cells).sum();
    let record_sum: u64 = records.iter().map(|r| r.n_cells).sum();
    assert_eq!(bucket_sum, record_sum);
}

#[test]
fn test_aggregate_empty() {
    assert!(aggregate_by_tissue(&[]).unwrap().is_empty());
}

#[test]
fn test_tissue_sum_overflow_is_error() {
    let records = vec![
        fixtures::human("2025-01-30", "lung", true, u64::MAX),
        fixtures::human("2025-01-30", "Lung", true, 1),
    ];
    let refs: Vec<&CensusRecord> = records.iter().collect();
    assert_eq!(
        aggregate_by_tissue(&refs),
        Err(AggregateError::TissueOverflow {
            tissue: "Lung".to_string(),
        })
    );
}

#[test]
fn test_total_cells_checked() {
    assert_eq!(total_cells(&[]), Ok(0));
    assert_eq!(total_cells(&[1, 2, 3]), Ok(6));
    assert_eq!(
        total_cells(&[u64::MAX, 1]),
        Err(AggregateError::TotalOverflow)
    );
}

use csvcloak::{
    anonymization_report, apply_differential_privacy, apply_k_anonymity, equivalence_classes,
    load_dataset, save_dataset, Column, ColumnData, Strategy, Table,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempdir::TempDir;

fn ten_row_table() -> Table {
    let ages = vec![
        Some(23.0),
        Some(27.0),
        Some(31.0),
        Some(35.0),
        Some(39.0),
        Some(43.0),
        Some(47.0),
        Some(51.0),
        Some(55.0),
        Some(59.0),
    ];
    let cities = vec![
        Some("Bern".to_string()),
        Some("Bern".to_string()),
        Some("Bern".to_string()),
        Some("Bern".to_string()),
        Some("Basel".to_string()),
        Some("Bern".to_string()),
        Some("Bern".to_string()),
        Some("Winterthur".to_string()),
        Some("Bern".to_string()),
        Some("Bern".to_string()),
    ];

    Table::new(vec![
        Column::new("age", ColumnData::Number(ages)),
        Column::new("city", ColumnData::Text(cities)),
    ])
    .unwrap()
}

#[test]
fn dp_then_k_anonymity_on_a_ten_row_dataset() {
    let original = ten_row_table();
    let mut rng = StdRng::seed_from_u64(42);

    let perturbed =
        apply_differential_privacy(&original, &["age".to_string()], 1.0, &mut rng).unwrap();

    let (before, after) = match (
        original.column("age").unwrap().data(),
        perturbed.column("age").unwrap().data(),
    ) {
        (ColumnData::Number(before), ColumnData::Number(after)) => (before, after),
        _ => panic!("expected numeric age columns"),
    };
    for (original_value, noised) in before.iter().zip(after) {
        let (original_value, noised) = (original_value.unwrap(), noised.unwrap());
        assert!(noised.is_finite());
        assert_ne!(original_value, noised);
        assert_eq!((noised * 100.0).round() / 100.0, noised);
    }

    let anonymized = apply_k_anonymity(
        &perturbed,
        &["city".to_string()],
        2,
        Strategy::Suppression,
        &mut rng,
    )
    .unwrap();

    let cities = match anonymized.column("city").unwrap().data() {
        ColumnData::Text(values) => values.clone(),
        _ => panic!("expected a text city column"),
    };
    // the two singleton cities are suppressed to length-matching * runs
    assert_eq!(cities[4].as_deref(), Some("*****"));
    assert_eq!(cities[7].as_deref(), Some("**********"));
    // the eight-row group is untouched
    for (row, city) in cities.iter().enumerate() {
        if row != 4 && row != 7 {
            assert_eq!(city.as_deref(), Some("Bern"));
        }
    }

    // post-transform, every class over the pre-transform data either had
    // size >= 2 or had all of its rows rewritten
    let classes = equivalence_classes(&perturbed, &["city".to_string()]).unwrap();
    for rows in classes.values() {
        if rows.len() >= 2 {
            continue;
        }
        for row in rows {
            assert!(cities[*row].as_deref().unwrap().chars().all(|c| c == '*'));
        }
    }

    let report = anonymization_report(&original, &anonymized);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].column, "age");
    assert_eq!(report[1].column, "city");
    assert_eq!(report[1].original_distinct, 3);
    // "Bern" plus two distinct * runs
    assert_eq!(report[1].anonymized_distinct, 3);
    assert_eq!(report[1].privacy_gain, 0);
}

#[test]
fn full_pipeline_through_the_filesystem() {
    let dir = TempDir::new("csvcloak").unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("anonymized.csv");

    fs::write(
        &input,
        "age,zip_code,name\n\
         34,8004,Mia\n\
         29,8004,Noah\n\
         41,8004,Alex\n\
         37,3011,Lukas\n",
    )
    .unwrap();

    let original = load_dataset(&input).unwrap();
    assert_eq!(original.num_rows(), 4);
    assert_eq!(original.num_columns(), 3);

    let mut rng = StdRng::seed_from_u64(7);
    let perturbed =
        apply_differential_privacy(&original, &["age".to_string()], 1.0, &mut rng).unwrap();
    let anonymized = apply_k_anonymity(
        &perturbed,
        &["zip_code".to_string()],
        2,
        Strategy::Generalization,
        &mut rng,
    )
    .unwrap();

    save_dataset(&anonymized, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "age,zip_code,name");
    assert_eq!(lines.len(), 5);
    // the singleton zip code keeps its first two digits
    assert!(lines[4].contains("30**"));
    // the three-row group keeps its zip code
    for line in &lines[1..4] {
        assert!(line.contains("8004"));
    }

    let reloaded = load_dataset(&output).unwrap();
    assert_eq!(reloaded.num_rows(), 4);

    let report = anonymization_report(&original, &reloaded);
    let zip_entry = report.iter().find(|e| e.column == "zip_code").unwrap();
    assert_eq!(zip_entry.original_distinct, 2);
    assert_eq!(zip_entry.anonymized_distinct, 2);
    assert_eq!(zip_entry.privacy_gain, 0);
}

#[test]
fn loading_a_missing_dataset_fails() {
    let dir = TempDir::new("csvcloak").unwrap();
    let result = load_dataset(&dir.path().join("nope.csv"));
    assert!(result.is_err());
}

//! Portfolio forecasting and detailed yield tests

use chrono::NaiveDate;
use harvest_forecast::{
    estimate_detailed_yield, forecast_plots, plant_age_months, plants_per_hectare, Analysis,
    DetailedYieldInput, Month, PlotSnapshot, StageCounts, StagePercentages,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn plot(name: &str, planted: Option<NaiveDate>, analysis: Option<Analysis>) -> PlotSnapshot {
    PlotSnapshot {
        id: Uuid::new_v4(),
        name: name.to_string(),
        farm_name: "Fazenda Santa Rita".to_string(),
        planting_date: planted,
        latest_analysis: analysis,
    }
}

fn analysis(collected_at: NaiveDate) -> Option<Analysis> {
    Some(Analysis {
        counts: StageCounts::new(10, 5, 20, 3, 2),
        collected_at,
    })
}

#[test]
fn test_batch_skips_failures_and_sorts_by_days() {
    let today = date(2025, 10, 1);
    let plots = vec![
        // January sample: window starts at 90 days
        plot("Talhão A", Some(date(2018, 3, 1)), analysis(date(2025, 1, 20))),
        // No analysis yet
        plot("Talhão B", Some(date(2018, 3, 1)), None),
        // August sample: window starts at 0 days
        plot("Talhão C", Some(date(2018, 3, 1)), analysis(date(2025, 8, 5))),
        // October sample: no calibrated rates
        plot("Talhão D", Some(date(2018, 3, 1)), analysis(date(2025, 10, 1))),
        // May sample, planted in the future
        plot("Talhão E", Some(date(2026, 1, 1)), analysis(date(2025, 5, 6))),
    ];

    let outcome = forecast_plots(&plots, today);

    let names: Vec<&str> = outcome.forecasts.iter().map(|f| f.nome.as_str()).collect();
    assert_eq!(names, vec!["Talhão C", "Talhão E", "Talhão A"]);

    let skipped: Vec<Uuid> = outcome.skipped.iter().map(|s| s.id).collect();
    assert_eq!(skipped, vec![plots[1].id, plots[3].id]);

    let days: Vec<u32> = outcome
        .forecasts
        .iter()
        .map(|f| f.forecast.dias_para_colheita)
        .collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));

    // Planted in the future: age clamps to zero
    assert_eq!(outcome.forecasts[1].forecast.sacas_por_hectare, 0.0);
    // Mature plot with 40 grains
    assert_eq!(outcome.forecasts[0].forecast.sacas_por_hectare, 17.6);
}

#[test]
fn test_empty_batch() {
    let outcome = forecast_plots(&[], date(2025, 5, 6));
    assert!(outcome.forecasts.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_plot_snapshot_from_json() {
    let json = r#"{
        "id": "1f0e4c7a-8d7b-4a64-9a0e-2b1c3d4e5f60",
        "name": "Talhão 2",
        "farmName": "Fazenda Boa Vista",
        "plantingDate": "2019-07-06",
        "latestAnalysis": {
            "counts": {"green": 53, "greenYellow": 20, "cherry": 18, "raisin": 8, "dry": 0},
            "collectedAt": "2025-05-06"
        }
    }"#;
    let snapshot: PlotSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.planting_date, Some(date(2019, 7, 6)));
    assert_eq!(snapshot.age_years(date(2025, 5, 6)), 5);
    let analysis = snapshot.latest_analysis.unwrap();
    assert_eq!(analysis.counts.total(), 99);
}

#[test]
fn test_detailed_yield_reference_plot() {
    let input = DetailedYieldInput {
        plants_per_hectare: plants_per_hectare(2.5, 0.7),
        total_fruits_per_plant: 99.0,
        percentages: StagePercentages::from_counts(&StageCounts::new(53, 20, 18, 8, 0)),
        collection_month: Month::Maio,
        plant_age_months: plant_age_months(date(2019, 7, 6), date(2025, 5, 6)),
    };
    assert_eq!(input.plants_per_hectare, 5714);
    assert_eq!(input.plant_age_months, 70);

    let range = estimate_detailed_yield(&input).unwrap();
    assert!((range.sacks - 30.94).abs() < 1e-9);
    assert_eq!(range.floor, 29.39);
    assert_eq!(range.ceiling, 32.49);
    assert_eq!(range.to_string(), "29.39 a 32.49");
}

//! # Summary Unit Tests / 摘要单元测试
//!
//! Tests for summary composition, the temperature block and the ordered
//! records the summary is built from.
//!
//! 测试摘要生成、温度区块以及构成摘要的有序记录。

use coral_cts::core::models::{RunRecord, ThermalRecord};
use coral_cts::reporting::console::colorize_line;
use coral_cts::reporting::summary::CTS_HEADER;
use coral_cts::reporting::{compose_summary, format_celsius, thermal_block};

#[cfg(test)]
mod compose_summary_tests {
    use super::*;

    #[test]
    fn test_single_passing_result() {
        let results: RunRecord = [("tflite_utils_test", true)].into_iter().collect();

        let summary = compose_summary(&results, &ThermalRecord::new());

        assert!(summary.starts_with(CTS_HEADER));
        assert!(summary.ends_with("tflite_utils_test: Passed\n\nOverall Compatibility: Passed\n"));
        assert!(!summary.contains("Max Temperature"));
    }

    #[test]
    fn test_failed_detection_fails_overall() {
        let results: RunRecord = [("lstpu", false), ("tflite_utils_test", true)]
            .into_iter()
            .collect();

        let summary = compose_summary(&results, &ThermalRecord::new());

        assert!(summary.contains("lstpu: Failed\n"));
        assert!(summary.contains("tflite_utils_test: Passed\n"));
        assert!(summary.ends_with("Overall Compatibility: Failed\n"));
    }

    #[test]
    fn test_no_results_passes_vacuously() {
        let summary = compose_summary(&RunRecord::new(), &ThermalRecord::new());

        assert_eq!(
            summary,
            format!("{CTS_HEADER}\nOverall Compatibility: Passed\n")
        );
    }

    #[test]
    fn test_all_passing_results_pass_overall() {
        let results: RunRecord = [("lstpu", true), ("detection_models_test", true)]
            .into_iter()
            .collect();

        let summary = compose_summary(&results, &ThermalRecord::new());

        assert!(summary.ends_with("Overall Compatibility: Passed\n"));
    }

    #[test]
    fn test_results_keep_insertion_order() {
        let results: RunRecord = [("zeta", true), ("alpha", false), ("mid", true)]
            .into_iter()
            .collect();

        let summary = compose_summary(&results, &ThermalRecord::new());

        let zeta = summary.find("zeta: Passed").unwrap();
        let alpha = summary.find("alpha: Failed").unwrap();
        let mid = summary.find("mid: Passed").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_max_temperature_line() {
        let results: RunRecord = [
            ("detection_models_test", true),
            ("classification_models_test", true),
        ]
        .into_iter()
        .collect();
        let thermals: ThermalRecord = [
            ("detection_models_test", 41.5),
            ("classification_models_test", 52.0),
        ]
        .into_iter()
        .collect();

        let summary = compose_summary(&results, &thermals);

        assert!(summary.contains(
            "classification_models_test: Passed\n\nMax Temperature (C): 52.0\nOverall Compatibility: Passed\n"
        ));
    }

    #[test]
    fn test_exact_layout_with_temperature() {
        let results: RunRecord = [("lstpu", true), ("models_benchmark", false)]
            .into_iter()
            .collect();
        let thermals: ThermalRecord = [("models_benchmark", 47.25)].into_iter().collect();

        let summary = compose_summary(&results, &thermals);

        let expected = format!(
            "{CTS_HEADER}lstpu: Passed\nmodels_benchmark: Failed\n\nMax Temperature (C): 47.25\nOverall Compatibility: Failed\n"
        );
        assert_eq!(summary, expected);
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_rerecording_overwrites_in_place() {
        let mut results = RunRecord::new();
        results.insert("first", true);
        results.insert("second", true);
        results.insert("first", false);

        let entries: Vec<_> = results.iter().map(|(name, passed)| (name, *passed)).collect();
        assert_eq!(entries, vec![("first", false), ("second", true)]);
        assert_eq!(results.len(), 2);
        assert!(!results.all_passed());
    }

    #[test]
    fn test_max_celsius() {
        let mut thermals = ThermalRecord::new();
        assert_eq!(thermals.max_celsius(), None);

        thermals.insert("a", 38.0);
        thermals.insert("b", 61.5);
        thermals.insert("c", 44.0);
        assert_eq!(thermals.max_celsius(), Some(61.5));
    }
}

#[cfg(test)]
mod formatting_tests {
    use super::*;

    #[test]
    fn test_format_celsius_keeps_a_decimal() {
        assert_eq!(format_celsius(52.0), "52.0");
        assert_eq!(format_celsius(41.5), "41.5");
        assert_eq!(format_celsius(45.123), "45.123");
    }

    #[test]
    fn test_thermal_block() {
        let thermals: ThermalRecord = [("detection_models_test", 41.5)].into_iter().collect();

        let block = thermal_block(&thermals);

        assert_eq!(
            block,
            "\n-----------------------------------------------------\n\
             Temperatures During Tests\n\
             -----------------------------------------------------\n\
             detection_models_test: 41.5\n\n"
        );
    }

    #[test]
    fn test_colorize_line_leaves_text_intact() {
        colored::control::set_override(false);
        assert_eq!(colorize_line("lstpu: Passed"), "lstpu: Passed");
        assert_eq!(
            colorize_line("Overall Compatibility: Failed"),
            "Overall Compatibility: Failed"
        );
        assert_eq!(colorize_line("Max Temperature (C): 52.0"), "Max Temperature (C): 52.0");
        assert_eq!(colorize_line("#####"), "#####");
    }
}

use crate::image_classifier::interface::CategoryScore;
use std::cmp::Ordering;

pub const DEFAULT_TOP_K: usize = 15;

// NaN scores sort after every real score.
fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Highest scores first, keeping emission order between equal scores.
pub fn rank(scores: &[CategoryScore], top_k: usize) -> Vec<CategoryScore> {
    let mut ranked: Vec<&CategoryScore> = scores.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| descending(a.score, b.score));
    ranked.into_iter().take(top_k).cloned().collect()
}

/// Percent with two decimals, ties rounded away from zero.
pub fn format_line(category: &CategoryScore) -> String {
    let percent = (f64::from(category.score) * 10000.0).round() / 100.0;
    format!("Label: {}, Score: {:.2}%", category.label, percent)
}

pub fn present(scores: &[CategoryScore], top_k: usize) -> Vec<String> {
    rank(scores, top_k).iter().map(format_line).collect()
}

pub fn present_text(scores: &[CategoryScore], top_k: usize) -> String {
    present(scores, top_k).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f32)]) -> Vec<CategoryScore> {
        pairs
            .iter()
            .map(|(label, score)| CategoryScore::new(*label, *score))
            .collect()
    }

    fn score_of(line: &str) -> f64 {
        let percent = line.rsplit("Score: ").next().unwrap().trim_end_matches('%');
        percent.parse().unwrap()
    }

    #[test]
    fn test_three_category_scenario() {
        let input = scores(&[("cat", 0.10), ("dog", 0.70), ("fish", 0.70)]);

        assert_eq!(
            present_text(&input, DEFAULT_TOP_K),
            "Label: dog, Score: 70.00%\nLabel: fish, Score: 70.00%\nLabel: cat, Score: 10.00%"
        );
    }

    #[test]
    fn test_formatting() {
        assert_eq!(
            format_line(&CategoryScore::new("x", 0.8734)),
            "Label: x, Score: 87.34%"
        );
        assert_eq!(
            format_line(&CategoryScore::new("x", 1.0)),
            "Label: x, Score: 100.00%"
        );
        assert_eq!(
            format_line(&CategoryScore::new("x", 0.0)),
            "Label: x, Score: 0.00%"
        );
    }

    #[test]
    fn test_formatting_rounds_ties_up() {
        // both land exactly halfway between two hundredths of a percent
        assert_eq!(
            format_line(&CategoryScore::new("x", 0.03125)),
            "Label: x, Score: 3.13%"
        );
        assert_eq!(
            format_line(&CategoryScore::new("x", 0.15625)),
            "Label: x, Score: 15.63%"
        );
    }

    #[test]
    fn test_truncates_to_top_k() {
        let input: Vec<CategoryScore> = (0..1000)
            .map(|i| CategoryScore::new(format!("class{}", i), (i % 97) as f32 / 97.0))
            .collect();

        let lines = present(&input, DEFAULT_TOP_K);

        assert_eq!(lines.len(), 15);
        for pair in lines.windows(2) {
            assert!(score_of(&pair[0]) >= score_of(&pair[1]));
        }
    }

    #[test]
    fn test_fewer_categories_than_top_k() {
        let input = scores(&[("a", 0.2), ("b", 0.9)]);

        let lines = present(&input, DEFAULT_TOP_K);

        assert_eq!(lines, vec!["Label: b, Score: 90.00%", "Label: a, Score: 20.00%"]);
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(present_text(&[], DEFAULT_TOP_K), "");
        assert!(present(&[], DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_stable_for_equal_scores() {
        let input = scores(&[
            ("first", 0.5),
            ("high", 0.9),
            ("second", 0.5),
            ("third", 0.5),
        ]);

        let ranked = rank(&input, DEFAULT_TOP_K);

        let labels: Vec<&str> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["high", "first", "second", "third"]);
    }

    #[test]
    fn test_present_is_idempotent() {
        let input = scores(&[("a", 0.3), ("b", 0.3), ("c", 0.4)]);

        assert_eq!(present(&input, DEFAULT_TOP_K), present(&input, DEFAULT_TOP_K));
    }

    #[test]
    fn test_nan_scores_sort_last() {
        let input = scores(&[("nan", f32::NAN), ("low", 0.1), ("high", 0.8)]);

        let ranked = rank(&input, DEFAULT_TOP_K);

        let labels: Vec<&str> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["high", "low", "nan"]);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let input = scores(&[("a", 0.1), ("b", 0.9)]);

        let _ = present(&input, 1);

        assert_eq!(input[0].label, "a");
    }
}

//! Pure math behind the ML teaching widgets
//!
//! Every function here is a stateless calculation over a few numeric inputs,
//! recomputed on each render.

use std::collections::BTreeSet;

// ═══════════════════════════════════════════════════════════════════════════════
// Linear Fit
// ═══════════════════════════════════════════════════════════════════════════════

/// Fixed training points for the fit-a-line widget (hours studied vs score)
pub const FIT_POINTS: [(f64, f64); 8] = [
    (10.0, 32.0),
    (20.0, 41.0),
    (30.0, 50.0),
    (40.0, 58.0),
    (50.0, 73.0),
    (60.0, 79.0),
    (70.0, 94.0),
    (80.0, 98.0),
];

/// Mean squared error of the line `y = slope * x + intercept` over FIT_POINTS
pub fn mean_squared_error(slope: f64, intercept: f64) -> f64 {
    let sum: f64 = FIT_POINTS
        .iter()
        .map(|&(x, y)| {
            let residual = y - (slope * x + intercept);
            residual * residual
        })
        .sum();
    sum / FIT_POINTS.len() as f64
}

/// Qualitative rating of a fit against two fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitRating {
    Good,
    Fair,
    Poor,
}

pub const GOOD_FIT_MSE: f64 = 50.0;
pub const FAIR_FIT_MSE: f64 = 200.0;

impl FitRating {
    pub fn classify(mse: f64) -> FitRating {
        if mse < GOOD_FIT_MSE {
            FitRating::Good
        } else if mse < FAIR_FIT_MSE {
            FitRating::Fair
        } else {
            FitRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitRating::Good => "GOOD FIT",
            FitRating::Fair => "FAIR FIT",
            FitRating::Poor => "POOR FIT",
        }
    }
}

/// Slider state for the regression widget
#[derive(Debug, Clone, Copy)]
pub struct RegressionSim {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for RegressionSim {
    fn default() -> Self {
        Self {
            slope: 0.5,
            intercept: 0.0,
        }
    }
}

impl RegressionSim {
    pub fn adjust_slope(&mut self, delta: f64) {
        self.slope = (self.slope + delta).clamp(-3.0, 3.0);
    }

    pub fn adjust_intercept(&mut self, delta: f64) {
        self.intercept = (self.intercept + delta).clamp(-50.0, 100.0);
    }

    pub fn mse(&self) -> f64 {
        mean_squared_error(self.slope, self.intercept)
    }

    pub fn rating(&self) -> FitRating {
        FitRating::classify(self.mse())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Sigmoid Classifier
// ═══════════════════════════════════════════════════════════════════════════════

/// Steepness of the approval curve
pub const SIGMOID_STEEPNESS: f64 = 0.02;
/// Credit score at which approval probability is exactly 0.5
pub const APPROVAL_MIDPOINT: f64 = 700.0;

/// Approval probability `1 / (1 + e^(-k(s - c)))` for credit score `s`
pub fn approval_probability(score: f64) -> f64 {
    1.0 / (1.0 + (-SIGMOID_STEEPNESS * (score - APPROVAL_MIDPOINT)).exp())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditDecision {
    Approved,
    Denied,
}

impl CreditDecision {
    /// Approve at probability 0.5 and above, so the midpoint score approves
    pub fn classify(score: f64) -> CreditDecision {
        if approval_probability(score) >= 0.5 {
            CreditDecision::Approved
        } else {
            CreditDecision::Denied
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditDecision::Approved => "APPROVED",
            CreditDecision::Denied => "DENIED",
        }
    }
}

/// Slider state for the classifier widget
#[derive(Debug, Clone, Copy)]
pub struct ClassifierSim {
    pub score: f64,
}

impl Default for ClassifierSim {
    fn default() -> Self {
        Self { score: 650.0 }
    }
}

impl ClassifierSim {
    pub fn adjust_score(&mut self, delta: f64) {
        self.score = (self.score + delta).clamp(300.0, 850.0);
    }

    pub fn probability(&self) -> f64 {
        approval_probability(self.score)
    }

    pub fn decision(&self) -> CreditDecision {
        CreditDecision::classify(self.score)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Nearest-Centroid Placement
// ═══════════════════════════════════════════════════════════════════════════════

/// A fixed cluster centre. Never updated: placement is a one-shot
/// classification, not an iterative clustering pass.
#[derive(Debug, Clone, Copy)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub name: &'static str,
}

pub const CENTROIDS: [Centroid; 2] = [
    Centroid {
        x: 30.0,
        y: 30.0,
        name: "Cluster A",
    },
    Centroid {
        x: 70.0,
        y: 70.0,
        name: "Cluster B",
    },
];

/// Index of the centroid closest to (x, y) by Euclidean distance.
///
/// The scan uses a strict `<` comparison, so an equidistant point stays with
/// the earliest centroid in iteration order. That tie-break is fixed and
/// relied upon by callers.
pub fn nearest_centroid(centroids: &[Centroid], x: f64, y: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let dist = (x - c.x).powi(2) + (y - c.y).powi(2);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// A placed point labeled with its assigned centroid index
#[derive(Debug, Clone, Copy)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub cluster: usize,
}

/// Canvas state for the cluster widget: a cursor plus the running point list
#[derive(Debug, Clone)]
pub struct ClusterSim {
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub points: Vec<LabeledPoint>,
}

impl Default for ClusterSim {
    fn default() -> Self {
        Self {
            cursor_x: 50.0,
            cursor_y: 50.0,
            points: Vec::new(),
        }
    }
}

impl ClusterSim {
    pub fn move_cursor(&mut self, dx: f64, dy: f64) {
        self.cursor_x = (self.cursor_x + dx).clamp(0.0, 100.0);
        self.cursor_y = (self.cursor_y + dy).clamp(0.0, 100.0);
    }

    /// Classify the cursor position and append it to the point list
    pub fn place_point(&mut self) {
        let cluster = nearest_centroid(&CENTROIDS, self.cursor_x, self.cursor_y);
        self.points.push(LabeledPoint {
            x: self.cursor_x,
            y: self.cursor_y,
            cluster,
        });
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Market-Basket Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// An association rule with a static display confidence. Confidence is not
/// computed from data and plays no part in whether the rule fires.
#[derive(Debug, Clone, Copy)]
pub struct BasketRule {
    pub antecedent: &'static [&'static str],
    pub consequent: &'static str,
    pub confidence_pct: u8,
}

pub const BASKET_ITEMS: [&str; 8] = [
    "bread", "milk", "diapers", "beer", "chips", "salsa", "eggs", "coffee",
];

pub const BASKET_RULES: [BasketRule; 4] = [
    BasketRule {
        antecedent: &["diapers"],
        consequent: "beer",
        confidence_pct: 72,
    },
    BasketRule {
        antecedent: &["bread", "milk"],
        consequent: "eggs",
        confidence_pct: 64,
    },
    BasketRule {
        antecedent: &["chips"],
        consequent: "salsa",
        confidence_pct: 81,
    },
    BasketRule {
        antecedent: &["milk", "coffee"],
        consequent: "bread",
        confidence_pct: 55,
    },
];

impl BasketRule {
    /// A rule fires when its antecedent set is contained in the selection and
    /// the consequent is not already selected
    pub fn fires(&self, selection: &BTreeSet<&str>) -> bool {
        self.antecedent.iter().all(|item| selection.contains(item))
            && !selection.contains(self.consequent)
    }
}

/// Cart state for the basket widget
#[derive(Debug, Clone, Default)]
pub struct BasketSim {
    pub selected: BTreeSet<&'static str>,
    pub cursor: usize,
}

impl BasketSim {
    pub fn move_cursor(&mut self, delta: i32) {
        let len = BASKET_ITEMS.len() as i32;
        self.cursor = (self.cursor as i32 + delta).rem_euclid(len) as usize;
    }

    pub fn toggle_current(&mut self) {
        let item = BASKET_ITEMS[self.cursor];
        if !self.selected.remove(item) {
            self.selected.insert(item);
        }
    }

    /// Rules currently firing against the cart, in catalog order
    pub fn fired_rules(&self) -> Vec<&'static BasketRule> {
        BASKET_RULES.iter().filter(|r| r.fires(&self.selected)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mse_matches_recomputed_reference() {
        // Recompute the reference value independently, term by term
        let (slope, intercept) = (1.0, 20.0);
        let mut reference = 0.0;
        for &(x, y) in FIT_POINTS.iter() {
            let d = y - (slope * x + intercept);
            reference += d * d;
        }
        reference /= FIT_POINTS.len() as f64;

        assert_relative_eq!(mean_squared_error(slope, intercept), reference);
        // Sanity anchor for the fixed dataset
        assert_relative_eq!(reference, 4.875);
    }

    #[test]
    fn test_mse_is_non_negative() {
        for &(m, b) in &[(0.0, 0.0), (-3.0, 100.0), (3.0, -50.0), (1.0, 20.0)] {
            assert!(mean_squared_error(m, b) >= 0.0);
        }
    }

    #[test]
    fn test_fit_rating_thresholds() {
        assert_eq!(FitRating::classify(4.875), FitRating::Good);
        assert_eq!(FitRating::classify(100.0), FitRating::Fair);
        assert_eq!(FitRating::classify(500.0), FitRating::Poor);
    }

    #[test]
    fn test_sigmoid_midpoint_is_exactly_half() {
        // e^0 == 1 exactly, so the midpoint probability is exactly 0.5
        assert_eq!(approval_probability(700.0), 0.5);
        assert_eq!(CreditDecision::classify(700.0), CreditDecision::Approved);
    }

    #[test]
    fn test_scores_above_midpoint_always_approve() {
        for score in [701.0, 710.0, 750.0, 850.0] {
            assert_eq!(CreditDecision::classify(score), CreditDecision::Approved);
            assert!(approval_probability(score) > 0.5);
        }
    }

    #[test]
    fn test_scores_below_midpoint_always_deny() {
        for score in [699.0, 650.0, 500.0, 300.0] {
            assert_eq!(CreditDecision::classify(score), CreditDecision::Denied);
            assert!(approval_probability(score) < 0.5);
        }
    }

    #[test]
    fn test_nearest_centroid_assignment() {
        assert_eq!(nearest_centroid(&CENTROIDS, 20.0, 20.0), 0);
        assert_eq!(nearest_centroid(&CENTROIDS, 80.0, 80.0), 1);
    }

    #[test]
    fn test_equidistant_point_keeps_first_centroid() {
        // (50, 50) is exactly equidistant from both centroids; the strict `<`
        // scan must keep the first one in iteration order.
        assert_eq!(nearest_centroid(&CENTROIDS, 50.0, 50.0), 0);
    }

    #[test]
    fn test_place_point_appends_with_label() {
        let mut sim = ClusterSim::default();
        sim.cursor_x = 80.0;
        sim.cursor_y = 80.0;
        sim.place_point();
        assert_eq!(sim.points.len(), 1);
        assert_eq!(sim.points[0].cluster, 1);

        sim.clear();
        assert!(sim.points.is_empty());
    }

    #[test]
    fn test_diapers_alone_fires_beer_rule() {
        let selection: BTreeSet<&str> = ["diapers"].into_iter().collect();
        assert!(BASKET_RULES[0].fires(&selection));
    }

    #[test]
    fn test_rule_does_not_fire_when_consequent_selected() {
        let selection: BTreeSet<&str> = ["diapers", "beer"].into_iter().collect();
        assert!(!BASKET_RULES[0].fires(&selection));
    }

    #[test]
    fn test_basket_toggle_and_fired_rules() {
        let mut sim = BasketSim::default();
        // cursor 0 is "bread"; move to "diapers"
        sim.move_cursor(2);
        sim.toggle_current();
        assert!(sim.selected.contains("diapers"));

        let fired = sim.fired_rules();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].consequent, "beer");

        // Toggling off empties the cart again
        sim.toggle_current();
        assert!(sim.fired_rules().is_empty());
    }
}

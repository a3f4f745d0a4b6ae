//! View routing state
//!
//! A single enumerated "current view" value per trainer selects which block
//! of the screen is rendered. There is no navigation history; Esc walks back
//! through the fixed parent chain.

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Launcher,
    Foundry,
    Ml,
}

/// The two trainers offered by the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trainer {
    Foundry,
    MlStrategies,
}

impl Trainer {
    pub fn all() -> [Trainer; 2] {
        [Trainer::Foundry, Trainer::MlStrategies]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Trainer::Foundry => "V-Process Foundry",
            Trainer::MlStrategies => "ML Strategies",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Trainer::Foundry => "Vacuum casting process, QC toolkit, and physics lab",
            Trainer::MlStrategies => "Interactive tour of five core learning algorithms",
        }
    }
}

/// Views inside the foundry trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoundryView {
    #[default]
    ProcessMap,
    StepDetail,
    QcToolkit,
    QcDetail,
    UtSim,
    PhysicsLab,
    Assistant,
}

impl FoundryView {
    /// The view Esc returns to, or None when leaving the trainer
    pub fn parent(&self) -> Option<FoundryView> {
        match self {
            FoundryView::ProcessMap => None,
            FoundryView::StepDetail => Some(FoundryView::ProcessMap),
            FoundryView::QcToolkit => Some(FoundryView::ProcessMap),
            FoundryView::QcDetail => Some(FoundryView::QcToolkit),
            FoundryView::UtSim => Some(FoundryView::QcToolkit),
            FoundryView::PhysicsLab => Some(FoundryView::ProcessMap),
            FoundryView::Assistant => Some(FoundryView::ProcessMap),
        }
    }
}

/// Views inside the ML strategies trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MlView {
    #[default]
    Overview,
    Regression,
    Classifier,
    DecisionTree,
    Basket,
    Clusters,
}

impl MlView {
    pub fn parent(&self) -> Option<MlView> {
        match self {
            MlView::Overview => None,
            _ => Some(MlView::Overview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foundry_esc_chain_terminates_at_process_map() {
        // Every view must walk back to ProcessMap in a bounded number of steps
        for view in [
            FoundryView::StepDetail,
            FoundryView::QcToolkit,
            FoundryView::QcDetail,
            FoundryView::UtSim,
            FoundryView::PhysicsLab,
            FoundryView::Assistant,
        ] {
            let mut current = view;
            let mut hops = 0;
            while let Some(parent) = current.parent() {
                current = parent;
                hops += 1;
                assert!(hops < 10, "parent chain must not cycle");
            }
            assert_eq!(current, FoundryView::ProcessMap);
        }
    }

    #[test]
    fn test_ml_views_return_to_overview() {
        for view in [
            MlView::Regression,
            MlView::Classifier,
            MlView::DecisionTree,
            MlView::Basket,
            MlView::Clusters,
        ] {
            assert_eq!(view.parent(), Some(MlView::Overview));
        }
        assert_eq!(MlView::Overview.parent(), None);
    }
}

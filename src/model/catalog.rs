//! Static content catalogs
//!
//! Fixed instructional records for both trainers. Created at load time from
//! literals and never mutated.

use crate::model::view::MlView;

/// One step of the A-F vacuum casting cycle
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub visual_prompt: &'static str,
    pub details: &'static [&'static str],
    pub quality_checks: &'static [&'static str],
    pub tip: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 6] = [
    ProcessStep {
        id: "A",
        title: "Film Draping",
        subtitle: "Surface Definition",
        visual_prompt: "Cinematic close-up of a heated translucent EVA plastic film being vacuum-formed perfectly over a complex industrial metal engine pattern, stretched tight, detailed textures, industrial lighting.",
        details: &[
            "EVA Film (0.05-0.1mm thickness) is heated until softened for elasticity.",
            "Vacuum suction from the pattern carrier plate pulls the film tight.",
            "The film creates a binder-free barrier between metal and sand.",
        ],
        quality_checks: &[
            "Inspect film for 'Webbing' or folds at sharp corners.",
            "Check for micro-tears or 'pinholes' using a vacuum gauge drop test.",
            "Verify uniform transparency (indicates even heating).",
        ],
        tip: "Film thickness directly determines the final surface Ra value (Smoothness).",
    },
    ProcessStep {
        id: "B",
        title: "Refractory Coating",
        subtitle: "Thermal Shielding",
        visual_prompt: "Detailed photo of a technician spraying a dark grey refractory slurry onto a plastic-wrapped mould pattern, fine mist, industrial foundry setting.",
        details: &[
            "A heat-resistant slurry wash is applied over the film.",
            "Protects the mould integrity during 1450°C metal pouring.",
            "Ensures a clean, glass-smooth release after cooling.",
        ],
        quality_checks: &[
            "Check for coating 'runs' or 'drips' which cause surface lumps.",
            "Measure wet-layer thickness (should be consistent +/- 0.05mm).",
            "Ensure 100% coverage in deep recesses.",
        ],
        tip: "Uniform coating prevents molten metal from melting the plastic film prematurely.",
    },
    ProcessStep {
        id: "C",
        title: "Sand Filling",
        subtitle: "Flask Formation",
        visual_prompt: "Industrial photo of fine dry silica sand being poured into a double-walled mould box, foundry environment, sharp detail.",
        details: &[
            "A double-walled vacuum flask is placed over the pattern.",
            "Dry, unbonded silica sand is filled into the mould box.",
            "Sand flows easily into complex undercuts due to lack of glue.",
        ],
        quality_checks: &[
            "Verify sand temperature is below 40°C to prevent film distortion.",
            "Check that sand is dry and free from foreign debris.",
            "Ensure the flask is seated perfectly flat on the carrier plate.",
        ],
        tip: "V-Process sand requires 0% moisture, eliminating steam-related porosity.",
    },
    ProcessStep {
        id: "D",
        title: "Compaction",
        subtitle: "Bulk Density",
        visual_prompt: "Realistic photo of an industrial vibration table with a large flask, showing sand settling into place, metallic reflections, professional lighting.",
        details: &[
            "Mechanical high-frequency vibration is applied to the mould box.",
            "Settles the sand particles into their most compact state.",
            "Provides the foundation for the mould's structural strength.",
        ],
        quality_checks: &[
            "Monitor vibration timer (standard 45-60 seconds).",
            "Check sand level 'drop' (significant drop indicates good settling).",
            "Verify no 'bridging' of sand over complex geometry.",
        ],
        tip: "Vibration frequency is tuned to achieve maximum sand bulk density.",
    },
    ProcessStep {
        id: "E",
        title: "Vacuum Seal",
        subtitle: "Atmospheric Hardening",
        visual_prompt: "Close-up of a high-tech vacuum pump connected to a metal mould box, industrial gauges showing 14.7 psi pressure, technical detail.",
        details: &[
            "A second top film is applied to seal the sand volume.",
            "Vacuum is applied internally, hardening the sand mass instantly.",
            "Atmospheric pressure (14.7 psi) hardens the sand into a rigid block.",
        ],
        quality_checks: &[
            "Read vacuum gauge: Must hold at 12-14.7 PSI.",
            "Listen for 'hissing' sounds indicating top-film leaks.",
            "Gently press sand: It should feel rock-hard like concrete.",
        ],
        tip: "The vacuum must be maintained until the metal has fully solidified.",
    },
    ProcessStep {
        id: "F",
        title: "Assembly & Pour",
        subtitle: "Transformation",
        visual_prompt: "Cinematic orange glowing metal pouring from a ladle into a vacuum mould, sparks, intense foundry atmosphere.",
        details: &[
            "The pattern is removed with zero friction or draft issues.",
            "Mould halves joined and molten metal poured while under vacuum.",
            "Vacuum draws out gases, resulting in zero porosity defects.",
        ],
        quality_checks: &[
            "Check alignment pins for zero 'shift' between mould halves.",
            "Monitor vacuum during pouring (any drop suggests mould collapse).",
            "Verify metal temperature is within spec before pouring.",
        ],
        tip: "Vacuum pouring results in denser metal structures than traditional casting.",
    },
];

/// Prompt for the hero visual on the process map screen
pub const FOUNDRY_HERO_PROMPT: &str =
    "Modern industrial foundry, glowing liquid metal, high tech machinery, 8k resolution cinematic.";

/// One inspection tool of the QC toolkit
#[derive(Debug, Clone, Copy)]
pub struct QcTool {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub visual_prompt: &'static str,
    pub workflow: &'static [&'static str],
    pub parameters: &'static [(&'static str, &'static str)],
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

pub const QC_TOOLS: [QcTool; 4] = [
    QcTool {
        id: "ut",
        title: "Ultrasonic Testing (UT)",
        category: "Internal Flaws",
        visual_prompt: "High-tech industrial UT probe on a smooth steel casting, digital waveforms on a lab screen, cinematic blue lighting.",
        workflow: &[
            "Clean testing surface of scale/dirt.",
            "Apply couplant gel (Aqueous) for sonic contact.",
            "Calibrate probe to known thickness block.",
            "Scan grid for pulse-echo peak anomalies.",
        ],
        parameters: &[
            ("Frequency", "2.25 - 5 MHz"),
            ("Gain", "60-80 dB"),
            ("Couplant", "Aqueous Gel"),
        ],
        dos: &[
            "Maintain perpendicular contact.",
            "Verify calibration every 4 hours.",
            "Slow scan speed for high resolution.",
        ],
        donts: &[
            "Don't scan through air gaps.",
            "Don't ignore background 'grass' noise.",
            "Don't use on highly porous materials.",
        ],
    },
    QcTool {
        id: "cmm",
        title: "CMM Probing",
        category: "Dimensions",
        visual_prompt: "Ruby-tipped automated CMM probe touching a complex industrial manifold, precision lab.",
        workflow: &[
            "Stabilize part in 20°C environment.",
            "Define XYZ datums via probe.",
            "Execute automated mapping program.",
            "Generate variance report vs CAD model.",
        ],
        parameters: &[
            ("Ambient Temp", "20°C (Fixed)"),
            ("Accuracy", "±0.001 mm"),
            ("Stylus", "Ruby-Tipped"),
        ],
        dos: &[
            "Ensure part is clinically clean.",
            "Use rigid non-stressing fixtures.",
            "Map stylus daily for wear.",
        ],
        donts: &[
            "Don't touch part with bare hands.",
            "Don't measure hot parts.",
            "Don't use damaged ruby tips.",
        ],
    },
    QcTool {
        id: "mpi",
        title: "Magnetic Particle (MPI)",
        category: "Surface Cracks",
        visual_prompt: "Fluorescent green magnetic particles glowing under UV light on a dark metal crack, close-up industrial.",
        workflow: &[
            "Degrease and dry the part.",
            "Induce magnetic field via yoke.",
            "Apply fluorescent particle spray.",
            "Inspect under UV-A blacklight.",
        ],
        parameters: &[
            ("UV Intensity", "1000 µW/cm²"),
            ("Amperage", "1000-2000A"),
            ("Medium", "Wet Fluorescent"),
        ],
        dos: &[
            "Test in two perpendicular directions.",
            "Allow UV light 15m warm up.",
            "Demagnetize after check.",
        ],
        donts: &[
            "Don't use on non-ferrous alloys.",
            "Don't over-wash particles.",
            "Don't skip UV intensity checks.",
        ],
    },
    QcTool {
        id: "spectro",
        title: "Spectrometry",
        category: "Chemistry",
        visual_prompt: "Plasma spark stand on a spectrometer machine, blue electric arc striking a metal sample.",
        workflow: &[
            "Grind a flat surface on sample.",
            "Seal sample on spark stand.",
            "Trigger argon-shielded plasma arc.",
            "Analyze elemental spectral lines.",
        ],
        parameters: &[
            ("Argon Purity", "99.999%"),
            ("Burn Time", "15 Seconds"),
            ("Spark Voltage", "400V"),
        ],
        dos: &[
            "Use High-Purity Argon.",
            "Perform 3 test burns.",
            "Calibrate with CRM sample.",
        ],
        donts: &[
            "Don't spark on porosity.",
            "Don't reuse spark points.",
            "Don't ignore drift values.",
        ],
    },
];

/// One entry of the ML algorithm catalog
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmCard {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub tagline: &'static str,
    pub details: &'static [&'static str],
    /// The interactive widget this card opens
    pub view: MlView,
}

pub const ALGORITHM_CARDS: [AlgorithmCard; 5] = [
    AlgorithmCard {
        id: "regression",
        title: "Linear Regression",
        category: "Supervised",
        tagline: "Fit a line, minimise squared error",
        details: &[
            "Predicts a continuous value from a weighted input.",
            "Training searches for the slope and intercept with the lowest mean squared error.",
            "Drag the line yourself and watch the error respond.",
        ],
        view: MlView::Regression,
    },
    AlgorithmCard {
        id: "classifier",
        title: "Logistic Classification",
        category: "Supervised",
        tagline: "Squash a score into a probability",
        details: &[
            "Maps any score onto a 0..1 probability with the sigmoid curve.",
            "A fixed threshold at 0.5 turns the probability into approve or deny.",
            "Slide a credit score across the decision boundary.",
        ],
        view: MlView::Classifier,
    },
    AlgorithmCard {
        id: "tree",
        title: "Decision Tree",
        category: "Supervised",
        tagline: "A flowchart learned from data",
        details: &[
            "Splits on one question at a time until an outcome leaf is reached.",
            "Early splits prune whole branches: a failed credit check ends the walk.",
            "Answer the loan officer's questions and follow your path.",
        ],
        view: MlView::DecisionTree,
    },
    AlgorithmCard {
        id: "basket",
        title: "Association Rules",
        category: "Unsupervised",
        tagline: "Who buys diapers buys beer",
        details: &[
            "Mines 'if A then B' rules from co-occurring items.",
            "A rule fires when its antecedents are all in the cart and its consequent is not.",
            "Build a cart and watch which rules light up.",
        ],
        view: MlView::Basket,
    },
    AlgorithmCard {
        id: "clusters",
        title: "K-Means Clustering",
        category: "Unsupervised",
        tagline: "Group points by nearest centre",
        details: &[
            "Assigns each point to its nearest centroid by Euclidean distance.",
            "This demo keeps the centroids fixed: placement is one-shot, not iterated.",
            "Drop points on the canvas and see which cluster claims them.",
        ],
        view: MlView::Clusters,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_process_step_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_every_step_has_content() {
        for step in &PROCESS_STEPS {
            assert!(!step.details.is_empty(), "step {} has no details", step.id);
            assert!(
                !step.quality_checks.is_empty(),
                "step {} has no quality checks",
                step.id
            );
            assert!(!step.visual_prompt.is_empty());
        }
    }

    #[test]
    fn test_qc_tool_ids_unique() {
        let ids: HashSet<&str> = QC_TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), QC_TOOLS.len());
    }

    #[test]
    fn test_algorithm_cards_cover_every_widget_view() {
        let views: HashSet<_> = ALGORITHM_CARDS.iter().map(|c| c.view).collect();
        assert_eq!(views.len(), ALGORITHM_CARDS.len());
        assert!(!views.contains(&MlView::Overview));

        let ids: HashSet<&str> = ALGORITHM_CARDS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), ALGORITHM_CARDS.len());
    }
}

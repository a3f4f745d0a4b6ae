//! Scripted loan-approval decision tree
//!
//! A fixed directed graph of question nodes and absorbing outcome nodes.
//! No cycles: every yes/no edge points strictly forward in the node table.

/// Terminal outcome kinds, the tree's two absorbing states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOutcome {
    Approved,
    Denied,
}

/// A node of the scripted tree
#[derive(Debug, Clone, Copy)]
pub enum TreeNode {
    Question {
        id: &'static str,
        prompt: &'static str,
        yes: &'static str,
        no: &'static str,
    },
    Outcome {
        id: &'static str,
        outcome: TreeOutcome,
        text: &'static str,
    },
}

impl TreeNode {
    pub fn id(&self) -> &'static str {
        match self {
            TreeNode::Question { id, .. } | TreeNode::Outcome { id, .. } => id,
        }
    }
}

pub const TREE_ROOT: &str = "root";

/// The loan officer's script. A failed credit check ends the walk
/// immediately; later questions are never asked.
pub const CREDIT_TREE: [TreeNode; 5] = [
    TreeNode::Question {
        id: "root",
        prompt: "Is Credit Score > 700?",
        yes: "income",
        no: "denied_score",
    },
    TreeNode::Question {
        id: "income",
        prompt: "Is Annual Income > $50k?",
        yes: "approved",
        no: "denied_income",
    },
    TreeNode::Outcome {
        id: "denied_score",
        outcome: TreeOutcome::Denied,
        text: "Loan denied: credit score below the 700 cutoff.",
    },
    TreeNode::Outcome {
        id: "denied_income",
        outcome: TreeOutcome::Denied,
        text: "Loan denied: income below the $50k floor.",
    },
    TreeNode::Outcome {
        id: "approved",
        outcome: TreeOutcome::Approved,
        text: "Loan approved. Both checks passed.",
    },
];

fn find(id: &str) -> &'static TreeNode {
    CREDIT_TREE
        .iter()
        .find(|n| n.id() == id)
        .unwrap_or(&CREDIT_TREE[0])
}

/// Walker state: the current node plus the answered trail
#[derive(Debug, Clone)]
pub struct TreeSim {
    current: &'static str,
    pub trail: Vec<(&'static str, bool)>,
}

impl Default for TreeSim {
    fn default() -> Self {
        Self {
            current: TREE_ROOT,
            trail: Vec::new(),
        }
    }
}

impl TreeSim {
    pub fn current_node(&self) -> &'static TreeNode {
        find(self.current)
    }

    /// Answer the current question. Outcome nodes absorb: answering on one
    /// is a no-op and no further prompts appear.
    pub fn answer(&mut self, yes: bool) {
        if let TreeNode::Question {
            prompt, yes: y, no: n, ..
        } = *self.current_node()
        {
            self.trail.push((prompt, yes));
            self.current = if yes { y } else { n };
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.current_node(), TreeNode::Outcome { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_at_root_reaches_denied_score() {
        let mut sim = TreeSim::default();
        sim.answer(false);
        assert_eq!(sim.current_node().id(), "denied_score");
        assert!(sim.is_finished());
    }

    #[test]
    fn test_outcome_nodes_absorb_further_answers() {
        let mut sim = TreeSim::default();
        sim.answer(false);
        let trail_len = sim.trail.len();

        // Regardless of subsequent input, no further prompt appears
        sim.answer(true);
        sim.answer(false);
        assert_eq!(sim.current_node().id(), "denied_score");
        assert_eq!(sim.trail.len(), trail_len);
    }

    #[test]
    fn test_yes_yes_path_approves() {
        let mut sim = TreeSim::default();
        sim.answer(true);
        assert_eq!(sim.current_node().id(), "income");
        sim.answer(true);
        match sim.current_node() {
            TreeNode::Outcome { outcome, .. } => assert_eq!(*outcome, TreeOutcome::Approved),
            _ => panic!("expected an outcome node"),
        }
    }

    #[test]
    fn test_reset_returns_to_root() {
        let mut sim = TreeSim::default();
        sim.answer(true);
        sim.answer(false);
        sim.reset();
        assert_eq!(sim.current_node().id(), TREE_ROOT);
        assert!(sim.trail.is_empty());
    }

    #[test]
    fn test_every_edge_targets_a_known_node() {
        for node in &CREDIT_TREE {
            if let TreeNode::Question { yes, no, .. } = node {
                assert!(CREDIT_TREE.iter().any(|n| n.id() == *yes));
                assert!(CREDIT_TREE.iter().any(|n| n.id() == *no));
            }
        }
    }
}

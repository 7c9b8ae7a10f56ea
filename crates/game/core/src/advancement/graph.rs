//! Class advancement graph.
//!
//! Two edge sets over class ids:
//!
//! - **Paid**: `A → B` when `B.prerequisite == A`, costing `B.xp_cost`
//! - **Free**: `A → B` when `A.free_advances` lists `B`, costing nothing
//!
//! Paid edges form a forest rooted at beginner classes. Free edges may point
//! anywhere, including back up the forest, so the combined graph can cycle.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::{ClassCatalog, EntryKind, NotFound};

use super::error::{GraphError, TransitionError};

/// How a single-step transition is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// Listed in the source class's free advances.
    Free,
    /// Target's prerequisite is the source class.
    Paid { cost: u32 },
}

impl EdgeKind {
    pub const fn cost(&self) -> u32 {
        match self {
            Self::Free => 0,
            Self::Paid { cost } => *cost,
        }
    }

    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

/// A legal one-step move out of a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<'a> {
    pub target: &'a str,
    pub kind: EdgeKind,
}

#[derive(Clone, Debug)]
struct Node {
    id: String,
    prerequisite: Option<usize>,
    xp_cost: u32,
    /// Free-advance targets, declaration order, no repeats.
    free: Vec<usize>,
    /// Classes whose prerequisite is this node, catalog order.
    paid: Vec<usize>,
}

/// Immutable advancement graph over a class catalog.
#[derive(Clone, Debug)]
pub struct AdvancementGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl AdvancementGraph {
    /// Builds the graph, rejecting dangling ids, costed beginner classes and
    /// prerequisite cycles.
    pub fn build(classes: &ClassCatalog) -> Result<Self, GraphError> {
        let index: HashMap<String, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.id.clone(), i))
            .collect();

        let mut nodes = Vec::with_capacity(classes.len());
        for class in classes.iter() {
            let prerequisite = match &class.prerequisite {
                Some(parent) => Some(*index.get(parent).ok_or_else(|| {
                    GraphError::DanglingPrerequisite {
                        class: class.id.clone(),
                        prerequisite: parent.clone(),
                    }
                })?),
                None if class.xp_cost != 0 => {
                    return Err(GraphError::BeginnerWithCost {
                        class: class.id.clone(),
                        xp_cost: class.xp_cost,
                    });
                }
                None => None,
            };

            let mut free = Vec::with_capacity(class.free_advances.len());
            for target in &class.free_advances {
                let &t = index
                    .get(target)
                    .ok_or_else(|| GraphError::DanglingFreeAdvance {
                        class: class.id.clone(),
                        target: target.clone(),
                    })?;
                if !free.contains(&t) {
                    free.push(t);
                }
            }

            nodes.push(Node {
                id: class.id.clone(),
                prerequisite,
                xp_cost: class.xp_cost,
                free,
                paid: Vec::new(),
            });
        }

        for child in 0..nodes.len() {
            if let Some(parent) = nodes[child].prerequisite {
                nodes[parent].paid.push(child);
            }
        }

        let graph = Self { nodes, index };
        graph.check_forest()?;
        Ok(graph)
    }

    fn check_forest(&self) -> Result<(), GraphError> {
        for (start, node) in self.nodes.iter().enumerate() {
            let mut current = node.prerequisite;
            let mut steps = 0;
            while let Some(parent) = current {
                steps += 1;
                if parent == start || steps > self.nodes.len() {
                    return Err(GraphError::PrerequisiteCycle {
                        class: node.id.clone(),
                    });
                }
                current = self.nodes[parent].prerequisite;
            }
        }
        Ok(())
    }

    fn lookup(&self, id: &str) -> Result<usize, NotFound> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| NotFound::new(EntryKind::Class, id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// True iff the class has no prerequisite.
    pub fn is_beginner(&self, id: &str) -> Result<bool, NotFound> {
        Ok(self.nodes[self.lookup(id)?].prerequisite.is_none())
    }

    pub fn prerequisite(&self, id: &str) -> Result<Option<&str>, NotFound> {
        let node = &self.nodes[self.lookup(id)?];
        Ok(node.prerequisite.map(|p| self.nodes[p].id.as_str()))
    }

    /// Beginner classes, catalog order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|node| node.prerequisite.is_none())
            .map(|node| node.id.as_str())
    }

    /// All paid edges as `(from, to, cost)`.
    pub fn paid_edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.nodes.iter().flat_map(move |node| {
            node.paid.iter().map(move |&child| {
                let child = &self.nodes[child];
                (node.id.as_str(), child.id.as_str(), child.xp_cost)
            })
        })
    }

    /// All free edges as `(from, to)`.
    pub fn free_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(move |node| {
            node.free
                .iter()
                .map(move |&target| (node.id.as_str(), self.nodes[target].id.as_str()))
        })
    }

    /// The edge from `from` to `to`, if any. A free edge wins over a paid one.
    pub fn edge(&self, from: &str, to: &str) -> Result<Option<EdgeKind>, NotFound> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        Ok(self.edge_between(source, target))
    }

    fn edge_between(&self, source: usize, target: usize) -> Option<EdgeKind> {
        if self.nodes[source].free.contains(&target) {
            Some(EdgeKind::Free)
        } else if self.nodes[target].prerequisite == Some(source) {
            Some(EdgeKind::Paid {
                cost: self.nodes[target].xp_cost,
            })
        } else {
            None
        }
    }

    /// XP needed to move from `from` to `to` in one step.
    ///
    /// Zero when `to` is a free advance of `from`, even if `to` also names
    /// `from` as its prerequisite. Multi-step paths are not searched.
    pub fn transition_cost(&self, from: &str, to: &str) -> Result<u32, TransitionError> {
        match self.edge(from, to)? {
            Some(kind) => Ok(kind.cost()),
            None => Err(TransitionError::Ineligible {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Ids reachable from `from` in one step, free or paid.
    pub fn eligible_transitions(&self, from: &str) -> Result<BTreeSet<&str>, NotFound> {
        Ok(self
            .transitions_from(from)?
            .into_iter()
            .map(|transition| transition.target)
            .collect())
    }

    /// One-step transitions with their resolved cost: free advances in
    /// declaration order, then the remaining paid successors in catalog order.
    pub fn transitions_from(&self, from: &str) -> Result<Vec<Transition<'_>>, NotFound> {
        let node = &self.nodes[self.lookup(from)?];
        let free = node.free.iter().map(|&target| Transition {
            target: self.nodes[target].id.as_str(),
            kind: EdgeKind::Free,
        });
        let paid = node
            .paid
            .iter()
            .filter(|&&child| !node.free.contains(&child))
            .map(|&child| Transition {
                target: self.nodes[child].id.as_str(),
                kind: EdgeKind::Paid {
                    cost: self.nodes[child].xp_cost,
                },
            });
        Ok(free.chain(paid).collect())
    }

    /// The class followed by its prerequisite ancestors up to a beginner class.
    pub fn prerequisite_chain(&self, id: &str) -> Result<Vec<&str>, NotFound> {
        let mut chain = Vec::new();
        let mut current = Some(self.lookup(id)?);
        while let Some(i) = current {
            chain.push(self.nodes[i].id.as_str());
            current = self.nodes[i].prerequisite;
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CharacterClass;
    use crate::stats::StatVector;

    fn class(id: &str) -> CharacterClass {
        CharacterClass::new(id, StatVector::filled(5))
    }

    fn catalog() -> ClassCatalog {
        ClassCatalog::from_entries([
            class("peasant").with_free_advances(["farmer", "villager"]),
            class("villager").with_free_advances(["guard"]),
            class("beggar").with_free_advances(["thief"]),
            class("farmer").with_prerequisite("peasant", 0),
            class("soldier")
                .with_prerequisite("peasant", 500)
                .with_free_advances(["mercenary", "guard"]),
            class("guard")
                .with_prerequisite("villager", 500)
                .with_free_advances(["soldier"]),
            class("warrior")
                .with_prerequisite("soldier", 1000)
                .with_free_advances(["mercenary"]),
            class("mercenary")
                .with_prerequisite("soldier", 1000)
                .with_free_advances(["warrior"]),
            class("thief")
                .with_prerequisite("beggar", 500)
                .with_free_advances(["rogue"]),
            class("rogue")
                .with_prerequisite("thief", 1500)
                .with_free_advances(["assassin"]),
            class("assassin").with_prerequisite("rogue", 2500),
        ])
        .unwrap()
    }

    fn graph() -> AdvancementGraph {
        AdvancementGraph::build(&catalog()).unwrap()
    }

    #[test]
    fn beginners_have_no_prerequisite() {
        let graph = graph();
        assert!(graph.is_beginner("peasant").unwrap());
        assert!(!graph.is_beginner("soldier").unwrap());
        assert_eq!(
            graph.roots().collect::<Vec<_>>(),
            vec!["peasant", "villager", "beggar"]
        );
    }

    #[test]
    fn free_advance_costs_nothing() {
        assert_eq!(graph().transition_cost("peasant", "farmer"), Ok(0));
    }

    #[test]
    fn paid_edge_costs_target_xp() {
        assert_eq!(graph().transition_cost("soldier", "warrior"), Ok(1000));
        assert_eq!(graph().transition_cost("peasant", "soldier"), Ok(500));
    }

    #[test]
    fn free_dominates_paid_for_same_pair() {
        // mercenary names soldier as prerequisite and soldier lists it as free
        let graph = graph();
        assert_eq!(graph.transition_cost("soldier", "mercenary"), Ok(0));
        assert_eq!(graph.edge("soldier", "mercenary"), Ok(Some(EdgeKind::Free)));
    }

    #[test]
    fn unrelated_classes_are_ineligible() {
        assert_eq!(
            graph().transition_cost("thief", "assassin"),
            Err(TransitionError::Ineligible {
                from: "thief".into(),
                to: "assassin".into(),
            })
        );
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert_eq!(
            graph().transition_cost("thief", "ninja"),
            Err(TransitionError::NotFound(NotFound::new(
                EntryKind::Class,
                "ninja"
            )))
        );
        assert!(graph().is_beginner("ninja").is_err());
    }

    #[test]
    fn eligible_transitions_union_both_edge_sets() {
        let graph = graph();
        let from_soldier = graph.eligible_transitions("soldier").unwrap();
        assert_eq!(
            from_soldier.into_iter().collect::<Vec<_>>(),
            vec!["guard", "mercenary", "warrior"]
        );

        let transitions = graph.transitions_from("soldier").unwrap();
        assert_eq!(
            transitions,
            vec![
                Transition {
                    target: "mercenary",
                    kind: EdgeKind::Free
                },
                Transition {
                    target: "guard",
                    kind: EdgeKind::Free
                },
                Transition {
                    target: "warrior",
                    kind: EdgeKind::Paid { cost: 1000 }
                },
            ]
        );
    }

    #[test]
    fn mutual_free_advances_are_allowed() {
        let graph = graph();
        assert_eq!(graph.transition_cost("warrior", "mercenary"), Ok(0));
        assert_eq!(graph.transition_cost("mercenary", "warrior"), Ok(0));
    }

    #[test]
    fn prerequisite_chain_walks_to_root() {
        assert_eq!(
            graph().prerequisite_chain("assassin").unwrap(),
            vec!["assassin", "rogue", "thief", "beggar"]
        );
    }

    #[test]
    fn edge_sets_are_explicit() {
        let graph = graph();
        assert!(graph.paid_edges().any(|e| e == ("rogue", "assassin", 2500)));
        assert!(graph.free_edges().any(|e| e == ("guard", "soldier")));
        assert!(!graph.free_edges().any(|e| e == ("rogue", "thief")));
    }

    #[test]
    fn dangling_references_fail_build() {
        let classes = ClassCatalog::from_entries([
            class("student").with_free_advances(["acolyte"]),
        ])
        .unwrap();
        assert_eq!(
            AdvancementGraph::build(&classes).unwrap_err(),
            GraphError::DanglingFreeAdvance {
                class: "student".into(),
                target: "acolyte".into(),
            }
        );

        let classes =
            ClassCatalog::from_entries([class("cleric").with_prerequisite("acolyte", 1000)])
                .unwrap();
        assert!(matches!(
            AdvancementGraph::build(&classes),
            Err(GraphError::DanglingPrerequisite { .. })
        ));
    }

    #[test]
    fn beginner_with_cost_fails_build() {
        let mut costly = class("noble");
        costly.xp_cost = 3000;
        let classes = ClassCatalog::from_entries([costly]).unwrap();
        assert_eq!(
            AdvancementGraph::build(&classes).unwrap_err(),
            GraphError::BeginnerWithCost {
                class: "noble".into(),
                xp_cost: 3000,
            }
        );
    }

    #[test]
    fn prerequisite_cycle_fails_build() {
        let classes = ClassCatalog::from_entries([
            class("root"),
            class("a").with_prerequisite("b", 100),
            class("b").with_prerequisite("a", 100),
        ])
        .unwrap();
        assert!(matches!(
            AdvancementGraph::build(&classes),
            Err(GraphError::PrerequisiteCycle { .. })
        ));
    }
}

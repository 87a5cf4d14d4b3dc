//! Tree traversal over unit hierarchies: leaf enumeration, derived
//! state, and the active-leaf population used for trend scoring.

use pulse_core::{Unit, UnitState};

/// Canonical priority order for state derivation: a single blocked
/// leaf makes the whole subtree read as blocked, regardless of how
/// many leaves are done.
pub const STATE_PRIORITY: [UnitState; 6] = [
    UnitState::Blocked,
    UnitState::InProgress,
    UnitState::OnHold,
    UnitState::Todo,
    UnitState::New,
    UnitState::Done,
];

/// All leaf descendants of `unit`, depth-first. A leaf returns itself.
pub fn leaf_descendants(unit: &Unit) -> Vec<&Unit> {
    if unit.is_leaf() {
        return vec![unit];
    }
    let mut leaves = Vec::new();
    collect_leaves(unit, &mut leaves);
    leaves
}

fn collect_leaves<'a>(unit: &'a Unit, out: &mut Vec<&'a Unit>) {
    for child in &unit.children {
        if child.is_leaf() {
            out.push(child);
        } else {
            collect_leaves(child, out);
        }
    }
}

/// First state in `priority` that appears among `unit`'s leaf
/// descendants' stored states; `New` when none matches.
pub fn derived_state(unit: &Unit, priority: &[UnitState]) -> UnitState {
    let present: Vec<UnitState> = leaf_descendants(unit)
        .iter()
        .filter_map(|leaf| leaf.state)
        .collect();
    priority
        .iter()
        .copied()
        .find(|state| present.contains(state))
        .unwrap_or(UnitState::New)
}

/// The state a unit effectively reads as: the stored state for a
/// leaf, the priority-derived state for a composite. Composites never
/// expose a stored state directly.
pub fn effective_state(unit: &Unit) -> Option<UnitState> {
    if unit.is_leaf() {
        unit.state
    } else {
        Some(derived_state(unit, &STATE_PRIORITY))
    }
}

/// Leaf descendants that count for health-summary and confidence
/// purposes: archived, `Done`, and `OnHold` leaves are excluded.
pub fn active_leaves(unit: &Unit) -> Vec<&Unit> {
    leaf_descendants(unit)
        .into_iter()
        .filter(|leaf| {
            !leaf.archived
                && !matches!(leaf.state, Some(UnitState::Done) | Some(UnitState::OnHold))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::UnitState::*;

    fn leaf(id: &str, state: UnitState) -> Unit {
        Unit::leaf(id, id.to_uppercase(), Some(state))
    }

    #[test]
    fn test_leaf_descendants_of_leaf_is_self() {
        let unit = leaf("a", Todo);
        let leaves = leaf_descendants(&unit);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].id, unit.id);
    }

    #[test]
    fn test_leaf_descendants_depth_first() {
        let tree = Unit::composite(
            "root",
            "Root",
            vec![
                Unit::composite("left", "Left", vec![leaf("a", Todo), leaf("b", Done)]),
                leaf("c", InProgress),
            ],
        );
        let ids: Vec<&str> = leaf_descendants(&tree).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(leaf_descendants(&tree).iter().all(|u| u.is_leaf()));
    }

    #[test]
    fn test_derived_state_priority() {
        let tree = Unit::composite(
            "root",
            "Root",
            vec![leaf("a", Done), leaf("b", Done), leaf("c", Blocked)],
        );
        // One blocked leaf outweighs any number of done leaves.
        assert_eq!(derived_state(&tree, &STATE_PRIORITY), Blocked);
    }

    #[test]
    fn test_derived_state_falls_back_to_new() {
        let tree = Unit::composite("root", "Root", vec![leaf("a", Done)]);
        assert_eq!(derived_state(&tree, &[Blocked, InProgress]), New);

        let no_states = Unit::composite(
            "root",
            "Root",
            vec![Unit::leaf("a", "A", None)],
        );
        assert_eq!(derived_state(&no_states, &STATE_PRIORITY), New);
    }

    #[test]
    fn test_effective_state() {
        let l = leaf("a", OnHold);
        assert_eq!(effective_state(&l), Some(OnHold));
        assert_eq!(effective_state(&Unit::leaf("b", "B", None)), None);

        let tree = Unit::composite("root", "Root", vec![leaf("a", Todo), leaf("b", InProgress)]);
        assert_eq!(effective_state(&tree), Some(InProgress));
    }

    #[test]
    fn test_active_leaves_exclusions() {
        let tree = Unit::composite(
            "root",
            "Root",
            vec![
                leaf("a", InProgress),
                leaf("b", Done),
                leaf("c", OnHold),
                leaf("d", Todo).archived(),
                Unit::leaf("e", "E", None),
            ],
        );
        let ids: Vec<&str> = active_leaves(&tree).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);
    }
}

//! grouping::partition — connected components of the linkage graph.

/// Grouping — a partition of component indices into linked groups.
///
/// Purpose
/// -------
/// Hold the result of the pairwise linkage stage as a partition of
/// `{0, …, p−1}`: each group collects components connected (directly or
/// transitively) by significant cross-correlations, together with the
/// label of the strategy that produced it.
///
/// Fields
/// ------
/// - `groups`: member index sets, each sorted ascending; groups ordered
///   by size descending, ties by smallest member.
/// - `method`: `"max"` or `"fdr"`, echoing the strategy label.
///
/// Invariants
/// ----------
/// - The groups are nonempty, pairwise disjoint, and jointly cover
///   `{0, …, p−1}` exactly once ([`Grouping::is_partition`]).
///
/// Notes
/// -----
/// - Constructed by [`connected_components`]; a value object with no
///   behavior beyond accessors and the partition diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    groups: Vec<Vec<usize>>,
    method: &'static str,
}

impl Grouping {
    /// Number of groups.
    pub fn no_groups(&self) -> usize {
        self.groups.len()
    }

    /// Group sizes, in group order.
    pub fn member_counts(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Member index sets, each sorted ascending.
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Label of the strategy that produced this grouping.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Whether the groups partition `{0, …, p−1}` exactly.
    pub fn is_partition(&self, p: usize) -> bool {
        let mut seen = vec![false; p];
        let mut total = 0;
        for group in &self.groups {
            if group.is_empty() {
                return false;
            }
            for &idx in group {
                if idx >= p || seen[idx] {
                    return false;
                }
                seen[idx] = true;
                total += 1;
            }
        }
        total == p
    }
}

/// Build the grouping as connected components of the linkage graph.
///
/// Components `0..p` are vertices; each linked pair is an undirected
/// edge. An iterative depth-first traversal in ascending vertex order
/// makes the result deterministic. Members are sorted ascending within
/// each group, and groups are ordered by size descending with ties
/// broken by smallest member.
///
/// # Arguments
/// - `p`: number of components.
/// - `linked`: linked pairs `(i, j)` with `i, j < p`.
/// - `method`: strategy label to carry on the result.
pub(crate) fn connected_components(
    p: usize, linked: &[(usize, usize)], method: &'static str,
) -> Grouping {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); p];
    for &(i, j) in linked {
        adjacency[i].push(j);
        adjacency[j].push(i);
    }

    let mut visited = vec![false; p];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut stack = Vec::new();
    for start in 0..p {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        stack.push(start);
        let mut members = Vec::new();
        while let Some(vertex) = stack.pop() {
            members.push(vertex);
            for &next in &adjacency[vertex] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        members.sort_unstable();
        groups.push(members);
    }

    groups.sort_by(|a, b| b.len().cmp(&a.len()).then(a[0].cmp(&b[0])));
    Grouping { groups, method }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Component formation from transitive links.
    // - The partition invariant with and without edges.
    // - Group ordering (size descending, ties by smallest member) and
    //   within-group member ordering.
    // - The `is_partition` diagnostic rejecting malformed groupings.
    //
    // They intentionally DO NOT cover:
    // - How linked pairs are produced; the strategy modules test that.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify transitive linking: edges (0,3) and (3,4) merge into one
    // group even though 0 and 4 are not directly linked.
    //
    // Given
    // -----
    // - p = 5 with links {(0,3), (3,4)}.
    //
    // Expect
    // ------
    // - Groups [[0,3,4], [1], [2]] with counts [3, 1, 1].
    fn transitive_links_merge_into_one_group() {
        // Arrange
        let linked = [(0, 3), (3, 4)];

        // Act
        let grouping = connected_components(5, &linked, "fdr");

        // Assert
        assert_eq!(grouping.no_groups(), 3);
        assert_eq!(grouping.groups(), &[vec![0, 3, 4], vec![1], vec![2]]);
        assert_eq!(grouping.member_counts(), vec![3, 1, 1]);
        assert!(grouping.is_partition(5));
        assert_eq!(grouping.method(), "fdr");
    }

    #[test]
    // Purpose
    // -------
    // Check the two extreme graphs: no edges (all singletons) and a
    // chain linking everything (one group).
    //
    // Given
    // -----
    // - p = 4 with no links, and p = 4 with chain links.
    //
    // Expect
    // ------
    // - Four singleton groups, then a single group of all components;
    //   both partitions valid.
    fn edgeless_and_chain_graphs() {
        // Arrange / Act
        let singletons = connected_components(4, &[], "max");
        let chain = connected_components(4, &[(0, 1), (1, 2), (2, 3)], "max");

        // Assert
        assert_eq!(singletons.no_groups(), 4);
        assert!(singletons.is_partition(4));
        assert_eq!(chain.no_groups(), 1);
        assert_eq!(chain.groups(), &[vec![0, 1, 2, 3]]);
        assert!(chain.is_partition(4));
    }

    #[test]
    // Purpose
    // -------
    // Verify group ordering: size descending with size ties broken by
    // the smallest member.
    //
    // Given
    // -----
    // - p = 6 with pairs (4,5) and (0,2): two groups of size 2 and two
    //   singletons.
    //
    // Expect
    // ------
    // - Order [[0,2], [4,5], [1], [3]].
    fn groups_ordered_by_size_then_smallest_member() {
        // Arrange
        let linked = [(4, 5), (0, 2)];

        // Act
        let grouping = connected_components(6, &linked, "fdr");

        // Assert
        assert_eq!(grouping.groups(), &[vec![0, 2], vec![4, 5], vec![1], vec![3]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `is_partition` rejects coverage gaps and out-of-range
    // members.
    //
    // Given
    // -----
    // - A valid grouping of p = 3 checked against the wrong p.
    //
    // Expect
    // ------
    // - Valid at p = 3; invalid at p = 4 (missing member) and p = 2
    //   (out-of-range member).
    fn is_partition_rejects_mismatched_dimension() {
        // Arrange
        let grouping = connected_components(3, &[(0, 1)], "max");

        // Act / Assert
        assert!(grouping.is_partition(3));
        assert!(!grouping.is_partition(4));
        assert!(!grouping.is_partition(2));
    }
}

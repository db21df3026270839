//! Breadth-first ladder search
//!
//! The graph is implicit: every dequeued node is compared against every node of
//! the `WordSet` in insertion order, so a search costs O(N² · L). Visited marks
//! and parent links live in a search-owned [`SearchState`] indexed by
//! [`NodeId`], and are reset before each search.
//!
//! Tie-breaking is fixed by that sweep order. A node's parent is the first
//! dequeued node adjacent to it, and among the nodes discovered by one parent
//! the queue order follows `WordSet` insertion order.

use super::ladder::Ladder;
use crate::core::{NodeId, WordSet, are_adjacent};
use std::collections::VecDeque;

/// Per-search scratch data: visited marks and parent back-links
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    visited: Vec<bool>,
    parent: Vec<Option<NodeId>>,
}

impl SearchState {
    /// Fresh state for a set of `size` nodes
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            visited: vec![false; size],
            parent: vec![None; size],
        }
    }

    /// Clear every visited mark and parent link, resizing to `size` nodes
    pub fn reset(&mut self, size: usize) {
        self.visited.clear();
        self.visited.resize(size, false);
        self.parent.clear();
        self.parent.resize(size, None);
    }

    #[inline]
    #[must_use]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited[id.index()]
    }

    /// Node that discovered `id` during the last search
    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id.index()]
    }

    #[inline]
    fn mark(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.visited[id.index()] = true;
        self.parent[id.index()] = parent;
    }

    /// Walk parent links from `end` back to `start`
    ///
    /// Returns the ids in start-to-end order, or `None` if the chain never
    /// reaches `start`.
    fn backtrack(&self, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![end];
        let mut current = end;

        while current != start {
            current = self.parent(current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Counters from the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes dequeued and swept against the whole set
    pub expanded: usize,
    /// Nodes marked visited, including the start node
    pub discovered: usize,
}

/// Shortest-path search over one `WordSet`
///
/// The search keeps its scratch state and queue between calls so repeated
/// searches (e.g. puzzle generation) reuse the allocations.
pub struct LadderSearch<'a> {
    words: &'a WordSet,
    state: SearchState,
    queue: VecDeque<NodeId>,
    stats: SearchStats,
}

impl<'a> LadderSearch<'a> {
    #[must_use]
    pub fn new(words: &'a WordSet) -> Self {
        Self {
            words,
            state: SearchState::new(words.len()),
            queue: VecDeque::new(),
            stats: SearchStats::default(),
        }
    }

    /// Scratch state left by the last search
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Shortest ladder between two words given as text
    ///
    /// Returns `None` when either word is missing from the set or when no
    /// ladder connects them.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordSet;
    /// use word_ladder::solver::LadderSearch;
    ///
    /// let set = WordSet::build(["cat", "cot", "cog", "dog"], 3);
    /// let ladder = LadderSearch::new(&set).shortest_path("cat", "dog").unwrap();
    /// assert_eq!(ladder.to_string(), "cat -> cot -> cog -> dog");
    /// ```
    pub fn shortest_path(&mut self, start: &str, end: &str) -> Option<Ladder> {
        let start = self.words.find(start)?;
        let end = self.words.find(end)?;
        self.shortest_path_between(start, end)
    }

    /// Shortest ladder between two nodes of the set
    pub fn shortest_path_between(&mut self, start: NodeId, end: NodeId) -> Option<Ladder> {
        self.run(start, end);

        let path = if self.state.is_visited(end) {
            self.state.backtrack(start, end)
        } else {
            None
        };

        log::debug!(
            "Search {} -> {}: {} expanded, {} discovered, {}",
            self.words.word(start),
            self.words.word(end),
            self.stats.expanded,
            self.stats.discovered,
            path.as_ref()
                .map_or_else(|| "unreachable".to_string(), |p| format!("{} words", p.len()))
        );

        let words = self.words;
        path.map(|ids| Ladder::from_words(ids.into_iter().map(|id| words.word(id).clone()).collect()))
    }

    /// Run the BFS until `end` is visited or the queue drains
    fn run(&mut self, start: NodeId, end: NodeId) {
        self.state.reset(self.words.len());
        self.queue.clear();
        self.stats = SearchStats::default();

        self.state.mark(start, None);
        self.stats.discovered = 1;
        self.queue.push_back(start);

        while !self.state.is_visited(end) {
            let Some(current) = self.queue.pop_front() else {
                break;
            };
            self.expand(current);
        }
    }

    /// Discover every unvisited neighbour of `current`, in set order
    fn expand(&mut self, current: NodeId) {
        self.stats.expanded += 1;
        let words = self.words;
        let current_word = words.word(current);

        for (candidate, word) in words.iter() {
            if !self.state.is_visited(candidate) && are_adjacent(word, current_word) {
                self.state.mark(candidate, Some(current));
                self.stats.discovered += 1;
                self.queue.push_back(candidate);
            }
        }
    }
}

/// One-shot shortest ladder search
#[must_use]
pub fn shortest_path(words: &WordSet, start: &str, end: &str) -> Option<Ladder> {
    LadderSearch::new(words).shortest_path(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn texts(ladder: &Ladder) -> Vec<&str> {
        ladder.iter().map(Word::text).collect()
    }

    fn fixture() -> WordSet {
        WordSet::build(
            [
                "cold", "cord", "card", "ward", "warm", "word", "wore", "core", "code", "worm",
                "wold", "bold", "bolt", "boat", "coat", "cost", "most", "mist", "cote", "wart",
                "cart", "zzzz",
            ],
            4,
        )
    }

    /// All-pairs step counts via Floyd-Warshall, independent of the BFS
    fn exhaustive_distances(set: &WordSet) -> Vec<Vec<Option<usize>>> {
        let n = set.len();
        let mut dist = vec![vec![None; n]; n];
        for (i, a) in set.iter() {
            dist[i.index()][i.index()] = Some(0);
            for (j, b) in set.iter() {
                if are_adjacent(a, b) {
                    dist[i.index()][j.index()] = Some(1);
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        let through = ik + kj;
                        if dist[i][j].is_none_or(|d| through < d) {
                            dist[i][j] = Some(through);
                        }
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn trivial_ladder() {
        let set = WordSet::build(["cat", "cot", "cog", "dog"], 3);
        let ladder = shortest_path(&set, "cat", "dog").unwrap();
        assert_eq!(texts(&ladder), vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn unreachable_pair() {
        let set = WordSet::build(["cat", "dog"], 3);
        assert_eq!(shortest_path(&set, "cat", "dog"), None);
    }

    #[test]
    fn missing_endpoint() {
        let set = WordSet::build(["cat", "cot"], 3);
        assert_eq!(shortest_path(&set, "cat", "dog"), None);
        assert_eq!(shortest_path(&set, "dog", "cat"), None);
    }

    #[test]
    fn start_equals_end_is_single_word() {
        let set = WordSet::build(["cat", "cot"], 3);
        let ladder = shortest_path(&set, "cat", "cat").unwrap();
        assert_eq!(texts(&ladder), vec!["cat"]);
    }

    #[test]
    fn ladders_are_valid_dictionary_chains() {
        let set = fixture();
        let mut search = LadderSearch::new(&set);

        for start in set.ids() {
            for end in set.ids() {
                if let Some(ladder) = search.shortest_path_between(start, end) {
                    assert!(ladder.is_valid(), "invalid ladder {ladder}");
                    assert_eq!(ladder.start(), Some(set.word(start)));
                    assert_eq!(ladder.end(), Some(set.word(end)));
                    assert!(ladder.iter().all(|w| set.contains(w.text())));
                }
            }
        }
    }

    #[test]
    fn bfs_distance_is_minimal() {
        let set = fixture();
        let dist = exhaustive_distances(&set);
        let mut search = LadderSearch::new(&set);

        for start in set.ids() {
            for end in set.ids() {
                let found = search
                    .shortest_path_between(start, end)
                    .map(|ladder| ladder.steps());
                assert_eq!(
                    found,
                    dist[start.index()][end.index()],
                    "{} -> {}",
                    set.word(start),
                    set.word(end)
                );
            }
        }
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let set = fixture();
        let mut search = LadderSearch::new(&set);

        let first = search.shortest_path("cold", "warm");
        // An unrelated search in between must not leak scratch state
        let _ = search.shortest_path("boat", "mist");
        let second = search.shortest_path("cold", "warm");

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(first, shortest_path(&set, "cold", "warm"));
    }

    #[test]
    fn ties_follow_insertion_order() {
        let set = WordSet::build(["cat", "bat", "cot", "bot"], 3);
        let ladder = shortest_path(&set, "cat", "bot").unwrap();
        assert_eq!(texts(&ladder), vec!["cat", "bat", "bot"]);

        let set = WordSet::build(["cat", "cot", "bat", "bot"], 3);
        let ladder = shortest_path(&set, "cat", "bot").unwrap();
        assert_eq!(texts(&ladder), vec!["cat", "cot", "bot"]);
    }

    #[test]
    fn duplicate_words_do_not_form_edges() {
        let set = WordSet::build(["cat", "cat", "cot"], 3);
        let ladder = shortest_path(&set, "cat", "cot").unwrap();
        assert_eq!(texts(&ladder), vec!["cat", "cot"]);
    }

    #[test]
    fn search_stops_once_target_is_found() {
        let set = WordSet::build(["cat", "cot", "cog", "dog", "dig", "dug"], 3);
        let mut search = LadderSearch::new(&set);
        search.shortest_path("cat", "cot").unwrap();

        let stats = search.last_stats();
        assert_eq!(stats.expanded, 1);
        assert!(!search.state().is_visited(set.find("dog").unwrap()));
    }

    #[test]
    fn scratch_state_records_parents() {
        let set = WordSet::build(["cat", "cot", "cog"], 3);
        let mut search = LadderSearch::new(&set);
        search.shortest_path("cat", "cog").unwrap();

        let state = search.state();
        let cat = set.find("cat").unwrap();
        let cot = set.find("cot").unwrap();
        let cog = set.find("cog").unwrap();
        assert_eq!(state.parent(cat), None);
        assert_eq!(state.parent(cot), Some(cat));
        assert_eq!(state.parent(cog), Some(cot));
    }

    #[test]
    fn state_reset_clears_marks() {
        let set = WordSet::build(["cat", "cot"], 3);
        let mut state = SearchState::new(set.len());
        let cat = set.find("cat").unwrap();
        let cot = set.find("cot").unwrap();
        state.mark(cot, Some(cat));

        state.reset(set.len());
        assert!(!state.is_visited(cot));
        assert_eq!(state.parent(cot), None);
    }
}

//! Integration tests for bridge words, text generation, shortest paths and
//! random walks.

use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordgraph::error::{Result, WordGraphError};
use wordgraph::graph::WordGraph;
use wordgraph::query::*;

const SAMPLE: &str =
    "To @ explore strange new worlds,\nTo seek out new life and new civilizations?";

fn sample() -> WordGraph {
    WordGraph::from_text(SAMPLE).unwrap()
}

/// Random text over a small vocabulary so that words repeat and cycles form.
fn random_text(rng: &mut StdRng, vocabulary: &[&str], len: usize) -> String {
    (0..len)
        .map(|_| vocabulary[rng.random_range(0..vocabulary.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimum path weight by exhaustive search over simple paths.
fn brute_force_distance(graph: &WordGraph, from: &str, to: &str) -> Option<u64> {
    fn search(
        graph: &WordGraph,
        current: usize,
        target: usize,
        visited: &mut Vec<bool>,
        cost: u64,
        best: &mut Option<u64>,
    ) {
        if current == target {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for &next in graph.successors(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            let weight = graph.edge_weight(current, next).unwrap();
            search(graph, next, target, visited, cost + weight, best);
            visited[next] = false;
        }
    }

    let source = graph.node_id(from)?;
    let target = graph.node_id(to)?;
    let mut visited = vec![false; graph.node_count()];
    visited[source] = true;
    let mut best = None;
    search(graph, source, target, &mut visited, 0, &mut best);
    best
}

#[test]
fn test_bridge_words_on_sample() {
    let graph = sample();
    assert_eq!(
        bridge_words(&graph, "explore", "new"),
        Some(vec!["strange".to_string()])
    );
    assert_eq!(
        bridge_words(&graph, "EXPLORE", "New"),
        Some(vec!["strange".to_string()])
    );
    assert_eq!(bridge_words(&graph, "seek", "to"), Some(vec![]));
    assert_eq!(bridge_words(&graph, "sky", "new"), None);
    assert_eq!(bridge_words(&graph, "new", "sky"), None);
}

#[test]
fn test_bridge_words_match_brute_force() {
    let vocabulary = ["a", "b", "c", "d", "e", "f"];
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..30 {
        let text = random_text(&mut rng, &vocabulary, 30);
        let graph = WordGraph::from_text(&text).unwrap();

        for word1 in graph.nodes() {
            for word2 in graph.nodes() {
                let expected: Vec<String> = graph
                    .nodes()
                    .iter()
                    .filter(|m| *m != word1 && *m != word2)
                    .filter(|m| {
                        graph.weight(word1, m).is_some() && graph.weight(m, word2).is_some()
                    })
                    .cloned()
                    .collect();
                assert_eq!(
                    bridge_words(&graph, word1, word2),
                    Some(expected),
                    "{text}: {word1} -> {word2}"
                );
            }
        }
        assert_eq!(bridge_words(&graph, "zzz", "a"), None);
    }
}

#[test]
fn test_bridge_words_follow_node_order() {
    let graph = WordGraph::from_text("a x b a y b a z b").unwrap();
    assert_eq!(
        bridge_words(&graph, "a", "b"),
        Some(vec!["x".to_string(), "y".to_string(), "z".to_string()])
    );
}

#[test]
fn test_generate_inserts_bridges() -> Result<()> {
    let graph = sample();
    let generator = TextGenerator::new(&graph);
    let mut rng = StdRng::seed_from_u64(11);

    let text = generator.generate("Seek to explore new worlds", &mut rng)?;
    assert_eq!(text, "seek to explore strange new worlds");

    // Unknown words pass through and the last word keeps its case.
    let text = generator.generate("hello explore New", &mut rng)?;
    assert_eq!(text, "hello explore strange New");
    Ok(())
}

#[test]
fn test_generate_is_reproducible_with_seed() -> Result<()> {
    let graph = WordGraph::from_text("a x b a y b a z b").unwrap();
    let generator = TextGenerator::new(&graph);

    let first = generator.generate("a b a b a b", &mut StdRng::seed_from_u64(3))?;
    let second = generator.generate("a b a b a b", &mut StdRng::seed_from_u64(3))?;
    assert_eq!(first, second);
    assert_eq!(first.split(' ').count(), 9);
    Ok(())
}

#[test]
fn test_generate_without_words_fails() {
    let graph = sample();
    let result = TextGenerator::new(&graph).generate("... 123", &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(WordGraphError::InvalidInput(_))));
}

#[test]
fn test_shortest_path_on_sample() -> Result<()> {
    let graph = sample();
    let engine = ShortestPathEngine::new(&graph);

    let path = engine.find("To", "new")?;
    assert_eq!(path.weight, 3);
    let via_explore = ["to", "explore", "strange", "new"];
    let via_seek = ["to", "seek", "out", "new"];
    assert!(path.words == via_explore || path.words == via_seek, "{path}");

    let same = engine.find("new", "NEW")?;
    assert_eq!(same.words, vec!["new"]);
    assert_eq!(same.weight, 0);

    assert!(matches!(
        engine.find("civilizations", "strange"),
        Err(WordGraphError::Unreachable { .. })
    ));
    assert!(matches!(
        engine.find("sky", "new"),
        Err(WordGraphError::UnknownWord(word)) if word == "sky"
    ));
    assert!(engine.shortest_path("civilizations", "strange").is_none());
    Ok(())
}

#[test]
fn test_paths_from_lists_reachable_words() -> Result<()> {
    let graph = WordGraph::from_text("a b c d")?;
    let engine = ShortestPathEngine::new(&graph);

    let paths = engine.paths_from("b")?;
    let targets: Vec<&str> = paths
        .iter()
        .filter_map(|p| p.words.last())
        .map(String::as_str)
        .collect();
    assert_eq!(targets, vec!["c", "d"]);
    assert_eq!(paths[1].weight, 2);

    assert!(engine.paths_from("d")?.is_empty());
    assert!(engine.paths_from("zzz").is_err());
    Ok(())
}

#[test]
fn test_shortest_path_matches_brute_force() {
    let vocabulary = ["a", "b", "c", "d", "e", "f", "g"];
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..30 {
        let text = random_text(&mut rng, &vocabulary, 25);
        let graph = WordGraph::from_text(&text).unwrap();
        let engine = ShortestPathEngine::new(&graph);

        for from in graph.nodes() {
            for to in graph.nodes() {
                if from == to {
                    continue;
                }
                let expected = brute_force_distance(&graph, from, to);
                let found = engine.shortest_path(from, to);
                assert_eq!(
                    found.as_ref().map(|p| p.weight),
                    expected,
                    "{text}: {from} -> {to}"
                );

                if let Some(path) = found {
                    assert_eq!(path.words.first(), Some(from));
                    assert_eq!(path.words.last(), Some(to));
                    let sum: u64 = path
                        .edges()
                        .map(|(s, t)| graph.weight(s, t).expect("path uses graph edges"))
                        .sum();
                    assert_eq!(sum, path.weight);
                }
            }
        }
    }
}

#[test]
fn test_random_walk_invariants() {
    let vocabulary = ["red", "green", "blue", "black", "white"];
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let text = random_text(&mut rng, &vocabulary, 20);
        let graph = WordGraph::from_text(&text).unwrap();
        let walk = RandomWalker::new(&graph).walk(&mut rng).unwrap();

        assert!(!walk.is_empty());
        assert!(walk.len() <= graph.edge_count() + 1);

        let mut seen = AHashSet::new();
        for pair in walk.windows(2) {
            assert!(graph.weight(&pair[0], &pair[1]).is_some());
            assert!(seen.insert((pair[0].clone(), pair[1].clone())), "edge repeated");
        }
    }
}

#[test]
fn test_random_walk_stop_reasons() -> Result<()> {
    let graph = WordGraph::from_text("one two three")?;
    let mut rng = StdRng::seed_from_u64(5);
    let walker = RandomWalker::new(&graph);

    let mut steps = walker.steps(&mut rng)?;
    let words: Vec<&str> = steps.by_ref().collect();
    assert_eq!(words.last(), Some(&"three"));
    assert_eq!(steps.stop_reason(), Some(StopReason::DeadEnd));
    Ok(())
}

#[test]
fn test_random_walk_is_reproducible_with_seed() {
    let graph = sample();
    let walker = RandomWalker::new(&graph);
    let first = walker.walk(&mut StdRng::seed_from_u64(8)).unwrap();
    let second = walker.walk(&mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(first, second);
}

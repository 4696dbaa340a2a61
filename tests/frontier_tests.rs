use dijkstra_sssp::data_structures::Frontier;

#[test]
fn test_frontier_pops_smallest_first() {
    let mut frontier: Frontier<usize, u32> = Frontier::new();
    frontier.push(1, 10);
    frontier.push(2, 5);
    frontier.push(3, 7);

    assert_eq!(frontier.peek(), Some((2, 5)));
    assert_eq!(frontier.pop(), Some((2, 5)));
    assert_eq!(frontier.pop(), Some((3, 7)));
    assert_eq!(frontier.pop(), Some((1, 10)));
    assert_eq!(frontier.pop(), None);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_keeps_duplicate_vertices() {
    let mut frontier: Frontier<usize, u32> = Frontier::with_capacity(4);
    frontier.push(4, 9);
    frontier.push(4, 3);
    frontier.push(0, 3);

    assert_eq!(frontier.len(), 3);
    assert_eq!(frontier.peak_len(), 3);
    // equal priorities come out by vertex index
    assert_eq!(frontier.pop(), Some((0, 3)));
    assert_eq!(frontier.pop(), Some((4, 3)));
    assert_eq!(frontier.pop(), Some((4, 9)));

    frontier.push(1, 1);
    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.peak_len(), 3);
}

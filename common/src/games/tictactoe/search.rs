//! Uninformed searches over hypothetical continuations of a board.
//!
//! All three strategies share one traversal and differ only in the order in
//! which the frontier hands back nodes. Starting from the current board, every
//! legal move of a node is played on a copy for the node's player; the first
//! such move that completes a line for that player is returned. The mover
//! alternates with depth and a win is not attributed to either side, so a
//! result found below the first ply may be a cell where the opponent would
//! win. When the frontier runs dry without any win, a uniformly random legal
//! move of the original board is chosen.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::board::Board;
use super::types::{Player, Position};
use crate::error::{Result, TicTacToeError};
use crate::games::SessionRng;

const STEP_COST: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// A line was completed `depth` plies below the searched board.
    Win { depth: u32 },
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Position,
    pub source: MoveSource,
    pub expanded_nodes: usize,
}

#[derive(Clone, Copy)]
struct SearchNode {
    board: Board,
    player: Player,
    cost: u32,
}

trait Frontier {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
}

#[derive(Default)]
struct Queue(VecDeque<SearchNode>);

impl Frontier for Queue {
    fn push(&mut self, node: SearchNode) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop_front()
    }
}

#[derive(Default)]
struct Stack(Vec<SearchNode>);

impl Frontier for Stack {
    fn push(&mut self, node: SearchNode) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop()
    }
}

struct Prioritized {
    cost: u32,
    sequence: u64,
    node: SearchNode,
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.sequence).cmp(&(other.cost, other.sequence))
    }
}

/// Min-heap on accumulated cost, ties broken by insertion order. With a
/// uniform step cost this yields exactly the breadth-first order.
#[derive(Default)]
struct CostQueue {
    heap: BinaryHeap<Reverse<Prioritized>>,
    next_sequence: u64,
}

impl Frontier for CostQueue {
    fn push(&mut self, node: SearchNode) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Prioritized {
            cost: node.cost,
            sequence,
            node,
        }));
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }
}

pub fn breadth_first(board: &Board, player: Player, rng: &mut SessionRng) -> Result<SearchOutcome> {
    run(Queue::default(), board, player, rng)
}

pub fn depth_first(board: &Board, player: Player, rng: &mut SessionRng) -> Result<SearchOutcome> {
    run(Stack::default(), board, player, rng)
}

pub fn uniform_cost(board: &Board, player: Player, rng: &mut SessionRng) -> Result<SearchOutcome> {
    run(CostQueue::default(), board, player, rng)
}

fn run<F: Frontier>(
    frontier: F,
    board: &Board,
    player: Player,
    rng: &mut SessionRng,
) -> Result<SearchOutcome> {
    let root_moves = board.legal_moves();
    if root_moves.is_empty() {
        return Err(TicTacToeError::NoLegalMoves);
    }

    let (found, expanded_nodes) = traverse(frontier, *board, player)?;
    if let Some((position, depth)) = found {
        return Ok(SearchOutcome {
            position,
            source: MoveSource::Win { depth },
            expanded_nodes,
        });
    }

    let position = *rng.choose(&root_moves).ok_or(TicTacToeError::NoLegalMoves)?;
    Ok(SearchOutcome {
        position,
        source: MoveSource::Fallback,
        expanded_nodes,
    })
}

fn traverse<F: Frontier>(
    mut frontier: F,
    board: Board,
    player: Player,
) -> Result<(Option<(Position, u32)>, usize)> {
    frontier.push(SearchNode {
        board,
        player,
        cost: 0,
    });

    let mut expanded_nodes = 0;
    while let Some(node) = frontier.pop() {
        expanded_nodes += 1;
        for position in node.board.legal_moves() {
            let mut child = node.board;
            child.apply_move(position, node.player)?;
            if child.check_winner(node.player) {
                return Ok((Some((position, node.cost + STEP_COST)), expanded_nodes));
            }
            frontier.push(SearchNode {
                board: child,
                player: node.player.opponent(),
                cost: node.cost + STEP_COST,
            });
        }
    }

    Ok((None, expanded_nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Strategy = fn(&Board, Player, &mut SessionRng) -> Result<SearchOutcome>;

    const STRATEGIES: [(&str, Strategy); 3] = [
        ("bfs", breadth_first),
        ("dfs", depth_first),
        ("ucs", uniform_cost),
    ];

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_is_taken_at_first_ply() {
        let board = board("XX.|O..|O..");
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::X, &mut SessionRng::new(1)).unwrap();
            assert_eq!(outcome.position, Position::new(0, 2), "{}", name);
            assert_eq!(outcome.source, MoveSource::Win { depth: 1 }, "{}", name);
            assert_eq!(outcome.expanded_nodes, 1, "{}", name);
        }
    }

    #[test]
    fn test_unique_winning_move_among_many() {
        let board = board("O.X|.X.|O..");
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::O, &mut SessionRng::new(3)).unwrap();
            assert_eq!(outcome.position, Position::new(1, 0), "{}", name);
        }
    }

    #[test]
    fn test_full_board_fails_fast() {
        let board = board("XOX|XOO|OXX");
        for (name, strategy) in STRATEGIES {
            let result = strategy(&board, Player::O, &mut SessionRng::new(0));
            assert_eq!(result, Err(TicTacToeError::NoLegalMoves), "{}", name);
        }
    }

    #[test]
    fn test_opponent_threat_surfaces_at_second_ply() {
        let board = board("OO.|X..|...");
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::X, &mut SessionRng::new(5)).unwrap();
            assert_eq!(outcome.position, Position::new(0, 2), "{}", name);
            assert_eq!(outcome.source, MoveSource::Win { depth: 2 }, "{}", name);
        }
    }

    #[test]
    fn test_fallback_when_no_line_can_be_completed() {
        let board = board("XXO|OOX|X..");
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::X, &mut SessionRng::new(11)).unwrap();
            assert_eq!(outcome.source, MoveSource::Fallback, "{}", name);
            assert!(board.legal_moves().contains(&outcome.position), "{}", name);
            assert_eq!(outcome.expanded_nodes, 5, "{}", name);
        }
    }

    #[test]
    fn test_fallback_draws_from_every_legal_move() {
        let board = board("XXO|OOX|X..");
        let mut seen = Vec::new();
        for seed in 0..64 {
            let outcome = breadth_first(&board, Player::X, &mut SessionRng::new(seed)).unwrap();
            if !seen.contains(&outcome.position) {
                seen.push(outcome.position);
            }
        }

        seen.sort_by_key(|p| p.to_index());
        assert_eq!(seen, vec![Position::new(2, 1), Position::new(2, 2)]);
    }

    #[test]
    fn test_single_cell_left_without_win_is_played() {
        let board = board("XOX|XOO|OX.");
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::X, &mut SessionRng::new(2)).unwrap();
            assert_eq!(outcome.position, Position::new(2, 2), "{}", name);
            assert_eq!(outcome.source, MoveSource::Fallback, "{}", name);
        }
    }

    #[test]
    fn test_empty_board_terminates_with_legal_move() {
        let board = Board::new();
        for (name, strategy) in STRATEGIES {
            let outcome = strategy(&board, Player::X, &mut SessionRng::new(9)).unwrap();
            assert!(board.legal_moves().contains(&outcome.position), "{}", name);
            assert!(outcome.expanded_nodes <= 362_880, "{}", name);
        }
    }

    #[test]
    fn test_search_leaves_input_board_untouched() {
        let board = board("X..|.O.|...");
        let snapshot = board;
        for (_, strategy) in STRATEGIES {
            strategy(&board, Player::X, &mut SessionRng::new(4)).unwrap();
        }

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_uniform_cost_matches_breadth_first() {
        let boards = [
            "...|...|...",
            "X..|...|...",
            "X..|.O.|...",
            "XO.|.X.|O..",
            "OO.|X..|...",
            "XXO|OOX|X..",
        ];
        for s in boards {
            let board = board(s);
            for player in [Player::X, Player::O] {
                let bfs = breadth_first(&board, player, &mut SessionRng::new(21)).unwrap();
                let ucs = uniform_cost(&board, player, &mut SessionRng::new(21)).unwrap();
                assert_eq!(bfs, ucs, "board {} player {}", s, player);
            }
        }
    }

    #[test]
    fn test_cost_queue_orders_by_cost_then_insertion() {
        let mut queue = CostQueue::default();
        let node = |cost| SearchNode {
            board: Board::new(),
            player: Player::X,
            cost,
        };
        queue.push(node(2));
        queue.push(node(1));
        queue.push(node(1));
        queue.push(node(0));

        let order: Vec<u32> = std::iter::from_fn(|| queue.pop()).map(|n| n.cost).collect();

        assert_eq!(order, vec![0, 1, 1, 2]);
        assert_eq!(queue.next_sequence, 4);
    }
}

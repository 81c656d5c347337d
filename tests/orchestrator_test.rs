//! Tests for the match loop with scripted move providers.

mod common;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use strictly_othello::{
    Board, Color, Game, GreedyPlayer, MatchEvent, Move, MoveProvider, Orchestrator, Outcome,
    RejectedMove, rules,
};
use tokio::sync::mpsc;

/// Answers from a fixed script and records every rejection it is told about.
struct ScriptedPlayer {
    name: String,
    script: VecDeque<String>,
    rejections: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPlayer {
    fn new(name: &str, script: &[&str]) -> (Self, Arc<Mutex<Vec<String>>>) {
        let rejections = Arc::new(Mutex::new(Vec::new()));
        let player = Self {
            name: name.to_string(),
            script: script.iter().map(|s| s.to_string()).collect(),
            rejections: Arc::clone(&rejections),
        };
        (player, rejections)
    }
}

#[async_trait::async_trait]
impl MoveProvider for ScriptedPlayer {
    async fn request_move(&mut self, _board: &Board, _color: Color) -> anyhow::Result<String> {
        self.script
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn rejected(&mut self, input: &str, reason: &RejectedMove) {
        self.rejections
            .lock()
            .unwrap()
            .push(format!("{}: {}", input, reason));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays the first legal move in row-major order.
struct FirstLegalPlayer;

#[async_trait::async_trait]
impl MoveProvider for FirstLegalPlayer {
    async fn request_move(&mut self, board: &Board, color: Color) -> anyhow::Result<String> {
        rules::legal_moves(board, color)
            .first()
            .map(|c| c.to_string())
            .ok_or_else(|| anyhow::anyhow!("asked to move without a legal move"))
    }

    fn name(&self) -> &str {
        "first-legal"
    }
}

fn drain(mut rx: mpsc::UnboundedReceiver<MatchEvent>) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn moves_made(events: &[MatchEvent]) -> Vec<Move> {
    events
        .iter()
        .filter_map(|event| match event {
            MatchEvent::MoveMade { mv, .. } => Some(*mv),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_full_match_with_skips() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut orchestrator =
        Orchestrator::new(Box::new(FirstLegalPlayer), Box::new(FirstLegalPlayer)).with_events(tx);

    let score = orchestrator.run().await.unwrap();
    assert_eq!((score.black, score.white), (19, 45));
    assert_eq!(score.outcome, Outcome::WhiteWins);

    let events = drain(rx);
    assert_eq!(events.last(), Some(&MatchEvent::GameOver(score)));

    let moves = moves_made(&events);
    let played: Vec<String> = moves.iter().map(|mv| mv.coordinate.to_string()).collect();
    assert_eq!(played, common::FIRST_LEGAL_GAME);
    assert!(moves[17..21].iter().all(|mv| mv.color == Color::White));
    assert_eq!(orchestrator.game().history(), moves.as_slice());

    let Some(MatchEvent::MoveMade { board, .. }) = events.iter().rev().nth(1) else {
        panic!("expected the last move before game over");
    };
    assert_eq!(board, orchestrator.game().board());
}

#[tokio::test]
async fn test_bad_input_is_reprompted_without_mutation() {
    let (black, black_rejections) =
        ScriptedPlayer::new("Black script", &["", "i4", "a9", "a1", "d4", " D3 "]);
    let (white, _) = ScriptedPlayer::new("White script", &[]);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(Box::new(black), Box::new(white)).with_events(tx);

    let failure = orchestrator.run().await.unwrap_err();
    assert_eq!(failure.provider, "White script");
    assert_eq!(failure.message, "script exhausted");

    assert_eq!(
        *black_rejections.lock().unwrap(),
        vec![
            ": Input must be length 2 (got 0)".to_string(),
            "i4: Column out of bounds: 'i'".to_string(),
            "a9: Row out of bounds: '9'".to_string(),
            "a1: No pieces would be turned by playing a1".to_string(),
            "d4: Coordinate d4 is already taken".to_string(),
        ]
    );

    let events = drain(rx);
    assert_eq!(events.len(), 6);
    assert!(events[..5].iter().all(|event| matches!(
        event,
        MatchEvent::MoveRejected {
            color: Color::Black,
            ..
        }
    )));
    let MatchEvent::MoveMade { mv, flipped, board } = &events[5] else {
        panic!("expected a move, got {:?}", events[5]);
    };
    assert_eq!(*mv, Move::new(Color::Black, common::at("d3")));
    assert_eq!(*flipped, 1);
    assert_eq!(board, orchestrator.game().board());
    assert_eq!(orchestrator.game().history().len(), 1);
    assert_eq!(orchestrator.game().to_move(), Some(Color::White));
}

#[tokio::test]
async fn test_provider_failure_is_fatal() {
    let (black, _) = ScriptedPlayer::new("Black script", &[]);
    let mut orchestrator = Orchestrator::new(Box::new(black), Box::new(FirstLegalPlayer));

    let failure = orchestrator.run().await.unwrap_err();
    assert_eq!(failure.provider, "Black script");
    assert!(failure.to_string().contains("Move provider Black script failed"));
    assert_eq!(orchestrator.game(), &Game::new());
}

#[tokio::test]
async fn test_finished_game_asks_nobody() {
    let game = Game::from_position(Board::empty(), Color::Black);
    let (black, _) = ScriptedPlayer::new("Black script", &[]);
    let (white, _) = ScriptedPlayer::new("White script", &[]);
    let mut orchestrator = Orchestrator::from_game(game, Box::new(black), Box::new(white));

    let score = orchestrator.run().await.unwrap();
    assert_eq!((score.black, score.white), (0, 0));
    assert_eq!(score.outcome, Outcome::Tie);
}

#[tokio::test]
async fn test_greedy_match_completes() {
    let mut orchestrator = Orchestrator::new(
        Box::new(GreedyPlayer::new("Greedy black")),
        Box::new(GreedyPlayer::new("Greedy white")),
    );

    let score = orchestrator.run().await.unwrap();
    assert_eq!((score.black, score.white), (19, 45));
    assert_eq!(orchestrator.game().history().len(), 60);
    assert!(orchestrator.game().is_over());
}

#[tokio::test]
async fn test_dropped_event_receiver_is_harmless() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let mut orchestrator =
        Orchestrator::new(Box::new(FirstLegalPlayer), Box::new(FirstLegalPlayer)).with_events(tx);
    assert!(orchestrator.run().await.is_ok());
}

#[tokio::test]
async fn test_events_can_be_consumed_while_playing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::new(
        Box::new(GreedyPlayer::new("Greedy black")),
        Box::new(GreedyPlayer::new("Greedy white")),
    )
    .with_events(tx);

    let display = tokio::spawn(async move {
        let mut moves = 0;
        while let Some(event) = rx.recv().await {
            if matches!(event, MatchEvent::MoveMade { .. }) {
                moves += 1;
            }
        }
        moves
    });

    let mut orchestrator = orchestrator;
    orchestrator.run().await.unwrap();
    let game = orchestrator.into_game();

    // Dropping the orchestrator closes the channel, so the consumer finishes.
    assert_eq!(display.await.unwrap(), game.history().len());
}

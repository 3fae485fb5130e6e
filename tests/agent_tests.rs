use std::io::Cursor;

use seabattle::{
    Agent, AgentError, AutomatedAgent, Coordinate, Grid, HumanAgent, Orientation, ShotResult,
    Vessel,
};

fn human(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
    HumanAgent::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn printed(agent: HumanAgent<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(agent.into_output()).unwrap()
}

fn sample_grid() -> Grid {
    let mut grid = Grid::new(6);
    grid.place_vessel(Vessel::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    grid.place_vessel(Vessel::new(Coordinate::new(3, 3), 2, Orientation::Vertical))
        .unwrap();
    grid
}

#[test]
fn test_human_reprompts_on_malformed_input() {
    let grid = Grid::new(6);
    let mut agent = human("a b\n1\n\n2 3\n");
    assert_eq!(agent.choose_target(&grid).unwrap(), Coordinate::new(1, 2));
    let out = printed(agent);
    assert!(out.contains("Enter numbers!"));
    assert!(out.contains("Enter 2 coordinates!"));
    assert_eq!(out.matches("Your shot: ").count(), 4);
}

#[test]
fn test_human_input_closed() {
    let grid = Grid::new(6);
    let mut agent = human("oops\n");
    assert_eq!(agent.choose_target(&grid).unwrap_err(), AgentError::InputClosed);
}

#[test]
fn test_human_turn_retries_board_errors() {
    let mut grid = sample_grid();
    let mut agent = human("9 9\n1 1\n1 1\n6 6\n");

    // off the board, then a sinking shot: turn repeats
    assert!(agent.take_turn(&mut grid).unwrap());
    assert_eq!(grid.sunk_count(), 1);

    // already targeted, then a miss: turn ends
    assert!(!agent.take_turn(&mut grid).unwrap());
    assert_eq!(grid.recent_shots().len(), 2);

    let out = printed(agent);
    assert!(out.contains("off the board"));
    assert!(out.contains("Sunk!"));
    assert!(out.contains("already fired"));
    assert!(out.contains("Miss!"));
}

#[test]
fn test_human_hit_repeats_turn() {
    let mut grid = sample_grid();
    let mut agent = human("4 4\n");
    assert!(agent.take_turn(&mut grid).unwrap());
    assert_eq!(grid.sunk_count(), 0);
    assert!(printed(agent).contains("Hit!"));
}

#[test]
fn test_automated_targets_stay_in_bounds() {
    let grid = Grid::new(6);
    let mut agent = AutomatedAgent::seeded(99);
    for _ in 0..200 {
        let target = agent.choose_target(&grid).unwrap();
        assert!(grid.contains(target), "{:?} off the board", target);
    }
}

#[test]
fn test_automated_retries_until_free_cell() {
    let mut grid = Grid::new(2);
    grid.place_vessel(Vessel::new(Coordinate::new(1, 1), 1, Orientation::Horizontal))
        .unwrap();
    for c in [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 0)] {
        assert_eq!(grid.fire_at(c).unwrap(), ShotResult::Miss);
    }
    let mut agent = AutomatedAgent::seeded(3);
    assert!(agent.take_turn(&mut grid).unwrap());
    assert!(grid.all_sunk());
    assert_eq!(grid.untargeted_count(), 0);
}

#[test]
fn test_turn_on_exhausted_grid() {
    let mut grid = Grid::new(1);
    grid.fire_at(Coordinate::new(0, 0)).unwrap();
    let mut agent = AutomatedAgent::seeded(1);
    assert_eq!(agent.take_turn(&mut grid).unwrap_err(), AgentError::NoTargetsLeft);
}

#[test]
fn test_agent_names() {
    assert_eq!(AutomatedAgent::seeded(1).name(), "Computer");
    assert_eq!(AutomatedAgent::seeded(1).with_name("Bot").name(), "Bot");
    assert_eq!(human("").name(), "Player");
}

#[test]
fn test_human_sees_board_before_every_shot() {
    let mut grid = sample_grid();
    grid.set_hidden(true);
    let mut agent = human("1 1\n6 6\n");

    assert!(agent.take_turn(&mut grid).unwrap());
    assert!(!agent.take_turn(&mut grid).unwrap());

    let out = printed(agent);
    let boards: Vec<&str> = out.split("Opponent board:").skip(1).collect();
    assert_eq!(boards.len(), 2);
    // the repeat shot is taken against a board showing the revealed ring
    assert!(!boards[0].contains('*'));
    assert!(boards[1].contains('*'));
}

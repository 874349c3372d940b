//! Gameplay properties driven tick by tick through the facade.

use trex_run::core::{
    collides, prune_offscreen, EndReason, Game, GameSession, Obstacle, Player, SessionStatus,
    SimpleRng,
};
use trex_run::types::{GameAction, GameConfig, ObstacleKind, Phase, PLAYER_X};

fn playing_game(seed: u32) -> Game {
    let mut game = Game::new(GameConfig::default(), seed);
    game.apply_action(GameAction::Start);
    game
}

#[test]
fn test_player_never_rises_without_jump() {
    let config = GameConfig::default();
    let mut player = Player::new(&config);
    let mut last_y = player.y;
    for _ in 0..2000 {
        player.update(&config);
        assert!(player.y >= last_y);
        assert!(!player.is_jumping);
        last_y = player.y;
    }
}

#[test]
fn test_jump_trajectory_is_single_peaked() {
    let config = GameConfig::default();
    let ground = config.player_ground_y();
    let mut player = Player::new(&config);
    player.jump();
    assert!(player.is_jumping);

    let mut ys = vec![player.y];
    while player.is_jumping {
        player.update(&config);
        ys.push(player.y);
        assert!(ys.len() < 100, "jump never landed");
    }

    let apex = ys.iter().copied().min().unwrap();
    let first_apex = ys.iter().position(|y| *y == apex).unwrap();
    assert!(apex < ground);
    assert!(ys[..=first_apex].windows(2).all(|w| w[1] <= w[0]));
    assert!(ys[first_apex..].windows(2).all(|w| w[1] >= w[0]));

    // Back on the ground exactly once, at the end.
    let touchdowns = ys[1..].iter().filter(|y| **y == ground).count();
    assert_eq!(touchdowns, 1);
    assert_eq!(*ys.last().unwrap(), ground);

    // Stays down until the next jump.
    for _ in 0..50 {
        player.update(&config);
        assert_eq!(player.y, ground);
    }
}

#[test]
fn test_obstacle_moves_exactly_n_columns() {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(17);
    let mut obstacle = Obstacle::spawn(&config, &mut rng);
    let start = obstacle.x;
    for n in 0..=start {
        assert_eq!(obstacle.x, start - n);
        obstacle.update();
    }
}

#[test]
fn test_prune_after_leaving_screen() {
    let config = GameConfig::default();
    let mut obstacles = vec![Obstacle::new(0, ObstacleKind::Cactus, &config)];
    assert_eq!(prune_offscreen(&mut obstacles), 0);
    obstacles[0].update();
    assert_eq!(prune_offscreen(&mut obstacles), 1);
    assert!(obstacles.is_empty());
}

#[test]
fn test_prune_never_skips_shifted_element() {
    let config = GameConfig::default();
    // Every pattern of five obstacles, each either off-screen or on-screen.
    for mask in 0u32..32 {
        let mut obstacles: Vec<Obstacle> = (0..5)
            .map(|i| {
                let x = if mask & (1 << i) != 0 { -1 } else { 10 + i };
                Obstacle::new(x, ObstacleKind::Cactus, &config)
            })
            .collect();
        let keep: Vec<i32> = obstacles.iter().map(|o| o.x).filter(|x| *x >= 0).collect();

        let removed = prune_offscreen(&mut obstacles);

        assert_eq!(removed as u32, mask.count_ones());
        let xs: Vec<i32> = obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, keep, "mask {:05b}", mask);
    }
}

#[test]
fn test_collision_boundaries() {
    let config = GameConfig::default();
    let mut player = Player::new(&config);
    player.x = 10;

    let touching = Obstacle::new(13, ObstacleKind::Cactus, &config);
    let overlapping = Obstacle::new(12, ObstacleKind::Cactus, &config);
    assert!(!collides(&player, &touching));
    assert!(collides(&player, &overlapping));
}

#[test]
fn test_thousand_ticks_with_periodic_jumps_and_clear_path() {
    let mut game = playing_game(2024);

    for tick in 0..1000 {
        // Keep the lane clear of obstacles.
        game.session_mut().obstacles_mut().clear();
        if tick % 50 == 0 {
            game.apply_action(GameAction::Jump);
        }
        game.tick();
    }

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.session().score(), 1000);
    assert_eq!(game.session().frame_count(), 1000);
}

#[test]
fn test_obstacle_on_player_triggers_game_over() {
    let mut game = playing_game(1);
    let config = *game.config();
    let player = *game.session().player();
    game.session_mut()
        .obstacles_mut()
        .push(Obstacle::new(player.x, ObstacleKind::Cactus, &config));

    let score_before = game.session().score();
    let report = game.tick().unwrap();

    // Caught before the obstacle moves past the player's column.
    assert!(report.collided);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(
        game.session().status(),
        SessionStatus::Over(EndReason::Collision)
    );
    assert_eq!(game.session().score(), score_before);

    // Just past the hitbox: the obstacle moves into it during the tick.
    let mut game = playing_game(1);
    game.session_mut()
        .obstacles_mut()
        .push(Obstacle::new(PLAYER_X + 3, ObstacleKind::Saguaro, &config));
    game.tick();
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(
        game.session().status(),
        SessionStatus::Over(EndReason::Collision)
    );
}

#[test]
fn test_unattended_run_eventually_collides() {
    let mut game = playing_game(3);
    let mut ticks = 0;
    while game.phase() == Phase::Playing {
        game.tick();
        ticks += 1;
        assert!(ticks < 200, "first obstacle should reach the player");
    }
    // First obstacle spawns on frame 0 at x=78 and reaches column 7 on tick 71.
    assert_eq!(ticks, 71);
    assert_eq!(game.session().score(), 71);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = playing_game(5);
    for _ in 0..40 {
        game.tick();
    }
    game.apply_action(GameAction::Jump);
    game.tick();
    assert!(game.session().player().is_jumping);
    game.apply_action(GameAction::Quit);
    assert_eq!(game.phase(), Phase::GameOver);

    game.apply_action(GameAction::Restart);

    let config = *game.config();
    let fresh = GameSession::new(config);
    let session = game.session();
    assert_eq!(session.score(), 0);
    assert!(session.obstacles().is_empty());
    assert_eq!(session.player().x, PLAYER_X);
    assert_eq!(session.player().y, config.player_ground_y());
    assert!(!session.player().is_jumping);
    assert_eq!(session.frame_count(), fresh.frame_count());
    assert_eq!(session.status(), SessionStatus::Running);
    assert_eq!(game.phase(), Phase::StartScreen);
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed| {
        let mut game = playing_game(seed);
        let mut trace = Vec::new();
        for _ in 0..300 {
            game.session_mut().player_mut().y = 0;
            game.tick();
            trace.push(game.session().obstacles().iter().map(|o| (o.x, o.kind)).collect::<Vec<_>>());
        }
        trace
    };
    assert_eq!(run(77), run(77));
}

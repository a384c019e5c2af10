//! Frame-driven game lifecycle
//!
//! [`Game`] is the single entry point for the outside world: the input
//! source calls [`Game::set_input`], the UI calls [`Game::toggle_pause`] and
//! [`Game::restart`], and the frame loop calls [`Game::advance`] once per
//! refresh and renders the returned [`Snapshot`].

use rand_pcg::Pcg32;

use super::control::{AiTuning, update_ai, update_player};
use super::physics::advance_ball;
use super::random::{RandomSource, seeded};
use super::snapshot::{Snapshot, StatusKey};
use super::state::{Ball, GameEvent, GameState, InputSignals, Lifecycle, Paddle, Phase, Side};
use crate::consts::*;
use crate::settings::Settings;

/// One match: state, AI tuning and the random source
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = Pcg32> {
    /// Public for drivers and tests; only `Game` mutates score and phase
    pub state: GameState,
    status: StatusKey,
    ai: AiTuning,
    events: Vec<GameEvent>,
    rng: R,
}

impl Game<Pcg32> {
    /// New match using the seed from `settings` (random if unset)
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        Self::with_rng(settings, seeded(seed))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_rng(settings: &Settings, rng: R) -> Self {
        Self {
            state: GameState::default(),
            status: StatusKey::Ready,
            ai: settings.clone().sanitized().ai_tuning(),
            events: Vec::new(),
            rng,
        }
    }

    pub fn status(&self) -> StatusKey {
        self.status
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle()
    }

    /// Events from the most recent `advance`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.status)
    }

    /// Replace the held input; takes effect on the next `advance`
    pub fn set_input(&mut self, input: InputSignals) {
        self.state.input = input;
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
        self.status = if self.state.paused {
            StatusKey::Paused
        } else if self.state.phase == Phase::Playing {
            StatusKey::Running
        } else {
            StatusKey::LetsGo
        };
        log::debug!("Pause toggled: paused={}", self.state.paused);
    }

    /// Zero the score, center the paddles and queue a fresh serve
    pub fn restart(&mut self) {
        let state = &mut self.state;
        state.score = Default::default();
        state.left.y = Paddle::centered_y();
        state.right.y = Paddle::centered_y();
        state.ball = Ball::default();
        state.serve_toward = Side::Right;
        state.phase = Phase::Idle;
        state.paused = false;
        self.status = StatusKey::Restarted;
        log::info!("Game restarted");
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// `dt` must be non-negative and should be clamped by the caller (see
    /// `MAX_FRAME_DT`) so the number of physics sub-steps stays bounded.
    pub fn advance(&mut self, dt: f32) -> Snapshot {
        self.events.clear();

        if self.state.paused {
            return self.snapshot();
        }

        if self.state.phase == Phase::Idle {
            self.serve(self.state.serve_toward);
        }

        // Paddles stay live during the serve countdown
        update_player(&mut self.state.left, &self.state.input, dt);
        update_ai(&mut self.state.right, &self.state.ball, &self.ai, dt);

        match self.state.phase {
            Phase::Serving { timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    self.state.phase = Phase::Playing;
                    self.status = StatusKey::Running;
                    log::debug!("Ball live");
                } else {
                    self.state.phase = Phase::Serving { timer };
                }
            }
            Phase::Playing => {
                let state = &mut self.state;
                let scored = advance_ball(
                    &mut state.ball,
                    dt,
                    &state.left,
                    &state.right,
                    &mut self.rng,
                    &mut self.events,
                );
                if let Some(scorer) = scored {
                    self.award_point(scorer);
                }
            }
            Phase::Idle => {}
        }

        self.snapshot()
    }

    fn award_point(&mut self, scorer: Side) {
        self.state.score.award(scorer);
        self.events.push(GameEvent::Scored(scorer));
        self.status = StatusKey::Point;
        log::info!(
            "Point to {:?} ({} : {})",
            scorer,
            self.state.score.left,
            self.state.score.right
        );
        // The side that conceded receives the next serve (left point -> serve right)
        self.serve(scorer.opposite());
    }

    fn serve(&mut self, toward: Side) {
        self.state.serve_toward = toward;
        self.state.ball.serve(toward, &mut self.rng);
        self.state.phase = Phase::Serving { timer: SERVE_DELAY };
        self.events.push(GameEvent::Served(toward));
        log::debug!("Serve toward {:?}", toward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::FixedRandom;
    use glam::Vec2;
    use proptest::prelude::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn game() -> Game<Pcg32> {
        Game::with_rng(&Settings::default(), seeded(12345))
    }

    /// Run frames until the serve countdown is over
    fn start_rally<R: RandomSource>(game: &mut Game<R>) {
        game.advance(0.0);
        game.advance(SERVE_DELAY + 0.01);
        assert_eq!(game.lifecycle(), Lifecycle::Playing);
    }

    #[test]
    fn test_new_game_serves_on_first_frame() {
        let mut game = game();
        assert_eq!(game.lifecycle(), Lifecycle::Idle);
        assert_eq!(game.status(), StatusKey::Ready);

        let snap = game.advance(0.0);
        assert_eq!(snap.lifecycle, Lifecycle::Serving);
        assert_eq!(game.events(), &[GameEvent::Served(Side::Right)]);
        assert!(game.state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_countdown_to_playing() {
        let mut game = game();
        game.advance(0.0);

        for _ in 0..40 {
            game.advance(0.01);
        }
        assert_eq!(game.lifecycle(), Lifecycle::Serving);
        // Ball stays parked until the countdown ends
        assert_eq!(game.state.ball.pos, Vec2::new(600.0, 360.0));

        for _ in 0..41 {
            game.advance(0.01);
        }
        assert_eq!(game.lifecycle(), Lifecycle::Playing);
        assert_eq!(game.status(), StatusKey::Running);
    }

    #[test]
    fn test_paddles_move_while_serving() {
        let mut game = game();
        game.set_input(InputSignals {
            down: true,
            ..Default::default()
        });
        game.advance(0.0);
        game.advance(0.1);
        assert_eq!(game.lifecycle(), Lifecycle::Serving);
        assert!((game.state.left.y - (300.0 + PADDLE_SPEED * 0.1)).abs() < 1e-3);
    }

    #[test]
    fn test_left_paddle_return() {
        let mut game = game();
        start_rally(&mut game);

        game.state.left.y = 300.0;
        game.state.ball.pos = Vec2::new(40.0, 360.0);
        game.state.ball.vel = Vec2::new(-350.0, 0.0);
        game.state.ball.speed = 350.0;

        let snap = game.advance(0.02);

        assert!(game.events().contains(&GameEvent::PaddleHit(Side::Left)));
        assert!(!game.events().iter().any(|e| matches!(e, GameEvent::Scored(_))));
        assert_eq!(snap.score.left + snap.score.right, 0);
        assert!(game.state.ball.vel.x > 0.0);
        assert!(snap.ball.x >= 34.0 + 16.0 + 10.0);
    }

    #[test]
    fn test_left_score_serves_toward_right() {
        let mut game = game();
        start_rally(&mut game);

        // Already past the right paddle
        game.state.ball.pos = Vec2::new(1205.0, 360.0);
        game.state.ball.vel = Vec2::new(350.0, 0.0);

        let snap = game.advance(0.05);

        assert_eq!(snap.score.left, 1);
        assert_eq!(snap.score.right, 0);
        assert_eq!(snap.lifecycle, Lifecycle::Serving);
        assert_eq!(snap.status, StatusKey::Point);
        assert_eq!(snap.ball, Vec2::new(600.0, 360.0));
        assert!(game.state.ball.vel.x > 0.0);
        assert_eq!(
            game.events(),
            &[GameEvent::Scored(Side::Left), GameEvent::Served(Side::Right)]
        );
    }

    #[test]
    fn test_right_score_serves_toward_left() {
        let mut game = game();
        start_rally(&mut game);

        game.state.left.y = 0.0;
        game.state.ball.pos = Vec2::new(-5.0, 600.0);
        game.state.ball.vel = Vec2::new(-350.0, 0.0);

        let snap = game.advance(0.05);

        assert_eq!(snap.score.right, 1);
        assert_eq!(snap.score.left, 0);
        assert!(game.state.ball.vel.x < 0.0);
        assert_eq!(game.state.ball.speed, BALL_BASE_SPEED);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = game();
        start_rally(&mut game);
        game.set_input(InputSignals {
            up: true,
            ..Default::default()
        });
        game.advance(FRAME);

        game.toggle_pause();
        let frozen = game.snapshot();
        assert_eq!(frozen.lifecycle, Lifecycle::Paused);

        for _ in 0..30 {
            let snap = game.advance(FRAME);
            assert_eq!(snap, frozen);
            assert!(game.events().is_empty());
        }
    }

    #[test]
    fn test_toggle_pause_twice_restores() {
        let mut game = game();
        start_rally(&mut game);
        game.toggle_pause();
        assert_eq!(game.lifecycle(), Lifecycle::Paused);
        game.toggle_pause();
        assert_eq!(game.lifecycle(), Lifecycle::Playing);
        assert_eq!(game.status(), StatusKey::Running);

        // Pausing during the countdown resumes into it
        let mut game = self::game();
        game.advance(0.0);
        game.toggle_pause();
        game.toggle_pause();
        assert_eq!(game.lifecycle(), Lifecycle::Serving);
        assert_eq!(game.status(), StatusKey::LetsGo);
    }

    #[test]
    fn test_restart_resets_cleanly() {
        let mut game = game();
        start_rally(&mut game);
        game.state.score.left = 3;
        game.state.score.right = 5;
        game.state.left.y = 12.0;
        game.state.right.y = 590.0;
        game.state.ball.pos = Vec2::new(300.0, 100.0);
        game.toggle_pause();

        game.restart();
        assert_eq!(game.lifecycle(), Lifecycle::Idle);
        assert_eq!(game.status(), StatusKey::Restarted);

        let snap = game.advance(0.0);
        assert_eq!(snap.score.left, 0);
        assert_eq!(snap.score.right, 0);
        assert_eq!(snap.left_paddle_y, Paddle::centered_y());
        assert_eq!(snap.right_paddle_y, Paddle::centered_y());
        assert_eq!(snap.lifecycle, Lifecycle::Serving);
        assert_eq!(snap.ball, Vec2::new(600.0, 360.0));
    }

    #[test]
    fn test_fixed_random_gives_exact_trajectory() {
        let mut game = Game::with_rng(&Settings::default(), FixedRandom(1.0));
        game.advance(0.0);
        assert_eq!(game.state.ball.vel.x, BALL_BASE_SPEED);
        assert!((game.state.ball.vel.y - BALL_BASE_SPEED * 0.9).abs() < 1e-3);
    }

    #[test]
    fn test_bad_ai_tuning_is_sanitized() {
        let settings = Settings {
            ai_lag_factor: -1.0,
            ..Default::default()
        };
        let mut game = Game::with_rng(&settings, seeded(1));
        game.advance(0.0);
        // AI reads the parked ball's position during the countdown
        game.state.ball.pos.y = 600.0;

        game.advance(FRAME);
        assert!(game.state.right.y > Paddle::centered_y());
    }

    #[test]
    fn test_long_match_holds_invariants() {
        let mut game = game();
        let mut hits = 0;
        let mut points = 0;

        for _ in 0..3600 {
            // Stand-in human: chase the ball with the pointer
            let ball_y = game.state.ball.pos.y;
            game.set_input(InputSignals {
                pointer_active: true,
                pointer_y: ball_y,
                ..Default::default()
            });
            let snap = game.advance(FRAME);

            for paddle_y in [snap.left_paddle_y, snap.right_paddle_y] {
                assert!((0.0..=ARENA_HEIGHT - PADDLE_HEIGHT).contains(&paddle_y));
            }
            assert!(game.state.ball.exited().is_none());
            for event in game.events() {
                match event {
                    GameEvent::PaddleHit(_) => hits += 1,
                    GameEvent::Scored(_) => points += 1,
                    _ => {}
                }
            }
        }

        assert!(hits > 0);
        let snap = game.snapshot();
        assert_eq!(snap.score.left + snap.score.right, points);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Advance(f32),
        Input(InputSignals),
        TogglePause,
        Restart,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            8 => (0.0f32..MAX_FRAME_DT).prop_map(Op::Advance),
            2 => (any::<bool>(), any::<bool>(), any::<bool>(), -500.0f32..1500.0).prop_map(
                |(up, down, pointer_active, pointer_y)| Op::Input(InputSignals {
                    up,
                    down,
                    pointer_active,
                    pointer_y,
                })
            ),
            1 => Just(Op::TogglePause),
            1 => Just(Op::Restart),
        ]
    }

    proptest! {
        /// Paddles stay in bounds and the ball never lingers off-arena
        #[test]
        fn prop_bounds_hold(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..400)) {
            let mut game = Game::with_rng(&Settings::default(), seeded(seed));
            for op in ops {
                match op {
                    Op::Advance(dt) => { game.advance(dt); }
                    Op::Input(input) => game.set_input(input),
                    Op::TogglePause => game.toggle_pause(),
                    Op::Restart => game.restart(),
                }
                let max_y = ARENA_HEIGHT - PADDLE_HEIGHT;
                prop_assert!(game.state.left.y >= 0.0 && game.state.left.y <= max_y);
                prop_assert!(game.state.right.y >= 0.0 && game.state.right.y <= max_y);
                prop_assert!(game.state.ball.exited().is_none());
            }
        }

        /// Speed only grows within a rally and stays in range
        #[test]
        fn prop_speed_monotonic_in_rally(seed in any::<u64>(), frames in 60usize..1200) {
            let mut game = Game::with_rng(&Settings::default(), seeded(seed));
            let mut last_speed = game.state.ball.speed;
            for _ in 0..frames {
                game.advance(FRAME);
                let speed = game.state.ball.speed;
                let new_rally = game
                    .events()
                    .iter()
                    .any(|e| matches!(e, GameEvent::Served(_)));
                if !new_rally {
                    prop_assert!(speed >= last_speed);
                }
                prop_assert!(speed >= BALL_BASE_SPEED && speed <= BALL_MAX_SPEED);
                last_speed = speed;
            }
        }

        /// Exactly one point per exit
        #[test]
        fn prop_one_point_per_exit(seed in any::<u64>(), frames in 60usize..1200) {
            let mut game = Game::with_rng(&Settings::default(), seeded(seed));
            for _ in 0..frames {
                let before = game.state.score;
                game.advance(FRAME);
                let after = game.state.score;
                let gained = (after.left - before.left) + (after.right - before.right);
                let scored = game
                    .events()
                    .iter()
                    .filter(|e| matches!(e, GameEvent::Scored(_)))
                    .count() as u32;
                prop_assert!(gained <= 1);
                prop_assert_eq!(gained, scored);
            }
        }
    }
}

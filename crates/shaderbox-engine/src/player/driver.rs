use crate::payload::UniformPayload;
use crate::session::DrawError;

use super::{Drawn, FrameInfo, FrameScheduler, Hook, Renderer, TickCtx};

/// Frame driver lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayerState {
    /// Never played.
    Idle,
    /// Ticks are being scheduled.
    Running,
    /// Stopped after running; `play` resumes.
    Stopped,
}

/// Drives one `before_render` / draw / `after_render` triple per host frame.
///
/// There is no frame skipping and no back-pressure: the next frame is requested
/// right after the current one is submitted.
pub struct Player {
    state: PlayerState,
    /// A scheduled callback that has not been delivered or cancelled yet.
    pending: bool,
    params: UniformPayload,
    before_render: Hook,
    after_render: Hook,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
            pending: false,
            params: UniformPayload::new(),
            before_render: Box::new(|_| {}),
            after_render: Box::new(|_| {}),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayerState::Running
    }

    /// Whether the next delivered host frame will run a tick.
    pub fn has_pending_frame(&self) -> bool {
        self.state == PlayerState::Running && self.pending
    }

    /// Current payload.
    pub fn params(&self) -> &UniformPayload {
        &self.params
    }

    /// Starts (or resumes) the loop by requesting the first frame.
    ///
    /// No-op while already running.
    pub fn play(&mut self, scheduler: &dyn FrameScheduler) {
        if self.state == PlayerState::Running {
            return;
        }
        self.state = PlayerState::Running;
        self.schedule(scheduler);
        log::debug!("player running");
    }

    /// Cancels the pending frame. Idempotent; a never-played player stays idle.
    pub fn stop(&mut self) {
        self.pending = false;
        if self.state == PlayerState::Running {
            self.state = PlayerState::Stopped;
            log::debug!("player stopped");
        }
    }

    /// Replaces the payload drawn by the next tick.
    pub fn set_params(&mut self, payload: UniformPayload) {
        self.params = payload;
    }

    /// Replaces the hook run before each draw, from the next tick on.
    pub fn set_before_render(&mut self, hook: impl FnMut(&mut TickCtx<'_>) + 'static) {
        self.before_render = Box::new(hook);
    }

    /// Replaces the hook run after each draw, from the next tick on.
    pub fn set_after_render(&mut self, hook: impl FnMut(&mut TickCtx<'_>) + 'static) {
        self.after_render = Box::new(hook);
    }

    /// Handles one delivered host frame callback.
    ///
    /// Callbacks arriving while stopped, or after their request was cancelled,
    /// are ignored and report [`Drawn::Skipped`]. A draw error stops the
    /// player and is returned.
    pub fn tick(
        &mut self,
        renderer: &mut dyn Renderer,
        frame: FrameInfo,
        scheduler: &dyn FrameScheduler,
    ) -> Result<Drawn, DrawError> {
        if self.state != PlayerState::Running || !self.pending {
            return Ok(Drawn::Skipped);
        }
        self.pending = false;

        let mut stop_requested = false;

        (self.before_render)(&mut TickCtx {
            frame,
            params: &mut self.params,
            stop_requested: &mut stop_requested,
        });

        let drawn = match renderer.draw(&self.params) {
            Ok(drawn) => drawn,
            Err(err) => {
                self.stop();
                return Err(err);
            }
        };

        (self.after_render)(&mut TickCtx {
            frame,
            params: &mut self.params,
            stop_requested: &mut stop_requested,
        });

        if stop_requested {
            self.stop();
        }
        if self.state == PlayerState::Running {
            self.schedule(scheduler);
        }
        Ok(drawn)
    }

    fn schedule(&mut self, scheduler: &dyn FrameScheduler) {
        self.pending = true;
        scheduler.request_frame();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Instant;

    use super::*;
    use crate::time::FrameClock;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct CountingScheduler {
        requests: Cell<u32>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    struct RecordingRenderer {
        log: Log,
        fail_with: Option<DrawError>,
        outcome: Drawn,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, payload: &UniformPayload) -> Result<Drawn, DrawError> {
            self.log
                .borrow_mut()
                .push(format!("draw {:?}", payload.as_floats()));
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(self.outcome),
            }
        }
    }

    fn frame() -> FrameInfo {
        FrameInfo {
            width: 800,
            height: 600,
            time: FrameClock::starting_at(Instant::now()).tick(),
        }
    }

    fn renderer(log: &Log) -> RecordingRenderer {
        RecordingRenderer {
            log: Rc::clone(log),
            fail_with: None,
            outcome: Drawn::Presented,
        }
    }

    fn player_with_logging_hooks(log: &Log) -> Player {
        let mut player = Player::new();
        let before = Rc::clone(log);
        player.set_before_render(move |_| before.borrow_mut().push("before".into()));
        let after = Rc::clone(log);
        player.set_after_render(move |_| after.borrow_mut().push("after".into()));
        player
    }

    #[test]
    fn new_player_is_idle_and_ignores_ticks() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();

        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.tick(&mut renderer(&log), frame(), &sched), Ok(Drawn::Skipped));
        assert!(log.borrow().is_empty());
        assert_eq!(sched.requests.get(), 0);
    }

    #[test]
    fn each_tick_runs_before_draw_after_in_order() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = player_with_logging_hooks(&log);
        let mut r = renderer(&log);

        player.play(&sched);
        for _ in 0..3 {
            player.tick(&mut r, frame(), &sched).unwrap();
        }

        let expected: Vec<String> = (0..3)
            .flat_map(|_| ["before", "draw []", "after"])
            .map(String::from)
            .collect();
        assert_eq!(*log.borrow(), expected);
        // One request from play plus one per completed tick.
        assert_eq!(sched.requests.get(), 4);
    }

    #[test]
    fn play_while_running_does_not_double_schedule() {
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        player.play(&sched);
        player.play(&sched);
        assert_eq!(sched.requests.get(), 1);
    }

    #[test]
    fn stop_cancels_the_pending_tick() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = player_with_logging_hooks(&log);

        player.play(&sched);
        player.stop();
        assert_eq!(player.state(), PlayerState::Stopped);

        player.tick(&mut renderer(&log), frame(), &sched).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn stop_from_a_hook_prevents_the_next_tick_until_play() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = player_with_logging_hooks(&log);
        let after = Rc::clone(&log);
        player.set_after_render(move |tick| {
            after.borrow_mut().push("after".into());
            tick.stop();
        });
        let mut r = renderer(&log);

        player.play(&sched);
        player.tick(&mut r, frame(), &sched).unwrap();
        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(sched.requests.get(), 1);

        player.tick(&mut r, frame(), &sched).unwrap();
        assert_eq!(log.borrow().len(), 3);

        player.play(&sched);
        player.tick(&mut r, frame(), &sched).unwrap();
        assert_eq!(log.borrow().len(), 6);
    }

    #[test]
    fn stop_and_play_resumes_with_a_fresh_request() {
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        player.play(&sched);
        player.stop();
        player.stop();
        player.play(&sched);
        assert!(player.is_running());
        assert_eq!(sched.requests.get(), 2);
    }

    #[test]
    fn stop_on_idle_player_is_a_no_op() {
        let mut player = Player::new();
        player.stop();
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn set_params_is_visible_to_the_next_draw() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        let mut r = renderer(&log);

        player.play(&sched);
        player.set_params(UniformPayload::from_floats(vec![1.0, 2.0]));
        player.tick(&mut r, frame(), &sched).unwrap();

        assert_eq!(*log.borrow(), ["draw [1.0, 2.0]"]);
    }

    #[test]
    fn before_render_writes_reach_the_same_draw() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        player.set_before_render(|tick| {
            let res = tick.frame().resolution();
            let params = tick.params_mut();
            params.clear();
            params.push_vec2(res);
        });

        player.play(&sched);
        player.tick(&mut renderer(&log), frame(), &sched).unwrap();

        assert_eq!(*log.borrow(), ["draw [800.0, 600.0]"]);
    }

    #[test]
    fn replaced_hook_takes_effect_on_next_tick() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        let mut r = renderer(&log);

        player.play(&sched);
        player.set_before_render(|tick| tick.set_params(UniformPayload::from_floats(vec![1.0])));
        player.tick(&mut r, frame(), &sched).unwrap();
        player.set_before_render(|tick| tick.set_params(UniformPayload::from_floats(vec![2.0])));
        player.tick(&mut r, frame(), &sched).unwrap();

        assert_eq!(*log.borrow(), ["draw [1.0]", "draw [2.0]"]);
    }

    #[test]
    fn draw_error_stops_the_player_and_skips_after_render() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = player_with_logging_hooks(&log);
        let mut r = RecordingRenderer {
            log: Rc::clone(&log),
            fail_with: Some(DrawError::PayloadTooLarge {
                len: 256,
                capacity: 128,
            }),
            outcome: Drawn::Presented,
        };

        player.play(&sched);
        let err = player.tick(&mut r, frame(), &sched).unwrap_err();

        assert!(matches!(err, DrawError::PayloadTooLarge { .. }));
        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(*log.borrow(), ["before", "draw []"]);
        assert_eq!(sched.requests.get(), 1);
    }

    #[test]
    fn pending_frame_tracks_schedule_and_stop() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        assert!(!player.has_pending_frame());

        player.play(&sched);
        assert!(player.has_pending_frame());
        player.tick(&mut renderer(&log), frame(), &sched).unwrap();
        assert!(player.has_pending_frame());

        player.stop();
        assert!(!player.has_pending_frame());
    }

    #[test]
    fn presented_and_skipped_draws_are_reported() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();
        let mut r = renderer(&log);

        player.play(&sched);
        assert_eq!(player.tick(&mut r, frame(), &sched), Ok(Drawn::Presented));

        r.outcome = Drawn::Skipped;
        assert_eq!(player.tick(&mut r, frame(), &sched), Ok(Drawn::Skipped));
        // A skipped frame keeps the loop going.
        assert!(player.has_pending_frame());
        assert_eq!(sched.requests.get(), 3);
    }

    #[test]
    fn stale_callback_after_stop_draws_nothing() {
        let log = Log::default();
        let sched = CountingScheduler::default();
        let mut player = Player::new();

        player.play(&sched);
        player.stop();

        assert_eq!(player.tick(&mut renderer(&log), frame(), &sched), Ok(Drawn::Skipped));
        assert!(log.borrow().is_empty());
    }
}

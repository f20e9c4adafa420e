use crate::fps::FrameCounter;
use crate::input::{PointerBus, Subscription};
use crate::player::Player;

/// Per-window handles passed to [`App::mount`](super::App::mount).
pub struct MountCtx<'a> {
    /// Frame driver of the window; install hooks and the initial payload here.
    pub player: &'a mut Player,
    /// Pointer events of the window, in physical pixels.
    pub pointer: &'a PointerBus,
    /// Completed frames of the window; the runtime bumps it after each tick.
    pub frames: &'a FrameCounter,
    pub(crate) subscriptions: &'a mut Vec<Subscription>,
}

impl<'a> MountCtx<'a> {
    pub fn new(
        player: &'a mut Player,
        pointer: &'a PointerBus,
        frames: &'a FrameCounter,
        subscriptions: &'a mut Vec<Subscription>,
    ) -> Self {
        Self {
            player,
            pointer,
            frames,
            subscriptions,
        }
    }

    /// Keeps `sub` alive until the window tears down.
    pub fn keep(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }
}

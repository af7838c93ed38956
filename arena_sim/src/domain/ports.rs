// Port for the time source fire cooldowns are measured against.
pub trait Clock: Send {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> f64;

    /// Called once at the start of every tick with the frame delta.
    /// Wall-clock sources ignore it; simulated sources accumulate it.
    fn advance(&mut self, _delta: f32) {}
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn advance(&mut self, delta: f32) {
        (**self).advance(delta)
    }
}

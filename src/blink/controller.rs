use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::blink::config::BlinkConfig;
use crate::blink::error::BlinkError;
use crate::light::LightEmitter;

/// A dimmed lamp at or below this intensity is switched off entirely
pub const ENABLED_EPSILON: f32 = 0.001;

/// Remaining time at or below this many seconds counts as elapsed.
/// Absorbs the rounding left by summing frame deltas such as 1/60 s.
const EXPIRY_EPSILON: f32 = 1e-4;

/// Observable state of a [`BlinkController`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlinkState {
    /// Blinking disabled or power off; light held steady while powered
    #[default]
    Idle,
    /// Light steady, counting down to the next burst
    WaitingForBurst,
    /// Light flickering
    InBurst,
}

/// Notification queued by a [`BlinkController`].
/// `BurstStarted` and `BurstEnded` always alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    BurstStarted,
    BurstEnded,
    BehaviorChanged { active: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkPhase {
    Lit,
    Dimmed,
}

/// Suspended work, with the time left on each pending wait
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Waiting {
        remaining: f32,
    },
    Burst {
        remaining: f32,
        blink: BlinkPhase,
        blink_remaining: f32,
    },
}

/// Randomized blinking-burst state machine.
///
/// The controller never looks anything up: the host passes the current power
/// state and the light on every call, and drives time with [`advance`].
/// Waits are stored as remaining seconds, so a tick may cross any number of
/// phase boundaries and carries the leftover time into the next phase.
///
/// [`advance`]: BlinkController::advance
#[derive(Debug, Clone)]
pub struct BlinkController {
    config: BlinkConfig,
    blinking_enabled: bool,
    phase: Phase,
    original_intensity: Option<f32>,
    halted: bool,
    faulted: bool,
    events: Vec<BlinkEvent>,
    rng: StdRng,
}

impl BlinkController {
    pub fn new(config: BlinkConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic controller for replays and tests
    pub fn seeded(config: BlinkConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BlinkConfig, rng: StdRng) -> Self {
        let config = config.validated();
        Self {
            blinking_enabled: config.starts_active,
            config,
            phase: Phase::Idle,
            original_intensity: None,
            halted: false,
            faulted: false,
            events: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    pub fn state(&self) -> BlinkState {
        match self.phase {
            Phase::Idle => BlinkState::Idle,
            Phase::Waiting { .. } => BlinkState::WaitingForBurst,
            Phase::Burst { .. } => BlinkState::InBurst,
        }
    }

    pub fn is_blinking_active(&self) -> bool {
        self.blinking_enabled
    }

    pub fn is_in_burst(&self) -> bool {
        matches!(self.phase, Phase::Burst { .. })
    }

    /// Intensity captured at the last power-on, 0 before the first capture
    pub fn original_intensity(&self) -> f32 {
        self.original_intensity.unwrap_or_default()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Pending notifications, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, BlinkEvent> {
        self.events.drain(..)
    }

    /// Host start or re-enable. Recaptures the light intensity when powered.
    pub fn enable(&mut self, power_on: bool, light: &mut impl LightEmitter) -> Result<(), BlinkError> {
        if self.faulted {
            return Err(BlinkError::Faulted);
        }
        if !self.halted && self.phase != Phase::Idle {
            return Ok(());
        }
        self.halted = false;

        if !power_on {
            self.phase = Phase::Idle;
            return Ok(());
        }

        self.original_intensity = Some(light.intensity());
        if self.blinking_enabled {
            self.enter_waiting(light);
        } else {
            self.phase = Phase::Idle;
            self.restore(light);
        }
        Ok(())
    }

    /// Host stop. Ends any open burst, goes idle and stays halted until
    /// [`enable`](BlinkController::enable).
    pub fn disable(&mut self, power_on: bool, light: &mut impl LightEmitter) {
        if self.halted {
            return;
        }
        self.stop(power_on, light);
        self.halted = true;
    }

    /// Permanent shutdown after a configuration error
    pub fn fault(&mut self) {
        self.close_burst();
        self.phase = Phase::Idle;
        self.halted = true;
        self.faulted = true;
    }

    /// The power source just turned on
    pub fn on_power_on(&mut self, light: &mut impl LightEmitter) {
        self.original_intensity = Some(light.intensity());
        if self.halted {
            return;
        }

        self.close_burst();
        if self.blinking_enabled {
            self.enter_waiting(light);
        } else {
            self.phase = Phase::Idle;
            self.restore(light);
        }
    }

    /// The power source just turned off. The light's enabled flag belongs to
    /// the power source at this point, only the intensity is restored.
    pub fn on_power_off(&mut self, light: &mut impl LightEmitter) {
        if self.phase != Phase::Idle {
            self.stop(false, light);
        }
    }

    pub fn set_blinking_behavior(
        &mut self,
        active: bool,
        power_on: bool,
        light: &mut impl LightEmitter,
    ) -> Result<(), BlinkError> {
        if self.faulted {
            return Err(BlinkError::Faulted);
        }

        if self.blinking_enabled != active {
            self.blinking_enabled = active;
            self.events.push(BlinkEvent::BehaviorChanged { active });
        }

        if active {
            if power_on && !self.halted && self.phase == Phase::Idle {
                self.enter_waiting(light);
            }
        } else if self.phase != Phase::Idle {
            self.stop(power_on, light);
        }
        Ok(())
    }

    /// Starts a burst right away, cancelling a pending wait.
    /// Already bursting is a successful no-op.
    pub fn trigger_blinking_burst(
        &mut self,
        power_on: bool,
        light: &mut impl LightEmitter,
    ) -> Result<(), BlinkError> {
        if self.faulted {
            return Err(BlinkError::Faulted);
        }
        if self.halted {
            return Err(BlinkError::Halted);
        }
        if !self.blinking_enabled {
            return Err(BlinkError::BlinkingInactive);
        }
        if !power_on {
            return Err(BlinkError::PoweredOff);
        }

        if !self.is_in_burst() {
            self.capture_if_missing(light);
            self.enter_burst(light);
        }
        Ok(())
    }

    /// Moves the state machine forward by `dt` seconds
    pub fn advance(&mut self, dt: f32, power_on: bool, light: &mut impl LightEmitter) {
        if self.halted {
            return;
        }
        if !power_on || !self.blinking_enabled {
            if self.phase != Phase::Idle {
                self.stop(power_on, light);
            }
            return;
        }
        if self.phase == Phase::Idle {
            self.enter_waiting(light);
        }

        let mut budget = dt.max(0.0);
        loop {
            match self.phase {
                Phase::Idle => return,
                Phase::Waiting { remaining } => {
                    if remaining <= EXPIRY_EPSILON {
                        self.enter_burst(light);
                        continue;
                    }
                    if budget <= 0.0 {
                        return;
                    }
                    let step = remaining.min(budget);
                    self.phase = Phase::Waiting {
                        remaining: remaining - step,
                    };
                    budget -= step;
                }
                Phase::Burst {
                    remaining,
                    blink,
                    blink_remaining,
                } => {
                    if remaining <= EXPIRY_EPSILON {
                        self.finish_burst(light);
                        continue;
                    }
                    if blink_remaining <= EXPIRY_EPSILON {
                        self.next_blink(blink, remaining, light);
                        continue;
                    }
                    if budget <= 0.0 {
                        return;
                    }
                    let step = budget.min(remaining).min(blink_remaining);
                    self.phase = Phase::Burst {
                        remaining: remaining - step,
                        blink,
                        blink_remaining: blink_remaining - step,
                    };
                    budget -= step;
                }
            }
        }
    }

    fn capture_if_missing(&mut self, light: &impl LightEmitter) {
        if self.original_intensity.is_none() {
            self.original_intensity = Some(light.intensity());
        }
    }

    fn restore(&self, light: &mut impl LightEmitter) {
        light.set_intensity(self.original_intensity());
        light.set_enabled(true);
    }

    fn enter_waiting(&mut self, light: &mut impl LightEmitter) {
        self.capture_if_missing(light);
        self.restore(light);
        self.phase = Phase::Waiting {
            remaining: self.config.burst_interval.sample(&mut self.rng),
        };
    }

    fn enter_burst(&mut self, light: &mut impl LightEmitter) {
        self.events.push(BlinkEvent::BurstStarted);
        let remaining = self.config.burst_duration.sample(&mut self.rng);
        self.restore(light);
        self.phase = Phase::Burst {
            remaining,
            blink: BlinkPhase::Lit,
            blink_remaining: self.config.blink_on_duration.sample(&mut self.rng),
        };
    }

    fn next_blink(&mut self, finished: BlinkPhase, remaining: f32, light: &mut impl LightEmitter) {
        let (blink, blink_remaining) = match finished {
            BlinkPhase::Lit => {
                let factor = self.config.dim_factor.sample(&mut self.rng);
                let intensity = self.original_intensity() * factor;
                light.set_intensity(intensity);
                light.set_enabled(intensity > ENABLED_EPSILON);
                (
                    BlinkPhase::Dimmed,
                    self.config.blink_off_duration.sample(&mut self.rng),
                )
            }
            BlinkPhase::Dimmed => {
                self.restore(light);
                (
                    BlinkPhase::Lit,
                    self.config.blink_on_duration.sample(&mut self.rng),
                )
            }
        };
        self.phase = Phase::Burst {
            remaining,
            blink,
            blink_remaining,
        };
    }

    fn finish_burst(&mut self, light: &mut impl LightEmitter) {
        self.close_burst();
        self.enter_waiting(light);
    }

    fn close_burst(&mut self) {
        if self.is_in_burst() {
            self.events.push(BlinkEvent::BurstEnded);
            self.phase = Phase::Idle;
        }
    }

    /// Leaves whatever is running for `Idle`, honoring restore-on-stop.
    /// The light is only switched back on while powered.
    fn stop(&mut self, power_on: bool, light: &mut impl LightEmitter) {
        self.close_burst();
        self.phase = Phase::Idle;

        if self.config.restore_on_stop {
            if let Some(intensity) = self.original_intensity {
                light.set_intensity(intensity);
                if power_on {
                    light.set_enabled(true);
                }
            }
        }
    }
}

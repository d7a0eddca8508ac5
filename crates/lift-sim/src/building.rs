//! The `Building` orchestrator and its tick loop.

use lift_core::{ElevatorId, Passenger, PassengerId, SimClock, SimConfig};
use lift_gen::ArrivalRule;
use lift_policy::{BuildingView, ElevatorView, SchedulingPolicy};

use crate::elevator::Elevator;
use crate::event::{Event, EventKind, EventRecorder, PassengerRecord};
use crate::observer::SimObserver;
use crate::{SimError, SimResult};

/// The simulation orchestrator: owns the elevators, their policies, the
/// waiting pool, the arrival rules, the clock, and the event log.
///
/// Elevators and policies live in parallel vectors indexed by
/// `ElevatorId` — registration order is iteration order for every phase,
/// which keeps runs reproducible (policies read the shared waiting pool,
/// so order matters).
///
/// Passengers are owned by value and *moved* between the waiting pool, an
/// elevator's onboard list, and the final alighted event snapshot, so the
/// "exactly one place at a time" invariant holds structurally — there is
/// no second collection a passenger could simultaneously inhabit.
pub struct Building {
    cfg: SimConfig,
    clock: SimClock,
    elevators: Vec<Elevator>,
    policies: Vec<Box<dyn SchedulingPolicy>>,
    generators: Vec<Box<dyn ArrivalRule>>,
    waiting: Vec<Passenger>,
    recorder: EventRecorder,
    next_passenger: PassengerId,
}

impl Building {
    /// Validate `cfg` and construct an empty building.  All configuration
    /// errors surface here, before any tick can run.
    pub fn new(cfg: SimConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self {
            clock: cfg.make_clock(),
            cfg,
            elevators: Vec::new(),
            policies: Vec::new(),
            generators: Vec::new(),
            waiting: Vec::new(),
            recorder: EventRecorder::new(),
            next_passenger: PassengerId(0),
        })
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Add an elevator with its scheduling policy; returns the stable id
    /// (dense, in registration order).
    pub fn register_elevator(
        &mut self,
        speed_mps: f64,
        policy: Box<dyn SchedulingPolicy>,
    ) -> SimResult<ElevatorId> {
        if !(speed_mps > 0.0) {
            return Err(SimError::InvalidSpeed(speed_mps));
        }
        let id = ElevatorId(self.elevators.len() as u32);
        self.elevators.push(Elevator::new(id, speed_mps));
        self.policies.push(policy);
        Ok(id)
    }

    /// Add a passenger arrival rule.
    pub fn register_generator(&mut self, rule: Box<dyn ArrivalRule>) {
        self.generators.push(rule);
    }

    // ── Read surface ──────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// The event log — the only statistics channel out of the simulation.
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// The hall waiting pool in call order.
    pub fn waiting(&self) -> &[Passenger] {
        &self.waiting
    }

    pub fn elevator(&self, id: ElevatorId) -> SimResult<&Elevator> {
        self.elevators
            .get(id.index())
            .ok_or(SimError::UnknownElevator(id))
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run the simulation to `cfg.duration_ms` (inclusive).
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.now_ms <= self.cfg.duration_ms {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(self.clock.now_ms);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// configured duration).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now_ms;
        observer.on_tick_start(now);

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        //
        // Each rule fires at most once per tick.  The passenger joins the
        // pool *before* policies are notified, so a policy that re-scans
        // the pool and one that only listens to the hook agree on the world.
        for g in 0..self.generators.len() {
            if !self.generators[g].should_fire(now) {
                continue;
            }
            let request = self.generators[g].generate(now, self.cfg.floors);

            // Rules don't know the building they are registered with, so
            // their floors are checked here before a passenger exists.  An
            // out-of-band floor would pin a car against the travel clamp
            // and corrupt every statistic downstream, silently.
            let floors = self.cfg.floors;
            if !(1..=floors).contains(&request.origin_floor)
                || !(1..=floors).contains(&request.target_floor)
            {
                return Err(SimError::RequestOutOfRange {
                    origin_floor: request.origin_floor,
                    target_floor: request.target_floor,
                    floors,
                });
            }

            let passenger = Passenger::new(
                self.next_passenger,
                request.origin_floor,
                request.target_floor,
            )?;
            self.next_passenger = self.next_passenger.next();

            self.recorder.record(Event {
                kind:      EventKind::PassengerCall,
                at_ms:     now,
                elevator:  None,
                passenger: PassengerRecord::from(&passenger),
            });

            let announced = passenger.clone();
            self.waiting.push(passenger);

            // Every elevator's policy hears every hall call.
            for i in 0..self.policies.len() {
                let view = BuildingView {
                    floors:              self.cfg.floors,
                    floor_height_m:      self.cfg.floor_height_m,
                    arrival_tolerance_m: self.cfg.arrival_tolerance_m,
                    now_ms:              now,
                    waiting:             &self.waiting,
                };
                let elevator_view = view_of(&self.elevators[i]);
                self.policies[i].on_passenger_call(&view, &elevator_view, &announced);
            }
        }

        // ── Phase 2: decisions ────────────────────────────────────────────
        //
        // Pure with respect to the world: a policy's only output is the
        // direction the building writes back.  Positions are still the
        // previous tick's — no elevator has moved yet.
        for i in 0..self.elevators.len() {
            let view = BuildingView {
                floors:              self.cfg.floors,
                floor_height_m:      self.cfg.floor_height_m,
                arrival_tolerance_m: self.cfg.arrival_tolerance_m,
                now_ms:              now,
                waiting:             &self.waiting,
            };
            let elevator_view = view_of(&self.elevators[i]);
            let direction = self.policies[i].decide(&view, &elevator_view);
            self.elevators[i].direction = direction;
        }

        // ── Phase 3: physics ──────────────────────────────────────────────
        for elevator in &mut self.elevators {
            elevator.step(&self.cfg, now, &mut self.waiting, &mut self.recorder)?;
        }

        // ── Phase 4: clock and accumulators ───────────────────────────────
        self.clock.advance();
        let dt = self.cfg.tick_interval_ms;
        for p in &mut self.waiting {
            p.add_waiting(dt);
        }
        let mut riding = 0usize;
        for elevator in &mut self.elevators {
            riding += elevator.onboard.len();
            for p in &mut elevator.onboard {
                p.add_ride(dt);
            }
        }

        observer.on_tick_end(self.clock.now_ms, self.waiting.len(), riding);
        Ok(())
    }
}

/// Read-only view of one elevator for the policy layer.
fn view_of(elevator: &Elevator) -> ElevatorView<'_> {
    ElevatorView {
        id:         elevator.id,
        position_m: elevator.position_m,
        direction:  elevator.direction,
        onboard:    &elevator.onboard,
    }
}

//! The dispatcher: validates requests, prices every strategy, and sells one
//! route to the caller.

use faregrid_core::{Grid, Position};
use faregrid_paths::{ContractViolation, RouteResult, Search, StepCommand, StrategyKind, to_steps};

use crate::actor::MovementActor;
use crate::config::DispatchConfig;
use crate::error::{ConfigError, DispatchError, Endpoint};
use crate::option::{Evaluation, PricedOption, READY};
use crate::wallet::Wallet;

/// Where the dispatcher is in the request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    /// Strategies are running. Only observable from inside `evaluate`.
    Evaluating,
    /// A menu is on offer and waiting for a choice.
    Presenting,
    /// The last menu ended in a purchase.
    Committed,
    /// The last menu was cancelled.
    Cancelled,
}

/// What a selection surface reports back about the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choose(usize),
    Cancel,
    Close,
}

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub strategy: StrategyKind,
    pub steps: Vec<StepCommand>,
    pub fare: u32,
}

/// Owns the grid and drives one request at a time through
/// evaluate, present, then commit or cancel.
///
/// Fares are charged to the wallet `W`; purchased steps go to the movement
/// actor `A`.
#[derive(Debug)]
pub struct Dispatcher<W: Wallet, A: MovementActor> {
    grid: Grid,
    config: DispatchConfig,
    wallet: W,
    actor: A,
    state: DispatchState,
    menu: Option<Evaluation>,
}

impl<W: Wallet, A: MovementActor> Dispatcher<W, A> {
    /// Create a dispatcher, rejecting an out-of-range configuration.
    pub fn new(grid: Grid, config: DispatchConfig, wallet: W, actor: A) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "dispatcher over {}x{} grid, quick strategy {}",
            grid.rows(),
            grid.cols(),
            config.quick_strategy
        );
        Ok(Self {
            grid,
            config,
            wallet,
            actor,
            state: DispatchState::Idle,
            menu: None,
        })
    }

    /// Create a dispatcher with the default configuration.
    pub fn with_defaults(grid: Grid, wallet: W, actor: A) -> Self {
        Self {
            grid,
            config: DispatchConfig::default(),
            wallet,
            actor,
            state: DispatchState::Idle,
            menu: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// The menu currently on offer, if presenting.
    pub fn menu(&self) -> Option<&Evaluation> {
        self.menu.as_ref()
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    pub fn actor(&self) -> &A {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut A {
        &mut self.actor
    }

    /// Give back the grid and both collaborators.
    pub fn into_parts(self) -> (Grid, W, A) {
        (self.grid, self.wallet, self.actor)
    }

    /// Convert pixel coordinates to a cell with the configured tile size.
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> Position {
        Position::from_pixel(x, y, self.config.tile_size)
    }

    // -----------------------------------------------------------------------
    // Menu flow
    // -----------------------------------------------------------------------

    /// Run every strategy from `start` to `goal`, price each, and present
    /// the result as a menu.
    ///
    /// A rejected endpoint still produces a menu, with every option disabled
    /// and the reason as its status; no strategy runs in that case. Any menu
    /// already on offer is replaced.
    pub fn evaluate(&mut self, start: Position, goal: Position) -> Evaluation {
        self.state = DispatchState::Evaluating;

        let evaluation = match self.check_endpoints(start, goal) {
            Err(e) => {
                log::info!("evaluate {start} -> {goal} rejected: {e}");
                Evaluation {
                    start,
                    goal,
                    options: StrategyKind::ALL.map(PricedOption::disabled).to_vec(),
                    status: e.to_string(),
                }
            }
            Ok(()) => {
                let options: Vec<PricedOption> = self
                    .config
                    .search
                    .lineup()
                    .iter()
                    .map(|s| self.price_option(s, s.kind(), start, goal))
                    .collect();
                log::info!(
                    "evaluate {start} -> {goal}: {} of {} options available",
                    options.iter().filter(|o| o.is_available()).count(),
                    options.len()
                );
                Evaluation {
                    start,
                    goal,
                    options,
                    status: READY.to_string(),
                }
            }
        };

        self.menu = Some(evaluation.clone());
        self.state = DispatchState::Presenting;
        evaluation
    }

    /// [`evaluate`](Self::evaluate) with pixel coordinates.
    pub fn evaluate_pixels(&mut self, start: (i32, i32), goal: (i32, i32)) -> Evaluation {
        let start = self.pixel_to_cell(start.0, start.1);
        let goal = self.pixel_to_cell(goal.0, goal.1);
        self.evaluate(start, goal)
    }

    /// Buy the menu option at `index`.
    ///
    /// The fare is deducted with a single wallet call. If the wallet refuses,
    /// the menu stays on offer and nothing changes.
    pub fn commit(&mut self, index: usize) -> Result<Purchase, DispatchError> {
        if self.state != DispatchState::Presenting {
            return Err(DispatchError::NotPresenting);
        }
        let Some(menu) = self.menu.as_ref() else {
            return Err(DispatchError::NotPresenting);
        };
        let option = menu.get(index).ok_or(DispatchError::UnknownOption(index))?;
        let Some(fare) = option.fare.amount() else {
            return Err(DispatchError::OptionUnavailable(option.strategy));
        };
        let strategy = option.strategy;
        let steps = to_steps(&option.result.path).map_err(|v| contract_failure(strategy, v))?;

        self.charge(fare)?;
        self.actor.set_pending_steps(steps.clone());
        self.menu = None;
        self.state = DispatchState::Committed;
        log::info!("committed {strategy}: {} steps for {fare}", steps.len());
        Ok(Purchase {
            strategy,
            steps,
            fare,
        })
    }

    /// Abandon the menu. Nothing is charged.
    pub fn cancel(&mut self) -> Result<(), DispatchError> {
        self.leave_menu(DispatchState::Cancelled)?;
        log::info!("menu cancelled");
        Ok(())
    }

    /// Close the menu without choosing, returning to idle.
    pub fn close(&mut self) -> Result<(), DispatchError> {
        self.leave_menu(DispatchState::Idle)?;
        log::debug!("menu closed");
        Ok(())
    }

    /// Apply a selection surface's answer. Returns the purchase for
    /// [`Selection::Choose`].
    pub fn respond(&mut self, selection: Selection) -> Result<Option<Purchase>, DispatchError> {
        match selection {
            Selection::Choose(i) => self.commit(i).map(Some),
            Selection::Cancel => self.cancel().map(|()| None),
            Selection::Close => self.close().map(|()| None),
        }
    }

    // -----------------------------------------------------------------------
    // Quick route
    // -----------------------------------------------------------------------

    /// Route with the configured quick strategy and buy it straight away,
    /// without a menu. The dispatcher state is left as it was.
    pub fn quick_route(&mut self, start: Position, goal: Position) -> Result<Purchase, DispatchError> {
        self.check_endpoints(start, goal)?;

        let strategy = self.config.quick_strategy;
        let result = self.run_checked(&self.config.search.strategy(strategy), strategy, start, goal);
        let Some(fare) = self.config.fare.price(result.len(), result.explored).amount() else {
            log::info!("quick route {start} -> {goal}: {strategy} found nothing");
            return Err(DispatchError::NoRouteFound {
                strategy,
                start,
                goal,
            });
        };
        let steps = to_steps(&result.path).map_err(|v| contract_failure(strategy, v))?;

        self.charge(fare)?;
        self.actor.set_pending_steps(steps.clone());
        log::info!("quick route {start} -> {goal}: {} steps for {fare}", steps.len());
        Ok(Purchase {
            strategy,
            steps,
            fare,
        })
    }

    /// [`quick_route`](Self::quick_route) with pixel coordinates.
    pub fn quick_route_pixels(
        &mut self,
        start: (i32, i32),
        goal: (i32, i32),
    ) -> Result<Purchase, DispatchError> {
        let start = self.pixel_to_cell(start.0, start.1);
        let goal = self.pixel_to_cell(goal.0, goal.1);
        self.quick_route(start, goal)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn check_endpoints(&self, start: Position, goal: Position) -> Result<(), DispatchError> {
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !self.grid.is_walkable(pos) {
                return Err(DispatchError::InvalidEndpoint { which, pos });
            }
        }
        Ok(())
    }

    /// Run `search` and price its route as a menu option tagged `kind`.
    pub(crate) fn price_option<S: Search>(
        &self,
        search: &S,
        kind: StrategyKind,
        start: Position,
        goal: Position,
    ) -> PricedOption {
        let result = self.run_checked(search, kind, start, goal);
        let fare = self.config.fare.price(result.len(), result.explored);
        PricedOption {
            strategy: kind,
            result,
            fare,
        }
    }

    /// Run one search and check its route. A broken route is reported and
    /// replaced with "no route" so it can never be sold.
    fn run_checked<S: Search>(
        &self,
        search: &S,
        kind: StrategyKind,
        start: Position,
        goal: Position,
    ) -> RouteResult {
        let result = search.find(&self.grid, start, goal);
        match result.verify(&self.grid, start, goal) {
            Ok(()) => result,
            Err(v) => {
                contract_failure(kind, v);
                RouteResult::not_found(result.explored)
            }
        }
    }

    fn charge(&mut self, fare: u32) -> Result<(), DispatchError> {
        if self.wallet.try_deduct(fare) {
            return Ok(());
        }
        let balance = self.wallet.balance();
        log::info!("fare {fare} refused, balance {balance}");
        Err(DispatchError::InsufficientFunds { fare, balance })
    }

    fn leave_menu(&mut self, to: DispatchState) -> Result<(), DispatchError> {
        if self.state != DispatchState::Presenting {
            return Err(DispatchError::NotPresenting);
        }
        self.menu = None;
        self.state = to;
        Ok(())
    }
}

/// Report a search that broke its contract. Fails loudly in debug builds.
fn contract_failure(strategy: StrategyKind, violation: ContractViolation) -> DispatchError {
    log::error!("{strategy} broke the route contract: {violation}");
    debug_assert!(false, "{strategy} broke the route contract: {violation}");
    DispatchError::Contract {
        strategy,
        violation,
    }
}

//! **faregrid-dispatch**: prices routes and sells them.
//!
//! A [`Dispatcher`] owns the [`Grid`](faregrid_core::Grid) and runs every
//! search strategy for a request, prices each route with [`FareConfig`], and
//! presents the result as an [`Evaluation`] menu. Committing an option
//! charges a [`Wallet`] once and hands the route's steps to a
//! [`MovementActor`]. [`Dispatcher::quick_route`] does the same with a
//! single strategy and no menu.
//!
//! ```
//! use faregrid_core::{Grid, Position};
//! use faregrid_dispatch::{Dispatcher, Purse, StepQueue, Wallet};
//!
//! let grid = Grid::parse("....\n.##.\n....").unwrap();
//! let mut d = Dispatcher::with_defaults(grid, Purse::default(), StepQueue::new());
//!
//! let menu = d.evaluate(Position::new(0, 0), Position::new(2, 3));
//! let (index, _) = menu.cheapest().unwrap();
//! let bought = d.commit(index).unwrap();
//! assert_eq!(d.wallet().balance(), 500 - bought.fare);
//! ```

mod actor;
mod config;
mod dispatcher;
mod error;
mod fare;
mod option;
mod wallet;

pub use actor::{MovementActor, StepQueue};
pub use config::{DEFAULT_TILE_SIZE, DispatchConfig, SearchConfig};
pub use dispatcher::{DispatchState, Dispatcher, Purchase, Selection};
pub use error::{ConfigError, DispatchError, Endpoint};
pub use fare::{Fare, FareConfig};
pub use option::{Evaluation, PricedOption, READY};
pub use wallet::{DEFAULT_BALANCE, Purse, Wallet};

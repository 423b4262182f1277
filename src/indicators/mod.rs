//! Pure indicator functions over closing-price series.

pub mod momentum;
pub mod trend;
pub mod volatility;

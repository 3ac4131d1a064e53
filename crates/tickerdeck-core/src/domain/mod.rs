mod symbol;
mod timeframe;
mod trading_date;

pub use symbol::Symbol;
pub use timeframe::Timeframe;
pub use trading_date::TradingDate;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Key under which the portfolio snapshot is persisted
pub const PORTFOLIO_STORAGE_KEY: &str = "carteira.portfolio";

/// Graham number multiplier (P/E 15 × P/B 1.5)
pub const GRAHAM_MULTIPLIER: Decimal = dec!(22.5);

/// Required dividend yield for the Bazin fair price
pub const BAZIN_REQUIRED_YIELD: Decimal = dec!(0.06);

/// Number of trailing annual dividends considered by the Bazin model
pub const BAZIN_HISTORY_YEARS: usize = 5;

/// Discount at or below which a position is flagged as a strong buy
pub const DEFAULT_STRONG_DISCOUNT_PCT: Decimal = dec!(-15);

/// Premium above which a position is flagged as expensive
pub const DEFAULT_STRONG_PREMIUM_PCT: Decimal = dec!(15);

/// USD -> BRL rate used until a configured rate is supplied
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(6.05);

/// Sector bucket for positions without a sector label
pub const OTHER_SECTOR: &str = "Other";

/// Number of asset classes that receive a share of a contribution
pub const CONTRIBUTION_SPLIT_CLASSES: usize = 2;

/// Distributions per year assumed for income funds
pub const INCOME_FUND_DISTRIBUTIONS_PER_YEAR: Decimal = dec!(12);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Most recent months with income averaged by the dividend projection
pub const DIVIDEND_PROJECTION_MONTHS: usize = 6;

/// Upper bound for any quantity, price or monetary input. Larger values are
/// clamped so products of two inputs stay far from the Decimal range.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Largest accepted USD -> BRL exchange rate
pub const MAX_EXCHANGE_RATE: Decimal = dec!(1_000);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::positions_model::{EquityRow, FixedIncomeRow, IncomeFundRow, PositionTotals, PositionView};
use crate::constants::INCOME_FUND_DISTRIBUTIONS_PER_YEAR;
use crate::fx::{Currency, ExchangeRate};
use crate::holdings::{EquityPosition, FixedIncomeHolding, IncomeFundPosition};
use crate::utils::product;
use crate::valuation::{
    discount_premium, fair_value_breakdown, fx_adjusted_return_pct, profit_loss, return_pct,
    yield_on_cost, IndicatorThresholds,
};

/// Historical rates are not tracked; the domestic return of a foreign
/// position assumes a flat exchange rate.
const UNTRACKED_FX_CHANGE_PCT: Decimal = Decimal::ZERO;

pub fn enrich_equity(
    position: &EquityPosition,
    thresholds: &IndicatorThresholds,
    exchange_rate: ExchangeRate,
) -> EquityRow {
    let fair_value = fair_value_breakdown(position);
    let discount = discount_premium(position.current_price, fair_value.fair_price);
    let market_value = position.market_value();
    let return_pct = return_pct(position.current_price, position.average_cost);
    let domestic_return_pct = match position.currency {
        Currency::Brl => return_pct,
        Currency::Usd => fx_adjusted_return_pct(return_pct, UNTRACKED_FX_CHANGE_PCT),
    };

    EquityRow {
        ticker: position.ticker.clone(),
        name: position.name.clone(),
        sector: position.sector.clone(),
        broker: position.broker.clone(),
        currency: position.currency,
        security_type: position.security_type,
        quantity: position.quantity,
        average_cost: position.average_cost,
        current_price: position.current_price,
        cost: position.cost_basis(),
        market_value,
        market_value_domestic: exchange_rate.to_domestic(market_value, position.currency),
        fair_value,
        discount_premium: discount,
        indicator: thresholds.classify(discount),
        return_pct,
        domestic_return_pct,
        profit_loss: profit_loss(
            position.quantity,
            position.current_price,
            position.average_cost,
        ),
    }
}

pub fn enrich_income_fund(fund: &IncomeFundPosition) -> IncomeFundRow {
    let annual_income_per_share = product(fund.last_distribution, INCOME_FUND_DISTRIBUTIONS_PER_YEAR);
    IncomeFundRow {
        ticker: fund.ticker.clone(),
        name: fund.name.clone(),
        sector: fund.sector.clone(),
        broker: fund.broker.clone(),
        quantity: fund.quantity,
        average_cost: fund.average_cost,
        current_price: fund.current_price,
        cost: fund.cost_basis(),
        market_value: fund.market_value(),
        return_pct: return_pct(fund.current_price, fund.average_cost),
        profit_loss: profit_loss(fund.quantity, fund.current_price, fund.average_cost),
        price_to_book: fund.price_to_book,
        dividend_yield_12m: fund.dividend_yield_12m,
        annual_income_per_share,
        yield_on_cost: yield_on_cost(annual_income_per_share, fund.average_cost),
        monthly_income: product(fund.quantity, fund.last_distribution),
    }
}

pub fn enrich_fixed_income(holding: &FixedIncomeHolding, today: NaiveDate) -> FixedIncomeRow {
    FixedIncomeRow {
        id: holding.id.clone(),
        title: holding.title.clone(),
        instrument_type: holding.instrument_type,
        rate: holding.rate.clone(),
        broker: holding.broker.clone(),
        applied_value: holding.applied_value,
        current_value: holding.current_value,
        gain: holding.current_value.saturating_sub(holding.applied_value),
        return_pct: return_pct(holding.current_value, holding.applied_value),
        application_date: holding.application_date,
        maturity_date: holding.maturity_date,
        days_to_maturity: holding
            .maturity_date
            .map(|maturity| (maturity - today).num_days()),
    }
}

/// Sums `(cost, market_value)` pairs into view totals.
pub fn position_totals<I>(items: I) -> PositionTotals
where
    I: IntoIterator<Item = (Decimal, Decimal)>,
{
    let (cost, market_value) = items
        .into_iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(c, m), (cost, value)| {
            (c.saturating_add(cost), m.saturating_add(value))
        });
    PositionTotals {
        cost,
        market_value,
        profit_loss: market_value.saturating_sub(cost),
        return_pct: return_pct(market_value, cost),
    }
}

pub fn equity_view(rows: Vec<EquityRow>) -> PositionView<EquityRow> {
    let totals = position_totals(rows.iter().map(|r| (r.cost, r.market_value)));
    PositionView { rows, totals }
}

pub fn income_fund_view(rows: Vec<IncomeFundRow>) -> PositionView<IncomeFundRow> {
    let totals = position_totals(rows.iter().map(|r| (r.cost, r.market_value)));
    PositionView { rows, totals }
}

pub fn fixed_income_view(rows: Vec<FixedIncomeRow>) -> PositionView<FixedIncomeRow> {
    let totals = position_totals(rows.iter().map(|r| (r.applied_value, r.current_value)));
    PositionView { rows, totals }
}

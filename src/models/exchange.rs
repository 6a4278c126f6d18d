use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::rc::Rc;

use super::error::AppError;

/// Display currencies offered by the header selector.
/// Rates are always quoted relative to EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Try,
    Gbp,
    Rub,
}

impl Currency {
    /// Returns the ISO 4217 code used as key in the rate tables.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Try => "TRY",
            Self::Gbp => "GBP",
            Self::Rub => "RUB",
        }
    }

    /// Returns a human-readable name of the currency.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eur => "Euro",
            Self::Usd => "US Dollar",
            Self::Try => "Turkish Lira",
            Self::Gbp => "Pound Sterling",
            Self::Rub => "Ruble",
        }
    }

    /// All selectable currencies.
    pub fn all() -> &'static [Self] {
        &[Self::Eur, Self::Usd, Self::Try, Self::Gbp, Self::Rub]
    }

    /// Currencies listed in the rates panel, in display order.
    pub fn panel() -> &'static [Self] {
        &[Self::Usd, Self::Try, Self::Gbp, Self::Rub]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "TRY" => Ok(Self::Try),
            "GBP" => Ok(Self::Gbp),
            "RUB" => Ok(Self::Rub),
            _ => Err(AppError::ConfigError(format!("Invalid currency code: {s}"))),
        }
    }
}

/// Payload of the exchange-rate endpoint. Replaced wholesale on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExchangeSnapshot {
    /// Units of each currency per 1 EUR
    #[serde(default, deserialize_with = "null_as_default")]
    pub rates: HashMap<String, f64>,

    /// Recent rates per currency, oldest first
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: HashMap<String, Vec<f64>>,

    #[serde(default)]
    pub date: Option<String>,

    /// Official central bank selling rates, in TRY per unit
    #[serde(default)]
    pub tcmb: Option<HashMap<String, Option<f64>>>,

    #[serde(default)]
    pub tcmb_date: Option<String>,
}

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One line of the rates panel
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub currency: Currency,
    pub per_eur: f64,
    pub in_try: f64,
    pub history: Vec<f64>,
}

impl ExchangeSnapshot {
    pub fn rate_for(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Eur => Some(1.0),
            other => self.rates.get(other.code()).copied(),
        }
    }

    /// TRY needed to buy one unit of `currency`.
    ///
    /// Prefers the official rate; otherwise crosses the EUR rates, treating
    /// missing or zero rates as 1.
    pub fn selling_rate_in_try(&self, currency: Currency) -> f64 {
        if currency == Currency::Try {
            return 1.0;
        }

        let official = self
            .tcmb
            .as_ref()
            .and_then(|t| t.get(currency.code()).copied().flatten())
            .filter(|v| *v != 0.0);
        if let Some(rate) = official {
            return rate;
        }

        let non_zero = |code: &str| {
            self.rates
                .get(code)
                .copied()
                .filter(|v| *v != 0.0)
                .unwrap_or(1.0)
        };
        non_zero(Currency::Try.code()) / non_zero(currency.code())
    }

    pub fn panel_rows(&self) -> Vec<RateRow> {
        Currency::panel()
            .iter()
            .filter_map(|&currency| {
                let per_eur = self.rates.get(currency.code()).copied()?;
                Some(RateRow {
                    currency,
                    per_eur,
                    in_try: self.selling_rate_in_try(currency),
                    history: self
                        .history
                        .get(currency.code())
                        .cloned()
                        .unwrap_or_default(),
                })
            })
            .collect()
    }

    pub fn last_updated_display(&self) -> Option<String> {
        self.date.as_deref().map(format_timestamp)
    }

    pub fn tcmb_date_display(&self) -> Option<String> {
        self.tcmb_date.as_deref().map(format_tcmb_date)
    }
}

/// Formats an API timestamp for display; unparseable input is shown as-is.
fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

/// The official bulletin uses dd.MM.yyyy; anything else goes through [`format_timestamp`].
fn format_tcmb_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%d.%m.%Y") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => format_timestamp(raw),
    }
}

/// Last successfully fetched snapshot, if any
#[derive(Clone, PartialEq, Debug)]
pub enum ExchangeState {
    Loading,
    Loaded(Rc<ExchangeSnapshot>),
}

impl ExchangeState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&Rc<ExchangeSnapshot>> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            Self::Loading => None,
        }
    }

    /// Folds a fetch outcome into the state. Failures keep what was there.
    pub fn with_fetch_result(self, result: Result<ExchangeSnapshot, AppError>) -> Self {
        match result {
            Ok(snapshot) => Self::Loaded(Rc::new(snapshot)),
            Err(_) => self,
        }
    }
}

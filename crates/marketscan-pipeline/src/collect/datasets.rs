//! Built-in reference datasets for indicators and publication trends.

use chrono::NaiveDate;
use marketscan_core::types::{EconomicIndicators, ScrapedTrends};
use marketscan_core::{Error, Result};

const ECONOMIC_INDICATORS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/economic_indicators.json"
));

const SCRAPED_TRENDS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/scraped_trends.json"
));

/// Macroeconomic and market indicators, dated `today`.
pub fn economic_indicators(today: NaiveDate) -> Result<EconomicIndicators> {
    let mut data: EconomicIndicators = serde_json::from_str(ECONOMIC_INDICATORS_JSON)
        .map_err(|e| Error::json(e, "data/economic_indicators.json"))?;
    data.data_date = today.format("%Y-%m-%d").to_string();
    Ok(data)
}

/// Publication trends and market mentions, dated `today`.
pub fn scraped_trends(today: NaiveDate) -> Result<ScrapedTrends> {
    let mut data: ScrapedTrends = serde_json::from_str(SCRAPED_TRENDS_JSON)
        .map_err(|e| Error::json(e, "data/scraped_trends.json"))?;
    data.scraped_date = today.format("%Y-%m-%d").to_string();
    Ok(data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use marketscan_core::types::{DOMESTIC_INVESTMENT, GDP_GROWTH, GrowthPotential};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    #[test]
    fn test_economic_indicators_shape() {
        let data = economic_indicators(today()).unwrap();
        assert_eq!(data.data_date, "2024-05-31");
        assert_eq!(data.economic_indicators.len(), 6);
        for indicator in data.economic_indicators.values() {
            assert_eq!(indicator.data.len(), 8, "{}", indicator.name);
        }
        let gdp = &data.economic_indicators[GDP_GROWTH];
        assert_eq!(gdp.data["India"], 6.7);
        assert_eq!(gdp.growth_sectors.len(), 4);
        let investment = &data.economic_indicators[DOMESTIC_INVESTMENT];
        assert_eq!(investment.hot_investment_areas[0], "Green Technology");

        let markets = &data.market_indicators.underserved_markets.data;
        assert_eq!(markets.len(), 8);
        assert_eq!(markets[0].market, "Rural Healthcare Technology");
        assert_eq!(markets[4].growth_potential, GrowthPotential::Medium);
        assert_eq!(data.market_indicators.emerging_technologies.data.len(), 6);
    }

    #[test]
    fn test_scraped_trends_shape() {
        let data = scraped_trends(today()).unwrap();
        assert_eq!(data.scraped_date, "2024-05-31");
        assert_eq!(data.websites.len(), 5);
        assert_eq!(data.trends.len(), 5);
        assert!(data.trends.iter().all(|site| site.trends.len() == 3));
        assert_eq!(data.underserved_market_mentions.len(), 7);
        assert_eq!(data.underserved_market_mentions[3].mention_count, 24);
    }
}
